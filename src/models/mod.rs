pub mod block;
pub mod fragment;
pub mod line;
pub mod loaders;
pub mod marker;
pub mod question;

pub use block::QuestionBlock;
pub use fragment::{ClassifiedFragment, LineRole};
pub use line::{split_lines, TextLine};
pub use loaders::{load_all_toml_files, load_toml_to_document, QuizDocument};
pub use marker::{MarkerKind, MarkerPayload, MarkerTable, MarkerWarning, TableRows};
pub use question::{
    CorrectAnswer, DraftQuestion, ParseOutcome, QuestionRecord, QuestionType, Rejection,
};
