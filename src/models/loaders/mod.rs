pub mod document_loader;

pub use document_loader::{load_all_toml_files, load_toml_to_document, MarkerEntry, QuizDocument};
