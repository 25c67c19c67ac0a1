//! CLI command implementations.

pub mod check;
pub mod glossary;
pub mod word_lists;

pub use check::check_dataset;
pub use glossary::render_glossary;
pub use word_lists::render_word_lists;
