pub mod colors;
pub mod compose;
pub mod templates;
