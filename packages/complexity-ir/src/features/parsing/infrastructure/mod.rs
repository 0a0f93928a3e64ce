//! Parsing infrastructure - lexers and structural extractors

pub mod c_extractor;
pub mod c_lexer;
pub mod cursor;
pub mod item;
pub mod python_extractor;
pub mod python_lexer;

pub use cursor::Cursor;
pub use item::Item;
