pub mod highlight;
pub mod token;
pub mod tokenizer;
pub mod visibility;

pub use highlight::{parse_highlight, HighlightColor, HighlightSpec, Rgb};
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;
pub use visibility::visible_indices;
