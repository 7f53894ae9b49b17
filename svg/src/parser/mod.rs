//! The path string parser: tokenizer, command interpreter and errors.

mod error;
mod path;
mod stream;

pub use self::error::{ErrorKind, ParseError};
pub use self::path::{parse_path, parse_path_tolerant, PathParser};
pub use self::stream::{Stream, Token};
