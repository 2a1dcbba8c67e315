pub mod duration;
pub mod memo;
pub mod parser;
pub mod time_serde;

mod error;

pub use error::{Error, Result};
pub use memo::Memo;
pub use parser::{Outcome, ParseError, Parser};
