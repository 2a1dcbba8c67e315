pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Parser(#[from] memo_domain::Error),
	#[error("Store error: {message}")]
	Store { message: String },
}
impl From<memo_store::Error> for Error {
	fn from(err: memo_store::Error) -> Self {
		Self::Store { message: err.to_string() }
	}
}
