pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to compile the command pattern for trigger {trigger:?}.")]
	CommandPattern { trigger: String, source: regex::Error },
}
