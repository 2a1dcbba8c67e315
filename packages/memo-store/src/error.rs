pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Reqwest(#[from] reqwest::Error),
	#[error(transparent)]
	InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
	#[error("Invalid store URL {url:?}: {message}")]
	InvalidUrl { url: String, message: String },
	#[error("Failed to read TLS material at {path:?}.")]
	ReadTls { path: std::path::PathBuf, source: std::io::Error },
	#[error("Grafana replied with HTTP {status} and body {body}.")]
	UnexpectedStatus { status: u16, body: String },
	#[error("Failed to decode Grafana response: {source}. The body was: {body}")]
	Decode { body: String, source: serde_json::Error },
	#[error("Grafana replied with HTTP {status} and unexpected message {message:?}.")]
	UnexpectedMessage { status: u16, message: String },
}
