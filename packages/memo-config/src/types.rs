use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub parser: Parser,
	pub store: Store,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Parser {
	/// Leading word that marks a message as a memo command.
	pub trigger: String,
	/// Bot names users may address with `<alias>:`. Only used to detect malformed commands.
	pub aliases: Vec<String>,
	/// Backward skew applied to messages without an explicit timestamp.
	pub default_skew_secs: u32,
}
impl Parser {
	/// Alias names rendered as the `<alias>:` prefixes the parser matches against.
	pub fn alias_prefixes(&self) -> Vec<String> {
		self.aliases.iter().map(|alias| format!("{alias}:")).collect()
	}
}
impl Default for Parser {
	fn default() -> Self {
		Self {
			trigger: "memo".to_string(),
			aliases: vec!["memo".to_string(), "mrbot".to_string(), "memobot".to_string()],
			default_skew_secs: 25,
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Store {
	/// Grafana API root, e.g. `http://localhost:3000/api/`.
	pub api_url: String,
	pub api_key: String,
	/// Optional PEM client key. Must be paired with `tls_cert`.
	pub tls_key: Option<String>,
	/// Optional PEM client certificate. Must be paired with `tls_key`.
	pub tls_cert: Option<String>,
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
	#[serde(default = "default_base_tags")]
	pub base_tags: Vec<String>,
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_timeout_ms() -> u64 {
	5_000
}

fn default_base_tags() -> Vec<String> {
	vec!["memo".to_string()]
}
