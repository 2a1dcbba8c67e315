mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Parser, Service, Store};

use std::{fs, path::Path};

use url::Url;

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}

	let trigger = cfg.parser.trigger.as_str();

	if trigger.is_empty() {
		return Err(Error::Validation { message: "parser.trigger must be non-empty.".to_string() });
	}
	if trigger.chars().any(|c| c.is_whitespace() || c == ':') {
		return Err(Error::Validation {
			message: "parser.trigger must not contain whitespace or colons.".to_string(),
		});
	}
	if cfg.parser.aliases.is_empty() {
		return Err(Error::Validation {
			message: "parser.aliases must contain at least one alias.".to_string(),
		});
	}

	for alias in &cfg.parser.aliases {
		if alias.is_empty() {
			return Err(Error::Validation {
				message: "parser.aliases entries must be non-empty.".to_string(),
			});
		}
		if alias.chars().any(|c| c.is_whitespace() || c == ':') {
			return Err(Error::Validation {
				message: format!(
					"parser.aliases entry {alias:?} must not contain whitespace or colons."
				),
			});
		}
	}

	let api_url = cfg.store.api_url.trim();

	if api_url.is_empty() {
		return Err(Error::Validation { message: "store.api_url must be non-empty.".to_string() });
	}

	let parsed = Url::parse(api_url).map_err(|err| Error::Validation {
		message: format!("store.api_url is not a valid URL: {err}."),
	})?;

	if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
		return Err(Error::Validation {
			message: "store.api_url must be an http:// or https:// URL.".to_string(),
		});
	}
	if cfg.store.api_key.trim().is_empty() {
		return Err(Error::Validation { message: "store.api_key must be non-empty.".to_string() });
	}
	if cfg.store.tls_key.is_some() != cfg.store.tls_cert.is_some() {
		return Err(Error::Validation {
			message: "store.tls_key and store.tls_cert must be set together.".to_string(),
		});
	}
	if cfg.store.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "store.timeout_ms must be greater than zero.".to_string(),
		});
	}

	for tag in &cfg.store.base_tags {
		if tag.trim().is_empty() {
			return Err(Error::Validation {
				message: "store.base_tags entries must be non-empty.".to_string(),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.parser.trigger = cfg.parser.trigger.trim().to_string();

	let mut aliases: Vec<String> = Vec::with_capacity(cfg.parser.aliases.len());

	for alias in &cfg.parser.aliases {
		let alias = alias.trim();

		if !aliases.iter().any(|seen| seen == alias) {
			aliases.push(alias.to_string());
		}
	}

	cfg.parser.aliases = aliases;

	if cfg.store.tls_key.as_deref().map(|key| key.trim().is_empty()).unwrap_or(false) {
		cfg.store.tls_key = None;
	}
	if cfg.store.tls_cert.as_deref().map(|cert| cert.trim().is_empty()).unwrap_or(false) {
		cfg.store.tls_cert = None;
	}
}
