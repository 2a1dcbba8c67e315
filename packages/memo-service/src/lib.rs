mod error;
mod help;

pub use error::{Error, Result};

use std::{future::Future, pin::Pin, sync::Arc};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use memo_config::Config;
use memo_domain::{Memo, Outcome, Parser};
use memo_store::Grafana;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Destination for finished memos.
pub trait AnnotationStore
where
	Self: Send + Sync,
{
	fn save<'a>(&'a self, memo: &'a Memo) -> BoxFuture<'a, Result<()>>;

	fn health_check(&self) -> BoxFuture<'_, Result<()>>;
}

/// A chat message as delivered by a transport.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncomingMessage {
	pub text: String,
	#[serde(default)]
	pub author: Option<String>,
	#[serde(default)]
	pub channel: Option<String>,
}

/// What the transport should do after a message has been handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Reply {
	/// Not addressed to the bot. Say nothing.
	Ignored,
	Help { text: String },
	Saved { memo: Memo },
	Failed { reason: String },
}

pub struct MemoService {
	parser: Parser,
	store: Arc<dyn AnnotationStore>,
	base_tags: Vec<String>,
	help: String,
}
impl MemoService {
	pub fn new(cfg: &Config) -> Result<Self> {
		let store = Grafana::new(&cfg.store)?;

		Self::with_store(cfg, Arc::new(store))
	}

	pub fn with_store(cfg: &Config, store: Arc<dyn AnnotationStore>) -> Result<Self> {
		Ok(Self {
			parser: Parser::from_config(&cfg.parser)?,
			store,
			base_tags: cfg.store.base_tags.clone(),
			help: help::help_text(&cfg.parser.trigger),
		})
	}

	pub async fn handle(&self, message: IncomingMessage, now: OffsetDateTime) -> Reply {
		let parsed = match self.parser.parse(&message.text, now) {
			Ok(Outcome::Memo(memo)) => memo,
			Ok(Outcome::NotForUs) => return Reply::Ignored,
			Err(err) => {
				tracing::debug!(error = %err, author = ?message.author, "Replying with help.");

				return Reply::Help { text: self.help.clone() };
			},
		};
		let memo = Memo {
			timestamp: parsed.timestamp,
			description: parsed.description,
			tags: self.annotation_tags(&message, parsed.tags),
		};

		match self.store.save(&memo).await {
			Ok(()) => {
				tracing::info!(tags = memo.tags.len(), "Memo saved.");

				Reply::Saved { memo }
			},
			Err(err) => {
				tracing::error!(error = %err, "Failed to save memo.");

				Reply::Failed { reason: err.to_string() }
			},
		}
	}

	pub async fn health_check(&self) -> Result<()> {
		self.store.health_check().await
	}

	fn annotation_tags(&self, message: &IncomingMessage, memo_tags: Vec<String>) -> Vec<String> {
		let mut tags = self.base_tags.clone();

		if let Some(author) = message.author.as_deref().filter(|author| !author.trim().is_empty()) {
			tags.push(format!("author:{}", author.trim()));
		}
		if let Some(channel) = message.channel.as_deref().filter(|chan| !chan.trim().is_empty()) {
			tags.push(format!("chan:{}", channel.trim()));
		}

		tags.extend(memo_tags);

		tags
	}
}

impl AnnotationStore for Grafana {
	fn save<'a>(&'a self, memo: &'a Memo) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move {
			Grafana::save(self, memo).await?;

			Ok(())
		})
	}

	fn health_check(&self) -> BoxFuture<'_, Result<()>> {
		Box::pin(async move {
			Grafana::health_check(self).await?;

			Ok(())
		})
	}
}
