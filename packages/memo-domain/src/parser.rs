use regex::Regex;
use time::{Duration, OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};

use crate::{Error, Memo, Result, duration};

/// Tries to read a timestamp from a single token. `None` means the token is not a timestamp.
type TimestampStrategy = fn(&str, OffsetDateTime) -> Option<OffsetDateTime>;

const TIMESTAMP_STRATEGIES: [TimestampStrategy; 2] = [relative_timestamp, absolute_timestamp];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
	#[error("Message has no content.")]
	EmptyMessage,
	#[error("Message is addressed to the bot but could not be understood.")]
	MalformedCommand,
}

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	Memo(Memo),
	/// The message was not addressed to the bot. Callers stay silent.
	NotForUs,
}

enum Addressing<'a> {
	Command(&'a str),
	Malformed,
	NotForUs,
}

/// Turns raw chat messages into [`Memo`]s.
///
/// Parsing is a pure function of the message and the `now` passed in, so one parser can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct Parser {
	command: Regex,
	alias_prefixes: Vec<String>,
	default_skew: Duration,
}
impl Parser {
	/// Builds a parser accepting `<trigger> <body>` commands. `alias_prefixes` are the full
	/// prefixes, colon included, that mark a message as meant for the bot.
	pub fn new(trigger: &str, alias_prefixes: Vec<String>, default_skew: Duration) -> Result<Self> {
		let pattern = format!(r"(?s)^{} (.*)", regex::escape(trigger));
		let command = Regex::new(&pattern)
			.map_err(|source| Error::CommandPattern { trigger: trigger.to_string(), source })?;

		Ok(Self { command, alias_prefixes, default_skew })
	}

	pub fn from_config(cfg: &memo_config::Parser) -> Result<Self> {
		Self::new(
			&cfg.trigger,
			cfg.alias_prefixes(),
			Duration::seconds(i64::from(cfg.default_skew_secs)),
		)
	}

	pub fn parse(&self, message: &str, now: OffsetDateTime) -> Result<Outcome, ParseError> {
		let message = message.trim();

		if message.is_empty() {
			return Err(ParseError::EmptyMessage);
		}

		let body = match self.classify(message) {
			Addressing::Command(body) => body,
			Addressing::Malformed => {
				tracing::debug!(
					text = ?message,
					"Message looks addressed to the bot but does not match the command grammar."
				);

				return Err(ParseError::MalformedCommand);
			},
			Addressing::NotForUs => {
				tracing::trace!(text = ?message, "Message is not for us. Ignoring.");

				return Ok(Outcome::NotForUs);
			},
		};
		let tokens: Vec<&str> = body.split_whitespace().collect();

		if tokens.is_empty() {
			return Err(ParseError::EmptyMessage);
		}

		let (tokens, timestamp) = self.extract_timestamp(&tokens, now);

		Ok(Outcome::Memo(split_tags(tokens, timestamp)))
	}

	fn classify<'a>(&self, message: &'a str) -> Addressing<'a> {
		if let Some(captures) = self.command.captures(message) {
			let body = captures.get(1).map(|m| m.as_str()).unwrap_or_default();

			return Addressing::Command(body);
		}
		if self.alias_prefixes.iter().any(|prefix| message.starts_with(prefix.as_str())) {
			return Addressing::Malformed;
		}

		Addressing::NotForUs
	}

	fn extract_timestamp<'t, 'a>(
		&self,
		tokens: &'t [&'a str],
		now: OffsetDateTime,
	) -> (&'t [&'a str], OffsetDateTime) {
		if let Some((first, rest)) = tokens.split_first() {
			for strategy in TIMESTAMP_STRATEGIES {
				if let Some(timestamp) = strategy(first, now) {
					return (rest, timestamp.to_offset(UtcOffset::UTC));
				}
			}
		}

		(tokens, (now - self.default_skew).to_offset(UtcOffset::UTC))
	}
}

fn relative_timestamp(token: &str, now: OffsetDateTime) -> Option<OffsetDateTime> {
	now.checked_sub(duration::parse_relative(token)?)
}

fn absolute_timestamp(token: &str, _now: OffsetDateTime) -> Option<OffsetDateTime> {
	OffsetDateTime::parse(token, &Rfc3339).ok()
}

fn is_tag_candidate(token: &str) -> bool {
	token.contains(':')
}

// When every token is a tag candidate the whole text stays the description and no tags are taken.
fn split_tags(tokens: &[&str], timestamp: OffsetDateTime) -> Memo {
	let description = tokens.join(" ");
	let mut boundary = tokens.len();

	while boundary > 0 && is_tag_candidate(tokens[boundary - 1]) {
		boundary -= 1;
	}

	if boundary == 0 {
		return Memo { timestamp, description, tags: Vec::new() };
	}

	let (words, tags) = tokens.split_at(boundary);

	Memo {
		timestamp,
		description: words.join(" "),
		tags: tags.iter().map(|tag| tag.to_string()).collect(),
	}
}
