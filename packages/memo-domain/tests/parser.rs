use time::{Duration, OffsetDateTime, UtcOffset, macros::datetime};

use memo_domain::{Memo, Outcome, ParseError, Parser};

const NOW: OffsetDateTime = datetime!(2024-06-01 12:00 UTC);

fn parser() -> Parser {
	Parser::from_config(&memo_config::Parser::default()).expect("Failed to build parser.")
}

fn parse_memo(message: &str) -> Memo {
	match parser().parse(message, NOW).expect("Parse failed.") {
		Outcome::Memo(memo) => memo,
		Outcome::NotForUs => panic!("Expected {message:?} to be parsed as a memo."),
	}
}

#[test]
fn default_timestamp_is_skewed_into_the_past() {
	let memo = parse_memo("memo buy milk");

	assert_eq!(memo.description, "buy milk");
	assert!(memo.tags.is_empty());
	assert_eq!(memo.timestamp, NOW - Duration::seconds(25));
	assert_eq!(memo.timestamp.offset(), UtcOffset::UTC);
}

#[test]
fn relative_duration_is_subtracted_from_now() {
	let memo = parse_memo("memo 10min fed the cat");

	assert_eq!(memo.timestamp, NOW - Duration::minutes(10));
	assert_eq!(memo.description, "fed the cat");
}

#[test]
fn compound_relative_duration_is_consumed() {
	let memo = parse_memo("memo 1d2H deployed v2");

	assert_eq!(memo.timestamp, NOW - Duration::hours(26));
	assert_eq!(memo.description, "deployed v2");
}

#[test]
fn absolute_timestamp_is_used_verbatim() {
	let memo = parse_memo("memo 2024-01-15T10:30:00Z went for a run");

	assert_eq!(memo.timestamp, datetime!(2024-01-15 10:30 UTC));
	assert_eq!(memo.description, "went for a run");
}

#[test]
fn absolute_timestamp_with_offset_is_normalized_to_utc() {
	let memo = parse_memo("memo 2024-01-15T12:30:00+02:00 went for a run");

	assert_eq!(memo.timestamp, datetime!(2024-01-15 10:30 UTC));
	assert_eq!(memo.timestamp.offset(), UtcOffset::UTC);
}

#[test]
fn local_times_without_offset_are_not_timestamps() {
	let memo = parse_memo("memo 2024-01-15T10:30:00 went for a run");

	assert_eq!(memo.timestamp, NOW - Duration::seconds(25));
	assert_eq!(memo.description, "2024-01-15T10:30:00 went for a run");
}

#[test]
fn trailing_tag_is_extracted() {
	let memo = parse_memo("memo did laundry home:chores");

	assert_eq!(memo.description, "did laundry");
	assert_eq!(memo.tags, vec!["home:chores".to_string()]);
}

#[test]
fn multiple_tags_keep_message_order() {
	let memo = parse_memo("memo fixed bug work:backend urgent:yes");

	assert_eq!(memo.description, "fixed bug");
	assert_eq!(memo.tags, vec!["work:backend".to_string(), "urgent:yes".to_string()]);
}

#[test]
fn only_trailing_colon_tokens_become_tags() {
	let memo = parse_memo("memo note: call bob at 10:30 today team:ops");

	assert_eq!(memo.description, "note: call bob at 10:30 today");
	assert_eq!(memo.tags, vec!["team:ops".to_string()]);
}

#[test]
fn all_tag_candidates_keep_the_full_description() {
	let memo = parse_memo("memo a:1 b:2");

	assert_eq!(memo.description, "a:1 b:2");
	assert!(memo.tags.is_empty());
}

#[test]
fn all_tag_candidates_after_timestamp_keep_the_full_description() {
	let memo = parse_memo("memo 5min a:1 b:2");

	assert_eq!(memo.timestamp, NOW - Duration::minutes(5));
	assert_eq!(memo.description, "a:1 b:2");
	assert!(memo.tags.is_empty());
}

#[test]
fn timestamp_only_command_has_empty_description() {
	let memo = parse_memo("memo 2h");

	assert_eq!(memo.timestamp, NOW - Duration::hours(2));
	assert_eq!(memo.description, "");
	assert!(memo.tags.is_empty());
}

#[test]
fn tags_are_byte_identical_to_source_tokens() {
	let tokens = ["env:prod", "url:https://example.com/a?b=c", "::", "ünï:cödé"];
	let message = format!("memo rolled back {}", tokens.join(" "));
	let memo = parse_memo(&message);

	assert_eq!(memo.description, "rolled back");
	assert_eq!(memo.tags, tokens.map(String::from).to_vec());
}

#[test]
fn description_never_contains_trigger_or_timestamp() {
	let memo = parse_memo("memo 30s memo done");

	assert_eq!(memo.description, "memo done");
	assert_eq!(memo.timestamp, NOW - Duration::seconds(30));
}

#[test]
fn whitespace_is_collapsed_and_ignored_at_the_edges() {
	let plain = parse_memo("memo fixed bug work:backend");

	for message in [
		"   memo fixed bug work:backend",
		"memo fixed bug work:backend \n\t",
		"\t memo   fixed \t bug   work:backend  ",
	] {
		assert_eq!(parse_memo(message), plain, "message {message:?}");
	}
}

#[test]
fn messages_not_addressed_to_the_bot_are_ignored() {
	let parser = parser();

	for message in [
		"hello everyone",
		"memorandum sent",
		"memo",
		"Memo buy milk",
		"please memo this",
		"bot: hi",
		"deploy: done",
	] {
		assert_eq!(parser.parse(message, NOW), Ok(Outcome::NotForUs), "message {message:?}");
	}
}

#[test]
fn alias_prefixes_without_grammar_are_malformed() {
	let parser = parser();

	for message in ["memo: buy milk", "mrbot: buy milk", "memobot:buy milk", "  mrbot: hi  "] {
		assert_eq!(
			parser.parse(message, NOW),
			Err(ParseError::MalformedCommand),
			"message {message:?}"
		);
	}
}

#[test]
fn custom_aliases_are_injectable() {
	let parser = Parser::new("note", vec!["scribe:".to_string()], Duration::seconds(25))
		.expect("Failed to build parser.");

	assert_eq!(parser.parse("scribe: hi", NOW), Err(ParseError::MalformedCommand));
	assert_eq!(parser.parse("mrbot: hi", NOW), Ok(Outcome::NotForUs));
	assert!(matches!(parser.parse("note hi", NOW), Ok(Outcome::Memo(_))));
	assert_eq!(parser.parse("memo hi", NOW), Ok(Outcome::NotForUs));
}

#[test]
fn blank_messages_are_empty() {
	let parser = parser();

	assert_eq!(parser.parse("", NOW), Err(ParseError::EmptyMessage));
	assert_eq!(parser.parse(" \n\t ", NOW), Err(ParseError::EmptyMessage));
}

#[test]
fn memo_serializes_timestamp_as_rfc3339() {
	let memo = parse_memo("memo 2024-01-15T10:30:00Z went for a run sport:run");
	let json = serde_json::to_value(&memo).expect("Failed to serialize memo.");

	assert_eq!(
		json,
		serde_json::json!({
			"timestamp": "2024-01-15T10:30:00Z",
			"description": "went for a run",
			"tags": ["sport:run"]
		})
	);

	let decoded: Memo = serde_json::from_value(json).expect("Failed to deserialize memo.");

	assert_eq!(decoded, memo);
}
