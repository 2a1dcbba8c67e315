pub(crate) fn help_text(trigger: &str) -> String {
	format!(
		"Sorry, I did not understand that. Usage: `{trigger} [offset|timestamp] <text> [tag:value ...]`.\n\
		 `offset` looks back from now, e.g. `5min`, `2h`, `1d6h`.\n\
		 `timestamp` is RFC 3339 with a zone, e.g. `2024-01-15T10:30:00Z`.\n\
		 Trailing words containing a colon become tags.\n\
		 Example: `{trigger} 10min restarted the api env:prod`."
	)
}
