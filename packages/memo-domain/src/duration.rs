//! Compact relative durations such as `5min`, `2h` or `1d6h`.

use time::Duration;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Parses one or more `<digits><unit>` pairs with no whitespace in between.
///
/// Units are case-insensitive. A missing unit, an unknown unit, arithmetic overflow or a total of
/// zero all yield `None`.
pub fn parse_relative(token: &str) -> Option<Duration> {
	let lowered = token.to_ascii_lowercase();
	let mut rest = lowered.as_str();
	let mut total: i64 = 0;

	if rest.is_empty() {
		return None;
	}

	while !rest.is_empty() {
		let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());

		if digits_end == 0 {
			return None;
		}

		let magnitude: i64 = rest[..digits_end].parse().ok()?;

		rest = &rest[digits_end..];

		let unit_end = rest.find(|c: char| !c.is_ascii_alphabetic()).unwrap_or(rest.len());
		let unit_seconds = unit_seconds(&rest[..unit_end])?;

		total = total.checked_add(magnitude.checked_mul(unit_seconds)?)?;
		rest = &rest[unit_end..];
	}

	if total == 0 {
		return None;
	}

	Some(Duration::seconds(total))
}

fn unit_seconds(unit: &str) -> Option<i64> {
	let seconds = match unit {
		"s" | "sec" | "secs" | "second" | "seconds" => 1,
		"m" | "min" | "mins" | "minute" | "minutes" => MINUTE,
		"h" | "hour" | "hours" => HOUR,
		"d" | "day" | "days" => DAY,
		"w" | "week" | "weeks" => 7 * DAY,
		"mon" | "month" | "months" => 30 * DAY,
		"y" | "year" | "years" => 365 * DAY,
		_ => return None,
	};

	Some(seconds)
}
