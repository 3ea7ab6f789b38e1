// File: ./src/model/date.rs
//! Due date recognition for free text.
//!
//! Dates stay strings. Two canonical shapes come out of here:
//! `YYYY-MM-DD` for ISO and numeric dates, `D Month` for a day followed by a
//! month name. Calendar correctness is not checked (`31/02/2026` is accepted).
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(20\d{2}-\d{2}-\d{2})\b").expect("invalid ISO date pattern"));

static NUMERIC_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](20\d{2})\b").expect("invalid numeric date pattern")
});

// Full names come before their abbreviations so the longest token is captured.
static DAY_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2})\s*(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec)\b",
    )
    .expect("invalid day-month pattern")
});

/// Returns the first date found in `text`, in canonical form.
///
/// Recognizers run in a fixed order (ISO, numeric, day + month name) and the
/// first one to hit wins, even if a later recognizer would match earlier in
/// the text.
pub fn extract_due_date(text: &str) -> Option<String> {
    parse_iso(text)
        .or_else(|| parse_numeric(text))
        .or_else(|| parse_day_month(text))
}

fn parse_iso(text: &str) -> Option<String> {
    ISO_DATE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn parse_numeric(text: &str) -> Option<String> {
    let caps = NUMERIC_DATE.captures(text)?;
    let day = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let month = caps.get(2)?.as_str().parse::<u32>().ok()?;
    let year = caps.get(3)?.as_str().parse::<u32>().ok()?;
    Some(format!("{:04}-{:02}-{:02}", year, month, day))
}

fn parse_day_month(text: &str) -> Option<String> {
    let caps = DAY_MONTH.captures(text)?;
    let day = caps.get(1)?.as_str();
    let month = title_case(caps.get(2)?.as_str());
    Some(format!("{} {}", day, month))
}

fn title_case(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_normalizes_shouting() {
        assert_eq!(title_case("JAN"), "Jan");
        assert_eq!(title_case("sept"), "Sept");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn iso_beats_day_month_even_when_later_in_text() {
        assert_eq!(
            extract_due_date("3 March or 2026-04-01").as_deref(),
            Some("2026-04-01")
        );
    }
}
