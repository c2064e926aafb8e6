use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::{STATUS_DATE_FORMAT, Status};

/// Leading status name: a lazy run of capitals, hyphens, spaces and `?`
/// closed off by a ` - ` separator or the end of the bracket text.
fn name_regex() -> &'static Regex {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    NAME_REGEX.get_or_init(|| {
        Regex::new(r"^([A-Z?\- ]*?)(\s+-\s+|$)").expect("invalid status name regex")
    })
}

fn separator_regex() -> &'static Regex {
    static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();
    SEPARATOR_REGEX.get_or_init(|| Regex::new(r"\s+-\s+").expect("invalid separator regex"))
}

/// Parses the text found inside a `[...]` status bracket (delimiters
/// already stripped, text already trimmed).
///
/// After the name is split off, the remainder is divided at its *last*
/// ` - ` separator. The trailing segment is only treated as a date if it
/// actually parses as one; otherwise the whole remainder is comment
/// text. This keeps comments free to contain hyphens and ` - ` while a
/// genuine trailing date is still recognized.
pub(crate) fn parse_status(text: &str) -> Status {
    let (name, rest) = match name_regex().captures(text) {
        Some(caps) => {
            let end = caps.get(0).map_or(0, |m| m.end());
            let name = caps.get(1).map_or("", |m| m.as_str());
            (name, &text[end..])
        }
        None => ("", text),
    };

    let status = |comment: &str, date: Option<NaiveDate>| Status {
        name: name.to_string(),
        comment: comment.to_string(),
        date,
    };

    match separator_regex().find_iter(rest).last() {
        None => match NaiveDate::parse_from_str(rest, STATUS_DATE_FORMAT) {
            Ok(date) => status("", Some(date)),
            Err(_) => status(rest, None),
        },
        Some(sep) => match NaiveDate::parse_from_str(&rest[sep.end()..], STATUS_DATE_FORMAT) {
            Ok(date) => status(&rest[..sep.start()], Some(date)),
            // Not a date after all; the separator belongs to the comment.
            Err(_) => status(rest, None),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case::empty("", "", "", None)]
    #[case::comment_only("basic status", "", "basic status", None)]
    #[case::name_only("IN PROGRESS", "IN PROGRESS", "", None)]
    #[case::name_and_comment("IN PROGRESS - basic status", "IN PROGRESS", "basic status", None)]
    #[case::name_and_date("WAITING FOR CUSTOMER - Jan 5, 2020", "WAITING FOR CUSTOMER", "", Some((2020, 1, 5)))]
    #[case::full(
        "WAITING FOR CUSTOMER - waiting to hear from client multi-hyphen-word - Jan 5, 2020",
        "WAITING FOR CUSTOMER",
        "waiting to hear from client multi-hyphen-word",
        Some((2020, 1, 5))
    )]
    #[case::bad_date(
        "WAITING FOR CUSTOMER - waiting to hear from client multi-hyphen-word - Jan 335, 2020",
        "WAITING FOR CUSTOMER",
        "waiting to hear from client multi-hyphen-word - Jan 335, 2020",
        None
    )]
    #[case::padded_day("HOLD - Jun  7, 2020", "HOLD", "", Some((2020, 6, 7)))]
    #[case::date_only("Jan 5, 2020", "", "", Some((2020, 1, 5)))]
    #[case::separators_in_comment(
        "READY - check CI - rerun flaky suite - Feb 10, 2021",
        "READY",
        "check CI - rerun flaky suite",
        Some((2021, 2, 10))
    )]
    #[case::hyphenated_words_without_spaces("follow-up with infra-team", "", "follow-up with infra-team", None)]
    fn parses_bracket_text(
        #[case] input: &str,
        #[case] name: &str,
        #[case] comment: &str,
        #[case] expected: Option<(i32, u32, u32)>,
    ) {
        let parsed = parse_status(input);
        assert_eq!(parsed.name, name);
        assert_eq!(parsed.comment, comment);
        assert_eq!(parsed.date, expected.map(|(y, m, d)| date(y, m, d)));
    }

    #[test]
    fn date_parse_failure_is_not_an_error() {
        // A tail that merely looks date-ish folds back into the comment.
        let parsed = parse_status("STALE - ping again - next Tuesday");
        assert_eq!(parsed.name, "STALE");
        assert_eq!(parsed.comment, "ping again - next Tuesday");
        assert_eq!(parsed.date, None);
    }
}
