use std::sync::OnceLock;

use regex::Regex;

use super::{replace_token, Step};
use crate::document::Document;

fn time_regex() -> &'static Regex {
    static TIME_RE: OnceLock<Regex> = OnceLock::new();
    TIME_RE.get_or_init(|| Regex::new(r"([0-9]+):([0-5][0-9])").expect("time pattern must compile"))
}

/// An `H:MM` token located in the scan window. Offsets are in chars.
///
/// The hour stays as text: it may be too long for any integer and is only
/// parsed when it is the part being stepped.
#[derive(Debug, PartialEq, Eq)]
struct TimeToken<'a> {
    start: usize,
    end: usize,
    hour_end: usize,
    hour: &'a str,
    minute: u32,
}

/// Hour digits without leading zeros, as they are written back.
fn trim_hour(digits: &str) -> &str {
    match digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    }
}

/// First `H:MM` match whose span contains `caret` (boundaries inclusive).
fn find_time_at(text: &str, caret: usize) -> Option<TimeToken<'_>> {
    let char_pos = |byte: usize| text[..byte].chars().count();
    for caps in time_regex().captures_iter(text) {
        let (Some(whole), Some(hour), Some(minute)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        let start = char_pos(whole.start());
        let end = char_pos(whole.end());
        if start <= caret && caret <= end {
            return Some(TimeToken {
                start,
                end,
                hour_end: char_pos(hour.end()),
                hour: hour.as_str(),
                minute: minute.as_str().parse().ok()?,
            });
        }
    }
    None
}

/// Step the hour (caret in or right after the hour digits) or the minute of
/// the `H:MM` token around the caret.
///
/// Hours floor at 0 and have no ceiling; minutes wrap modulo 60.
pub(super) fn adjust_time<D: Document + ?Sized>(doc: &mut D, step: Step, window: usize) -> bool {
    let before = doc.context_before(window);
    let after = doc.context_after(window);
    let caret = before.chars().count();
    let text = format!("{before}{after}");

    let Some(token) = find_time_at(&text, caret) else {
        return false;
    };

    let in_hour = caret <= token.hour_end;
    let (hour, minute) = if in_hour {
        // an hour too large for u64 is left alone
        let Ok(hour) = token.hour.parse::<u64>() else {
            return false;
        };
        let hour = match step {
            Step::Increment => match hour.checked_add(1) {
                Some(h) => h,
                None => return false,
            },
            Step::Decrement => hour.saturating_sub(1),
        };
        (hour.to_string(), token.minute)
    } else {
        let minute = match step {
            Step::Increment => (token.minute + 1) % 60,
            Step::Decrement => (token.minute + 59) % 60,
        };
        (trim_hour(token.hour).to_string(), minute)
    };

    let minute_text = format!("{minute:02}");
    let new_token = format!("{hour}:{minute_text}");
    replace_token(doc, token.end - caret, token.end - token.start, &new_token);
    if in_hour {
        doc.move_caret(-(minute_text.len() as isize + 1));
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::StringDocument;

    fn run(text: &str, step: Step) -> Option<String> {
        let mut doc = StringDocument::with_caret_marker(text, '|');
        adjust_time(&mut doc, step, 32).then(|| doc.render_with_caret('|'))
    }

    #[test]
    fn minute_increment() {
        assert_eq!(run("meet at 9:0|5", Step::Increment).as_deref(), Some("meet at 9:06|"));
    }

    #[test]
    fn hour_increment_caret_before_colon() {
        assert_eq!(run("meet at 9|:05", Step::Increment).as_deref(), Some("meet at 10|:05"));
    }

    #[test]
    fn caret_at_token_start_edits_hour() {
        assert_eq!(run("|12:30", Step::Decrement).as_deref(), Some("11|:30"));
    }

    #[test]
    fn caret_at_token_end_edits_minute() {
        assert_eq!(run("12:30| pm", Step::Decrement).as_deref(), Some("12:29| pm"));
    }

    #[test]
    fn caret_after_colon_edits_minute() {
        assert_eq!(run("7:|15", Step::Increment).as_deref(), Some("7:16|"));
    }

    #[test]
    fn minute_wraps_without_touching_hour() {
        assert_eq!(run("9:5|9", Step::Increment).as_deref(), Some("9:00|"));
        assert_eq!(run("9:0|0", Step::Decrement).as_deref(), Some("9:59|"));
    }

    #[test]
    fn hour_floor_and_no_ceiling() {
        assert_eq!(run("0|:10", Step::Decrement).as_deref(), Some("0|:10"));
        assert_eq!(run("99|:10", Step::Increment).as_deref(), Some("100|:10"));
        assert_eq!(run("23|:59", Step::Increment).as_deref(), Some("24|:59"));
    }

    #[test]
    fn hour_leading_zero_dropped() {
        assert_eq!(run("09|:00", Step::Increment).as_deref(), Some("10|:00"));
        assert_eq!(run("09|:00", Step::Decrement).as_deref(), Some("8|:00"));
    }

    #[test]
    fn minute_out_of_range_is_no_match() {
        assert_eq!(run("9:6|0", Step::Increment), None);
        assert_eq!(run("9|:5", Step::Increment), None);
    }

    #[test]
    fn caret_outside_token_is_no_match() {
        assert_eq!(run("9:30 and |x", Step::Increment), None);
    }

    #[test]
    fn picks_token_around_caret() {
        assert_eq!(
            run("8:00-9:0|0", Step::Increment).as_deref(),
            Some("8:00-9:01|")
        );
        assert_eq!(
            run("8:0|0-9:00", Step::Increment).as_deref(),
            Some("8:01|-9:00")
        );
    }

    #[test]
    fn multibyte_context() {
        assert_eq!(
            run("会議は１０時、9:4|5から", Step::Increment).as_deref(),
            Some("会議は１０時、9:46|から")
        );
    }

    #[test]
    fn window_clips_context() {
        let mut doc = StringDocument::with_caret_marker("12:3|4", '|');
        // only "3" before and "4" after are visible
        assert!(!adjust_time(&mut doc, Step::Increment, 1));
        assert_eq!(doc.render_with_caret('|'), "12:3|4");
    }

    #[test]
    fn hour_overflow_is_left_alone() {
        let text = "18446744073709551615|:00";
        assert_eq!(run(text, Step::Increment), None);
        assert_eq!(run("99999999999999999999|:00", Step::Increment), None);
    }

    #[test]
    fn minute_edit_with_oversized_hour() {
        assert_eq!(
            run("99999999999999999999:0|0", Step::Decrement).as_deref(),
            Some("99999999999999999999:59|")
        );
        assert_eq!(
            run("18446744073709551616:5|9", Step::Increment).as_deref(),
            Some("18446744073709551616:00|")
        );
    }

    #[test]
    fn minute_edit_normalizes_hour_like_hour_edit() {
        assert_eq!(run("09:0|5", Step::Increment).as_deref(), Some("9:06|"));
        assert_eq!(run("00:1|0", Step::Decrement).as_deref(), Some("0:09|"));
    }

    #[test]
    fn find_prefers_first_containing_match() {
        let token = find_time_at("1:00 2:00", 4).unwrap();
        assert_eq!((token.start, token.end), (0, 4));
    }
}
