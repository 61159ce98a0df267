use once_cell::sync::Lazy;
use regex::Regex;

static CONTROL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\r\x0B\x0C]").expect("control character pattern"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Clean raw extracted text.
///
/// Non-breaking spaces become spaces, carriage returns and form/vertical feeds are dropped,
/// whitespace runs collapse to one space and curly quotes become ASCII quotes. Idempotent.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = text.replace('\u{a0}', " ");
    let text = CONTROL_CHARS.replace_all(&text, "");
    let text = WHITESPACE_RUN.replace_all(&text, " ");

    text.replace(['\u{201C}', '\u{201D}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'")
        .trim()
        .to_string()
}
