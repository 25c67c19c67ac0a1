//! Inline formatting-marker conversion for definition text.

use regex::{Captures, Regex};
use std::sync::OnceLock;

static EMPHASIZED_KEYWORD: OnceLock<Regex> = OnceLock::new();
static KEYWORD: OnceLock<Regex> = OnceLock::new();

fn emphasized_keyword() -> &'static Regex {
    EMPHASIZED_KEYWORD.get_or_init(|| Regex::new(r"_\|([^|]+)\|_").unwrap())
}

fn keyword() -> &'static Regex {
    KEYWORD.get_or_init(|| Regex::new(r"\|([^|]+)\|").unwrap())
}

/// Convert keyword markers in definition text to AsciiDoc.
///
/// `|word|` marks a keyword reference and becomes bold uppercase
/// (`**WORD**`); `_|word|_` becomes italic bold (`_**WORD**_`). Plain
/// `_italic_` spans are already valid AsciiDoc and pass through untouched.
///
/// # Example
///
/// ```
/// use lexbook_core::format_markers;
///
/// assert_eq!(
///     format_markers("the |lord| said, _verily_"),
///     "the **LORD** said, _verily_"
/// );
/// ```
pub fn format_markers(text: &str) -> String {
    let emphasized = emphasized_keyword().replace_all(text, |caps: &Captures| {
        format!("_**{}**_", caps[1].to_uppercase())
    });
    keyword()
        .replace_all(&emphasized, |caps: &Captures| {
            format!("**{}**", caps[1].to_uppercase())
        })
        .into_owned()
}
