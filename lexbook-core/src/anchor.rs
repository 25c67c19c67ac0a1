//! Anchor-id derivation from headwords.

use regex::Regex;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

static HYPHEN_RUNS: OnceLock<Regex> = OnceLock::new();

fn hyphen_runs() -> &'static Regex {
    HYPHEN_RUNS.get_or_init(|| Regex::new(r"-+").unwrap())
}

/// Derive the anchor id for a headword.
///
/// The id is the lowercased word with whitespace and underscores turned into
/// hyphens and everything except letters, digits, and hyphens dropped; hyphen
/// runs collapse to one and never lead or trail. Anchor ids are what `[[...]]`
/// anchors and `xref:` targets use, so words differing only in case collide
/// here.
///
/// # Examples
///
/// ```
/// use lexbook_core::anchor_id;
///
/// assert_eq!(anchor_id("A posteriori"), "a-posteriori");
/// assert_eq!(anchor_id("Self-Love"), "self-love");
/// assert_eq!(anchor_id("Agapē"), "agapē");
/// ```
pub fn anchor_id(word: &str) -> String {
    let mapped = word
        .graphemes(true)
        .filter_map(|g| {
            let c = g.chars().next()?;
            if c.is_whitespace() || c == '_' {
                Some("-".to_string())
            } else if c.is_alphanumeric() || c == '-' {
                Some(g.to_lowercase())
            } else {
                None
            }
        })
        .collect::<String>();

    let collapsed = hyphen_runs().replace_all(&mapped, "-");
    collapsed.trim_matches('-').to_string()
}
