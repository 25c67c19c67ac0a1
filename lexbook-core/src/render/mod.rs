//! AsciiDoc rendering of entries and sections.

mod glossary;
mod output;
mod word_lists;

pub use glossary::GlossaryRenderer;
pub use word_lists::{WordList, WordListGenerator, WrittenList};

use crate::anchor::anchor_id;
use crate::entry::GlossaryEntry;
use crate::markup::format_markers;

/// Marker comment placed under every generated section heading.
pub(crate) const GENERATED_LINE: &str = "// Generated by lexbook - do not edit";

/// Options shared by the section renderers.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit an `[[anchor]]` before each term. Word lists disable this so a
    /// book assembling all fragments defines each anchor id exactly once.
    pub anchors: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { anchors: true }
    }
}

/// Render a section: heading, marker comment, then one labeled-list item per
/// entry, all separated by blank lines. Ends with a single trailing newline.
fn render_section<'a, I>(title: &str, entries: I, options: &RenderOptions) -> String
where
    I: IntoIterator<Item = &'a GlossaryEntry>,
{
    let mut blocks = vec![format!("== {title}"), GENERATED_LINE.to_string()];
    blocks.extend(entries.into_iter().map(|entry| entry.to_adoc(options)));

    let mut section = blocks.join("\n\n");
    section.push('\n');
    section
}

impl GlossaryEntry {
    /// Render the entry as one AsciiDoc labeled-list item.
    ///
    /// The term line carries the uppercased headword plus any metadata; the
    /// body holds the formatted definition and the trailing reference lines
    /// (opposite, alternative translations, see-also). Every body line that
    /// another body line follows ends with the ` +` hard-break marker.
    pub fn to_adoc(&self, options: &RenderOptions) -> String {
        let mut lines = vec![self.term_line(options)];
        lines.extend(self.body_lines());

        let last = lines.len() - 1;
        for (i, line) in lines.iter_mut().enumerate() {
            if i > 0 && i < last {
                line.push_str(" +");
            }
        }
        lines.join("\n")
    }

    fn term_line(&self, options: &RenderOptions) -> String {
        let mut term = String::new();
        if options.anchors {
            term.push_str(&format!("[[{}]]", self.anchor_id()));
        }
        term.push_str(&self.word().to_uppercase());

        for part in self.metadata_parts() {
            term.push(' ');
            term.push_str(&part);
        }
        term.push_str("::");
        term
    }

    fn metadata_parts(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(plural) = self.plural() {
            parts.push(format!("(pl. {plural})"));
        }
        if let Some(origin) = self.origin() {
            match self.origin_word() {
                Some(origin_word) => {
                    parts.push(format!("({origin} _{}_)", origin_word.to_uppercase()));
                }
                None => parts.push(format!("({origin})")),
            }
        }
        if let Some(pos) = self.part_of_speech() {
            parts.push(format!("({pos})"));
        }
        if let Some(pron) = self.pronunciation() {
            parts.push(format!("/{pron}/"));
        }
        for tag in self.tags() {
            if tag == "new" {
                parts.push("[new word]".to_string());
            } else {
                parts.push(format!("[{tag}]"));
            }
        }
        parts
    }

    fn body_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.definition().is_empty() {
            lines.push(format_markers(self.definition()));
        }
        if let Some(opposite) = self.opposite() {
            lines.push(format!("Opp. **{}**", opposite.to_uppercase()));
        }
        if !self.also_translated().is_empty() {
            let alternatives = self
                .also_translated()
                .iter()
                .map(|word| format!("**{}**", word.to_uppercase()))
                .collect::<Vec<_>>()
                .join(" and ");
            lines.push(format!("(also transl. {alternatives})"));
        }
        if !self.cross_references().is_empty() {
            let refs = self
                .cross_references()
                .iter()
                .map(|word| format!("xref:{}[**{}**]", anchor_id(word), word.to_uppercase()))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("See also: {refs}"));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::RawRecord;

    fn entry(raw: RawRecord) -> GlossaryEntry {
        GlossaryEntry::from_record(raw).unwrap()
    }

    fn word(word: &str, definition: &str) -> RawRecord {
        RawRecord {
            word: Some(word.to_string()),
            definition: definition.to_string(),
            ..RawRecord::default()
        }
    }

    #[test]
    fn test_plain_item() {
        let item = entry(word("Aspire", "To long for eagerly.")).to_adoc(&RenderOptions::default());
        assert_eq!(item, "[[aspire]]ASPIRE::\nTo long for eagerly.");
    }

    #[test]
    fn test_item_without_anchor() {
        let item = entry(word("Aspire", "To long for eagerly."))
            .to_adoc(&RenderOptions { anchors: false });
        assert_eq!(item, "ASPIRE::\nTo long for eagerly.");
    }

    #[test]
    fn test_item_with_empty_definition_is_term_only() {
        let item = entry(word("Aspire", "")).to_adoc(&RenderOptions::default());
        assert_eq!(item, "[[aspire]]ASPIRE::");
    }

    #[test]
    fn test_definition_markers_are_formatted() {
        let item =
            entry(word("Arcanum", "A _secret_; |mystery|.")).to_adoc(&RenderOptions::default());
        assert_eq!(item, "[[arcanum]]ARCANUM::\nA _secret_; **MYSTERY**.");
    }

    #[test]
    fn test_full_metadata_and_reference_lines() {
        let raw = RawRecord {
            plural: Some("arcana".to_string()),
            origin: Some("L.".to_string()),
            origin_word: Some("arcanum".to_string()),
            part_of_speech: Some("n.".to_string()),
            pronunciation: Some("ar-KAY-num".to_string()),
            tags: vec!["archaic".to_string()],
            opposite: Some("Revelation".to_string()),
            also_translated: vec!["Hidden Thing".to_string()],
            cross_references: vec!["Mystery".to_string()],
            ..word("Arcanum", "A secret; |mystery|.")
        };

        let item = entry(raw).to_adoc(&RenderOptions::default());
        assert_eq!(
            item,
            "[[arcanum]]ARCANUM (pl. arcana) (L. _ARCANUM_) (n.) /ar-KAY-num/ [archaic]::\n\
             A secret; **MYSTERY**. +\n\
             Opp. **REVELATION** +\n\
             (also transl. **HIDDEN THING**) +\n\
             See also: xref:mystery[**MYSTERY**]"
        );
    }

    #[test]
    fn test_origin_without_origin_word() {
        let raw = RawRecord {
            origin: Some("Gr.".to_string()),
            ..word("Agape", "Selfless love.")
        };
        let item = entry(raw).to_adoc(&RenderOptions::default());
        assert_eq!(item, "[[agape]]AGAPE (Gr.)::\nSelfless love.");
    }

    #[test]
    fn test_new_tag_displays_as_new_word() {
        let raw = RawRecord {
            tags: vec!["new".to_string()],
            ..word("Blog", "An online journal.")
        };
        let item = entry(raw).to_adoc(&RenderOptions::default());
        assert_eq!(item, "[[blog]]BLOG [new word]::\nAn online journal.");
    }

    #[test]
    fn test_multiple_cross_references_joined() {
        let raw = RawRecord {
            cross_references: vec!["Mercy".to_string(), "Loving Kindness".to_string()],
            ..word("Grace", "Unmerited favor.")
        };
        let item = entry(raw).to_adoc(&RenderOptions::default());
        assert_eq!(
            item,
            "[[grace]]GRACE::\nUnmerited favor. +\n\
             See also: xref:mercy[**MERCY**], xref:loving-kindness[**LOVING KINDNESS**]"
        );
    }

    #[test]
    fn test_also_translated_joined_with_and() {
        let raw = RawRecord {
            also_translated: vec!["Steadfast Love".to_string(), "Mercy".to_string()],
            ..word("Hesed", "Covenant loyalty.")
        };
        let item = entry(raw).to_adoc(&RenderOptions::default());
        assert_eq!(
            item,
            "[[hesed]]HESED::\nCovenant loyalty. +\n\
             (also transl. **STEADFAST LOVE** and **MERCY**)"
        );
    }

    #[test]
    fn test_reference_lines_without_definition() {
        let raw = RawRecord {
            opposite: Some("Vice".to_string()),
            ..word("Virtue", "")
        };
        let item = entry(raw).to_adoc(&RenderOptions::default());
        assert_eq!(item, "[[virtue]]VIRTUE::\nOpp. **VICE**");
    }

    #[test]
    fn test_section_layout() {
        let entries = vec![
            entry(word("Aspire", "To long for eagerly.")),
            entry(word("Zeal", "Ardent interest in pursuit of something.")),
        ];
        let section = render_section("Glossary", &entries, &RenderOptions::default());
        assert_eq!(
            section,
            "== Glossary\n\n\
             // Generated by lexbook - do not edit\n\n\
             [[aspire]]ASPIRE::\nTo long for eagerly.\n\n\
             [[zeal]]ZEAL::\nArdent interest in pursuit of something.\n"
        );
    }

    #[test]
    fn test_empty_section_is_heading_and_marker_only() {
        let section = render_section("New Words", &[], &RenderOptions::default());
        assert_eq!(section, "== New Words\n\n// Generated by lexbook - do not edit\n");
    }
}
