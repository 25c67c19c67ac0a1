//! Dataset validation and summary command.

use anyhow::{Context, Result};
use lexbook_core::{Glossary, UnresolvedReference, WordListGenerator};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ListSummary {
    tag: String,
    file_name: String,
    entries: usize,
}

#[derive(Serialize)]
struct CheckSummary {
    entries: usize,
    lists: Vec<ListSummary>,
    unresolved_references: Vec<UnresolvedReference>,
}

/// Parse and validate the dataset without writing anything.
///
/// Unresolved cross-references are reported as warnings; they never fail
/// the check.
pub fn check_dataset(input: &Path, json: bool) -> Result<()> {
    let glossary =
        Glossary::from_json_file(input).with_context(|| format!("Failed to check {:?}", input))?;

    let lists = WordListGenerator::new()
        .lists()
        .iter()
        .map(|list| ListSummary {
            tag: list.tag.clone(),
            file_name: list.file_name.clone(),
            entries: glossary.tagged(&list.tag).count(),
        })
        .collect();

    let summary = CheckSummary {
        entries: glossary.len(),
        lists,
        unresolved_references: glossary.unresolved_references(),
    };

    if json {
        let payload = serde_json::to_string_pretty(&summary)?;
        println!("{}", payload);
    } else {
        println!("Check complete: {} entries", summary.entries);
        for list in &summary.lists {
            println!("- {} [{}]: {} entries", list.file_name, list.tag, list.entries);
        }
        if summary.unresolved_references.is_empty() {
            println!("All cross-references resolve.");
        } else {
            println!(
                "{} unresolved cross-reference(s):",
                summary.unresolved_references.len()
            );
            for unresolved in &summary.unresolved_references {
                println!(
                    "- \"{}\" references unknown entry \"{}\"",
                    unresolved.word, unresolved.reference
                );
            }
        }
    }

    Ok(())
}
