use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn word_lists_write_fixed_file_names() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("glossary.json"),
        r#"[{"word": "Truth", "definition": "That which accords with order.", "tags": ["archaic"]}]"#,
    )?;

    #[allow(deprecated)]
    Command::cargo_bin("lexbook")?
        .current_dir(dir.path())
        .args(["word-lists", "glossary.json", "lists"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new-words.adoc"))
        .stdout(predicate::str::contains("archaic-words.adoc"));

    let archaic = fs::read_to_string(dir.path().join("lists/archaic-words.adoc"))?;
    assert_eq!(
        archaic,
        "== Archaic Words\n\n\
         // Generated by lexbook - do not edit\n\n\
         TRUTH [archaic]::\nThat which accords with order.\n"
    );

    // The new-words list is still produced, just with no entries.
    let new_words = fs::read_to_string(dir.path().join("lists/new-words.adoc"))?;
    assert_eq!(
        new_words,
        "== New Words\n\n// Generated by lexbook - do not edit\n"
    );

    Ok(())
}

#[test]
fn word_lists_partition_by_tag() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("glossary.json"),
        r#"[
            {"word": "Blog", "definition": "An online journal.", "tags": ["new"]},
            {"word": "Thee", "definition": "You (singular).", "tags": ["archaic"]},
            {"word": "Saudade", "definition": "Longing.", "tags": ["new", "archaic"]},
            {"word": "Plain", "definition": "Untagged."}
        ]"#,
    )?;

    #[allow(deprecated)]
    Command::cargo_bin("lexbook")?
        .current_dir(dir.path())
        .args(["word-lists", "glossary.json", "lists"])
        .assert()
        .success();

    let new_words = fs::read_to_string(dir.path().join("lists/new-words.adoc"))?;
    let archaic = fs::read_to_string(dir.path().join("lists/archaic-words.adoc"))?;

    assert!(new_words.contains("BLOG"));
    assert!(new_words.contains("SAUDADE"));
    assert!(!new_words.contains("THEE"));
    assert!(!new_words.contains("PLAIN"));

    assert!(archaic.contains("THEE"));
    assert!(archaic.contains("SAUDADE"));
    assert!(!archaic.contains("BLOG"));
    assert!(!archaic.contains("PLAIN"));

    Ok(())
}

#[test]
fn word_lists_rerun_is_byte_identical() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("glossary.json"),
        r#"[{"word": "Blog", "definition": "An online journal.", "tags": ["new"]}]"#,
    )?;

    #[allow(deprecated)]
    Command::cargo_bin("lexbook")?
        .current_dir(dir.path())
        .args(["word-lists", "glossary.json", "lists"])
        .assert()
        .success();

    let first_new = fs::read(dir.path().join("lists/new-words.adoc"))?;
    let first_archaic = fs::read(dir.path().join("lists/archaic-words.adoc"))?;

    #[allow(deprecated)]
    Command::cargo_bin("lexbook")?
        .current_dir(dir.path())
        .args(["word-lists", "glossary.json", "lists"])
        .assert()
        .success();

    assert_eq!(fs::read(dir.path().join("lists/new-words.adoc"))?, first_new);
    assert_eq!(
        fs::read(dir.path().join("lists/archaic-words.adoc"))?,
        first_archaic
    );

    Ok(())
}

#[test]
fn word_lists_parse_error_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("glossary.json"),
        r#"[{"definition": "no word"}]"#,
    )?;

    #[allow(deprecated)]
    Command::cargo_bin("lexbook")?
        .current_dir(dir.path())
        .args(["word-lists", "glossary.json", "lists"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Record 0"));

    assert!(!dir.path().join("lists").exists());

    Ok(())
}
