use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const UNSORTED: &str = r#"{"b": 1, "a": {"d": 2, "c": 3}}"#;

const SORTED: &str = r#"{
    "a": {
        "c": 3,
        "d": 2
    },
    "b": 1
}
"#;

#[test]
fn test_sort_prints_to_stdout() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("data.json", UNSORTED)?;

    let output = test.sort_command().arg("data.json").output()?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @r#"
    {
        "a": {
            "c": 3,
            "d": 2
        },
        "b": 1
    }
    "#);
    assert_eq!(test.read_file("data.json")?, UNSORTED);

    Ok(())
}

#[test]
fn test_sort_keeps_non_ascii_and_arrays() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "es.json",
        r#"{"z": ["b", "a"], "ñ": "Frijol Qi", "m": [{"y": true, "x": null}]}"#,
    )?;

    let output = test.sort_command().arg("es.json").output()?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @r#"
    {
        "m": [
            {
                "x": null,
                "y": true
            }
        ],
        "z": [
            "b",
            "a"
        ],
        "ñ": "Frijol Qi"
    }
    "#);

    Ok(())
}

#[test]
fn test_sort_inplace_with_backup() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/es.json", UNSORTED)?;

    let output = test
        .sort_command()
        .args(["i18n/es.json", "--inplace", "--backup"])
        .output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Wrote: i18n/es.json"));
    assert_eq!(test.read_file("i18n/es.json.bak")?, UNSORTED);
    assert_eq!(test.read_file("i18n/es.json")?, SORTED);

    Ok(())
}

#[test]
fn test_sort_inplace_without_backup() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("data.json", UNSORTED)?;

    let output = test
        .sort_command()
        .args(["data.json", "--inplace"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("data.json")?, SORTED);
    assert!(!test.root().join("data.json.bak").exists());

    Ok(())
}

#[test]
fn test_backup_without_inplace_is_ignored() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("data.json", UNSORTED)?;

    let output = test
        .sort_command()
        .args(["data.json", "--backup"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("data.json")?, UNSORTED);
    assert!(!test.root().join("data.json.bak").exists());

    Ok(())
}

#[test]
fn test_sort_twice_is_byte_identical() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "content.json",
        r#"{"Changes": [{"Entries": {"b": "2", "a": "1"}, "Action": "EditData"}], "Format": "2.0.0"}"#,
    )?;

    test.sort_command()
        .args(["content.json", "--inplace"])
        .output()?;
    let first = test.read_file("content.json")?;

    test.sort_command()
        .args(["content.json", "--inplace"])
        .output()?;
    assert_eq!(test.read_file("content.json")?, first);

    Ok(())
}

#[test]
fn test_sort_skips_missing_and_invalid_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("broken.json", "{ not json")?;
    test.write_file("good.json", UNSORTED)?;

    let output = test
        .sort_command()
        .args(["missing.json", "broken.json", "good.json", "--inplace"])
        .output()?;

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("File not found: missing.json"));
    assert!(err.contains("Failed to parse broken.json: "));
    assert!(err.contains("2 file(s) skipped"));

    assert_eq!(test.read_file("broken.json")?, "{ not json");
    assert_eq!(test.read_file("good.json")?, SORTED);

    Ok(())
}

#[test]
fn test_sort_inplace_keeps_number_text() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "numbers.json",
        r#"{"b": 12345678901234567890123, "a": 0.1000000000000000055511151231257827}"#,
    )?;

    let output = test
        .sort_command()
        .args(["numbers.json", "--inplace"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("numbers.json")?,
        r#"{
    "a": 0.1000000000000000055511151231257827,
    "b": 12345678901234567890123
}
"#
    );

    Ok(())
}

#[test]
fn test_sort_requires_paths() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.sort_command().output()?;

    assert!(!output.status.success());

    Ok(())
}
