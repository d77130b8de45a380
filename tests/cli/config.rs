use anyhow::Result;

use crate::{CliTest, stderr};

#[test]
fn test_missing_config_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.placehold_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("config.yaml"));

    Ok(())
}

#[test]
fn test_config_without_languages() -> Result<()> {
    let test = CliTest::with_config("title: My Site\n")?;
    test.write_file("content/about.md", "About.\n")?;

    let output = test.placehold_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("config.yaml"));
    assert!(err.contains("languages"));
    assert!(!test.root().join("content/about.fr.md").exists());

    Ok(())
}

#[test]
fn test_language_without_disclaimer() -> Result<()> {
    let test = CliTest::with_config("languages:\n  en: {}\n  es: {}\n")?;

    let output = test.placehold_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("'es'"));

    Ok(())
}

#[test]
fn test_config_location_is_required() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--config_location"));

    Ok(())
}
