use anyhow::Result;
use fault_demo::{BufferedConsole, CapturingSink, DemoError, DemoRunner, Scenario};
use tempfile::TempDir;

#[test]
fn test_scenario_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("scenario.toml");
    std::fs::write(
        &path,
        r#"
dividend = 20
divisor = 4
values = [10, 20, 30, 40]
index = 3
text = "scenario"
marks = 100
"#,
    )?;

    let scenario = Scenario::from_file(&path)?;
    assert_eq!(scenario.values, vec![10, 20, 30, 40]);

    let mut console = BufferedConsole::new();
    let mut sink = CapturingSink::new();
    let report = DemoRunner::new(&mut console, &mut sink, scenario).run();

    assert_eq!(report.failures_contained, 0);
    assert!(console.contains("Division result: 5"));
    assert!(console.contains("Array element at index 3: 40"));
    assert!(console.contains("String length: 8"));
    assert!(console.contains("Marks 100 are valid."));
    Ok(())
}

#[test]
fn test_env_substitution() -> Result<()> {
    std::env::set_var("FAULT_DEMO_TEST_MARKS", "42");
    let scenario = Scenario::from_toml_str("marks = ${FAULT_DEMO_TEST_MARKS}")?;
    assert_eq!(scenario.marks, 42);
    Ok(())
}

#[test]
fn test_missing_file() {
    let err = Scenario::from_file("/definitely/not/here/scenario.toml").unwrap_err();
    assert!(matches!(err, DemoError::IoError(_)));
    assert!(err.user_friendly_message().contains("Could not read"));
}

#[test]
fn test_malformed_toml() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("broken.toml");
    std::fs::write(&path, "divisor = = 3")?;

    let err = Scenario::from_file(&path).unwrap_err();
    assert!(matches!(err, DemoError::ParseError(_)));
    assert!(err.recovery_suggestion().contains("--scenario"));
    Ok(())
}
