use tempfile::TempDir;

use crate::helpers::run_check;

#[test]
fn test_json_output() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("app.js"), "eval(userInput);\n")?;

    let output = run_check(directory.path(), &[".", "--output-format", "json"]);
    output.assert_code(1);

    let parsed: serde_json::Value = serde_json::from_str(&output.stdout)?;
    let violations = parsed.as_array().expect("expected a JSON array");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["message"]["name"], "no_eval");

    Ok(())
}

#[test]
fn test_json_output_has_no_summary() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("app.js"), "eval(userInput);\n")?;

    let output = run_check(directory.path(), &[".", "--output-format", "json"]);
    output.assert_stdout_not_contains("Found 1 error.");

    Ok(())
}

#[test]
fn test_json_output_when_clean() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("app.js"), "const x = 1;\n")?;

    let output = run_check(directory.path(), &[".", "--output-format", "json"]);
    output.assert_code(0);

    let parsed: serde_json::Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(parsed.as_array().map(Vec::len), Some(0));

    Ok(())
}

#[test]
fn test_concise_output() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(
        directory.path().join("app.js"),
        "const x = 1;\neval(userInput);\n",
    )?;

    let output = run_check(directory.path(), &[".", "--output-format", "concise"]);
    output
        .assert_code(1)
        .assert_stdout_contains("app.js:2:")
        .assert_stdout_contains("no_eval")
        .assert_stdout_contains("Found 1 error.");

    Ok(())
}
