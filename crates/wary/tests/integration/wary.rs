use tempfile::TempDir;

use crate::helpers::run_check;

#[test]
fn test_must_pass_path() -> anyhow::Result<()> {
    let directory = TempDir::new()?;

    let output = run_check(directory.path(), &[]);
    output.assert_code(2).assert_stderr_contains("Usage: wary check");

    Ok(())
}

#[test]
fn test_no_js_files() -> anyhow::Result<()> {
    let directory = TempDir::new()?;

    let output = run_check(directory.path(), &["."]);
    output
        .assert_code(0)
        .assert_stdout_contains("No JavaScript files found under the given path(s).");

    Ok(())
}

#[test]
fn test_clean_file() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("app.js"), "const x = 1;\n")?;

    let output = run_check(directory.path(), &["."]);
    output.assert_code(0).assert_stdout_contains("All checks passed!");

    Ok(())
}

#[test]
fn test_single_violation() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("app.js"), "eval(userInput);\n")?;

    let output = run_check(directory.path(), &["."]);
    output
        .assert_code(1)
        .assert_stdout_contains("no_eval")
        .assert_stdout_contains("Found 1 error.");

    Ok(())
}

#[test]
fn test_parsing_error() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("broken.js"), "function (\n")?;

    let output = run_check(directory.path(), &["."]);
    output.assert_code(2).assert_stdout_contains("broken.js");

    Ok(())
}

#[test]
fn test_parsing_error_for_some_files() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("broken.js"), "function (\n")?;
    std::fs::write(directory.path().join("app.js"), "eval(userInput);\n")?;

    // Violations in parseable files are still reported, but the exit status
    // reflects the failure.
    let output = run_check(directory.path(), &["."]);
    output
        .assert_code(2)
        .assert_stdout_contains("broken.js")
        .assert_stdout_contains("no_eval");

    Ok(())
}

#[test]
fn test_explicit_file_argument() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("app.js"), "eval(userInput);\n")?;
    std::fs::write(directory.path().join("other.js"), "eval(userInput);\n")?;

    let output = run_check(directory.path(), &["app.js"]);
    output
        .assert_code(1)
        .assert_stdout_contains("Found 1 error.")
        .assert_stdout_not_contains("other.js");

    Ok(())
}
