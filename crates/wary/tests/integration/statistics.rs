use tempfile::TempDir;

use crate::helpers::run_check;

#[test]
fn test_statistics_counts_per_rule() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(
        directory.path().join("app.js"),
        "eval(userInput);\neval(otherInput);\nconsole.log(' started ', name);\n",
    )?;

    let output = run_check(directory.path(), &[".", "--statistics"]);
    output
        .assert_code(1)
        .assert_stdout_contains("2 [ ] no_eval")
        .assert_stdout_contains("1 [*] no_console_spaces")
        .assert_stdout_contains("Rules with `[*]` have an automatic fix.");

    Ok(())
}

#[test]
fn test_statistics_when_clean() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("app.js"), "const x = 1;\n")?;

    let output = run_check(directory.path(), &[".", "--statistics"]);
    output.assert_code(0).assert_stdout_contains("All checks passed!");

    Ok(())
}

#[test]
fn test_with_timing_note() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("app.js"), "const x = 1;\n")?;

    let output = run_check(directory.path(), &[".", "--with-timing"]);
    output.assert_code(0).assert_stdout_contains("Checked files in:");

    Ok(())
}
