use tempfile::TempDir;

use crate::helpers::run_check;

#[test]
fn test_select_restricts_rules() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(
        directory.path().join("app.js"),
        "eval(userInput);\nconsole.log(' started ', name);\n",
    )?;

    let output = run_check(directory.path(), &[".", "--select", "no_eval"]);
    output
        .assert_code(1)
        .assert_stdout_contains("no_eval")
        .assert_stdout_not_contains("no_console_spaces")
        .assert_stdout_contains("Found 1 error.");

    Ok(())
}

#[test]
fn test_select_group() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(
        directory.path().join("app.js"),
        "eval(userInput);\nconsole.log(' started ', name);\n",
    )?;

    let output = run_check(directory.path(), &[".", "--select", "security"]);
    output
        .assert_code(1)
        .assert_stdout_contains("no_eval")
        .assert_stdout_not_contains("no_console_spaces");

    Ok(())
}

#[test]
fn test_ignore_excludes_rule() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(
        directory.path().join("app.js"),
        "eval(userInput);\nconsole.log(' started ', name);\n",
    )?;

    let output = run_check(directory.path(), &[".", "--ignore", "no_eval"]);
    output
        .assert_code(1)
        .assert_stdout_not_contains("no_eval")
        .assert_stdout_contains("no_console_spaces");

    Ok(())
}

#[test]
fn test_extend_select_enables_non_default_rule() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("app.js"), "config[key] = value;\n")?;

    // `object_injection` is not part of the default rule set.
    run_check(directory.path(), &["."]).assert_code(0);

    let output = run_check(directory.path(), &[".", "--extend-select", "object_injection"]);
    output.assert_code(1).assert_stdout_contains("object_injection");

    Ok(())
}

#[test]
fn test_unknown_rule_is_an_error() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("app.js"), "const x = 1;\n")?;

    let output = run_check(directory.path(), &[".", "--select", "not_a_rule"]);
    output.assert_code(2).assert_stderr_contains("not_a_rule");

    Ok(())
}

#[test]
fn test_suppression_comment_silences_violation() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(
        directory.path().join("app.js"),
        "// wary-ignore no_eval: trusted input\neval(userInput);\n",
    )?;

    let output = run_check(directory.path(), &["."]);
    output.assert_code(0).assert_stdout_contains("All checks passed!");

    Ok(())
}

#[test]
fn test_outdated_suppression_reported() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(
        directory.path().join("app.js"),
        "// wary-ignore no_eval: stale\nconst x = 1;\n",
    )?;

    let output = run_check(directory.path(), &["."]);
    output
        .assert_code(1)
        .assert_stdout_contains("outdated_suppression");

    Ok(())
}
