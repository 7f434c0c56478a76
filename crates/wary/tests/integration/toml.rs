use tempfile::TempDir;

use crate::helpers::run_check;

#[test]
fn test_toml_select() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(
        directory.path().join("app.js"),
        "eval(userInput);\nconsole.log(' started ', name);\n",
    )?;
    std::fs::write(
        directory.path().join("wary.toml"),
        "[lint]\nselect = [\"no_eval\"]\n",
    )?;

    let output = run_check(directory.path(), &["."]);
    output
        .assert_code(1)
        .assert_stdout_contains("no_eval")
        .assert_stdout_not_contains("no_console_spaces");

    Ok(())
}

#[test]
fn test_cli_select_overrides_toml() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(
        directory.path().join("app.js"),
        "eval(userInput);\nconsole.log(' started ', name);\n",
    )?;
    std::fs::write(
        directory.path().join("wary.toml"),
        "[lint]\nselect = [\"no_eval\"]\n",
    )?;

    let output = run_check(directory.path(), &[".", "--select", "no_console_spaces"]);
    output
        .assert_code(1)
        .assert_stdout_contains("no_console_spaces")
        .assert_stdout_not_contains("no_eval");

    Ok(())
}

#[test]
fn test_toml_rule_options() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("app.js"), "execScript(userInput);\n")?;

    // Without options, `execScript` is not an eval-like function.
    run_check(directory.path(), &["."]).assert_code(0);

    std::fs::write(
        directory.path().join("wary.toml"),
        "[lint.no-eval]\nextend-additional-functions = [\"execScript\"]\n",
    )?;
    let output = run_check(directory.path(), &["."]);
    output.assert_code(1).assert_stdout_contains("no_eval");

    Ok(())
}

#[test]
fn test_invalid_toml_key_is_an_error() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("app.js"), "const x = 1;\n")?;
    std::fs::write(
        directory.path().join("wary.toml"),
        "[lint]\nno_such_option = true\n",
    )?;

    let output = run_check(directory.path(), &["."]);
    output
        .assert_code(2)
        .assert_stderr_contains("Failed to parse config file");

    Ok(())
}

#[test]
fn test_toml_found_in_parent_directory() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(
        directory.path().join("wary.toml"),
        "[lint]\nselect = [\"no_eval\"]\n",
    )?;
    std::fs::create_dir(directory.path().join("src"))?;
    std::fs::write(
        directory.path().join("src").join("app.js"),
        "eval(userInput);\nconsole.log(' started ', name);\n",
    )?;

    let output = run_check(directory.path(), &["src"]);
    output
        .assert_code(1)
        .assert_stdout_contains("no_eval")
        .assert_stdout_not_contains("no_console_spaces");

    Ok(())
}
