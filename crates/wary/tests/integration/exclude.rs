use tempfile::TempDir;

use crate::helpers::run_check;

#[test]
fn test_node_modules_excluded_by_default() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::create_dir(directory.path().join("node_modules"))?;
    std::fs::write(
        directory.path().join("node_modules").join("dep.js"),
        "eval(userInput);\n",
    )?;
    std::fs::write(directory.path().join("app.js"), "const x = 1;\n")?;

    let output = run_check(directory.path(), &["."]);
    output.assert_code(0).assert_stdout_contains("All checks passed!");

    Ok(())
}

#[test]
fn test_no_default_exclude() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::create_dir(directory.path().join("node_modules"))?;
    std::fs::write(
        directory.path().join("node_modules").join("dep.js"),
        "eval(userInput);\n",
    )?;
    std::fs::write(directory.path().join("app.js"), "const x = 1;\n")?;

    let output = run_check(directory.path(), &[".", "--no-default-exclude"]);
    output.assert_code(1).assert_stdout_contains("no_eval");

    Ok(())
}

#[test]
fn test_toml_exclude_patterns() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::create_dir(directory.path().join("generated"))?;
    std::fs::write(
        directory.path().join("generated").join("bundle.js"),
        "eval(userInput);\n",
    )?;
    std::fs::write(directory.path().join("app.js"), "const x = 1;\n")?;
    std::fs::write(
        directory.path().join("wary.toml"),
        "[lint]\nexclude = [\"generated\"]\n",
    )?;

    let output = run_check(directory.path(), &["."]);
    output.assert_code(0).assert_stdout_contains("All checks passed!");

    Ok(())
}

#[test]
fn test_explicit_file_beats_excludes() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::create_dir(directory.path().join("node_modules"))?;
    std::fs::write(
        directory.path().join("node_modules").join("dep.js"),
        "eval(userInput);\n",
    )?;

    // Files named explicitly on the command line are always checked.
    let output = run_check(directory.path(), &["node_modules/dep.js"]);
    output.assert_code(1).assert_stdout_contains("no_eval");

    Ok(())
}
