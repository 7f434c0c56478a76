use tempfile::TempDir;

use crate::helpers::run_check;

#[test]
fn test_fix_rewrites_file() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let path = directory.path().join("app.js");
    std::fs::write(&path, "console.log(' started ', name);\n")?;

    let output = run_check(directory.path(), &[".", "--fix"]);
    output.assert_code(0).assert_stdout_contains("All checks passed!");

    let fixed = std::fs::read_to_string(&path)?;
    assert_eq!(fixed, "console.log('started', name);\n");

    Ok(())
}

#[test]
fn test_without_fix_file_is_untouched() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let path = directory.path().join("app.js");
    std::fs::write(&path, "console.log(' started ', name);\n")?;

    let output = run_check(directory.path(), &["."]);
    output
        .assert_code(1)
        .assert_stdout_contains("fixable with the `--fix` option.");

    let contents = std::fs::read_to_string(&path)?;
    assert_eq!(contents, "console.log(' started ', name);\n");

    Ok(())
}

#[test]
fn test_unsafe_fix_requires_flag() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let path = directory.path().join("app.js");
    std::fs::write(&path, "import get from 'lodash/get';\n")?;
    std::fs::write(
        directory.path().join("wary.toml"),
        "[lint.internal-module-import]\nstrategy = \"autofix\"\n",
    )?;

    let output = run_check(
        directory.path(),
        &[".", "--select", "internal_module_import", "--fix"],
    );
    output
        .assert_code(1)
        .assert_stdout_contains("`--unsafe-fixes`");
    assert_eq!(
        std::fs::read_to_string(&path)?,
        "import get from 'lodash/get';\n"
    );

    Ok(())
}

#[test]
fn test_unsafe_fix_applied_with_flag() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let path = directory.path().join("app.js");
    std::fs::write(&path, "import get from 'lodash/get';\n")?;
    std::fs::write(
        directory.path().join("wary.toml"),
        "[lint.internal-module-import]\nstrategy = \"autofix\"\n",
    )?;

    let output = run_check(
        directory.path(),
        &[
            ".",
            "--select",
            "internal_module_import",
            "--fix",
            "--unsafe-fixes",
        ],
    );
    output.assert_code(0);
    assert_eq!(
        std::fs::read_to_string(&path)?,
        "import get from 'lodash';\n"
    );

    Ok(())
}
