use std::path::Path;
use std::process::Command;

pub fn binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_wary")
}

pub struct CheckOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CheckOutput {
    #[track_caller]
    pub fn assert_code(&self, expected: i32) -> &Self {
        assert_eq!(
            self.code,
            Some(expected),
            "expected exit code {expected}\n----- stdout -----\n{}\n----- stderr -----\n{}",
            self.stdout,
            self.stderr
        );
        self
    }

    #[track_caller]
    pub fn assert_stdout_contains(&self, needle: &str) -> &Self {
        assert!(
            self.stdout.contains(needle),
            "stdout does not contain {needle:?}\n----- stdout -----\n{}",
            self.stdout
        );
        self
    }

    #[track_caller]
    pub fn assert_stdout_not_contains(&self, needle: &str) -> &Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly contains {needle:?}\n----- stdout -----\n{}",
            self.stdout
        );
        self
    }

    #[track_caller]
    pub fn assert_stderr_contains(&self, needle: &str) -> &Self {
        assert!(
            self.stderr.contains(needle),
            "stderr does not contain {needle:?}\n----- stderr -----\n{}",
            self.stderr
        );
        self
    }
}

/// Run `wary check <args>` in `directory` with colors disabled.
pub fn run_check(directory: &Path, args: &[&str]) -> CheckOutput {
    let output = Command::new(binary_path())
        .current_dir(directory)
        .env("NO_COLOR", "1")
        .arg("check")
        .args(args)
        .output()
        .expect("failed to run the wary binary");

    CheckOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
