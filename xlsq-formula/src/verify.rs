// xlsq-formula/src/verify.rs
use std::path::Path;
use std::process::Output;

use tracing::{debug, info};
use xlsq_common::error::{Result, XlsqError};

use crate::install::installed_binary;
use crate::model::Formula;
use crate::process::run_command_async;

fn describe(formula: &Formula) -> String {
    let mut command = formula.binary_name().to_string();
    for arg in &formula.test.args {
        command.push(' ');
        command.push_str(arg);
    }
    command
}

/// Checks a finished test command: it must exit zero and its stdout must
/// contain the expected text.
pub fn check_output(formula: &Formula, output: &Output) -> Result<String> {
    let command = describe(formula);
    if !output.status.success() {
        return Err(XlsqError::VerificationFailed(format!(
            "`{}` exited with {}: {}",
            command,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    if !stdout.contains(&formula.test.expect) {
        return Err(XlsqError::VerificationFailed(format!(
            "output of `{}` does not contain \"{}\"",
            command, formula.test.expect
        )));
    }
    Ok(stdout)
}

/// Runs the formula's test step against the executable in `bin_dir`.
pub async fn run_test(formula: &Formula, bin_dir: &Path) -> Result<String> {
    let binary = installed_binary(formula, bin_dir);
    if !binary.is_file() {
        return Err(XlsqError::NotFound(format!(
            "{} is not installed at {}",
            formula.binary_name(),
            binary.display()
        )));
    }

    info!("Testing {} with `{}`", formula.name, describe(formula));
    let output = run_command_async(&binary, &formula.test.args, None, None).await?;
    let stdout = check_output(formula, &output)?;
    debug!("Test output matched \"{}\"", formula.test.expect);
    Ok(stdout)
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    use super::*;
    use crate::model::tests::sample;

    fn fake_binary(dir: &Path, body: &str) {
        let path = dir.join("xlsq");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[tokio::test]
    async fn passes_when_help_mentions_the_tool() {
        let dir = tempfile::tempdir().unwrap();
        fake_binary(
            dir.path(),
            "echo 'A CLI tool for reading and searching Excel files'; echo 'Usage: xlsq'",
        );
        let stdout = run_test(&sample(), dir.path()).await.unwrap();
        assert!(stdout.contains("Usage: xlsq"));
    }

    #[tokio::test]
    async fn fails_when_the_substring_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        fake_binary(dir.path(), "echo 'some other tool'");
        let err = run_test(&sample(), dir.path()).await.unwrap_err();
        assert!(matches!(err, XlsqError::VerificationFailed(_)));
        assert!(err
            .to_string()
            .contains("A CLI tool for reading and searching Excel files"));
    }

    #[tokio::test]
    async fn fails_on_non_zero_exit_even_with_the_substring() {
        let dir = tempfile::tempdir().unwrap();
        fake_binary(
            dir.path(),
            "echo 'A CLI tool for reading and searching Excel files'; exit 2",
        );
        let err = run_test(&sample(), dir.path()).await.unwrap_err();
        assert!(err.to_string().contains("exited with"));
    }

    #[tokio::test]
    async fn missing_binary_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_test(&sample(), dir.path()).await.unwrap_err();
        assert!(matches!(err, XlsqError::NotFound(_)));
    }
}
