// xlsq-formula/src/install.rs
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use xlsq_common::error::{Result, XlsqError};

use crate::model::Formula;
use crate::process::run_command_async;

/// `bin/<binary>` under `prefix`, with the platform's executable suffix.
pub fn installed_binary(formula: &Formula, bin_dir: &Path) -> PathBuf {
    bin_dir.join(format!(
        "{}{}",
        formula.binary_name(),
        std::env::consts::EXE_SUFFIX
    ))
}

/// Runs the install step inside `source_dir` and returns the path of the
/// installed executable.
pub async fn run_install(formula: &Formula, source_dir: &Path, prefix: &Path) -> Result<PathBuf> {
    let argv = formula.install_argv(prefix);
    let (program, args) = argv.split_first().ok_or_else(|| {
        XlsqError::InstallError(format!("formula '{}' has no install command", formula.name))
    })?;

    let program_path = which::which(program).map_err(|_| {
        XlsqError::BuildEnvError(format!(
            "{program} command not found in PATH (build dependencies: {})",
            formula.build_dependencies.join(", ")
        ))
    })?;

    fs::create_dir_all(prefix).map_err(|e| {
        XlsqError::IoError(format!(
            "Failed to create install prefix {}: {}",
            prefix.display(),
            e
        ))
    })?;

    info!(
        "Installing {} {} into {}",
        formula.name,
        formula.version,
        prefix.display()
    );
    let output =
        run_command_async(&program_path, args, Some(source_dir.to_path_buf()), None).await?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(XlsqError::InstallError(format!(
            "`{}` exited with {}: {}",
            argv.join(" "),
            output.status,
            stderr.trim()
        )));
    }

    let binary = installed_binary(formula, &prefix.join("bin"));
    if !binary.is_file() {
        return Err(XlsqError::InstallError(format!(
            "install finished but {} was not created",
            binary.display()
        )));
    }
    debug!("Installed executable: {}", binary.display());
    Ok(binary)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::model::tests::sample;
    use crate::model::InstallStep;

    // $0 is "sh"; the expanded std_cargo_args are $1..$5 with the prefix at $3.
    fn scripted(script: &str) -> Formula {
        let mut formula = sample();
        formula.name = "demo".to_string();
        formula.install = InstallStep {
            system: vec![
                "sh".to_string(),
                "-c".to_string(),
                script.to_string(),
                "sh".to_string(),
                "*std_cargo_args".to_string(),
            ],
        };
        formula
    }

    #[tokio::test]
    async fn install_places_the_executable_under_bin() {
        let formula = scripted(
            r#"mkdir -p "$3/bin" && printf '#!/bin/sh\necho demo\n' > "$3/bin/demo" && chmod +x "$3/bin/demo""#,
        );
        let source = tempfile::tempdir().unwrap();
        let prefix = tempfile::tempdir().unwrap();
        let root = prefix.path().join("Cellar/demo/0.1.0");

        let binary = run_install(&formula, source.path(), &root).await.unwrap();
        assert_eq!(binary, root.join("bin/demo"));
        assert!(binary.is_file());
    }

    #[tokio::test]
    async fn failing_build_surfaces_stderr() {
        let formula = scripted("echo 'error[E0425]: cannot find value' >&2; exit 101");
        let source = tempfile::tempdir().unwrap();
        let prefix = tempfile::tempdir().unwrap();

        let err = run_install(&formula, source.path(), prefix.path())
            .await
            .unwrap_err();
        assert!(matches!(err, XlsqError::InstallError(_)));
        assert!(err.to_string().contains("cannot find value"));
    }

    #[tokio::test]
    async fn build_without_artifact_is_an_error() {
        let formula = scripted("true");
        let source = tempfile::tempdir().unwrap();
        let prefix = tempfile::tempdir().unwrap();

        let err = run_install(&formula, source.path(), prefix.path())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("was not created"));
    }

    #[tokio::test]
    async fn missing_build_tool_is_a_build_env_error() {
        let mut formula = sample();
        formula.install.system = vec!["xlsq-no-such-build-tool".to_string()];
        let dir = tempfile::tempdir().unwrap();

        let err = run_install(&formula, dir.path(), dir.path()).await.unwrap_err();
        assert!(matches!(err, XlsqError::BuildEnvError(_)));
        assert!(err.to_string().contains("rust"));
    }
}
