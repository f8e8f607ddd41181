use miette::Diagnostic;
use std::{path::Path, path::PathBuf, process::Command};
use thiserror::Error;

const INSTALL_COMMAND: &str = "yarn";

#[derive(Debug, Error, Diagnostic)]
pub enum InstallError {
    #[error("failed to spawn '{command} install' in '{path}'")]
    #[diagnostic(
        code(forja::install::spawn),
        help("Make sure the package manager is installed and on your PATH.")
    )]
    Spawn {
        command: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command} install' exited with status {status}")]
    #[diagnostic(
        code(forja::install::exit_status),
        help("Scaffolding already finished; re-run the install manually in the project directory.")
    )]
    ExitStatus { command: &'static str, status: String },
}

/// Runs `yarn install` in the project root, inheriting stdio so the user sees
/// the package manager's own progress output. The exit status is captured and
/// a failure is reported on its own; the scaffold result is unaffected either
/// way.
pub fn install_dependencies(root: &Path) -> Result<(), InstallError> {
    log::debug!("spawning '{} install' in {}", INSTALL_COMMAND, root.display());

    let status = Command::new(INSTALL_COMMAND)
        .arg("install")
        .current_dir(root)
        .status()
        .map_err(|error| InstallError::Spawn {
            command: INSTALL_COMMAND,
            path: root.to_path_buf(),
            source: error,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(InstallError::ExitStatus {
            command: INSTALL_COMMAND,
            status: status
                .code()
                .map(|code| code.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }
}
