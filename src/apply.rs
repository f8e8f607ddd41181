use crate::{
    errors::{FileOperation, IoError},
    plan::FilePlan,
};
use colored::Colorize;
use std::{fs, path::Path};

/// What an apply pass actually touched.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub dirs_created: usize,
    pub files_written: usize,
}

/// Realizes a [`FilePlan`] under `root`.
///
/// Directory creation is idempotent; files are overwritten unconditionally.
/// On failure, anything already written stays on disk — there is no rollback
/// and partial application is an accepted outcome.
pub fn apply(plan: &FilePlan, root: &Path) -> Result<ApplyReport, IoError> {
    let mut report = ApplyReport::default();

    if !root.exists() {
        create_directory(root)?;
        report.dirs_created += 1;
    }

    for dir in plan.dirs() {
        let path = root.join(dir);

        if !path.exists() {
            create_directory(&path)?;
            report.dirs_created += 1;
        }
    }

    for file in plan.files() {
        let path = root.join(&file.path);

        write_file(&path, &file.contents)?;
        report.files_written += 1;
    }

    Ok(report)
}

fn create_directory(path: &Path) -> Result<(), IoError> {
    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.to_path_buf(), error))?;

    log::debug!("created directory: {}", path.display());

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), IoError> {
    fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.to_path_buf(), error))?;

    let msg = format!("{} {}", "create".green(), path.display());

    println!("{}", &msg);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_plan() -> FilePlan {
        let mut plan = FilePlan::new();
        plan.ensure_dir("src");
        plan.write_file("src/index.css", String::from("body {}\n"));
        plan
    }

    #[test]
    fn applying_twice_is_idempotent_for_directories() {
        let root = tempfile::tempdir().unwrap();
        let plan = small_plan();

        apply(&plan, root.path()).unwrap();
        let second = apply(&plan, root.path()).unwrap();

        assert_eq!(second.dirs_created, 0);
        assert_eq!(second.files_written, 1);
    }

    #[test]
    fn files_are_overwritten_not_merged() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("src/index.css");

        apply(&small_plan(), root.path()).unwrap();
        fs::write(&target, "modified by hand").unwrap();
        apply(&small_plan(), root.path()).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "body {}\n");
    }

    #[test]
    fn path_collision_with_a_file_reports_io_error() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("src"), "not a directory").unwrap();

        let error = apply(&small_plan(), root.path()).unwrap_err();

        // "src" already exists so directory creation is skipped; the write
        // into it is what fails
        assert!(matches!(error.operation, FileOperation::Write));
    }
}
