use std::path::{Path, PathBuf};

/// A single staged file write: a path relative to the destination root plus the
/// full contents to put there. Writes always overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// The deterministic output of the scaffold engine: directories to ensure exist,
/// then files to write, both in application order.
///
/// Directory entries are deduplicated and every ancestor of a planned file is
/// guaranteed to appear in the directory list before the file itself, so the
/// apply step never has to guess at parents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePlan {
    dirs: Vec<PathBuf>,
    files: Vec<PlannedFile>,
}
impl FilePlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a directory (and its ancestors) for creation. Re-adding an
    /// already staged directory is a no-op.
    pub fn ensure_dir<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();

        let mut ancestry: Vec<&Path> = path.ancestors().filter(|p| !p.as_os_str().is_empty()).collect();
        ancestry.reverse();

        for dir in ancestry {
            if !self.dirs.iter().any(|existing| existing == dir) {
                self.dirs.push(dir.to_path_buf());
            }
        }
    }

    /// Stages a file write, ensuring its parent directory is staged first.
    pub fn write_file<P: AsRef<Path>>(&mut self, path: P, contents: String) {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.ensure_dir(parent);
            }
        }

        self.files.push(PlannedFile {
            path: path.to_path_buf(),
            contents,
        });
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    pub fn contains_file<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();

        self.files.iter().any(|file| file.path == path)
    }

    pub fn file_contents<P: AsRef<Path>>(&self, path: P) -> Option<&str> {
        let path = path.as_ref();

        // last write wins, mirroring apply semantics
        self.files
            .iter()
            .rev()
            .find(|file| file.path == path)
            .map(|file| file.contents.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_deduplicates() {
        let mut plan = FilePlan::new();
        plan.ensure_dir("src/components");
        plan.ensure_dir("src");
        plan.ensure_dir("src/components");

        assert_eq!(
            plan.dirs(),
            &[PathBuf::from("src"), PathBuf::from("src/components")]
        );
    }

    #[test]
    fn ancestors_come_before_descendants() {
        let mut plan = FilePlan::new();
        plan.ensure_dir("a/b/c");

        assert_eq!(
            plan.dirs(),
            &[PathBuf::from("a"), PathBuf::from("a/b"), PathBuf::from("a/b/c")]
        );
    }

    #[test]
    fn write_file_stages_parent_directory() {
        let mut plan = FilePlan::new();
        plan.write_file("src/store/store.ts", String::from("export {};"));

        assert_eq!(
            plan.dirs(),
            &[PathBuf::from("src"), PathBuf::from("src/store")]
        );
        assert!(plan.contains_file("src/store/store.ts"));
    }

    #[test]
    fn last_write_wins_for_duplicate_paths() {
        let mut plan = FilePlan::new();
        plan.write_file("src/index.css", String::from("first"));
        plan.write_file("src/index.css", String::from("second"));

        assert_eq!(plan.file_contents("src/index.css"), Some("second"));
    }
}
