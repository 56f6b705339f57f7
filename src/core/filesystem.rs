use crate::config::BUILTIN_FILES;
use crate::core::error::FsError;
use crate::models::FileEntry;

/// Read-only virtual filesystem.
///
/// A flat list of files kept in insertion order. There are no directories
/// and no write operations; the filesystem is built once and only read after.
#[derive(Clone, Debug, Default)]
pub struct VirtualFs {
    entries: Vec<FileEntry>,
}

impl VirtualFs {
    /// Build a filesystem from entries, keeping their order.
    ///
    /// If a name appears more than once, the first entry wins.
    pub fn new(entries: impl IntoIterator<Item = FileEntry>) -> Self {
        let mut unique: Vec<FileEntry> = Vec::new();
        for entry in entries {
            if unique.iter().any(|e| e.name == entry.name) {
                log::warn!("vfs: duplicate file '{}' ignored", entry.name);
                continue;
            }
            unique.push(entry);
        }
        Self { entries: unique }
    }

    /// Filesystem with no files.
    #[cfg(test)]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Filesystem populated from the compiled-in assets.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_FILES
                .iter()
                .map(|(name, content)| FileEntry::new(*name, *content)),
        )
    }

    /// Look up file content by exact name.
    ///
    /// An empty file yields `Ok("")`; only a missing file is an error.
    pub fn get(&self, name: &str) -> Result<&str, FsError> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.content.as_str())
            .ok_or_else(|| FsError::NotFound(name.to_string()))
    }

    /// File names in listing order.
    pub fn list(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VirtualFs {
        VirtualFs::new([
            FileEntry::new("readme.md", "# Hello"),
            FileEntry::new("empty.txt", ""),
            FileEntry::new("notes.txt", "line one\n  line two\n"),
        ])
    }

    #[test]
    fn test_get_existing() {
        let fs = sample();
        assert_eq!(fs.get("readme.md"), Ok("# Hello"));
        assert_eq!(fs.get("notes.txt"), Ok("line one\n  line two\n"));
    }

    #[test]
    fn test_empty_file_is_not_missing() {
        let fs = sample();
        assert_eq!(fs.get("empty.txt"), Ok(""));
        assert!(fs.contains("empty.txt"));
        assert_eq!(
            fs.get("gone.txt"),
            Err(FsError::NotFound("gone.txt".to_string()))
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let fs = sample();
        assert!(fs.get("README.md").is_err());
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let fs = sample();
        let names: Vec<_> = fs.list().collect();
        assert_eq!(names, vec!["readme.md", "empty.txt", "notes.txt"]);
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let fs = VirtualFs::new([
            FileEntry::new("a.txt", "first"),
            FileEntry::new("b.txt", "b"),
            FileEntry::new("a.txt", "second"),
        ]);
        assert_eq!(fs.len(), 2);
        assert_eq!(fs.get("a.txt"), Ok("first"));
    }

    #[test]
    fn test_empty_fs() {
        let fs = VirtualFs::empty();
        assert!(fs.is_empty());
        assert_eq!(fs.list().count(), 0);
    }

    #[test]
    fn test_builtin_matches_config() {
        let fs = VirtualFs::builtin();
        assert_eq!(fs.len(), BUILTIN_FILES.len());
        let names: Vec<_> = fs.list().collect();
        let expected: Vec<_> = BUILTIN_FILES.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, expected);
    }
}
