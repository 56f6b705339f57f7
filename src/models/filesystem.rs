/// A single file in the virtual filesystem.
///
/// Entries are immutable once the filesystem is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub content: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Content size in bytes, as reported by `ls -l`.
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
