use super::FileSystem;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
enum MockEntry {
    File(String),
    Directory,
}

/// In-memory file system for unit tests
///
/// Relative paths resolve against `/mock`. Paths marked with
/// [`MockFileSystem::deny_read`] exist but fail to read with
/// `PermissionDenied`.
pub struct MockFileSystem {
    entries: RwLock<HashMap<PathBuf, MockEntry>>,
    unreadable: RwLock<HashSet<PathBuf>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            unreadable: RwLock::new(HashSet::new()),
            root,
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.normalize_path(path.as_ref());
        let mut entries = self.entries.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut entries, parent);
        }
        entries.insert(path, MockEntry::File(content.to_string()));
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        Self::ensure_parents(&mut self.entries.write().unwrap(), &path);
    }

    pub fn deny_read(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        self.unreadable.write().unwrap().insert(path);
    }

    /// Contents of a file, if one exists at `path`
    pub fn file_content(&self, path: impl AsRef<Path>) -> Option<String> {
        let path = self.normalize_path(path.as_ref());
        match self.entries.read().unwrap().get(&path) {
            Some(MockEntry::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    /// All file paths currently stored, sorted
    pub fn files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self
            .entries
            .read()
            .unwrap()
            .iter()
            .filter(|(_, entry)| matches!(entry, MockEntry::File(_)))
            .map(|(path, _)| path.clone())
            .collect();
        files.sort();
        files
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            entries
                .entry(current.clone())
                .or_insert(MockEntry::Directory);
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.entries.read().unwrap().contains_key(&path)
    }

    fn is_file(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        matches!(
            self.entries.read().unwrap().get(&path),
            Some(MockEntry::File(_))
        )
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let path = self.normalize_path(path);
        if self.unreadable.read().unwrap().contains(&path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Permission denied: {:?}", path),
            ));
        }

        match self.entries.read().unwrap().get(&path) {
            Some(MockEntry::File(content)) => Ok(content.clone()),
            Some(MockEntry::Directory) => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("Is a directory: {:?}", path),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {:?}", path),
            )),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let path = self.normalize_path(path);
        let mut entries = self.entries.write().unwrap();

        match path.parent().map(|parent| entries.get(parent)) {
            Some(Some(MockEntry::Directory)) | None => {}
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Parent directory missing: {:?}", path),
                ))
            }
        }

        entries.insert(path, MockEntry::File(contents.to_string()));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let path = self.normalize_path(path);
        Self::ensure_parents(&mut self.entries.write().unwrap(), &path);
        Ok(())
    }
}
