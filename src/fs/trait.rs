//! FileSystem trait definition

use std::io;
use std::path::Path;

/// Abstraction over the handful of file operations detect and build perform
///
/// Errors are plain `io::Error`s so callers can tell a missing or unreadable
/// file apart from other failures.
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create or truncate a file with the given contents
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Create a directory and all missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}
