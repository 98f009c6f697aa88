use std::fs;
use std::io;
use std::path::PathBuf;

/// Supplies raw file contents by name.
pub trait ResourceReader {
    fn read_file_contents(&self, name: &str) -> io::Result<String>;
}

/// Reads files from disk, optionally below a base directory.
#[derive(Debug, Clone, Default)]
pub struct FsReader {
    root: Option<PathBuf>,
}

impl FsReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every name relative to `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: Some(root.into()) }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl ResourceReader for FsReader {
    fn read_file_contents(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(self.resolve(name))
    }
}

impl<R: ResourceReader + ?Sized> ResourceReader for &R {
    fn read_file_contents(&self, name: &str) -> io::Result<String> {
        (**self).read_file_contents(name)
    }
}
