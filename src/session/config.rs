//! Session configuration

use std::path::{Path, PathBuf};

/// Where the store catalog, accounts and per-user libraries live
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Root data directory (e.g., ./resources)
    pub data_dir: PathBuf,

    /// Catalog index file; album files are read from its directory
    pub index_file: PathBuf,

    /// Account file (`username,hash` per line)
    pub accounts_file: PathBuf,

    /// Directory holding `<username>_library.txt` files
    pub users_dir: PathBuf,
}

impl LibraryConfig {
    /// Create a configuration with the standard layout under `data_dir`
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            index_file: data_dir.join("albums").join("albums.txt"),
            accounts_file: data_dir.join("users.txt"),
            users_dir: data_dir.join("users"),
            data_dir,
        }
    }

    /// Read the catalog from a different index file
    pub fn with_index_file(mut self, index_file: PathBuf) -> Self {
        self.index_file = index_file;
        self
    }

    /// Directory the per-album files are resolved against
    pub fn albums_dir(&self) -> &Path {
        self.index_file.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Library file for `username`
    pub fn library_path(&self, username: &str) -> PathBuf {
        self.users_dir.join(format!("{}_library.txt", username))
    }
}
