//! User accounts
//!
//! Username to password-hash table, persisted as one `username,hash` line
//! per account. The whole file is rewritten on every registration.

mod hash;

pub use hash::{hash_password, verify_password};

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of [`AccountStore::register_user`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Created,
    AlreadyExists,
    /// Blank, or contains a character the account file cannot hold
    Invalid,
}

/// Registered accounts backed by a flat file
#[derive(Debug)]
pub struct AccountStore {
    path: PathBuf,
    users: HashMap<String, String>,
}

impl AccountStore {
    /// Open the account file at `path`, creating it if missing
    ///
    /// Read failures are logged and leave the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let users = match load_users(&path) {
            Ok(users) => users,
            Err(e) => {
                log::error!("Error loading accounts: {:#}", e);
                HashMap::new()
            }
        };
        log::info!("Loaded {} accounts from {:?}", users.len(), path);
        Self { path, users }
    }

    /// Register a new user and persist the account table
    pub fn register_user(&mut self, username: &str, password: &str) -> Registration {
        if !is_valid_username(username) {
            return Registration::Invalid;
        }
        if self.users.contains_key(username) {
            return Registration::AlreadyExists;
        }

        self.users
            .insert(username.to_string(), hash_password(password));
        if let Err(e) = self.save() {
            log::error!("Error saving accounts: {:#}", e);
        }
        log::info!("Registered user '{}'", username);
        Registration::Created
    }

    /// Whether `username` exists and `password` matches its stored hash
    pub fn authenticate_user(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|stored| verify_password(password, stored))
    }

    /// Number of registered accounts
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        let mut content = String::new();
        for (username, hash) in &self.users {
            content.push_str(username);
            content.push(',');
            content.push_str(hash);
            content.push('\n');
        }
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write account file: {:?}", self.path))
    }
}

fn is_valid_username(username: &str) -> bool {
    !username.trim().is_empty() && !username.contains(|c: char| matches!(c, ',' | '\n' | '\r'))
}

fn load_users(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        fs::write(path, "")
            .with_context(|| format!("Failed to create account file: {:?}", path))?;
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read account file: {:?}", path))?;

    let users = content
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            match fields.as_slice() {
                [username, hash] => Some((username.to_string(), hash.to_string())),
                _ => {
                    log::debug!("Skipping malformed account line");
                    None
                }
            }
        })
        .collect();

    Ok(users)
}
