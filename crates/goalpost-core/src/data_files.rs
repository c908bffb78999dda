//! Data file conventions.
//!
//! Pure path functions. These define the canonical layout of the JSON
//! collections inside the service's data directory.

use std::path::{Path, PathBuf};

pub const CATEGORIES: &str = "categories.json";

pub const GOALS: &str = "goals.json";

pub const USERS: &str = "users.json";

pub fn categories(data_dir: &Path) -> PathBuf {
    data_dir.join(CATEGORIES)
}

pub fn goals(data_dir: &Path) -> PathBuf {
    data_dir.join(GOALS)
}

pub fn users(data_dir: &Path) -> PathBuf {
    data_dir.join(USERS)
}

/// Sibling path used for write-then-rename, e.g. `users.json.tmp`.
pub fn staging(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_owned();
    staged.push(".tmp");
    PathBuf::from(staged)
}
