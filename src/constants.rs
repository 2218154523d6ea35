use std::path::PathBuf;

use dirs::preference_dir;

pub const APP_NAME: &str = "tilemaze";

/// Directory holding everything tilemaze keeps between runs, `None` on platforms without a
/// preference directory.
pub fn base_path() -> Option<PathBuf> {
    preference_dir().map(|dir| dir.join(APP_NAME))
}
