use crate::UserIdentity;

/// Result of loading identity - distinguishes "not found" from a corrupted file.
#[derive(Debug)]
pub struct LoadResult {
    pub user: Option<UserIdentity>,
    /// Present if file exists but is corrupted
    pub corruption_error: Option<String>,
}
