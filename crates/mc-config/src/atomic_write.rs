use crate::{ConfigError, ConfigErrorResult};

use std::fs;
use std::io::Write;
use std::path::Path;

/// Write `contents` to `path` without ever exposing a half-written file.
///
/// 1. Writes to a sibling temp file
/// 2. Syncs to disk (fsync)
/// 3. Renames over the final path
pub fn write_atomic(path: &Path, contents: &[u8]) -> ConfigErrorResult<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| ConfigError::io(dir.to_path_buf(), e))?;

    let file_name = path
        .file_name()
        .ok_or_else(|| ConfigError::config(format!("{} has no file name", path.display())))?;
    let temp_path = dir.join(format!(
        "{}.tmp.{}",
        file_name.to_string_lossy(),
        std::process::id()
    ));

    {
        let mut file =
            fs::File::create(&temp_path).map_err(|e| ConfigError::io(temp_path.clone(), e))?;

        file.write_all(contents)
            .map_err(|e| ConfigError::io(temp_path.clone(), e))?;

        file.sync_all()
            .map_err(|e| ConfigError::io(temp_path.clone(), e))?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ConfigError::atomic_rename(temp_path.clone(), path.to_path_buf(), e)
    })?;

    Ok(())
}
