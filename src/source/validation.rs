//! Data file validation.
//!
//! Checks that a path names a readable regular file before any loader touches it.

use crate::error::{CollviewError, Result};
use std::fs::File;
use std::path::Path;

/// Upper bound for a data file. The whole record set is held in memory.
pub const MAX_DATA_FILE_SIZE: u64 = 1024 * 1024 * 1024; // 1GB

/// Validate that a data file path is accessible and suitable for loading
///
/// # Error Cases
/// - File does not exist
/// - Path points to a directory
/// - File is not readable due to permissions
/// - File is larger than [`MAX_DATA_FILE_SIZE`]
pub fn validate_data_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CollviewError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| CollviewError::file_error("Failed to read file metadata", e))?;

    if !metadata.is_file() {
        return Err(CollviewError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let file_size = metadata.len();
    if file_size > MAX_DATA_FILE_SIZE {
        return Err(CollviewError::data_format(
            path,
            format!(
                "file is too large to load ({}MB)",
                file_size / (1024 * 1024)
            ),
        ));
    }

    File::open(path).map_err(|e| CollviewError::file_error("Cannot open file for reading", e))?;

    Ok(())
}
