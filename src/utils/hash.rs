use std::fs;
use std::path::Path;

use crate::utils::errors::{OtaError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub hash: String,
    pub size: u64,
}

/// MD5 digest (lower-case hex) and size of a file. The digest only identifies
/// the content, it is not an integrity check.
pub fn hash_file(path: &Path) -> Result<FileInfo> {
    let data = fs::read(path).map_err(|e| OtaError::io(path, e))?;
    let size = fs::metadata(path).map_err(|e| OtaError::io(path, e))?.len();

    Ok(FileInfo {
        hash: format!("{:x}", md5::compute(&data)),
        size,
    })
}
