use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::debug;
use walkdir::{DirEntry, WalkDir};

use crate::utils::errors::{OtaError, Result};

/// Whether `name` matches `lineage-<version>*.zip`, with the version taken literally
pub fn matches_archive_name(name: &str, version: &str) -> bool {
    let prefix = format!("lineage-{}", version);
    name.len() >= prefix.len() + ".zip".len() && name.starts_with(&prefix) && name.ends_with(".zip")
}

/// On Unix this is the inode change time (st_ctime), which is what gets bumped
/// when a build is (re)written into the output dir. Other platforms report a
/// real creation time, with the modification time as the last resort.
#[cfg(unix)]
fn creation_time(meta: &Metadata) -> io::Result<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::{Duration, UNIX_EPOCH};

    let secs = meta.ctime().max(0) as u64;
    let nanos = meta.ctime_nsec().clamp(0, 999_999_999) as u32;
    Ok(UNIX_EPOCH + Duration::new(secs, nanos))
}

#[cfg(not(unix))]
fn creation_time(meta: &Metadata) -> io::Result<SystemTime> {
    meta.created().or_else(|_| meta.modified())
}

/// Later creation time wins, the greater name breaks ties
fn is_newer(candidate: (SystemTime, &str), current: (SystemTime, &str)) -> bool {
    candidate > current
}

/// Find the most recently created build zip for `version` directly inside `dir`.
/// Equal timestamps are resolved by picking the greatest file name.
pub fn find_latest_archive(dir: &Path, version: &str) -> Result<Option<PathBuf>> {
    let mut latest: Option<(SystemTime, String, PathBuf)> = None;

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry: DirEntry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // Unresolvable entries only matter if they could have been the build
                let name = e
                    .path()
                    .and_then(Path::file_name)
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                if e.depth() > 0 && !matches_archive_name(&name, version) {
                    debug!("Skipping \"{}\": {}", name, e);
                    continue;
                }
                let path = e.path().unwrap_or(dir).to_path_buf();
                return Err(OtaError::io(path, e.into()));
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        if !entry.file_type().is_file() || !matches_archive_name(&name, version) {
            continue;
        }

        let meta = entry.metadata().map_err(|e| OtaError::io(entry.path(), e.into()))?;
        let created = creation_time(&meta).map_err(|e| OtaError::io(entry.path(), e))?;
        debug!("Candidate \"{}\" (created {:?})", name, created);

        let newer = match &latest {
            Some((time, latest_name, _)) => is_newer((created, name.as_str()), (*time, latest_name.as_str())),
            None => true,
        };
        if newer {
            latest = Some((created, name, entry.into_path()));
        }
    }

    Ok(latest.map(|(_, _, path)| path))
}
