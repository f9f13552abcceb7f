use std::path::Path;

use crate::utils::errors::{OtaError, Result};
use crate::utils::props::PropertySet;

pub const VERSION_KEY: (&str, Option<&str>) = ("ro.lineage.build.version", Some("ro.cm.build.version"));
pub const TIMESTAMP_KEY: (&str, Option<&str>) = ("ro.build.date.utc", None);
pub const INCREMENTAL_KEY: (&str, Option<&str>) = ("ro.build.version.incremental", None);
pub const DEVICE_KEY: (&str, Option<&str>) = ("ro.lineage.device", Some("ro.cm.device"));

/// Build identity as read from build.prop
#[derive(Debug, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub timestamp: i64,
    pub incremental: String,
    pub device: String,
}

impl BuildInfo {
    /// All four properties have to be present and non-empty. `path` is only used for error reporting.
    pub fn from_props(props: &PropertySet, path: &Path) -> Result<Self> {
        let mut missing = Vec::new();
        let mut lookup = |(key, fallback): (&'static str, Option<&'static str>)| {
            let value = props.get(key, fallback).filter(|value| !value.is_empty());
            if value.is_none() {
                missing.push(key);
            }
            value
        };

        let version = lookup(VERSION_KEY);
        let timestamp = lookup(TIMESTAMP_KEY);
        let incremental = lookup(INCREMENTAL_KEY);
        let device = lookup(DEVICE_KEY);

        let (Some(version), Some(timestamp), Some(incremental), Some(device)) =
            (version, timestamp, incremental, device)
        else {
            return Err(OtaError::MissingProperties {
                path: path.to_path_buf(),
                keys: missing,
            });
        };

        let timestamp = timestamp.trim().parse::<i64>().map_err(|_| OtaError::InvalidProperty {
            key: TIMESTAMP_KEY.0,
            value: timestamp.to_string(),
            reason: "not a Unix timestamp",
        })?;

        Ok(Self {
            version: version.to_string(),
            timestamp,
            incremental: incremental.to_string(),
            device: device.to_string(),
        })
    }
}
