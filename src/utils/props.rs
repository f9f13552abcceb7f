use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use hashbrown::HashMap;
use log::error;

use crate::utils::errors::{OtaError, Result};

/// Key/value pairs from a `build.prop` style file
#[derive(Default, Debug)]
pub struct PropertySet {
    props: HashMap<String, String>,
}

impl PropertySet {
    /// Parses `key=value` lines. Keys are matched literally, values are kept
    /// as-is up to the end of the line. Both `\n` and `\r\n` count as the line
    /// end, so CRLF files yield the same values as LF ones. The first
    /// occurrence of a key wins.
    pub fn parse(data: &str) -> Self {
        let mut props = HashMap::new();

        for line in data.lines() {
            if line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                props.entry(key.to_string()).or_insert_with(|| value.to_string());
            }
        }

        Self { props }
    }

    /// Reads and parses a property file. A missing file is logged and
    /// results in an empty set, so callers report the absent keys instead.
    pub fn from_file(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(data) => Ok(Self::parse(&data)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                error!("{} not found.", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(OtaError::io(path, e)),
        }
    }

    pub fn get(&self, key: &str, fallback: Option<&str>) -> Option<&str> {
        self.props
            .get(key)
            .or_else(|| fallback.and_then(|fb| self.props.get(fb)))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod props_tests {
    use super::*;

    const BUILD_PROP: &str = "\
# begin build properties
ro.build.date.utc=1700000000
ro.build.version.incremental=eng.user.20231114.123456
ro.lineage.build.version=18.1
ro.cm.device=legacy_device
ro.build.display.id=lineage_sample-userdebug 11 RQ3A test-keys
ro.product.name= spaced value  \r
ro.build.date.utc=1600000000
";

    #[test]
    fn test_values() {
        let props = PropertySet::parse(BUILD_PROP);
        assert_eq!(props.get("ro.build.date.utc", None), Some("1700000000"));
        assert_eq!(props.get("ro.lineage.build.version", None), Some("18.1"));
        assert_eq!(
            props.get("ro.build.display.id", None),
            Some("lineage_sample-userdebug 11 RQ3A test-keys")
        );
        // Only the line terminator is dropped
        assert_eq!(props.get("ro.product.name", None), Some(" spaced value  "));
        // Comments are not properties
        assert_eq!(props.props.len(), 6);
    }

    #[test]
    fn test_fallback() {
        let props = PropertySet::parse(BUILD_PROP);
        // Primary present, fallback ignored
        assert_eq!(
            props.get("ro.lineage.build.version", Some("ro.cm.build.version")),
            Some("18.1")
        );
        // Primary absent
        assert_eq!(props.get("ro.lineage.device", Some("ro.cm.device")), Some("legacy_device"));
        // Neither present
        assert_eq!(props.get("ro.lineage.device", Some("ro.nope")), None);
        assert_eq!(props.get("ro.lineage.device", None), None);
    }

    #[test]
    fn test_literal_keys() {
        let props = PropertySet::parse("roXbuildXdate=1\nprefix.ro.build.date=2\n");
        assert_eq!(props.get("ro.build.date", None), None);
        assert_eq!(props.get("ro.b.*", None), None);
    }

    #[test]
    fn test_value_with_equals() {
        let props = PropertySet::parse("ro.key=a=b\nno separator here\n");
        assert_eq!(props.get("ro.key", None), Some("a=b"));
        assert_eq!(props.props.len(), 1);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.prop");
        fs::write(&path, BUILD_PROP).unwrap();

        let props = PropertySet::from_file(&path).unwrap();
        assert_eq!(
            props.get("ro.build.version.incremental", None),
            Some("eng.user.20231114.123456")
        );

        // Missing file is not fatal
        let missing = PropertySet::from_file(&dir.path().join("nope.prop")).unwrap();
        assert_eq!(missing.get("ro.build.date.utc", None), None);
    }

    #[test]
    fn test_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        // Reading a directory fails with something other than NotFound
        let res = PropertySet::from_file(dir.path());
        assert!(matches!(res, Err(OtaError::Io { .. })));
    }
}
