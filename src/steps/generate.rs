use std::path::{Path, PathBuf};

use log::info;

use crate::models::build::{BuildInfo, INCREMENTAL_KEY, TIMESTAMP_KEY};
use crate::models::config::{Config, TagSource};
use crate::models::ota::{OtaDocument, OtaEntry};
use crate::utils::archive::find_latest_archive;
use crate::utils::errors::{OtaError, Result};
use crate::utils::hash::hash_file;
use crate::utils::misc;
use crate::utils::props::PropertySet;

pub struct Generator<'a> {
    config: &'a Config,

    work_dir: PathBuf,
    build_prop: PathBuf,
}

impl<'a> Generator<'a> {
    pub fn init(conf: &'a Config) -> Self {
        Self {
            config: conf,
            work_dir: conf.env.work_dir.clone(),
            build_prop: conf.build_prop_path(),
        }
    }

    /// Release tag the build is published under
    fn release_tag(&self, build: &BuildInfo) -> Result<String> {
        match self.config.ota.tag_source {
            TagSource::BuildDate => misc::format_build_date(build.timestamp).ok_or_else(|| OtaError::InvalidProperty {
                key: TIMESTAMP_KEY.0,
                value: build.timestamp.to_string(),
                reason: "timestamp out of range",
            }),
            TagSource::Incremental => misc::incremental_date(&build.incremental).ok_or_else(|| OtaError::InvalidProperty {
                key: INCREMENTAL_KEY.0,
                value: build.incremental.clone(),
                reason: "not enough digits for a release tag",
            }),
        }
    }

    pub fn build_url(&self, build: &BuildInfo, filename: &str) -> Result<String> {
        let ota = &self.config.ota;
        Ok(format!(
            "https://github.com/{}/{}_{}/releases/download/{}/{}",
            ota.github_owner,
            ota.repo_prefix,
            build.device,
            self.release_tag(build)?,
            filename
        ))
    }

    /// Read build.prop, pick the build zip and describe it
    pub fn run(&self) -> Result<OtaDocument> {
        let props = PropertySet::from_file(&self.build_prop)?;
        let build = BuildInfo::from_props(&props, &self.build_prop)?;
        info!("Found {} build for {} ({})", build.version, build.device, build.incremental);

        let zip_path = find_latest_archive(&self.work_dir, &build.version)?.ok_or_else(|| OtaError::MissingArchive {
            version: build.version.clone(),
            dir: self.work_dir.clone(),
        })?;
        info!("Using \"{}\"", zip_path.display());

        let filename = file_name(&zip_path);
        let file_info = hash_file(&zip_path)?;
        info!(" => md5: {}, size: {}", file_info.hash, file_info.size);

        let url = self.build_url(&build, &filename)?;

        Ok(OtaDocument::new(OtaEntry {
            datetime: build.timestamp,
            filename,
            id: file_info.hash,
            romtype: self.config.ota.romtype.to_owned(),
            size: file_info.size,
            url,
            version: build.version,
        }))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
