use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Deserializer};
use toml;

use crate::models::args::MainArgs;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct Config {
    // Sections
    pub general: GeneralOptions,
    pub env: EnvOptions,
    pub ota: OtaOptions,
}

#[derive(Deserialize)]
#[serde(default)]
pub struct GeneralOptions {
    pub log_level: String,
}

#[derive(Deserialize)]
#[serde(default)]
pub struct EnvOptions {
    pub work_dir: PathBuf,
}

#[derive(Deserialize)]
#[serde(default)]
pub struct OtaOptions {
    pub github_owner: String,
    pub repo_prefix: String,
    pub romtype: String,
    #[serde(deserialize_with = "deserialize_tag_source")]
    pub tag_source: TagSource,
    pub pretty_json: bool,
}

impl Default for GeneralOptions {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

impl Default for EnvOptions {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
        }
    }
}

impl Default for OtaOptions {
    fn default() -> Self {
        Self {
            github_owner: "r0rt1z2-releases".to_string(),
            repo_prefix: "LineageOS".to_string(),
            romtype: "unofficial".to_string(),
            tag_source: TagSource::BuildDate,
            pretty_json: true,
        }
    }
}

impl Config {
    pub fn apply_args(&mut self, args: &MainArgs) {
        if let Some(work_dir) = &args.work_dir {
            self.env.work_dir = work_dir.clone();
        }
    }

    pub fn validate(&mut self) -> Result<()> {
        match fs::canonicalize(&self.env.work_dir) {
            Ok(res) => {
                if !res.is_dir() {
                    bail!("Work dir \"{}\" is not a directory", res.display())
                }
                self.env.work_dir = res
            }
            Err(e) => bail!("Work dir error: {}", e),
        }

        if self.ota.github_owner.is_empty() {
            bail!("\"github_owner\" must not be empty!")
        }
        if self.ota.repo_prefix.is_empty() {
            bail!("\"repo_prefix\" must not be empty!")
        }
        if self.ota.romtype.is_empty() {
            bail!("\"romtype\" must not be empty!")
        }

        Ok(())
    }

    /// Location of the build properties inside the work dir
    pub fn build_prop_path(&self) -> PathBuf {
        self.env.work_dir.join("system").join("build.prop")
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let config_str =
            fs::read_to_string(path).with_context(|| format!("Failed reading config \"{}\"", path.display()))?;
        let config = toml::from_str::<Config>(config_str.as_str())?;

        Ok(config)
    }
}

/// Which value the release tag in the download URL is derived from
#[derive(Debug, PartialEq, Eq, Default, Clone, Copy)]
pub enum TagSource {
    /// `ro.build.date.utc` rendered as a UTC `YYYYMMDD` date
    #[default]
    BuildDate,
    /// Digits of `ro.build.version.incremental` minus the trailing time-of-day part
    Incremental,
}

impl FromStr for TagSource {
    type Err = ();

    fn from_str(input: &str) -> Result<TagSource, Self::Err> {
        match input {
            "build_date" => Ok(TagSource::BuildDate),
            "incremental" => Ok(TagSource::Incremental),
            _ => Err(()),
        }
    }
}

fn deserialize_tag_source<'de, D>(deserializer: D) -> Result<TagSource, D::Error>
where
    D: Deserializer<'de>,
{
    let buf = String::deserialize(deserializer)?;

    match TagSource::from_str(&buf) {
        Ok(val) => Ok(val),
        Err(_) => Err(serde::de::Error::custom(format!(
            "Invalid tag_source \"{}\" (expected \"build_date\" or \"incremental\")",
            buf
        ))),
    }
}
