use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = "Generate OTA JSON for LineageOS builds")]
pub struct MainArgs {
    /// Directory containing system/build.prop and the build zip (default: current directory)
    #[clap(short, long, value_parser, value_name = "work dir")]
    pub work_dir: Option<PathBuf>,

    // Optional
    /// Tool settings (release URL, romtype, logging)
    #[clap(short, long, value_parser, value_name = "Config file")]
    pub config: Option<PathBuf>,
}
