use std::process::exit;

mod models;
mod steps;
mod utils;

use clap::Parser;
use log::debug;

use models::args::MainArgs;
use models::config::Config;
use steps::generate::Generator;

fn load_config(args: &MainArgs) -> anyhow::Result<Config> {
    let mut conf = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    conf.apply_args(args);
    conf.validate()?;

    Ok(conf)
}

fn generate(conf: &Config) -> utils::errors::Result<String> {
    let doc = Generator::init(conf).run()?;

    Ok(doc.to_json(conf.ota.pretty_json)?)
}

fn main() {
    let args: MainArgs = MainArgs::parse();

    let conf = match load_config(&args) {
        Ok(conf) => conf,
        Err(err) => {
            eprintln!("Error: Config invalid: {:#}", err);
            exit(1)
        }
    };
    utils::logging::init_logger(&conf.general.log_level);
    debug!("Work dir: {}", conf.env.work_dir.display());

    match generate(&conf) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("Error: {}", err);
            exit(1)
        }
    }
}
