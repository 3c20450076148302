//! entrypoint for uaos-cli

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

pub mod cmd;
use self::cmd::{detect, normalize};

pub mod trace;

#[derive(Debug, Parser)]
#[command(name = "uaos")]
#[command(bin_name = "uaos")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmds: CliCommands,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    Detect(detect::CliCommandDetect),
    Normalize(normalize::CliCommandNormalize),
}

fn main() {
    let cli = Cli::parse();

    #[expect(clippy::exit)]
    if let Err(err) = trace::init_tracing(LevelFilter::INFO).and_then(|()| match cli.cmds {
        CliCommands::Detect(cfg) => detect::run(cfg),
        CliCommands::Normalize(cfg) => normalize::run(cfg),
    }) {
        eprintln!("🚩 exit with error: {err}");
        std::process::exit(1);
    }
}
