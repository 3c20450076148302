//! normalize a raw operating system name

use clap::Args;
use std::io::{self, Write};
use uaos::{
    error::{BoxError, ErrorContext as _},
    os::normalize_os,
};

#[derive(Debug, Args)]
/// normalize a raw operating system name (e.g. "Windows NT 6.1" to "Windows 7")
pub struct CliCommandNormalize {
    /// the raw operating system name
    pub(crate) name: String,
}

/// run the uaos normalize command
pub fn run(cfg: CliCommandNormalize) -> Result<(), BoxError> {
    writeln!(io::stdout().lock(), "{}", normalize_os(&cfg.name)).context("write output")?;
    Ok(())
}
