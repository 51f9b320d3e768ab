#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use fitcalc::{cli, packages, report, utils};
use std::io::{self, Write};

#[macro_use]
extern crate fitcalc;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let pkgs = match &cli.input {
        Some(path) => packages::load_packages(path)?,
        None => {
            dlog!("mode=samples");
            packages::sample_packages()
        }
    };
    dlog!(
        "packages={} format={:?} keep_going={}",
        pkgs.len(),
        cli.format,
        cli.keep_going
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = report::run(&pkgs, cli.format, cli.keep_going, &mut out)?;
    out.flush()?;

    tracing::info!(printed = stats.printed, failed = stats.failed, "done");

    if stats.failed > 0 {
        anyhow::bail!("{} of {} packages failed", stats.failed, pkgs.len());
    }

    Ok(())
}
