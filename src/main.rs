use anyhow::Result;
use clap::Parser;
use std::io::Write;

use capx::{cli, clipboard::CommandClipboard, config, pipeline};

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let cfg = config::Config::load(args.config.as_deref())?;
    config::init_tracing(&cfg.logging, args.log_level.as_deref())?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "capx starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        cli::Command::Extract(cmd) => {
            let mut clipboard = CommandClipboard::new(cfg.clipboard.commands.clone());
            pipeline::run_extract(cmd, &cfg, &mut clipboard, &mut out).map(|_| ())
        }
        cli::Command::Segments(cmd) => pipeline::run_segments(cmd, &cfg, &mut out).map(|_| ()),
        cli::Command::ParseTime(cmd) => pipeline::run_parse_time(cmd, &mut out),
        cli::Command::PrintDefaultConfig => {
            let s = cfg.to_toml_pretty()?;
            write!(out, "{s}")?;
            Ok(())
        }
    }
}
