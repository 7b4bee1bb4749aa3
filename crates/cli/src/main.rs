//! `anycrc` command line tool.

use std::io::{self, Write};

use clap::Parser;
use eyre::Result;

mod args;
mod cmd;
mod encoding;

use args::{Cli, Command};

fn main() -> Result<()> {
  subscriber();
  let cli = Cli::parse();
  tracing::debug!(engine = ?cli.engine, "selected engine");

  let stdout = io::stdout();
  let mut out = stdout.lock();
  match cli.command {
    Command::List => write!(out, "{}", cmd::list())?,
    Command::Search { fragment } => {
      for name in cmd::search(&fragment) {
        writeln!(out, "{name}")?;
      }
    }
    Command::Text { name, encoding, input } => {
      let crc = cmd::string(cli.engine, &name, encoding.encoding(), &input)?;
      writeln!(out, "crc(hex)={crc:x}")?;
    }
    Command::File { name, path } => {
      let crc = cmd::file(cli.engine, &name, &path)?;
      writeln!(out, "crc(hex)={crc:x}")?;
    }
    Command::Check => cmd::check(&mut out)?,
    Command::Identify { width, poly, check } => {
      let params = cmd::identify(width, poly, check)?;
      writeln!(out, "{params}")?;
    }
  }
  Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn subscriber() {
  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
  tracing_subscriber::fmt().with_writer(io::stderr).with_env_filter(filter).init();
}
