use std::path::PathBuf;

use anycrc::{BitwiseCrc, ParameterSet, TableCrc};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Compute CRCs with any published or custom parameter set.
#[derive(Debug, Parser)]
#[command(name = "anycrc", version, about)]
pub struct Cli {
  /// Engine used for computations.
  #[arg(
    long,
    global = true,
    env = "ANYCRC_ENGINE",
    value_enum,
    ignore_case = true,
    default_value = "table"
  )]
  pub engine: Engine,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Engine {
  /// One bit at a time, straight from the definition.
  #[value(alias = "calc", alias = "calculate")]
  Bitwise,
  /// One byte at a time through a cached 256-entry table.
  #[default]
  #[value(alias = "lookup", alias = "lut")]
  Table,
}

impl Engine {
  pub fn checksum(self, params: ParameterSet, data: &[u8]) -> u64 {
    match self {
      Self::Bitwise => BitwiseCrc::checksum(&params, data),
      Self::Table => TableCrc::checksum(params, data),
    }
  }
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// List supported CRCs as a Markdown table.
  List,

  /// Search CRCs by partial name.
  Search {
    /// Name fragment, e.g. `16/x` or `modbus`.
    fragment: String,
  },

  /// Compute the CRC of a string.
  #[command(name = "string")]
  Text {
    /// CRC name, e.g. `CRC-32/ISO-HDLC` or `crc_32_iso_hdlc`.
    name: String,

    #[command(flatten)]
    encoding: EncodingArgs,

    input: String,
  },

  /// Compute the CRC of a file.
  File {
    /// CRC name, e.g. `CRC-32/ISO-HDLC` or `crc_32_iso_hdlc`.
    name: String,

    path: PathBuf,
  },

  /// Verify every catalog entry on both engines.
  Check,

  /// Name the algorithm with a given width, polynomial and check value.
  Identify {
    width: u8,

    /// Polynomial in normal form, hex (`0x` prefix optional).
    #[arg(value_parser = parse_hex_u64)]
    poly: u64,

    /// CRC of "123456789", hex (`0x` prefix optional).
    #[arg(value_parser = parse_hex_u64)]
    check: u64,
  },
}

/// How the `string` input is turned into bytes.
#[derive(Clone, Copy, Debug, Args)]
#[group(required = true, multiple = false)]
pub struct EncodingArgs {
  /// Input is hex digits.
  #[arg(long)]
  pub hex: bool,
  /// Input is US-ASCII.
  #[arg(long)]
  pub ascii: bool,
  /// Input is ISO-8859-1.
  #[arg(long)]
  pub latin1: bool,
  /// Input is UTF-8.
  #[arg(long)]
  pub utf8: bool,
}

impl EncodingArgs {
  pub fn encoding(self) -> crate::encoding::Encoding {
    use crate::encoding::Encoding;

    if self.hex {
      Encoding::Hex
    } else if self.ascii {
      Encoding::Ascii
    } else if self.latin1 {
      Encoding::Latin1
    } else {
      Encoding::Utf8
    }
  }
}

fn parse_hex_u64(s: &str) -> Result<u64, String> {
  let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
  u64::from_str_radix(digits, 16).map_err(|err| format!("invalid hex value `{s}`: {err}"))
}
