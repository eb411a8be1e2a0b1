use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::exit::{usage, CliResult};
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build one frame and print it.
    Encode(EncodeArgs),
    /// Parse received frame bytes and print their contents.
    Decode(DecodeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Frame type tag (0-255).
    #[arg(long, short = 't')]
    pub frame_type: u8,
    /// Payload as a UTF-8 string.
    #[arg(long, conflicts_with_all = ["hex", "file"])]
    pub data: Option<String>,
    /// Payload as hex digits.
    #[arg(long, conflicts_with_all = ["data", "file"])]
    pub hex: Option<String>,
    /// Read payload from file.
    #[arg(long, conflicts_with_all = ["data", "hex"])]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Frame bytes as hex digits.
    #[arg(conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read frame bytes from file.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Print extended build information.
    #[arg(long)]
    pub extended: bool,
}

/// Parse a hex digit string ("42021122" or "42 02 11 22") into bytes.
pub fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(usage(format!(
            "hex input has an odd number of digits ({})",
            digits.len()
        )));
    }
    let mut bytes = Vec::with_capacity(digits.len() / 2);
    for pair in digits.as_bytes().chunks(2) {
        let pair = std::str::from_utf8(pair).map_err(|_| usage("hex input is not ASCII"))?;
        let byte = u8::from_str_radix(pair, 16)
            .map_err(|_| usage(format!("invalid hex byte {pair:?}")))?;
        bytes.push(byte);
    }
    Ok(bytes)
}
