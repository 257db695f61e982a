use clap::{Args, Subcommand};
use std::path::PathBuf;
use unirecode_codec::DEFAULT_BUFFER_SIZE;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod list;
pub mod recode;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Transcode a stream from one encoding to another.
    Recode(RecodeArgs),
    /// List the available codecs.
    List(ListArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Recode(args) => recode::run(args),
        Command::List(args) => list::run(args, format),
        Command::Version(args) => version::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct RecodeArgs {
    /// Encoding of the input (see `unirecode list`).
    #[arg(short = 'd', long, value_name = "NAME", env = "UNIRECODE_DECODER")]
    pub decoder: String,
    /// Encoding of the output.
    #[arg(short = 'e', long, value_name = "NAME", env = "UNIRECODE_ENCODER")]
    pub encoder: String,
    /// Write to this file instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Read from this file instead of stdin ("-" also means stdin).
    pub input: Option<PathBuf>,
    /// Capacity of the read and write buffers.
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_BUFFER_SIZE)]
    pub buffer_size: usize,
    /// Match codec names case-insensitively.
    #[arg(long)]
    pub ignore_case: bool,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
