use crate::standings_writer::OutputFormat;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

const STD_STREAM: &str = "-";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IoTarget {
    Std,
    Path(PathBuf)
}

impl IoTarget {
    fn from_arg(arg: &str) -> IoTarget {
        let cleaned = arg.trim();
        if cleaned == STD_STREAM {
            IoTarget::Std
        } else {
            IoTarget::Path(PathBuf::from(cleaned))
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sportrank", version)]
#[command(about = "Rank league teams from match results", long_about = None)]
struct Cli {
    /// Input file, or - for STDIN.
    #[arg(short, long, default_value = STD_STREAM)]
    input: String,

    /// Output file, or - for STDOUT.
    #[arg(short, long, default_value = STD_STREAM)]
    output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: IoTarget,
    pub output: IoTarget,
    pub format: OutputFormat,
    pub verbose: bool
}

pub fn parse_config<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    Ok(Config {
        input: IoTarget::from_arg(&cli.input),
        output: IoTarget::from_arg(&cli.output),
        format: cli.format,
        verbose: cli.verbose
    })
}
