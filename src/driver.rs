use crate::config::{Config, IoTarget, parse_config};
use crate::errors::{ExitCode, SportrankError};
use crate::league::calculate_rankings;
use crate::row_reader::{parse_rows, read_rows};
use crate::standings_writer::write_standings;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};

/// Runs the whole pipeline and reports how it went as an exit code.
pub fn run<I, T, R, W>(args: I, stdin: R, stdout: W) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: BufRead,
    W: Write,
{
    let config = match parse_config(args) {
        Ok(config) => config,
        Err(error) => return report_args_error(error, stdout)
    };
    init_logging(config.verbose);

    match run_with_config(&config, stdin, stdout) {
        Ok(()) => ExitCode::Success,
        Err(error) => {
            eprintln!("ERROR: {}", error);
            error.exit_code()
        }
    }
}

pub fn run_with_config<R: BufRead, W: Write>(config: &Config, stdin: R, stdout: W) -> Result<(), SportrankError> {
    log::debug!("input: {:?}, output: {:?}, format: {:?}", config.input, config.output, config.format);

    let rows = match &config.input {
        IoTarget::Std => read_rows(stdin)?,
        IoTarget::Path(path) => {
            let file = File::open(path).map_err(|source| SportrankError::OpenInput {
                path: path.clone(),
                source
            })?;
            read_rows(BufReader::new(file))?
        }
    };

    let match_results = parse_rows(&rows)?;
    let standings = calculate_rankings(&match_results);
    log::debug!("ranked {} teams from {} matches", standings.len(), match_results.len());

    match &config.output {
        IoTarget::Std => write_standings(stdout, &standings, config.format),
        IoTarget::Path(path) => {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
                .map_err(|source| SportrankError::OpenOutput {
                    path: path.clone(),
                    source
                })?;
            write_standings(file, &standings, config.format)
        }
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    // Already initialized when run more than once in one process.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .try_init();
}

fn report_args_error<W: Write>(error: clap::Error, mut stdout: W) -> ExitCode {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            match write!(stdout, "{}", error.render()).and_then(|()| stdout.flush()) {
                Ok(()) => ExitCode::Success,
                Err(source) => {
                    eprintln!("ERROR: {}", SportrankError::WriteOutput(source));
                    ExitCode::CouldNotWriteOutput
                }
            }
        }
        _ => {
            let _ = error.print();
            SportrankError::Args(error).exit_code()
        }
    }
}
