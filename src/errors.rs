use num_derive::{FromPrimitive, ToPrimitive};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub const ROW_FORMAT: &str = "<TeamA> <ScoreA>, <TeamB> <ScoreB>";

// Values are relied on by calling scripts; never renumber.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum ExitCode {
    Success = 0,
    InvalidFormat = 1,
    CouldNotReadInput = 2,
    CouldNotWriteOutput = 3,
    InternalError = 4,
    FlagParseError = 5
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("empty row, expected {}", ROW_FORMAT)]
    Empty,

    #[error("expected 2 sections after splitting by comma but got {0}, expected {format}", format = ROW_FORMAT)]
    SectionCount(usize),

    #[error("{side} side: expected a space separating team and score, expected {}", ROW_FORMAT)]
    MissingScore { side: &'static str },

    #[error("{side} side: score is not an integer [{score}], expected {}", ROW_FORMAT)]
    InvalidScore { side: &'static str, score: String }
}

#[derive(Debug, Error)]
pub enum SportrankError {
    #[error(transparent)]
    Args(#[from] clap::Error),

    #[error("could not open input {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error
    },

    #[error("could not read input: {0}")]
    ReadInput(#[source] io::Error),

    #[error("could not open output {}: {source}", .path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error
    },

    #[error("could not write output: {0}")]
    WriteOutput(#[source] io::Error),

    #[error("could not convert line {line} of input: {source}")]
    MalformedRow {
        line: usize,
        #[source]
        source: RowError
    },

    #[error("could not encode standings: {0}")]
    Encode(#[from] serde_json::Error)
}

impl SportrankError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SportrankError::Args(_) => ExitCode::FlagParseError,
            SportrankError::OpenInput { .. } | SportrankError::ReadInput(_) => ExitCode::CouldNotReadInput,
            SportrankError::OpenOutput { .. } | SportrankError::WriteOutput(_) => ExitCode::CouldNotWriteOutput,
            SportrankError::MalformedRow { .. } => ExitCode::InvalidFormat,
            SportrankError::Encode(_) => ExitCode::InternalError
        }
    }
}
