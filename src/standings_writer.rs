use crate::errors::SportrankError;
use crate::league::Standing;
use std::io::{BufWriter, Write};

const SINGULAR_POINT_SUFFIX: &str = "pt";
const PLURAL_POINT_SUFFIX: &str = "pts";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json
}

pub fn point_suffix(points: isize) -> &'static str {
    match points {
        1 | -1 => SINGULAR_POINT_SUFFIX,
        _ => PLURAL_POINT_SUFFIX
    }
}

/// `<rank>. <team>, <points> <pt|pts>`
pub fn format_standing(standing: &Standing) -> String {
    format!("{}. {}, {} {}",
        standing.rank, standing.team, standing.points, point_suffix(standing.points))
}

pub fn write_standings<W: Write>(output: W, standings: &[Standing], format: OutputFormat) -> Result<(), SportrankError> {
    match format {
        OutputFormat::Text => write_text(output, standings),
        OutputFormat::Json => write_json(output, standings)
    }
}

pub fn write_text<W: Write>(output: W, standings: &[Standing]) -> Result<(), SportrankError> {
    let mut output = BufWriter::new(output);
    for standing in standings {
        writeln!(output, "{}", format_standing(standing)).map_err(SportrankError::WriteOutput)?;
    }
    output.flush().map_err(SportrankError::WriteOutput)
}

pub fn write_json<W: Write>(output: W, standings: &[Standing]) -> Result<(), SportrankError> {
    let mut output = BufWriter::new(output);
    serde_json::to_writer_pretty(&mut output, standings).map_err(|error| {
        if error.is_io() {
            SportrankError::WriteOutput(error.into())
        } else {
            SportrankError::Encode(error)
        }
    })?;
    writeln!(output).map_err(SportrankError::WriteOutput)?;
    output.flush().map_err(SportrankError::WriteOutput)
}
