use crate::errors::{RowError, SportrankError};
use crate::league::MatchResult;
use std::io::BufRead;

const ROW_SPLIT: char = ',';
const SIDE_SPLIT: char = ' ';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub text: String
}

/// Reads every non-blank line, remembering where it came from.
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn read_rows<R: BufRead>(reader: R) -> Result<Vec<Row>, SportrankError> {
    let mut rows = Vec::new();
    for (index, line) in reader.split(b'\n').enumerate() {
        let raw = line.map_err(SportrankError::ReadInput)?;
        let bytes: &[u8] = raw.strip_suffix(b"\r").unwrap_or(&raw[..]);
        let text = String::from_utf8_lossy(bytes).into_owned();
        if text.trim().is_empty() {
            continue;
        }
        rows.push(Row { line: index + 1, text });
    }
    log::debug!("read {} rows", rows.len());
    Ok(rows)
}

pub fn parse_rows(rows: &[Row]) -> Result<Vec<MatchResult>, SportrankError> {
    rows.iter()
        .map(|row| parse_row(&row.text)
            .map_err(|source| SportrankError::MalformedRow { line: row.line, source }))
        .collect()
}

/// Parses `<TeamA> <ScoreA>, <TeamB> <ScoreB>`.
pub fn parse_row(row: &str) -> Result<MatchResult, RowError> {
    if row.trim().is_empty() {
        return Err(RowError::Empty);
    }

    let sides: Vec<&str> = row.split(ROW_SPLIT).collect();
    if sides.len() != 2 {
        return Err(RowError::SectionCount(sides.len()));
    }

    let (team_a, score_a) = parse_side(sides[0], "first")?;
    let (team_b, score_b) = parse_side(sides[1], "second")?;

    Ok(MatchResult {
        team_a,
        score_a,
        team_b,
        score_b
    })
}

fn parse_side(side: &str, name: &'static str) -> Result<(String, isize), RowError> {
    let cleaned = side.trim();

    // Team names may contain spaces, so only the last one separates the score.
    let (team, score) = cleaned
        .rsplit_once(SIDE_SPLIT)
        .ok_or(RowError::MissingScore { side: name })?;
    let score = score.trim();

    let score = score.parse::<isize>().map_err(|_| RowError::InvalidScore {
        side: name,
        score: score.to_string()
    })?;

    Ok((team.trim().to_string(), score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExitCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_simple_row() {
        assert_eq!(parse_row("Lions 3, Snakes 3"), Ok(MatchResult::new("Lions", 3, "Snakes", 3)));
    }

    #[test]
    fn team_names_keep_inner_spaces() {
        assert_eq!(
            parse_row("  Tarantulas 1,   FC  Awesome 0  "),
            Ok(MatchResult::new("Tarantulas", 1, "FC  Awesome", 0))
        );
    }

    #[test]
    fn signed_scores_parse() {
        assert_eq!(parse_row("A -1, B +2"), Ok(MatchResult::new("A", -1, "B", 2)));
    }

    #[test]
    fn rejects_malformed_rows() {
        assert_eq!(parse_row("   "), Err(RowError::Empty));
        assert_eq!(parse_row("Lions 3 Snakes 3"), Err(RowError::SectionCount(1)));
        assert_eq!(parse_row("Lions, Inc 3, Snakes 3"), Err(RowError::SectionCount(3)));
        assert_eq!(parse_row("Lions3, Snakes 3"), Err(RowError::MissingScore { side: "first" }));
        assert_eq!(
            parse_row("Lions 3, Snakes three"),
            Err(RowError::InvalidScore { side: "second", score: "three".to_string() })
        );
    }

    #[test]
    fn read_rows_skips_blank_lines_and_keeps_line_numbers() {
        let input = "Lions 3, Snakes 3\n\n   \nLions 4, Grouches 0\n";
        let rows = read_rows(input.as_bytes()).unwrap();
        assert_eq!(rows, vec![
            Row { line: 1, text: "Lions 3, Snakes 3".to_string() },
            Row { line: 4, text: "Lions 4, Grouches 0".to_string() },
        ]);
    }

    #[test]
    fn read_rows_handles_crlf_and_invalid_utf8() {
        let input: &[u8] = b"Lions 3, Snakes 3\r\nCaf\xe9 3, Snakes 1\n";
        let rows = read_rows(input).unwrap();
        assert_eq!(rows, vec![
            Row { line: 1, text: "Lions 3, Snakes 3".to_string() },
            Row { line: 2, text: "Caf\u{FFFD} 3, Snakes 1".to_string() },
        ]);
    }

    #[test]
    fn parse_rows_reports_offending_line() {
        let rows = vec![
            Row { line: 1, text: "Lions 3, Snakes 3".to_string() },
            Row { line: 5, text: "Lions 3 Snakes 3".to_string() },
        ];
        let error = parse_rows(&rows).unwrap_err();
        assert_eq!(error.exit_code(), ExitCode::InvalidFormat);
        match error {
            SportrankError::MalformedRow { line, source } => {
                assert_eq!(line, 5);
                assert_eq!(source, RowError::SectionCount(1));
            }
            other => panic!("unexpected error: {other}")
        }
    }

    #[test]
    fn parse_rows_preserves_order() {
        let rows = vec![
            Row { line: 1, text: "B 1, A 0".to_string() },
            Row { line: 2, text: "C 2, D 2".to_string() },
        ];
        assert_eq!(parse_rows(&rows).unwrap(), vec![
            MatchResult::new("B", 1, "A", 0),
            MatchResult::new("C", 2, "D", 2),
        ]);
    }
}
