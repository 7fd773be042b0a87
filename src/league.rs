use serde::Serialize;
use std::collections::HashMap;

pub const WIN_POINTS: isize = 3;
pub const DRAW_POINTS: isize = 1;
pub const LOSE_POINTS: isize = 0;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub team_a: String,
    pub score_a: isize,
    pub team_b: String,
    pub score_b: isize
}

impl MatchResult {
    pub fn new(team_a: &str, score_a: isize, team_b: &str, score_b: isize) -> MatchResult {
        MatchResult {
            team_a: team_a.to_string(),
            score_a,
            team_b: team_b.to_string(),
            score_b
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub rank: usize,
    pub team: String,
    pub points: isize
}

/// Points handed out for each match outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoringRule {
    pub win: isize,
    pub draw: isize,
    pub lose: isize
}

impl Default for ScoringRule {
    fn default() -> Self {
        ScoringRule {
            win: WIN_POINTS,
            draw: DRAW_POINTS,
            lose: LOSE_POINTS
        }
    }
}

impl ScoringRule {
    pub fn assign_points(&self, score_a: isize, score_b: isize) -> (isize, isize) {
        if score_a == score_b {
            (self.draw, self.draw)
        } else if score_a > score_b {
            (self.win, self.lose)
        } else {
            (self.lose, self.win)
        }
    }
}

/// Points earned by each side of a match under the standard 3/1/0 rule.
pub fn assign_points(score_a: isize, score_b: isize) -> (isize, isize) {
    ScoringRule::default().assign_points(score_a, score_b)
}

pub fn aggregate_points(match_results: &[MatchResult], scoring: &ScoringRule) -> HashMap<String, isize> {
    let mut points: HashMap<String, isize> = HashMap::new();
    for match_result in match_results {
        let (points_a, points_b) = scoring.assign_points(match_result.score_a, match_result.score_b);
        *points.entry(match_result.team_a.clone()).or_insert(0) += points_a;
        *points.entry(match_result.team_b.clone()).or_insert(0) += points_b;
    }
    points
}

/// Sorts teams by points descending then name ascending, and assigns
/// competition ("1224") ranks: tied teams share a rank and the next
/// distinct total takes its 1-based position.
pub fn assign_ranks(points: HashMap<String, isize>) -> Vec<Standing> {
    let mut table: Vec<(String, isize)> = points.into_iter().collect();
    table.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut standings: Vec<Standing> = Vec::with_capacity(table.len());
    for (position, (team, points)) in table.into_iter().enumerate() {
        let rank = match standings.last() {
            Some(previous) if previous.points == points => previous.rank,
            _ => position + 1
        };
        standings.push(Standing { rank, team, points });
    }
    standings
}

pub fn calculate_rankings_with(match_results: &[MatchResult], scoring: &ScoringRule) -> Vec<Standing> {
    assign_ranks(aggregate_points(match_results, scoring))
}

/// Determine the final league table for a batch of match results.
pub fn calculate_rankings(match_results: &[MatchResult]) -> Vec<Standing> {
    calculate_rankings_with(match_results, &ScoringRule::default())
}
