use super::constants::LEADERBOARD_SIZE;
use super::types::{BodyRef, LeaderboardEntry};

/// Top scores across every live body, highest first. Ties keep input order.
pub fn compute_leaderboard(bodies: &[BodyRef<'_>]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = bodies
        .iter()
        .filter(|body| !body.id().is_empty())
        .map(|body| LeaderboardEntry {
            id: body.id().to_string(),
            nickname: body.nickname().to_string(),
            score: body.score(),
        })
        .collect();
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(LEADERBOARD_SIZE);
    entries
}
