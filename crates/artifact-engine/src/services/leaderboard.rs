use crate::api::types::{LeaderboardEntry, Ticket};
use super::latency::LatencyQueue;

/// Simulated leaderboard backend. Serves a fixed ranking and accepts score
/// submissions without storing them.
pub struct MockLeaderboard {
    delay: f32,
    queue: LatencyQueue<Vec<LeaderboardEntry>>,
}

impl MockLeaderboard {
    pub fn new(delay: f32) -> Self {
        Self {
            delay,
            queue: LatencyQueue::new(),
        }
    }

    /// Request the ranking; it arrives `delay` seconds later.
    pub fn fetch(&mut self, ticket: Ticket) {
        self.queue.push(ticket, self.delay, standings());
    }

    /// Report points earned by `address`. Always succeeds; nothing persists.
    pub fn submit_score(&mut self, address: &str, points: u64) -> bool {
        log::info!("leaderboard: +{} xp for {}", points, address);
        true
    }

    pub fn tick(&mut self, dt: f32) -> Vec<(Ticket, Vec<LeaderboardEntry>)> {
        self.queue.tick(dt)
    }
}

/// The canned ranking.
pub fn standings() -> Vec<LeaderboardEntry> {
    let entry = |rank: u32, address: &str, score: u64, badges: &[&str]| LeaderboardEntry {
        rank,
        address: address.to_string(),
        score,
        badges: badges.iter().map(|b| b.to_string()).collect(),
    };
    vec![
        entry(1, "0x71C...9A23", 15400, &["👑", "🧠"]),
        entry(2, "0xA4B...11FE", 12200, &["🔥"]),
        entry(3, "0x99C...44DD", 9800, &["⚡"]),
        entry(4, "0x12F...88AA", 8500, &[]),
        entry(5, "0x33D...22BB", 6000, &[]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_strictly_increase() {
        let board = standings();
        assert_eq!(board.len(), 5);
        for pair in board.windows(2) {
            assert!(pair[0].rank < pair[1].rank);
            assert!(pair[0].score > pair[1].score);
        }
    }

    #[test]
    fn fetch_arrives_after_delay() {
        let mut lb = MockLeaderboard::new(0.5);
        let ticket = Ticket { epoch: 0, seq: 1 };
        lb.fetch(ticket);
        assert!(lb.tick(0.25).is_empty());
        let ready = lb.tick(0.25);
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].0, ticket);
        assert_eq!(ready[0].1[0].address, "0x71C...9A23");
    }

    #[test]
    fn submit_always_succeeds() {
        let mut lb = MockLeaderboard::new(0.5);
        assert!(lb.submit_score("0xabc...9A23", 2000));
    }
}
