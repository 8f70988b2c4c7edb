pub mod latency;
pub mod leaderboard;
pub mod oracle;
pub mod wallet;
