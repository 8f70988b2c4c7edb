/// Event buffer shared with the page.
/// Must stay in sync with the page's `protocol.ts`.
///
/// Layout (all values f32):
/// ```text
/// [Events: n × 4 floats]   kind, a, b, c
/// ```
///
/// Events only signal that something changed; the page re-reads the JSON
/// view for the details.

/// Floats per game event: kind, a, b, c (wire format, never changes).
pub const EVENT_FLOATS: usize = 4;

/// State changed. `a` = state code (see `GameState::code`).
pub const EVENT_STATE: f32 = 1.0;
/// Celebrate a win. `a` = award.
pub const EVENT_CONFETTI: f32 = 2.0;
/// A claim failed; the page shows a blocking alert. `a` = amount.
pub const EVENT_CLAIM_ALERT: f32 = 3.0;
/// Activity feed changed. `a` = entry count.
pub const EVENT_FEED: f32 = 4.0;
/// Score changed. `a` = score, `b` = points just earned.
pub const EVENT_SCORE: f32 = 5.0;
/// Pot changed. `a` = pot.
pub const EVENT_POT: f32 = 6.0;
/// Wallet changed. `a` = balance, `b` = 1 when connected.
pub const EVENT_WALLET: f32 = 7.0;
/// Leaderboard arrived. `a` = entry count.
pub const EVENT_LEADERBOARD: f32 = 8.0;
/// A new riddle is on screen. `a` = shape count.
pub const EVENT_RIDDLE: f32 = 9.0;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::GameEvent;

    #[test]
    fn event_layout_matches_struct() {
        assert_eq!(EVENT_FLOATS, GameEvent::FLOATS);
    }
}
