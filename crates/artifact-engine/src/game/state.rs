use serde::Serialize;

/// What a win is worth: xp points, or the pot snapshot a jackpot winner may
/// claim. Only the controller mints one, and only on a correct verdict, so a
/// claim can never exist without a prior win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Award {
    amount: u64,
}

impl Award {
    pub(crate) fn new(amount: u64) -> Self {
        Self { amount }
    }

    pub fn amount(self) -> u64 {
        self.amount
    }
}

/// Which external call a submission is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStage {
    /// Entry fee in flight (jackpot only).
    Paying,
    /// Verdict in flight.
    Judging,
}

/// Screen state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Loading,
    Idle,
    Submitting(SubmitStage),
    Won(Award),
    Claiming(Award),
    Claimed(Award),
    Lost,
    Error,
}

impl GameState {
    /// Stable name for the page.
    pub fn name(self) -> &'static str {
        match self {
            GameState::Loading => "loading",
            GameState::Idle => "idle",
            GameState::Submitting(_) => "submitting",
            GameState::Won(_) => "won",
            GameState::Claiming(_) => "claiming",
            GameState::Claimed(_) => "claimed",
            GameState::Lost => "lost",
            GameState::Error => "error",
        }
    }

    /// Numeric code carried by state events.
    pub fn code(self) -> f32 {
        match self {
            GameState::Loading => 0.0,
            GameState::Idle => 1.0,
            GameState::Submitting(_) => 2.0,
            GameState::Won(_) => 3.0,
            GameState::Claiming(_) => 4.0,
            GameState::Claimed(_) => 5.0,
            GameState::Lost => 6.0,
            GameState::Error => 7.0,
        }
    }

    pub fn award(self) -> Option<Award> {
        match self {
            GameState::Won(a) | GameState::Claiming(a) | GameState::Claimed(a) => Some(a),
            _ => None,
        }
    }

    /// Whether a guess may be submitted from here.
    pub fn accepts_guess(self) -> bool {
        matches!(self, GameState::Idle | GameState::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_travels_with_win_states() {
        let award = Award::new(51);
        assert_eq!(GameState::Claiming(award).award().map(Award::amount), Some(51));
        assert_eq!(GameState::Lost.award(), None);
    }

    #[test]
    fn only_idle_and_error_accept_guesses() {
        assert!(GameState::Idle.accepts_guess());
        assert!(GameState::Error.accepts_guess());
        assert!(!GameState::Loading.accepts_guess());
        assert!(!GameState::Submitting(SubmitStage::Judging).accepts_guess());
        assert!(!GameState::Lost.accepts_guess());
    }

    #[test]
    fn codes_are_distinct() {
        let states = [
            GameState::Loading,
            GameState::Idle,
            GameState::Submitting(SubmitStage::Paying),
            GameState::Won(Award::new(1)),
            GameState::Claiming(Award::new(1)),
            GameState::Claimed(Award::new(1)),
            GameState::Lost,
            GameState::Error,
        ];
        for (i, a) in states.iter().enumerate() {
            for b in &states[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }
}
