use crate::api::types::Language;

/// Everything the player can do. The page writes these; the session drains
/// them once per tick.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerAction {
    ConnectWallet,
    /// Replace the text in the guess field.
    SetGuess(String),
    Submit,
    /// Leave a lost (or errored) round and guess again.
    Retry,
    /// Collect the pot after a jackpot win.
    Claim,
    NewRound,
    ChangeLanguage(Language),
    ToggleLeaderboard,
}

/// A queue of player actions.
pub struct ActionQueue {
    actions: Vec<PlayerAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self {
            actions: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, action: PlayerAction) {
        self.actions.push(action);
    }

    /// Drain all pending actions in arrival order.
    pub fn drain(&mut self) -> Vec<PlayerAction> {
        std::mem::take(&mut self.actions)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
