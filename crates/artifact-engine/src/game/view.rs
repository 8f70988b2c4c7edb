use serde::Serialize;

use crate::api::config::Variant;
use crate::api::types::{ActivityEntry, Language, LeaderboardEntry, RiddleRecord, WalletIdentity};
use crate::i18n::{self, Strings};
use crate::render::canvas::{backdrop_color, ShapeDescriptor};
use super::controller::Controller;
use super::state::{GameState, SubmitStage};

/// Everything the page needs to draw one frame, borrowed from the session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView<'a> {
    pub variant: Variant,
    pub language: Language,
    pub state: &'static str,
    pub submit_stage: Option<SubmitStage>,
    /// Points (xp) or pot snapshot (jackpot) of the current win.
    pub award: Option<u64>,
    pub riddle: Option<&'a RiddleRecord>,
    pub backdrop: Option<&'a str>,
    pub shapes: &'a [ShapeDescriptor],
    pub guess: &'a str,
    pub feedback: &'a str,
    pub wallet: &'a WalletIdentity,
    pub score: u64,
    pub pot: u64,
    pub feed: Vec<&'a ActivityEntry>,
    pub leaderboard: &'a [LeaderboardEntry],
    pub show_leaderboard: bool,
    pub strings: &'static Strings,
}

impl Controller {
    pub fn view(&self) -> SessionView<'_> {
        let state = self.state();
        let riddle = self.riddle();
        SessionView {
            variant: self.variant(),
            language: self.language(),
            state: state.name(),
            submit_stage: match state {
                GameState::Submitting(stage) => Some(stage),
                _ => None,
            },
            award: state.award().map(|a| a.amount()),
            riddle,
            backdrop: riddle.map(|r| backdrop_color(&r.visual_config)),
            shapes: self.shapes(),
            guess: self.guess(),
            feedback: self.feedback(),
            wallet: self.wallet(),
            score: self.score(),
            pot: self.pot(),
            feed: self.feed().entries().collect(),
            leaderboard: self.leaderboard(),
            show_leaderboard: self.show_leaderboard(),
            strings: i18n::strings(self.language()),
        }
    }

    /// The view as JSON, for the page.
    pub fn view_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.view())
    }
}
