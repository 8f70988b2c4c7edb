use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Identifies one outstanding service call. `epoch` is the round the call
/// belongs to; replies from an older epoch are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket {
    pub epoch: u64,
    pub seq: u64,
}

/// Display language. Drives the translation table and the language the
/// generative service is asked to write in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
    Es,
    #[default]
    Tr,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Fr, Language::Es, Language::Tr];

    /// Two-letter code used in riddle ids and the page's language switcher.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::Tr => "tr",
        }
    }

    /// English name of the language, as written into prompts.
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "French",
            Language::Es => "Spanish",
            Language::Tr => "Turkish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown language code `{s}`"))
    }
}

/// Difficulty tier of a riddle. Determines the xp award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Points awarded for solving a riddle of this tier.
    pub fn points(self) -> u64 {
        match self {
            Difficulty::Easy => 500,
            Difficulty::Medium => 1000,
            Difficulty::Hard => 2000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    Normal,
    Fast,
    Chaos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeStyle {
    Rounded,
    Sharp,
    Liquid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Minimal,
    Complex,
}

/// Parameters the generative service picks to "draw" the hidden concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualConfig {
    /// Hex color codes, e.g. `#FF4500`. Never empty.
    pub colors: Vec<String>,
    pub animation_speed: AnimationSpeed,
    pub shape_style: ShapeStyle,
    pub complexity: Complexity,
}

impl VisualConfig {
    /// Check the invariants the closed enums can't express.
    pub fn validate(&self) -> Result<(), String> {
        if self.colors.is_empty() {
            return Err("visualConfig.colors is empty".to_string());
        }
        if let Some(bad) = self.colors.iter().find(|c| !is_hex_color(c)) {
            return Err(format!("visualConfig.colors has non-hex entry `{bad}`"));
        }
        Ok(())
    }
}

fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// One round's puzzle. The answer never leaves the generation client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiddleRecord {
    pub id: String,
    /// One cryptic poetic line describing the hidden concept.
    pub question: String,
    pub visual_config: VisualConfig,
    pub difficulty: Difficulty,
}

/// Judgement of a single guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    pub is_correct: bool,
    pub explanation: String,
}

/// The player's identity as seen by the game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletIdentity {
    /// Present iff connected.
    pub address: Option<String>,
    pub is_connected: bool,
    /// Spendable balance (jackpot variant only; zero otherwise).
    pub balance: u64,
}

impl WalletIdentity {
    pub fn connected(address: String, balance: u64) -> Self {
        Self {
            address: Some(address),
            is_connected: true,
            balance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Entry,
    Win,
    Fail,
}

/// One line of the activity ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub id: u64,
    pub text: String,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub address: String,
    pub score: u64,
    pub badges: Vec<String>,
}

/// A game event communicated from Rust to the page via a flat f32 buffer.
/// `kind` identifies the event (see `bridge::protocol`), `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32) -> Self {
        Self { kind, a, b: 0.0, c: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_by_tier() {
        assert_eq!(Difficulty::Easy.points(), 500);
        assert_eq!(Difficulty::Medium.points(), 1000);
        assert_eq!(Difficulty::Hard.points(), 2000);
    }

    #[test]
    fn language_parses_codes() {
        assert_eq!("fr".parse::<Language>(), Ok(Language::Fr));
        assert_eq!(" TR ".parse::<Language>(), Ok(Language::Tr));
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn visual_config_uses_camel_case_keys() {
        let json = r##"{
            "colors": ["#FF4500", "#330000", "#FFD700"],
            "animationSpeed": "chaos",
            "shapeStyle": "liquid",
            "complexity": "complex"
        }"##;
        let cfg: VisualConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.animation_speed, AnimationSpeed::Chaos);
        assert_eq!(cfg.shape_style, ShapeStyle::Liquid);
        assert_eq!(cfg.complexity, Complexity::Complex);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn visual_config_rejects_unknown_tier() {
        let json = r##"{
            "colors": ["#fff"],
            "animationSpeed": "glacial",
            "shapeStyle": "sharp",
            "complexity": "minimal"
        }"##;
        assert!(serde_json::from_str::<VisualConfig>(json).is_err());
    }

    #[test]
    fn validate_requires_hex_colors() {
        let mut cfg = VisualConfig {
            colors: vec![],
            animation_speed: AnimationSpeed::Slow,
            shape_style: ShapeStyle::Sharp,
            complexity: Complexity::Minimal,
        };
        assert!(cfg.validate().is_err());
        cfg.colors = vec!["red".to_string()];
        assert!(cfg.validate().is_err());
        cfg.colors = vec!["#abc".to_string(), "#A1B2C3".to_string()];
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn game_event_is_four_floats() {
        assert_eq!(std::mem::size_of::<GameEvent>(), GameEvent::FLOATS * 4);
    }
}
