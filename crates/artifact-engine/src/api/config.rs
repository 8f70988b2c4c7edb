use serde::{Deserialize, Serialize};

use crate::api::types::Language;

/// Which rule set the session plays by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Free entry, wins add difficulty points to an xp score.
    #[default]
    Xp,
    /// Paid entry feeding a pot that the winner claims.
    Jackpot,
}

/// Where and how to reach the generative service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Base URL, without trailing slash.
    pub endpoint: String,
    pub model: String,
    /// Sent as `x-goog-api-key` when non-empty.
    pub api_key: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            api_key: String::new(),
        }
    }
}

/// Latency and reliability of the simulated wallet.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    pub connect_delay: f32,
    pub fee_delay: f32,
    pub claim_delay: f32,
    /// Probability an entry-fee payment confirms (default: 0.95).
    pub fee_success_rate: f32,
    /// Probability a prize claim confirms (default: 1.0).
    pub claim_success_rate: f32,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            connect_delay: 0.8,
            fee_delay: 2.0,
            claim_delay: 2.5,
            fee_success_rate: 0.95,
            claim_success_rate: 1.0,
        }
    }
}

/// Session configuration, provided by the page as JSON at init.
/// Every field is optional; `{}` yields the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub variant: Variant,
    /// Initial language (default: Turkish).
    pub language: Language,
    /// PRNG seed for addresses, ids and wallet rolls.
    pub seed: u64,
    /// Fetch date (`YYYY-MM-DD`) embedded in riddle ids.
    pub today: String,
    pub oracle: OracleConfig,
    pub wallet: WalletConfig,
    /// Seconds between synthetic activity entries (default: 4.0).
    pub feed_interval: f32,
    /// Score the player already holds when connecting (xp variant).
    pub existing_score: u64,
    /// Pot floor restored after each claim (jackpot variant).
    pub house_seed: u64,
    /// Fee charged per guess (jackpot variant).
    pub entry_fee: u64,
    /// Balance a freshly connected wallet holds (jackpot variant).
    pub starting_balance: u64,
    /// Seconds between a confirmed claim and the pot reset.
    pub pot_reset_delay: f32,
    /// Simulated leaderboard latency in seconds.
    pub leaderboard_delay: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Xp,
            language: Language::Tr,
            seed: 42,
            today: "1970-01-01".to_string(),
            oracle: OracleConfig::default(),
            wallet: WalletConfig::default(),
            feed_interval: 4.0,
            existing_score: 1250,
            house_seed: 50,
            entry_fee: 1,
            starting_balance: 100,
            pot_reset_delay: 2.0,
            leaderboard_delay: 0.5,
        }
    }
}

impl SessionConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = SessionConfig::from_json("{}").unwrap();
        assert_eq!(cfg.variant, Variant::Xp);
        assert_eq!(cfg.language, Language::Tr);
        assert_eq!(cfg.feed_interval, 4.0);
        assert_eq!(cfg.house_seed, 50);
        assert_eq!(cfg.wallet.fee_success_rate, 0.95);
        assert_eq!(cfg.oracle.model, "gemini-3-flash-preview");
    }

    #[test]
    fn partial_nested_config_keeps_other_defaults() {
        let json = r#"{
            "variant": "jackpot",
            "language": "es",
            "wallet": { "fee_success_rate": 0.0 },
            "oracle": { "api_key": "k" }
        }"#;
        let cfg = SessionConfig::from_json(json).unwrap();
        assert_eq!(cfg.variant, Variant::Jackpot);
        assert_eq!(cfg.language, Language::Es);
        assert_eq!(cfg.wallet.fee_success_rate, 0.0);
        assert_eq!(cfg.wallet.claim_delay, 2.5);
        assert_eq!(cfg.oracle.api_key, "k");
        assert!(cfg.oracle.endpoint.starts_with("https://"));
    }

    #[test]
    fn unknown_variant_is_an_error() {
        assert!(SessionConfig::from_json(r#"{ "variant": "poker" }"#).is_err());
    }
}
