pub mod api;
pub mod core;
pub mod input;
pub mod bridge;
pub mod render;
pub mod services;
pub mod game;
pub mod i18n;

// Re-export key types at crate root for convenience
pub use api::config::{SessionConfig, Variant, OracleConfig, WalletConfig};
pub use api::error::{TransportError, OracleError};
pub use api::types::{
    Language, Difficulty, AnimationSpeed, ShapeStyle, Complexity, VisualConfig,
    RiddleRecord, ValidationVerdict, WalletIdentity, ActivityEntry, ActivityKind,
    LeaderboardEntry, GameEvent, Ticket,
};
pub use crate::core::rng::Rng;
pub use crate::core::time::{Countdown, Interval};
pub use input::queue::{PlayerAction, ActionQueue};
pub use render::canvas::{render_shapes, ShapeDescriptor};
pub use services::oracle::{OracleClient, OracleRequest};
pub use services::wallet::{MockWallet, WalletOutcome, WalletReceipt};
pub use services::leaderboard::MockLeaderboard;
pub use game::controller::{Controller, ServiceCall, CallPurpose};
pub use game::feed::{ActivityFeed, FEED_CAPACITY};
pub use game::state::{GameState, SubmitStage, Award};
pub use game::view::SessionView;
pub use i18n::{strings, Strings};
