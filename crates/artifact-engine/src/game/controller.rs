use std::collections::HashMap;

use crate::api::config::{SessionConfig, Variant};
use crate::api::error::TransportError;
use crate::api::types::{
    ActivityKind, Difficulty, GameEvent, Language, LeaderboardEntry, RiddleRecord, Ticket,
    ValidationVerdict, WalletIdentity,
};
use crate::bridge::protocol::*;
use crate::core::rng::Rng;
use crate::core::time::{Countdown, Interval};
use crate::i18n::{self, Strings, SYSTEM_ERROR};
use crate::input::queue::PlayerAction;
use crate::render::canvas::{render_shapes, ShapeDescriptor};
use crate::services::leaderboard::MockLeaderboard;
use crate::services::oracle::{self, OracleClient, OracleRequest};
use crate::services::wallet::{MockWallet, WalletOutcome, WalletReceipt};
use super::feed::ActivityFeed;
use super::state::{Award, GameState, SubmitStage};

/// Which generative-service call a ticket stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallPurpose {
    Riddle,
    Verdict,
}

/// A request the bridge must send; the body comes back through
/// `Controller::deliver` under the same ticket.
#[derive(Debug, Clone)]
pub struct ServiceCall {
    pub ticket: Ticket,
    pub purpose: CallPurpose,
    pub request: OracleRequest,
}

/// One play session: owns every piece of game state and drives the round
/// state machine. Construct one per page load.
pub struct Controller {
    config: SessionConfig,
    oracle: OracleClient,
    wallet_stub: MockWallet,
    leaderboard_stub: MockLeaderboard,
    rng: Rng,

    language: Language,
    state: GameState,
    riddle: Option<RiddleRecord>,
    shapes: Vec<ShapeDescriptor>,
    guess: String,
    feedback: String,

    wallet: WalletIdentity,
    connecting: bool,
    score: u64,
    pot: u64,
    /// Pending pot reset and the prize it takes out of the pot.
    pot_reset: Option<(Countdown, u64)>,

    feed: ActivityFeed,
    feed_timer: Interval,
    leaderboard: Vec<LeaderboardEntry>,
    show_leaderboard: bool,

    /// Bumped whenever the round is superseded; older tickets are stale.
    epoch: u64,
    next_seq: u64,
    in_flight: HashMap<Ticket, CallPurpose>,
    outbox: Vec<ServiceCall>,
    events: Vec<GameEvent>,

    started: bool,
    torn_down: bool,
}

impl Controller {
    pub fn new(config: SessionConfig) -> Self {
        let wallet_stub = MockWallet::new(config.wallet.clone(), config.seed ^ 0x9E37_79B9_7F4A_7C15);
        Self {
            oracle: OracleClient::new(config.oracle.clone()),
            wallet_stub,
            leaderboard_stub: MockLeaderboard::new(config.leaderboard_delay),
            rng: Rng::new(config.seed),
            language: config.language,
            state: GameState::Loading,
            riddle: None,
            shapes: Vec::new(),
            guess: String::new(),
            feedback: String::new(),
            wallet: WalletIdentity::default(),
            connecting: false,
            score: 0,
            pot: config.house_seed,
            pot_reset: None,
            feed: ActivityFeed::new(),
            feed_timer: Interval::new(config.feed_interval),
            leaderboard: Vec::new(),
            show_leaderboard: false,
            epoch: 0,
            next_seq: 0,
            in_flight: HashMap::new(),
            outbox: Vec::new(),
            events: Vec::new(),
            started: false,
            torn_down: false,
            config,
        }
    }

    /// Kick off the first riddle fetch and the leaderboard load.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        log::info!(
            "session started: variant={:?} language={}",
            self.config.variant,
            self.language
        );
        let ticket = self.ticket();
        self.leaderboard_stub.fetch(ticket);
        self.begin_loading();
    }

    /// Stop the activity timer and ignore everything that arrives later.
    pub fn teardown(&mut self) {
        self.feed_timer.cancel();
        self.torn_down = true;
        log::info!("session torn down");
    }

    /// Advance simulated time by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if !self.started || self.torn_down {
            return;
        }

        let fires = self.feed_timer.accumulate(dt);
        if fires > 0 {
            let strings = self.strings();
            for _ in 0..fires {
                self.feed.push_synthetic(&mut self.rng, strings);
            }
            self.emit(EVENT_FEED, self.feed.len() as f32);
        }

        // Before wallet receipts, so a reset scheduled this tick waits its full delay
        if let Some((timer, _)) = self.pot_reset.as_mut() {
            if timer.tick(dt) {
                self.settle_pot_reset();
            }
        }

        for receipt in self.wallet_stub.tick(dt) {
            self.on_wallet(receipt);
        }

        for (_, entries) in self.leaderboard_stub.tick(dt) {
            self.leaderboard = entries;
            self.emit(EVENT_LEADERBOARD, self.leaderboard.len() as f32);
        }
    }

    /// Apply one player action.
    pub fn apply(&mut self, action: PlayerAction) {
        match action {
            PlayerAction::ConnectWallet => self.connect_wallet(),
            PlayerAction::SetGuess(text) => self.set_guess(text),
            PlayerAction::Submit => {
                self.submit();
            }
            PlayerAction::Retry => self.retry(),
            PlayerAction::Claim => self.claim(),
            PlayerAction::NewRound => self.new_round(),
            PlayerAction::ChangeLanguage(lang) => self.change_language(lang),
            PlayerAction::ToggleLeaderboard => self.toggle_leaderboard(),
        }
    }

    pub fn connect_wallet(&mut self) {
        if self.wallet.is_connected || self.connecting {
            return;
        }
        self.connecting = true;
        let ticket = self.ticket();
        self.wallet_stub.connect(ticket);
    }

    pub fn set_guess(&mut self, text: impl Into<String>) {
        if self.state.accepts_guess() {
            self.guess = text.into();
        }
    }

    /// Submit the current guess. Returns false (and changes nothing) unless a
    /// riddle is showing, the wallet is connected and the guess isn't blank.
    pub fn submit(&mut self) -> bool {
        if !self.state.accepts_guess() || !self.wallet.is_connected || self.guess.trim().is_empty() {
            return false;
        }
        let Some(question) = self.riddle.as_ref().map(|r| r.question.clone()) else {
            return false;
        };

        match self.config.variant {
            Variant::Xp => self.request_verdict(&question),
            Variant::Jackpot => {
                let fee = self.config.entry_fee;
                if self.wallet.balance < fee {
                    log::warn!("entry fee {} exceeds balance {}", fee, self.wallet.balance);
                    self.feedback = self.strings().rejected.to_string();
                    self.set_state(GameState::Idle);
                    return false;
                }
                let ticket = self.ticket();
                self.wallet_stub.pay_entry_fee(ticket, fee);
                self.feedback = self.strings().processing.to_string();
                self.set_state(GameState::Submitting(SubmitStage::Paying));
            }
        }
        true
    }

    /// Back to guessing after a loss or a system error. No refund, no charge.
    pub fn retry(&mut self) {
        if !matches!(self.state, GameState::Lost | GameState::Error) {
            return;
        }
        self.guess.clear();
        self.feedback.clear();
        if self.riddle.is_some() {
            self.set_state(GameState::Idle);
        } else {
            self.begin_loading();
        }
    }

    /// Collect the pot after a jackpot win.
    pub fn claim(&mut self) {
        if self.config.variant != Variant::Jackpot {
            return;
        }
        let GameState::Won(award) = self.state else {
            return;
        };
        let ticket = self.ticket();
        self.wallet_stub.claim_prize(ticket, award.amount());
        self.feedback = self.strings().processing.to_string();
        self.set_state(GameState::Claiming(award));
    }

    /// Fetch the next riddle once the current one is settled. Score, wallet
    /// and pot carry over.
    pub fn new_round(&mut self) {
        match (self.config.variant, self.state) {
            (Variant::Xp, GameState::Won(_)) | (Variant::Jackpot, GameState::Claimed(_)) => {
                self.begin_loading()
            }
            _ => {}
        }
    }

    pub fn change_language(&mut self, lang: Language) {
        if lang == self.language {
            return;
        }
        log::info!("language {} -> {}", self.language, lang);
        self.language = lang;
        self.begin_loading();
    }

    pub fn toggle_leaderboard(&mut self) {
        self.show_leaderboard = !self.show_leaderboard;
    }

    /// Requests the bridge has yet to send.
    pub fn drain_calls(&mut self) -> Vec<ServiceCall> {
        std::mem::take(&mut self.outbox)
    }

    /// Hand back the outcome of a `ServiceCall`.
    pub fn deliver(&mut self, ticket: Ticket, reply: Result<String, TransportError>) {
        if self.torn_down {
            return;
        }
        let Some(purpose) = self.in_flight.remove(&ticket) else {
            log::warn!("reply for unknown ticket {:?}", ticket);
            return;
        };
        if ticket.epoch != self.epoch {
            log::debug!("dropping stale {:?} reply (epoch {} < {})", purpose, ticket.epoch, self.epoch);
            return;
        }
        if let Err(TransportError::Bridge(msg)) = &reply {
            log::error!("{:?} call could not be issued: {}", purpose, msg);
            self.fail();
            return;
        }

        match purpose {
            CallPurpose::Riddle => {
                let nonce = self.rng.hex(8);
                let riddle =
                    oracle::riddle_from_reply(reply, self.language, &self.config.today, &nonce);
                self.show_riddle(riddle);
            }
            CallPurpose::Verdict => {
                if self.state != GameState::Submitting(SubmitStage::Judging) {
                    log::warn!("verdict arrived in state {}", self.state.name());
                    return;
                }
                let verdict = oracle::verdict_from_reply(reply);
                self.resolve(verdict);
            }
        }
    }

    /// Drop this frame's events.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    // ---- Internals ----

    fn strings(&self) -> &'static Strings {
        i18n::strings(self.language)
    }

    fn ticket(&mut self) -> Ticket {
        self.next_seq += 1;
        Ticket {
            epoch: self.epoch,
            seq: self.next_seq,
        }
    }

    fn emit(&mut self, kind: f32, a: f32) {
        self.events.push(GameEvent::new(kind, a));
    }

    fn set_state(&mut self, state: GameState) {
        if self.state == state {
            return;
        }
        log::debug!("state {} -> {}", self.state.name(), state.name());
        self.state = state;
        self.emit(EVENT_STATE, state.code());
    }

    fn issue(&mut self, ticket: Ticket, purpose: CallPurpose, request: OracleRequest) {
        log::debug!("issuing {:?} call {:?}", purpose, ticket);
        self.in_flight.insert(ticket, purpose);
        self.outbox.push(ServiceCall {
            ticket,
            purpose,
            request,
        });
    }

    /// Supersede whatever round is in progress and fetch a new riddle.
    fn begin_loading(&mut self) {
        self.epoch += 1;
        self.feed_timer.restart();
        self.riddle = None;
        self.shapes.clear();
        self.set_state(GameState::Loading);
        let ticket = self.ticket();
        let request = self.oracle.riddle_request(self.language);
        self.issue(ticket, CallPurpose::Riddle, request);
    }

    fn show_riddle(&mut self, riddle: RiddleRecord) {
        log::info!("riddle {} ready ({:?})", riddle.id, riddle.difficulty);
        self.shapes = render_shapes(&riddle.visual_config);
        self.riddle = Some(riddle);
        self.guess.clear();
        self.feedback.clear();
        self.emit(EVENT_RIDDLE, self.shapes.len() as f32);
        self.set_state(GameState::Idle);
    }

    fn request_verdict(&mut self, question: &str) {
        let ticket = self.ticket();
        let request = self
            .oracle
            .verdict_request(question, self.guess.trim(), self.language);
        self.issue(ticket, CallPurpose::Verdict, request);
        self.feedback = self.strings().oracle.to_string();
        self.set_state(GameState::Submitting(SubmitStage::Judging));
    }

    fn fail(&mut self) {
        self.feedback = SYSTEM_ERROR.to_string();
        self.set_state(GameState::Error);
    }

    fn resolve(&mut self, verdict: ValidationVerdict) {
        let strings = self.strings();
        if !verdict.is_correct {
            self.feedback = if verdict.explanation.trim().is_empty() {
                strings.missed.to_string()
            } else {
                verdict.explanation
            };
            self.feed.push(strings.missed.to_string(), ActivityKind::Fail);
            self.emit(EVENT_FEED, self.feed.len() as f32);
            self.set_state(GameState::Lost);
            return;
        }

        let award = match self.config.variant {
            Variant::Xp => {
                let points = self
                    .riddle
                    .as_ref()
                    .map_or(Difficulty::Easy, |r| r.difficulty)
                    .points();
                self.score += points;
                self.emit_with(EVENT_SCORE, self.score as f32, points as f32);
                if let Some(address) = self.wallet.address.as_deref() {
                    self.leaderboard_stub.submit_score(address, points);
                }
                self.feed
                    .push(format!("{} (+{} XP)", strings.win_msg, points), ActivityKind::Win);
                points
            }
            Variant::Jackpot => {
                // A prize already claimed leaves the pot before the next win is priced
                self.settle_pot_reset();
                self.feed
                    .push(format!("{} (+{})", strings.win_msg, self.pot), ActivityKind::Win);
                self.pot
            }
        };
        self.emit(EVENT_FEED, self.feed.len() as f32);

        self.feedback = if verdict.explanation.trim().is_empty() {
            strings.outsmarted.to_string()
        } else {
            verdict.explanation
        };
        self.emit(EVENT_CONFETTI, award as f32);
        self.set_state(GameState::Won(Award::new(award)));
    }

    /// Restore the house seed, keeping fees paid since the claim.
    fn settle_pot_reset(&mut self) {
        let Some((_, claimed)) = self.pot_reset.take() else {
            return;
        };
        self.pot = self.config.house_seed + self.pot.saturating_sub(claimed);
        log::info!("pot reset to {} after claim of {}", self.pot, claimed);
        self.emit(EVENT_POT, self.pot as f32);
    }

    fn emit_with(&mut self, kind: f32, a: f32, b: f32) {
        self.events.push(GameEvent { kind, a, b, c: 0.0 });
    }

    /// Ledger effects always settle; state transitions only for the live round.
    fn on_wallet(&mut self, receipt: WalletReceipt) {
        let stale = receipt.ticket.epoch != self.epoch;
        let strings = self.strings();
        match receipt.outcome {
            WalletOutcome::Connected { address } => {
                self.connecting = false;
                log::info!("wallet connected: {}", address);
                match self.config.variant {
                    Variant::Xp => {
                        self.wallet = WalletIdentity::connected(address, 0);
                        self.score = self.config.existing_score;
                        self.emit_with(EVENT_SCORE, self.score as f32, 0.0);
                    }
                    Variant::Jackpot => {
                        self.wallet =
                            WalletIdentity::connected(address, self.config.starting_balance);
                        let ticket = self.ticket();
                        self.wallet_stub.switch_network(ticket);
                    }
                }
                self.emit_with(EVENT_WALLET, self.wallet.balance as f32, 1.0);
            }
            WalletOutcome::NetworkSwitched => {
                log::debug!("wallet on game network");
            }
            WalletOutcome::FeePaid { amount } => {
                self.wallet.balance = self.wallet.balance.saturating_sub(amount);
                self.pot += amount;
                self.emit_with(EVENT_WALLET, self.wallet.balance as f32, 1.0);
                self.emit(EVENT_POT, self.pot as f32);
                if stale || self.state != GameState::Submitting(SubmitStage::Paying) {
                    return;
                }
                match self.riddle.as_ref().map(|r| r.question.clone()) {
                    Some(question) => self.request_verdict(&question),
                    None => self.fail(),
                }
            }
            WalletOutcome::FeeRejected => {
                if stale || self.state != GameState::Submitting(SubmitStage::Paying) {
                    return;
                }
                log::warn!("entry fee rejected");
                self.feedback = strings.rejected.to_string();
                self.set_state(GameState::Idle);
            }
            WalletOutcome::PrizeClaimed { amount } => {
                self.wallet.balance += amount;
                self.pot_reset = Some((Countdown::new(self.config.pot_reset_delay), amount));
                log::info!("claimed {}", amount);
                self.emit_with(EVENT_WALLET, self.wallet.balance as f32, 1.0);
                if stale {
                    return;
                }
                if let GameState::Claiming(award) = self.state {
                    self.feedback = strings.claimed_msg.to_string();
                    self.set_state(GameState::Claimed(award));
                }
            }
            WalletOutcome::ClaimFailed { amount } => {
                if stale {
                    return;
                }
                if let GameState::Claiming(award) = self.state {
                    log::warn!("claim of {} failed", amount);
                    self.feedback = strings.claim_failed.to_string();
                    self.emit(EVENT_CLAIM_ALERT, amount as f32);
                    self.set_state(GameState::Won(award));
                }
            }
        }
    }

    // ---- Accessors ----

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn riddle(&self) -> Option<&RiddleRecord> {
        self.riddle.as_ref()
    }

    pub fn shapes(&self) -> &[ShapeDescriptor] {
        &self.shapes
    }

    pub fn guess(&self) -> &str {
        &self.guess
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn wallet(&self) -> &WalletIdentity {
        &self.wallet
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn feed(&self) -> &ActivityFeed {
        &self.feed
    }

    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        &self.leaderboard
    }

    pub fn show_leaderboard(&self) -> bool {
        self.show_leaderboard
    }

    /// Events emitted since the last `clear_frame_data`.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Wallet calls still awaiting their simulated latency.
    pub fn wallet_calls_in_flight(&self) -> usize {
        self.wallet_stub.in_flight()
    }
}
