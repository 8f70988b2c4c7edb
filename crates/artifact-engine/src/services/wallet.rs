// services/wallet.rs
//
// Simulated wallet. Every operation resolves after an artificial delay; no
// signatures, no chain state. The ledger itself (balance, pot) lives in the
// controller; this only decides outcomes and when they arrive.

use crate::api::config::WalletConfig;
use crate::api::types::Ticket;
use crate::core::rng::Rng;
use super::latency::LatencyQueue;

/// What a matured wallet call reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletOutcome {
    Connected { address: String },
    NetworkSwitched,
    FeePaid { amount: u64 },
    /// The transaction was rejected; nothing was charged.
    FeeRejected,
    PrizeClaimed { amount: u64 },
    ClaimFailed { amount: u64 },
}

/// A matured wallet call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletReceipt {
    pub ticket: Ticket,
    pub outcome: WalletOutcome,
}

pub struct MockWallet {
    config: WalletConfig,
    rng: Rng,
    queue: LatencyQueue<WalletOutcome>,
}

impl MockWallet {
    pub fn new(config: WalletConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Rng::new(seed),
            queue: LatencyQueue::new(),
        }
    }

    /// Ask for an identity. Resolves to a pseudo-random address.
    pub fn connect(&mut self, ticket: Ticket) {
        let address = format!("0x{:x}...9A23", self.rng.next_int(16_777_215));
        self.queue.push(
            ticket,
            self.config.connect_delay,
            WalletOutcome::Connected { address },
        );
    }

    /// Switch to the game's network. Always succeeds, immediately.
    pub fn switch_network(&mut self, ticket: Ticket) {
        self.queue.push(ticket, 0.0, WalletOutcome::NetworkSwitched);
    }

    pub fn pay_entry_fee(&mut self, ticket: Ticket, amount: u64) {
        let outcome = if self.rng.chance(self.config.fee_success_rate) {
            WalletOutcome::FeePaid { amount }
        } else {
            WalletOutcome::FeeRejected
        };
        self.queue.push(ticket, self.config.fee_delay, outcome);
    }

    pub fn claim_prize(&mut self, ticket: Ticket, amount: u64) {
        let outcome = if self.rng.chance(self.config.claim_success_rate) {
            WalletOutcome::PrizeClaimed { amount }
        } else {
            WalletOutcome::ClaimFailed { amount }
        };
        self.queue.push(ticket, self.config.claim_delay, outcome);
    }

    /// Advance simulated time; returns receipts that matured.
    pub fn tick(&mut self, dt: f32) -> Vec<WalletReceipt> {
        self.queue
            .tick(dt)
            .into_iter()
            .map(|(ticket, outcome)| WalletReceipt { ticket, outcome })
            .collect()
    }

    /// Calls still in flight.
    pub fn in_flight(&self) -> usize {
        self.queue.len()
    }
}
