//! Mock implementations of the [crate::TxManager] trait for testing.

use super::{TxCandidate, TxManager, TxReceipt};
use alloy_primitives::{keccak256, Address, Bytes, U64};
use anyhow::{anyhow, Result};
use std::sync::Mutex;

/// The [MockTxManager] is a [TxManager] that records every request it is handed and
/// serves canned results, for driving the responder without a chain.
#[derive(Debug, Default)]
pub struct MockTxManager {
    /// Candidates passed to `send`, in order.
    pub sent: Mutex<Vec<TxCandidate>>,
    /// Read-only calls passed to `call`, in order.
    pub calls: Mutex<Vec<(Address, Bytes)>>,
    /// When true, `call` errors, mimicking a reverting simulation.
    pub call_reverts: bool,
    /// Canned return data served by `call`.
    pub call_return: Bytes,
    /// When true, `send` fails before inclusion.
    pub send_fails: bool,
    /// The receipt status reported for included transactions.
    pub included_status: u64,
}

impl MockTxManager {
    /// Creates a new [MockTxManager] whose transactions are included successfully.
    pub fn new() -> Self {
        Self {
            included_status: 1,
            ..Default::default()
        }
    }

    /// Creates a new [MockTxManager] whose transactions are included but revert.
    pub fn reverting() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl TxManager for MockTxManager {
    async fn call(&self, target: Address, data: Bytes) -> Result<Bytes> {
        self.calls.lock().unwrap().push((target, data));
        if self.call_reverts {
            return Err(anyhow!("execution reverted"));
        }
        Ok(self.call_return.clone())
    }

    async fn send(&self, candidate: TxCandidate) -> Result<TxReceipt> {
        let tx_hash = keccak256(&candidate.tx_data);
        self.sent.lock().unwrap().push(candidate);
        if self.send_fails {
            return Err(anyhow!("failed to broadcast transaction"));
        }
        Ok(TxReceipt {
            transaction_hash: tx_hash,
            status: Some(U64::from(self.included_status)),
            block_number: Some(U64::from(1)),
        })
    }
}
