//! The txmgr module contains the transaction management abstraction that the
//! [crate::FaultResponder] delegates publication to, alongside an RPC-backed
//! implementation of it.

mod rpc;
pub use self::rpc::RpcTxManager;

pub mod mocks;

use alloy_primitives::{Address, Bytes, B256, U64};
use anyhow::Result;

/// The [TxCandidate] struct is a partial transaction handed to a [TxManager] for gas
/// estimation, signing, broadcast, and inclusion-waiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxCandidate {
    /// The recipient contract.
    pub to: Address,
    /// The calldata of the transaction.
    pub tx_data: Bytes,
    /// The gas limit of the transaction. `None` defers gas estimation to the
    /// transaction manager.
    pub gas_limit: Option<u64>,
}

/// A minified transaction receipt carrying the fields the responder inspects.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxReceipt {
    /// The hash of the included transaction.
    pub transaction_hash: B256,
    /// The execution status of the included transaction. `0x1` indicates success.
    pub status: Option<U64>,
    /// The number of the block the transaction was included in.
    pub block_number: Option<U64>,
}

impl TxReceipt {
    /// Returns true if the included transaction executed successfully.
    pub fn is_success(&self) -> bool {
        self.status.map_or(false, |status| status == U64::from(1))
    }
}

/// The [TxManager] trait describes the external collaborator that owns nonce
/// assignment, gas estimation, signing, broadcast, and inclusion-waiting. The
/// responder hands it fully-encoded calldata and classifies the receipt it
/// returns; any serialization of concurrent submissions is the manager's
/// concern.
#[async_trait::async_trait]
pub trait TxManager {
    /// Issues a read-only call against current chain state, without publishing a
    /// transaction. Returns the raw return data of the call.
    async fn call(&self, target: Address, data: Bytes) -> Result<Bytes>;

    /// Signs and broadcasts the candidate, then waits until it is included,
    /// returning the receipt of the included transaction. An [Err] indicates the
    /// transaction was never durably included; an included-but-reverted
    /// transaction is reported through the receipt status, not an [Err].
    async fn send(&self, candidate: TxCandidate) -> Result<TxReceipt>;
}
