//! This module contains the [FaultResponder], which turns abstract dispute game
//! decisions into encoded, published on-chain transactions.

use crate::{
    bindings::IFaultDisputeGame,
    encoder,
    txmgr::{TxCandidate, TxManager},
    PreimageOracleData, ResponseClaim, StepCallData,
};
use alloy_primitives::{Address, Bytes, B256};
use alloy_sol_types::SolCall;
use anyhow::Result;
use grond_primitives::GameStatus;

/// The [SubmitOutcome] enum describes the terminal state of a durably published
/// responder transaction. A reverted transaction is a protocol outcome, not a
/// submission failure; callers observe its effect through subsequent chain reads
/// rather than a local error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The transaction was included and executed successfully.
    Confirmed(B256),
    /// The transaction was included, but the contract rejected the call.
    Reverted(B256),
}

/// The [FaultResponder] publishes responses to claims within a FaultDisputeGame.
/// It holds only immutable configuration; every operation encodes its calldata and
/// delegates publication to the [TxManager], so concurrent use requires no locking.
pub struct FaultResponder<M: TxManager> {
    /// The transaction manager used to simulate and publish transactions.
    pub txmgr: M,
    /// The address of the dispute game contract.
    pub fdg_address: Address,
    /// The address of the preimage oracle contract.
    pub oracle_address: Address,
}

impl<M: TxManager> FaultResponder<M> {
    /// Creates a new [FaultResponder] against the given contract addresses.
    pub fn new(txmgr: M, fdg_address: Address, oracle_address: Address) -> Self {
        Self {
            txmgr,
            fdg_address,
            oracle_address,
        }
    }

    /// Builds the calldata for the move described by the [ResponseClaim] without
    /// submitting it, for callers that batch or simulate before submission.
    pub fn build_tx(&self, claim: &ResponseClaim) -> Bytes {
        encoder::encode_move(claim)
    }

    /// Publishes the move described by the [ResponseClaim] against the countered
    /// claim in the dispute game.
    pub async fn respond(&self, claim: &ResponseClaim) -> Result<SubmitOutcome> {
        self.send_tx_and_wait(self.fdg_address, self.build_tx(claim))
            .await
    }

    /// Publishes a `resolve()` transaction against the dispute game. Callers that
    /// want to avoid a reverting submission are expected to check [Self::can_resolve]
    /// first; the simulate/mutate distinction is deliberately left to the caller.
    pub async fn resolve(&self) -> Result<SubmitOutcome> {
        self.send_tx_and_wait(self.fdg_address, encoder::encode_resolve())
            .await
    }

    /// Determines whether a `resolve()` transaction would currently succeed by
    /// issuing a read-only call against current chain state. Every failure mode,
    /// including a deliberate on-chain revert, collapses to `false`.
    pub async fn can_resolve(&self) -> bool {
        match self
            .txmgr
            .call(self.fdg_address, encoder::encode_resolve())
            .await
        {
            Ok(returndata) => {
                if let Ok(ret) = IFaultDisputeGame::resolveCall::abi_decode_returns(&returndata, true)
                {
                    if let Ok(status) = GameStatus::try_from(ret.status_) {
                        tracing::debug!(target: "fault-responder", ?status, "Resolve simulation succeeded");
                    }
                }
                true
            }
            Err(err) => {
                tracing::debug!(target: "fault-responder", %err, "Resolve simulation failed");
                false
            }
        }
    }

    /// Publishes the preimage described by the [PreimageOracleData]. Local preimages
    /// are routed to the dispute game contract, global preimages to the preimage
    /// oracle; this is the only place the oracle-kind dispatch occurs.
    pub async fn populate_oracle_data(&self, data: &PreimageOracleData) -> Result<SubmitOutcome> {
        match data {
            PreimageOracleData::Local {
                ident, part_offset, ..
            } => {
                let tx_data = encoder::encode_local_preimage(*ident, *part_offset);
                self.send_tx_and_wait(self.fdg_address, tx_data).await
            }
            PreimageOracleData::Global {
                key,
                part_offset,
                data,
            } => {
                tracing::debug!(target: "fault-responder", %key, part_offset, "Publishing global preimage part");
                let tx_data = encoder::encode_global_preimage(*part_offset, data.clone());
                self.send_tx_and_wait(self.oracle_address, tx_data).await
            }
        }
    }

    /// Publishes a VM step against the claim described by the [StepCallData].
    pub async fn step(&self, step_data: &StepCallData) -> Result<SubmitOutcome> {
        self.send_tx_and_wait(self.fdg_address, encoder::encode_step(step_data))
            .await
    }

    /// Hands the encoded calldata to the [TxManager] and classifies the receipt.
    /// The gas limit is always deferred to the manager; static estimates are
    /// unreliable across the dispute game's branchy execution paths.
    async fn send_tx_and_wait(&self, target: Address, tx_data: Bytes) -> Result<SubmitOutcome> {
        let receipt = self
            .txmgr
            .send(TxCandidate {
                to: target,
                tx_data,
                gas_limit: None,
            })
            .await?;

        if receipt.is_success() {
            tracing::debug!(target: "fault-responder", tx_hash = %receipt.transaction_hash, "Responder tx successfully published");
            Ok(SubmitOutcome::Confirmed(receipt.transaction_hash))
        } else {
            tracing::error!(target: "fault-responder", tx_hash = %receipt.transaction_hash, "Responder tx successfully published but reverted");
            Ok(SubmitOutcome::Reverted(receipt.transaction_hash))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::txmgr::mocks::MockTxManager;
    use alloy_primitives::{Bytes, B256, U256};

    fn responder(txmgr: MockTxManager) -> FaultResponder<MockTxManager> {
        FaultResponder::new(
            txmgr,
            Address::repeat_byte(0xfd),
            Address::repeat_byte(0x0c),
        )
    }

    #[tokio::test]
    async fn respond_attacks_parent() {
        let responder = responder(MockTxManager::new());
        let claim = ResponseClaim::new(B256::repeat_byte(0xa5), 4, 3, false);

        let outcome = responder.respond(&claim).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Confirmed(_)));

        let sent = responder.txmgr.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, responder.fdg_address);
        assert_eq!(sent[0].tx_data, encoder::encode_attack(3, claim.value));
        assert_eq!(sent[0].gas_limit, None);
    }

    #[tokio::test]
    async fn respond_defends_parent() {
        let responder = responder(MockTxManager::new());
        let claim = ResponseClaim::new(B256::repeat_byte(0x11), 6, 2, true);

        responder.respond(&claim).await.unwrap();

        let sent = responder.txmgr.sent.lock().unwrap();
        assert_eq!(sent[0].tx_data, encoder::encode_defend(2, claim.value));
    }

    #[tokio::test]
    async fn respond_reports_reverted_inclusion_as_submitted() {
        let responder = responder(MockTxManager::reverting());
        let claim = ResponseClaim::new(B256::repeat_byte(0xa5), 4, 3, false);

        let outcome = responder.respond(&claim).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Reverted(_)));
    }

    #[tokio::test]
    async fn respond_propagates_submission_failure() {
        let txmgr = MockTxManager {
            send_fails: true,
            ..MockTxManager::new()
        };
        let responder = responder(txmgr);
        let claim = ResponseClaim::new(B256::repeat_byte(0xa5), 4, 3, false);

        assert!(responder.respond(&claim).await.is_err());
    }

    #[tokio::test]
    async fn resolve_sends_resolve_calldata() {
        let responder = responder(MockTxManager::new());

        let outcome = responder.resolve().await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Confirmed(_)));

        let sent = responder.txmgr.sent.lock().unwrap();
        assert_eq!(sent[0].to, responder.fdg_address);
        assert_eq!(sent[0].tx_data, encoder::encode_resolve());
    }

    #[tokio::test]
    async fn can_resolve_false_on_reverting_simulation() {
        let txmgr = MockTxManager {
            call_reverts: true,
            ..MockTxManager::new()
        };
        let responder = responder(txmgr);

        assert!(!responder.can_resolve().await);

        let calls = responder.txmgr.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, responder.fdg_address);
        assert_eq!(calls[0].1, encoder::encode_resolve());
    }

    #[tokio::test]
    async fn can_resolve_true_on_successful_simulation() {
        let txmgr = MockTxManager {
            call_return: Bytes::from(U256::from(2).to_be_bytes::<32>().to_vec()),
            ..MockTxManager::new()
        };
        let responder = responder(txmgr);

        assert!(responder.can_resolve().await);
        assert!(responder.txmgr.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn populate_local_preimage_targets_dispute_game() {
        let responder = responder(MockTxManager::new());
        let data = PreimageOracleData::Local {
            ident: U256::from(1),
            part_offset: 0,
            data: Bytes::from(vec![0x01]),
        };

        responder.populate_oracle_data(&data).await.unwrap();

        let sent = responder.txmgr.sent.lock().unwrap();
        assert_eq!(sent[0].to, responder.fdg_address);
        assert_eq!(
            sent[0].tx_data,
            encoder::encode_local_preimage(U256::from(1), 0)
        );
    }

    #[tokio::test]
    async fn populate_global_preimage_targets_oracle() {
        let responder = responder(MockTxManager::new());
        let preimage = Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]);
        let data = PreimageOracleData::Global {
            key: B256::repeat_byte(0x22),
            part_offset: 0,
            data: preimage.clone(),
        };

        responder.populate_oracle_data(&data).await.unwrap();

        let sent = responder.txmgr.sent.lock().unwrap();
        assert_eq!(sent[0].to, responder.oracle_address);
        assert_eq!(sent[0].tx_data, encoder::encode_global_preimage(0, preimage));
    }

    #[tokio::test]
    async fn step_sends_step_calldata() {
        let responder = responder(MockTxManager::new());
        let step_data = StepCallData {
            claim_index: 7,
            is_attack: true,
            state_data: Bytes::from(vec![0x01, 0x02]),
            proof: Bytes::from(vec![0x03]),
        };

        let outcome = responder.step(&step_data).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Confirmed(_)));

        let sent = responder.txmgr.sent.lock().unwrap();
        assert_eq!(sent[0].to, responder.fdg_address);
        assert_eq!(sent[0].tx_data, encoder::encode_step(&step_data));
    }

    #[tokio::test]
    async fn build_tx_matches_encoded_move() {
        let responder = responder(MockTxManager::new());
        let claim = ResponseClaim::new(B256::repeat_byte(0x33), 10, 5, true);

        assert_eq!(responder.build_tx(&claim), encoder::encode_move(&claim));
        assert!(responder.txmgr.sent.lock().unwrap().is_empty());
    }
}
