//! Pure calldata construction for the responder's on-chain actions.
//!
//! Every encoding is deterministic and side effect free, so each payload can be
//! checked against the contract interfaces without a network connection. This is
//! the only place call encodings are constructed.

use crate::{
    bindings::{IFaultDisputeGame, IPreimageOracle},
    ResponseClaim, StepCallData,
};
use alloy_primitives::{Bytes, U256};
use alloy_sol_types::SolCall;
use grond_primitives::Claim;

/// Encodes an `attack(uint256,bytes32)` call against the dispute game.
pub fn encode_attack(parent_index: u32, claim: Claim) -> Bytes {
    IFaultDisputeGame::attackCall {
        _parentIndex: U256::from(parent_index),
        _claim: claim,
    }
    .abi_encode()
    .into()
}

/// Encodes a `defend(uint256,bytes32)` call against the dispute game.
pub fn encode_defend(parent_index: u32, claim: Claim) -> Bytes {
    IFaultDisputeGame::defendCall {
        _parentIndex: U256::from(parent_index),
        _claim: claim,
    }
    .abi_encode()
    .into()
}

/// Encodes a `resolve()` call against the dispute game.
pub fn encode_resolve() -> Bytes {
    IFaultDisputeGame::resolveCall {}.abi_encode().into()
}

/// Encodes the proper move against the countered claim, dispatching on the
/// precomputed move direction within the [ResponseClaim].
pub fn encode_move(claim: &ResponseClaim) -> Bytes {
    if claim.defends_parent {
        encode_defend(claim.parent_index, claim.value)
    } else {
        encode_attack(claim.parent_index, claim.value)
    }
}

/// Encodes an `addLocalData(uint256,uint256)` call against the dispute game. Local
/// preimages are served by the game itself, not the oracle.
pub fn encode_local_preimage(ident: U256, part_offset: u64) -> Bytes {
    IFaultDisputeGame::addLocalDataCall {
        _ident: ident,
        _partOffset: U256::from(part_offset),
    }
    .abi_encode()
    .into()
}

/// Encodes a `loadKeccak256PreimagePart(uint256,bytes)` call against the preimage
/// oracle. One part is encoded per call; uploading preimages larger than a single
/// part requires one call per offset.
pub fn encode_global_preimage(part_offset: u64, preimage: Bytes) -> Bytes {
    IPreimageOracle::loadKeccak256PreimagePartCall {
        _partOffset: U256::from(part_offset),
        _preimage: preimage.to_vec(),
    }
    .abi_encode()
    .into()
}

/// Encodes a `step(uint256,bool,bytes,bytes)` call against the dispute game.
pub fn encode_step(step_data: &StepCallData) -> Bytes {
    IFaultDisputeGame::stepCall {
        _claimIndex: U256::from(step_data.claim_index),
        _isAttack: step_data.is_attack,
        _stateData: step_data.state_data.to_vec(),
        _proof: step_data.proof.to_vec(),
    }
    .abi_encode()
    .into()
}
