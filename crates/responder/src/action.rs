//! The action module holds the value types that describe the on-chain actions
//! available to the [crate::FaultResponder].

use crate::Position;
use alloy_primitives::{Bytes, B256, U256};
use grond_primitives::Claim;

/// Sentinel parent index carried by a response that counters the root claim, which has
/// no parent within the on-chain claim list.
pub const ROOT_PARENT_INDEX: u32 = u32::MAX;

/// The [ResponseClaim] struct describes a counter-claim to be published against an
/// existing claim in the dispute game. It is produced by the upstream game-tree
/// search and consumed read-only; the move direction is precomputed by the search,
/// never derived from game geometry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseClaim {
    /// The claimed state hash at `position`.
    pub value: Claim,
    /// The position of the new claim within the game's position tree.
    pub position: Position,
    /// The index of the countered claim within the on-chain claim list, or
    /// [ROOT_PARENT_INDEX] when countering the root claim.
    pub parent_index: u32,
    /// Whether the response defends the countered claim. When false, the response
    /// attacks it.
    pub defends_parent: bool,
}

impl ResponseClaim {
    /// Creates a new [ResponseClaim].
    pub fn new(value: Claim, position: Position, parent_index: u32, defends_parent: bool) -> Self {
        Self {
            value,
            position,
            parent_index,
            defends_parent,
        }
    }

    /// Returns true if the response counters the root claim.
    pub fn is_root_target(&self) -> bool {
        self.parent_index == ROOT_PARENT_INDEX
    }
}

/// The [StepCallData] struct carries the inputs for a VM step against a claim at the
/// maximum depth of the game. The state and proof blobs are opaque to the responder;
/// they are forwarded to the step verifier unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCallData {
    /// The index of the claim being stepped on within the on-chain claim list.
    pub claim_index: u64,
    /// Whether the step attacks the claim.
    pub is_attack: bool,
    /// The raw pre-state of the VM for the step.
    pub state_data: Bytes,
    /// The proof of the pre-state's inclusion in the trace commitment.
    pub proof: Bytes,
}

/// The [PreimageOracleData] enum describes a preimage upload request raised by the
/// on-chain step verifier. Local preimages are served by the dispute game contract
/// itself, keyed by a game-scoped identifier. Global preimages are served by the
/// shared preimage oracle, keyed by the keccak256 digest of the preimage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreimageOracleData {
    /// A preimage local to the dispute game instance.
    Local {
        /// The identifier of the local preimage within the game.
        ident: U256,
        /// The offset of the preimage part to publish.
        part_offset: u64,
        /// The preimage part.
        data: Bytes,
    },
    /// A content-addressed preimage shared across games.
    Global {
        /// The keccak256 digest of the full preimage.
        key: B256,
        /// The offset of the preimage part to publish.
        part_offset: u64,
        /// The preimage part.
        data: Bytes,
    },
}

impl PreimageOracleData {
    /// Returns true if the preimage is local to the dispute game.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local { .. })
    }

    /// Returns the offset of the preimage part to publish.
    pub fn part_offset(&self) -> u64 {
        match self {
            Self::Local { part_offset, .. } | Self::Global { part_offset, .. } => *part_offset,
        }
    }
}
