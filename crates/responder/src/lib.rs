//! The responder crate contains the types and components used to dispatch
//! moves against an on-chain FaultDisputeGame.

extern crate grond_primitives;

mod action;
pub use action::{PreimageOracleData, ResponseClaim, StepCallData, ROOT_PARENT_INDEX};

mod bindings;
pub use bindings::{IFaultDisputeGame, IPreimageOracle};

pub mod encoder;

mod position;
pub use position::{compute_gindex, Gindex, Position};

mod responder;
pub use responder::{FaultResponder, SubmitOutcome};

mod txmgr;
pub use txmgr::{mocks, RpcTxManager, TxCandidate, TxManager, TxReceipt};

pub mod prelude {
    pub use super::{
        action::*, encoder, position::*, responder::*, txmgr::mocks, txmgr::RpcTxManager,
        txmgr::TxCandidate, txmgr::TxManager, txmgr::TxReceipt,
    };
}
