//! Primitives for Grond, an on-chain responder for the OP Stack's
//! dispute protocol.

mod dispute_game;
pub use dispute_game::{Claim, GameStatus};
