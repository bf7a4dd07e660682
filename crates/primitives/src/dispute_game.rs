//! Types related to the on-chain dispute game.

use alloy_primitives::B256;
use anyhow::{bail, Error};
use std::convert::TryFrom;

/// The [Claim] type is an alias to [B256], used to deliniate a claim hash from a regular hash.
pub type Claim = B256;

/// The [GameStatus] enum describes the status of a dispute game as represented on-chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The [GameStatus::InProgress] variant indicates that the dispute game has not been resolved.
    InProgress = 0,
    /// The [GameStatus::ChallengerWins] variant indicates that the dispute game resolved against
    /// the root claim.
    ChallengerWins = 1,
    /// The [GameStatus::DefenderWins] variant indicates that the dispute game resolved in favor
    /// of the root claim.
    DefenderWins = 2,
}

impl TryFrom<u8> for GameStatus {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GameStatus::InProgress),
            1 => Ok(GameStatus::ChallengerWins),
            2 => Ok(GameStatus::DefenderWins),
            _ => bail!("Invalid game status"),
        }
    }
}
