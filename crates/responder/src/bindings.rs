//! Contract bindings for the `FaultDisputeGame` and `PreimageOracle` contracts.

use alloy_sol_types::sol;

sol! {
    /// `FaultDisputeGame` contract interface.
    interface IFaultDisputeGame {
        /// Counters the claim at `_parentIndex` with an attacking claim.
        function attack(uint256 _parentIndex, bytes32 _claim) external payable;

        /// Counters the claim at `_parentIndex` with a defending claim.
        function defend(uint256 _parentIndex, bytes32 _claim) external payable;

        /// Performs a VM step against the claim at `_claimIndex`.
        function step(uint256 _claimIndex, bool _isAttack, bytes calldata _stateData, bytes calldata _proof) external;

        /// Posts a local preimage part to the game's preimage store.
        function addLocalData(uint256 _ident, uint256 _partOffset) external;

        /// Resolves the game if the outcome is determined.
        function resolve() external returns (uint8 status_);
    }
}

sol! {
    /// `PreimageOracle` contract interface.
    interface IPreimageOracle {
        /// Posts a part of a keccak256 preimage to the oracle.
        function loadKeccak256PreimagePart(uint256 _partOffset, bytes calldata _preimage) external;
    }
}
