//! This module contains an implementation of the [crate::TxManager] trait backed by
//! an execution client with node-managed keys.

use super::{TxCandidate, TxManager, TxReceipt};
use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_rpc_client::{ClientBuilder, RpcClient};
use alloy_transport::TransportResult;
use alloy_transport_http::Http;
use anyhow::{anyhow, Result};
use reqwest::{Client, Url};
use std::time::Duration;

/// The wire representation of a call or transaction request.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// The sender of the transaction. Omitted for read-only calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// The recipient contract.
    pub to: Address,
    /// The gas limit of the transaction. Omitted to let the node estimate online.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<U256>,
    /// The calldata of the transaction.
    pub data: Bytes,
}

/// The [RpcTxManager] is a [TxManager] that defers signing and nonce management to
/// the connected execution client via `eth_sendTransaction`, then polls for the
/// receipt of the broadcasted transaction until inclusion or timeout.
pub struct RpcTxManager {
    /// The RPC client used to reach the execution client.
    pub rpc_client: RpcClient<Http<Client>>,
    /// The unlocked account transactions are sent from.
    pub sender: Address,
    /// The interval between receipt polls.
    pub poll_interval: Duration,
    /// The maximum time to wait for inclusion before reporting a submission failure.
    pub inclusion_timeout: Duration,
}

impl RpcTxManager {
    /// Creates a new [RpcTxManager] against the given endpoint with default
    /// receipt-polling parameters.
    pub fn try_new(endpoint: impl AsRef<str>, sender: Address) -> Result<Self> {
        let rpc_client = ClientBuilder::default().http(Url::parse(endpoint.as_ref())?);
        Ok(Self {
            rpc_client,
            sender,
            poll_interval: Duration::from_secs(2),
            inclusion_timeout: Duration::from_secs(120),
        })
    }
}

#[async_trait::async_trait]
impl TxManager for RpcTxManager {
    async fn call(&self, target: Address, data: Bytes) -> Result<Bytes> {
        let request = TransactionRequest {
            from: None,
            to: target,
            gas: None,
            data,
        };
        let result: TransportResult<Bytes> =
            self.rpc_client.request("eth_call", (request, "latest")).await;
        Ok(result?)
    }

    async fn send(&self, candidate: TxCandidate) -> Result<TxReceipt> {
        let request = TransactionRequest {
            from: Some(self.sender),
            to: candidate.to,
            gas: candidate.gas_limit.map(U256::from),
            data: candidate.tx_data,
        };
        let result: TransportResult<B256> = self
            .rpc_client
            .request("eth_sendTransaction", (request,))
            .await;
        let tx_hash = result?;

        let mut waited = Duration::ZERO;
        loop {
            let receipt: TransportResult<Option<TxReceipt>> = self
                .rpc_client
                .request("eth_getTransactionReceipt", (tx_hash,))
                .await;
            if let Some(receipt) = receipt? {
                return Ok(receipt);
            }

            if waited >= self.inclusion_timeout {
                return Err(anyhow!(
                    "Timed out waiting for inclusion of transaction {tx_hash}"
                ));
            }
            tokio::time::sleep(self.poll_interval).await;
            waited += self.poll_interval;
        }
    }
}
