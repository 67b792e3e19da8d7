use std::future::Future;
use std::num::NonZeroU32;
use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::{Client, Url};

use crate::error::Result;

pub mod models;

use models::{GetBlockParams, JsonRpcRequest};

/// Source of raw `getblock` responses, one height at a time.
pub trait BlockFetcher {
    fn get_block(&self, height: u64) -> impl Future<Output = Result<Vec<u8>>>;
}

/// JSON-RPC over HTTP against a node's RPC port.
pub struct HttpFetcher {
    client: Client,
    url: Url,
    limiter: Option<DefaultDirectRateLimiter>,
}

impl HttpFetcher {
    pub fn new(
        url: Url,
        timeout: Duration,
        requests_per_second: Option<NonZeroU32>,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let limiter = requests_per_second.map(|rps| RateLimiter::direct(Quota::per_second(rps)));

        Ok(Self {
            client,
            url,
            limiter,
        })
    }
}

impl BlockFetcher for HttpFetcher {
    async fn get_block(&self, height: u64) -> Result<Vec<u8>> {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }

        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method: "getblock",
            params: GetBlockParams { height },
            id: height,
        };

        let body = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        tracing::trace!(height, bytes = body.len(), "Fetched block");
        Ok(body.to_vec())
    }
}
