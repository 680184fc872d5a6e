//! JSON-RPC client for the routing oracle service.

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::{BestRoute, PopulatedTx, RoutingOracle};

/// Routing oracle reached over HTTP JSON-RPC 2.0, one method per capability.
#[derive(Debug, Clone)]
pub struct HttpOracle {
    http: Client,
    url: String,
}

impl HttpOracle {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let resp = self
            .http
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("oracle send: {method}"))?;
        if !resp.status().is_success() {
            return Err(anyhow!("oracle http {} for {method}", resp.status()));
        }
        let body: Value = resp
            .json()
            .await
            .with_context(|| format!("oracle json parse: {method}"))?;
        if let Some(err) = body.get("error") {
            return Err(anyhow!("oracle error for {method}: {err}"));
        }
        serde_json::from_value(body["result"].clone())
            .with_context(|| format!("oracle decode result: {method}"))
    }
}

#[async_trait::async_trait]
impl RoutingOracle for HttpOracle {
    async fn fetch_pools(&self) -> Result<()> {
        self.call::<Value>("router_fetchPools", json!([])).await?;
        Ok(())
    }

    async fn best_route_and_output(
        &self,
        from: &str,
        to: &str,
        amount: &str,
    ) -> Result<BestRoute> {
        self.call("router_getBestRouteAndOutput", json!([from, to, amount]))
            .await
    }

    async fn symbol_of(&self, address: &str) -> Result<String> {
        self.call("token_symbol", json!([address])).await
    }

    async fn populate_swap(&self, from: &str, to: &str, amount: &str) -> Result<PopulatedTx> {
        self.call("router_populateSwap", json!([from, to, amount]))
            .await
    }

    async fn has_allowance(
        &self,
        owner: &str,
        tokens: &[&str],
        amounts: &[&str],
        spender: &str,
    ) -> Result<bool> {
        self.call("token_hasAllowance", json!([owner, tokens, amounts, spender]))
            .await
    }

    async fn populate_approve(
        &self,
        token: &str,
        amount: &str,
        sender: &str,
    ) -> Result<Vec<PopulatedTx>> {
        self.call("router_populateApprove", json!([token, amount, sender]))
            .await
    }
}
