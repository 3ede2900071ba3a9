use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{Amount, DigitalWorldId},
    error::ActorReject,
    protocol::{ActorCall, ActorReply, ReplyValue},
};
use tracing::debug;
use url::Url;

use crate::{config::ClientSettings, ActorError, ActorHandle};

/// Actor handle that posts each call as JSON to the configured call endpoint.
///
/// The underlying client has no request timeout: a call that never resolves
/// stays pending.
#[derive(Debug, Clone)]
pub struct HttpActor {
    http: Client,
    endpoint: Url,
}

impl HttpActor {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> anyhow::Result<Self> {
        Ok(Self::new(settings.call_endpoint()?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn call(&self, call: ActorCall) -> Result<ReplyValue, ActorError> {
        let method = call.method();
        debug!(method, endpoint = %self.endpoint, "issuing actor call");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&call)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            debug!(method, status = status.as_u16(), "actor call failed");
            return Err(ActorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ActorReply = serde_json::from_str(&body)?;
        let outcome: Result<ReplyValue, ActorReject> = reply.into();
        match outcome {
            Ok(value) => {
                debug!(method, "actor call succeeded");
                Ok(value)
            }
            Err(reject) => {
                debug!(method, code = reject.code.as_str(), "actor call rejected");
                Err(reject.into())
            }
        }
    }
}

#[async_trait]
impl ActorHandle for HttpActor {
    async fn greet(&self, name: &str) -> Result<String, ActorError> {
        let value = self
            .call(ActorCall::Greet {
                name: name.to_string(),
            })
            .await?;
        value.into_text().map_err(|value| ActorError::UnexpectedReply {
            method: "greet",
            value,
        })
    }

    async fn buy_item(
        &self,
        digital_world_id: DigitalWorldId,
        amount: Amount,
    ) -> Result<ReplyValue, ActorError> {
        self.call(ActorCall::BuyItem {
            digital_world_id,
            amount,
        })
        .await
    }

    async fn claim_sale(
        &self,
        digital_world_id: DigitalWorldId,
    ) -> Result<ReplyValue, ActorError> {
        self.call(ActorCall::ClaimSale { digital_world_id }).await
    }
}
