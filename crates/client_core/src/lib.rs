//! Client-side call orchestration for the Digital World backend actor.
//!
//! User submissions are captured from a [`ViewState`], turned into one remote
//! call each by a [`CallOrchestrator`], and the outcome comes back as a single
//! [`ViewUpdate`] to apply to the view.

use async_trait::async_trait;
use shared::{
    domain::{Amount, AmountParseError, DigitalWorldId},
    error::ActorReject,
    protocol::ReplyValue,
};
use thiserror::Error;

pub mod config;
mod orchestrator;
mod transport;
mod view_state;

pub use orchestrator::CallOrchestrator;
pub use transport::HttpActor;
pub use view_state::{Submission, ViewState, ViewUpdate};

#[derive(Debug, Error)]
pub enum ActorError {
    #[error(transparent)]
    Rejected(#[from] ActorReject),
    #[error("actor endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to reach actor endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed actor reply: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected reply to {method}: {value}")]
    UnexpectedReply {
        method: &'static str,
        value: ReplyValue,
    },
    #[error("actor unavailable: {0}")]
    Unavailable(String),
}

/// Failure inside the guarded region of a purchase or claim. Both kinds end
/// up in the same failure-tagged result text.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Conversion(#[from] AmountParseError),
    #[error(transparent)]
    Actor(#[from] ActorError),
}

/// Handle on the backend actor. Each method is one remote call.
#[async_trait]
pub trait ActorHandle: Send + Sync {
    async fn greet(&self, name: &str) -> Result<String, ActorError>;
    async fn buy_item(
        &self,
        digital_world_id: DigitalWorldId,
        amount: Amount,
    ) -> Result<ReplyValue, ActorError>;
    async fn claim_sale(&self, digital_world_id: DigitalWorldId)
        -> Result<ReplyValue, ActorError>;
}

/// Stand-in used when no endpoint could be configured; every call fails with
/// the reason the real handle is missing.
pub struct MissingActor {
    reason: String,
}

impl MissingActor {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ActorHandle for MissingActor {
    async fn greet(&self, _name: &str) -> Result<String, ActorError> {
        Err(ActorError::Unavailable(self.reason.clone()))
    }

    async fn buy_item(
        &self,
        _digital_world_id: DigitalWorldId,
        _amount: Amount,
    ) -> Result<ReplyValue, ActorError> {
        Err(ActorError::Unavailable(self.reason.clone()))
    }

    async fn claim_sale(
        &self,
        _digital_world_id: DigitalWorldId,
    ) -> Result<ReplyValue, ActorError> {
        Err(ActorError::Unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
