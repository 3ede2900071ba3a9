use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::{Amount, DigitalWorldId},
    error::ActorReject,
};

/// One call on the backend actor, tagged by method name on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "args", rename_all = "snake_case")]
pub enum ActorCall {
    Greet {
        name: String,
    },
    BuyItem {
        digital_world_id: DigitalWorldId,
        amount: Amount,
    },
    ClaimSale {
        digital_world_id: DigitalWorldId,
    },
}

impl ActorCall {
    pub fn method(&self) -> &'static str {
        match self {
            Self::Greet { .. } => "greet",
            Self::BuyItem { .. } => "buy_item",
            Self::ClaimSale { .. } => "claim_sale",
        }
    }
}

/// Result envelope returned by the backend actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActorReply {
    Ok(ReplyValue),
    Err(ActorReject),
}

impl From<ActorReply> for Result<ReplyValue, ActorReject> {
    fn from(value: ActorReply) -> Self {
        match value {
            ActorReply::Ok(value) => Ok(value),
            ActorReply::Err(reject) => Err(reject),
        }
    }
}

/// Success payload of a call. Opaque to the client apart from how it renders
/// inside a message.
///
/// Objects render as compact JSON, not as the `[object Object]` a browser
/// template literal would produce, so structured replies stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplyValue(pub Value);

impl ReplyValue {
    pub fn into_text(self) -> Result<String, Self> {
        match self.0 {
            Value::String(text) => Ok(text),
            other => Err(Self(other)),
        }
    }
}

impl From<Value> for ReplyValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for ReplyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_interpolated(f, &self.0)
    }
}

fn write_interpolated(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::String(text) => f.write_str(text),
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    f.write_str(",")?;
                }
                // Nulls inside a list render as empty slots.
                if !item.is_null() {
                    write_interpolated(f, item)?;
                }
            }
            Ok(())
        }
        other => write!(f, "{other}"),
    }
}
