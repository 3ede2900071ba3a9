//! Backend-to-UI events and error modeling for the GUI controller.

use client_core::ViewUpdate;

pub enum UiEvent {
    Info(String),
    Error(UiError),
    ViewUpdated(ViewUpdate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Configuration,
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Dispatch,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid network url")
            || message_lower.contains("cannot be a base")
            || message_lower.contains("canister id")
        {
            UiErrorCategory::Configuration
        } else if message_lower.contains("runtime")
            || message_lower.contains("queue")
            || message_lower.contains("disconnected")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line status text shown under the forms.
    pub fn status_line(&self) -> String {
        match self.category {
            UiErrorCategory::Configuration => format!(
                "Backend actor is not configured ({}); check network_url and canister_id.",
                self.message
            ),
            UiErrorCategory::Transport => format!("Backend worker problem: {}", self.message),
            UiErrorCategory::Unknown => self.message.clone(),
        }
    }
}
