//! Flash-style message container.
//!
//! Infos, warnings, and errors accumulated during one request and attached to
//! its response. Never persisted; rendered once by the client.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Messages {
    pub infos: Vec<String>,
    pub warns: Vec<String>,
    pub errors: Vec<String>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_info(&mut self, message: impl Into<String>) {
        self.infos.push(message.into());
    }

    pub fn add_warn(&mut self, message: impl Into<String>) {
        self.warns.push(message.into());
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.infos.is_empty() && self.warns.is_empty() && self.errors.is_empty()
    }
}
