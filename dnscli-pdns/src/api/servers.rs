//! Server information client

use async_trait::async_trait;

use crate::client::PdnsClient;
use crate::error::Result;
use crate::traits::{ErrorContext, ServerApi};
use crate::types::ServerInfo;

/// Servers client
#[derive(Debug, Clone)]
pub struct ServersClient {
    http: PdnsClient,
}

impl ServersClient {
    pub fn new(http: PdnsClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ServerApi for ServersClient {
    async fn info(&self) -> Result<ServerInfo> {
        self.http.get("", ErrorContext::resource("localhost")).await
    }
}
