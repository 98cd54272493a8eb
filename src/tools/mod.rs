//! Tool catalog and dispatcher.

use std::sync::Arc;

use async_trait::async_trait;
pub use rmcp::model::Tool;
use serde_json::Value;
use tracing::{debug, info};

use crate::client::{ApiError, FonParamClient};

pub mod args;
pub mod catalog;
pub mod schema;

pub use catalog::{ToolCatalog, ToolEntry};
pub use schema::{ValidationErrors, Violation};

/// Error type for tool execution.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid parameters: {0}")]
    InvalidArguments(ValidationErrors),

    /// API failures pass through with their message untouched.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Trait for tool providers the protocol adapter can serve.
#[async_trait]
pub trait ToolService: Send + Sync {
    /// List available tools.
    async fn list_tools(&self) -> Result<Vec<Tool>, ToolError>;

    /// Execute a tool.
    async fn call_tool(&self, name: String, args: Value) -> Result<Value, ToolError>;
}

/// Dispatches tool calls to the FonParam API.
#[derive(Debug, Clone)]
pub struct FonParamTools {
    client: FonParamClient,
    catalog: Arc<ToolCatalog>,
}

impl FonParamTools {
    pub fn new(client: FonParamClient) -> Self {
        Self {
            client,
            catalog: Arc::new(ToolCatalog::new()),
        }
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    pub fn client(&self) -> &FonParamClient {
        &self.client
    }
}

#[async_trait]
impl ToolService for FonParamTools {
    async fn list_tools(&self) -> Result<Vec<Tool>, ToolError> {
        Ok(self.catalog.tools())
    }

    async fn call_tool(&self, name: String, args: Value) -> Result<Value, ToolError> {
        let entry = self
            .catalog
            .get(&name)
            .ok_or_else(|| ToolError::UnknownTool(name.clone()))?;

        let request = entry.prepare(args).inspect_err(|e| {
            debug!(tool = %name, error = %e, "rejected tool arguments");
        })?;

        info!(tool = %name, path = %request.path(), "calling FonParam API");
        Ok(self.client.execute(&request).await?)
    }
}
