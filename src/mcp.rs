//! MCP server exposing the tool catalog to an agent host.

use std::fmt::Display;
use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};
use serde_json::Value;
use tracing::warn;

use crate::tools::ToolService;

pub const SERVER_NAME: &str = "fonparam-mcp";

/// Prefix of every error message returned to the host.
pub const ERROR_PREFIX: &str = "FonParam API Error";

/// Wrap any failure into the host's internal-error envelope.
pub fn error_envelope(message: impl Display) -> ErrorData {
    ErrorData::internal_error(format!("{ERROR_PREFIX}: {message}"), None)
}

/// Render a tool result as a single pretty-printed JSON text block.
pub fn render_result(value: &Value) -> Result<CallToolResult, ErrorData> {
    let text = serde_json::to_string_pretty(value).map_err(error_envelope)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Protocol adapter between an MCP transport and a [`ToolService`].
#[derive(Debug)]
pub struct FonParamServer<S> {
    service: Arc<S>,
}

impl<S> Clone for FonParamServer<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<S: ToolService + 'static> FonParamServer<S> {
    pub fn new(service: S) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Handle a tools/list request.
    pub async fn handle_list(&self) -> Result<ListToolsResult, ErrorData> {
        let tools = self.service.list_tools().await.map_err(error_envelope)?;
        Ok(ListToolsResult::with_all_items(tools))
    }

    /// Handle a tools/call request. Missing arguments are treated as an empty object.
    pub async fn handle_call(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult, ErrorData> {
        let name = request.name.to_string();
        let args = Value::Object(request.arguments.unwrap_or_default());

        match self.service.call_tool(name.clone(), args).await {
            Ok(result) => render_result(&result),
            Err(e) => {
                warn!(tool = %name, error = %e, "tool call failed");
                Err(error_envelope(e))
            }
        }
    }
}

impl<S: ToolService + 'static> ServerHandler for FonParamServer<S> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Turkish investment fund data from FonParam: funds, management companies, \
                 daily market statistics, fund types and inflation rates."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        self.handle_list().await
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.handle_call(request).await
    }
}
