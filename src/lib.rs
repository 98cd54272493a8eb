//! # fonparam-mcp
//!
//! An MCP server that exposes the [FonParam](https://api.fonparam.com) Turkish investment-fund
//! API as tools an agent host can list and call.
//!
//! ## Architecture
//!
//! Calls flow one way and results come back unchanged:
//!
//! 1. **[`mcp::FonParamServer`]** speaks the protocol: it lists tools, and wraps failures in
//!    the host's error envelope.
//! 2. **[`tools::FonParamTools`]** looks up the tool, validates the arguments against the
//!    tool's advertised schema and builds an [`request::ApiRequest`].
//! 3. **[`client::FonParamClient`]** issues the `GET` request and normalizes every failure
//!    into an [`client::ApiError`].
//!
//! The client can also be used on its own, with typed responses from [`model`]:
//!
//! ```no_run
//! use fonparam_mcp::client::FonParamClient;
//! use fonparam_mcp::model::FundTypeCode;
//! use fonparam_mcp::params::ListFundsParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FonParamClient::with_defaults()?;
//!     let params = ListFundsParams {
//!         fund_type: Some(FundTypeCode::HisseSenedi),
//!         limit: Some(5),
//!         ..Default::default()
//!     };
//!     let funds = client.list_funds(&params).await?;
//!     for fund in funds.data {
//!         println!("{} {}", fund.code, fund.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod http;
pub mod mcp;
pub mod model;
pub mod options;
pub mod params;
pub mod request;
pub mod tools;

pub use client::{ApiError, FonParamClient};
pub use config::Config;
pub use mcp::FonParamServer;
pub use options::ClientOptions;
pub use request::ApiRequest;
pub use tools::{FonParamTools, ToolCatalog, ToolError, ToolService};

// Re-export rmcp for convenience
pub use rmcp;
