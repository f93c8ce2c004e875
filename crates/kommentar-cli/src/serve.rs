//! Wires config, HTTP client, tools and the stdio server together.

use std::sync::Arc;

use anyhow::Context;

use kommentar_api::{register_all, ClientSettings, CommentaryClient};
use kommentar_config::{ApiConfig, KommentarConfig};
use kommentar_mcp::{McpHandler, ToolRegistry};
use kommentar_protocol::mcp::initialize::ServerInfo;
use kommentar_transport_stdio::{McpServer, StdioTransport};

/// Name reported in `initialize`.
pub(crate) const SERVER_NAME: &str = "online-kommentar-server";

pub(crate) fn client_settings(api: &ApiConfig) -> ClientSettings {
    ClientSettings {
        base_url: api.base_url.clone(),
        timeout: api.timeout(),
        user_agent: api.user_agent.clone(),
    }
}

/// Builds the handler with both commentary tools registered.
pub(crate) fn build_handler(config: &KommentarConfig) -> anyhow::Result<McpHandler> {
    let client = CommentaryClient::new(&client_settings(&config.api))
        .context("cannot create commentary API client")?;

    let mut registry = ToolRegistry::new();
    register_all(&mut registry, Arc::new(client)).context("cannot register tools")?;
    tracing::debug!(
        tools = registry.len(),
        base_url = %config.api.base_url,
        "tools registered"
    );

    Ok(McpHandler::new(
        Arc::new(registry),
        ServerInfo {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    ))
}

/// Serves MCP on stdin/stdout until EOF or Ctrl-C.
pub(crate) async fn run(handler: McpHandler) -> anyhow::Result<()> {
    let transport = StdioTransport::new(tokio::io::stdin(), tokio::io::stdout());
    let mut server = McpServer::new(transport, handler);
    tracing::info!("Server connected to transport.");

    tokio::select! {
        result = server.run() => {
            result.context("stdio transport failed")?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
