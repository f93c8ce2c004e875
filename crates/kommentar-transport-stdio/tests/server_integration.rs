//! Integration tests for the MCP stdio server loop.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use kommentar_mcp::{McpHandler, Tool, ToolRegistry};
use kommentar_protocol::mcp::initialize::ServerInfo;
use kommentar_protocol::mcp::tools::ToolsCallResult;
use kommentar_transport_stdio::{McpServer, StdioTransport};

#[derive(Deserialize)]
struct NapInput {
    millis: u64,
    label: String,
}

/// Sleeps for the requested time, then answers with its label.
struct Nap;

#[async_trait]
impl Tool for Nap {
    type Input = NapInput;

    fn name(&self) -> &'static str {
        "nap"
    }
    fn title(&self) -> &'static str {
        "Nap"
    }
    fn description(&self) -> &'static str {
        "Sleeps, then returns the label."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "millis": {"type": "integer", "minimum": 0},
                "label": {"type": "string"}
            },
            "required": ["millis", "label"]
        })
    }
    async fn invoke(&self, input: NapInput) -> ToolsCallResult {
        tokio::time::sleep(Duration::from_millis(input.millis)).await;
        ToolsCallResult::text(input.label)
    }
}

fn make_handler() -> McpHandler {
    let mut registry = ToolRegistry::new();
    registry.register(Nap).expect("nap");
    McpHandler::new(
        Arc::new(registry),
        ServerInfo {
            name: "test-server".into(),
            version: "0.0.0".into(),
        },
    )
}

async fn run_server(input: &str) -> Vec<Value> {
    let reader = tokio::io::BufReader::new(input.as_bytes());
    let mut output = Vec::new();
    let transport = StdioTransport::new(reader, &mut output);
    let mut server = McpServer::new(transport, make_handler());
    server.run().await.expect("run");
    String::from_utf8(output)
        .expect("utf8")
        .lines()
        .map(|l| serde_json::from_str(l).expect("each output line is JSON"))
        .collect()
}

fn nap_call(id: i64, millis: u64, label: &str) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {"name": "nap", "arguments": {"millis": millis, "label": label}}
    })
    .to_string()
}

#[tokio::test]
async fn server_handles_valid_request() {
    let replies = run_server("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"initialize\"}\n").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["jsonrpc"], "2.0");
    assert_eq!(replies[0]["id"], 1);
    assert_eq!(replies[0]["result"]["serverInfo"]["name"], "test-server");
}

#[tokio::test]
async fn server_handles_notification_silently() {
    let replies =
        run_server("{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n").await;
    assert!(replies.is_empty(), "notifications must not produce output");
}

#[tokio::test]
async fn server_returns_parse_error_on_garbage() {
    let replies = run_server("not json at all\n").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["error"]["code"], -32700);
    assert!(replies[0]["id"].is_null());
    assert!(replies[0]["error"]["message"]
        .as_str()
        .expect("message")
        .contains("parse error"));
}

#[tokio::test]
async fn server_keeps_going_after_garbage() {
    let input = "{broken\n{\"jsonrpc\":\"2.0\",\"id\":4,\"method\":\"ping\"}\n";
    let replies = run_server(input).await;
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[1]["id"], 4);
    assert_eq!(replies[1]["result"], json!({}));
}

#[tokio::test]
async fn server_handles_empty_lines() {
    let input = "\n\n{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"initialize\"}\n";
    let replies = run_server(input).await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["id"], 2);
}

#[tokio::test]
async fn server_eof_shuts_down_cleanly() {
    let replies = run_server("").await;
    assert!(replies.is_empty());
}

#[tokio::test]
async fn server_unknown_method_returns_error() {
    let replies = run_server("{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"foo/bar\"}\n").await;
    assert_eq!(replies[0]["error"]["code"], -32601);
    assert!(replies[0]["error"]["message"]
        .as_str()
        .expect("message")
        .contains("unknown method"));
}

#[tokio::test]
async fn slow_call_does_not_block_fast_one() {
    let input = format!("{}\n{}\n", nap_call(1, 300, "slow"), nap_call(2, 0, "fast"));
    let replies = run_server(&input).await;

    assert_eq!(replies.len(), 2, "in-flight calls are drained on EOF");
    assert_eq!(replies[0]["id"], 2);
    assert_eq!(replies[0]["result"]["content"][0]["text"], "fast");
    assert_eq!(replies[1]["id"], 1);
    assert_eq!(replies[1]["result"]["content"][0]["text"], "slow");
}

#[tokio::test]
async fn cancelled_request_gets_no_reply() {
    let cancel = json!({
        "jsonrpc": "2.0",
        "method": "notifications/cancelled",
        "params": {"requestId": 7, "reason": "user aborted"}
    });
    let input = format!(
        "{}\n{}\n{}\n",
        nap_call(7, 60_000, "never"),
        cancel,
        nap_call(8, 0, "kept")
    );

    let replies = tokio::time::timeout(Duration::from_secs(10), run_server(&input))
        .await
        .expect("cancelled call must not hold the server open");

    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["id"], 8);
    assert_eq!(replies[0]["result"]["content"][0]["text"], "kept");
}

#[tokio::test]
async fn cancelling_unknown_request_is_ignored() {
    let input = format!(
        "{}\n{}\n",
        json!({"jsonrpc": "2.0", "method": "notifications/cancelled", "params": {"requestId": "nope"}}),
        json!({"jsonrpc": "2.0", "id": "a", "method": "ping"})
    );
    let replies = run_server(&input).await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["id"], "a");
}

#[tokio::test]
async fn malformed_request_is_answered_with_its_id() {
    let replies = run_server("{\"jsonrpc\":\"2.0\",\"id\":7,\"method\":42}\n").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["id"], 7);
    assert_eq!(replies[0]["error"]["code"], -32600);
}

#[tokio::test]
async fn duplicate_in_flight_id_is_refused() {
    let input = format!("{}\n{}\n", nap_call(5, 200, "first"), nap_call(5, 0, "second"));
    let replies = run_server(&input).await;

    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["id"], 5);
    assert_eq!(replies[0]["error"]["code"], -32600);
    assert_eq!(replies[1]["id"], 5);
    assert_eq!(replies[1]["result"]["content"][0]["text"], "first");
}

#[tokio::test]
async fn id_is_reusable_after_cancellation() {
    let cancel = json!({
        "jsonrpc": "2.0",
        "method": "notifications/cancelled",
        "params": {"requestId": 9}
    });
    let input = format!(
        "{}\n{}\n{}\n",
        nap_call(9, 60_000, "dropped"),
        cancel,
        nap_call(9, 0, "again")
    );

    let replies = tokio::time::timeout(Duration::from_secs(10), run_server(&input))
        .await
        .expect("cancelled call must not hold the server open");

    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["id"], 9);
    assert_eq!(replies[0]["result"]["content"][0]["text"], "again");
}
