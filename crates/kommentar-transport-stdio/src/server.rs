//! MCP server loop over stdio transport.
//!
//! Reads JSON-RPC messages line by line and dispatches requests via
//! `McpHandler`. Requests run concurrently: the loop keeps reading while
//! earlier calls wait on the network, and writes each reply as soon as
//! it is ready. Notifications (no `id`) never get a reply; a
//! `notifications/cancelled` drops the named request without replying.
//! Request ids must be unique among in-flight requests; a repeat is
//! refused with `invalid request`.

use std::collections::HashMap;

use futures::future::{AbortHandle, Abortable, Aborted, BoxFuture};
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use tracing::{debug, info, warn};

use kommentar_mcp::{JsonRpcOutput, McpHandler};
use kommentar_protocol::mcp::methods;
use kommentar_protocol::mcp::notifications::CancelledParams;
use kommentar_protocol::{error_codes, IncomingMessage, JsonRpcNotification, RequestId};

use crate::error::TransportError;
use crate::transport::StdioTransport;

type InFlight<'a> = BoxFuture<'a, (RequestId, Result<JsonRpcOutput, Aborted>)>;

/// MCP server that reads from a transport and dispatches to a handler.
pub struct McpServer<R, W> {
    transport: StdioTransport<R, W>,
    handler: McpHandler,
}

impl<R, W> McpServer<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new server with the given transport and handler.
    pub fn new(transport: StdioTransport<R, W>, handler: McpHandler) -> Self {
        Self { transport, handler }
    }

    /// Runs the server loop until the input is closed.
    ///
    /// On EOF, requests already in flight are finished and answered
    /// before returning.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` if the channel itself fails; request
    /// level failures are answered and the loop continues.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        let handler = &self.handler;
        let transport = &mut self.transport;
        let mut in_flight: FuturesUnordered<InFlight<'_>> = FuturesUnordered::new();
        let mut abort_handles: HashMap<RequestId, AbortHandle> = HashMap::new();
        let mut reading = true;

        loop {
            tokio::select! {
                line = transport.read_line(), if reading => {
                    let Some(line) = line? else {
                        info!(pending = in_flight.len(), "stdin closed");
                        reading = false;
                        continue;
                    };
                    if line.is_empty() {
                        continue;
                    }
                    match IncomingMessage::parse(&line) {
                        Ok(IncomingMessage::Request(request)) => {
                            debug!(method = %request.method, id = %request.id, "received request");
                            let id = request.id.clone();
                            if abort_handles.contains_key(&id) {
                                warn!(%id, "request id already in flight");
                                let err = JsonRpcOutput::error(
                                    id.clone(),
                                    error_codes::INVALID_REQUEST,
                                    format!("request id {id} is already in flight"),
                                );
                                write_output(transport, &err).await?;
                                continue;
                            }
                            let (abort, registration) = AbortHandle::new_pair();
                            abort_handles.insert(id.clone(), abort);
                            let call = Abortable::new(
                                async move { handler.dispatch(&request).await },
                                registration,
                            );
                            in_flight.push(call.map(move |outcome| (id, outcome)).boxed());
                        }
                        Ok(IncomingMessage::Notification(notification)) => {
                            debug!(method = %notification.method, "received notification");
                            if notification.method == methods::NOTIFICATIONS_CANCELLED {
                                cancel(&mut abort_handles, &notification);
                            }
                            handler.handle_notification(&notification);
                        }
                        Err(e) => {
                            warn!(error = %e, "rejected JSON-RPC frame");
                            let reply = JsonRpcOutput::Error(e.to_response());
                            write_output(transport, &reply).await?;
                        }
                    }
                }
                Some((id, outcome)) = in_flight.next(), if !in_flight.is_empty() => {
                    match outcome {
                        Ok(output) => {
                            abort_handles.remove(&id);
                            write_output(transport, &output).await?;
                        }
                        // the handle went with the cancellation; the id may
                        // already belong to a newer request
                        Err(Aborted) => debug!(%id, "request cancelled, reply suppressed"),
                    }
                }
                else => break,
            }
        }

        info!("shutting down");
        Ok(())
    }
}

/// Aborts the request named by a `notifications/cancelled`, if still running.
fn cancel(abort_handles: &mut HashMap<RequestId, AbortHandle>, notification: &JsonRpcNotification) {
    let params = notification
        .params
        .clone()
        .and_then(|p| serde_json::from_value::<CancelledParams>(p).ok());
    let Some(params) = params else {
        debug!("ignoring malformed cancellation");
        return;
    };
    match abort_handles.remove(&params.request_id) {
        Some(handle) => {
            info!(
                id = %params.request_id,
                reason = params.reason.as_deref().unwrap_or("<none>"),
                "cancelling request"
            );
            handle.abort();
        }
        None => debug!(id = %params.request_id, "cancellation for unknown or finished request"),
    }
}

/// Serializes and writes a JSON-RPC output to the transport.
async fn write_output<R, W>(
    transport: &mut StdioTransport<R, W>,
    output: &JsonRpcOutput,
) -> Result<(), TransportError>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    let json = output.to_json()?;
    transport.write_line(&json).await
}
