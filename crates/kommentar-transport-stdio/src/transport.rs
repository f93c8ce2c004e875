//! Line-delimited JSON transport over stdin/stdout.
//!
//! Each JSON-RPC message is a single line terminated by `\n`.
//! Embedded newlines are not allowed inside a message.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tracing::trace;

use crate::error::TransportError;

/// Reads JSON-RPC messages from stdin, writes responses to stdout.
///
/// Generic over reader/writer for testability. `read_line` is
/// cancellation safe, so it can sit in a `select!` next to in-flight
/// requests without losing input.
pub struct StdioTransport<R, W> {
    lines: Lines<BufReader<R>>,
    writer: W,
}

impl<R, W> StdioTransport<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new transport with the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            writer,
        }
    }

    /// Reads the next line, trimmed of surrounding whitespace.
    ///
    /// Returns `None` on EOF (connection closed) and `Some("")` for a
    /// blank line.
    pub async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        let line = self
            .lines
            .next_line()
            .await
            .map_err(TransportError::Read)?;

        Ok(line.map(|l| {
            let trimmed = l.trim().to_string();
            if !trimmed.is_empty() {
                trace!(len = trimmed.len(), "read message");
            }
            trimmed
        }))
    }

    /// Writes one message followed by `\n` and flushes.
    pub async fn write_line(&mut self, message: &str) -> Result<(), TransportError> {
        trace!(len = message.len(), "writing message");

        self.writer
            .write_all(message.as_bytes())
            .await
            .map_err(TransportError::Write)?;
        self.writer
            .write_all(b"\n")
            .await
            .map_err(TransportError::Write)?;
        self.writer.flush().await.map_err(TransportError::Write)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn read_single_line() {
        let reader = Cursor::new(b"{\"jsonrpc\":\"2.0\"}\n".to_vec());
        let mut transport = StdioTransport::new(reader, Vec::new());

        let line = transport.read_line().await.expect("read");
        assert_eq!(line, Some("{\"jsonrpc\":\"2.0\"}".to_string()));
    }

    #[tokio::test]
    async fn read_eof_returns_none() {
        let mut transport = StdioTransport::new(Cursor::new(Vec::<u8>::new()), Vec::new());
        assert_eq!(transport.read_line().await.expect("read"), None);
    }

    #[tokio::test]
    async fn crlf_and_blank_lines_are_trimmed() {
        let reader = Cursor::new(b"  {}\r\n\n".to_vec());
        let mut transport = StdioTransport::new(reader, Vec::new());

        assert_eq!(transport.read_line().await.expect("r1"), Some("{}".into()));
        assert_eq!(transport.read_line().await.expect("r2"), Some(String::new()));
        assert_eq!(transport.read_line().await.expect("r3"), None);
    }

    #[tokio::test]
    async fn last_line_without_newline_is_read() {
        let reader = Cursor::new(b"a\nb".to_vec());
        let mut transport = StdioTransport::new(reader, Vec::new());

        assert_eq!(transport.read_line().await.expect("r1"), Some("a".into()));
        assert_eq!(transport.read_line().await.expect("r2"), Some("b".into()));
        assert_eq!(transport.read_line().await.expect("r3"), None);
    }

    #[tokio::test]
    async fn write_appends_newline() {
        let mut transport = StdioTransport::new(Cursor::new(Vec::<u8>::new()), Vec::new());

        transport.write_line("{\"ok\":true}").await.expect("write");

        let output = String::from_utf8(transport.writer.clone()).expect("utf8");
        assert_eq!(output, "{\"ok\":true}\n");
    }
}
