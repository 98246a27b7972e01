//! Client handle definition
//!
//! Represents one connected session: identity, nickname, current room and
//! the outbound write path to its socket.

use std::fmt;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::types::{ClientId, RoomId, DEFAULT_NICK};

/// Outbound half of a client's transport
pub type Transport = Box<dyn AsyncWrite + Send + Unpin>;

/// Connected client information
///
/// Owned by the server actor; `nick` and `room` are only mutated from there.
pub struct Client {
    /// Unique identifier for this client (peer address)
    pub id: ClientId,
    /// Display name, "Anon" until changed
    pub nick: String,
    /// Room this client currently belongs to
    pub room: Option<RoomId>,
    transport: Transport,
}

impl Client {
    /// Create a new client with the default nickname and no room
    pub fn new(id: ClientId, transport: Transport) -> Self {
        Self {
            id,
            nick: DEFAULT_NICK.to_string(),
            room: None,
            transport,
        }
    }

    /// Deliver one line of text to this client
    ///
    /// Fire-and-forget: a failed write is logged and otherwise ignored.
    pub async fn msg(&mut self, text: &str) {
        let line = format!("{}\n", text);
        if let Err(e) = self.transport.write_all(line.as_bytes()).await {
            debug!("Write to {} failed: {}", self.id, e);
        }
    }

    /// Deliver a formatted error line to this client
    pub async fn err(&mut self, error: impl fmt::Display) {
        self.msg(&format!("err: {}", error)).await;
    }

    /// Close the outbound side of the transport
    pub async fn close(&mut self) {
        if let Err(e) = self.transport.shutdown().await {
            debug!("Shutdown of {} failed: {}", self.id, e);
        }
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("id", &self.id)
            .field("nick", &self.nick)
            .field("room", &self.room)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use tokio::io::{duplex, AsyncBufReadExt, BufReader};

    fn test_id() -> ClientId {
        ClientId::new("127.0.0.1:6000".parse().unwrap())
    }

    #[tokio::test]
    async fn test_client_creation() {
        let (tx, _rx) = duplex(64);
        let client = Client::new(test_id(), Box::new(tx));

        assert_eq!(client.nick, "Anon");
        assert!(client.room.is_none());
    }

    #[tokio::test]
    async fn test_msg_and_err_lines() {
        let (tx, rx) = duplex(1024);
        let mut client = Client::new(test_id(), Box::new(tx));

        client.msg("hello").await;
        client.err(CommandError::NotInRoom).await;
        client.close().await;

        let mut lines = BufReader::new(rx).lines();
        assert_eq!(lines.next_line().await.unwrap().unwrap(), "hello");
        assert_eq!(
            lines.next_line().await.unwrap().unwrap(),
            "err: you have to join room first"
        );
        assert!(lines.next_line().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_msg_to_dropped_peer_is_ignored() {
        let (tx, rx) = duplex(64);
        drop(rx);
        let mut client = Client::new(test_id(), Box::new(tx));

        // Must not panic or surface the error
        client.msg("nobody listening").await;
        client.err("still nobody").await;
    }
}
