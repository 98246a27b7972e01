//! Basic type definitions for the chat server
//!
//! Provides newtype wrappers for type safety:
//! - `ClientId`: the peer's socket address
//! - `RoomId`: arena key of a room object, independent of its name

use std::net::SocketAddr;

/// Nickname every client starts with
pub const DEFAULT_NICK: &str = "Anon";

/// Unique client identifier (newtype pattern)
///
/// A session is identified by its connection endpoint, which is unique
/// for as long as the connection is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub SocketAddr);

impl ClientId {
    pub fn new(addr: SocketAddr) -> Self {
        Self(addr)
    }

    /// Remote endpoint of this session
    pub fn addr(&self) -> SocketAddr {
        self.0
    }
}

impl From<SocketAddr> for ClientId {
    fn from(addr: SocketAddr) -> Self {
        Self(addr)
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room object identifier
///
/// Names can be reused by `/createroom`; the id tells the old and the new
/// room apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub u64);

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_equality_follows_endpoint() {
        let a = ClientId::new("127.0.0.1:5001".parse().unwrap());
        let b = ClientId::from("127.0.0.1:5001".parse::<SocketAddr>().unwrap());
        let c = ClientId::new("127.0.0.1:5002".parse().unwrap());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_client_id_display() {
        let id = ClientId::new("10.0.0.7:40000".parse().unwrap());
        assert_eq!(id.to_string(), "10.0.0.7:40000");
    }
}
