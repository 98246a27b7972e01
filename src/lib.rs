//! Multi-room TCP Chat Server Library
//!
//! A minimal line-based chat server: clients connect over TCP, pick a
//! nickname, create and join named rooms, and broadcast messages to the
//! other members of their current room.
//!
//! # Commands
//! - `/nick <name>`
//! - `/createroom <room>`
//! - `/join <room>`
//! - `/rooms`
//! - `/msg <text...>`
//! - `/quit`
//!
//! # Architecture
//! Uses the Actor pattern with `mpsc` channels:
//! - `ChatServer` is the single actor owning every client handle and room
//! - Each connection has a `handler` task that only parses lines into
//!   `Command`s and queues them
//! - No locks needed - commands are applied one at a time in queue order
//!
//! # Example
//! ```ignore
//! use tokio::net::TcpListener;
//! use tokio::sync::mpsc;
//! use roomchat::{ChatServer, handle_connection};
//!
//! #[tokio::main]
//! async fn main() {
//!     let listener = TcpListener::bind("127.0.0.1:8888").await.unwrap();
//!     let (cmd_tx, cmd_rx) = mpsc::channel(256);
//!
//!     tokio::spawn(ChatServer::new(cmd_rx).run());
//!
//!     while let Ok((stream, _)) = listener.accept().await {
//!         let cmd_tx = cmd_tx.clone();
//!         tokio::spawn(handle_connection(stream, cmd_tx));
//!     }
//! }
//! ```

pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod handler;
pub mod room;
pub mod server;
pub mod types;

// Re-export main types for convenience
pub use client::{Client, Transport};
pub use command::Command;
pub use config::ServerConfig;
pub use error::{AppError, CommandError};
pub use handler::handle_connection;
pub use room::Room;
pub use server::ChatServer;
pub use types::{ClientId, RoomId};
