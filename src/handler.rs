//! TCP connection handler
//!
//! Command ingress for one client: reads lines from the socket, parses each
//! into a `Command` and queues it for the ChatServer. The write half is handed
//! to the server, which does all delivery.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::command::Command;
use crate::error::AppError;
use crate::types::ClientId;

/// Handle a new TCP connection
///
/// Returns once the client quits or the connection drops. A dropped
/// connection is turned into a `Quit` so the server can clean up.
pub async fn handle_connection(
    stream: TcpStream,
    cmd_tx: mpsc::Sender<Command>,
) -> Result<(), AppError> {
    let client = ClientId::new(stream.peer_addr()?);
    let (reader, writer) = stream.into_split();

    // Register with ChatServer
    cmd_tx
        .send(Command::Connect {
            client,
            transport: Box::new(writer),
        })
        .await
        .map_err(|_| AppError::ChannelSend)?;

    let mut lines = BufReader::new(reader).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let Some(cmd) = Command::parse(client, &line) else {
                    continue;
                };
                let quitting = matches!(cmd, Command::Quit { .. });

                cmd_tx.send(cmd).await.map_err(|_| AppError::ChannelSend)?;

                if quitting {
                    debug!("Client {} quit", client);
                    return Ok(());
                }
            }
            Ok(None) => {
                debug!("Client {} closed the connection", client);
                break;
            }
            Err(e) => {
                warn!("Read error from {}: {}", client, e);
                break;
            }
        }
    }

    cmd_tx
        .send(Command::Quit { client })
        .await
        .map_err(|_| AppError::ChannelSend)
}
