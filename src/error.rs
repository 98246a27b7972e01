//! Error types for the chat server
//!
//! Defines fatal connection errors and user-input errors.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Application-level errors
///
/// These end a connection handler; they are never shown to other clients.
#[derive(Debug, Error)]
pub enum AppError {
    /// IO error on the client's socket (fatal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Channel send error (fatal - server actor is gone)
    #[error("Channel send error")]
    ChannelSend,
}

/// User-input errors
///
/// Reported to the issuing client as a single line. No state change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Keyword not recognised by the ingress parser
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Keyword that needs a parameter was sent without one
    #[error("missing argument for {0}")]
    MissingArgument(&'static str),

    /// Message sent while not in a room
    #[error("you have to join room first")]
    NotInRoom,

    /// Join target is not in the room table
    #[error("Wrong room name! Check /rooms or /createroom")]
    RoomNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_messages() {
        assert_eq!(
            CommandError::UnknownCommand("/dance".to_string()).to_string(),
            "unknown command: /dance"
        );
        assert_eq!(
            CommandError::MissingArgument("/nick").to_string(),
            "missing argument for /nick"
        );
        assert_eq!(CommandError::NotInRoom.to_string(), "you have to join room first");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
    }
}
