//! Command definitions
//!
//! The closed set of operations the server actor applies, and the parser
//! that turns one input line into one command.

use std::fmt;

use crate::client::Transport;
use crate::error::CommandError;
use crate::types::ClientId;

pub const CMD_NICK: &str = "/nick";
pub const CMD_JOIN: &str = "/join";
pub const CMD_CREATE_ROOM: &str = "/createroom";
pub const CMD_ROOMS: &str = "/rooms";
pub const CMD_MSG: &str = "/msg";
pub const CMD_QUIT: &str = "/quit";

/// Commands sent from connection handlers to the ChatServer actor
pub enum Command {
    /// New client connected; hands its write path to the actor
    Connect {
        client: ClientId,
        transport: Transport,
    },
    /// Change nickname
    SetNick { client: ClientId, nick: String },
    /// Join an existing room
    JoinRoom { client: ClientId, room: String },
    /// Create (or replace) a room
    CreateRoom { client: ClientId, room: String },
    /// List all room names
    ListRooms { client: ClientId },
    /// Broadcast to the current room; `args` are the tokens after `/msg`
    SendMessage { client: ClientId, args: Vec<String> },
    /// Leave and disconnect
    Quit { client: ClientId },
    /// Line rejected by the parser
    Invalid {
        client: ClientId,
        error: CommandError,
    },
}

impl Command {
    /// Parse one input line issued by `client`
    ///
    /// Returns `None` for a blank line.
    pub fn parse(client: ClientId, line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next()?;

        let cmd = match keyword {
            CMD_NICK => match tokens.next() {
                Some(nick) => Command::SetNick {
                    client,
                    nick: nick.to_string(),
                },
                None => Command::missing(client, CMD_NICK),
            },
            CMD_JOIN => match tokens.next() {
                Some(room) => Command::JoinRoom {
                    client,
                    room: room.to_string(),
                },
                None => Command::missing(client, CMD_JOIN),
            },
            CMD_CREATE_ROOM => match tokens.next() {
                Some(room) => Command::CreateRoom {
                    client,
                    room: room.to_string(),
                },
                None => Command::missing(client, CMD_CREATE_ROOM),
            },
            CMD_ROOMS => Command::ListRooms { client },
            CMD_MSG => Command::SendMessage {
                client,
                args: tokens.map(str::to_string).collect(),
            },
            CMD_QUIT => Command::Quit { client },
            other => Command::Invalid {
                client,
                error: CommandError::UnknownCommand(other.to_string()),
            },
        };

        Some(cmd)
    }

    /// The client that issued this command
    pub fn client(&self) -> ClientId {
        match self {
            Command::Connect { client, .. }
            | Command::SetNick { client, .. }
            | Command::JoinRoom { client, .. }
            | Command::CreateRoom { client, .. }
            | Command::ListRooms { client }
            | Command::SendMessage { client, .. }
            | Command::Quit { client }
            | Command::Invalid { client, .. } => *client,
        }
    }

    fn missing(client: ClientId, keyword: &'static str) -> Self {
        Command::Invalid {
            client,
            error: CommandError::MissingArgument(keyword),
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Connect { client, .. } => f
                .debug_struct("Connect")
                .field("client", client)
                .finish_non_exhaustive(),
            Command::SetNick { client, nick } => f
                .debug_struct("SetNick")
                .field("client", client)
                .field("nick", nick)
                .finish(),
            Command::JoinRoom { client, room } => f
                .debug_struct("JoinRoom")
                .field("client", client)
                .field("room", room)
                .finish(),
            Command::CreateRoom { client, room } => f
                .debug_struct("CreateRoom")
                .field("client", client)
                .field("room", room)
                .finish(),
            Command::ListRooms { client } => {
                f.debug_struct("ListRooms").field("client", client).finish()
            }
            Command::SendMessage { client, args } => f
                .debug_struct("SendMessage")
                .field("client", client)
                .field("args", args)
                .finish(),
            Command::Quit { client } => f.debug_struct("Quit").field("client", client).finish(),
            Command::Invalid { client, error } => f
                .debug_struct("Invalid")
                .field("client", client)
                .field("error", error)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> ClientId {
        ClientId::new("127.0.0.1:9000".parse().unwrap())
    }

    #[test]
    fn test_parse_nick() {
        match Command::parse(id(), "/nick alice\r\n") {
            Some(Command::SetNick { client, nick }) => {
                assert_eq!(client, id());
                assert_eq!(nick, "alice");
            }
            other => panic!("Wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_parse_room_commands() {
        assert!(matches!(
            Command::parse(id(), "/join lobby"),
            Some(Command::JoinRoom { room, .. }) if room == "lobby"
        ));
        assert!(matches!(
            Command::parse(id(), "/createroom lobby"),
            Some(Command::CreateRoom { room, .. }) if room == "lobby"
        ));
        assert!(matches!(
            Command::parse(id(), "/rooms"),
            Some(Command::ListRooms { .. })
        ));
        assert!(matches!(
            Command::parse(id(), "/quit"),
            Some(Command::Quit { .. })
        ));
    }

    #[test]
    fn test_parse_msg_keeps_body_tokens() {
        match Command::parse(id(), "/msg hi there  friend") {
            Some(Command::SendMessage { args, .. }) => {
                assert_eq!(args, vec!["hi", "there", "friend"]);
            }
            other => panic!("Wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_argument() {
        match Command::parse(id(), "/join") {
            Some(Command::Invalid { error, .. }) => {
                assert_eq!(error, CommandError::MissingArgument(CMD_JOIN));
            }
            other => panic!("Wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown_and_blank() {
        match Command::parse(id(), "/dance now") {
            Some(Command::Invalid { error, .. }) => {
                assert_eq!(error, CommandError::UnknownCommand("/dance".to_string()));
            }
            other => panic!("Wrong variant: {:?}", other),
        }
        assert!(Command::parse(id(), "   \r\n").is_none());
    }

    #[test]
    fn test_command_client() {
        let cmd = Command::parse(id(), "/rooms").unwrap();
        assert_eq!(cmd.client(), id());
    }
}
