//! ChatServer Actor implementation
//!
//! The central actor that owns all state: clients, rooms and the room name
//! table. Every command from every connection goes through one mpsc queue and
//! is applied fully before the next one is received.

use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::client::{Client, Transport};
use crate::command::Command;
use crate::error::CommandError;
use crate::room::Room;
use crate::types::{ClientId, RoomId};

/// The main ChatServer actor
pub struct ChatServer {
    /// All connected clients: ClientId -> Client
    clients: HashMap<ClientId, Client>,
    /// Every room object ever created, including ones whose name was reused
    rooms: HashMap<RoomId, Room>,
    /// Room table: name -> current room for that name
    room_names: HashMap<String, RoomId>,
    next_room_id: u64,
    /// Command receiver channel
    receiver: mpsc::Receiver<Command>,
}

impl ChatServer {
    /// Create a new ChatServer with the given command receiver
    pub fn new(receiver: mpsc::Receiver<Command>) -> Self {
        Self {
            clients: HashMap::new(),
            rooms: HashMap::new(),
            room_names: HashMap::new(),
            next_room_id: 0,
            receiver,
        }
    }

    /// Run the ChatServer event loop
    ///
    /// Continuously receives and processes commands until all senders are dropped.
    pub async fn run(mut self) {
        info!("ChatServer started");

        while let Some(cmd) = self.receiver.recv().await {
            self.handle_command(cmd).await;
        }

        info!("ChatServer shutting down");
    }

    /// Look up a connected client
    pub fn client(&self, client_id: ClientId) -> Option<&Client> {
        self.clients.get(&client_id)
    }

    /// Look up the room currently registered under `name`
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.room_names.get(name).and_then(|id| self.rooms.get(id))
    }

    /// Names of every room object that lists `client_id` as a member
    pub fn rooms_containing(&self, client_id: ClientId) -> Vec<&str> {
        self.rooms
            .values()
            .filter(|room| room.contains(client_id))
            .map(|room| room.name.as_str())
            .collect()
    }

    /// Process a single command
    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Connect { client, transport } => {
                self.handle_connect(client, transport);
            }
            Command::SetNick { client, nick } => {
                self.handle_set_nick(client, nick).await;
            }
            Command::JoinRoom { client, room } => {
                self.handle_join_room(client, room).await;
            }
            Command::CreateRoom { client, room } => {
                self.handle_create_room(client, room).await;
            }
            Command::ListRooms { client } => {
                self.handle_list_rooms(client).await;
            }
            Command::SendMessage { client, args } => {
                self.handle_send_message(client, args).await;
            }
            Command::Quit { client } => {
                self.handle_quit(client).await;
            }
            Command::Invalid { client, error } => {
                if let Some(client) = self.clients.get_mut(&client) {
                    client.err(error).await;
                }
            }
        }
    }

    /// Handle new client connection
    fn handle_connect(&mut self, client_id: ClientId, transport: Transport) {
        info!("New client from: {}", client_id);
        self.clients
            .insert(client_id, Client::new(client_id, transport));
        debug!(
            "Total clients: {}, Total rooms: {}",
            self.clients.len(),
            self.room_names.len()
        );
    }

    /// Handle nickname change; no uniqueness or format checks
    async fn handle_set_nick(&mut self, client_id: ClientId, nick: String) {
        let Some(client) = self.clients.get_mut(&client_id) else {
            return;
        };

        info!("Client {} set nickname to '{}'", client_id, nick);
        client.nick = nick;
        let reply = format!("Your nickname now is: {}", client.nick);
        client.msg(&reply).await;
    }

    /// Handle room creation
    ///
    /// An existing room with the same name is replaced in the table; its
    /// members keep pointing at the old room object.
    async fn handle_create_room(&mut self, client_id: ClientId, name: String) {
        let Some(client) = self.clients.get_mut(&client_id) else {
            return;
        };

        let room_id = RoomId(self.next_room_id);
        self.next_room_id += 1;

        self.rooms.insert(room_id, Room::new(room_id, name.clone()));
        if let Some(replaced) = self.room_names.insert(name.clone(), room_id) {
            debug!("Room '{}' {} replaced by {}", name, replaced, room_id);
        }

        info!("Client {} created room '{}'", client_id, name);
        client
            .msg(&format!("You created new room:  {}", name))
            .await;
    }

    /// Handle room joining
    ///
    /// The client is added to the new room without being removed from the
    /// previous one, which instead receives a "has created the room" notice.
    async fn handle_join_room(&mut self, client_id: ClientId, name: String) {
        let target = self.room_names.get(&name).copied();
        let Some(client) = self.clients.get_mut(&client_id) else {
            return;
        };

        let Some(room_id) = target else {
            client.msg(&CommandError::RoomNotFound.to_string()).await;
            return;
        };

        let nick = client.nick.clone();
        let previous = client.room;

        if let Some(prev) = previous.and_then(|id| self.rooms.get(&id)) {
            let notice = format!("{} has created the room: {}", nick, name);
            prev.broadcast(client_id, &notice, &mut self.clients).await;
        }

        if let Some(room) = self.rooms.get_mut(&room_id) {
            room.add_member(client_id);
        }
        if let Some(client) = self.clients.get_mut(&client_id) {
            client.room = Some(room_id);
        }

        info!("Client {} joined room '{}'", client_id, name);

        if let Some(room) = self.rooms.get(&room_id) {
            let notice = format!("{} has joined the room", nick);
            room.broadcast(client_id, &notice, &mut self.clients).await;
        }
        if let Some(client) = self.clients.get_mut(&client_id) {
            client.msg(&format!("Welcome to {}", name)).await;
        }
    }

    /// Handle room listing
    async fn handle_list_rooms(&mut self, client_id: ClientId) {
        let Some(client) = self.clients.get_mut(&client_id) else {
            return;
        };

        let names: Vec<&str> = self.room_names.keys().map(String::as_str).collect();

        if names.is_empty() {
            client
                .msg("There is no rooms. You can create room by /join 'room name'")
                .await;
        } else {
            client
                .msg(&format!("Available rooms are: {}", names.join(", ")))
                .await;
        }
    }

    /// Handle chat message
    async fn handle_send_message(&mut self, client_id: ClientId, args: Vec<String>) {
        let Some(client) = self.clients.get_mut(&client_id) else {
            return;
        };

        let Some(room) = client.room.and_then(|id| self.rooms.get(&id)) else {
            client.err(CommandError::NotInRoom).await;
            return;
        };

        let text = format!("{}: {}", client.nick, args.join(" "));
        room.broadcast(client_id, &text, &mut self.clients).await;
    }

    /// Handle quit: leave the current room, say goodbye, close the transport
    async fn handle_quit(&mut self, client_id: ClientId) {
        let (nick, current) = match self.clients.get(&client_id) {
            Some(client) => (client.nick.clone(), client.room),
            None => return,
        };

        info!("Client has disconnected: {}", client_id);

        if let Some(room_id) = current {
            if let Some(room) = self.rooms.get_mut(&room_id) {
                room.remove_member(client_id);
                let notice = format!("{} has left the room", nick);
                room.broadcast(client_id, &notice, &mut self.clients).await;
            }
        }

        // Drop memberships left behind by earlier joins
        for room in self.rooms.values_mut() {
            if room.remove_member(client_id) {
                debug!("Removed {} from room '{}' on quit", client_id, room.name);
            }
        }

        if let Some(mut client) = self.clients.remove(&client_id) {
            client.msg("See you later").await;
            client.close().await;
        }

        debug!(
            "Total clients: {}, Total rooms: {}",
            self.clients.len(),
            self.room_names.len()
        );
    }
}
