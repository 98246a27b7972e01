//! Room struct definition
//!
//! A named broadcast group. Membership is a set of client ids; the handles
//! themselves live in the server's client table.

use std::collections::{HashMap, HashSet};

use tracing::info;

use crate::client::Client;
use crate::types::{ClientId, RoomId};

/// Multi-member chat room
///
/// Rooms are never deleted, even once empty.
#[derive(Debug)]
pub struct Room {
    /// Arena key
    pub id: RoomId,
    /// Room name, unique key in the room table
    pub name: String,
    /// Current members
    pub members: HashSet<ClientId>,
}

impl Room {
    /// Create a new empty room
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            members: HashSet::new(),
        }
    }

    /// Check if a client is in this room
    pub fn contains(&self, client_id: ClientId) -> bool {
        self.members.contains(&client_id)
    }

    pub fn add_member(&mut self, client_id: ClientId) {
        self.members.insert(client_id);
    }

    /// Remove a client, returning whether it was a member
    pub fn remove_member(&mut self, client_id: ClientId) -> bool {
        self.members.remove(&client_id)
    }

    /// Deliver `text` to every member
    ///
    /// The sender receives `"(You) " + text` and an audit record is logged.
    /// Delivery is best effort; a member without a handle is skipped.
    pub async fn broadcast(
        &self,
        sender: ClientId,
        text: &str,
        clients: &mut HashMap<ClientId, Client>,
    ) {
        for member_id in &self.members {
            let Some(member) = clients.get_mut(member_id) else {
                continue;
            };

            if *member_id != sender {
                member.msg(text).await;
            } else {
                member.msg(&format!("(You) {}", text)).await;
                info!(
                    nick = %member.nick,
                    addr = %sender,
                    room = %self.name,
                    "New message from: {} - {} in {}: {}",
                    member.nick,
                    sender,
                    self.name,
                    text
                );
            }
        }
    }
}
