use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The payload types a particular game puts on the wire.
///
/// The session never looks inside these; it only moves them between the
/// codec and the strategy.
pub trait Game {
    type PlayerView: Serialize + DeserializeOwned;
    type Action: Serialize + DeserializeOwned;
    type DebugCommand: Serialize + DeserializeOwned;
    type DebugData: Serialize + DeserializeOwned;
}

/// Messages sent by the game server.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub enum ServerMessage<G: Game> {
    /// Request an action for the next tick
    GetAction { player_view: G::PlayerView },
    /// End of the game, no reply expected
    Finish,
    /// The server is ready to receive debug output
    DebugUpdate,
}

impl<G: Game> ServerMessage<G> {
    pub fn kind(&self) -> &'static str {
        match self {
            ServerMessage::GetAction { .. } => "GetAction",
            ServerMessage::Finish => "Finish",
            ServerMessage::DebugUpdate => "DebugUpdate",
        }
    }
}

impl<G: Game> fmt::Debug for ServerMessage<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// Messages sent by the client.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub enum ClientMessage<G: Game> {
    /// Reply to `ServerMessage::GetAction`
    ActionMessage { action: G::Action },
    DebugMessage { command: G::DebugCommand },
    DebugDataMessage { data: G::DebugData },
}

impl<G: Game> ClientMessage<G> {
    pub fn kind(&self) -> &'static str {
        match self {
            ClientMessage::ActionMessage { .. } => "ActionMessage",
            ClientMessage::DebugMessage { .. } => "DebugMessage",
            ClientMessage::DebugDataMessage { .. } => "DebugDataMessage",
        }
    }
}

impl<G: Game> fmt::Debug for ClientMessage<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}
