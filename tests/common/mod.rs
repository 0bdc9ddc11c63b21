#![allow(dead_code)]

use codegame_client::codec;
use codegame_client::{ClientMessage, DebugInterface, Game, ServerMessage, Strategy};

pub const TOKEN: &str = "test-token-0001";

pub struct TestGame;

impl Game for TestGame {
    type PlayerView = u32;
    type Action = String;
    type DebugCommand = String;
    type DebugData = Vec<u8>;
}

/// Client messages flattened into something tests can compare.
#[derive(Debug, PartialEq, Eq)]
pub enum Sent {
    Action(String),
    Debug(String),
    DebugData(Vec<u8>),
}

impl From<ClientMessage<TestGame>> for Sent {
    fn from(message: ClientMessage<TestGame>) -> Self {
        match message {
            ClientMessage::ActionMessage { action } => Sent::Action(action),
            ClientMessage::DebugMessage { command } => Sent::Debug(command),
            ClientMessage::DebugDataMessage { data } => Sent::DebugData(data),
        }
    }
}

pub fn get_action(view: u32) -> ServerMessage<TestGame> {
    ServerMessage::GetAction { player_view: view }
}

/// Splits everything the client wrote into the token and the messages
/// that followed it.
pub async fn parse_wire(bytes: &[u8]) -> (String, Vec<Sent>) {
    let mut reader = bytes;
    let token: String = codec::read_frame(&mut reader).await.unwrap();
    let mut sent = Vec::new();
    while !reader.is_empty() {
        let message: ClientMessage<TestGame> = codec::read_frame(&mut reader).await.unwrap();
        sent.push(message.into());
    }
    (token, sent)
}

/// Answers every view `v` with `"action-v"`, and emits one debug command
/// and one debug blob per debug update.
#[derive(Default)]
pub struct Recorder {
    pub views: Vec<u32>,
    pub debug_updates: usize,
    pub fail_on: Option<u32>,
}

impl Strategy<TestGame> for Recorder {
    async fn get_action(
        &mut self,
        view: u32,
        _debug: &mut DebugInterface<'_, TestGame>,
    ) -> anyhow::Result<String> {
        if self.fail_on == Some(view) {
            anyhow::bail!("cannot decide on view {}", view);
        }
        self.views.push(view);
        Ok(format!("action-{}", view))
    }

    async fn debug_update(
        &mut self,
        debug: &mut DebugInterface<'_, TestGame>,
    ) -> anyhow::Result<()> {
        self.debug_updates += 1;
        debug.send(format!("command-{}", self.debug_updates)).await?;
        debug.send_data(vec![self.debug_updates as u8]).await?;
        Ok(())
    }
}
