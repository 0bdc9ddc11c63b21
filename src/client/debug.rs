use std::marker::PhantomData;
use tokio::io::AsyncWrite;
use tracing::debug;

use crate::codec;
use crate::error::SessionError;
use crate::messages::{ClientMessage, Game};

/// Lets a strategy emit debug output on the session's connection.
///
/// Borrows the session's write half for the duration of one strategy call.
/// Every send is flushed before it returns, so messages reach the wire in
/// call order.
pub struct DebugInterface<'a, G: Game> {
    writer: &'a mut (dyn AsyncWrite + Unpin + Send),
    sent: usize,
    game: PhantomData<fn() -> G>,
}

impl<'a, G: Game> DebugInterface<'a, G> {
    pub fn new(writer: &'a mut (dyn AsyncWrite + Unpin + Send)) -> Self {
        DebugInterface {
            writer,
            sent: 0,
            game: PhantomData,
        }
    }

    pub async fn send(&mut self, command: G::DebugCommand) -> Result<(), SessionError> {
        self.write(ClientMessage::DebugMessage { command }).await
    }

    pub async fn send_data(&mut self, data: G::DebugData) -> Result<(), SessionError> {
        self.write(ClientMessage::DebugDataMessage { data }).await
    }

    /// Number of debug messages written through this handle.
    pub fn sent(&self) -> usize {
        self.sent
    }

    async fn write(&mut self, message: ClientMessage<G>) -> Result<(), SessionError> {
        codec::write_frame(&mut *self.writer, &message).await?;
        self.sent += 1;
        debug!(kind = message.kind(), "sent debug message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;

    impl Game for Dummy {
        type PlayerView = ();
        type Action = ();
        type DebugCommand = String;
        type DebugData = Vec<u8>;
    }

    #[tokio::test]
    async fn sends_in_call_order() {
        let mut wire = Vec::new();
        {
            let mut debug = DebugInterface::<Dummy>::new(&mut wire);
            debug.send("clear".to_string()).await.unwrap();
            debug.send_data(vec![1, 2, 3]).await.unwrap();
            debug.send("mark".to_string()).await.unwrap();
            assert_eq!(debug.sent(), 3);
        }

        let mut reader = &wire[..];
        let mut kinds = Vec::new();
        while !reader.is_empty() {
            let message: ClientMessage<Dummy> = codec::read_frame(&mut reader).await.unwrap();
            kinds.push(message.kind());
        }
        assert_eq!(kinds, ["DebugMessage", "DebugDataMessage", "DebugMessage"]);
    }
}
