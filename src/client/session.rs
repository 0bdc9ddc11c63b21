use tokio::io::{AsyncRead, AsyncWrite, BufReader, BufWriter};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::client::debug::DebugInterface;
use crate::client::strategy::Strategy;
use crate::codec;
use crate::error::SessionError;
use crate::messages::{ClientMessage, Game, ServerMessage};

/// What happened over the lifetime of a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub actions: usize,
    pub debug_updates: usize,
    pub debug_messages: usize,
}

/// One authenticated connection to the game server.
///
/// Reads and writes go through separate buffers over the two halves of
/// the stream. Nothing else holds the connection; the strategy only ever
/// borrows the write half through a `DebugInterface`.
pub struct Session<R, W> {
    reader: BufReader<R>,
    writer: BufWriter<W>,
}

impl Session<OwnedReadHalf, OwnedWriteHalf> {
    pub async fn connect(host: &str, port: u16, token: &str) -> Result<Self, SessionError> {
        let stream = TcpStream::connect((host, port))
            .await
            .map_err(SessionError::Connection)?;
        stream.set_nodelay(true).map_err(SessionError::Connection)?;
        info!(host, port, "connected to game server");

        let (rx, tx) = stream.into_split();
        Session::handshake(rx, tx, token).await
    }
}

impl<R, W> Session<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send,
{
    /// Sends the token as the very first frame. The server does not
    /// acknowledge it; a bad token shows up as the connection closing.
    pub async fn handshake(reader: R, writer: W, token: &str) -> Result<Self, SessionError> {
        let mut session = Session {
            reader: BufReader::new(reader),
            writer: BufWriter::new(writer),
        };
        codec::write_frame(&mut session.writer, token).await?;
        debug!("sent token");
        Ok(session)
    }

    /// Serves the server's requests until it sends `Finish`.
    pub async fn run<G, S>(mut self, mut strategy: S) -> Result<SessionStats, SessionError>
    where
        G: Game,
        S: Strategy<G>,
    {
        let mut stats = SessionStats::default();
        loop {
            let message: ServerMessage<G> = codec::read_frame(&mut self.reader).await?;
            debug!(kind = message.kind(), "received server message");

            match message {
                ServerMessage::GetAction { player_view } => {
                    let mut debug = DebugInterface::<G>::new(&mut self.writer);
                    let action = strategy
                        .get_action(player_view, &mut debug)
                        .await
                        .map_err(SessionError::Strategy)?;
                    stats.debug_messages += debug.sent();

                    let reply = ClientMessage::<G>::ActionMessage { action };
                    codec::write_frame(&mut self.writer, &reply).await?;
                    stats.actions += 1;
                    debug!(turn = stats.actions, "sent action");
                }
                ServerMessage::DebugUpdate => {
                    let mut debug = DebugInterface::<G>::new(&mut self.writer);
                    strategy
                        .debug_update(&mut debug)
                        .await
                        .map_err(SessionError::Strategy)?;
                    stats.debug_messages += debug.sent();
                    stats.debug_updates += 1;
                }
                ServerMessage::Finish => {
                    info!(
                        actions = stats.actions,
                        debug_updates = stats.debug_updates,
                        "game finished"
                    );
                    return Ok(stats);
                }
            }
        }
    }
}
