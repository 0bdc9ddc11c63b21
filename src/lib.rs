pub mod client;
pub mod codec;
pub mod error;
pub mod logger;
pub mod messages;

pub use client::debug::DebugInterface;
pub use client::session::{Session, SessionStats};
pub use client::simple_client::{simple_client, ClientParams};
pub use client::strategy::Strategy;
pub use error::{ConfigError, SessionError};
pub use messages::{ClientMessage, Game, ServerMessage};
