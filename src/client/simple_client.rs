use serde::Deserialize;
use std::fs::File;
use std::io::Read;

use crate::client::session::{Session, SessionStats};
use crate::client::strategy::Strategy;
use crate::error::{ConfigError, SessionError};
use crate::messages::Game;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 31001;
pub const DEFAULT_TOKEN: &str = "0000000000000000";

// Where to find the server, and how to identify to it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientParams {
    pub host: String,
    pub port: u16,
    pub token: String,
}

impl Default for ClientParams {
    fn default() -> Self {
        ClientParams {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            token: DEFAULT_TOKEN.to_string(),
        }
    }
}

impl ClientParams {
    /// Parses `[host] [port] [token]`, or `--params <file.json>`.
    /// Arguments that are left out keep their default.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut params = ClientParams::default();

        match args.next() {
            None => return Ok(params),
            Some(flag) if flag == "--params" => {
                let path = args.next().ok_or(ConfigError::MissingValue("--params"))?;
                return ClientParams::from_reader(File::open(path)?);
            }
            Some(host) => params.host = host,
        }
        if let Some(port) = args.next() {
            params.port = port
                .parse()
                .map_err(|err| ConfigError::InvalidPort(port.clone(), err))?;
        }
        if let Some(token) = args.next() {
            params.token = token;
        }
        Ok(params)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

pub async fn simple_client<G, S>(
    params: &ClientParams,
    strategy: S,
) -> Result<SessionStats, SessionError>
where
    G: Game,
    S: Strategy<G>,
{
    let session = Session::connect(&params.host, params.port, &params.token).await?;
    session.run(strategy).await
}
