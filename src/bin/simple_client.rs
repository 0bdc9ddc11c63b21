//! # Higher-lower
//!
//! A demo bot for a number guessing game. Each turn the server tells the
//! bot the range the number is known to be in, and the bot guesses
//! somewhere inside it. When the server asks for debug output the bot
//! reports the range it is currently searching.
//!
//! Usage: `simple_client [host] [port] [token]` or
//! `simple_client --params params.json`.

use std::env;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use codegame_client::{logger, simple_client, ClientParams, DebugInterface, Game, Strategy};

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
struct Range {
    lower: u32,
    upper: u32,
}

struct HigherLower;

impl Game for HigherLower {
    type PlayerView = Range;
    type Action = u32;
    type DebugCommand = String;
    type DebugData = Range;
}

#[derive(Default)]
struct Guesser {
    range: Option<Range>,
}

impl Strategy<HigherLower> for Guesser {
    async fn get_action(
        &mut self,
        range: Range,
        _debug: &mut DebugInterface<'_, HigherLower>,
    ) -> anyhow::Result<u32> {
        if range.lower > range.upper {
            anyhow::bail!("empty range {}..={}", range.lower, range.upper);
        }
        self.range = Some(range);
        Ok(rand::thread_rng().gen_range(range.lower..=range.upper))
    }

    async fn debug_update(
        &mut self,
        debug: &mut DebugInterface<'_, HigherLower>,
    ) -> anyhow::Result<()> {
        if let Some(range) = self.range {
            debug
                .send(format!("searching {}..={}", range.lower, range.upper))
                .await?;
            debug.send_data(range).await?;
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger()?;
    let params = ClientParams::from_args(env::args().skip(1))?;

    match simple_client::<HigherLower, _>(&params, Guesser::default()).await {
        Ok(stats) => {
            info!(actions = stats.actions, "done");
            Ok(())
        }
        Err(err) => {
            error!("session failed: {}", err);
            Err(err.into())
        }
    }
}
