use crate::client::debug::DebugInterface;
use crate::messages::Game;

/// The decision making half of a bot.
///
/// Neither the view nor the debug handle can outlive the call they were
/// passed to. Any error returned here ends the session.
#[allow(async_fn_in_trait)]
pub trait Strategy<G: Game> {
    async fn get_action(
        &mut self,
        player_view: G::PlayerView,
        debug: &mut DebugInterface<'_, G>,
    ) -> anyhow::Result<G::Action>;

    /// Called when the server accepts debug output.
    async fn debug_update(&mut self, _debug: &mut DebugInterface<'_, G>) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<G: Game, S: Strategy<G>> Strategy<G> for &mut S {
    async fn get_action(
        &mut self,
        player_view: G::PlayerView,
        debug: &mut DebugInterface<'_, G>,
    ) -> anyhow::Result<G::Action> {
        (**self).get_action(player_view, debug).await
    }

    async fn debug_update(&mut self, debug: &mut DebugInterface<'_, G>) -> anyhow::Result<()> {
        (**self).debug_update(debug).await
    }
}
