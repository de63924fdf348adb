//! Handler for the "back" command.

use std::sync::Arc;

use text_components::{TextComponent, color::NamedColor};

use crate::command::commands::CommandHandler;
use crate::command::error::CommandError;
use crate::command::sender::CommandSender;
use crate::service::{BackHost, BackService};

/// The names for the "back" command.
pub const NAMES: [&str; 1] = ["back"];

/// Handler for the "back" command.
///
/// Zero arguments: teleports the requesting player to their saved
/// pre-teleport location, if a standable position exists near it.
pub struct BackCommandHandler {
    service: Arc<BackService>,
}

impl BackCommandHandler {
    /// Creates the handler around a shared service.
    #[must_use]
    pub fn new(service: Arc<BackService>) -> Self {
        Self { service }
    }
}

impl<H: BackHost> CommandHandler<H> for BackCommandHandler {
    fn execute(
        &self,
        args: &[&str],
        sender: &dyn CommandSender,
        host: &Arc<H>,
    ) -> Result<(), CommandError> {
        if !args.is_empty() {
            return Err(CommandError::CommandFailed(TextComponent::const_text(
                "Invalid Syntax.",
            )));
        }

        let player = sender.player_id().ok_or(CommandError::PlayerRequired)?;

        // The command reports success to the dispatcher on every path; the
        // outcome reaches the player through the chat messages alone.
        match self.service.on_back_command(host.as_ref(), player) {
            Ok(_) => sender.send_message(
                TextComponent::const_text("Teleported back to your last safe location.")
                    .color(NamedColor::Green),
            ),
            Err(error) => sender.send_message(
                TextComponent::new()
                    .text(error.to_string())
                    .color(NamedColor::Red),
            ),
        }

        Ok(())
    }
}
