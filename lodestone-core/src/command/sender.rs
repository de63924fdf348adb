//! The command sender seam.

use text_components::TextComponent;
use uuid::Uuid;

/// The invoker of a command.
///
/// Implemented by the host for players and for the console.
pub trait CommandSender {
    /// The player identity behind this sender, if any.
    fn player_id(&self) -> Option<Uuid>;

    /// Delivers a chat message to the sender.
    fn send_message(&self, message: TextComponent);
}
