//! Command dispatch errors.

use text_components::TextComponent;
use thiserror::Error;

/// A failure while parsing or executing a command.
///
/// Handlers that already reported their outcome to the sender return `Ok`;
/// these errors are for failures the dispatcher itself must report.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command can only be run by a player.
    #[error("a player is required to run this command")]
    PlayerRequired,
    /// The command failed with the given user-visible message.
    #[error("command failed")]
    CommandFailed(TextComponent),
}
