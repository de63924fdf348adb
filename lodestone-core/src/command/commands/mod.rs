//! The command handlers.

pub mod back;

use std::sync::Arc;

use crate::command::error::CommandError;
use crate::command::sender::CommandSender;
use crate::service::BackHost;

/// A handler for a single command.
pub trait CommandHandler<H: BackHost>: Send + Sync {
    /// Handles one invocation with the already-split arguments.
    fn execute(
        &self,
        args: &[&str],
        sender: &dyn CommandSender,
        host: &Arc<H>,
    ) -> Result<(), CommandError>;
}
