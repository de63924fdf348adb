//! Command parsing and dispatch.

pub mod commands;
pub mod error;
pub mod sender;

use std::sync::Arc;

use text_components::{TextComponent, color::NamedColor};

use crate::command::commands::CommandHandler;
use crate::command::error::CommandError;
use crate::command::sender::CommandSender;
use crate::service::BackHost;

/// Parses command lines and routes them to their handlers.
pub struct CommandDispatcher<H: BackHost + 'static> {
    /// A map of command names to their handlers.
    handlers: scc::HashMap<&'static str, Arc<dyn CommandHandler<H>>>,
}

impl<H: BackHost + 'static> CommandDispatcher<H> {
    /// Creates a dispatcher with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: scc::HashMap::new(),
        }
    }

    /// Executes a command line, reporting any failure to the sender in red.
    pub fn handle_command(&self, sender: &dyn CommandSender, command: &str, host: &Arc<H>) {
        if let Err(error) = self.execute(sender, command, host) {
            let text = match error {
                CommandError::PlayerRequired => {
                    log::warn!("Non-player sender tried to run \"{command}\"");
                    TextComponent::const_text("A player is required to run this command")
                }
                CommandError::CommandFailed(text) => text,
            };

            sender.send_message(text.color(NamedColor::Red));
        }
    }

    /// Executes a command line.
    pub fn execute(
        &self,
        sender: &dyn CommandSender,
        command: &str,
        host: &Arc<H>,
    ) -> Result<(), CommandError> {
        let (name, args) = Self::split_command(command)?;

        let Some(handler) = self.handlers.read_sync(name, |_, v| v.clone()) else {
            return Err(CommandError::CommandFailed(
                format!("Command {name} does not exist").into(),
            ));
        };

        handler.execute(&args, sender, host)
    }

    /// Splits a command line into its name and whitespace-separated args.
    fn split_command(command: &str) -> Result<(&str, Box<[&str]>), CommandError> {
        let command = command.trim();
        if command.is_empty() {
            return Err(CommandError::CommandFailed(TextComponent::const_text(
                "Empty Command",
            )));
        }

        let Some((name, args)) = command.split_once(' ') else {
            return Ok((command, Box::new([])));
        };

        Ok((name, args.split_whitespace().collect()))
    }

    /// Registers a command handler under each of its names.
    pub fn register(&self, names: &[&'static str], handler: impl CommandHandler<H> + 'static) {
        let handler: Arc<dyn CommandHandler<H>> = Arc::new(handler);

        for &name in names {
            if self.handlers.insert_sync(name, handler.clone()).is_err() {
                log::warn!("Command {name} is already registered");
            }
        }
    }

    /// Unregisters the handlers registered under the given names.
    pub fn unregister(&self, names: &[&'static str]) {
        for name in names {
            self.handlers.remove_sync(name);
        }
    }
}

impl<H: BackHost + 'static> Default for CommandDispatcher<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use lodestone_testkit::{TestHost, TestSender};
    use uuid::Uuid;

    use super::commands::back::{self, BackCommandHandler};
    use super::*;
    use crate::service::BackService;

    fn dispatcher_with_back(service: Arc<BackService>) -> CommandDispatcher<TestHost> {
        let dispatcher = CommandDispatcher::new();
        dispatcher.register(&back::NAMES, BackCommandHandler::new(service));
        dispatcher
    }

    #[test]
    fn unknown_command_reports_red_error() {
        let dispatcher = dispatcher_with_back(Arc::new(BackService::default()));
        let host = Arc::new(TestHost::new());
        let sender = TestSender::player(Uuid::new_v4());

        dispatcher.handle_command(&sender, "home", &host);
        assert_eq!(sender.messages().len(), 1);
    }

    #[test]
    fn empty_command_reports_red_error() {
        let dispatcher = dispatcher_with_back(Arc::new(BackService::default()));
        let host = Arc::new(TestHost::new());
        let sender = TestSender::player(Uuid::new_v4());

        dispatcher.handle_command(&sender, "   ", &host);
        assert_eq!(sender.messages().len(), 1);
    }

    #[test]
    fn unregister_removes_the_command() {
        let dispatcher = dispatcher_with_back(Arc::new(BackService::default()));
        let host = Arc::new(TestHost::new());
        let sender = TestSender::player(Uuid::new_v4());

        dispatcher.unregister(&back::NAMES);
        assert!(dispatcher.execute(&sender, "back", &host).is_err());
    }

    #[test]
    fn console_sender_cannot_run_back() {
        let dispatcher = dispatcher_with_back(Arc::new(BackService::default()));
        let host = Arc::new(TestHost::new());
        let sender = TestSender::console();

        dispatcher.handle_command(&sender, "back", &host);
        // One red "player required" message, no panic.
        assert_eq!(sender.messages().len(), 1);
    }
}
