//! A recording command sender.

use lodestone_core::command::sender::CommandSender;
use parking_lot::Mutex;
use text_components::TextComponent;
use uuid::Uuid;

/// A command sender that records the messages it receives.
#[derive(Debug, Default)]
pub struct TestSender {
    player: Option<Uuid>,
    messages: Mutex<Vec<TextComponent>>,
}

impl TestSender {
    /// A sender backed by a player identity.
    #[must_use]
    pub fn player(id: Uuid) -> Self {
        Self {
            player: Some(id),
            messages: Mutex::new(Vec::new()),
        }
    }

    /// A console sender with no player identity.
    #[must_use]
    pub fn console() -> Self {
        Self::default()
    }

    /// The messages delivered so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<TextComponent> {
        self.messages.lock().clone()
    }
}

impl CommandSender for TestSender {
    fn player_id(&self) -> Option<Uuid> {
        self.player
    }

    fn send_message(&self, message: TextComponent) {
        self.messages.lock().push(message);
    }
}
