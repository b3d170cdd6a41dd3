//! UI Command Handler

use super::state::App;
use crate::events::{LogicCommand, UiCommand};

impl App {
    /// Dispatches UI commands. This is the entry point for all UI actions.
    pub(super) fn handle_ui_command(&mut self, command: UiCommand) {
        self.logger.debug(&format!("Handling command: {:?}", command));
        match command {
            UiCommand::Capture => self.handle_capture(),
            UiCommand::ToggleOverlay => {
                self.show_overlay = !self.show_overlay;
            }
            UiCommand::ClearHistory => {
                self.logger
                    .info(&format!("Clearing {} history entries", self.history.len()));
                self.history.clear();
            }
        }
    }

    /// Asks the logic thread for a capture cycle. The button stays disabled
    /// until the cycle finishes or is rejected.
    fn handle_capture(&mut self) {
        if self.capturing {
            return;
        }
        if self.logic_cmd_tx.send(LogicCommand::Capture).is_err() {
            self.logger.error("Logic thread is gone, capture not sent");
            self.show_error("Capture unavailable: pipeline stopped".to_string());
            return;
        }
        self.capturing = true;
    }
}
