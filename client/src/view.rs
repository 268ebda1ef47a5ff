//! Explicit view state for the create-game lobby screen.
//!
//! DESIGN
//! ======
//! The screen is modeled as a plain value updated by a pure reducer, so
//! message handling can be tested without a socket and rendering stays a
//! separate concern owned by whatever host drives the adapter.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use messages::Inbound;

/// Visible state of the lobby page: three screen regions plus their labels.
///
/// Visibility flags are independent. A message toggles only the regions it
/// names, so nothing here forces exactly one region visible at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LobbyView {
    /// Whether the create-game form is shown.
    pub create_menu_visible: bool,
    /// Whether the pre-game lobby screen is shown.
    pub lobby_visible: bool,
    /// Whether the in-game screen is shown.
    pub game_visible: bool,
    /// Text of the game-ID label on the lobby screen.
    pub game_id_label: String,
    /// Text of the host banner on the lobby screen.
    pub host_name_label: String,
    /// Text of the error label on the create-game form.
    pub error_label: String,
    /// Newline-joined roster shown in the members box.
    pub members_text: String,
}

impl Default for LobbyView {
    fn default() -> Self {
        Self {
            create_menu_visible: true,
            lobby_visible: false,
            game_visible: false,
            game_id_label: String::new(),
            host_name_label: String::new(),
            error_label: String::new(),
            members_text: String::new(),
        }
    }
}

impl LobbyView {
    /// Fold one decoded server message into the view.
    pub fn apply(&mut self, message: &Inbound) {
        match message {
            Inbound::CreateSuccess { game_id, host_name } => {
                self.game_id_label = format!("Game ID: {game_id}");
                self.host_name_label = format!("{host_name}'s Lobby");
                self.create_menu_visible = false;
                self.lobby_visible = true;
            }
            Inbound::CreateFailed { message } => {
                // Shown verbatim; the create form stays up for another try.
                self.error_label.clone_from(message);
            }
            Inbound::RefreshLobby { users } => {
                self.members_text = users.join("\n");
            }
            Inbound::InitialStuff => {
                self.lobby_visible = false;
                self.game_visible = true;
            }
        }
    }
}
