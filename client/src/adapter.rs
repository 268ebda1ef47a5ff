//! The lobby adapter: dispatch loop gluing the connection to the view.

use messages::{GameSettings, Outbound};

use crate::net::{ClientError, LobbyConnection};
use crate::view::LobbyView;

/// Owns the socket and the view state for one lobby session.
///
/// The adapter is the only writer of both: server messages flow in through
/// [`LobbyAdapter::process_next`] and user commands flow out through the
/// three send operations.
#[derive(Debug)]
pub struct LobbyAdapter {
    connection: LobbyConnection,
    view: LobbyView,
}

impl LobbyAdapter {
    /// Connect to the lobby endpoint with a fresh view.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Connect`] when the handshake fails.
    pub async fn connect(url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            connection: LobbyConnection::connect(url).await?,
            view: LobbyView::default(),
        })
    }

    /// Receive one message and fold it into the view.
    ///
    /// Returns `false` once the server has closed the socket.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the socket fails.
    pub async fn process_next(&mut self) -> Result<bool, ClientError> {
        let Some(message) = self.connection.recv().await? else {
            return Ok(false);
        };
        tracing::debug!(kind = message.kind(), "received");
        self.view.apply(&message);
        Ok(true)
    }

    /// Ask the server to create a game. Inputs are sent as entered; empty
    /// strings included.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the send fails.
    pub async fn create_game(
        &mut self,
        username: &str,
        settings: GameSettings,
    ) -> Result<(), ClientError> {
        self.connection
            .send(&Outbound::Create {
                username: username.to_owned(),
                settings,
            })
            .await
    }

    /// Start the game for the current lobby.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the send fails.
    pub async fn start_game(&mut self) -> Result<(), ClientError> {
        self.connection.send(&Outbound::Start).await
    }

    /// Advance the running game to the next question.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the send fails.
    pub async fn next_question(&mut self) -> Result<(), ClientError> {
        self.connection.send(&Outbound::NextQuestion).await
    }

    /// Current view state.
    #[must_use]
    pub fn view(&self) -> &LobbyView {
        &self.view
    }

    /// Close the session gracefully.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the close handshake fails.
    pub async fn disconnect(self) -> Result<(), ClientError> {
        self.connection.disconnect().await
    }
}
