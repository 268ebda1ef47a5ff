//! WebSocket connection with an explicit lifecycle.
//!
//! The socket is exclusively owned by one [`LobbyConnection`]; there is no
//! shared handle and no reconnect logic. Undecodable inbound frames are
//! contained here: they are logged and skipped so a stray message never
//! tears down the session.

use futures_util::{SinkExt, StreamExt};
use messages::{CodecError, Inbound, Outbound};
use tokio_tungstenite::tungstenite::Error as WsError;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// Error returned by connection operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The websocket handshake failed (bad URL, refused connection, ...).
    #[error("websocket connect failed: {0}")]
    Connect(Box<WsError>),
    /// The established socket failed mid-session.
    #[error("websocket transport failed: {0}")]
    Transport(Box<WsError>),
}

/// One long-lived socket to the lobby server.
#[derive(Debug)]
pub struct LobbyConnection {
    stream: WsStream,
}

impl LobbyConnection {
    /// Open a socket to the given `ws://` or `wss://` endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Connect`] when the URL is invalid or the
    /// handshake fails.
    pub async fn connect(url: &str) -> Result<Self, ClientError> {
        let (stream, _) = connect_async(url)
            .await
            .map_err(|error| ClientError::Connect(Box::new(error)))?;
        tracing::debug!(url, "connected");
        Ok(Self { stream })
    }

    /// Receive the next decoded message, or `None` once the server closes.
    ///
    /// Text frames that fail to decode (malformed JSON, unknown or broken
    /// `kind`) are logged at warn level and skipped; they never escape this
    /// boundary. Binary, ping, and pong frames carry no protocol meaning and
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the socket itself fails.
    pub async fn recv(&mut self) -> Result<Option<Inbound>, ClientError> {
        loop {
            let Some(message) = self.stream.next().await else {
                tracing::info!("socket closed");
                return Ok(None);
            };
            let message = message.map_err(|error| ClientError::Transport(Box::new(error)))?;
            match message {
                Message::Text(text) => match messages::decode_inbound(text.as_str()) {
                    Ok(inbound) => return Ok(Some(inbound)),
                    Err(CodecError::UnknownKind(kind)) => {
                        tracing::warn!(%kind, "ignoring message of unknown kind");
                    }
                    Err(error) => {
                        tracing::warn!(%error, "ignoring undecodable message");
                    }
                },
                Message::Close(_) => {
                    tracing::info!("socket closed");
                    return Ok(None);
                }
                _ => {}
            }
        }
    }

    /// Send one command. Fire-and-forget: no retries, acks, or timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the socket write fails.
    pub async fn send(&mut self, message: &Outbound) -> Result<(), ClientError> {
        tracing::debug!(kind = message.kind(), "sending");
        let encoded = messages::encode_outbound(message);
        self.stream
            .send(Message::Text(encoded.into()))
            .await
            .map_err(|error| ClientError::Transport(Box::new(error)))
    }

    /// Close the socket gracefully.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the close handshake fails for
    /// a reason other than the peer having closed first.
    pub async fn disconnect(mut self) -> Result<(), ClientError> {
        match self.stream.close(None).await {
            Ok(()) | Err(WsError::ConnectionClosed | WsError::AlreadyClosed) => Ok(()),
            Err(error) => Err(ClientError::Transport(Box::new(error))),
        }
    }
}
