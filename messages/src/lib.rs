//! Wire model and JSON codec for the lobby websocket protocol.
//!
//! This crate owns the message shapes exchanged with the lobby server. Every
//! message is a JSON object discriminated by a `kind` field; the enums here
//! make that dispatch exhaustive instead of string-keyed, with unknown kinds
//! surfaced as a typed error rather than dropped on the floor.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned by [`decode_inbound`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw text is not valid JSON.
    #[error("malformed JSON message: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The JSON object carries no string `kind` discriminator.
    #[error("message has no `kind` field")]
    MissingKind,
    /// The `kind` value does not name any known inbound message.
    #[error("unknown message kind `{0}`")]
    UnknownKind(String),
    /// The `kind` is known but the payload fields do not match its shape.
    #[error("invalid payload for `{kind}` message: {source}")]
    InvalidPayload {
        /// The recognized discriminator value.
        kind: String,
        /// The underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },
}

/// A message received from the lobby server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Inbound {
    /// The server accepted the create request and opened a lobby.
    #[serde(rename = "createSuccess", rename_all = "camelCase")]
    CreateSuccess {
        /// Join code for the new game.
        game_id: String,
        /// Display name of the hosting user.
        host_name: String,
    },
    /// The server rejected the create request.
    #[serde(rename = "createFailed")]
    CreateFailed {
        /// Human-readable rejection reason, shown verbatim.
        message: String,
    },
    /// Full replacement of the lobby roster.
    #[serde(rename = "refreshLobby")]
    RefreshLobby {
        /// Joined participants in server order.
        users: Vec<String>,
    },
    /// The game has begun; the lobby screen is done.
    #[serde(rename = "initialStuff")]
    InitialStuff,
}

impl Inbound {
    /// Wire discriminator for this message, as it appears in the `kind` field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CreateSuccess { .. } => "createSuccess",
            Self::CreateFailed { .. } => "createFailed",
            Self::RefreshLobby { .. } => "refreshLobby",
            Self::InitialStuff => "initialStuff",
        }
    }
}

/// A command sent to the lobby server. Every send is fire-and-forget; the
/// protocol has no acknowledgments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Outbound {
    /// Ask the server to create a game hosted by `username`.
    #[serde(rename = "create")]
    Create {
        /// Host display name, sent as entered (empty included).
        username: String,
        /// Game configuration chosen on the create form.
        settings: GameSettings,
    },
    /// Start the game for the current lobby.
    #[serde(rename = "start")]
    Start,
    /// Advance the running game to the next question.
    #[serde(rename = "nextQuestion")]
    NextQuestion,
}

impl Outbound {
    /// Wire discriminator for this command.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Start => "start",
            Self::NextQuestion => "nextQuestion",
        }
    }
}

/// Game configuration carried inside a create command.
///
/// Section bounds are kept as strings because the form sends raw input text;
/// the server owns interpretation and validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    /// First question-bank section to draw from.
    pub start_section: String,
    /// Last question-bank section to draw from.
    pub end_section: String,
    /// Which game variant to run.
    pub game_kind: String,
}

/// Decode one raw text frame into an [`Inbound`] message.
///
/// The `kind` field is inspected before the payload is deserialized so that
/// callers can tell an unknown discriminator apart from a known message with
/// a broken payload.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] for invalid JSON,
/// [`CodecError::MissingKind`] when no string `kind` field is present,
/// [`CodecError::UnknownKind`] for an unrecognized discriminator, and
/// [`CodecError::InvalidPayload`] when a known kind carries the wrong fields.
pub fn decode_inbound(raw: &str) -> Result<Inbound, CodecError> {
    let value: Value = serde_json::from_str(raw)?;
    let kind = match value.get("kind").and_then(Value::as_str) {
        Some(kind) => kind.to_owned(),
        None => return Err(CodecError::MissingKind),
    };

    if matches!(
        kind.as_str(),
        "createSuccess" | "createFailed" | "refreshLobby" | "initialStuff"
    ) {
        serde_json::from_value(value).map_err(|source| CodecError::InvalidPayload { kind, source })
    } else {
        Err(CodecError::UnknownKind(kind))
    }
}

/// Encode a command into its JSON text frame.
#[must_use]
pub fn encode_outbound(message: &Outbound) -> String {
    // Serialization cannot fail here: every field is a string and the
    // discriminator is emitted by serde itself.
    serde_json::to_string(message).unwrap_or_default()
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
