//! Client adapter for the lobby websocket protocol.
//!
//! DESIGN
//! ======
//! Three layers, each independently testable: `view` is a pure projection of
//! the lobby screen (no IO), `net` owns the socket with an explicit
//! connect/disconnect lifecycle, and `adapter` glues them together by folding
//! decoded messages into the view and serializing user commands outward.

pub mod adapter;
pub mod net;
pub mod view;

pub use adapter::LobbyAdapter;
pub use net::{ClientError, LobbyConnection};
pub use view::LobbyView;
