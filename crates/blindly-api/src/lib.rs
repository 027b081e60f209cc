// blindly-api: Wire protocol client for the Connector blinds hub.
//
// One UDP datagram out, one datagram back. The hub speaks JSON envelopes
// over multicast; everything above this crate works with parsed replies.

pub mod error;
pub mod models;
pub mod protocol;
pub mod transport;

pub use error::Error;
pub use protocol::Request;
pub use transport::{Transport, TransportConfig};
