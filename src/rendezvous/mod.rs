//! Rendezvous point.
//!
//! Peers holding the same shared key announce their mapped addresses to a
//! public server and learn each other's from it. One request, one response,
//! over UDP:
//!
//! - `Register{addr}` is answered with `Accepted`, or `Fail` if the key or
//!   address is unacceptable. Repeating it only refreshes the entry.
//! - `Query{addr}` is answered with `Peer{addr}` once somebody else
//!   registered under the key, `Retry` until then.
//! - `Bye{addr}` drops the entry, no answer.
//!
//! The server also answers STUN binding requests, so a deployment can point
//! both the key and the STUN locator at the same host.

mod client;
pub use client::{Client, PeerPoll};

#[cfg(feature = "server")]
mod server;
#[cfg(feature = "server")]
pub use server::{Server, ServerConfig};

use std::net::SocketAddr;
use std::time::Instant;

/// The counterpart's announced address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerRecord {
    pub endpoint: SocketAddr,
    pub last_seen: Instant,
}

const MAX_MESSAGE: usize = 1500;
