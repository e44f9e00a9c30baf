//!Connect two hosts behind NAT and relay UDP datagrams between them.
//!
//!Both hosts run the same program with the same shared key. Neither needs a public address,
//!only outbound UDP and a public rendezvous server both can reach.
//!
//!## How it works
//!Each host asks a STUN server which public address its socket is mapped to,
//!then announces that address to the rendezvous server under the shared key.
//!The rendezvous server hands each host the other's address.
//!
//!Both hosts then probe each other from the very socket they asked STUN with.
//!The outgoing probes open each NAT towards the other side; once a probe gets through,
//!the path is open and the socket becomes a tunnel.
//!
//!Datagrams an application sends to the local receive endpoint come out at the other host's
//!local forward endpoint, and the other way round. When the tunnel goes quiet the whole cycle
//!starts over with a fresh socket.
//!
//!The shared key looks like `base64key+base64key+base64key@server[:port][/path]`.
//!
//!## Feature flags
//!The crate includes the rendezvous server and both command line tools by default.
//!
//!```toml
//!stunproxy = { version = "0.1", default-features = false }
//!```
//!
//!- `server`: rendezvous server
//!- `cli`: `stunproxy` and `stunproxy-server` binaries

#[doc(hidden)]
pub mod proto;

pub mod backoff;
pub mod config;
pub mod controller;
pub mod error;
pub mod key;
pub mod packet;
pub mod punch;
pub mod relay;
pub mod rendezvous;
pub mod session;
pub mod signal;
pub mod stun;

pub use config::{Config, Timing};
pub use controller::{Controller, Stages, State};
pub use key::SharedKey;
pub use session::NetworkStages;
