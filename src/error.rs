use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

/// malformed shared key
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("shared key has no '@' separating keys from the rendezvous server")]
    MissingAt,
    #[error("shared key has more than one '@'")]
    MultipleAt,
    #[error("expected 3 '+'-separated key fields, found {0}")]
    FieldCount(usize),
    #[error("key field {0} is empty")]
    EmptyField(usize),
    #[error("key field {index} is not valid base64: {reason}")]
    InvalidBase64 { index: usize, reason: String },
    #[error("rendezvous host is empty")]
    EmptyHost,
    #[error("invalid host {0:?}, IPv6 addresses need brackets")]
    InvalidHost(String),
    #[error("invalid rendezvous port {0:?}")]
    InvalidPort(String),
}

/// invalid command line values, reported before anything touches the network
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid shared key: {0}")]
    Key(#[from] ParseError),
    #[error("invalid {role} endpoint {value:?}, expected addr:port")]
    Endpoint { role: &'static str, value: String },
    #[error("invalid STUN server {0:?}, expected host[:port]")]
    StunServer(String),
    #[error("invalid timing: {0}")]
    Timing(String),
}

#[derive(Debug, Error)]
pub enum StunError {
    #[error("STUN server {server} did not answer after {attempts} attempts")]
    Unreachable { server: String, attempts: u32 },
    #[error("could not resolve STUN server {0}")]
    Resolve(String),
    #[error("STUN socket error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum RendezvousError {
    #[error("rendezvous server rejected request: {0}")]
    Rejected(String),
    #[error("rendezvous server {server} did not answer after {attempts} attempts")]
    Unreachable { server: SocketAddr, attempts: u32 },
    #[error("could not resolve rendezvous server {0}")]
    Resolve(String),
    #[error("rendezvous server sent {0}")]
    Protocol(String),
    #[error("rendezvous socket error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum PunchError {
    #[error("no datagram from {peer} within {timeout:?}")]
    Timeout { peer: SocketAddr, timeout: Duration },
    #[error("punch socket error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("link lost: {0}")]
    LinkLost(String),
    #[error("cannot bind local receive endpoint {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },
}

impl RelayError {
    pub(crate) fn lost<E: std::fmt::Display>(what: &str, e: E) -> Self {
        RelayError::LinkLost(format!("{}: {}", what, e))
    }
}
