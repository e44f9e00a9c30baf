//! Sockets and state for one connection attempt.
//!
//! A [`Session`] starts at discovery and ends when its relay stops or the
//! cycle fails; the next cycle builds a new one from [`Config`] alone.

use crate::backoff::Backoff;
use crate::config::Config;
use crate::controller::Stages;
use crate::error::{PunchError, RelayError, RendezvousError, StunError};
use crate::punch::{self, Opened};
use crate::relay::Relay;
use crate::rendezvous::{Client, PeerPoll, PeerRecord};
use crate::stun::{self, MappedAddress};
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use tokio::net::UdpSocket;

/// One cycle's worth of state.
pub struct Session {
    /// learns the mapping, punches, then carries the tunnel
    socket: UdpSocket,
    mapped: MappedAddress,
    rendezvous: Option<Client>,
    peer: Option<PeerRecord>,
}

fn bind_socket(addr: SocketAddr) -> io::Result<UdpSocket> {
    let s = Socket::new(Domain::for_address(addr), Type::DGRAM, Some(Protocol::UDP))?;
    // a fixed bind port is reused by the next cycle right away
    s.set_reuse_address(true)?;
    s.set_nonblocking(true)?;
    s.bind(&addr.into())?;
    UdpSocket::from_std(s.into())
}

/// [`Stages`] over real sockets.
pub struct NetworkStages {
    config: Config,
    session: Option<Session>,
}

impl NetworkStages {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            session: None,
        }
    }

    fn backoff(&self) -> Backoff {
        Backoff::new(self.config.timing.retry_base, self.config.timing.retry_cap)
    }

    fn no_session() -> io::Error {
        io::Error::new(io::ErrorKind::NotConnected, "no session")
    }
}

impl Stages for NetworkStages {
    async fn discover(&mut self) -> Result<MappedAddress, StunError> {
        // dropping the previous session says bye to the rendezvous server
        self.session = None;

        let t = &self.config.timing;
        let socket = bind_socket(self.config.bind_addr)?;
        let mapped = stun::discover(
            &socket,
            &self.config.stun_server,
            t.stun_timeout,
            t.stun_attempts,
            self.backoff(),
        )
        .await?;

        self.session = Some(Session {
            socket,
            mapped,
            rendezvous: None,
            peer: None,
        });
        Ok(mapped)
    }

    async fn register(&mut self, mapped: &MappedAddress) -> Result<(), RendezvousError> {
        let key = &self.config.key;
        let t = &self.config.timing;
        let backoff = self.backoff();
        let session = self.session.as_mut().ok_or_else(Self::no_session)?;

        let mut client = Client::connect(
            key.locator(),
            &key.tag(),
            t.rendezvous_timeout,
            t.rendezvous_attempts,
            backoff,
        )
        .await?;
        client.register(mapped.endpoint).await?;
        session.rendezvous = Some(client);
        Ok(())
    }

    async fn fetch_peer(
        &mut self,
        mapped: &MappedAddress,
    ) -> Result<PeerPoll, RendezvousError> {
        let session = self.session.as_mut().ok_or_else(Self::no_session)?;
        let client = session.rendezvous.as_mut().ok_or_else(Self::no_session)?;

        let poll = client.fetch_peer(mapped.endpoint).await?;
        if let PeerPoll::Found(peer) = poll {
            session.peer = Some(peer);
        }
        Ok(poll)
    }

    async fn punch(&mut self, peer: &PeerRecord) -> Result<Opened, PunchError> {
        let t = &self.config.timing;
        let session = self.session.as_ref().ok_or_else(Self::no_session)?;
        punch::punch(&session.socket, peer.endpoint, t.punch_interval, t.punch_timeout).await
    }

    async fn relay(&mut self, opened: &Opened) -> RelayError {
        let Some(session) = self.session.take() else {
            return RelayError::LinkLost("no session".into());
        };
        // keeps the registration alive until the relay ends
        let Session {
            socket,
            mapped,
            rendezvous: _rendezvous,
            peer,
        } = session;
        if let Some(peer) = peer {
            log::debug!(
                "tunnel {} -> {}, peer last seen {:?} ago",
                mapped.endpoint,
                opened.peer,
                peer.last_seen.elapsed()
            );
        }

        let t = &self.config.timing;
        match Relay::bind(
            self.config.local_receive,
            self.config.local_forward,
            socket,
            opened.peer,
            t.keepalive_interval,
            t.idle_timeout,
        )
        .await
        {
            Ok(relay) => relay.run().await,
            Err(e) => e,
        }
    }
}
