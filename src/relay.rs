//! Datagram relay over a punched path.
//!
//! ```text
//!  app --> local receive --[Data]--> tunnel --> peer
//!  peer --> tunnel --[Data]--> forward socket --> local forward
//! ```

use crate::error::RelayError;
use crate::packet::Packet;
use std::io::ErrorKind;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::select;
use tokio::time::{interval, timeout_at, Instant, MissedTickBehavior};

// largest UDP payload over IPv4, minus the frame header
const MAX_PAYLOAD: usize = 65507 - 2;

pub struct Relay {
    receive: UdpSocket,
    forward: UdpSocket,
    tunnel: UdpSocket,
    peer: SocketAddr,
    local_forward: SocketAddr,
    keepalive_interval: Duration,
    idle_timeout: Duration,
}

impl Relay {
    /// Bind the local receive endpoint and an ephemeral forwarding socket.
    ///
    /// `tunnel` is the punched socket; the relay owns it from now on.
    pub async fn bind(
        local_receive: SocketAddr,
        local_forward: SocketAddr,
        tunnel: UdpSocket,
        peer: SocketAddr,
        keepalive_interval: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, RelayError> {
        let receive = UdpSocket::bind(local_receive)
            .await
            .map_err(|source| RelayError::Bind {
                addr: local_receive,
                source,
            })?;

        let any: SocketAddr = match local_forward {
            SocketAddr::V4(_) => ([0, 0, 0, 0], 0).into(),
            SocketAddr::V6(_) => (std::net::Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        // unconnected, so an absent application does not surface as ICMP errors
        let forward = UdpSocket::bind(any)
            .await
            .map_err(|e| RelayError::lost("forward socket", e))?;

        Ok(Self {
            receive,
            forward,
            tunnel,
            peer,
            local_forward,
            keepalive_interval,
            idle_timeout,
        })
    }

    pub fn local_receive_addr(&self) -> Option<SocketAddr> {
        self.receive.local_addr().ok()
    }

    /// Relay until the link breaks. All sockets close when this returns.
    pub async fn run(self) -> RelayError {
        log::info!(
            "relaying {} <-> {} <-> {}",
            self.local_receive_addr()
                .map(|a| a.to_string())
                .unwrap_or_default(),
            self.peer,
            self.local_forward
        );

        select! {
            e = self.outbound() => e,
            e = self.inbound() => e,
            e = self.keepalive() => e,
        }
    }

    async fn outbound(&self) -> RelayError {
        let mut buf = vec![0u8; MAX_PAYLOAD + 1];
        let mut frame = Vec::with_capacity(buf.len() + 2);

        loop {
            let (n, from) = match self.receive.recv_from(&mut buf).await {
                Ok(r) => r,
                Err(e) if e.kind() == ErrorKind::ConnectionReset => continue,
                Err(e) => return RelayError::lost("local receive", e),
            };
            if n > MAX_PAYLOAD {
                log::warn!("dropping oversized datagram from {}", from);
                continue;
            }

            Packet::Data(&buf[..n]).encode(&mut frame);
            if let Err(e) = self.tunnel.send_to(&frame, self.peer).await {
                return RelayError::lost("tunnel send", e);
            }
            log::trace!("{} bytes {} -> {}", n, from, self.peer);
        }
    }

    async fn inbound(&self) -> RelayError {
        let mut buf = vec![0u8; 65536];
        let mut deadline = Instant::now() + self.idle_timeout;

        loop {
            let (n, from) = match timeout_at(deadline, self.tunnel.recv_from(&mut buf)).await {
                Err(_) => {
                    return RelayError::LinkLost(format!(
                        "no traffic from {} for {:?}",
                        self.peer, self.idle_timeout
                    ))
                }
                Ok(Err(e)) if e.kind() == ErrorKind::ConnectionReset => continue,
                Ok(Err(e)) => return RelayError::lost("tunnel receive", e),
                Ok(Ok(r)) => r,
            };

            if from != self.peer {
                log::trace!("dropping {} bytes from stranger {}", n, from);
                continue;
            }
            deadline = Instant::now() + self.idle_timeout;

            match Packet::decode(&buf[..n]) {
                Some(Packet::Data(payload)) => {
                    if let Err(e) = self.forward.send_to(payload, self.local_forward).await {
                        return RelayError::lost("local forward", e);
                    }
                    log::trace!("{} bytes {} -> {}", payload.len(), from, self.local_forward);
                }
                Some(p) => log::trace!("{:?} from {}", p, from),
                None => log::trace!("unframed datagram from {}", from),
            }
        }
    }

    async fn keepalive(&self) -> RelayError {
        let frame = Packet::Keepalive.to_vec();
        let mut ticker = interval(self.keepalive_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if let Err(e) = self.tunnel.send_to(&frame, self.peer).await {
                return RelayError::lost("keepalive", e);
            }
        }
    }
}
