//! UDP hole punching.
//!
//! Both peers call [`punch`] at roughly the same time with each other's
//! mapped address. Outgoing probes open our NAT towards the peer; the first
//! datagram that arrives from the peer proves its NAT is open towards us.

use crate::error::PunchError;
use crate::packet::Packet;
use std::io::ErrorKind;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::net::UdpSocket;
use tokio::select;
use tokio::time::{interval, sleep_until, MissedTickBehavior};

/// A path to the peer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opened {
    pub peer: SocketAddr,
    pub elapsed: Duration,
    pub probes_sent: u32,
}

/// Probe `peer` from `socket` every `probe_interval` until it answers.
///
/// Any datagram whose source is `peer` opens the path, whatever it carries.
/// `probe_interval` must be non-zero.
pub async fn punch(
    socket: &UdpSocket,
    peer: SocketAddr,
    probe_interval: Duration,
    timeout: Duration,
) -> Result<Opened, PunchError> {
    let started = Instant::now();
    let deadline = tokio::time::Instant::now() + timeout;
    let probe = Packet::Probe.to_vec();

    let mut ticker = interval(probe_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut probes_sent = 0u32;
    let mut buf = [0u8; 1500];

    log::debug!(
        "punching {} -> {}",
        socket.local_addr().map(|a| a.to_string()).unwrap_or_default(),
        peer
    );

    loop {
        select! {
            _ = sleep_until(deadline) => {
                log::debug!("punch to {} timed out after {} probes", peer, probes_sent);
                return Err(PunchError::Timeout { peer, timeout });
            }
            _ = ticker.tick() => {
                socket.send_to(&probe, peer).await?;
                probes_sent += 1;
            }
            r = socket.recv_from(&mut buf) => {
                let (n, from) = match r {
                    Ok(r) => r,
                    // windows reports ICMP unreachable from earlier probes here
                    Err(e) if e.kind() == ErrorKind::ConnectionReset => continue,
                    Err(e) => return Err(e.into()),
                };

                if from != peer {
                    log::trace!("ignoring {} bytes from {} while punching", n, from);
                    continue;
                }

                // the peer may have missed everything we sent before its NAT opened
                socket.send_to(&probe, peer).await?;
                probes_sent += 1;

                let opened = Opened {
                    peer,
                    elapsed: started.elapsed(),
                    probes_sent,
                };
                log::info!("path to {} open after {:?}", peer, opened.elapsed);
                return Ok(opened);
            }
        }
    }
}
