//! Session state machine.
//!
//! ```text
//!  DISCOVER -> REGISTER -> WAIT_PEER -> PUNCH -> RELAY
//!     ^           |            |          |        |
//!     +-----------+------------+----------+--------+
//! ```
//!
//! Every failure returns to DISCOVER after a jittered backoff delay, so a
//! new cycle starts from a fresh socket and mapping. The controller runs
//! until the shutdown signal flips to `true` (or its sender is dropped);
//! whichever step is in progress is abandoned at that point.

use crate::backoff::Backoff;
use crate::config::Timing;
use crate::error::{PunchError, RelayError, RendezvousError, StunError};
use crate::punch::Opened;
use crate::rendezvous::{PeerPoll, PeerRecord};
use crate::stun::MappedAddress;
use std::fmt;
use tokio::select;
use tokio::sync::watch;
use tokio::time::sleep;

/// The network side of each state, separated so the machine can be driven
/// without sockets.
#[allow(async_fn_in_trait)]
pub trait Stages {
    /// Start a new session and learn its mapped address.
    async fn discover(&mut self) -> Result<MappedAddress, StunError>;

    async fn register(&mut self, mapped: &MappedAddress) -> Result<(), RendezvousError>;

    async fn fetch_peer(&mut self, mapped: &MappedAddress) -> Result<PeerPoll, RendezvousError>;

    async fn punch(&mut self, peer: &PeerRecord) -> Result<Opened, PunchError>;

    /// Relay until the link fails. Ends the session.
    async fn relay(&mut self, opened: &Opened) -> RelayError;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Discover,
    Register(MappedAddress),
    WaitPeer { mapped: MappedAddress, polls: u32 },
    Punch(PeerRecord),
    Relay(Opened),
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Discover => write!(f, "DISCOVER"),
            State::Register(m) => write!(f, "REGISTER({})", m.endpoint),
            State::WaitPeer { polls, .. } => write!(f, "WAIT_PEER({})", polls),
            State::Punch(p) => write!(f, "PUNCH({})", p.endpoint),
            State::Relay(o) => write!(f, "RELAY({})", o.peer),
        }
    }
}

pub struct Controller<S> {
    stages: S,
    timing: Timing,
    retry: Backoff,
    shutdown: watch::Receiver<bool>,
}

impl<S: Stages> Controller<S> {
    pub fn new(stages: S, timing: Timing, shutdown: watch::Receiver<bool>) -> Self {
        let retry = Backoff::new(timing.retry_base, timing.retry_cap);
        Self {
            stages,
            timing,
            retry,
            shutdown,
        }
    }

    pub fn stages(&self) -> &S {
        &self.stages
    }

    /// Cycle through the states until shutdown.
    pub async fn run(&mut self) {
        let mut state = State::Discover;

        loop {
            if *self.shutdown.borrow() {
                break;
            }
            log::debug!("state {}", state);

            let step = step(&mut self.stages, &self.timing, &mut self.retry, state);
            state = select! {
                biased;
                _ = cancelled(&mut self.shutdown) => break,
                next = step => next,
            };
        }

        log::info!("controller stopped");
    }
}

async fn cancelled(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            return;
        }
    }
}

async fn step<S: Stages>(
    stages: &mut S,
    timing: &Timing,
    retry: &mut Backoff,
    state: State,
) -> State {
    match state {
        State::Discover => match stages.discover().await {
            Ok(mapped) => {
                log::info!("mapped address {}", mapped.endpoint);
                State::Register(mapped)
            }
            Err(e) => restart(retry, "discover", e).await,
        },

        State::Register(mapped) => match stages.register(&mapped).await {
            Ok(()) => State::WaitPeer { mapped, polls: 0 },
            Err(e) => restart(retry, "register", e).await,
        },

        State::WaitPeer { mapped, polls } => {
            if polls >= timing.max_polls {
                return restart(retry, "wait peer", format!("no peer after {} polls", polls))
                    .await;
            }
            match stages.fetch_peer(&mapped).await {
                Ok(PeerPoll::Found(peer)) => {
                    log::info!("peer at {}", peer.endpoint);
                    State::Punch(peer)
                }
                Ok(PeerPoll::NotYetAvailable) => {
                    sleep(timing.poll_interval).await;
                    State::WaitPeer {
                        mapped,
                        polls: polls + 1,
                    }
                }
                Err(e) => restart(retry, "fetch peer", e).await,
            }
        }

        State::Punch(peer) => match stages.punch(&peer).await {
            Ok(opened) => {
                log::info!(
                    "path to {} open after {:?}, {} probes",
                    opened.peer,
                    opened.elapsed,
                    opened.probes_sent
                );
                retry.reset();
                State::Relay(opened)
            }
            Err(e) => restart(retry, "punch", e).await,
        },

        State::Relay(opened) => {
            let e = stages.relay(&opened).await;
            restart(retry, "relay", e).await
        }
    }
}

async fn restart<E: fmt::Display>(retry: &mut Backoff, stage: &str, e: E) -> State {
    let delay = retry.next_delay();
    log::warn!("{}: {}, starting over in {:?}", stage, e, delay);
    sleep(delay).await;
    State::Discover
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use std::time::{Duration, Instant};

    fn addr(s: &str) -> SocketAddr {
        s.parse().unwrap()
    }

    #[derive(Default)]
    struct Script {
        calls: Vec<&'static str>,
        stun_failures: u32,
        register_failures: u32,
        // None: the peer never shows up
        peer_after: Option<u32>,
        punch_fails: bool,
        punch_hangs: bool,
        stop_after: usize,
        stop: Option<watch::Sender<bool>>,
    }

    impl Script {
        fn record(&mut self, call: &'static str) {
            self.calls.push(call);
            if self.calls.len() >= self.stop_after {
                if let Some(tx) = &self.stop {
                    let _ = tx.send(true);
                }
            }
        }
    }

    impl Stages for Script {
        async fn discover(&mut self) -> Result<MappedAddress, StunError> {
            self.record("discover");
            if self.stun_failures > 0 {
                self.stun_failures -= 1;
                return Err(StunError::Unreachable {
                    server: "stun".into(),
                    attempts: 1,
                });
            }
            Ok(MappedAddress {
                endpoint: addr("203.0.113.1:1000"),
                discovered_at: Instant::now(),
            })
        }

        async fn register(&mut self, _: &MappedAddress) -> Result<(), RendezvousError> {
            self.record("register");
            if self.register_failures > 0 {
                self.register_failures -= 1;
                return Err(RendezvousError::Rejected("key short".into()));
            }
            Ok(())
        }

        async fn fetch_peer(&mut self, _: &MappedAddress) -> Result<PeerPoll, RendezvousError> {
            self.record("fetch_peer");
            match self.peer_after.as_mut() {
                Some(0) => Ok(PeerPoll::Found(PeerRecord {
                    endpoint: addr("198.51.100.2:2000"),
                    last_seen: Instant::now(),
                })),
                Some(n) => {
                    *n -= 1;
                    Ok(PeerPoll::NotYetAvailable)
                }
                None => Ok(PeerPoll::NotYetAvailable),
            }
        }

        async fn punch(&mut self, peer: &PeerRecord) -> Result<Opened, PunchError> {
            self.record("punch");
            if self.punch_hangs {
                std::future::pending::<()>().await;
            }
            if self.punch_fails {
                return Err(PunchError::Timeout {
                    peer: peer.endpoint,
                    timeout: Duration::from_secs(10),
                });
            }
            Ok(Opened {
                peer: peer.endpoint,
                elapsed: Duration::from_millis(30),
                probes_sent: 1,
            })
        }

        async fn relay(&mut self, _: &Opened) -> RelayError {
            self.record("relay");
            RelayError::LinkLost("peer went quiet".into())
        }
    }

    fn fast() -> Timing {
        Timing {
            poll_interval: Duration::ZERO,
            max_polls: 3,
            retry_base: Duration::ZERO,
            retry_cap: Duration::ZERO,
            ..Default::default()
        }
    }

    async fn drive(mut script: Script) -> Vec<&'static str> {
        let (tx, rx) = watch::channel(false);
        script.stop = Some(tx);

        let mut c = Controller::new(script, fast(), rx);
        tokio::time::timeout(Duration::from_secs(5), c.run())
            .await
            .expect("controller did not stop");
        c.stages().calls.clone()
    }

    #[tokio::test]
    async fn test_happy_path_then_relay_failure() {
        let calls = drive(Script {
            peer_after: Some(1),
            stop_after: 7,
            ..Default::default()
        })
        .await;
        assert_eq!(
            calls,
            [
                "discover",
                "register",
                "fetch_peer",
                "fetch_peer",
                "punch",
                "relay",
                "discover"
            ]
        );
    }

    #[tokio::test]
    async fn test_punch_timeout_restarts() {
        let calls = drive(Script {
            peer_after: Some(0),
            punch_fails: true,
            stop_after: 5,
            ..Default::default()
        })
        .await;
        assert_eq!(
            calls,
            ["discover", "register", "fetch_peer", "punch", "discover"]
        );
    }

    #[tokio::test]
    async fn test_stun_failure_retries_discover() {
        let calls = drive(Script {
            stun_failures: 2,
            peer_after: Some(0),
            stop_after: 4,
            ..Default::default()
        })
        .await;
        assert_eq!(calls, ["discover", "discover", "discover", "register"]);
    }

    #[tokio::test]
    async fn test_register_failure_restarts() {
        let calls = drive(Script {
            register_failures: 1,
            peer_after: Some(0),
            stop_after: 4,
            ..Default::default()
        })
        .await;
        assert_eq!(calls, ["discover", "register", "discover", "register"]);
    }

    #[tokio::test]
    async fn test_wait_peer_gives_up() {
        let calls = drive(Script {
            peer_after: None,
            stop_after: 6,
            ..Default::default()
        })
        .await;
        assert_eq!(
            calls,
            [
                "discover",
                "register",
                "fetch_peer",
                "fetch_peer",
                "fetch_peer",
                "discover"
            ]
        );
    }

    #[tokio::test]
    async fn test_shutdown_interrupts_step() {
        let (tx, rx) = watch::channel(false);
        let script = Script {
            peer_after: Some(0),
            punch_hangs: true,
            stop_after: usize::MAX,
            ..Default::default()
        };

        let mut c = Controller::new(script, fast(), rx);
        let stop = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            tx.send(true).unwrap();
        };
        tokio::time::timeout(Duration::from_secs(2), async { tokio::join!(c.run(), stop) })
            .await
            .expect("shutdown did not interrupt punch");
        assert_eq!(c.stages().calls.last(), Some(&"punch"));
    }

    #[tokio::test]
    async fn test_dropped_sender_stops() {
        let (tx, rx) = watch::channel(false);
        drop(tx);
        let mut c = Controller::new(Script::default(), fast(), rx);
        tokio::time::timeout(Duration::from_secs(1), c.run())
            .await
            .unwrap();
        assert!(c.stages().calls.is_empty());
    }
}
