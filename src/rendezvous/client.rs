use super::{PeerRecord, MAX_MESSAGE};
use crate::backoff::Backoff;
use crate::error::RendezvousError;
use crate::key::RendezvousLocator;
use crate::proto::rendezvous::{
    request::Cmd as ReqCmd, response::Cmd as RespCmd, Bye, Query, Register, Request, Response,
};
use protobuf::Message;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::net::{lookup_host, UdpSocket};
use tokio::time::{sleep, timeout};

/// Outcome of a peer lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerPoll {
    Found(PeerRecord),
    NotYetAvailable,
}

enum Failure {
    Rejected(String),
    Unreachable,
}

/// Rendezvous client
///
/// Talks to the server from its own socket; the punch socket stays free for
/// the peer. Sends `Bye` for the registered address when dropped.
///
/// # example
/// ```no_run
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// use std::time::Duration;
/// use stunproxy::backoff::Backoff;
/// use stunproxy::key::SharedKey;
/// use stunproxy::rendezvous::{Client, PeerPoll};
///
/// let key: SharedKey = "AAAAAAAA+AAAAAAAA+AAAAAAAA@rendezvous.example.org".parse()?;
/// let backoff = Backoff::new(Duration::from_millis(500), Duration::from_secs(30));
/// let mut c = Client::connect(key.locator(), &key.tag(), Duration::from_secs(3), 5, backoff).await?;
///
/// let mapped: std::net::SocketAddr = "203.0.113.7:40001".parse()?;
/// c.register(mapped).await?;
/// if let PeerPoll::Found(peer) = c.fetch_peer(mapped).await? {
///     println!("peer at {}", peer.endpoint);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Client {
    socket: UdpSocket,
    server_addr: SocketAddr,
    key: String,
    path: String,
    seq: u32,
    timeout: Duration,
    attempts: u32,
    backoff: Backoff,
    registered: Option<SocketAddr>,
}

impl Drop for Client {
    fn drop(&mut self) {
        if let Some(addr) = self.registered.take() {
            let mut bye = Bye::new();
            bye.addr = addr.to_string();
            let req = self.new_req(ReqCmd::Bye(bye));
            if let Ok(buf) = req.write_to_bytes() {
                let _ = self.socket.try_send(&buf);
            }
        }
    }
}

impl Client {
    /// resolve the server and open a socket towards it.
    ///
    /// every request waits `timeout` for its answer and is tried `attempts`
    /// times, sleeping per `backoff` in between.
    pub async fn connect(
        locator: &RendezvousLocator,
        key: &str,
        timeout: Duration,
        attempts: u32,
        backoff: Backoff,
    ) -> Result<Self, RendezvousError> {
        let server = locator.server_addr();
        let server_addr = lookup_host(&server)
            .await
            .map_err(|e| RendezvousError::Resolve(format!("{}: {}", server, e)))?
            .next()
            .ok_or_else(|| RendezvousError::Resolve(server.clone()))?;

        let local_addr: SocketAddr = match server_addr {
            SocketAddr::V4(_) => ([0, 0, 0, 0], 0).into(),
            SocketAddr::V6(_) => (std::net::Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        let socket = UdpSocket::bind(local_addr).await?;
        socket.connect(server_addr).await?;

        Ok(Self {
            socket,
            server_addr,
            key: key.to_string(),
            path: locator.path().to_string(),
            seq: rand::random(),
            timeout,
            attempts,
            backoff,
            registered: None,
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// announce `mapped` under our key.
    pub async fn register(&mut self, mapped: SocketAddr) -> Result<(), RendezvousError> {
        let mut reg = Register::new();
        reg.addr = mapped.to_string();

        match self.exchange(ReqCmd::Register(reg)).await? {
            RespCmd::Accepted(_) | RespCmd::Retry(_) => {
                log::debug!("registered {} at {}", mapped, self.server_addr);
                self.registered = Some(mapped);
                Ok(())
            }
            other => Err(RendezvousError::Protocol(format!(
                "{:?} in answer to register",
                other
            ))),
        }
    }

    /// look up whoever else registered under our key.
    pub async fn fetch_peer(&mut self, mapped: SocketAddr) -> Result<PeerPoll, RendezvousError> {
        let mut query = Query::new();
        query.addr = mapped.to_string();

        match self.exchange(ReqCmd::Query(query)).await? {
            RespCmd::Peer(peer) => {
                let endpoint: SocketAddr = peer.addr.parse().map_err(|_| {
                    RendezvousError::Protocol(format!("invalid peer address {:?}", peer.addr))
                })?;
                let now = Instant::now();
                let last_seen = now
                    .checked_sub(Duration::from_millis(peer.age_ms))
                    .unwrap_or(now);

                Ok(PeerPoll::Found(PeerRecord {
                    endpoint,
                    last_seen,
                }))
            }
            RespCmd::Retry(_) => Ok(PeerPoll::NotYetAvailable),
            other => Err(RendezvousError::Protocol(format!(
                "{:?} in answer to query",
                other
            ))),
        }
    }

    fn new_req(&mut self, cmd: ReqCmd) -> Request {
        self.seq = self.seq.wrapping_add(1);

        let mut req = Request::new();
        req.key = self.key.clone();
        req.path = self.path.clone();
        req.seq = self.seq;
        req.cmd = Some(cmd);
        req
    }

    // send `cmd` until the server gives an answer other than Fail
    async fn exchange(&mut self, cmd: ReqCmd) -> Result<RespCmd, RendezvousError> {
        self.backoff.reset();
        let mut last = Failure::Unreachable;

        for attempt in 1..=self.attempts {
            let req = self.new_req(cmd.clone());
            let buf = req
                .write_to_bytes()
                .map_err(|e| RendezvousError::Protocol(e.to_string()))?;

            let sent = self.socket.send(&buf).await;
            last = match sent {
                Err(e) => {
                    log::debug!("send to {} failed: {}", self.server_addr, e);
                    Failure::Unreachable
                }
                Ok(_) => match timeout(self.timeout, self.recv_resp(req.seq)).await {
                    Ok(Ok(RespCmd::Fail(fail))) => {
                        log::debug!("{} rejected request: {}", self.server_addr, fail.reason);
                        Failure::Rejected(fail.reason)
                    }
                    Ok(Ok(cmd)) => return Ok(cmd),
                    Ok(Err(e)) => {
                        log::debug!("receive from {} failed: {}", self.server_addr, e);
                        Failure::Unreachable
                    }
                    Err(_) => {
                        log::debug!(
                            "no answer from {}, attempt {}/{}",
                            self.server_addr,
                            attempt,
                            self.attempts
                        );
                        Failure::Unreachable
                    }
                },
            };

            if attempt < self.attempts {
                sleep(self.backoff.next_delay()).await;
            }
        }

        Err(match last {
            Failure::Rejected(reason) => RendezvousError::Rejected(reason),
            Failure::Unreachable => RendezvousError::Unreachable {
                server: self.server_addr,
                attempts: self.attempts,
            },
        })
    }

    async fn recv_resp(&self, seq: u32) -> std::io::Result<RespCmd> {
        let mut buf = [0u8; MAX_MESSAGE];
        loop {
            let n = self.socket.recv(&mut buf).await?;
            let resp = match Response::parse_from_bytes(&buf[..n]) {
                Ok(resp) => resp,
                Err(_) => {
                    log::trace!("unparsable datagram from {}", self.server_addr);
                    continue;
                }
            };

            if resp.seq != seq {
                log::trace!("stale answer {} while waiting for {}", resp.seq, seq);
                continue;
            }
            if let Some(cmd) = resp.cmd {
                return Ok(cmd);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::SharedKey;
    use crate::proto::rendezvous::{Fail, Peer};

    const KEY: &str = "vukSxg+mwWXqhrydB5yhlmtOdY+zQ2V5fZDRX/a1kRQ";

    async fn reply(server: &UdpSocket, to: SocketAddr, seq: u32, cmd: RespCmd) {
        let mut resp = Response::new();
        resp.seq = seq;
        resp.cmd = Some(cmd);
        server
            .send_to(&resp.write_to_bytes().unwrap(), to)
            .await
            .unwrap();
    }

    fn peer(addr: &str) -> RespCmd {
        let mut p = Peer::new();
        p.addr = addr.to_string();
        p.age_ms = 1500;
        RespCmd::Peer(p)
    }

    async fn recv_req(server: &UdpSocket) -> (Request, SocketAddr) {
        let mut buf = [0u8; MAX_MESSAGE];
        let (n, from) = server.recv_from(&mut buf).await.unwrap();
        (Request::parse_from_bytes(&buf[..n]).unwrap(), from)
    }

    #[tokio::test]
    async fn test_stale_answers_and_fail_retry() {
        let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let server_addr = server.local_addr().unwrap();
        let key: SharedKey = format!("{}@{}/x", KEY, server_addr).parse().unwrap();

        let mut c = Client::connect(
            key.locator(),
            &key.tag(),
            Duration::from_millis(500),
            3,
            Backoff::new(Duration::from_millis(10), Duration::from_millis(50)),
        )
        .await
        .unwrap();
        let mapped: SocketAddr = "203.0.113.7:40001".parse().unwrap();

        let stub = async {
            let mut requests = 0;
            let (first, from) = recv_req(&server).await;
            requests += 1;
            assert_eq!(first.key, key.tag());
            assert_eq!(first.path, "x");
            assert!(matches!(first.cmd, Some(ReqCmd::Query(ref q)) if q.addr == mapped.to_string()));

            reply(&server, from, first.seq.wrapping_add(1000), peer("192.0.2.9:9")).await;
            let mut fail = Fail::new();
            fail.reason = "busy".into();
            reply(&server, from, first.seq, RespCmd::Fail(fail)).await;

            let (second, from) = recv_req(&server).await;
            requests += 1;
            assert_ne!(second.seq, first.seq);
            reply(&server, from, first.seq, peer("192.0.2.9:9")).await;
            reply(&server, from, second.seq, peer("192.0.2.1:1")).await;
            requests
        };

        let (poll, requests) = tokio::join!(c.fetch_peer(mapped), stub);
        match poll.unwrap() {
            PeerPoll::Found(p) => {
                assert_eq!(p.endpoint, "192.0.2.1:1".parse().unwrap());
                assert!(p.last_seen <= Instant::now());
            }
            r => panic!("unexpected {:?}", r),
        }
        assert_eq!(requests, 2);

        // nothing further was sent after the answer
        tokio::time::sleep(Duration::from_millis(100)).await;
        let mut buf = [0u8; MAX_MESSAGE];
        assert!(server.try_recv_from(&mut buf).is_err());
    }

    #[tokio::test]
    async fn test_fail_on_every_attempt_is_rejected() {
        let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let key: SharedKey = format!("{}@{}", KEY, server.local_addr().unwrap())
            .parse()
            .unwrap();
        let mut c = Client::connect(
            key.locator(),
            &key.tag(),
            Duration::from_millis(500),
            2,
            Backoff::new(Duration::from_millis(1), Duration::from_millis(5)),
        )
        .await
        .unwrap();

        let stub = async {
            for _ in 0..2 {
                let (req, from) = recv_req(&server).await;
                let mut fail = Fail::new();
                fail.reason = "key short".into();
                reply(&server, from, req.seq, RespCmd::Fail(fail)).await;
            }
        };

        let (r, _) = tokio::join!(c.register("203.0.113.7:1".parse().unwrap()), stub);
        match r {
            Err(RendezvousError::Rejected(reason)) => assert_eq!(reason, "key short"),
            r => panic!("unexpected {:?}", r),
        }
    }
}
