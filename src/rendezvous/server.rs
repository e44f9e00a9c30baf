use super::MAX_MESSAGE;
use crate::proto::rendezvous::{
    request::Cmd as ReqCmd, response::Cmd as RespCmd, Accepted, Fail, Peer, Request, Response,
    Retry,
};
use crate::key::MIN_TAG_LEN;
use crate::stun;
use protobuf::Message;
use std::collections::HashMap;
use std::io::Result;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::net::{ToSocketAddrs, UdpSocket};
use tokio::select;
use tokio::time::interval;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// entries not refreshed for this long are forgotten
    pub max_age: Duration,
    /// total entries over all keys, oldest evicted first
    pub max_entries: usize,
    pub min_key_len: usize,
    pub max_key_len: usize,
    pub gc_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_age: Duration::from_secs(20),
            max_entries: 1024,
            min_key_len: MIN_TAG_LEN,
            max_key_len: 512,
            gc_interval: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    addr: SocketAddr,
    last_seen: Instant,
}

// (path, key)
type Slot = (String, String);

/// Rendezvous server
///
/// keep traces of announced addresses per key, and tell each peer about the
/// other. Answers STUN binding requests on the same socket.
pub struct Server {
    socket: UdpSocket,
    config: ServerConfig,
    slots: HashMap<Slot, Vec<Entry>>,
}

impl Server {
    pub async fn new<A: ToSocketAddrs>(listen_addr: A, config: ServerConfig) -> Result<Self> {
        let socket = UdpSocket::bind(listen_addr).await?;

        Ok(Self {
            socket,
            config,
            slots: Default::default(),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.socket.local_addr()
    }

    pub async fn run(mut self) -> Result<()> {
        let mut buf = [0; MAX_MESSAGE];
        let mut gc = interval(self.config.gc_interval);

        log::info!("rendezvous server on {}", self.socket.local_addr()?);

        loop {
            select! {
                r = self.socket.recv_from(&mut buf) => match r {
                    Ok((size, addr)) => self.handle_datagram(&buf[..size], addr).await,
                    Err(e) => log::debug!("recv failed: {}", e),
                },
                _ = gc.tick() => self.gc(Instant::now()),
            }
        }
    }

    async fn handle_datagram(&mut self, data: &[u8], addr: SocketAddr) {
        if let Some(id) = stun::binding_request_id(data) {
            log::trace!("binding request from {}", addr);
            let resp = stun::encode_binding_response(&id, addr);
            let _ = self.socket.send_to(&resp, addr).await;
            return;
        }

        let req = match Request::parse_from_bytes(data) {
            Ok(req) => req,
            Err(_) => {
                log::debug!("unparsable request from {}", addr);
                return;
            }
        };

        let seq = req.seq;
        if let Some(cmd) = self.handle_request(req, Instant::now()) {
            let mut resp = Response::new();
            resp.seq = seq;
            resp.cmd = Some(cmd);

            match resp.write_to_bytes() {
                Ok(vec) => {
                    let _ = self.socket.send_to(vec.as_ref(), addr).await;
                }
                Err(e) => log::warn!("encode response: {}", e),
            }
        }
    }

    fn handle_request(&mut self, req: Request, now: Instant) -> Option<RespCmd> {
        if let Err(reason) = self.check_key(&req.key) {
            return Some(fail(reason));
        }
        let slot = (req.path, req.key);

        match req.cmd {
            Some(ReqCmd::Register(reg)) => Some(match reg.addr.parse() {
                Ok(addr) => self.handle_register(slot, addr, now),
                Err(_) => fail("address doesn't match addr:port"),
            }),
            Some(ReqCmd::Query(query)) => Some(match query.addr.parse() {
                Ok(addr) => self.handle_query(&slot, addr, now),
                Err(_) => fail("address doesn't match addr:port"),
            }),
            Some(ReqCmd::Bye(bye)) => {
                if let Ok(addr) = bye.addr.parse() {
                    self.handle_bye(&slot, addr);
                }
                None
            }
            None => Some(fail("no command")),
        }
    }

    fn check_key(&self, key: &str) -> std::result::Result<(), &'static str> {
        if key.len() < self.config.min_key_len {
            return Err("key short");
        }
        if key.len() > self.config.max_key_len {
            return Err("key long");
        }
        if !key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
        {
            return Err("illegal key");
        }
        Ok(())
    }

    fn handle_register(&mut self, slot: Slot, addr: SocketAddr, now: Instant) -> RespCmd {
        self.upsert(slot, addr, now);
        RespCmd::Accepted(Accepted::new())
    }

    // every request files its sender, so a peer that was evicted or lost
    // across a restart reappears on its next poll
    fn upsert(&mut self, slot: Slot, addr: SocketAddr, now: Instant) {
        let entries = self.slots.entry(slot).or_default();

        match entries.iter_mut().find(|e| e.addr == addr) {
            Some(e) => {
                log::trace!("refresh {}", addr);
                e.last_seen = e.last_seen.max(now);
            }
            None => {
                log::debug!("register {}", addr);
                entries.push(Entry {
                    addr,
                    last_seen: now,
                });
                self.evict();
            }
        }
    }

    fn handle_query(&mut self, slot: &Slot, addr: SocketAddr, now: Instant) -> RespCmd {
        self.upsert(slot.clone(), addr, now);

        let max_age = self.config.max_age;
        let peer = self.slots.get(slot).and_then(|entries| {
            entries
                .iter()
                .filter(|e| e.addr != addr && now.duration_since(e.last_seen) < max_age)
                .max_by_key(|e| e.last_seen)
        });

        match peer {
            Some(e) => {
                log::debug!("query {} -> {}", addr, e.addr);
                let mut peer = Peer::new();
                peer.addr = e.addr.to_string();
                peer.age_ms = now.duration_since(e.last_seen).as_millis() as u64;
                RespCmd::Peer(peer)
            }
            None => {
                log::trace!("query {}, no peer yet", addr);
                RespCmd::Retry(Retry::new())
            }
        }
    }

    fn handle_bye(&mut self, slot: &Slot, addr: SocketAddr) {
        log::debug!("bye {}", addr);
        if let Some(entries) = self.slots.get_mut(slot) {
            entries.retain(|e| e.addr != addr);
            if entries.is_empty() {
                self.slots.remove(slot);
            }
        }
    }

    fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    fn evict(&mut self) {
        while self.len() > self.config.max_entries {
            let oldest = self
                .slots
                .iter()
                .flat_map(|(slot, entries)| entries.iter().map(move |e| (slot, e)))
                .min_by_key(|(_, e)| e.last_seen)
                .map(|(slot, e)| (slot.clone(), e.addr));

            match oldest {
                Some((slot, addr)) => {
                    log::debug!("evict {}", addr);
                    self.handle_bye(&slot, addr);
                }
                None => break,
            }
        }
    }

    fn gc(&mut self, now: Instant) {
        let max_age = self.config.max_age;
        self.slots.retain(|_, entries| {
            entries.retain(|e| {
                let alive = now.duration_since(e.last_seen) < max_age;
                if !alive {
                    log::debug!("expired {}", e.addr);
                }
                alive
            });
            !entries.is_empty()
        });
    }
}

fn fail(reason: &str) -> RespCmd {
    let mut fail = Fail::new();
    fail.reason = reason.to_string();
    RespCmd::Fail(fail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::rendezvous::{Bye, Query, Register};

    const KEY: &str = "vukSxg+mwWXqhrydB5yhlmtOdY+zQ2V5fZDRX/a1kRQ";

    async fn server(config: ServerConfig) -> Server {
        Server::new("127.0.0.1:0", config).await.unwrap()
    }

    fn req(key: &str, cmd: ReqCmd) -> Request {
        let mut req = Request::new();
        req.key = key.to_string();
        req.cmd = Some(cmd);
        req
    }

    fn register(addr: &str) -> ReqCmd {
        let mut r = Register::new();
        r.addr = addr.to_string();
        ReqCmd::Register(r)
    }

    fn query(addr: &str) -> ReqCmd {
        let mut q = Query::new();
        q.addr = addr.to_string();
        ReqCmd::Query(q)
    }

    fn peer_addr(resp: Option<RespCmd>) -> Option<String> {
        match resp {
            Some(RespCmd::Peer(p)) => Some(p.addr),
            Some(RespCmd::Retry(_)) => None,
            r => panic!("unexpected {:?}", r),
        }
    }

    #[tokio::test]
    async fn test_register_is_idempotent() {
        let mut s = server(ServerConfig::default()).await;
        let now = Instant::now();

        for _ in 0..3 {
            let r = s.handle_request(req(KEY, register("10.0.0.1:1")), now);
            assert!(matches!(r, Some(RespCmd::Accepted(_))));
        }
        assert_eq!(s.len(), 1);
    }

    #[tokio::test]
    async fn test_query_returns_other_peer() {
        let mut s = server(ServerConfig::default()).await;
        let now = Instant::now();

        s.handle_request(req(KEY, register("10.0.0.1:1")), now);
        assert_eq!(peer_addr(s.handle_request(req(KEY, query("10.0.0.1:1")), now)), None);

        s.handle_request(req(KEY, register("10.0.0.2:2")), now);
        assert_eq!(
            peer_addr(s.handle_request(req(KEY, query("10.0.0.1:1")), now)),
            Some("10.0.0.2:2".to_string())
        );
        assert_eq!(
            peer_addr(s.handle_request(req(KEY, query("10.0.0.2:2")), now)),
            Some("10.0.0.1:1".to_string())
        );
    }

    #[tokio::test]
    async fn test_paths_and_keys_are_separate() {
        let mut s = server(ServerConfig::default()).await;
        let now = Instant::now();
        let other_key = "AAAAAAAAAAAAAAAA+AAAA+AAAA";

        s.handle_request(req(KEY, register("10.0.0.1:1")), now);
        s.handle_request(req(other_key, register("10.0.0.2:2")), now);
        let mut on_path = req(KEY, register("10.0.0.3:3"));
        on_path.path = "elsewhere".to_string();
        s.handle_request(on_path, now);

        assert_eq!(peer_addr(s.handle_request(req(KEY, query("10.0.0.1:1")), now)), None);
    }

    #[tokio::test]
    async fn test_newest_peer_wins() {
        let mut s = server(ServerConfig::default()).await;
        let t0 = Instant::now();

        s.handle_request(req(KEY, register("10.0.0.2:2")), t0);
        s.handle_request(req(KEY, register("10.0.0.3:3")), t0 + Duration::from_secs(1));
        assert_eq!(
            peer_addr(s.handle_request(req(KEY, query("10.0.0.1:1")), t0 + Duration::from_secs(2))),
            Some("10.0.0.3:3".to_string())
        );
    }

    #[tokio::test]
    async fn test_rejects() {
        let mut s = server(ServerConfig::default()).await;
        let now = Instant::now();

        let cases = [
            (req("short", register("10.0.0.1:1")), "key short"),
            (req(&"A".repeat(513), register("10.0.0.1:1")), "key long"),
            (req("AAAAAAAAAAAAAAAA-AAA", register("10.0.0.1:1")), "illegal key"),
            (req(KEY, register("nowhere")), "address doesn't match addr:port"),
            (req(KEY, query("")), "address doesn't match addr:port"),
        ];
        for (r, reason) in cases {
            match s.handle_request(r, now) {
                Some(RespCmd::Fail(f)) => assert_eq!(f.reason, reason),
                r => panic!("unexpected {:?}", r),
            }
        }

        let mut empty = Request::new();
        empty.key = KEY.to_string();
        assert!(matches!(s.handle_request(empty, now), Some(RespCmd::Fail(_))));
        assert_eq!(s.len(), 0);
    }

    #[tokio::test]
    async fn test_bye() {
        let mut s = server(ServerConfig::default()).await;
        let now = Instant::now();

        s.handle_request(req(KEY, register("10.0.0.1:1")), now);
        s.handle_request(req(KEY, register("10.0.0.2:2")), now);

        let mut bye = Bye::new();
        bye.addr = "10.0.0.2:2".to_string();
        assert!(s.handle_request(req(KEY, ReqCmd::Bye(bye)), now).is_none());

        assert_eq!(s.len(), 1);
        assert_eq!(peer_addr(s.handle_request(req(KEY, query("10.0.0.1:1")), now)), None);
    }

    #[tokio::test]
    async fn test_expiry() {
        let mut s = server(ServerConfig::default()).await;
        let t0 = Instant::now();
        let later = t0 + Duration::from_secs(21);

        s.handle_request(req(KEY, register("10.0.0.1:1")), t0);
        s.handle_request(req(KEY, register("10.0.0.2:2")), t0);

        // stale entries are invisible before gc runs
        assert_eq!(peer_addr(s.handle_request(req(KEY, query("10.0.0.1:1")), later)), None);

        s.handle_request(req(KEY, register("10.0.0.1:1")), later);
        s.gc(later);
        assert_eq!(s.len(), 1);
    }

    #[tokio::test]
    async fn test_query_refreshes_requester() {
        let mut s = server(ServerConfig::default()).await;
        let t0 = Instant::now();

        s.handle_request(req(KEY, register("10.0.0.1:1")), t0);
        s.handle_request(req(KEY, query("10.0.0.1:1")), t0 + Duration::from_secs(15));

        // a late peer still finds the one that kept polling
        let t1 = t0 + Duration::from_secs(30);
        s.handle_request(req(KEY, register("10.0.0.2:2")), t1);
        assert_eq!(
            peer_addr(s.handle_request(req(KEY, query("10.0.0.2:2")), t1)),
            Some("10.0.0.1:1".to_string())
        );
    }

    #[tokio::test]
    async fn test_query_files_unknown_requester() {
        let mut s = server(ServerConfig::default()).await;
        let now = Instant::now();

        // neither side registered, e.g. after a server restart
        assert_eq!(peer_addr(s.handle_request(req(KEY, query("10.0.0.1:1")), now)), None);
        assert_eq!(s.len(), 1);
        assert_eq!(
            peer_addr(s.handle_request(req(KEY, query("10.0.0.2:2")), now)),
            Some("10.0.0.1:1".to_string())
        );
        assert_eq!(
            peer_addr(s.handle_request(req(KEY, query("10.0.0.1:1")), now)),
            Some("10.0.0.2:2".to_string())
        );
    }

    #[tokio::test]
    async fn test_eviction() {
        let mut s = server(ServerConfig {
            max_entries: 2,
            ..Default::default()
        })
        .await;
        let t0 = Instant::now();

        for (i, addr) in ["10.0.0.1:1", "10.0.0.2:2", "10.0.0.3:3"].iter().enumerate() {
            s.handle_request(req(KEY, register(addr)), t0 + Duration::from_millis(i as u64));
        }
        assert_eq!(s.len(), 2);
        assert_eq!(
            peer_addr(s.handle_request(req(KEY, query("10.0.0.2:2")), t0)),
            Some("10.0.0.3:3".to_string())
        );
    }

    #[tokio::test]
    async fn test_stun_responder() {
        let s = server(ServerConfig::default()).await;
        let addr = s.local_addr().unwrap();
        tokio::spawn(s.run());

        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let backoff = crate::backoff::Backoff::new(Duration::ZERO, Duration::ZERO);
        let mapped = stun::discover(
            &client,
            &addr.to_string(),
            Duration::from_secs(1),
            3,
            backoff,
        )
        .await
        .unwrap();
        assert_eq!(mapped.endpoint, client.local_addr().unwrap());
    }
}
