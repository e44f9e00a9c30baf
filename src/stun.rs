//! STUN binding discovery (RFC 5389).
//!
//! Only what a hole puncher needs: send a Binding Request from the socket
//! that will later talk to the peer, and read back the address the NAT
//! mapped it to. The encoder for responses lives here too, so the rendezvous
//! server can double as a STUN responder.

use crate::backoff::Backoff;
use crate::error::StunError;
use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::{Duration, Instant};
use tokio::net::{lookup_host, UdpSocket};
use tokio::time::{sleep, timeout_at};

pub const DEFAULT_STUN_PORT: u16 = 3478;

const BINDING_REQUEST: u16 = 0x0001;
const BINDING_RESPONSE: u16 = 0x0101;
const BINDING_ERROR: u16 = 0x0111;

const ATTR_MAPPED_ADDRESS: u16 = 0x0001;
const ATTR_XOR_MAPPED_ADDRESS: u16 = 0x0020;

const MAGIC_COOKIE: u32 = 0x2112_A442;
const HEADER_LEN: usize = 20;

const FAMILY_V4: u8 = 0x01;
const FAMILY_V6: u8 = 0x02;

/// 96 random bits following the magic cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionId([u8; 12]);

impl TransactionId {
    pub fn random() -> Self {
        Self(rand::random())
    }

    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    // cookie and id together, the XOR key for mapped addresses
    fn xor_key(&self) -> [u8; 16] {
        let mut key = [0u8; 16];
        key[..4].copy_from_slice(&MAGIC_COOKIE.to_be_bytes());
        key[4..].copy_from_slice(&self.0);
        key
    }
}

/// This host's address as seen from outside its NAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedAddress {
    pub endpoint: SocketAddr,
    pub discovered_at: Instant,
}

/// why a datagram did not complete a pending request
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Discard {
    Short,
    BadCookie,
    OtherTransaction,
    ErrorResponse,
    NotResponse(u16),
    Truncated,
    NoAddress,
}

pub fn encode_binding_request(id: &TransactionId) -> [u8; HEADER_LEN] {
    let mut msg = [0u8; HEADER_LEN];
    msg[0..2].copy_from_slice(&BINDING_REQUEST.to_be_bytes());
    // length stays zero, there are no attributes
    msg[4..8].copy_from_slice(&MAGIC_COOKIE.to_be_bytes());
    msg[8..].copy_from_slice(&id.0);
    msg
}

/// Transaction id of a Binding Request, `None` for anything else.
pub fn binding_request_id(buf: &[u8]) -> Option<TransactionId> {
    if buf.len() < HEADER_LEN
        || buf[0..2] != BINDING_REQUEST.to_be_bytes()
        || buf[4..8] != MAGIC_COOKIE.to_be_bytes()
    {
        return None;
    }

    let mut id = [0u8; 12];
    id.copy_from_slice(&buf[8..HEADER_LEN]);
    Some(TransactionId(id))
}

/// Binding success response carrying `addr` as both MAPPED-ADDRESS and
/// XOR-MAPPED-ADDRESS.
pub fn encode_binding_response(id: &TransactionId, addr: SocketAddr) -> Vec<u8> {
    let mut attrs = Vec::with_capacity(48);
    put_address(&mut attrs, ATTR_MAPPED_ADDRESS, addr, None);
    put_address(&mut attrs, ATTR_XOR_MAPPED_ADDRESS, addr, Some(id));

    let mut msg = Vec::with_capacity(HEADER_LEN + attrs.len());
    msg.extend_from_slice(&BINDING_RESPONSE.to_be_bytes());
    msg.extend_from_slice(&(attrs.len() as u16).to_be_bytes());
    msg.extend_from_slice(&MAGIC_COOKIE.to_be_bytes());
    msg.extend_from_slice(&id.0);
    msg.extend_from_slice(&attrs);
    msg
}

fn put_address(buf: &mut Vec<u8>, attr: u16, addr: SocketAddr, xor: Option<&TransactionId>) {
    let (family, mut ip) = match addr.ip() {
        IpAddr::V4(ip) => (FAMILY_V4, ip.octets().to_vec()),
        IpAddr::V6(ip) => (FAMILY_V6, ip.octets().to_vec()),
    };
    let mut port = addr.port();

    if let Some(id) = xor {
        port ^= (MAGIC_COOKIE >> 16) as u16;
        for (b, k) in ip.iter_mut().zip(id.xor_key()) {
            *b ^= k;
        }
    }

    buf.extend_from_slice(&attr.to_be_bytes());
    buf.extend_from_slice(&((4 + ip.len()) as u16).to_be_bytes());
    buf.push(0);
    buf.push(family);
    buf.extend_from_slice(&port.to_be_bytes());
    buf.extend_from_slice(&ip);
}

pub(crate) fn decode_binding_response(
    buf: &[u8],
    id: &TransactionId,
) -> Result<SocketAddr, Discard> {
    if buf.len() < HEADER_LEN {
        return Err(Discard::Short);
    }
    if buf[4..8] != MAGIC_COOKIE.to_be_bytes() {
        return Err(Discard::BadCookie);
    }
    if buf[8..HEADER_LEN] != id.0 {
        return Err(Discard::OtherTransaction);
    }

    match u16::from_be_bytes([buf[0], buf[1]]) {
        BINDING_RESPONSE => {}
        BINDING_ERROR => return Err(Discard::ErrorResponse),
        t => return Err(Discard::NotResponse(t)),
    }

    let len = u16::from_be_bytes([buf[2], buf[3]]) as usize;
    let body = buf
        .get(HEADER_LEN..HEADER_LEN + len)
        .ok_or(Discard::Truncated)?;

    let mut mapped = None;
    let mut pos = 0;
    while pos + 4 <= body.len() {
        let attr = u16::from_be_bytes([body[pos], body[pos + 1]]);
        let attr_len = u16::from_be_bytes([body[pos + 2], body[pos + 3]]) as usize;
        let value = body
            .get(pos + 4..pos + 4 + attr_len)
            .ok_or(Discard::Truncated)?;

        match attr {
            ATTR_XOR_MAPPED_ADDRESS => {
                if let Some(addr) = parse_address(value, Some(id)) {
                    return Ok(addr);
                }
            }
            ATTR_MAPPED_ADDRESS => mapped = mapped.or_else(|| parse_address(value, None)),
            _ => {}
        }

        // attributes are padded to 4 bytes
        pos += 4 + ((attr_len + 3) & !3);
    }

    mapped.ok_or(Discard::NoAddress)
}

fn parse_address(value: &[u8], xor: Option<&TransactionId>) -> Option<SocketAddr> {
    if value.len() < 4 {
        return None;
    }

    let family = value[1];
    let mut port = u16::from_be_bytes([value[2], value[3]]);
    let mut ip = match family {
        FAMILY_V4 => value.get(4..8)?.to_vec(),
        FAMILY_V6 => value.get(4..20)?.to_vec(),
        _ => return None,
    };

    if let Some(id) = xor {
        port ^= (MAGIC_COOKIE >> 16) as u16;
        for (b, k) in ip.iter_mut().zip(id.xor_key()) {
            *b ^= k;
        }
    }

    let ip: IpAddr = match family {
        FAMILY_V4 => Ipv4Addr::from(<[u8; 4]>::try_from(ip.as_slice()).ok()?).into(),
        _ => Ipv6Addr::from(<[u8; 16]>::try_from(ip.as_slice()).ok()?).into(),
    };
    Some(SocketAddr::new(ip, port))
}

/// Ask `server` which address `socket` is mapped to.
///
/// Each attempt waits up to `timeout` for a response carrying its own
/// transaction id; anything else is dropped without extending the wait.
/// Between attempts we sleep according to `backoff`.
pub async fn discover(
    socket: &UdpSocket,
    server: &str,
    timeout: Duration,
    attempts: u32,
    mut backoff: Backoff,
) -> Result<MappedAddress, StunError> {
    let server_addr = resolve(socket, server).await?;

    for attempt in 1..=attempts {
        let id = TransactionId::random();
        log::trace!("binding request {}/{} to {}", attempt, attempts, server_addr);

        let deadline = tokio::time::Instant::now() + timeout;
        let exchange = match socket.send_to(&encode_binding_request(&id), server_addr).await {
            Ok(_) => timeout_at(deadline, recv_response(socket, server_addr, &id)).await,
            Err(e) => Ok(Err(e)),
        };
        match exchange {
            Ok(Ok(endpoint)) => {
                log::debug!("mapped address {} via {}", endpoint, server_addr);
                return Ok(MappedAddress {
                    endpoint,
                    discovered_at: Instant::now(),
                });
            }
            Ok(Err(e)) => log::debug!(
                "STUN exchange with {} failed, attempt {}/{}: {}",
                server_addr,
                attempt,
                attempts,
                e
            ),
            Err(_) => log::debug!(
                "STUN server {} silent, attempt {}/{}",
                server_addr,
                attempt,
                attempts
            ),
        }

        if attempt < attempts {
            sleep(backoff.next_delay()).await;
        }
    }

    Err(StunError::Unreachable {
        server: server.to_string(),
        attempts,
    })
}

async fn resolve(socket: &UdpSocket, server: &str) -> Result<SocketAddr, StunError> {
    let v4 = socket.local_addr()?.is_ipv4();
    lookup_host(server)
        .await
        .map_err(|e| StunError::Resolve(format!("{}: {}", server, e)))?
        .find(|a| a.is_ipv4() == v4)
        .ok_or_else(|| StunError::Resolve(server.to_string()))
}

async fn recv_response(
    socket: &UdpSocket,
    server: SocketAddr,
    id: &TransactionId,
) -> std::io::Result<SocketAddr> {
    let mut buf = [0u8; 1500];
    loop {
        let (n, from) = match socket.recv_from(&mut buf).await {
            Ok(r) => r,
            // windows reports ICMP unreachable from earlier requests here
            Err(e) if e.kind() == ErrorKind::ConnectionReset => continue,
            Err(e) => return Err(e),
        };
        if from != server {
            log::trace!("ignoring {} bytes from {} while waiting on STUN", n, from);
            continue;
        }
        match decode_binding_response(&buf[..n], id) {
            Ok(addr) => return Ok(addr),
            Err(why) => log::trace!("discarding STUN datagram: {:?}", why),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_request_header() {
        let id = TransactionId::random();
        let req = encode_binding_request(&id);
        assert_eq!(req.len(), 20);
        assert_eq!(&req[0..2], &[0x00, 0x01]);
        assert_eq!(&req[2..4], &[0x00, 0x00]);
        assert_eq!(&req[4..8], &[0x21, 0x12, 0xA4, 0x42]);
        assert_eq!(&req[8..], id.as_bytes());
        assert_eq!(binding_request_id(&req), Some(id));
    }

    #[test]
    fn test_transaction_ids_unique() {
        let ids: HashSet<_> = (0..10_000).map(|_| TransactionId::random()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_response_v4() {
        let id = TransactionId::random();
        let addr: SocketAddr = "203.0.113.7:40001".parse().unwrap();
        let resp = encode_binding_response(&id, addr);
        assert_eq!(decode_binding_response(&resp, &id), Ok(addr));
        assert_eq!(binding_request_id(&resp), None);
    }

    #[test]
    fn test_response_v6() {
        let id = TransactionId::random();
        let addr: SocketAddr = "[2001:db8::1]:3478".parse().unwrap();
        let resp = encode_binding_response(&id, addr);
        assert_eq!(decode_binding_response(&resp, &id), Ok(addr));
    }

    #[test]
    fn test_legacy_mapped_address() {
        let id = TransactionId::random();
        let addr: SocketAddr = "198.51.100.2:1000".parse().unwrap();
        let mut attrs = Vec::new();
        put_address(&mut attrs, ATTR_MAPPED_ADDRESS, addr, None);

        let mut resp = Vec::new();
        resp.extend_from_slice(&BINDING_RESPONSE.to_be_bytes());
        resp.extend_from_slice(&(attrs.len() as u16).to_be_bytes());
        resp.extend_from_slice(&MAGIC_COOKIE.to_be_bytes());
        resp.extend_from_slice(id.as_bytes());
        resp.extend_from_slice(&attrs);

        assert_eq!(decode_binding_response(&resp, &id), Ok(addr));
    }

    #[test]
    fn test_reject_other_transaction() {
        let addr: SocketAddr = "203.0.113.7:40001".parse().unwrap();
        let resp = encode_binding_response(&TransactionId::random(), addr);
        assert_eq!(
            decode_binding_response(&resp, &TransactionId::random()),
            Err(Discard::OtherTransaction)
        );
        assert_eq!(
            decode_binding_response(&resp[..10], &TransactionId::random()),
            Err(Discard::Short)
        );
    }

    #[tokio::test]
    async fn test_discover_skips_mismatched() {
        let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let server_addr = server.local_addr().unwrap();
        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let stranger = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let client_addr = client.local_addr().unwrap();

        let wrong: SocketAddr = "192.0.2.1:1".parse().unwrap();
        let right: SocketAddr = "192.0.2.2:2".parse().unwrap();

        let stub = async {
            let mut buf = [0u8; 1500];
            let (n, from) = server.recv_from(&mut buf).await.unwrap();
            let id = binding_request_id(&buf[..n]).unwrap();

            // right id from the wrong source, then wrong id, then the answer
            let forged = encode_binding_response(&id, wrong);
            stranger.send_to(&forged, from).await.unwrap();
            let other = encode_binding_response(&TransactionId::random(), wrong);
            server.send_to(&other, from).await.unwrap();
            let resp = encode_binding_response(&id, right);
            server.send_to(&resp, from).await.unwrap();
        };

        let backoff = Backoff::new(Duration::ZERO, Duration::ZERO);
        let server_name = server_addr.to_string();
        let (mapped, _) = tokio::join!(
            discover(
                &client,
                &server_name,
                Duration::from_secs(2),
                1,
                backoff
            ),
            stub
        );

        assert_eq!(mapped.unwrap().endpoint, right);
        assert_ne!(client_addr, right);
    }

    #[tokio::test]
    async fn test_receive_errors_use_up_attempts() {
        let dead = std::net::UdpSocket::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        // connected, so port unreachable comes back as a socket error
        client.connect(dead).await.unwrap();

        let r = discover(
            &client,
            &dead.to_string(),
            Duration::from_millis(200),
            3,
            Backoff::new(Duration::from_millis(1), Duration::from_millis(5)),
        )
        .await;

        match r {
            Err(StunError::Unreachable { attempts, .. }) => assert_eq!(attempts, 3),
            r => panic!("unexpected {:?}", r),
        }
    }

    #[tokio::test]
    async fn test_discover_unreachable() {
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

        let r = discover(
            &client,
            &silent.local_addr().unwrap().to_string(),
            Duration::from_millis(50),
            3,
            Backoff::new(Duration::from_millis(1), Duration::from_millis(5)),
        )
        .await;

        match r {
            Err(StunError::Unreachable { attempts, .. }) => assert_eq!(attempts, 3),
            r => panic!("unexpected {:?}", r),
        }

        // every attempt carried a fresh id
        let mut ids = HashSet::new();
        let mut buf = [0u8; 64];
        for _ in 0..3 {
            let n = silent.recv(&mut buf).await.unwrap();
            ids.insert(binding_request_id(&buf[..n]).unwrap());
        }
        assert_eq!(ids.len(), 3);
    }
}
