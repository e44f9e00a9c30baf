//! Shared key codec.
//!
//! A shared key names both the secret two peers agree on and the rendezvous
//! server they meet at:
//!
//! ```text
//! base64key+base64key+base64key@some-server[:port][/path]
//! ```

use crate::error::ParseError;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use std::fmt;
use std::str::FromStr;

/// rendezvous port used when the key does not name one
pub const DEFAULT_RENDEZVOUS_PORT: u16 = 8888;

/// shortest tag a rendezvous server files peers under
pub const MIN_TAG_LEN: usize = 16;

// keys are written without padding, but padded input is accepted too
const KEY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Where the rendezvous server lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendezvousLocator {
    host: String,
    port: Option<u16>,
    path: Option<String>,
}

impl RendezvousLocator {
    pub fn host(&self) -> &str {
        &self.host
    }

    /// explicit port, or [`DEFAULT_RENDEZVOUS_PORT`]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_RENDEZVOUS_PORT)
    }

    /// path without the leading '/', empty when absent
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }

    /// `host:port` suitable for name resolution
    pub fn server_addr(&self) -> String {
        join_host_port(&self.host, self.port())
    }
}

impl FromStr for RendezvousLocator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let (authority, path) = match s.find('/') {
            Some(i) => (&s[..i], Some(&s[i + 1..]).filter(|p| !p.is_empty())),
            None => (s, None),
        };

        let (host, port) = split_host_port(authority)?;
        let port = port
            .map(|p| match p.parse::<u16>() {
                Ok(port) if port != 0 => Ok(port),
                _ => Err(ParseError::InvalidPort(p.to_string())),
            })
            .transpose()?;

        Ok(Self {
            host: host.to_string(),
            port,
            path: path.map(str::to_string),
        })
    }
}

impl fmt::Display for RendezvousLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}", join_host_port(&self.host, port))?,
            None if self.host.contains(':') => write!(f, "[{}]", self.host)?,
            None => write!(f, "{}", self.host)?,
        }
        if let Some(path) = &self.path {
            write!(f, "/{}", path)?;
        }
        Ok(())
    }
}

/// Three key components plus the rendezvous point.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedKey {
    keys: [Vec<u8>; 3],
    locator: RendezvousLocator,
}

impl SharedKey {
    pub fn keys(&self) -> &[Vec<u8>; 3] {
        &self.keys
    }

    pub fn locator(&self) -> &RendezvousLocator {
        &self.locator
    }

    /// Canonical text of the three key components.
    ///
    /// Peers are filed under this string on the rendezvous server, so two
    /// spellings of the same key (padded or not) meet each other.
    pub fn tag(&self) -> String {
        self.keys
            .iter()
            .map(|k| KEY_ENGINE.encode(k))
            .collect::<Vec<_>>()
            .join("+")
    }

    /// The tag is too short for a rendezvous server to accept.
    pub fn is_short(&self) -> bool {
        self.tag().len() < MIN_TAG_LEN
    }
}

impl FromStr for SharedKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut halves = s.split('@');
        let keys = halves.next().unwrap_or_default();
        let locator = halves.next().ok_or(ParseError::MissingAt)?;
        if halves.next().is_some() {
            return Err(ParseError::MultipleAt);
        }

        let fields: Vec<&str> = keys.split('+').collect();
        if fields.len() != 3 {
            return Err(ParseError::FieldCount(fields.len()));
        }

        let mut decoded: [Vec<u8>; 3] = Default::default();
        for (index, (field, out)) in fields.iter().zip(decoded.iter_mut()).enumerate() {
            if field.is_empty() {
                return Err(ParseError::EmptyField(index));
            }
            *out = KEY_ENGINE
                .decode(field)
                .map_err(|e| ParseError::InvalidBase64 {
                    index,
                    reason: e.to_string(),
                })?;
        }

        Ok(Self {
            keys: decoded,
            locator: locator.parse()?,
        })
    }
}

impl fmt::Display for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.tag(), self.locator)
    }
}

// the key material stays out of logs
impl fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedKey")
            .field("keys", &"<redacted>")
            .field("locator", &self.locator)
            .finish()
    }
}

/// Split `host[:port]`, accepting `[v6addr]:port`.
pub(crate) fn split_host_port(s: &str) -> Result<(&str, Option<&str>), ParseError> {
    let (host, port) = if let Some(rest) = s.strip_prefix('[') {
        let end = rest.find(']').ok_or(ParseError::EmptyHost)?;
        let after = &rest[end + 1..];
        let port = match after {
            "" => None,
            _ => Some(
                after
                    .strip_prefix(':')
                    .ok_or_else(|| ParseError::InvalidPort(after.to_string()))?,
            ),
        };
        (&rest[..end], port)
    } else {
        match s.rsplit_once(':') {
            Some((host, _)) if host.contains(':') => {
                return Err(ParseError::InvalidHost(s.to_string()))
            }
            Some((host, port)) => (host, Some(port)),
            None => (s, None),
        }
    };

    if host.is_empty() {
        return Err(ParseError::EmptyHost);
    }
    Ok((host, port))
}

pub(crate) fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const K: &str = "vukSxg+mwWXqhrydB5yhlmtOdY+zQ2V5fZDRX/a1kRQ";

    #[test]
    fn test_parse_full() {
        let key: SharedKey = format!("{}@rendezvous.example.org:1234/stun", K).parse().unwrap();
        assert_eq!(key.locator().host(), "rendezvous.example.org");
        assert_eq!(key.locator().port(), 1234);
        assert_eq!(key.locator().path(), "stun");
        assert_eq!(key.locator().server_addr(), "rendezvous.example.org:1234");
        assert!(key.keys().iter().all(|k| !k.is_empty()));
    }

    #[test]
    fn test_parse_defaults() {
        let key: SharedKey = format!("{}@rendezvous.example.org", K).parse().unwrap();
        assert_eq!(key.locator().port(), DEFAULT_RENDEZVOUS_PORT);
        assert_eq!(key.locator().path(), "");
        assert_eq!(key.to_string(), format!("{}@rendezvous.example.org", K));
    }

    #[test]
    fn test_reserialize() {
        for text in [
            format!("{}@host:9/a/b", K),
            format!("{}@host/x", K),
            format!("{}@[::1]:8000", K),
            "AAAA+AQ==+AQI=@10.0.0.1:53".to_string(),
        ] {
            let key: SharedKey = text.parse().unwrap();
            let again: SharedKey = key.to_string().parse().unwrap();
            assert_eq!(key, again, "{}", text);
            assert_eq!(key.tag(), again.tag());
        }
    }

    #[test]
    fn test_padding_is_optional() {
        let a: SharedKey = "AQ==+AQI=+AQID@h".parse().unwrap();
        let b: SharedKey = "AQ+AQI+AQID@h".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.tag(), "AQ+AQI+AQID");
    }

    #[test]
    fn test_ipv6_host() {
        let key: SharedKey = format!("{}@[::1]:8000", K).parse().unwrap();
        assert_eq!(key.locator().host(), "::1");
        assert_eq!(key.locator().server_addr(), "[::1]:8000");
    }

    #[test]
    fn test_reject_structure() {
        assert_eq!(K.parse::<SharedKey>(), Err(ParseError::MissingAt));
        assert_eq!(
            format!("{}@a@b", K).parse::<SharedKey>(),
            Err(ParseError::MultipleAt)
        );
        assert_eq!(
            "AAAA+AAAA@host".parse::<SharedKey>(),
            Err(ParseError::FieldCount(2))
        );
        assert_eq!(
            "AAAA+AAAA+AAAA+AAAA@host".parse::<SharedKey>(),
            Err(ParseError::FieldCount(4))
        );
        assert_eq!(
            "AAAA++AAAA@host".parse::<SharedKey>(),
            Err(ParseError::EmptyField(1))
        );
        assert_eq!(
            format!("{}@", K).parse::<SharedKey>(),
            Err(ParseError::EmptyHost)
        );
        assert_eq!(
            format!("{}@:80", K).parse::<SharedKey>(),
            Err(ParseError::EmptyHost)
        );
        assert_eq!(
            format!("{}@host:http", K).parse::<SharedKey>(),
            Err(ParseError::InvalidPort("http".into()))
        );
        assert_eq!(
            format!("{}@::1", K).parse::<SharedKey>(),
            Err(ParseError::InvalidHost("::1".into()))
        );
        assert_eq!(
            format!("{}@a:b:80/p", K).parse::<SharedKey>(),
            Err(ParseError::InvalidHost("a:b:80".into()))
        );
    }

    #[test]
    fn test_short_tag() {
        assert!("AAAA+AAAA+AAAA@h".parse::<SharedKey>().unwrap().is_short());
        assert!(!format!("{}@h", K).parse::<SharedKey>().unwrap().is_short());
    }

    #[test]
    fn test_reject_base64() {
        match "AAAA+A!AA+AAAA@host".parse::<SharedKey>() {
            Err(ParseError::InvalidBase64 { index, .. }) => assert_eq!(index, 1),
            r => panic!("unexpected {:?}", r),
        }
    }

    #[test]
    fn test_debug_hides_keys() {
        let key: SharedKey = format!("{}@host", K).parse().unwrap();
        let dbg = format!("{:?}", key);
        assert!(!dbg.contains("vukSxg"));
        assert!(dbg.contains("host"));
    }
}
