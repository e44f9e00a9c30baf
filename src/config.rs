use crate::error::ConfigError;
use crate::key::{join_host_port, split_host_port, SharedKey, MIN_TAG_LEN};
use crate::stun::DEFAULT_STUN_PORT;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

/// Timeouts, retry counts and intervals for one peer.
#[derive(Debug, Clone)]
pub struct Timing {
    pub stun_timeout: Duration,
    pub stun_attempts: u32,
    pub rendezvous_timeout: Duration,
    pub rendezvous_attempts: u32,
    /// pause between peer lookups while waiting for the counterpart
    pub poll_interval: Duration,
    /// lookups before starting over from discovery
    pub max_polls: u32,
    pub punch_interval: Duration,
    pub punch_timeout: Duration,
    pub keepalive_interval: Duration,
    /// relay gives up when the peer is silent this long
    pub idle_timeout: Duration,
    pub retry_base: Duration,
    pub retry_cap: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            stun_timeout: Duration::from_secs(3),
            stun_attempts: 4,
            rendezvous_timeout: Duration::from_secs(3),
            rendezvous_attempts: 4,
            poll_interval: Duration::from_secs(2),
            max_polls: 30,
            punch_interval: Duration::from_millis(100),
            punch_timeout: Duration::from_secs(10),
            keepalive_interval: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(30),
            retry_base: Duration::from_millis(500),
            retry_cap: Duration::from_secs(30),
        }
    }
}

impl Timing {
    /// Set the idle timeout, shortening the keepalive interval so at least
    /// three keepalives fit into it.
    pub fn set_idle_timeout(&mut self, idle: Duration) {
        self.idle_timeout = idle;
        self.keepalive_interval = self.keepalive_interval.min(idle / 3);
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        let nonzero = [
            ("stun timeout", self.stun_timeout),
            ("rendezvous timeout", self.rendezvous_timeout),
            ("poll interval", self.poll_interval),
            ("punch interval", self.punch_interval),
            ("punch timeout", self.punch_timeout),
            ("keepalive interval", self.keepalive_interval),
            ("idle timeout", self.idle_timeout),
        ];
        if let Some((name, _)) = nonzero.iter().find(|(_, d)| d.is_zero()) {
            return Err(ConfigError::Timing(format!("{} must be positive", name)));
        }
        if self.stun_attempts == 0 || self.rendezvous_attempts == 0 {
            return Err(ConfigError::Timing("attempt counts must be positive".into()));
        }
        if self.keepalive_interval >= self.idle_timeout {
            return Err(ConfigError::Timing(
                "keepalive interval must be shorter than idle timeout".into(),
            ));
        }
        Ok(())
    }
}

/// Everything a peer needs; the only state kept across sessions.
#[derive(Debug, Clone)]
pub struct Config {
    pub key: SharedKey,
    pub local_receive: SocketAddr,
    pub local_forward: SocketAddr,
    /// `host:port`, default port filled in
    pub stun_server: String,
    /// local address of the punch socket
    pub bind_addr: SocketAddr,
    pub timing: Timing,
}

impl Config {
    pub fn new(
        key: &str,
        local_receive: &str,
        local_forward: &str,
        stun_server: &str,
    ) -> Result<Self, ConfigError> {
        let key: SharedKey = key.parse()?;
        if key.is_short() {
            log::warn!(
                "shared key is shorter than {} characters, rendezvous servers will refuse it",
                MIN_TAG_LEN
            );
        }

        Ok(Self {
            key,
            local_receive: endpoint("receive", local_receive)?,
            local_forward: endpoint("forward", local_forward)?,
            stun_server: stun_locator(stun_server)?,
            bind_addr: ([0, 0, 0, 0], 0).into(),
            timing: Timing::default(),
        })
    }
}

fn endpoint(role: &'static str, value: &str) -> Result<SocketAddr, ConfigError> {
    let err = || ConfigError::Endpoint {
        role,
        value: value.to_string(),
    };

    if let Ok(addr) = value.parse() {
        return Ok(addr);
    }
    value
        .to_socket_addrs()
        .map_err(|_| err())?
        .next()
        .ok_or_else(err)
}

fn stun_locator(value: &str) -> Result<String, ConfigError> {
    let err = || ConfigError::StunServer(value.to_string());

    let (host, port) = split_host_port(value).map_err(|_| err())?;
    let port = match port {
        Some(p) => p.parse::<u16>().ok().filter(|p| *p != 0).ok_or_else(err)?,
        None => DEFAULT_STUN_PORT,
    };
    Ok(join_host_port(host, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "vukSxg+mwWXqhrydB5yhlmtOdY+zQ2V5fZDRX/a1kRQ@rendezvous.example.org";

    #[test]
    fn test_new() {
        let c = Config::new(KEY, "127.0.0.1:5000", "127.0.0.1:6000", "stun.example.org").unwrap();
        assert_eq!(c.local_receive, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(c.local_forward, "127.0.0.1:6000".parse().unwrap());
        assert_eq!(c.stun_server, "stun.example.org:3478");
        assert!(c.timing.check().is_ok());
    }

    #[test]
    fn test_stun_locator() {
        assert_eq!(stun_locator("stun.example.org:19302").unwrap(), "stun.example.org:19302");
        assert_eq!(stun_locator("[2001:db8::1]").unwrap(), "[2001:db8::1]:3478");
        assert!(matches!(stun_locator(""), Err(ConfigError::StunServer(_))));
        assert!(matches!(stun_locator("host:0"), Err(ConfigError::StunServer(_))));
        assert!(matches!(stun_locator("host:x"), Err(ConfigError::StunServer(_))));
    }

    #[test]
    fn test_rejects() {
        assert!(matches!(
            Config::new("nokey", "127.0.0.1:5000", "127.0.0.1:6000", "stun"),
            Err(ConfigError::Key(_))
        ));
        match Config::new(KEY, "127.0.0.1", "127.0.0.1:6000", "stun") {
            Err(ConfigError::Endpoint { role, .. }) => assert_eq!(role, "receive"),
            r => panic!("unexpected {:?}", r),
        }
        match Config::new(KEY, "127.0.0.1:5000", "127.0.0.1:99999", "stun") {
            Err(ConfigError::Endpoint { role, .. }) => assert_eq!(role, "forward"),
            r => panic!("unexpected {:?}", r),
        }
    }

    #[test]
    fn test_timing_check() {
        let mut t = Timing {
            punch_interval: Duration::ZERO,
            ..Default::default()
        };
        assert!(t.check().is_err());

        t.punch_interval = Duration::from_millis(100);
        t.poll_interval = Duration::ZERO;
        assert!(t.check().is_err());

        t.poll_interval = Duration::from_secs(2);
        t.keepalive_interval = t.idle_timeout;
        assert!(t.check().is_err());
    }

    #[test]
    fn test_short_idle_timeout() {
        let mut t = Timing::default();
        t.set_idle_timeout(Duration::from_secs(3));
        assert_eq!(t.keepalive_interval, Duration::from_secs(1));
        assert!(t.check().is_ok());

        t.set_idle_timeout(Duration::from_secs(60));
        assert_eq!(t.keepalive_interval, Duration::from_secs(1));

        let mut t = Timing::default();
        t.set_idle_timeout(Duration::from_secs(60));
        assert_eq!(t.keepalive_interval, Duration::from_secs(5));
    }
}
