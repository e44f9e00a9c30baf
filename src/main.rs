use std::net::SocketAddr;
use std::process::exit;
use std::time::Duration;
use structopt::StructOpt;
use stunproxy::error::ConfigError;
use stunproxy::signal::shutdown_signal;
use stunproxy::{Config, Controller, NetworkStages};
use tokio::sync::watch;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "stunproxy",
    about = "Relay UDP between two hosts behind NAT that share a key"
)]
struct Opt {
    /// base64key+base64key+base64key@server[:port][/path]
    key: String,

    /// addr:port to receive datagrams for the peer on
    recv: String,

    /// addr:port to send datagrams from the peer to
    send: String,

    /// STUN server, host[:port]
    stun: String,

    /// local address of the tunnel socket
    #[structopt(long = "bind", default_value = "0.0.0.0:0")]
    bind: SocketAddr,

    /// seconds to wait for the peer while punching
    #[structopt(long = "punch-timeout", default_value = "10")]
    punch_timeout: u64,

    /// seconds of silence from the peer before starting over
    #[structopt(long = "idle-timeout", default_value = "30")]
    idle_timeout: u64,

    /// seconds between peer lookups
    #[structopt(long = "poll-interval", default_value = "2")]
    poll_interval: u64,
}

fn build_config(opt: Opt) -> Result<Config, ConfigError> {
    let mut config = Config::new(&opt.key, &opt.recv, &opt.send, &opt.stun)?;
    config.bind_addr = opt.bind;
    config.timing.punch_timeout = Duration::from_secs(opt.punch_timeout);
    config.timing.set_idle_timeout(Duration::from_secs(opt.idle_timeout));
    config.timing.poll_interval = Duration::from_secs(opt.poll_interval);
    config.timing.check()?;
    Ok(config)
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match build_config(Opt::from_args()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            exit(2);
        }
    };
    log::info!(
        "rendezvous via {}, {} -> peer -> {}",
        config.key.locator(),
        config.local_receive,
        config.local_forward
    );

    let (tx, rx) = watch::channel(false);
    let timing = config.timing.clone();
    let mut controller = Controller::new(NetworkStages::new(config), timing, rx);

    tokio::join!(controller.run(), async {
        shutdown_signal().await;
        log::info!("shutting down");
        let _ = tx.send(true);
    });
}
