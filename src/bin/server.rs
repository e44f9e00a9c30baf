use std::io::Result;
use std::net::SocketAddr;
use std::time::Duration;
use structopt::StructOpt;
use stunproxy::rendezvous::{Server, ServerConfig};
use stunproxy::signal::shutdown_signal;

#[derive(StructOpt, Debug)]
#[structopt(name = "stunproxy-server", about = "Rendezvous and STUN server for stunproxy")]
struct Opt {
    #[structopt(long = "listen-addr", default_value = "0.0.0.0:8888")]
    listen_addr: SocketAddr,

    /// seconds an unrefreshed registration is kept
    #[structopt(long = "max-age", default_value = "20")]
    max_age: u64,

    /// registrations kept over all keys
    #[structopt(long = "max-entries", default_value = "1024")]
    max_entries: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = Opt::from_args();
    let config = ServerConfig {
        max_age: Duration::from_secs(opt.max_age),
        max_entries: opt.max_entries.max(1),
        ..Default::default()
    };

    let s = Server::new(opt.listen_addr, config).await?;
    tokio::select! {
        r = s.run() => r,
        _ = shutdown_signal() => {
            log::info!("shutting down");
            Ok(())
        }
    }
}
