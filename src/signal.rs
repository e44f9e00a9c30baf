//! Process shutdown on SIGINT or SIGTERM.

/// Resolves on the first ctrl-c, or SIGTERM on unix.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = term.recv() => {}
                }
                return;
            }
            Err(e) => log::warn!("cannot watch SIGTERM: {}", e),
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("cannot watch ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::process::Command;

    #[tokio::test]
    async fn test_sigterm() {
        let kill = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let status = Command::new("kill")
                .args(["-TERM", &std::process::id().to_string()])
                .status()
                .await
                .unwrap();
            assert!(status.success());
        };

        tokio::time::timeout(Duration::from_secs(5), async {
            tokio::join!(shutdown_signal(), kill)
        })
        .await
        .expect("SIGTERM was not observed");
    }
}
