use tokio::signal;

/// Resolves on the first SIGINT, SIGTERM or SIGQUIT (ctrl-c elsewhere).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            error!("failed to listen for ctrl-c: {}", error);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{self, SignalKind};

        let listen = |kind: SignalKind| {
            unix::signal(kind)
                .map_err(|error| {
                    error!(
                        "failed to initialize signal listener: {:?}. error: {}",
                        kind, error
                    );
                })
                .ok()
        };

        let (terminate, quit) = (listen(SignalKind::terminate()), listen(SignalKind::quit()));

        let recv = |signal: Option<unix::Signal>| async move {
            match signal {
                Some(mut signal) => {
                    signal.recv().await;
                }
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            _ = recv(terminate) => {},
            _ = recv(quit) => {},
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };

    info!("shutdown signal received, draining connections");
}
