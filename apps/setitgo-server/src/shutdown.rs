use anyhow::Result;
use tokio::signal;

#[derive(Debug, Clone, Copy)]
enum StopSignal {
    Interrupt,
    #[cfg(unix)]
    Terminate,
}

impl StopSignal {
    fn name(self) -> &'static str {
        match self {
            Self::Interrupt => "SIGINT",
            #[cfg(unix)]
            Self::Terminate => "SIGTERM",
        }
    }
}

/// Resolves once the process is asked to stop (Ctrl+C or SIGTERM).
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn stop_requested() -> Result<()> {
    let received = tokio::select! {
        result = interrupt() => result?,
        result = terminate() => result?,
    };
    tracing::info!(signal = received.name(), "stop requested, draining connections");
    Ok(())
}

/// Waits for [`stop_requested`] and logs instead of failing, for use with
/// `axum::serve(..).with_graceful_shutdown`.
pub async fn graceful() {
    if let Err(e) = stop_requested().await {
        tracing::error!(error = %e, "signal handling failed, shutting down");
    }
}

async fn interrupt() -> Result<StopSignal> {
    signal::ctrl_c().await?;
    Ok(StopSignal::Interrupt)
}

#[cfg(unix)]
async fn terminate() -> Result<StopSignal> {
    let mut handler = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    handler.recv().await;
    Ok(StopSignal::Terminate)
}

#[cfg(not(unix))]
async fn terminate() -> Result<StopSignal> {
    std::future::pending::<Result<StopSignal>>().await
}
