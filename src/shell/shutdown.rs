use crate::shared::core::cancellation::CancellationHandle;
use std::future::Future;
use std::io;

/// Resolves once `signal` fires, after cancelling in-flight scans. If the signal
/// cannot be installed this never resolves and the server keeps serving.
pub async fn cancel_on<S>(signal: S, shutdown: CancellationHandle)
where
    S: Future<Output = io::Result<()>>,
{
    if let Err(error) = signal.await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested, cancelling in-flight queries");
    shutdown.cancel();
}
