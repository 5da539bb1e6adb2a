use std::time::Duration;

use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;

/// Forwards a submitted value once no newer value arrived for `delay`
pub struct Debouncer<T> {
    delay: Duration,
    sink: AsyncSender<T>,
    pending: Option<CancellationToken>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, sink: AsyncSender<T>) -> Self {
        Self {
            delay,
            sink,
            pending: None,
        }
    }

    /// Restart the timer with `value`, dropping whatever was pending
    pub fn submit(&mut self, value: T) {
        self.cancel_pending();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let sink = self.sink.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    if sink.send(value).await.is_err() {
                        tracing::debug!("Debounce sink closed");
                    }
                }
            }
        });

        self.pending = Some(token);
    }

    pub fn cancel_pending(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_cancelled())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}
