use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Coalesces rapid query submissions into a single delivery.
///
/// Each `submit` cancels the pending one, so only the query that survives a
/// full quiet period reaches the receiver: last-write-wins, never queued.
pub struct Debouncer {
    delay: Duration,
    output: UnboundedSender<String>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Returns the debouncer and the receiving end the event loop should
    /// drain into the filter pass.
    pub fn new(delay: Duration) -> (Debouncer, UnboundedReceiver<String>) {
        let (output, receiver) = unbounded_channel();
        (
            Debouncer {
                delay,
                output,
                pending: None,
            },
            receiver,
        )
    }

    pub fn submit<S: Into<String>>(&mut self, query: S) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let output = self.output.clone();
        let delay = self.delay;
        let query = query.into();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver going away just means the session is over.
            let _ = output.send(query);
        }));
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
