//! Notifier backed by an unbounded tokio channel.

use hotspot_core::models::AlertIntent;
use hotspot_core::traits::{AlertNotifier, NotifierUnavailable};
use tokio::sync::mpsc;

/// Queues intents onto an unbounded channel. Never blocks; once the
/// receiver is dropped every hand-off fails.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<AlertIntent>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiving end of its queue.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<AlertIntent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl AlertNotifier for ChannelNotifier {
    fn notify(&self, intent: AlertIntent) -> Result<(), NotifierUnavailable> {
        self.tx.send(intent).map_err(|_| NotifierUnavailable {
            reason: "alert channel closed".to_string(),
        })
    }
}
