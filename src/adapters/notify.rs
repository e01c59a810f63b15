use crate::domain::notice::Notification;
use crate::domain::ports::Notifier;
use tokio::sync::mpsc;

/// Prints notices to stderr, the terminal stand-in for a toast.
///
/// Logging is left to the store, which already records the underlying error.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("❌ {}", notification.message());
    }
}

/// Forwards notifications to whoever holds the receiving end.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            tracing::debug!("Notification dropped, receiver is gone");
        }
    }
}
