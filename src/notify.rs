//! User-facing notification side channel.
//!
//! The fetch and parse stages report some failures to an interactive surface
//! (a toast, a status bar, a terminal). Delivery is fire-and-forget: a
//! [`Notifier`] must never block the background task that calls it, and a
//! failed delivery is not an error.

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, warn};

/// Receives short human-readable failure messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _message: &str) {}
}

/// Emits messages as `warn` events, for hosts whose "surface" is the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        warn!(target: "news_listing::notify", %message, "User notification");
    }
}

/// Forwards messages over an unbounded channel to whoever owns the
/// interactive thread.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: UnboundedSender<String>,
}

impl ChannelNotifier {
    pub fn new(tx: UnboundedSender<String>) -> Self {
        Self { tx }
    }

    /// Build a notifier together with the receiving end.
    pub fn channel() -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, message: &str) {
        if self.tx.send(message.to_string()).is_err() {
            debug!(%message, "Notification receiver closed; dropping message");
        }
    }
}

impl<F> Notifier for F
where
    F: Fn(&str) + Send + Sync,
{
    fn notify(&self, message: &str) {
        self(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_channel_notifier_delivers_in_order() {
        let (notifier, mut rx) = ChannelNotifier::channel();
        notifier.notify("first");
        notifier.notify("second");
        assert_eq!(rx.try_recv().unwrap(), "first");
        assert_eq!(rx.try_recv().unwrap(), "second");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_channel_notifier_ignores_closed_receiver() {
        let (notifier, rx) = ChannelNotifier::channel();
        drop(rx);
        notifier.notify("nobody is listening");
    }

    #[test]
    fn test_closure_notifier() {
        let seen = Mutex::new(Vec::new());
        let notifier = |m: &str| seen.lock().unwrap().push(m.to_string());
        notifier.notify("hello");
        assert_eq!(seen.lock().unwrap().as_slice(), ["hello".to_string()]);
    }
}
