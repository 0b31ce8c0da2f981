//! User-facing failure notifications.
//!
//! The HTTP client surfaces every failure exactly once through a [`Notifier`]
//! sink. Sinks decide what showing a message means: the default logs through
//! `tracing` (the CLI's transient surface is its log output), while a
//! channel-backed sink feeds an embedding UI or a test harness.

use tokio::sync::mpsc;

/// Abstract notification sink interface
///
/// Implementors deliver transient, non-blocking user notifications.
/// Delivery never fails or blocks: a sink with nowhere to put the message
/// drops it.
pub trait Notifier: Send + Sync {
    /// Emit one transient notification with the given message.
    fn notify(&self, message: &str);
}

/// Sink that emits notifications as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!(%message, "User notification");
    }
}

/// Sink that forwards notifications to an unbounded channel.
///
/// Lets a caller observe exactly which messages were surfaced and in what
/// order. If the receiving side has been dropped the message is discarded.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelNotifier {
    /// Create a sink together with the receiving end of its channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, message: &str) {
        let _ = self.tx.send(message.to_string());
    }
}
