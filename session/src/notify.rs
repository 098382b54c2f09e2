use tokio::sync::mpsc::UnboundedSender;

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
}

/// A message meant for a toast or status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }
}

/// Sink for user-visible notices.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, notice: Notice);
}

/// Writes notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        tracing::info!(kind = ?notice.kind, "{}", notice.message);
    }
}

/// Forwards notices to a channel, e.g. one drained by a toast component.
///
/// Notices sent after the receiver is gone are dropped.
#[derive(Debug, Clone)]
pub struct ChannelNotifier(UnboundedSender<Notice>);

impl ChannelNotifier {
    pub fn new(sender: UnboundedSender<Notice>) -> Self {
        Self(sender)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        let _ = self.0.send(notice);
    }
}
