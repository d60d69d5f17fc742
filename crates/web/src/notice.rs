//! Transient status messages.

use std::time::{Duration, Instant};

/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A message shown to the user until `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub expires_at: Instant,
}

impl Notice {
    pub fn success(message: impl Into<String>, now: Instant) -> Self {
        Self::new(NoticeKind::Success, message.into(), now)
    }

    pub fn error(message: impl Into<String>, now: Instant) -> Self {
        Self::new(NoticeKind::Error, message.into(), now)
    }

    fn new(kind: NoticeKind, message: String, now: Instant) -> Self {
        Self {
            kind,
            message,
            expires_at: now + NOTICE_TTL,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
