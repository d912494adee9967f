//! Status line and toast notifications.

use std::time::{Duration, Instant};

use serde::Serialize;

/// How long a toast stays fully visible.
pub const TOAST_VISIBLE: Duration = Duration::from_secs(3);
/// Exit animation length before the toast is removed.
pub const TOAST_EXIT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
    Loading,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Error => "❌",
            Severity::Warning => "⚠️",
            Severity::Info => "ℹ️",
            Severity::Loading => "⏳",
        }
    }
}

/// The persistent status line. Each update replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub message: String,
    pub severity: Severity,
}

impl StatusLine {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn ready() -> Self {
        Self::new("Ready", Severity::Success)
    }

    pub fn icon(&self) -> &'static str {
        self.severity.icon()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Exiting,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub created: Instant,
}

impl Toast {
    pub fn phase(&self, now: Instant) -> ToastPhase {
        let age = now.saturating_duration_since(self.created);
        if age < TOAST_VISIBLE {
            ToastPhase::Visible
        } else if age < TOAST_VISIBLE + TOAST_EXIT {
            ToastPhase::Exiting
        } else {
            ToastPhase::Expired
        }
    }
}

/// Toasts in creation order; each expires on its own clock.
#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            created: now,
        });
        id
    }

    /// Drop toasts whose exit animation has finished.
    pub fn tick(&mut self, now: Instant) {
        self.toasts
            .retain(|toast| toast.phase(now) != ToastPhase::Expired);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let start = Instant::now();
        let mut stack = ToastStack::new();
        stack.push("saved", Severity::Success, start);

        let toast = stack.last().unwrap().clone();
        assert_eq!(toast.phase(start), ToastPhase::Visible);
        assert_eq!(
            toast.phase(start + Duration::from_millis(2999)),
            ToastPhase::Visible
        );
        assert_eq!(toast.phase(start + TOAST_VISIBLE), ToastPhase::Exiting);
        assert_eq!(
            toast.phase(start + Duration::from_millis(3299)),
            ToastPhase::Exiting
        );
        assert_eq!(
            toast.phase(start + Duration::from_millis(3300)),
            ToastPhase::Expired
        );
    }

    #[test]
    fn test_toasts_expire_independently() {
        let start = Instant::now();
        let mut stack = ToastStack::new();
        stack.push("first", Severity::Info, start);
        stack.push("second", Severity::Error, start + Duration::from_secs(2));
        assert_eq!(stack.len(), 2);

        stack.tick(start + Duration::from_millis(3400));
        let remaining: Vec<&str> = stack.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(remaining, vec!["second"]);

        stack.tick(start + Duration::from_millis(5400));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_toast_ids_are_unique() {
        let now = Instant::now();
        let mut stack = ToastStack::new();
        let a = stack.push("a", Severity::Info, now);
        let b = stack.push("b", Severity::Info, now);
        assert_ne!(a, b);
    }

    #[test]
    fn test_status_icons() {
        assert_eq!(StatusLine::ready().icon(), "✅");
        assert_eq!(Severity::Loading.icon(), "⏳");
        assert_eq!(Severity::Warning.icon(), "⚠️");
    }
}
