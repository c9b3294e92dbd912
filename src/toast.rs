//! Transient acknowledgment toasts for fire-and-forget actions. Nothing a
//! toast reports is persisted anywhere; the mockup's quick actions only ever
//! produce these.

use std::time::{Duration, Instant};

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    created: Instant,
}

impl Toast {
    fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            created: Instant::now(),
        }
    }

    fn expired(&self) -> bool {
        self.created.elapsed() >= TOAST_LIFETIME
    }
}

#[derive(Debug, Default)]
pub struct Toasts {
    entries: Vec<Toast>,
}

impl Toasts {
    pub fn success(&mut self, text: impl Into<String>) {
        self.entries.push(Toast::new(ToastKind::Success, text));
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.entries.push(Toast::new(ToastKind::Info, text));
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.entries.push(Toast::new(ToastKind::Error, text));
    }

    pub fn prune(&mut self) {
        self.entries.retain(|toast| !toast.expired());
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}
