//! Transient notification shown after a view action completes.
//!
//! DESIGN
//! ======
//! At most one notice is visible. Each push bumps a sequence number so a
//! delayed auto-dismiss only closes the notice it was scheduled for.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "notice notice--success",
            Self::Error => "notice notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, title: "Success".to_owned(), text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, title: "Error".to_owned(), text: text.into() }
    }
}

/// Notice slot provided as `RwSignal<NoticeState>` context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub current: Option<Notice>,
    pub seq: u64,
}

impl NoticeState {
    /// Replace any visible notice; returns the new notice's sequence number.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.seq += 1;
        self.current = Some(notice);
        self.seq
    }

    /// Close the notice only if it is still the one numbered `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.current = None;
        }
    }

    pub fn close(&mut self) {
        self.current = None;
    }
}
