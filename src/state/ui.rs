//! Transient UI chrome: the single notice toast.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// One notice slot; a new notice replaces whatever is showing.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub notice: Option<Notice>,
    next_id: u64,
}

impl UiState {
    pub fn push_success(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, text.into())
    }

    pub fn push_error(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, text.into())
    }

    fn push(&mut self, kind: NoticeKind, text: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notice = Some(Notice { id, kind, text });
        id
    }

    /// Dismiss only if `id` still names the showing notice, so a delayed
    /// auto-dismiss never removes a newer one.
    pub fn dismiss(&mut self, id: u64) {
        if self.notice.as_ref().is_some_and(|n| n.id == id) {
            self.notice = None;
        }
    }
}
