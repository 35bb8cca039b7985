#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Transient notices in the order they were raised.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeQueue {
    /// Appends a notice and returns its id. Ids are never reused.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|notice| notice.id != id);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
