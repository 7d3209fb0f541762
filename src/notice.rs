use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Notice {
    NotAuthorized,
    InvalidToken,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::NotAuthorized => "No tiene permisos",
            Notice::InvalidToken => "Token inválido",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notices waiting for the shell to show them on its next render.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    pending: Mutex<VecDeque<Notice>>,
}

impl NoticeBoard {
    pub fn drain(&self) -> Vec<Notice> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }
}

impl Notifier for NoticeBoard {
    fn notify(&self, notice: Notice) {
        warn!("notice raised: {}", notice);
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        // repeated auth failures from parallel widgets collapse into one notice
        if !pending.contains(&notice) {
            pending.push_back(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_and_dedupes() {
        let board = NoticeBoard::default();
        board.notify(Notice::NotAuthorized);
        board.notify(Notice::NotAuthorized);
        board.notify(Notice::InvalidToken);

        assert_eq!(board.drain(), vec![Notice::NotAuthorized, Notice::InvalidToken]);
        assert!(board.drain().is_empty());
    }
}
