use fxdesk_core::Result;
use fxdesk_core::fault::{Notice, Notifier};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Holds the single transient notice currently shown to the user.
///
/// Opening a notice replaces the previous one. A notice disappears once its
/// duration has passed or when the user dismisses it. Renderers can watch
/// for new notices through `subscribe`.
pub struct NoticeBoard {
    active: Mutex<Option<(Notice, Instant)>>,
    published: watch::Sender<Option<Notice>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        let (published, _) = watch::channel(None);
        Self {
            active: Mutex::new(None),
            published,
        }
    }

    /// The notice still on screen, if any.
    pub fn active(&self) -> Option<Notice> {
        let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        match active.as_ref() {
            Some((notice, expires_at)) if Instant::now() < *expires_at => Some(notice.clone()),
            Some(_) => {
                *active = None;
                None
            }
            None => None,
        }
    }

    /// Runs the dismiss action. Returns whether a notice was showing.
    pub fn dismiss(&self) -> bool {
        let was_active = self.active().is_some();
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = None;
        self.published.send_replace(None);
        was_active
    }

    /// Watches newly opened notices (`None` after a dismiss).
    pub fn subscribe(&self) -> watch::Receiver<Option<Notice>> {
        self.published.subscribe()
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NoticeBoard {
    fn open(&self, message: &str, action: &str, duration: Duration) -> Result<()> {
        let notice = Notice {
            message: message.to_string(),
            action: action.to_string(),
            duration,
        };
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) =
            Some((notice.clone(), Instant::now() + duration));
        self.published.send_replace(Some(notice));
        Ok(())
    }
}
