//! Transient user messages with timed dismissal.
//!
//! A notification is shown, turns to fading once the display timeout passes
//! and is removed after the fade. Dismissal is a fire-and-forget task on the
//! current tokio runtime; nothing cancels it, and a manual [`Notifier::dismiss`]
//! before it fires simply leaves the task with nothing to remove.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::settings::ClientSettings;

const SUBSCRIBER_BUFFER: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl NotificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Info => "info",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationState {
    Shown,
    Fading,
}

pub type NotificationId = Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub level: NotificationLevel,
    pub message: String,
    pub state: NotificationState,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct NotifierInner {
    active: Mutex<Vec<Notification>>,
    subscribers: Mutex<Vec<mpsc::Sender<Notification>>>,
}

/// Cheap to clone; clones share the same notification list.
#[derive(Debug, Clone)]
pub struct Notifier {
    inner: Arc<NotifierInner>,
    timeout: Duration,
    fade: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::from_settings(&ClientSettings::default())
    }
}

impl Notifier {
    pub fn new(timeout: Duration, fade: Duration) -> Self {
        Self {
            inner: Arc::default(),
            timeout,
            fade,
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Self {
        Self::new(settings.notification_timeout(), settings.notification_fade())
    }

    /// Receive a copy of every notification shown from now on.
    pub fn subscribe(&self) -> mpsc::Receiver<Notification> {
        let (tx, rx) = mpsc::channel(SUBSCRIBER_BUFFER);
        self.inner
            .subscribers
            .lock()
            .expect("subscriber lock poisoned")
            .push(tx);
        rx
    }

    pub fn show(&self, level: NotificationLevel, message: impl Into<String>) -> NotificationId {
        let notification = Notification {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            state: NotificationState::Shown,
            created_at: Utc::now(),
        };
        let id = notification.id;
        tracing::debug!(
            notification_id = %id,
            level = level.as_str(),
            message = %notification.message,
            "showing notification"
        );

        self.publish(&notification);
        self.inner
            .active
            .lock()
            .expect("notification lock poisoned")
            .push(notification);
        self.schedule_dismissal(id);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.show(NotificationLevel::Success, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> NotificationId {
        self.show(NotificationLevel::Warning, message)
    }

    pub fn danger(&self, message: impl Into<String>) -> NotificationId {
        self.show(NotificationLevel::Danger, message)
    }

    /// Remove a notification now. Returns false if it was already gone.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        remove(&self.inner, id)
    }

    pub fn active(&self) -> Vec<Notification> {
        self.inner
            .active
            .lock()
            .expect("notification lock poisoned")
            .clone()
    }

    fn publish(&self, notification: &Notification) {
        let mut subscribers = self
            .inner
            .subscribers
            .lock()
            .expect("subscriber lock poisoned");
        subscribers.retain(|tx| match tx.try_send(notification.clone()) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!("notification subscriber lagging, dropping message");
                true
            }
            Err(mpsc::error::TrySendError::Closed(_)) => false,
        });
    }

    fn schedule_dismissal(&self, id: NotificationId) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!(notification_id = %id, "no runtime, notification stays until dismissed");
            return;
        };
        let inner = Arc::clone(&self.inner);
        let (timeout, fade) = (self.timeout, self.fade);
        handle.spawn(async move {
            tokio::time::sleep(timeout).await;
            {
                let mut active = inner.active.lock().expect("notification lock poisoned");
                match active.iter_mut().find(|n| n.id == id) {
                    Some(n) => n.state = NotificationState::Fading,
                    None => return,
                }
            }
            tokio::time::sleep(fade).await;
            remove(&inner, id);
        });
    }
}

fn remove(inner: &NotifierInner, id: NotificationId) -> bool {
    let mut active = inner.active.lock().expect("notification lock poisoned");
    let before = active.len();
    active.retain(|n| n.id != id);
    active.len() != before
}
