use std::sync::{Arc, Mutex, MutexGuard, TryLockError};

use smartkeys_session::{KeyEvent, KeyboardSession};
use tracing::warn;

use super::document::{ForeignDocument, SkTextDocument};
use super::types::{to_key_events, SkKeyEvent, SkKeyResponse};

/// One keyboard session. The session stays locked while it calls back into
/// the host document, so document callbacks must not call back into the
/// same session. A re-entrant `handle_key` / `commit` is rejected as not
/// consumed; a re-entrant `is_composing` / `pending_text` would block.
#[derive(uniffi::Object)]
pub struct SkSession {
    session: Mutex<KeyboardSession>,
}

impl SkSession {
    fn try_session(&self) -> Option<MutexGuard<'_, KeyboardSession>> {
        match self.session.try_lock() {
            Ok(guard) => Some(guard),
            Err(TryLockError::WouldBlock) => {
                warn!("session busy, event dropped");
                None
            }
            Err(TryLockError::Poisoned(e)) => Some(e.into_inner()),
        }
    }
}

#[uniffi::export]
impl SkSession {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(KeyboardSession::new()),
        })
    }

    pub fn handle_key(&self, document: Arc<dyn SkTextDocument>, event: SkKeyEvent) -> SkKeyResponse {
        let mut resp = SkKeyResponse {
            consumed: false,
            adjusted: None,
        };
        let Some(mut session) = self.try_session() else {
            return resp;
        };
        let mut doc = ForeignDocument(document.as_ref());
        for key in to_key_events(event) {
            let r = session.handle_key(&mut doc, key);
            resp.consumed |= r.consumed;
            if let Some(kind) = r.adjusted {
                resp.adjusted = Some(kind.into());
            }
        }
        resp
    }

    pub fn commit(&self, document: Arc<dyn SkTextDocument>) -> SkKeyResponse {
        let Some(mut session) = self.try_session() else {
            return SkKeyResponse {
                consumed: false,
                adjusted: None,
            };
        };
        let mut doc = ForeignDocument(document.as_ref());
        session.handle_key(&mut doc, KeyEvent::Commit).into()
    }

    pub fn is_composing(&self) -> bool {
        self.session.lock().unwrap().is_composing()
    }

    pub fn pending_text(&self) -> String {
        self.session.lock().unwrap().pending()
    }
}
