// Session context: the persisted auth token and the "logged in" flag derived from it
// Cloned handles share one channel, so every subscriber sees sign-in/sign-out from any handle

use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

#[derive(Debug, Clone)]
pub struct SessionContext {
    sender: Arc<watch::Sender<Option<String>>>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn with_token(token: Option<String>) -> Self {
        let session = Self::new();
        if let Some(token) = token {
            session.sign_in(&token);
        }
        session
    }

    pub fn sign_in(&self, token: &str) {
        info!("Session signed in");
        self.sender.send_replace(Some(token.to_string()));
    }

    pub fn sign_out(&self) {
        info!("Session signed out");
        self.sender.send_replace(None);
    }

    pub fn token(&self) -> Option<String> {
        self.sender.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.sender.borrow().is_some()
    }

    // Receivers are notified on every sign-in and sign-out
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_logged_out() {
        let session = SessionContext::new();
        assert!(!session.is_logged_in());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_with_token() {
        let session = SessionContext::with_token(Some("abc".to_string()));
        assert!(session.is_logged_in());
        assert_eq!(session.token().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_subscribers_see_changes_from_other_handles() {
        let session = SessionContext::new();
        let other_tab = session.clone();
        let mut receiver = session.subscribe();

        other_tab.sign_in("token-1");
        receiver.changed().await.unwrap();
        assert_eq!(receiver.borrow().as_deref(), Some("token-1"));
        assert!(session.is_logged_in());

        other_tab.sign_out();
        receiver.changed().await.unwrap();
        assert!(receiver.borrow().is_none());
        assert!(!session.is_logged_in());
    }
}
