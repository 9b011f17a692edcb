//! Explicit session context.
//!
//! The browser client kept the signed-in user id in an ambient
//! `localStorage` flag read from anywhere. Here the session is a plain
//! value created at the composition root and handed to whoever needs it,
//! with an explicit load/save lifecycle against a JSON file in the app's
//! data directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

const SESSION_FILENAME: &str = "session.json";

/// Who is signed in, if anyone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<Uuid>,
    pub email: Option<String>,
    pub signed_in_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Load the session from `dir`, or an anonymous session if none is
    /// stored.
    pub fn load<P: AsRef<Path>>(dir: P) -> crate::error::Result<Self> {
        let path = dir.as_ref().join(SESSION_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let session = serde_json::from_str(&content)?;
        Ok(session)
    }

    /// Save the session to `dir`, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> crate::error::Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(SESSION_FILENAME), content)?;
        Ok(())
    }

    /// Record a successful sign-in.
    pub fn sign_in(&mut self, user_id: Uuid, email: impl Into<String>) {
        self.user_id = Some(user_id);
        self.email = Some(email.into());
        self.signed_in_at = Some(Utc::now());
    }

    /// Drop all credentials (sign-out).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_by_default() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.user_id.is_none());
    }

    #[test]
    fn sign_in_and_clear() {
        let mut session = Session::default();
        let id = Uuid::new_v4();
        session.sign_in(id, "bob@x.com");

        assert!(session.is_authenticated());
        assert_eq!(session.user_id, Some(id));
        assert_eq!(session.email.as_deref(), Some("bob@x.com"));
        assert!(session.signed_in_at.is_some());

        session.clear();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn load_missing_file_yields_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::load(dir.path()).unwrap();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let mut session = Session::default();
        session.sign_in(Uuid::new_v4(), "bob@x.com");
        session.save(dir.path()).unwrap();

        let loaded = Session::load(dir.path()).unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("formz");

        let session = Session::default();
        session.save(&nested).unwrap();
        assert!(nested.join("session.json").exists());
    }
}
