//! Session storage implementation
//!
//! Sessions live in process memory only and are lost on restart. Idle sessions
//! are not stored: saving an idle session removes its entry.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use super::context::UserSession;

/// In-memory session store keyed by user ID
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<i64, UserSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a user's session, or a fresh idle one if none is stored
    pub async fn load(&self, user_id: i64) -> UserSession {
        let sessions = self.sessions.read().await;
        match sessions.get(&user_id) {
            Some(session) => session.clone(),
            None => {
                debug!(user_id = user_id, "No stored session, starting idle");
                UserSession::new(user_id)
            }
        }
    }

    /// Store a session; idle sessions are removed instead
    pub async fn save(&self, session: UserSession) {
        let mut sessions = self.sessions.write().await;
        if session.state.is_idle() {
            sessions.remove(&session.user_id);
            debug!(user_id = session.user_id, "Session cleared");
        } else {
            debug!(user_id = session.user_id, state = %session.state, "Session saved");
            sessions.insert(session.user_id, session);
        }
    }

    /// Count sessions per flow
    pub async fn stats(&self) -> SessionStats {
        let sessions = self.sessions.read().await;
        let mut flows_count = HashMap::new();

        for session in sessions.values() {
            if let Some(flow) = session.current_flow() {
                *flows_count.entry(flow.as_str().to_string()).or_insert(0) += 1;
            }
        }

        SessionStats {
            active_sessions: sessions.len(),
            flows_count,
            last_activity: sessions.values().map(|session| session.updated_at).max(),
        }
    }
}

/// Storage statistics
#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    pub active_sessions: usize,
    pub flows_count: HashMap<String, u32>,
    /// Most recent state change among stored sessions
    pub last_activity: Option<DateTime<Utc>>,
}
