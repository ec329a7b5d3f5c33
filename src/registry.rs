use chrono::{DateTime, Duration, Utc};
use serenity::model::id::ChannelId;
use std::collections::HashMap;
use tracing::info;

/// Inactivity window after which a session should be considered abandoned.
pub fn default_session_timeout() -> Duration {
    Duration::minutes(5)
}

struct Entry<S> {
    session: S,
    last_activity: DateTime<Utc>,
}

/// Caller-owned map of in-flight sessions, one per channel.
///
/// Drafts, tiebreaks and series never interact across channels, so the
/// registry is deliberately not process-wide shared state: the orchestrator
/// owns one (per session kind) and serializes access to it. Mutable access
/// counts as activity; [`SessionRegistry::purge_stale`] is how idle
/// sessions get discarded, since sessions never expire themselves.
pub struct SessionRegistry<S> {
    sessions: HashMap<ChannelId, Entry<S>>,
}

impl<S> Default for SessionRegistry<S> {
    fn default() -> Self {
        SessionRegistry {
            sessions: HashMap::default(),
        }
    }
}

impl<S> SessionRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session for a channel, returning the one it replaced.
    pub fn insert(&mut self, channel: ChannelId, session: S) -> Option<S> {
        self.sessions
            .insert(
                channel,
                Entry {
                    session,
                    last_activity: Utc::now(),
                },
            )
            .map(|entry| entry.session)
    }

    pub fn get(&self, channel: ChannelId) -> Option<&S> {
        self.sessions.get(&channel).map(|entry| &entry.session)
    }

    /// Fetch a session for mutation, refreshing its activity timestamp.
    pub fn get_mut(&mut self, channel: ChannelId) -> Option<&mut S> {
        self.sessions.get_mut(&channel).map(|entry| {
            entry.last_activity = Utc::now();
            &mut entry.session
        })
    }

    pub fn remove(&mut self, channel: ChannelId) -> Option<S> {
        self.sessions.remove(&channel).map(|entry| entry.session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop every session idle for `max_age` or longer; returns how many
    /// were discarded.
    pub fn purge_stale(&mut self, max_age: Duration) -> usize {
        let before = self.sessions.len();
        let now = Utc::now();
        self.sessions
            .retain(|_, entry| now - entry.last_activity < max_age);
        let purged = before - self.sessions.len();
        if purged > 0 {
            info!(purged, "discarded stale sessions");
        }
        purged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_and_returns_previous_session() {
        let mut registry = SessionRegistry::new();
        let channel = ChannelId::new(42);
        assert!(registry.insert(channel, "first").is_none());
        assert_eq!(registry.insert(channel, "second"), Some("first"));
        assert_eq!(registry.get(channel), Some(&"second"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_hands_the_session_back() {
        let mut registry = SessionRegistry::new();
        let channel = ChannelId::new(42);
        registry.insert(channel, 7u8);
        assert_eq!(registry.remove(channel), Some(7));
        assert!(registry.is_empty());
        assert!(registry.get_mut(channel).is_none());
    }

    #[test]
    fn purge_drops_idle_sessions_only() {
        let mut registry = SessionRegistry::new();
        registry.insert(ChannelId::new(1), ());
        registry.insert(ChannelId::new(2), ());

        // Nothing has been idle for five minutes yet.
        assert_eq!(registry.purge_stale(default_session_timeout()), 0);
        assert_eq!(registry.len(), 2);

        // With a zero allowance everything is stale.
        assert_eq!(registry.purge_stale(Duration::zero()), 2);
        assert!(registry.is_empty());
    }
}
