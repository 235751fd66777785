// --- File: crates/hotelier_common/src/services.rs ---
//! Service abstractions for the booking backend and the user session.
//!
//! These traits decouple the calendar logic from concrete HTTP clients and from
//! wherever the session lives, so tests can inject fakes.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::RwLock;

use crate::models::{AvailabilityQuery, AvailabilityResponse, RoomLookup};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Remote source of booked dates and availability verdicts.
pub trait AvailabilityService: Send + Sync {
    /// Error type returned by availability operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the booked dates overlapping the queried window.
    fn booked_dates(
        &self,
        query: &AvailabilityQuery,
    ) -> BoxFuture<'_, AvailabilityResponse, Self::Error>;

    /// Ask whether the exact range (and guest count) can still be booked.
    fn check_availability(
        &self,
        query: &AvailabilityQuery,
    ) -> BoxFuture<'_, AvailabilityResponse, Self::Error>;
}

/// Room metadata lookup by category and slug.
pub trait RoomService: Send + Sync {
    fn find_room(
        &self,
        category: &str,
        slug: &str,
    ) -> Pin<Box<dyn Future<Output = RoomLookup> + Send + '_>>;
}

/// Session key holding the bearer token of the signed-in user.
pub const SESSION_TOKEN_KEY: &str = "token";

/// Key/value session storage injected into components that need auth state.
pub trait SessionContext: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn clear(&self);
}

/// Process-local session storage.
#[derive(Debug, Default)]
pub struct InMemorySession {
    values: RwLock<HashMap<String, String>>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionContext for InMemorySession {
    fn get(&self, key: &str) -> Option<String> {
        // A poisoned lock still holds usable data
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        values.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value);
    }

    fn clear(&self) {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_session_get_set_clear() {
        let session = InMemorySession::new();
        assert_eq!(session.get(SESSION_TOKEN_KEY), None);

        session.set(SESSION_TOKEN_KEY, "abc".to_string());
        session.set("locale", "de-CH".to_string());
        assert_eq!(session.get(SESSION_TOKEN_KEY).as_deref(), Some("abc"));

        session.set(SESSION_TOKEN_KEY, "def".to_string());
        assert_eq!(session.get(SESSION_TOKEN_KEY).as_deref(), Some("def"));

        session.clear();
        assert_eq!(session.get(SESSION_TOKEN_KEY), None);
        assert_eq!(session.get("locale"), None);
    }
}
