use hotelier_common::services::{AvailabilityService, RoomService};
use hotelier_config::AppConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, RwLock};
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::time::{self, Instant};
use tracing::{debug, info};
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::component::{AvailabilityCalendar, CalendarSettings, CalendarView};
use crate::error::CalendarError;
use crate::random::{RandomSource, SystemRandomSource};
use crate::service::{AvailabilityServiceFactory, HttpServiceFactory, ServiceError};

pub type SessionCalendar = AvailabilityCalendar<dyn AvailabilityService<Error = ServiceError>>;
pub type CalendarHandle = Arc<Mutex<SessionCalendar>>;

// Upper bound on how long an expired session may linger before the sweeper runs.
const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

struct Session {
    calendar: CalendarHandle,
    views: watch::Receiver<CalendarView>,
    last_access: StdMutex<Instant>,
}

impl Session {
    fn touch(&self) {
        let mut last_access = self.last_access.lock().unwrap_or_else(|e| e.into_inner());
        *last_access = Instant::now();
    }

    fn idle_for(&self, now: Instant) -> Duration {
        let last_access = self.last_access.lock().unwrap_or_else(|e| e.into_inner());
        now.saturating_duration_since(*last_access)
    }
}

/// Shared state of the calendar routes.
///
/// Each session owns one calendar behind its own mutex, so requests against
/// the same session run one after another. The map lock is never held across
/// an await. Sessions idle for longer than
/// [`CalendarSettings::session_idle_timeout`] are dropped.
pub struct CalendarState {
    pub settings: CalendarSettings,
    pub availability: Arc<dyn AvailabilityServiceFactory>,
    pub rooms: Arc<dyn RoomService>,
    pub rng: Arc<dyn RandomSource>,
    pub clock: Arc<dyn Clock>,
    sessions: RwLock<HashMap<Uuid, Arc<Session>>>,
}

impl CalendarState {
    pub fn new(
        settings: CalendarSettings,
        availability: Arc<dyn AvailabilityServiceFactory>,
        rooms: Arc<dyn RoomService>,
        rng: Arc<dyn RandomSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            settings,
            availability,
            rooms,
            rng,
            clock,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Wires the HTTP clients, system clock and system random source from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, CalendarError> {
        let factory = HttpServiceFactory::from_config(&config.api)?;
        info!(
            "Calendar talks to {} (time zone {})",
            config.api.base_url, config.calendar.time_zone
        );
        Ok(Self::new(
            CalendarSettings::from(&config.calendar),
            Arc::new(factory.clone()),
            Arc::new(factory.room_service()),
            Arc::new(SystemRandomSource::new()),
            Arc::new(SystemClock::from_zone_name(&config.calendar.time_zone)),
        ))
    }

    /// Stores a new session. Expired sessions are swept first.
    pub fn insert(&self, mut calendar: SessionCalendar) -> Uuid {
        self.purge_idle_sessions();
        let id = Uuid::new_v4();
        let session = Session {
            views: calendar.subscribe(),
            calendar: Arc::new(Mutex::new(calendar)),
            last_access: StdMutex::new(Instant::now()),
        };
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        sessions.insert(id, Arc::new(session));
        id
    }

    fn session(&self, id: Uuid) -> Result<Arc<Session>, CalendarError> {
        let sessions = self.sessions.read().unwrap_or_else(|e| e.into_inner());
        let session = sessions
            .get(&id)
            .cloned()
            .ok_or(CalendarError::SessionNotFound(id))?;
        session.touch();
        Ok(session)
    }

    pub fn get(&self, id: Uuid) -> Result<CalendarHandle, CalendarError> {
        self.session(id).map(|session| session.calendar.clone())
    }

    /// Latest published view, read without waiting for the calendar's lock.
    pub fn latest_view(&self, id: Uuid) -> Result<CalendarView, CalendarError> {
        self.session(id).map(|session| session.views.borrow().clone())
    }

    pub fn remove(&self, id: Uuid) -> Result<(), CalendarError> {
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        sessions
            .remove(&id)
            .map(|_| ())
            .ok_or(CalendarError::SessionNotFound(id))
    }

    pub fn session_count(&self) -> usize {
        let sessions = self.sessions.read().unwrap_or_else(|e| e.into_inner());
        sessions.len()
    }

    /// Drops sessions idle for longer than the configured timeout and returns how many went.
    pub fn purge_idle_sessions(&self) -> usize {
        let timeout = self.settings.session_idle_timeout;
        let now = Instant::now();
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        let before = sessions.len();
        sessions.retain(|_, session| session.idle_for(now) <= timeout);
        let purged = before - sessions.len();
        if purged > 0 {
            debug!("Dropped {} idle calendar sessions", purged);
        }
        purged
    }

    /// Sweeps idle sessions periodically until the state is dropped.
    pub fn spawn_session_sweeper(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let period = self
            .settings
            .session_idle_timeout
            .clamp(Duration::from_secs(1), MAX_SWEEP_INTERVAL);
        let state = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut ticks = time::interval(period);
            ticks.tick().await;
            loop {
                ticks.tick().await;
                match state.upgrade() {
                    Some(state) => {
                        state.purge_idle_sessions();
                    }
                    None => break,
                }
            }
        })
    }
}
