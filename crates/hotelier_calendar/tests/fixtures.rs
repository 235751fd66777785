//! Test fixtures for calendar tests
//!
//! Fake backend services and factory functions shared by the integration tests.

#![allow(dead_code)]

use hotelier_calendar::clock::FixedClock;
use hotelier_calendar::random::FixedSequence;
use hotelier_calendar::service::{
    AvailabilityServiceFactory, ServiceError, SharedAvailabilityService,
};
use hotelier_calendar::{CalendarDate, CalendarSettings, CalendarState};
use hotelier_common::models::{AvailabilityQuery, AvailabilityResponse, Room, RoomLookup};
use hotelier_common::services::{
    AvailabilityService, BoxFuture, RoomService, SessionContext, SESSION_TOKEN_KEY,
};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub fn test_room() -> Room {
    Room {
        id: "r-101".to_string(),
        title: "Ocean View".to_string(),
        category: "suites".to_string(),
        slug: "ocean-view".to_string(),
        price: 5000,
        max_occupancy: 3,
        image_url: Some("https://cdn.example.com/ocean.jpg".to_string()),
        description: None,
    }
}

pub fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("valid date")
}

/// Availability backend with canned answers. `None` fails the call.
pub struct ScriptedAvailability {
    pub booked: Option<AvailabilityResponse>,
    pub verdict: Option<AvailabilityResponse>,
    pub session: Arc<dyn SessionContext>,
    pub tokens: Arc<Mutex<Vec<Option<String>>>>,
    pub verdict_gate: Option<Arc<Notify>>,
}

impl ScriptedAvailability {
    fn answer(
        &self,
        response: Option<AvailabilityResponse>,
    ) -> BoxFuture<'_, AvailabilityResponse, ServiceError> {
        self.tokens
            .lock()
            .unwrap()
            .push(self.session.get(SESSION_TOKEN_KEY));
        Box::pin(async move {
            response.ok_or(ServiceError::Status {
                status: 500,
                body: "backend down".to_string(),
            })
        })
    }
}

impl AvailabilityService for ScriptedAvailability {
    type Error = ServiceError;

    fn booked_dates(
        &self,
        _query: &AvailabilityQuery,
    ) -> BoxFuture<'_, AvailabilityResponse, Self::Error> {
        self.answer(self.booked.clone())
    }

    fn check_availability(
        &self,
        _query: &AvailabilityQuery,
    ) -> BoxFuture<'_, AvailabilityResponse, Self::Error> {
        let answer = self.answer(self.verdict.clone());
        match self.verdict_gate.clone() {
            Some(gate) => Box::pin(async move {
                gate.notified().await;
                answer.await
            }),
            None => answer,
        }
    }
}

#[derive(Clone, Default)]
pub struct ScriptedFactory {
    pub booked: Option<AvailabilityResponse>,
    pub verdict: Option<AvailabilityResponse>,
    /// Bearer token seen on each backend call.
    pub tokens: Arc<Mutex<Vec<Option<String>>>>,
    /// When set, verification calls wait for a notification before answering.
    pub verdict_gate: Option<Arc<Notify>>,
}

impl AvailabilityServiceFactory for ScriptedFactory {
    fn availability_service(&self, session: Arc<dyn SessionContext>) -> SharedAvailabilityService {
        Arc::new(ScriptedAvailability {
            booked: self.booked.clone(),
            verdict: self.verdict.clone(),
            session,
            tokens: self.tokens.clone(),
            verdict_gate: self.verdict_gate.clone(),
        })
    }
}

/// Serves a single room; anything else is `NotFound`, slug "broken" fails.
pub struct StaticRooms(pub Room);

impl RoomService for StaticRooms {
    fn find_room(
        &self,
        category: &str,
        slug: &str,
    ) -> Pin<Box<dyn Future<Output = RoomLookup> + Send + '_>> {
        let lookup = if slug == "broken" {
            RoomLookup::Failed("room service timed out".to_string())
        } else if category == self.0.category && slug == self.0.slug {
            RoomLookup::Found(self.0.clone())
        } else {
            RoomLookup::NotFound
        };
        Box::pin(async move { lookup })
    }
}

pub fn booked_response(dates: &[&str]) -> AvailabilityResponse {
    AvailabilityResponse {
        booked_dates: Some(dates.iter().map(|d| d.to_string()).collect()),
        ..AvailabilityResponse::default()
    }
}

pub fn verdict_response(is_available: bool, message: Option<&str>) -> AvailabilityResponse {
    AvailabilityResponse {
        is_available: Some(is_available),
        message: message.map(str::to_string),
        ..AvailabilityResponse::default()
    }
}

/// Calendar state frozen on 2025-04-01 with deterministic simulation draws.
pub fn create_test_state(factory: ScriptedFactory) -> Arc<CalendarState> {
    create_test_state_with(factory, CalendarSettings::default())
}

pub fn create_test_state_with(
    factory: ScriptedFactory,
    settings: CalendarSettings,
) -> Arc<CalendarState> {
    Arc::new(CalendarState::new(
        settings,
        Arc::new(factory),
        Arc::new(StaticRooms(test_room())),
        Arc::new(FixedSequence::constant(0.5)),
        Arc::new(FixedClock(date(2025, 4, 1))),
    ))
}
