// --- File: crates/hotelier_calendar/src/service.rs ---
//! Booking backend clients.
//!
//! This module provides the `reqwest` implementations of the availability and
//! room services used by the calendar.

use hotelier_common::models::{AvailabilityQuery, AvailabilityResponse, Room, RoomLookup};
use hotelier_common::services::{
    AvailabilityService, BoxFuture, RoomService, SessionContext, SESSION_TOKEN_KEY,
};
use hotelier_common::{client_for, join_url};
use hotelier_config::ApiConfig;
use reqwest::{Client, StatusCode, Url};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

const CHECK_AVAILABILITY_PATH: &str = "/api/bookings/check-availability";

/// Errors that can occur when talking to the booking backend.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Booking backend request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Booking backend returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Availability service as used by the HTTP surface.
pub type SharedAvailabilityService = Arc<dyn AvailabilityService<Error = ServiceError>>;

/// Hands out availability services bound to one user session.
pub trait AvailabilityServiceFactory: Send + Sync {
    fn availability_service(&self, session: Arc<dyn SessionContext>) -> SharedAvailabilityService;
}

/// Client for `GET /api/bookings/check-availability`.
pub struct HttpAvailabilityService {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionContext>,
}

impl HttpAvailabilityService {
    pub fn new(client: Client, base_url: impl Into<String>, session: Arc<dyn SessionContext>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            session,
        }
    }

    fn fetch(&self, query: &AvailabilityQuery) -> BoxFuture<'_, AvailabilityResponse, ServiceError> {
        let url = join_url(&self.base_url, CHECK_AVAILABILITY_PATH);
        let query = query.clone();
        let token = self.session.get(SESSION_TOKEN_KEY);

        Box::pin(async move {
            debug!(
                "Checking availability for {}/{} {}..{}",
                query.room_category, query.room_title, query.check_in, query.check_out
            );
            let mut request = self.client.get(&url).query(&query);
            if let Some(token) = token {
                request = request.bearer_auth(token);
            }
            let response = request.send().await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                warn!("Availability check returned {}: {}", status, body);
                return Err(ServiceError::Status {
                    status: status.as_u16(),
                    body,
                });
            }
            Ok(response.json::<AvailabilityResponse>().await?)
        })
    }
}

impl AvailabilityService for HttpAvailabilityService {
    type Error = ServiceError;

    fn booked_dates(
        &self,
        query: &AvailabilityQuery,
    ) -> BoxFuture<'_, AvailabilityResponse, Self::Error> {
        self.fetch(query)
    }

    fn check_availability(
        &self,
        query: &AvailabilityQuery,
    ) -> BoxFuture<'_, AvailabilityResponse, Self::Error> {
        self.fetch(query)
    }
}

/// Builds `HttpAvailabilityService`s that share one connection pool.
#[derive(Clone)]
pub struct HttpServiceFactory {
    client: Client,
    base_url: String,
}

impl HttpServiceFactory {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(client_for(api)?, api.base_url.clone()))
    }

    pub fn room_service(&self) -> HttpRoomService {
        HttpRoomService::new(self.client.clone(), self.base_url.clone())
    }
}

impl AvailabilityServiceFactory for HttpServiceFactory {
    fn availability_service(&self, session: Arc<dyn SessionContext>) -> SharedAvailabilityService {
        Arc::new(HttpAvailabilityService::new(
            self.client.clone(),
            self.base_url.clone(),
            session,
        ))
    }
}

/// Client for `GET /api/rooms/{category}/{slug}`.
pub struct HttpRoomService {
    client: Client,
    base_url: String,
}

impl HttpRoomService {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl RoomService for HttpRoomService {
    fn find_room(
        &self,
        category: &str,
        slug: &str,
    ) -> Pin<Box<dyn Future<Output = RoomLookup> + Send + '_>> {
        let url = room_url(&self.base_url, category, slug);

        Box::pin(async move {
            let url = match url {
                Ok(url) => url,
                Err(reason) => return RoomLookup::Failed(reason),
            };
            let response = match self.client.get(url).send().await {
                Ok(response) => response,
                Err(e) => return RoomLookup::Failed(e.to_string()),
            };
            match response.status() {
                StatusCode::NOT_FOUND => RoomLookup::NotFound,
                status if status.is_success() => match response.json::<Room>().await {
                    Ok(room) => RoomLookup::Found(room),
                    Err(e) => RoomLookup::Failed(format!("Invalid room payload: {}", e)),
                },
                status => RoomLookup::Failed(format!("Room service returned {}", status)),
            }
        })
    }
}

/// `{base}/api/rooms/{category}/{slug}` with both segments percent-encoded.
fn room_url(base_url: &str, category: &str, slug: &str) -> Result<Url, String> {
    let mut url = Url::parse(base_url).map_err(|e| format!("Invalid base URL: {}", e))?;
    url.path_segments_mut()
        .map_err(|_| format!("Base URL {} cannot carry a path", base_url))?
        .pop_if_empty()
        .extend(["api", "rooms", category, slug]);
    Ok(url)
}
