// File: services/hotelier_backend/src/main.rs
use axum::{routing::get, Router};
use hotelier_calendar::{routes as calendar_routes, CalendarState};
use hotelier_common::logging::{self, log_result};
use hotelier_config::load_config;
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = load_config()?;
    let _log_guard = logging::init(&config.logging);

    let state = log_result(
        CalendarState::from_config(&config),
        "Calendar state ready",
        "Failed to set up calendar state",
    )?;

    let state = Arc::new(state);
    state.spawn_session_sweeper();

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the Hotelier API!" }))
        .merge(calendar_routes(state));

    #[allow(unused_mut)] // only reassigned with the openapi feature
    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use hotelier_calendar::doc::CalendarApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Hotelier API",
                version = "0.1.0",
                description = "Room availability calendar API",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(CalendarApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    let app = app.layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
