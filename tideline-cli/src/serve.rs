//! Serve command: a JSON HTTP API over the recommender.
//!
//! `GET /api/conditions?location=<label>` answers with
//! `{"success": true, "conditions", "best", "activities", "advisories"}` or
//! `{"success": false, "error"}`. `GET /health` reports liveness.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tideline_core::{ConditionsError, ConditionsProvider};
use tokio::net::TcpListener;

use crate::output::Recommendation;
use crate::provider::{
    ConditionsProviderBuilder, DefaultConditionsProviderBuilder, ProviderSettings,
};
use crate::{
    ARG_BIND, ARG_LIVE, ARG_NOAA_STATION, ARG_OPENWEATHER_API_KEY, ARG_SEED,
    ARG_STORMGLASS_API_KEY, CliError, DEFAULT_BIND, DEFAULT_LOCATION,
};

/// Name reported by the health endpoint.
pub(crate) const SERVICE_NAME: &str = "tideline";

/// CLI arguments for the `serve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Serve activity recommendations over HTTP. \
                 GET /api/conditions?location=... returns the conditions and \
                 the ranked activities as JSON; GET /health reports liveness.",
    about = "Serve recommendations as a JSON HTTP API"
)]
#[ortho_config(prefix = "TIDELINE")]
pub(crate) struct ServeArgs {
    /// Socket address to listen on (defaults to 0.0.0.0:5000).
    #[arg(long = ARG_BIND, value_name = "addr")]
    #[serde(default)]
    pub(crate) bind: Option<String>,
    /// Seed for simulated conditions; random when absent.
    #[arg(long = ARG_SEED, value_name = "u64")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Query live weather services before falling back to simulation.
    #[arg(
        long = ARG_LIVE,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    pub(crate) live: Option<bool>,
    /// OpenWeatherMap API key for live weather readings.
    #[arg(long = ARG_OPENWEATHER_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) openweather_api_key: Option<String>,
    /// Stormglass API key for live marine readings.
    #[arg(long = ARG_STORMGLASS_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) stormglass_api_key: Option<String>,
    /// NOAA CO-OPS station queried for tide predictions.
    #[arg(long = ARG_NOAA_STATION, value_name = "id")]
    #[serde(default)]
    pub(crate) noaa_station: Option<String>,
}

impl ServeArgs {
    pub(crate) fn into_config(self) -> Result<ServeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ServeConfig::try_from(merged)
    }
}

/// Resolved `serve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServeConfig {
    pub(crate) bind: SocketAddr,
    pub(crate) provider: ProviderSettings,
}

impl TryFrom<ServeArgs> for ServeConfig {
    type Error = CliError;

    fn try_from(args: ServeArgs) -> Result<Self, Self::Error> {
        let bind = args
            .bind
            .as_deref()
            .unwrap_or(DEFAULT_BIND)
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidArgument {
                field: ARG_BIND,
                reason: "must be a socket address such as 127.0.0.1:5000",
            })?;
        Ok(Self {
            bind,
            provider: ProviderSettings::new(
                args.seed,
                args.live.unwrap_or(false),
                args.openweather_api_key,
                args.stormglass_api_key,
                args.noaa_station,
            ),
        })
    }
}

pub(super) fn run_serve(args: ServeArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let provider: Arc<dyn ConditionsProvider> =
        Arc::from(DefaultConditionsProviderBuilder.build(&config.provider)?);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::BuildRuntime)?;
    // The router's handle is released inside the runtime; this one outlives it
    // so a live provider's own runtime is dropped from synchronous code.
    runtime.block_on(serve(config.bind, router(Arc::clone(&provider))))
}

async fn serve(bind: SocketAddr, app: Router) -> Result<(), CliError> {
    let listener = TcpListener::bind(bind)
        .await
        .map_err(|source| CliError::BindServer { addr: bind, source })?;
    log::info!("serving recommendations on http://{bind}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(CliError::Serve)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::warn!("cannot listen for ctrl-c, serving until killed: {err}");
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}

/// Routes for the HTTP API.
pub(crate) fn router(provider: Arc<dyn ConditionsProvider>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/conditions", get(conditions))
        .with_state(provider)
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    service: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

#[derive(Debug, Deserialize)]
struct ConditionsQuery {
    location: Option<String>,
}

#[derive(Debug, Serialize)]
struct Success {
    success: bool,
    #[serde(flatten)]
    report: Recommendation,
}

#[derive(Debug, Serialize)]
struct Failure {
    success: bool,
    error: String,
}

fn failure(status: StatusCode, error: String) -> Response {
    (
        status,
        Json(Failure {
            success: false,
            error,
        }),
    )
        .into_response()
}

async fn conditions(
    State(provider): State<Arc<dyn ConditionsProvider>>,
    Query(query): Query<ConditionsQuery>,
) -> Response {
    let location = query
        .location
        .unwrap_or_else(|| DEFAULT_LOCATION.to_owned());
    let label = location.clone();
    // Providers block, so keep them off the async workers.
    let lookup = tokio::task::spawn_blocking(move || provider.conditions(&location)).await;
    match lookup {
        Ok(Ok(conditions)) => Json(Success {
            success: true,
            report: Recommendation::new(conditions, None),
        })
        .into_response(),
        Ok(Err(err)) => {
            log::warn!("no conditions for {label:?}: {err}");
            let status = match err {
                ConditionsError::EmptyLocation => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            failure(status, err.to_string())
        }
        Err(err) => {
            log::error!("conditions lookup for {label:?} did not complete: {err}");
            failure(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ServeConfig, CliError> {
    let merged = ServeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ServeConfig::try_from(merged)
}
