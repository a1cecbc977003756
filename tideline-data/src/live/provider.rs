//! HTTP-backed `ConditionsProvider`.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use tideline_core::{Conditions, ConditionsError, ConditionsProvider, require_location};

use super::noaa::{self, DEFAULT_STATION, TideResponse};
use super::openweather::{self, Coordinates, WeatherResponse};
use super::stormglass::{self, MarineResponse};
use crate::{PartialConditions, SimulatedConditionsProvider};

/// Error type for [`LiveConditionsProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// A service base URL could not be parsed.
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// A service base URL cannot carry a path, e.g. `mailto:`.
    #[error("base URL '{url}' cannot be used for HTTP requests")]
    UnsupportedBaseUrl {
        /// The rejected URL.
        url: String,
    },
}

/// Default user agent for service requests.
pub const DEFAULT_USER_AGENT: &str = "tideline/0.1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default OpenWeatherMap API root.
pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";
/// Default Stormglass API root.
pub const DEFAULT_STORMGLASS_BASE_URL: &str = "https://api.stormglass.io";
/// Default NOAA CO-OPS API root.
pub const DEFAULT_NOAA_BASE_URL: &str = "https://api.tidesandcurrents.noaa.gov";

/// Query parameters whose values never appear in logs or errors.
const SECRET_PARAMS: [&str; 1] = ["appid"];

/// Configuration for [`LiveConditionsProvider`].
///
/// A missing API key disables the step that needs it.
#[derive(Clone)]
pub struct LiveConditionsConfig {
    /// OpenWeatherMap API key.
    pub openweather_api_key: Option<String>,
    /// Stormglass API key.
    pub stormglass_api_key: Option<String>,
    /// NOAA CO-OPS station identifier.
    pub noaa_station: String,
    /// OpenWeatherMap API root.
    pub openweather_base_url: String,
    /// Stormglass API root.
    pub stormglass_base_url: String,
    /// NOAA CO-OPS API root.
    pub noaa_base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// Seed for the simulation that fills missing readings; random when
    /// `None`.
    pub gap_fill_seed: Option<u64>,
}

impl fmt::Debug for LiveConditionsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |key: &Option<String>| key.as_ref().map(|_| "<redacted>");
        f.debug_struct("LiveConditionsConfig")
            .field("openweather_api_key", &mask(&self.openweather_api_key))
            .field("stormglass_api_key", &mask(&self.stormglass_api_key))
            .field("noaa_station", &self.noaa_station)
            .field("openweather_base_url", &self.openweather_base_url)
            .field("stormglass_base_url", &self.stormglass_base_url)
            .field("noaa_base_url", &self.noaa_base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("gap_fill_seed", &self.gap_fill_seed)
            .finish()
    }
}

impl Default for LiveConditionsConfig {
    fn default() -> Self {
        Self {
            openweather_api_key: None,
            stormglass_api_key: None,
            noaa_station: DEFAULT_STATION.to_owned(),
            openweather_base_url: DEFAULT_OPENWEATHER_BASE_URL.to_owned(),
            stormglass_base_url: DEFAULT_STORMGLASS_BASE_URL.to_owned(),
            noaa_base_url: DEFAULT_NOAA_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            gap_fill_seed: None,
        }
    }
}

impl LiveConditionsConfig {
    /// Create a configuration with the public service endpoints and no keys.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the OpenWeatherMap step.
    #[must_use]
    pub fn with_openweather_api_key(mut self, key: impl Into<String>) -> Self {
        self.openweather_api_key = Some(key.into());
        self
    }

    /// Enable the Stormglass step.
    #[must_use]
    pub fn with_stormglass_api_key(mut self, key: impl Into<String>) -> Self {
        self.stormglass_api_key = Some(key.into());
        self
    }

    /// Set the NOAA tide station.
    #[must_use]
    pub fn with_noaa_station(mut self, station: impl Into<String>) -> Self {
        self.noaa_station = station.into();
        self
    }

    /// Point the OpenWeatherMap step at another host.
    #[must_use]
    pub fn with_openweather_base_url(mut self, url: impl Into<String>) -> Self {
        self.openweather_base_url = url.into();
        self
    }

    /// Point the Stormglass step at another host.
    #[must_use]
    pub fn with_stormglass_base_url(mut self, url: impl Into<String>) -> Self {
        self.stormglass_base_url = url.into();
        self
    }

    /// Point the NOAA step at another host.
    #[must_use]
    pub fn with_noaa_base_url(mut self, url: impl Into<String>) -> Self {
        self.noaa_base_url = url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Fix the seed used to fill missing readings.
    #[must_use]
    pub fn with_gap_fill_seed(mut self, seed: u64) -> Self {
        self.gap_fill_seed = Some(seed);
        self
    }
}

/// Parsed service roots.
#[derive(Debug, Clone)]
struct Endpoints {
    openweather: Url,
    stormglass: Url,
    noaa: Url,
}

impl Endpoints {
    fn from_config(config: &LiveConditionsConfig) -> Result<Self, ProviderBuildError> {
        Ok(Self {
            openweather: parse_base(&config.openweather_base_url)?,
            stormglass: parse_base(&config.stormglass_base_url)?,
            noaa: parse_base(&config.noaa_base_url)?,
        })
    }
}

fn parse_base(raw: &str) -> Result<Url, ProviderBuildError> {
    let url = Url::parse(raw).map_err(|source| ProviderBuildError::InvalidBaseUrl {
        url: raw.to_owned(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ProviderBuildError::UnsupportedBaseUrl {
            url: raw.to_owned(),
        });
    }
    Ok(url)
}

/// Append `path` to `base` and replace the query with `query`.
fn endpoint(base: &Url, path: &str, query: &[(&str, &str)]) -> Url {
    let mut url = base.clone();
    let joined = format!("{}{path}", base.path().trim_end_matches('/'));
    url.set_path(&joined);
    url.query_pairs_mut().clear().extend_pairs(query);
    url
}

/// Render `url` with secret query values masked.
fn redact(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if SECRET_PARAMS.contains(&key.as_ref()) {
                "REDACTED".to_owned()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    let mut shown = url.clone();
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.into()
}

/// Conditions from OpenWeatherMap, Stormglass and NOAA.
///
/// This provider implements the synchronous [`ConditionsProvider`] trait by
/// internally blocking on asynchronous HTTP requests. It owns a Tokio
/// runtime that is reused across calls.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the provider blocks on its own runtime. Inside
/// a multi-threaded runtime it uses that runtime's handle with
/// [`tokio::task::block_in_place`]. Inside a `current_thread` runtime it
/// drives its own runtime from a scoped helper thread, since blocking that
/// runtime's only worker would panic.
///
/// The provider must be dropped outside asynchronous contexts, as dropping
/// a Tokio runtime there panics.
pub struct LiveConditionsProvider {
    client: Client,
    config: LiveConditionsConfig,
    endpoints: Endpoints,
    simulation: SimulatedConditionsProvider,
    runtime: Runtime,
}

impl fmt::Debug for LiveConditionsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveConditionsProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("simulation", &self.simulation)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

impl LiveConditionsProvider {
    /// Create a provider using the public endpoints and the given keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(
        openweather_api_key: Option<String>,
        stormglass_api_key: Option<String>,
    ) -> Result<Self, ProviderBuildError> {
        Self::with_config(LiveConditionsConfig {
            openweather_api_key,
            stormglass_api_key,
            ..LiveConditionsConfig::default()
        })
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a base URL is invalid, or if the HTTP client or
    /// Tokio runtime fails to build.
    pub fn with_config(config: LiveConditionsConfig) -> Result<Self, ProviderBuildError> {
        let endpoints = Endpoints::from_config(&config)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        let simulation = config
            .gap_fill_seed
            .map_or_else(SimulatedConditionsProvider::from_entropy, SimulatedConditionsProvider::new);
        Ok(Self {
            client,
            config,
            endpoints,
            simulation,
            runtime,
        })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &LiveConditionsConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        authorization: Option<&str>,
    ) -> Result<T, ConditionsError> {
        let shown = redact(&url);
        log::debug!("GET {shown}");
        let mut request = self.client.get(url);
        if let Some(key) = authorization {
            request = request.header(AUTHORIZATION, key);
        }
        let response = request
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(err, &shown))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(err, &shown))?;
        response.json().await.map_err(|err| {
            if err.is_decode() {
                ConditionsError::Parse {
                    message: err.without_url().to_string(),
                }
            } else {
                self.convert_reqwest_error(err, &shown)
            }
        })
    }

    /// Convert a reqwest error to a `ConditionsError`.
    ///
    /// The URL is stripped from the message since it may carry a key.
    fn convert_reqwest_error(&self, error: reqwest::Error, url: &str) -> ConditionsError {
        if error.is_timeout() {
            return ConditionsError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return ConditionsError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.without_url().to_string(),
            };
        }

        ConditionsError::Network {
            url: url.to_owned(),
            message: error.without_url().to_string(),
        }
    }

    async fn fetch_weather(
        &self,
        location: &str,
        key: &str,
    ) -> Result<(Coordinates, PartialConditions), ConditionsError> {
        let geocode = endpoint(
            &self.endpoints.openweather,
            openweather::GEOCODE_PATH,
            &[("q", location), ("limit", "1"), ("appid", key)],
        );
        let matches: Vec<Coordinates> = self.get_json(geocode, None).await?;
        let coordinates = openweather::first_match(matches, location)?;

        let lat = coordinates.lat.to_string();
        let lon = coordinates.lon.to_string();
        let current = endpoint(
            &self.endpoints.openweather,
            openweather::WEATHER_PATH,
            &[("lat", lat.as_str()), ("lon", lon.as_str()), ("appid", key), ("units", "imperial")],
        );
        let weather: WeatherResponse = self.get_json(current, None).await?;
        Ok((coordinates, weather.into_partial()))
    }

    async fn fetch_marine(
        &self,
        coordinates: Coordinates,
        key: &str,
        wind_speed: Option<f64>,
    ) -> Result<PartialConditions, ConditionsError> {
        let lat = coordinates.lat.to_string();
        let lng = coordinates.lon.to_string();
        let url = endpoint(
            &self.endpoints.stormglass,
            stormglass::POINT_PATH,
            &[("lat", lat.as_str()), ("lng", lng.as_str()), ("params", stormglass::PARAMS)],
        );
        let marine: MarineResponse = self.get_json(url, Some(key)).await?;
        marine.into_partial(wind_speed)
    }

    async fn fetch_tide(&self) -> Result<PartialConditions, ConditionsError> {
        let url = endpoint(
            &self.endpoints.noaa,
            noaa::DATAGETTER_PATH,
            &noaa::query(&self.config.noaa_station),
        );
        let tide: TideResponse = self.get_json(url, None).await?;
        tide.into_partial()
    }

    /// Run every configured step, skipping the ones that fail.
    async fn gather(&self, location: &str) -> PartialConditions {
        let mut partial = PartialConditions::default();
        let mut coordinates = None;

        if let Some(key) = self.config.openweather_api_key.as_deref() {
            match self.fetch_weather(location, key).await {
                Ok((found, weather)) => {
                    coordinates = Some(found);
                    partial = partial.merge(weather);
                }
                Err(err) => log::warn!("skipping OpenWeatherMap for '{location}': {err}"),
            }
        } else {
            log::debug!("no OpenWeatherMap API key; skipping weather");
        }

        match (self.config.stormglass_api_key.as_deref(), coordinates) {
            (Some(key), Some(found)) => {
                match self.fetch_marine(found, key, partial.wind_speed).await {
                    Ok(marine) => partial = partial.merge(marine),
                    Err(err) => log::warn!("skipping Stormglass for '{location}': {err}"),
                }
            }
            (Some(_), None) => log::debug!("Stormglass needs coordinates; skipping marine data"),
            (None, _) => log::debug!("no Stormglass API key; skipping marine data"),
        }

        match self.fetch_tide().await {
            Ok(tide) => partial = partial.merge(tide),
            Err(err) => log::warn!(
                "skipping NOAA station {} for '{location}': {err}",
                self.config.noaa_station
            ),
        }

        partial
    }

    /// Drive `future` to completion from synchronous code.
    fn block_on<F>(&self, future: F) -> F::Output
    where
        F: Future + Send,
        F::Output: Send,
    {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            Ok(_) => std::thread::scope(|scope| {
                match scope.spawn(|| self.runtime.block_on(future)).join() {
                    Ok(output) => output,
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }),
            Err(_) => self.runtime.block_on(future),
        }
    }
}

impl ConditionsProvider for LiveConditionsProvider {
    /// Fetch live readings for `location`.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionsError::EmptyLocation`] for blank input and
    /// [`ConditionsError::NoData`] when every step failed or was disabled.
    fn conditions(&self, location: &str) -> Result<Conditions, ConditionsError> {
        let location = require_location(location)?;
        let gathered = self.block_on(self.gather(location));
        if gathered.is_empty() {
            return Err(ConditionsError::NoData {
                location: location.to_owned(),
            });
        }
        let sources: Vec<&str> = gathered.sources.iter().map(|s| s.as_str()).collect();
        log::info!("conditions for '{location}' from {}", sources.join(" + "));
        Ok(gathered
            .assume_fair_weather()
            .complete(self.simulation.generate(location)))
    }
}
