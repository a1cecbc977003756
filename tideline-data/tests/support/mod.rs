//! Mocked OpenWeatherMap, Stormglass and NOAA endpoints on one local server.

use tokio::runtime::Runtime;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GEOCODE: &str = "/geo/1.0/direct";
pub const WEATHER: &str = "/data/2.5/weather";
pub const MARINE: &str = "/v2/weather/point";
pub const TIDES: &str = "/api/prod/datagetter";

/// A `wiremock` server driven from synchronous BDD steps.
///
/// Paths without a mounted mock answer 404.
pub struct MockServices {
    // Declared first so the server is released while the runtime is alive.
    server: MockServer,
    runtime: Runtime,
}

impl MockServices {
    pub fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap_or_else(|err| panic!("test runtime should build: {err}"));
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Answer every GET on `route` with `response`.
    pub fn respond(&self, route: &'static str, response: ResponseTemplate) {
        self.runtime.block_on(
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(response)
                .mount(&self.server),
        );
    }

    /// Answer the marine point request only when it carries `key` and the
    /// geocoded latitude, and expect exactly one such request.
    pub fn respond_to_marine(&self, key: &str, lat: &str, response: ResponseTemplate) {
        self.runtime.block_on(
            Mock::given(method("GET"))
                .and(path(MARINE))
                .and(header("authorization", key))
                .and(query_param("lat", lat))
                .respond_with(response)
                .expect(1)
                .mount(&self.server),
        );
    }

    /// Panic unless every mock with an expectation was satisfied.
    pub fn verify(&self) {
        self.runtime.block_on(self.server.verify());
    }
}

pub fn json(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

pub fn unavailable(status: u16) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(r#"{"message": "unavailable"}"#, "application/json")
}

pub const GEOCODE_BODY: &str = r#"[{"name": "San Diego", "lat": 32.7157, "lon": -117.1611}]"#;

pub const WEATHER_BODY: &str = r#"{
    "main": {"temp": 66.2, "pressure": 1016},
    "wind": {"speed": 12.3, "deg": 300},
    "clouds": {"all": 55}
}"#;

pub const MARINE_BODY: &str = r#"{"hours": [{
    "waveHeight": {"noaa": 1.2},
    "waveDirection": {"noaa": 250.0},
    "waterTemperature": {"noaa": 18.5},
    "currentSpeed": {"noaa": 0.6}
}]}"#;

pub const TIDE_BODY: &str = r#"{"predictions": [
    {"t": "2024-06-01 00:00", "v": "2.104"},
    {"t": "2024-06-01 01:00", "v": "1.262"}
]}"#;
