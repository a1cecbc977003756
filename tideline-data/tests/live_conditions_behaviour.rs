//! Behavioural tests for `LiveConditionsProvider`.
//!
//! A `wiremock` server stands in for OpenWeatherMap, Stormglass and NOAA so
//! the whole request pipeline runs without network access.

mod support;

use std::cell::RefCell;
use std::time::Duration;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tideline_core::{CompassPoint, Conditions, ConditionsError, ConditionsProvider, DataSource};
use tideline_data::{
    ASSUMED_AIR_TEMPERATURE_F, FallbackConditionsProvider, LiveConditionsConfig,
    LiveConditionsProvider, SimulatedConditionsProvider,
};

use support::{
    GEOCODE, GEOCODE_BODY, MARINE, MARINE_BODY, MockServices, TIDE_BODY, TIDES, WEATHER,
    WEATHER_BODY, json, unavailable,
};

/// Result cell holding the outcome of a conditions request.
type ResultCell = RefCell<Option<Result<Conditions, ConditionsError>>>;

const SIMULATION_SEED: u64 = 11;
const STORMGLASS_KEY: &str = "sg-key";

#[fixture]
fn server() -> RefCell<Option<MockServices>> {
    RefCell::new(None)
}

#[fixture]
fn result() -> ResultCell {
    RefCell::new(None)
}

fn live_provider(services: &MockServices) -> LiveConditionsProvider {
    let base_url = services.base_url();
    let config = LiveConditionsConfig::new()
        .with_openweather_api_key("owm-key")
        .with_stormglass_api_key(STORMGLASS_KEY)
        .with_openweather_base_url(base_url.clone())
        .with_stormglass_base_url(base_url.clone())
        .with_noaa_base_url(base_url)
        .with_timeout(Duration::from_secs(5))
        .with_gap_fill_seed(SIMULATION_SEED);
    LiveConditionsProvider::with_config(config)
        .unwrap_or_else(|err| panic!("provider should build: {err}"))
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// --- Given steps ---

#[given("all three services are answering")]
fn all_answering(#[from(server)] server: &RefCell<Option<MockServices>>) {
    let services = MockServices::start();
    services.respond(GEOCODE, json(GEOCODE_BODY));
    services.respond(WEATHER, json(WEATHER_BODY));
    services.respond_to_marine(STORMGLASS_KEY, "32.7157", json(MARINE_BODY));
    services.respond(TIDES, json(TIDE_BODY));
    *server.borrow_mut() = Some(services);
}

#[given("the weather service is down")]
fn weather_down(#[from(server)] server: &RefCell<Option<MockServices>>) {
    let services = MockServices::start();
    services.respond(GEOCODE, unavailable(503));
    services.respond(MARINE, json(MARINE_BODY));
    services.respond(TIDES, json(TIDE_BODY));
    *server.borrow_mut() = Some(services);
}

#[given("the location cannot be geocoded")]
fn not_geocoded(#[from(server)] server: &RefCell<Option<MockServices>>) {
    let services = MockServices::start();
    services.respond(GEOCODE, json("[]"));
    services.respond(WEATHER, json(WEATHER_BODY));
    services.respond(MARINE, json(MARINE_BODY));
    services.respond(TIDES, json(TIDE_BODY));
    *server.borrow_mut() = Some(services);
}

#[given("every service is down")]
fn all_down(#[from(server)] server: &RefCell<Option<MockServices>>) {
    let services = MockServices::start();
    services.respond(GEOCODE, unavailable(503));
    services.respond(WEATHER, unavailable(503));
    services.respond(MARINE, unavailable(503));
    services.respond(TIDES, unavailable(500));
    *server.borrow_mut() = Some(services);
}

// --- When steps ---

#[when("I request live conditions for San Diego")]
fn request_live(
    #[from(server)] server: &RefCell<Option<MockServices>>,
    #[from(result)] result: &ResultCell,
) {
    let guard = server.borrow();
    let services = guard.as_ref().expect("server must be started");
    let provider = live_provider(services);
    *result.borrow_mut() = Some(provider.conditions("San Diego, CA"));
}

#[when("I request conditions for San Diego with a simulated fallback")]
fn request_with_fallback(
    #[from(server)] server: &RefCell<Option<MockServices>>,
    #[from(result)] result: &ResultCell,
) {
    let guard = server.borrow();
    let services = guard.as_ref().expect("server must be started");
    let provider = FallbackConditionsProvider::new(
        live_provider(services),
        SimulatedConditionsProvider::new(SIMULATION_SEED),
    );
    *result.borrow_mut() = Some(provider.conditions("San Diego, CA"));
}

// --- Then steps ---

#[then("the record merges readings from every service")]
fn merged_record(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    let conditions = match borrowed.as_ref() {
        Some(Ok(conditions)) => conditions,
        other => panic!("expected conditions, got {other:?}"),
    };
    assert_eq!(
        conditions.sources,
        vec![
            DataSource::OpenWeatherMap,
            DataSource::Stormglass,
            DataSource::Noaa
        ]
    );
    assert_close(conditions.temperature, 66.0);
    assert_close(conditions.pressure, 30.0);
    assert_close(conditions.wind_speed, 12.3);
    assert_eq!(conditions.wind_direction, CompassPoint::NW);
    assert_eq!(conditions.cloud_cover, 55);
    assert!(!conditions.has_precipitation);
    assert_close(conditions.wave_height, 3.9);
    assert_eq!(conditions.swell_direction, CompassPoint::W);
    assert_close(conditions.water_temperature, 65.0);
    assert_close(conditions.current, 1.2);
    assert_close(conditions.visibility, 35.0);
    assert_close(conditions.tide, 1.3);
    assert_eq!(conditions.location, "San Diego, CA");
}

#[then("the marine request carried the Stormglass key")]
fn marine_authorised(#[from(server)] server: &RefCell<Option<MockServices>>) {
    let guard = server.borrow();
    guard.as_ref().expect("server must be started").verify();
}

#[then("only the tide reading is live")]
fn tide_only(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    let conditions = match borrowed.as_ref() {
        Some(Ok(conditions)) => conditions,
        other => panic!("expected conditions, got {other:?}"),
    };
    assert_eq!(conditions.sources, vec![DataSource::Noaa]);
    assert_close(conditions.tide, 1.3);

    let simulated = SimulatedConditionsProvider::new(SIMULATION_SEED).generate("San Diego, CA");
    assert_close(conditions.wave_height, simulated.wave_height);
    assert_close(conditions.pressure, simulated.pressure);
}

#[then("the weather is assumed fair")]
fn fair_weather(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    let conditions = match borrowed.as_ref() {
        Some(Ok(conditions)) => conditions,
        other => panic!("expected conditions, got {other:?}"),
    };
    assert!(!conditions.has_precipitation);
    assert_close(conditions.precipitation, 0.0);
    assert_close(conditions.temperature, ASSUMED_AIR_TEMPERATURE_F);
}

#[then("a no-data error is returned")]
fn no_data(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    assert!(
        matches!(&*borrowed, Some(Err(ConditionsError::NoData { location })) if location == "San Diego, CA"),
        "expected NoData, got {borrowed:?}"
    );
}

#[then("the simulated record is returned")]
fn simulated(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    let expected = SimulatedConditionsProvider::new(SIMULATION_SEED).generate("San Diego, CA");
    match borrowed.as_ref() {
        Some(Ok(conditions)) => assert_eq!(conditions, &expected),
        other => panic!("expected simulated conditions, got {other:?}"),
    }
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/live_conditions.feature", name = $title)]
        fn $fn_name(server: RefCell<Option<MockServices>>, result: ResultCell) {
            let _ = (server, result);
        }
    };
}

register_scenario!(every_service_answers, "Every service answers");
register_scenario!(weather_service_down, "The weather service is down");
register_scenario!(location_not_geocoded, "The location cannot be geocoded");
register_scenario!(every_service_down, "Every service is down");
register_scenario!(falling_back_to_simulation, "Falling back to the simulation");
