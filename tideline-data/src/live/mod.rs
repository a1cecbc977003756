//! Conditions from live weather, marine and tide services.
//!
//! [`LiveConditionsProvider`] implements [`tideline_core::ConditionsProvider`]
//! by querying, in order:
//!
//! 1. OpenWeatherMap geocoding and current weather (needs an API key);
//! 2. the Stormglass marine point forecast at the geocoded coordinates
//!    (needs an API key and step 1);
//! 3. NOAA CO-OPS tide predictions for a configured station.
//!
//! A failing step is logged and skipped. The readings that did arrive are
//! merged. Without a weather report the record is taken to be dry at 70 °F;
//! any other gaps are filled from a simulation for the same location.
//!
//! # Architecture
//!
//! The provider trait is synchronous to keep the core library embeddable in
//! synchronous contexts. This provider bridges async `reqwest` calls to the
//! sync interface by blocking on a Tokio runtime internally.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use tideline_core::ConditionsProvider;
//! use tideline_data::{LiveConditionsConfig, LiveConditionsProvider};
//!
//! let config = LiveConditionsConfig::new()
//!     .with_openweather_api_key("owm-key")
//!     .with_stormglass_api_key("sg-key")
//!     .with_timeout(Duration::from_secs(10));
//! let provider = LiveConditionsProvider::with_config(config)?;
//!
//! let conditions = provider.conditions("Santa Cruz, CA")?;
//! println!("{} from {}", conditions.wave_height, conditions.source_label());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod noaa;
mod openweather;
mod provider;
mod stormglass;

pub use noaa::DEFAULT_STATION;
pub use provider::{
    DEFAULT_NOAA_BASE_URL, DEFAULT_OPENWEATHER_BASE_URL, DEFAULT_STORMGLASS_BASE_URL,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, LiveConditionsConfig, LiveConditionsProvider,
    ProviderBuildError,
};
