//! Client library for the [Storm Glass](https://stormglass.io) marine weather API.
//!
//! This crate defines:
//! - A [`Client`] with typed accessors for the Point Weather and Tide
//!   Extremes resources
//! - Option sets that compile to canonical, deterministic query strings
//! - A structured envelope for API errors
//!
//! ```no_run
//! use stormglass::{Client, CommonOptions, PointRequestOptions, WeatherParams};
//!
//! # async fn run() -> Result<(), stormglass::Error> {
//! let client = Client::new("api-key");
//!
//! let points = client
//!     .get_point_weather(PointRequestOptions {
//!         common: CommonOptions { lat: 58.7984, lng: 17.8081, ..Default::default() },
//!         params: WeatherParams { wave_height: true, ..Default::default() },
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for hour in &points.hours {
//!     println!("{:?}: {:?}", hour.time, hour.value("waveHeight", "sg"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod model;
mod query;
pub mod tide;
pub mod weather;

pub use client::{BASE_URL_V2, Client, DEFAULT_TIMEOUT};
pub use config::Config;
pub use error::{ApiError, Error};
pub use model::{CommonOptions, Meta};
pub use tide::{
    Datum, Extreme, ExtremeKind, ExtremesMeta, ExtremesPoints, ExtremesRequestOptions, Station,
};
pub use weather::{
    Hour, PointRequestOptions, Points, SourceValues, WeatherParams, WeatherSources,
};
