use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::client::Client;
use crate::error::Error;
use crate::model::{CommonOptions, Meta};
use crate::query::UrlBuilder;

/// Weather measurement channels available for a point request:
/// <https://docs.stormglass.io/#/weather?id=available-parameters>.
///
/// Every flag maps to exactly one canonical wire token, and the serialized
/// list follows field declaration order, so identical selections always
/// compile to identical query strings. The tokens are the same strings the
/// API uses as record keys in the response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct WeatherParams {
    pub time: bool,
    pub air_temperature: bool,
    pub air_temperature_80m: bool,
    pub air_temperature_100m: bool,
    pub air_temperature_1000hpa: bool,
    pub air_temperature_800hpa: bool,
    pub air_temperature_500hpa: bool,
    pub air_temperature_200hpa: bool,
    pub pressure: bool,
    pub cloud_cover: bool,
    pub current_direction: bool,
    pub current_speed: bool,
    pub gust: bool,
    pub humidity: bool,
    pub ice_cover: bool,
    pub precipitation: bool,
    pub snow_depth: bool,
    pub sea_level: bool,
    pub swell_direction: bool,
    pub swell_height: bool,
    pub swell_period: bool,
    pub secondary_swell_period: bool,
    pub secondary_swell_direction: bool,
    pub secondary_swell_height: bool,
    pub visibility: bool,
    pub water_temperature: bool,
    pub wave_direction: bool,
    pub wave_height: bool,
    pub wave_period: bool,
    pub wind_direction: bool,
    pub wind_direction_1000hpa: bool,
    pub wind_direction_100m: bool,
    pub wind_direction_200hpa: bool,
    pub wind_direction_20m: bool,
    pub wind_direction_30m: bool,
    pub wind_direction_40m: bool,
    pub wind_direction_500hpa: bool,
    pub wind_direction_50m: bool,
    pub wind_direction_800hpa: bool,
    pub wind_direction_80m: bool,
    pub wind_speed: bool,
    pub wind_speed_1000hpa: bool,
    pub wind_speed_100m: bool,
    pub wind_speed_200hpa: bool,
    pub wind_speed_20m: bool,
    pub wind_speed_30m: bool,
    pub wind_speed_40m: bool,
    pub wind_speed_500hpa: bool,
    pub wind_speed_50m: bool,
    pub wind_speed_800hpa: bool,
    pub wind_speed_80m: bool,
    pub wind_wave_direction: bool,
    pub wind_wave_height: bool,
    pub wind_wave_period: bool,
}

impl WeatherParams {
    /// Selects every channel.
    #[must_use]
    pub fn all() -> Self {
        Self {
            time: true,
            air_temperature: true,
            air_temperature_80m: true,
            air_temperature_100m: true,
            air_temperature_1000hpa: true,
            air_temperature_800hpa: true,
            air_temperature_500hpa: true,
            air_temperature_200hpa: true,
            pressure: true,
            cloud_cover: true,
            current_direction: true,
            current_speed: true,
            gust: true,
            humidity: true,
            ice_cover: true,
            precipitation: true,
            snow_depth: true,
            sea_level: true,
            swell_direction: true,
            swell_height: true,
            swell_period: true,
            secondary_swell_period: true,
            secondary_swell_direction: true,
            secondary_swell_height: true,
            visibility: true,
            water_temperature: true,
            wave_direction: true,
            wave_height: true,
            wave_period: true,
            wind_direction: true,
            wind_direction_1000hpa: true,
            wind_direction_100m: true,
            wind_direction_200hpa: true,
            wind_direction_20m: true,
            wind_direction_30m: true,
            wind_direction_40m: true,
            wind_direction_500hpa: true,
            wind_direction_50m: true,
            wind_direction_800hpa: true,
            wind_direction_80m: true,
            wind_speed: true,
            wind_speed_1000hpa: true,
            wind_speed_100m: true,
            wind_speed_200hpa: true,
            wind_speed_20m: true,
            wind_speed_30m: true,
            wind_speed_40m: true,
            wind_speed_500hpa: true,
            wind_speed_50m: true,
            wind_speed_800hpa: true,
            wind_speed_80m: true,
            wind_wave_direction: true,
            wind_wave_height: true,
            wind_wave_period: true,
        }
    }

    /// Canonical tokens for the selected channels, in declaration order.
    ///
    /// All flags off yields an empty list; callers omit the query parameter
    /// in that case.
    pub fn to_tokens(&self) -> Vec<&'static str> {
        let pairs = [
            (self.time, "time"),
            (self.air_temperature, "airTemperature"),
            (self.air_temperature_80m, "airTemperature80m"),
            (self.air_temperature_100m, "airTemperature100m"),
            (self.air_temperature_1000hpa, "airTemperature1000hpa"),
            (self.air_temperature_800hpa, "airTemperature800hpa"),
            (self.air_temperature_500hpa, "airTemperature500hpa"),
            (self.air_temperature_200hpa, "airTemperature200hpa"),
            (self.pressure, "pressure"),
            (self.cloud_cover, "cloudCover"),
            (self.current_direction, "currentDirection"),
            (self.current_speed, "currentSpeed"),
            (self.gust, "gust"),
            (self.humidity, "humidity"),
            (self.ice_cover, "iceCover"),
            (self.precipitation, "precipitation"),
            (self.snow_depth, "snowDepth"),
            (self.sea_level, "seaLevel"),
            (self.swell_direction, "swellDirection"),
            (self.swell_height, "swellHeight"),
            (self.swell_period, "swellPeriod"),
            (self.secondary_swell_period, "secondarySwellPeriod"),
            (self.secondary_swell_direction, "secondarySwellDirection"),
            (self.secondary_swell_height, "secondarySwellHeight"),
            (self.visibility, "visibility"),
            (self.water_temperature, "waterTemperature"),
            (self.wave_direction, "waveDirection"),
            (self.wave_height, "waveHeight"),
            (self.wave_period, "wavePeriod"),
            (self.wind_direction, "windDirection"),
            (self.wind_direction_1000hpa, "windDirection1000hpa"),
            (self.wind_direction_100m, "windDirection100m"),
            (self.wind_direction_200hpa, "windDirection200hpa"),
            (self.wind_direction_20m, "windDirection20m"),
            (self.wind_direction_30m, "windDirection30m"),
            (self.wind_direction_40m, "windDirection40m"),
            (self.wind_direction_500hpa, "windDirection500hpa"),
            (self.wind_direction_50m, "windDirection50m"),
            (self.wind_direction_800hpa, "windDirection800hpa"),
            (self.wind_direction_80m, "windDirection80m"),
            (self.wind_speed, "windSpeed"),
            (self.wind_speed_1000hpa, "windSpeed1000hpa"),
            (self.wind_speed_100m, "windSpeed100m"),
            (self.wind_speed_200hpa, "windSpeed200hpa"),
            (self.wind_speed_20m, "windSpeed20m"),
            (self.wind_speed_30m, "windSpeed30m"),
            (self.wind_speed_40m, "windSpeed40m"),
            (self.wind_speed_500hpa, "windSpeed500hpa"),
            (self.wind_speed_50m, "windSpeed50m"),
            (self.wind_speed_800hpa, "windSpeed800hpa"),
            (self.wind_speed_80m, "windSpeed80m"),
            (self.wind_wave_direction, "windWaveDirection"),
            (self.wind_wave_height, "windWaveHeight"),
            (self.wind_wave_period, "windWavePeriod"),
        ];

        pairs
            .iter()
            .filter(|(enabled, _)| *enabled)
            .map(|&(_, token)| token)
            .collect()
    }
}

/// Upstream models and agencies a request can be restricted to:
/// <https://docs.stormglass.io/#/sources?id=available-sources>.
///
/// Tokens are the short source identifiers the API uses, e.g. `meto` for the
/// UK Met Office and `sg` for Storm Glass itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeatherSources {
    pub icon: bool,
    pub dwd: bool,
    pub noaa: bool,
    pub meteo_france: bool,
    pub uk_met_office: bool,
    pub fcoo: bool,
    pub fmi: bool,
    pub yr: bool,
    pub smhi: bool,
    pub storm_glass: bool,
}

impl WeatherSources {
    /// Selects every source.
    #[must_use]
    pub fn all() -> Self {
        Self {
            icon: true,
            dwd: true,
            noaa: true,
            meteo_france: true,
            uk_met_office: true,
            fcoo: true,
            fmi: true,
            yr: true,
            smhi: true,
            storm_glass: true,
        }
    }

    /// Canonical tokens for the selected sources, in declaration order.
    pub fn to_tokens(&self) -> Vec<&'static str> {
        let pairs = [
            (self.icon, "icon"),
            (self.dwd, "dwd"),
            (self.noaa, "noaa"),
            (self.meteo_france, "meteo"),
            (self.uk_met_office, "meto"),
            (self.fcoo, "fcoo"),
            (self.fmi, "fmi"),
            (self.yr, "yr"),
            (self.smhi, "smhi"),
            (self.storm_glass, "sg"),
        ];

        pairs
            .iter()
            .filter(|(enabled, _)| *enabled)
            .map(|&(_, token)| token)
            .collect()
    }
}

/// Per-source estimates for one measurement channel.
///
/// Keys are source tokens (`sg`, `noaa`, ...); every source reports an
/// independent estimate of the same physical quantity, and sources without
/// data for the channel are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SourceValues(pub BTreeMap<String, f64>);

impl SourceValues {
    pub fn get(&self, source: &str) -> Option<f64> {
        self.0.get(source).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One hourly record.
///
/// Channels are keyed by the same tokens they were requested with; only the
/// requested channels appear.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Hour {
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub channels: BTreeMap<String, SourceValues>,
}

impl Hour {
    /// Value a given source reported for a given channel, if any.
    pub fn value(&self, channel: &str, source: &str) -> Option<f64> {
        self.channels.get(channel).and_then(|v| v.get(source))
    }
}

/// Point Weather response payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Points {
    pub hours: Vec<Hour>,
    pub meta: Meta,
}

/// Options for [`Client::get_point_weather`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointRequestOptions {
    pub common: CommonOptions,
    pub params: WeatherParams,
    pub sources: WeatherSources,
}

impl Client {
    /// Requests hourly weather data for a single point:
    /// <https://docs.stormglass.io/#/weather?id=point-request>.
    pub async fn get_point_weather(
        &self,
        options: PointRequestOptions,
    ) -> Result<Points, Error> {
        let url = UrlBuilder::new(self.base_url(), &["weather", "point"])?
            .coordinates(options.common.lat, options.common.lng)
            .tokens("params", &options.params.to_tokens())
            .window(options.common.start, options.common.end)
            .tokens("source", &options.sources.to_tokens())
            .finish();

        self.get_json(url).await
    }
}
