use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::client::Client;
use crate::error::Error;
use crate::model::{CommonOptions, Meta};
use crate::query::UrlBuilder;

/// Vertical reference plane tide heights are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Datum {
    /// Mean sea level.
    Msl,
    /// Mean lower low water.
    Mllw,
}

impl Datum {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Msl => "msl",
            Self::Mllw => "mllw",
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// High or low water classification of an extreme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtremeKind {
    High,
    Low,
    /// Classification reported by the server that this client does not know.
    #[serde(other)]
    Unknown,
}

/// One predicted tide extreme.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Extreme {
    /// Height relative to the requested datum, in meters.
    #[serde(default)]
    pub height: f64,

    pub time: DateTime<Utc>,

    #[serde(rename = "type")]
    pub kind: ExtremeKind,
}

/// Tide station the prediction is based on.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Station {
    pub name: String,
    pub source: String,
    /// Distance from the requested point, in kilometers.
    pub distance: f64,
    pub lat: f64,
    pub lng: f64,
}

/// Metadata block for a tide extremes response: the shared request echo plus
/// the nearest station.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExtremesMeta {
    #[serde(flatten)]
    pub common: Meta,

    #[serde(default)]
    pub station: Station,
}

/// Tide Extremes response payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExtremesPoints {
    pub data: Vec<Extreme>,
    pub meta: ExtremesMeta,
}

/// Options for [`Client::get_tide_extremes`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExtremesRequestOptions {
    pub common: CommonOptions,

    /// Omitted from the query when `None`; the server then applies its
    /// default datum.
    pub datum: Option<Datum>,
}

impl Client {
    /// Requests predicted high/low tide events around a single point:
    /// <https://docs.stormglass.io/#/tide?id=extremes-point-request>.
    pub async fn get_tide_extremes(
        &self,
        options: ExtremesRequestOptions,
    ) -> Result<ExtremesPoints, Error> {
        let url = UrlBuilder::new(self.base_url(), &["tide", "extremes", "point"])?
            .coordinates(options.common.lat, options.common.lng)
            .window(options.common.start, options.common.end)
            .scalar("datum", options.datum.map(Datum::as_str))
            .finish();

        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datum_tokens_are_fixed() {
        assert_eq!(Datum::Msl.as_str(), "msl");
        assert_eq!(Datum::Mllw.as_str(), "mllw");
        assert_eq!(Datum::Mllw.to_string(), "mllw");
    }

    #[test]
    fn extreme_decodes_high_and_low() {
        let extremes: Vec<Extreme> = serde_json::from_str(
            r#"[
                {"height": 0.42, "time": "2023-06-01T03:12:00+00:00", "type": "high"},
                {"height": -0.38, "time": "2023-06-01T09:40:00+00:00", "type": "low"}
            ]"#,
        )
        .expect("extremes should decode");

        assert_eq!(extremes.len(), 2);
        assert_eq!(extremes[0].kind, ExtremeKind::High);
        assert_eq!(extremes[1].kind, ExtremeKind::Low);
        assert!(extremes[1].height < 0.0);
    }

    #[test]
    fn unknown_extreme_kind_does_not_fail_decoding() {
        let extreme: Extreme = serde_json::from_str(
            r#"{"height": 0.1, "time": "2023-06-01T03:12:00+00:00", "type": "slack"}"#,
        )
        .expect("extreme should decode");

        assert_eq!(extreme.kind, ExtremeKind::Unknown);
    }

    #[test]
    fn meta_decodes_station_and_request_echo() {
        let meta: ExtremesMeta = serde_json::from_str(
            r#"{
                "cost": 1,
                "dailyQuota": 50,
                "lat": 58.7984,
                "lng": 17.8081,
                "datum": "mllw",
                "station": {
                    "name": "Landsort",
                    "source": "sg",
                    "distance": 12.3,
                    "lat": 58.74,
                    "lng": 17.87
                }
            }"#,
        )
        .expect("meta should decode");

        assert_eq!(meta.common.cost, Some(1));
        assert_eq!(meta.common.lat, Some(58.7984));
        assert_eq!(meta.station.name, "Landsort");
        assert_eq!(meta.station.source, "sg");
        assert!((meta.station.distance - 12.3).abs() < f64::EPSILON);
    }

    #[test]
    fn extremes_points_decodes_empty_body() {
        let res: ExtremesPoints = serde_json::from_str("{}").expect("payload should decode");

        assert!(res.data.is_empty());
        assert_eq!(res.meta.station, Station::default());
    }
}
