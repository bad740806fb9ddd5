use chrono::{DateTime, Utc};
use url::Url;

use crate::error::Error;

/// Assembles the canonical request URL for a resource.
///
/// Query parameters are appended in one fixed order (`lat`, `lng`, `params`,
/// `start`, `end`, `source`, then resource-specific scalars) so identical
/// options always produce a byte-identical URL. Optional values are omitted
/// entirely, never sent empty.
#[derive(Debug)]
pub(crate) struct UrlBuilder {
    url: Url,
}

impl UrlBuilder {
    /// Joins the base URL with the resource path segments.
    ///
    /// A base that cannot be parsed, or that cannot take path segments, is a
    /// configuration error and fails immediately with [`Error::InvalidUrl`].
    pub(crate) fn new(base: &str, segments: &[&str]) -> Result<Self, Error> {
        let mut url = Url::parse(base).map_err(|e| Error::InvalidUrl(format!("{base}: {e}")))?;

        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(format!("{base}: cannot be a base")))?
            .pop_if_empty()
            .extend(segments);

        Ok(Self { url })
    }

    /// Sets `lat` and `lng` as fixed-precision decimal text.
    pub(crate) fn coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.url
            .query_pairs_mut()
            .append_pair("lat", &format_degrees(lat))
            .append_pair("lng", &format_degrees(lng));
        self
    }

    /// Sets `start`/`end` as Unix-seconds integers; absent bounds are skipped.
    pub(crate) fn window(mut self, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        if let Some(start) = start {
            self.url
                .query_pairs_mut()
                .append_pair("start", &start.timestamp().to_string());
        }

        if let Some(end) = end {
            self.url
                .query_pairs_mut()
                .append_pair("end", &end.timestamp().to_string());
        }

        self
    }

    /// Sets `key` to the comma-joined token list; an empty list is skipped.
    pub(crate) fn tokens(mut self, key: &str, tokens: &[&str]) -> Self {
        if !tokens.is_empty() {
            self.url
                .query_pairs_mut()
                .append_pair(key, &tokens.join(","));
        }
        self
    }

    /// Sets a resource-specific scalar; `None` is skipped.
    pub(crate) fn scalar(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.url.query_pairs_mut().append_pair(key, value);
        }
        self
    }

    pub(crate) fn finish(self) -> Url {
        self.url
    }
}

/// Both resources use the same textual format for coordinates.
fn format_degrees(value: f64) -> String {
    format!("{value:.6}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn query_pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn joins_base_and_segments_without_doubled_slashes() {
        let url = UrlBuilder::new("https://api.stormglass.io/v2", &["weather", "point"])
            .expect("base should parse")
            .finish();

        assert_eq!(url.path(), "/v2/weather/point");

        let url = UrlBuilder::new("https://api.stormglass.io/v2/", &["tide", "extremes", "point"])
            .expect("base should parse")
            .finish();

        assert_eq!(url.path(), "/v2/tide/extremes/point");
    }

    #[test]
    fn rejects_malformed_base_url() {
        let err = UrlBuilder::new("not a url", &["weather", "point"]).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = UrlBuilder::new("mailto:someone@example.com", &["weather"]).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn coordinates_use_six_fractional_digits() {
        let url = UrlBuilder::new("https://api.stormglass.io/v2", &["weather", "point"])
            .expect("base should parse")
            .coordinates(58.7984, 17.8081)
            .finish();

        assert_eq!(
            url.query(),
            Some("lat=58.798400&lng=17.808100"),
        );
    }

    #[test]
    fn window_bounds_are_independent() {
        let start = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2023, 6, 2, 0, 0, 0).unwrap();

        let base = "https://api.stormglass.io/v2";

        let url = UrlBuilder::new(base, &["weather", "point"])
            .expect("base should parse")
            .window(Some(start), None)
            .finish();
        assert_eq!(url.query(), Some("start=1685577600"));

        let url = UrlBuilder::new(base, &["weather", "point"])
            .expect("base should parse")
            .window(None, Some(end))
            .finish();
        assert_eq!(url.query(), Some("end=1685664000"));

        let url = UrlBuilder::new(base, &["weather", "point"])
            .expect("base should parse")
            .window(None, None)
            .finish();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn empty_token_list_is_omitted() {
        let url = UrlBuilder::new("https://api.stormglass.io/v2", &["weather", "point"])
            .expect("base should parse")
            .tokens("params", &[])
            .tokens("source", &["sg"])
            .finish();

        assert_eq!(url.query(), Some("source=sg"));
    }

    #[test]
    fn scalar_none_is_omitted() {
        let url = UrlBuilder::new("https://api.stormglass.io/v2", &["tide", "extremes", "point"])
            .expect("base should parse")
            .scalar("datum", None)
            .finish();

        assert_eq!(url.query(), None);
    }

    #[test]
    fn parameters_keep_insertion_order() {
        let start = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();

        let url = UrlBuilder::new("https://api.stormglass.io/v2", &["weather", "point"])
            .expect("base should parse")
            .coordinates(58.7984, 17.8081)
            .tokens("params", &["airTemperature", "waveDirection"])
            .window(Some(start), None)
            .tokens("source", &["fcoo", "fmi"])
            .finish();

        let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(keys, vec!["lat", "lng", "params", "start", "source"]);
    }

    #[test]
    fn built_query_round_trips() {
        let start = Utc.with_ymd_and_hms(2023, 6, 1, 6, 30, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2023, 6, 1, 18, 30, 0).unwrap();

        let url = UrlBuilder::new("https://api.stormglass.io/v2", &["weather", "point"])
            .expect("base should parse")
            .coordinates(58.7984, 17.8081)
            .tokens("params", &["airTemperature", "waveDirection"])
            .window(Some(start), Some(end))
            .tokens("source", &["fcoo", "fmi"])
            .finish();

        let reparsed = Url::parse(url.as_str()).expect("built url should reparse");
        let pairs = query_pairs(&reparsed);

        assert_eq!(
            pairs,
            vec![
                ("lat".to_string(), "58.798400".to_string()),
                ("lng".to_string(), "17.808100".to_string()),
                ("params".to_string(), "airTemperature,waveDirection".to_string()),
                ("start".to_string(), start.timestamp().to_string()),
                ("end".to_string(), end.timestamp().to_string()),
                ("source".to_string(), "fcoo,fmi".to_string()),
            ],
        );
    }
}
