//! Endpoint path construction
//!
//! Paths are built from a fixed template, optional identifier segments and
//! ordered query parameters. Building is pure: the same inputs always
//! produce the same string.

use chrono::NaiveDate;
use std::fmt::Display;

/// Relative endpoint path with query string, e.g. `/api/daily-logs?user_id=1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    path: String,
    query: Vec<(&'static str, String)>,
}

impl ApiPath {
    /// Start from a fixed resource path such as `/api/weight-logs`
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self {
            path: base.to_string(),
            query: Vec::new(),
        }
    }

    /// Append a `/`-separated segment verbatim (ids, dates, fixed words)
    #[must_use]
    pub fn segment(mut self, segment: impl Display) -> Self {
        self.path.push('/');
        self.path.push_str(&segment.to_string());
        self
    }

    /// Append a free-text segment, percent-encoded
    #[must_use]
    pub fn segment_encoded(mut self, segment: &str) -> Self {
        self.path.push('/');
        self.path.push_str(&encode_component(segment));
        self
    }

    /// Append a date segment as `YYYY-MM-DD`
    #[must_use]
    pub fn date_segment(self, date: NaiveDate) -> Self {
        self.segment(iso(date))
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: &'static str, value: impl Display) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Add a query parameter only when a value is present
    #[must_use]
    pub fn query_opt<V: Display>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Add a date query parameter as `YYYY-MM-DD`
    #[must_use]
    pub fn date_query(self, key: &'static str, date: NaiveDate) -> Self {
        self.query(key, iso(date))
    }

    /// Render the final path
    #[must_use]
    pub fn build(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }

        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

impl Display for ApiPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.build())
    }
}

/// Render a date the way the backend expects it
#[must_use]
pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Percent-encode a path component.
///
/// Spaces become `%20` rather than `+`, since the result goes into a path.
#[must_use]
pub fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path() {
        assert_eq!(ApiPath::new("/api/daily-logs").build(), "/api/daily-logs");
    }

    #[test]
    fn test_collection_with_user() {
        let path = ApiPath::new("/api/daily-logs").query("user_id", 1);
        assert_eq!(path.build(), "/api/daily-logs?user_id=1");
    }

    #[test]
    fn test_segment_and_ordered_query() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let path = ApiPath::new("/api/nutrition")
            .segment("history")
            .query("user_id", 3)
            .date_query("start_date", start)
            .date_query("end_date", end);

        assert_eq!(
            path.to_string(),
            "/api/nutrition/history?user_id=3&start_date=2024-01-01&end_date=2024-01-31"
        );
    }

    #[test]
    fn test_query_opt_skips_none() {
        let path = ApiPath::new("/api/food-entries/recent")
            .query("user_id", 1)
            .query_opt("limit", None::<u32>);
        assert_eq!(path.build(), "/api/food-entries/recent?user_id=1");
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("Bench Press"), "Bench%20Press");
        assert_eq!(encode_component("Pull-up/Chin-up"), "Pull-up%2FChin-up");
        assert_eq!(encode_component("Curl & Press"), "Curl%20%26%20Press");
        assert_eq!(encode_component("Squat+"), "Squat%2B");
    }
}
