use chrono::NaiveDate;
use proptest::prelude::*;
use skinny_legend_api_client::path::{ApiPath, encode_component, iso};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1970i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn path_building_is_deterministic(id in 1i64..1_000_000, user in 1i64..10_000, day in any_date()) {
        let build = || {
            ApiPath::new("/api/daily-logs")
                .segment(id)
                .query("user_id", user)
                .date_query("date", day)
                .build()
        };
        prop_assert_eq!(build(), build());
    }

    #[test]
    fn iso_dates_round_trip(day in any_date()) {
        let text = iso(day);
        prop_assert_eq!(text.len(), 10);
        prop_assert_eq!(NaiveDate::parse_from_str(&text, "%Y-%m-%d").unwrap(), day);
    }

    #[test]
    fn encoded_component_is_a_single_segment(name in "\\PC{0,40}") {
        let encoded = encode_component(&name);
        prop_assert!(!encoded.contains('/'));
        prop_assert!(!encoded.contains(' '));
        prop_assert!(!encoded.contains('?'));
        prop_assert!(!encoded.contains('&'));
        prop_assert!(!encoded.contains('+'));
    }

    #[test]
    fn encoding_keeps_unreserved_text(name in "[A-Za-z0-9_.-]{1,30}") {
        prop_assert_eq!(encode_component(&name), name);
    }

    #[test]
    fn user_query_matches_id(user in 1i64..i64::MAX) {
        let path = ApiPath::new("/api/weight-logs").query("user_id", user).build();
        prop_assert_eq!(path, format!("/api/weight-logs?user_id={user}"));
    }
}
