mod test_utils;

use portfolio_api::tenure::{
    calculate_duration, calculate_duration_at, format_date_range, format_months,
    generate_period_string_at, parse_date, period_label_at,
    DATE_RANGE_UNAVAILABLE, DURATION_UNAVAILABLE, LESS_THAN_ONE_MONTH,
};
use test_utils::fixed_now;

#[test]
fn same_start_and_end_is_less_than_one_month() {
    for start in ["2023-05-10", "2000-01-01", "2024-02-29"] {
        assert_eq!(calculate_duration(start, Some(start)), LESS_THAN_ONE_MONTH);
    }
}

#[test]
fn ongoing_role_is_measured_up_to_now() {
    // 1280 days / 30.44 = 42.05 months
    assert_eq!(calculate_duration_at("2021-08-01", None, fixed_now()), "3 yrs 6 mos");
}

#[test]
fn ongoing_role_against_real_clock_grows_past_years() {
    let duration = calculate_duration("2000-01-01", None);
    assert!(duration.contains("yrs"), "got {duration}");
    assert_ne!(duration, DURATION_UNAVAILABLE);
}

#[test]
fn average_month_length_floors_partial_months() {
    // 243 days / 30.44 = 7.98, not 8 calendar months
    assert_eq!(calculate_duration("2021-04-01", Some("2021-11-30")), "7 mos");
}

#[test]
fn singular_and_plural_units() {
    assert_eq!(calculate_duration("2021-01-01", Some("2021-02-01")), "1 mo");
    assert_eq!(calculate_duration("2020-01-01", Some("2021-01-01")), "1 yr");
    assert_eq!(calculate_duration("2020-01-01", Some("2021-02-05")), "1 yr 1 mo");
    assert_eq!(calculate_duration("2019-01-01", Some("2021-01-05")), "2 yrs");
}

#[test]
fn thirty_days_is_still_less_than_a_month() {
    assert_eq!(calculate_duration("2021-04-01", Some("2021-05-01")), LESS_THAN_ONE_MONTH);
}

#[test]
fn end_before_start_clamps_to_zero() {
    assert_eq!(calculate_duration("2022-01-01", Some("2021-01-01")), LESS_THAN_ONE_MONTH);
}

#[test]
fn malformed_dates_return_sentinels() {
    for bad in ["not-a-date", "2021-13-01", "", "2021/08/01", "Aug 2021"] {
        assert_eq!(calculate_duration(bad, None), DURATION_UNAVAILABLE, "start {bad:?}");
        assert_eq!(format_date_range(bad, None), DATE_RANGE_UNAVAILABLE, "start {bad:?}");
    }

    assert_eq!(calculate_duration("2021-01-01", Some("garbage")), DURATION_UNAVAILABLE);
    assert_eq!(format_date_range("2021-01-01", Some("garbage")), DATE_RANGE_UNAVAILABLE);
}

#[test]
fn date_range_for_ongoing_role() {
    assert_eq!(format_date_range("2021-08-01", None), "Aug 2021 - Present");
}

#[test]
fn date_range_for_finished_role() {
    assert_eq!(format_date_range("2013-04-01", Some("2021-10-31")), "Apr 2013 - Oct 2021");
}

#[test]
fn blank_end_date_means_present() {
    assert_eq!(format_date_range("2021-08-01", Some("  ")), "Aug 2021 - Present");
    assert_eq!(calculate_duration_at("2021-08-01", Some(""), fixed_now()), "3 yrs 6 mos");
}

#[test]
fn timestamps_are_accepted() {
    assert_eq!(
        format_date_range("2021-08-15T10:30:00Z", Some("2022-03-10T00:00:00+02:00")),
        "Aug 2021 - Mar 2022"
    );
    assert_eq!(format_date_range("2021-08-15T10:30:00", None), "Aug 2021 - Present");
    assert!(parse_date("2021-08-15T10:30:00.250").is_some());
}

#[test]
fn written_offset_decides_the_displayed_month() {
    assert_eq!(format_date_range("2021-08-01T00:00:00+02:00", None), "Aug 2021 - Present");
    assert_eq!(
        format_date_range("2021-03-01T00:30:00+01:00", Some("2021-10-31T23:30:00-05:00")),
        "Mar 2021 - Oct 2021"
    );
}

#[test]
fn period_string_joins_range_and_duration() {
    assert_eq!(
        generate_period_string_at("2021-08-01", None, fixed_now()),
        "Aug 2021 - Present · 3 yrs 6 mos"
    );
}

#[test]
fn period_string_propagates_sentinels() {
    assert_eq!(
        generate_period_string_at("bad", None, fixed_now()),
        "Date range unavailable · Duration unavailable"
    );
}

#[test]
fn period_label_fields_agree() {
    let label = period_label_at("2013-04-01", Some("2021-10-31"), fixed_now());

    assert_eq!(label.range_text, "Apr 2013 - Oct 2021");
    assert_eq!(label.duration_text, "8 yrs 6 mos");
    assert_eq!(label.combined, format!("{} · {}", label.range_text, label.duration_text));
}

#[test]
fn month_counts_render_without_zero_parts() {
    assert_eq!(format_months(0), LESS_THAN_ONE_MONTH);
    assert_eq!(format_months(-5), LESS_THAN_ONE_MONTH);
    assert_eq!(format_months(11), "11 mos");
    assert_eq!(format_months(24), "2 yrs");
    assert_eq!(format_months(25), "2 yrs 1 mo");
}
