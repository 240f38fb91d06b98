//! End-to-end checks of the ride workflow through its public API.
//!
//! Estimates are random, so time and cost are only ever checked against
//! their ranges.

use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use ride_core::{
    DriverId, NotificationKind, RideWorkflow, ValidationError,
    clock::FixedClock,
    estimator::{EstimateConfig, MockEstimator},
};
use rust_decimal_macros::dec;

fn workflow_on(
    year: i32,
    month: u32,
    day: u32,
) -> RideWorkflow {
    let clock = FixedClock(Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap());
    let estimator = MockEstimator::seeded(EstimateConfig::default(), 2024).unwrap();
    RideWorkflow::new(Box::new(estimator), Box::new(clock))
}

fn history_rows(wf: &RideWorkflow) -> Vec<(String, String, String)> {
    wf.history()
        .iter()
        .map(|e| (e.from.clone(), e.to.clone(), e.date_label()))
        .collect()
}

#[test]
fn test_estimate_within_ranges() {
    let mut wf = workflow_on(2024, 1, 1);
    wf.set_pickup("Home");
    wf.set_destination("Office");

    for _ in 0..100 {
        let estimate = wf.estimate_ride().expect("route is set");
        assert!((10..40).contains(&estimate.minutes));
        assert!(estimate.cost >= dec!(10.00) && estimate.cost < dec!(30.00));

        let cost = estimate.cost_label();
        let decimals = cost.split('.').nth(1).unwrap();
        assert!(cost.starts_with('$'));
        assert_eq!(decimals.len(), 2);
        assert!(estimate.time_label().ends_with(" minutes"));
    }
}

#[test]
fn test_estimate_with_missing_location_keeps_prior_state() {
    let mut wf = workflow_on(2024, 1, 1);

    assert_eq!(wf.estimate_ride(), Err(ValidationError::MissingRoute));
    assert!(wf.estimate().is_none());
    assert!(!wf.show_map());

    wf.set_pickup("Home");
    wf.set_destination("Office");
    let first = wf.estimate_ride().unwrap();

    wf.set_destination("");
    assert_eq!(wf.estimate_ride(), Err(ValidationError::MissingRoute));
    assert_eq!(wf.estimate(), Some(&first));
    assert!(wf.show_map());
}

#[test]
fn test_request_ride_appends_one_entry_for_today() {
    let mut wf = workflow_on(2025, 2, 14);
    wf.set_pickup("Home");
    wf.set_destination("Office");
    wf.select_driver(Some(DriverId(2)));
    let before = wf.history().len();

    let note = wf.request_ride().expect("all fields set");

    assert_eq!(note.kind, NotificationKind::Success);
    assert!(note.message.contains("Home"));
    assert!(note.message.contains("Office"));
    assert!(note.message.contains("Jane Smith"));
    assert_eq!(wf.history().len(), before + 1);

    let entry = wf.history().last().unwrap();
    assert_eq!(entry.from, "Home");
    assert_eq!(entry.to, "Office");
    assert_eq!(entry.date, NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
}

#[test]
fn test_request_ride_without_driver_is_rejected() {
    let mut wf = workflow_on(2025, 2, 14);
    wf.set_pickup("Home");
    wf.set_destination("Office");
    let before = history_rows(&wf);

    let error = wf.request_ride().unwrap_err();

    assert_eq!(error, ValidationError::MissingRideDetails);
    assert_eq!(
        ride_core::Notification::from(error).message,
        "Please enter pickup, destination, and select a driver."
    );
    assert_eq!(history_rows(&wf), before);
}

#[test]
fn test_request_ride_with_driver_but_missing_route_is_rejected() {
    let mut wf = workflow_on(2025, 2, 14);
    wf.set_pickup("   ");
    wf.set_destination("Office");
    wf.select_driver(Some(DriverId(2)));
    let before = history_rows(&wf);

    assert_eq!(wf.request_ride(), Err(ValidationError::MissingRideDetails));
    assert_eq!(history_rows(&wf), before);

    wf.set_pickup("Home");
    wf.set_destination("");

    assert_eq!(wf.request_ride(), Err(ValidationError::MissingRideDetails));
    assert_eq!(history_rows(&wf), before);
}

#[test]
fn test_seeded_history_order() {
    let wf = workflow_on(2025, 2, 14);

    assert_eq!(
        history_rows(&wf),
        vec![
            ("Home".into(), "Office".into(), "2023-05-01".into()),
            ("Office".into(), "Gym".into(), "2023-05-03".into()),
            ("Gym".into(), "Home".into(), "2023-05-03".into()),
        ]
    );
}

#[test]
fn test_schedule_ride_confirms_without_history() {
    let mut wf = workflow_on(2025, 2, 14);
    wf.set_schedule_date("2023-06-01");
    wf.set_schedule_time("14:00");
    let before = wf.history().len();

    let note = wf.schedule_ride().unwrap();

    assert_eq!(note.title, "Ride Scheduled");
    assert!(note.message.contains("2023-06-01"));
    assert!(note.message.contains("14:00"));
    assert_eq!(wf.history().len(), before);
}

#[test]
fn test_schedule_ride_missing_time_is_rejected() {
    let mut wf = workflow_on(2025, 2, 14);
    wf.set_schedule_date("2023-06-01");

    assert_eq!(wf.schedule_ride(), Err(ValidationError::MissingSchedule));
}

#[test]
fn test_repeated_requests_get_increasing_ids() {
    let mut wf = workflow_on(2025, 2, 14);
    wf.set_pickup("Home");
    wf.set_destination("Office");
    wf.select_driver(Some(DriverId(1)));

    wf.request_ride().unwrap();
    wf.request_ride().unwrap();

    let ids: Vec<i64> = wf.history().iter().map(|e| e.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "{ids:?}");
}
