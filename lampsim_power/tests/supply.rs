use std::time::Duration;

use lampsim_power::{GridSupply, ReserveSupply};
use lampsim_traits::{PowerSource, TestClock};
use rstest::rstest;

#[rstest]
#[case(0.0)]
#[case(15.0)]
#[case(1000.0)] // exactly at the ceiling is still satisfied
fn fresh_grid_satisfies_requests_within_capacity(#[case] amps: f64) {
    let mut grid = GridSupply::mains();
    let sample = grid.request_power(amps).expect("request ok");
    assert_eq!(sample.volts(), 120.0);
    assert_eq!(sample.amps(), amps);
    assert!(!grid.is_blown());
}

#[test]
fn over_capacity_request_blows_circuit_permanently() {
    let mut grid = GridSupply::mains();

    // The triggering request already gets the zero sample.
    let sample = grid.request_power(1500.0).expect("request ok");
    assert!(sample.is_zero());
    assert!(grid.is_blown());

    // Any later request, however small, stays at zero.
    for amps in [0.0, 1.0, 15.0] {
        let sample = grid.request_power(amps).expect("request ok");
        assert!(sample.is_zero(), "blown circuit delivered {sample:?}");
    }
}

#[test]
fn watts_is_volts_times_amps() {
    let mut grid = GridSupply::new(120.0, 100.0);
    let sample = grid.request_power(2.0).expect("request ok");
    assert!((sample.watts() - 240.0).abs() < 1e-9);
}

#[test]
fn reserve_delivers_full_requests_until_depleted() {
    // 120 V * 2 A * 1 h = 240 Wh per request; 600 Wh covers two full draws.
    let mut battery = ReserveSupply::new(120.0, 50.0, 600.0);

    for _ in 0..2 {
        let sample = battery.request_power(2.0).expect("request ok");
        assert_eq!(sample.amps(), 2.0);
        assert_eq!(sample.volts(), 120.0);
    }
    assert!((battery.remaining_wh() - 120.0).abs() < 1e-9);

    // Third draw only has 120 Wh left: partial delivery of 1 A, then empty.
    let sample = battery.request_power(2.0).expect("request ok");
    assert_eq!(sample.volts(), 120.0);
    assert!((sample.amps() - 1.0).abs() < 1e-9);
    assert!(battery.is_depleted());

    let sample = battery.request_power(2.0).expect("request ok");
    assert!(sample.is_zero());
}

#[test]
fn reserve_draw_hours_scales_consumption() {
    // Half-hour draws cost half as much: 120 Wh per 2 A request.
    let mut battery = ReserveSupply::new(120.0, 50.0, 240.0).with_draw_hours(0.5);
    for _ in 0..2 {
        let sample = battery.request_power(2.0).expect("request ok");
        assert_eq!(sample.amps(), 2.0);
    }
    assert!(battery.is_depleted());
}

#[test]
fn reserve_latches_on_over_capacity_like_grid() {
    let mut battery = ReserveSupply::new(120.0, 50.0, 10_000.0);
    assert!(battery.request_power(60.0).expect("request ok").is_zero());
    assert!(battery.is_blown());
    // Reserve is untouched but the latch wins.
    assert!(battery.request_power(1.0).expect("request ok").is_zero());
    assert!(!battery.is_depleted());
}

#[test]
fn spin_up_cost_is_proportional_to_capacity() {
    let clock = TestClock::new();
    GridSupply::lightweight().spin_up(&clock);
    assert_eq!(clock.elapsed(), Duration::from_millis(225)); // 15 A * 15 ms
}
