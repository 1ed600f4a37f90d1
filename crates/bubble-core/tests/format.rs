// File: crates/bubble-core/tests/format.rs
// Purpose: Tick generation and number formatting used by axes and tooltips.

use bubble_core::format::{exponent, fixed_tick_formatter, format_fixed, format_si, si_tick_formatter};
use bubble_core::grid::{tick_step, ticks};

#[test]
fn nice_ticks_over_income_domain() {
    let t = ticks(0.0, 120_000.0, 5);
    assert_eq!(t, vec![0.0, 20_000.0, 40_000.0, 60_000.0, 80_000.0, 100_000.0, 120_000.0]);
    assert_eq!(tick_step(0.0, 120_000.0, 5), 20_000.0);
}

#[test]
fn reversed_domain_gives_descending_ticks() {
    let t = ticks(80.0, 50.0, 10);
    assert_eq!(t.first(), Some(&80.0));
    assert_eq!(t.last(), Some(&50.0));
    assert_eq!(t.len(), 16);
    assert!(t.windows(2).all(|w| w[0] > w[1]));
    assert_eq!(tick_step(80.0, 50.0, 10), -2.0);
}

#[test]
fn fractional_steps_stay_exact() {
    let t = ticks(0.0, 1.0, 10);
    assert_eq!(t.len(), 11);
    assert_eq!(t[3], 0.3);
    assert_eq!(t[10], 1.0);
}

#[test]
fn degenerate_tick_domains() {
    assert_eq!(ticks(5.0, 5.0, 10), vec![5.0]);
    assert!(ticks(f64::NAN, 1.0, 10).is_empty());
    assert!(ticks(0.0, 1.0, 0).is_empty());
}

#[test]
fn si_auto_prefix_keeps_significant_digits() {
    assert_eq!(format_si(50.0, 3), "50.0");
    assert_eq!(format_si(72.3, 3), "72.3");
    assert_eq!(format_si(1000.0, 4), "1.000k");
    assert_eq!(format_si(100.0, 4), "100.0");
    assert_eq!(format_si(1_234_567.0, 4), "1.235M");
    assert_eq!(format_si(1_393_000_000.0, 4), "1.393G");
    assert_eq!(format_si(0.5, 3), "500m");
    assert_eq!(format_si(0.0, 3), "0.00");
    assert_eq!(format_si(-2500.0, 3), "-2.50k");
    assert_eq!(format_si(f64::NAN, 3), "NaN");
}

#[test]
fn rounding_can_promote_the_prefix() {
    assert_eq!(format_si(999_960.0, 4), "1.000M");
}

#[test]
fn values_below_the_smallest_prefix_pad_with_zeros() {
    assert_eq!(format_si(1e-24, 3), "1.00y");
    assert_eq!(format_si(1e-25, 3), "0.10y");
    assert_eq!(format_si(1e-26, 3), "0.01y");
    assert_eq!(format_si(1e-30, 3), "0.000001y");
}

#[test]
fn fixed_point_groups_thousands() {
    assert_eq!(format_fixed(1_234_567.0, 0), "1,234,567");
    assert_eq!(format_fixed(-1234.5, 1), "-1,234.5");
    assert_eq!(format_fixed(999.0, 0), "999");
    assert_eq!(format_fixed(-0.01, 0), "0");
}

#[test]
fn income_tick_labels_share_one_prefix() {
    let fmt = si_tick_formatter(0.0, 120_000.0, 20_000.0);
    let labels: Vec<_> = [0.0, 20_000.0, 40_000.0, 120_000.0].into_iter().map(fmt).collect();
    assert_eq!(labels, ["0k", "20k", "40k", "120k"]);

    let fmt = si_tick_formatter(1000.0, 2000.0, 200.0);
    assert_eq!(fmt(1200.0), "1.2k");
    assert_eq!(fmt(2000.0), "2.0k");
}

#[test]
fn life_tick_labels_take_precision_from_step() {
    assert_eq!(fixed_tick_formatter(5.0)(65.0), "65");
    assert_eq!(fixed_tick_formatter(0.5)(62.5), "62.5");
}

#[test]
fn exponent_matches_scientific_notation() {
    assert_eq!(exponent(20_000.0), 4);
    assert_eq!(exponent(0.05), -2);
    assert_eq!(exponent(-300.0), 2);
}
