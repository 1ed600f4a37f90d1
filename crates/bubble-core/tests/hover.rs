// File: crates/bubble-core/tests/hover.rs
// Purpose: Pointer hit testing and tooltip show/hide transitions.

use bubble_core::geometry::Point;
use bubble_core::marks::hit_test;
use bubble_core::{Chart, Dataset, HoverState, Record, RenderOptions, Tooltip};

fn chart() -> Chart {
    Chart::build(
        Dataset::new(vec![
            Record::new("A", 1000.0, 50.0, 100.0, "X"),
            Record::new("B", 2000.0, 80.0, 400.0, "Y"),
        ]),
        RenderOptions::default(),
    )
}

// Mark A sits at chart (0, 420) with r = 5; margins are 40px.
const OVER_A: Point = Point::new(41.0, 459.0);
const EMPTY: Point = Point::new(300.0, 250.0);

#[test]
fn entering_a_mark_shows_its_record() {
    let chart = chart();
    let mut hover = HoverState::new();
    assert!(chart.pointer_moved(&mut hover, OVER_A));
    assert_eq!(hover.hovered(), Some(0));

    match hover.tooltip() {
        Tooltip::Shown { at, lines } => {
            assert_eq!(*at, OVER_A);
            assert_eq!(
                lines,
                &[
                    "Country: A",
                    "Life Expectancy: 50.0",
                    "Income: 1.000k",
                    "Population: 100.0",
                    "Region: X",
                ]
            );
        }
        Tooltip::Hidden => panic!("tooltip should be visible"),
    }
}

#[test]
fn leaving_the_mark_hides_the_tooltip() {
    let chart = chart();
    let mut hover = HoverState::new();
    chart.pointer_moved(&mut hover, OVER_A);
    assert!(chart.pointer_moved(&mut hover, EMPTY));
    assert_eq!(hover.tooltip(), &Tooltip::Hidden);
    assert_eq!(hover.hovered(), None);
    assert_eq!(hover.tooltip().text(), "");
}

#[test]
fn moving_within_a_mark_keeps_the_first_position() {
    let chart = chart();
    let mut hover = HoverState::new();
    chart.pointer_moved(&mut hover, OVER_A);
    assert!(!chart.pointer_moved(&mut hover, Point::new(40.0, 460.0)));
    assert!(matches!(hover.tooltip(), Tooltip::Shown { at, .. } if *at == OVER_A));
}

#[test]
fn leaving_the_surface_hides_the_tooltip() {
    let chart = chart();
    let mut hover = HoverState::new();
    chart.pointer_moved(&mut hover, OVER_A);
    assert!(chart.pointer_left(&mut hover));
    assert!(!hover.tooltip().is_visible());
    assert!(!chart.pointer_left(&mut hover));
}

#[test]
fn jumping_between_marks_replaces_content() {
    let chart = chart();
    let mut hover = HoverState::new();
    chart.pointer_moved(&mut hover, OVER_A);
    // Mark B: chart (570, 0), r = 20.
    assert!(chart.pointer_moved(&mut hover, Point::new(605.0, 45.0)));
    assert_eq!(hover.hovered(), Some(1));
    let text = hover.tooltip().text();
    assert!(text.contains("Country: B"));
    assert!(text.contains("Income: 2.000k"));
    assert!(!text.contains("Country: A"));
}

#[test]
fn overlapping_marks_pick_the_topmost() {
    let chart = Chart::build(
        Dataset::new(vec![
            Record::new("Under", 1000.0, 60.0, 400.0, "X"),
            Record::new("Over", 1000.0, 60.0, 400.0, "X"),
            Record::new("Edge", 3000.0, 80.0, 100.0, "X"),
        ]),
        RenderOptions::default(),
    );
    let c = chart.marks[0].center;
    assert_eq!(hit_test(&chart.marks, c), Some(1));
    assert_eq!(hit_test(&chart.marks, c.offset(0.0, 19.0)), Some(1));
    assert_eq!(hit_test(&chart.marks, c.offset(0.0, 21.0)), None);
}

#[test]
fn nan_marks_are_never_hit() {
    let chart = Chart::build(
        Dataset::new(vec![
            Record::new("A", 1000.0, 50.0, 100.0, "X"),
            Record::new("B", f64::NAN, 80.0, 400.0, "X"),
        ]),
        RenderOptions::default(),
    );
    for x in (0..650).step_by(5) {
        for y in (0..500).step_by(5) {
            assert_ne!(chart.mark_at(Point::new(x as f32, y as f32)), Some(1));
        }
    }
}
