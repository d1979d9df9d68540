//! Tests for the progress bar.

use super::*;
use crate::condition::Condition;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn xbar() -> Model {
    new(
        10,
        &[
            with_bounds(0, 10),
            with_step(1),
            with_value(0),
            with_format(BarFormat::new().with_empty(' ').with_full('X').with_tip('>')),
        ],
    )
}

#[test]
fn test_new_with_no_options() {
    let bar = new(10, &[]);

    assert_eq!(bar.width(), 10);
    assert_eq!(bar.minimum(), 0);
    assert_eq!(bar.maximum(), 100);
    assert_eq!(bar.step(), 1);
    assert_eq!(bar.value(), 0);
    assert_eq!(bar.format().width(), 0);
    assert!(!bar.is_complete());
}

#[test]
fn test_new_keeps_given_values() {
    let format = BarFormat::new().with_left("[").with_right("]");
    let bar = new(
        7,
        &[
            with_minimum(3),
            with_maximum(20),
            with_step(4),
            with_value(11),
            with_format(format),
        ],
    );

    assert_eq!(bar.width(), 7);
    assert_eq!(bar.minimum(), 3);
    assert_eq!(bar.maximum(), 20);
    assert_eq!(bar.step(), 4);
    assert_eq!(bar.value(), 11);
    assert_eq!(bar.format().left(), "[");
    assert_eq!(bar.is_complete(), bar.value() == bar.maximum());
    assert_eq!(bar.percent(), 11.0 / 20.0);
}

#[test]
fn test_value_defaults_to_minimum() {
    let bar = new(10, &[with_bounds(-5, 5)]);
    assert_eq!(bar.value(), -5);
}

#[test]
fn test_try_new_rejects_inverted_bounds() {
    let err = try_new(10, &[with_bounds(10, 0)]).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidBounds {
            minimum: 10,
            maximum: 0
        }
    );

    assert!(try_new(10, &[with_bounds(0, 0)]).is_ok());
}

#[test]
fn test_set_value_clamps() {
    for (num, expected) in [(101, 100), (-1, 0), (50, 50)] {
        let mut bar = new(10, &[with_bounds(0, 100)]);
        bar.set_value(num);
        assert_eq!(bar.value(), expected, "set_value({num})");
    }
}

#[test]
fn test_increments_by_step() {
    let mut bar = new(10, &[with_step(5), with_maximum(10)]);

    assert_eq!(bar.value(), 0);
    bar.increment();
    assert_eq!(bar.value(), 5);
    bar.increment();
    assert_eq!(bar.value(), 10);
    assert!(bar.is_complete());

    // Past the upper bound nothing changes
    bar.increment();
    bar.increment();
    assert_eq!(bar.value(), 10);
}

#[test]
fn test_decrements_by_step() {
    let mut bar = new(10, &[with_step(7), with_maximum(14), with_value(14)]);

    bar.decrement();
    assert_eq!(bar.value(), 7);
    bar.decrement();
    assert_eq!(bar.value(), 0);
    bar.decrement();
    assert_eq!(bar.value(), 0);
}

#[test]
fn test_step_arithmetic_saturates() {
    let mut bar = new(10, &[with_bounds(0, i64::MAX), with_step(i64::MAX)]);
    bar.increment();
    bar.increment();
    assert_eq!(bar.value(), i64::MAX);
}

#[test]
fn test_displays_value_with_tip() {
    let mut bar = xbar();
    let mut frames = vec![bar.view()];
    for _ in 0..10 {
        bar.increment();
        frames.push(bar.view());
    }

    assert_eq!(
        frames,
        vec![
            "          ",
            ">         ",
            "X>        ",
            "XX>       ",
            "XXX>      ",
            "XXXX>     ",
            "XXXXX>    ",
            "XXXXXX>   ",
            "XXXXXXX>  ",
            "XXXXXXXX> ",
            "XXXXXXXXXX",
        ]
    );
}

#[test]
fn test_tip_uses_exact_floor() {
    // 0.29 * 100.0 is 28.999... in floating point
    let bar = new(
        100,
        &[
            with_value(29),
            with_format(BarFormat::new().with_full('X').with_tip('>').with_empty('.')),
        ],
    );
    let view = bar.view();
    assert_eq!(view.find('>'), Some(28));
    assert_eq!(view.chars().filter(|&c| c == 'X').count(), 28);
}

#[test]
fn test_adds_formatting() {
    let bar = new(
        1,
        &[with_format(
            BarFormat::new()
                .with_empty(' ')
                .with_left("LEFT")
                .with_right("RIGHT")
                .with_padding_left(3)
                .with_padding_right(2)
                .with_pad('0'),
        )],
    );

    assert_eq!(bar.view(), "000LEFT RIGHT00");
}

#[test]
fn test_hidden_renders_zero_length() {
    let hidden = Arc::new(AtomicBool::new(false));
    let bar = new(
        10,
        &[with_format(
            BarFormat::new().with_hidden_when(Condition::flag(hidden.clone())),
        )],
    );

    let before = bar.view();
    hidden.store(true, Ordering::SeqCst);
    let after = bar.view();

    assert_eq!(before.chars().count(), 10);
    assert_eq!(after.len(), 0);
}

#[test]
fn test_empty_replaces_everything() {
    let empty = Arc::new(AtomicBool::new(false));
    let bar = new(
        10,
        &[
            with_maximum(10),
            with_value(10),
            with_format(
                BarFormat::new()
                    .with_full('.')
                    .with_empty(' ')
                    .with_left("[")
                    .with_right("]")
                    .with_padding_left(1)
                    .with_padding_right(1)
                    .with_empty_when(Condition::flag(empty.clone())),
            ),
        ],
    );

    assert_eq!(bar.view(), " [..........] ");
    empty.store(true, Ordering::SeqCst);
    assert_eq!(bar.view(), "              ");
}

#[test]
fn test_hidden_wins_over_empty() {
    let bar = new(
        10,
        &[with_format(
            BarFormat::new()
                .with_empty_when(true)
                .with_hidden_when(true),
        )],
    );
    assert_eq!(bar.view(), "");
}

#[test]
fn test_zero_width_track() {
    let mut bar = new(0, &[with_format(CLASSIC.clone())]);
    assert_eq!(bar.view(), "[]");
    bar.set_value(100);
    assert_eq!(bar.view(), "[]");
}

#[test]
fn test_zero_maximum_draws_nothing_until_complete() {
    let bar = new(
        4,
        &[
            with_bounds(-4, 0),
            with_format(BarFormat::new().with_full('#').with_empty('-')),
        ],
    );
    assert_eq!(bar.view(), "----");

    let done = new(
        4,
        &[
            with_bounds(0, 0),
            with_format(BarFormat::new().with_full('#').with_empty('-')),
        ],
    );
    assert!(done.is_complete());
    assert_eq!(done.view(), "####");
}

#[test]
fn test_block_preset() {
    let bar = new(4, &[with_maximum(4), with_value(2), with_format(BLOCK.clone())]);
    assert_eq!(bar.view(), "▉░░░");
}

#[test]
fn test_display_matches_view() {
    let bar = xbar();
    assert_eq!(bar.to_string(), bar.view());
}

#[test]
fn test_update_applies_messages() {
    let mut bar = xbar();
    let id = bar.id();

    assert!(bar.update(Box::new(IncrementMsg { id })).is_none());
    assert_eq!(bar.value(), 1);

    bar.update(Box::new(SetValueMsg { id, value: 8 }));
    assert_eq!(bar.value(), 8);

    bar.update(Box::new(DecrementMsg { id }));
    assert_eq!(bar.value(), 7);

    // Broadcast
    bar.update(Box::new(SetValueMsg { id: 0, value: 99 }));
    assert_eq!(bar.value(), 10);
}

#[test]
fn test_update_ignores_other_ids() {
    let mut bar = xbar();
    let other = xbar();

    bar.update(Box::new(IncrementMsg { id: other.id() }));
    assert_eq!(bar.value(), 0);
}

#[test]
fn test_unique_ids() {
    let a = new(1, &[]);
    let b = new(1, &[]);
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_default_implementation() {
    let bar = Model::default();
    assert_eq!(bar.width(), DEFAULT_WIDTH);
    assert_eq!(bar.view().chars().count(), DEFAULT_WIDTH);
}
