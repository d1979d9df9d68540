//! Bounded progress bar rendered as a single fixed-width line.
//!
//! The bar holds an integer value clamped to `[minimum, maximum]` and draws
//! it as a track of `full` cells, a `tip` marking the boundary cell and
//! `empty` cells for the remainder, wrapped in the format's envelope.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_progress::progress::{new, with_bounds, with_format, BarFormat};
//!
//! let mut bar = new(10, &[
//!     with_bounds(0, 10),
//!     with_format(BarFormat::new().with_full('X').with_tip('>').with_empty(' ')),
//! ]);
//!
//! bar.increment();
//! bar.increment();
//! assert_eq!(bar.view(), "X>        ");
//! ```
//!
//! # Override States
//!
//! The format's hooks replace the whole output:
//!
//! - `hidden_when` renders a zero-length string,
//! - `empty_when` renders `empty` characters across envelope and track.
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use bubbletea_progress::progress;
//!
//! struct App {
//!     bar: progress::Model,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let bar = progress::new(40, &[]);
//!         let cmd = bar.increment_cmd();
//!         (Self { bar }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.bar.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.bar.view()
//!     }
//! }
//! ```

mod format;
#[cfg(test)]
mod tests;

pub use format::{BarFormat, BLOCK, CLASSIC};

use crate::envelope::{fill, push_fill};
use crate::error::{Error, Result};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use log::debug;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for progress instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

const DEFAULT_WIDTH: usize = 40;
const DEFAULT_MINIMUM: i64 = 0;
const DEFAULT_MAXIMUM: i64 = 100;
const DEFAULT_STEP: i64 = 1;

/// Configuration options applied in order by [`new`].
#[derive(Debug, Clone)]
pub enum ProgressOption {
    /// Sets both bounds.
    WithBounds(i64, i64),
    /// Sets the lower bound.
    WithMinimum(i64),
    /// Sets the upper bound.
    WithMaximum(i64),
    /// Sets the amount added or removed by one increment or decrement.
    WithStep(i64),
    /// Sets the starting value. Defaults to the lower bound.
    WithValue(i64),
    /// Sets the appearance.
    WithFormat(BarFormat),
}

impl ProgressOption {
    fn apply(&self, m: &mut Model) {
        match self {
            ProgressOption::WithBounds(minimum, maximum) => {
                m.minimum = *minimum;
                m.maximum = *maximum;
            }
            ProgressOption::WithMinimum(minimum) => m.minimum = *minimum,
            ProgressOption::WithMaximum(maximum) => m.maximum = *maximum,
            ProgressOption::WithStep(step) => m.step = *step,
            // resolved by `new` once the bounds are known
            ProgressOption::WithValue(_) => {}
            ProgressOption::WithFormat(format) => m.format = format.clone(),
        }
    }
}

/// Sets both bounds of the bar.
pub fn with_bounds(minimum: i64, maximum: i64) -> ProgressOption {
    ProgressOption::WithBounds(minimum, maximum)
}

/// Sets the lower bound of the bar.
pub fn with_minimum(minimum: i64) -> ProgressOption {
    ProgressOption::WithMinimum(minimum)
}

/// Sets the upper bound of the bar.
pub fn with_maximum(maximum: i64) -> ProgressOption {
    ProgressOption::WithMaximum(maximum)
}

/// Sets the step used by [`Model::increment`] and [`Model::decrement`].
pub fn with_step(step: i64) -> ProgressOption {
    ProgressOption::WithStep(step)
}

/// Sets the starting value. It is clamped to the bounds.
pub fn with_value(value: i64) -> ProgressOption {
    ProgressOption::WithValue(value)
}

/// Sets the appearance of the bar.
pub fn with_format(format: BarFormat) -> ProgressOption {
    ProgressOption::WithFormat(format)
}

/// Asks the bar with the given id to add one step. An id of 0 targets every bar.
#[derive(Debug, Clone)]
pub struct IncrementMsg {
    /// Target bar.
    pub id: i64,
}

/// Asks the bar with the given id to remove one step. An id of 0 targets every bar.
#[derive(Debug, Clone)]
pub struct DecrementMsg {
    /// Target bar.
    pub id: i64,
}

/// Asks the bar with the given id to take a new value. An id of 0 targets every bar.
#[derive(Debug, Clone)]
pub struct SetValueMsg {
    /// Target bar.
    pub id: i64,
    /// Requested value, clamped on arrival.
    pub value: i64,
}

/// A clamped counter rendered as a progress bar.
///
/// Bounds are not validated by [`new`]; behaviour is defined for
/// `minimum <= maximum`. Use [`try_new`] to have them checked.
#[derive(Debug, Clone)]
pub struct Model {
    id: i64,
    width: usize,
    minimum: i64,
    maximum: i64,
    step: i64,
    value: i64,
    format: BarFormat,
}

/// Creates a progress bar with a track of `width` cells.
///
/// Defaults: bounds `0..=100`, step 1, value at the lower bound, default
/// [`BarFormat`].
///
/// ```rust
/// use bubbletea_progress::progress::{new, with_maximum, with_value};
///
/// let bar = new(10, &[with_maximum(10), with_value(42)]);
/// assert_eq!(bar.value(), 10);
/// assert!(bar.is_complete());
/// ```
pub fn new(width: usize, opts: &[ProgressOption]) -> Model {
    let mut m = Model {
        id: next_id(),
        width,
        minimum: DEFAULT_MINIMUM,
        maximum: DEFAULT_MAXIMUM,
        step: DEFAULT_STEP,
        value: DEFAULT_MINIMUM,
        format: BarFormat::default(),
    };

    let mut requested = None;
    for opt in opts {
        if let ProgressOption::WithValue(value) = opt {
            requested = Some(*value);
        }
        opt.apply(&mut m);
    }

    m.value = m.clamp(requested.unwrap_or(m.minimum));
    m
}

/// Like [`new`], but rejects a lower bound above the upper bound.
///
/// ```rust
/// use bubbletea_progress::progress::{try_new, with_bounds};
/// use bubbletea_progress::Error;
///
/// let err = try_new(10, &[with_bounds(5, 1)]).unwrap_err();
/// assert_eq!(err, Error::InvalidBounds { minimum: 5, maximum: 1 });
/// ```
pub fn try_new(width: usize, opts: &[ProgressOption]) -> Result<Model> {
    let m = new(width, opts);
    if m.minimum > m.maximum {
        return Err(Error::InvalidBounds {
            minimum: m.minimum,
            maximum: m.maximum,
        });
    }
    Ok(m)
}

impl Model {
    /// Unique id used to route messages to this bar.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Track width in cells, excluding the envelope.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Lower bound.
    pub fn minimum(&self) -> i64 {
        self.minimum
    }

    /// Upper bound.
    pub fn maximum(&self) -> i64 {
        self.maximum
    }

    /// Amount added or removed per step.
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Current value, always within the bounds.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Appearance settings.
    pub fn format(&self) -> &BarFormat {
        &self.format
    }

    /// Whether the value has reached the upper bound.
    pub fn is_complete(&self) -> bool {
        self.value == self.maximum
    }

    /// `value / maximum`. Not meaningful when the upper bound is zero.
    pub fn percent(&self) -> f64 {
        self.value as f64 / self.maximum as f64
    }

    /// Stores `value` clamped to the bounds.
    pub fn set_value(&mut self, value: i64) {
        let clamped = self.clamp(value);
        if clamped != value {
            debug!(
                "progress {}: value {} clamped to {}",
                self.id, value, clamped
            );
        }
        self.value = clamped;
    }

    /// Adds one step, stopping at the upper bound.
    pub fn increment(&mut self) {
        self.set_value(self.value.saturating_add(self.step));
    }

    /// Removes one step, stopping at the lower bound.
    pub fn decrement(&mut self) {
        self.set_value(self.value.saturating_sub(self.step));
    }

    fn clamp(&self, value: i64) -> i64 {
        // max/min rather than i64::clamp so unchecked bounds never panic
        value.max(self.minimum).min(self.maximum)
    }

    /// Renders the bar.
    pub fn view(&self) -> String {
        if self.format.hidden_when().is_met() {
            return String::new();
        }

        if self.format.empty_when().is_met() {
            return fill(self.format.empty(), self.format.width() + self.width);
        }

        self.format.envelope().wrap(&self.track())
    }

    /// Index of the tip cell, negative when nothing is filled.
    fn tip_index(&self) -> i128 {
        if self.maximum == 0 {
            return -1;
        }
        let scaled = (self.value as i128 * self.width as i128).div_euclid(self.maximum as i128);
        scaled - 1
    }

    fn track(&self) -> String {
        if self.is_complete() {
            return fill(self.format.full(), self.width);
        }

        let tip = self.tip_index();
        if tip < 0 || self.width == 0 {
            return fill(self.format.empty(), self.width);
        }

        let full = (tip as usize).min(self.width - 1);
        let mut track = String::with_capacity(self.width * 4);
        push_fill(&mut track, self.format.full(), full);
        track.push(self.format.tip());
        push_fill(&mut track, self.format.empty(), self.width - full - 1);
        track
    }

    /// Command delivering an [`IncrementMsg`] addressed to this bar.
    pub fn increment_cmd(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(IncrementMsg { id }) as Msg
        })
    }

    /// Command delivering a [`DecrementMsg`] addressed to this bar.
    pub fn decrement_cmd(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(DecrementMsg { id }) as Msg
        })
    }

    /// Command delivering a [`SetValueMsg`] addressed to this bar.
    pub fn set_value_cmd(&self, value: i64) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(SetValueMsg { id, value }) as Msg
        })
    }

    fn accepts(&self, id: i64) -> bool {
        id == 0 || id == self.id
    }

    /// Applies progress messages addressed to this bar. Never returns a command.
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        if let Some(m) = msg.downcast_ref::<IncrementMsg>() {
            if self.accepts(m.id) {
                self.increment();
            }
        } else if let Some(m) = msg.downcast_ref::<DecrementMsg>() {
            if self.accepts(m.id) {
                self.decrement();
            }
        } else if let Some(m) = msg.downcast_ref::<SetValueMsg>() {
            if self.accepts(m.id) {
                self.set_value(m.value);
            }
        }

        std::option::Option::None
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.view())
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, std::option::Option<Cmd>) {
        (Model::default(), std::option::Option::None)
    }

    fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        new(DEFAULT_WIDTH, &[])
    }
}
