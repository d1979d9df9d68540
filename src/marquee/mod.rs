//! Scrolling text strip rendered as a single fixed-width line.
//!
//! A marquee shows a `width`-cell window over a tape made of filler cells
//! and the text. Every call to [`Model::scroll`] moves the window one cell.
//!
//! - By default the tape repeats forever: `gap` filler cells (the track width
//!   when no gap is set) followed by the text. The window wraps back to the
//!   all-filler frame once a full period has passed.
//! - With bounce enabled the tape is the text padded by one track width of
//!   filler on each side, and the window travels back and forth over it.
//!   The turning frames are shown once each.
//! - `left_to_right` mirrors the visible window so the text appears to travel
//!   the other way.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_progress::marquee::new;
//!
//! let mut marquee = new("a", 2, &[]);
//! let mut frames = Vec::new();
//! for _ in 0..4 {
//!     frames.push(marquee.view());
//!     marquee.scroll();
//! }
//! assert_eq!(frames, vec!["  ", " a", "a ", "  "]);
//! ```
//!
//! # Override States
//!
//! Checked on every render, first match wins:
//!
//! 1. `hidden_when`: a zero-length string.
//! 2. `complete_when`: the `complete` text, padded with filler to the full
//!    width or cut off at it.
//! 3. `empty_when`: filler across envelope and track.
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use bubbletea_progress::marquee;
//!
//! struct App {
//!     marquee: marquee::Model,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let marquee = marquee::new("Loading...", 20, &[]);
//!         let cmd = marquee.tick();
//!         (Self { marquee }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Each tick moves the text one cell and schedules the next tick
//!         self.marquee.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.marquee.view()
//!     }
//! }
//! ```

mod format;

pub use format::MarqueeFormat;

use crate::envelope::{cell_len, cells, fill, fit};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use log::trace;
use std::cell::Cell;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for marquee instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

const DEFAULT_WIDTH: usize = 20;
const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Direction the window is currently travelling over a bouncing tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Towards the end of the tape.
    Forward,
    /// Back towards the start of the tape.
    Backward,
}

impl ScanDirection {
    fn flipped(self) -> Self {
        match self {
            ScanDirection::Forward => ScanDirection::Backward,
            ScanDirection::Backward => ScanDirection::Forward,
        }
    }
}

/// Whether the text is drawn as given or mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOrientation {
    /// Text as given.
    Normal,
    /// Text with its cells in reverse order.
    Reversed,
}

impl TextOrientation {
    fn flipped(self) -> Self {
        match self {
            TextOrientation::Normal => TextOrientation::Reversed,
            TextOrientation::Reversed => TextOrientation::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScanState {
    position: usize,
    direction: ScanDirection,
    orientation: TextOrientation,
}

impl ScanState {
    const START: ScanState = ScanState {
        position: 0,
        direction: ScanDirection::Forward,
        orientation: TextOrientation::Normal,
    };
}

/// Configuration options applied in order by [`new`].
#[derive(Debug, Clone)]
pub enum MarqueeOption {
    /// Sets the appearance and motion.
    WithFormat(MarqueeFormat),
    /// Scrolls one step at the start of every [`Model::view`] call.
    WithScrollOnView(bool),
    /// Sets the delay between ticks when driven by bubbletea-rs.
    WithInterval(Duration),
}

impl MarqueeOption {
    fn apply(&self, m: &mut Model) {
        match self {
            MarqueeOption::WithFormat(format) => m.format = format.clone(),
            MarqueeOption::WithScrollOnView(on) => m.scroll_on_view = *on,
            MarqueeOption::WithInterval(interval) => m.interval = *interval,
        }
    }
}

/// Sets the appearance and motion of the marquee.
pub fn with_format(format: MarqueeFormat) -> MarqueeOption {
    MarqueeOption::WithFormat(format)
}

/// Makes every [`Model::view`] call scroll one step before rendering.
pub fn with_scroll_on_view(on: bool) -> MarqueeOption {
    MarqueeOption::WithScrollOnView(on)
}

/// Sets the delay between ticks.
pub fn with_interval(interval: Duration) -> MarqueeOption {
    MarqueeOption::WithInterval(interval)
}

/// Sent on every marquee tick.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The marquee this tick belongs to. 0 targets every marquee.
    pub id: i64,
    tag: i64,
}

/// A scrolling text strip.
///
/// The scan state lives in a [`Cell`] so that a marquee created with
/// [`with_scroll_on_view`] can advance from `view(&self)`. The model is
/// `Send` but not `Sync`.
#[derive(Debug, Clone)]
pub struct Model {
    id: i64,
    tag: i64,
    text: String,
    reversed_text: String,
    width: usize,
    format: MarqueeFormat,
    scroll_on_view: bool,
    interval: Duration,
    state: Cell<ScanState>,
}

/// Creates a marquee showing `text` on a track of `width` cells.
///
/// ```rust
/// use bubbletea_progress::marquee::{new, with_format, MarqueeFormat};
///
/// let marquee = new("a", 6, &[with_format(MarqueeFormat::new().with_gap(1))]);
/// assert_eq!(marquee.view(), " a a a");
/// ```
pub fn new(text: impl Into<String>, width: usize, opts: &[MarqueeOption]) -> Model {
    let text = text.into();
    let reversed_text = cells(&text).into_iter().rev().collect();
    let mut m = Model {
        id: next_id(),
        tag: 0,
        text,
        reversed_text,
        width,
        format: MarqueeFormat::default(),
        scroll_on_view: false,
        interval: DEFAULT_INTERVAL,
        state: Cell::new(ScanState::START),
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    m
}

impl Model {
    /// Unique id used to route ticks to this marquee.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The text as given.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Track width in cells, excluding the envelope.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Appearance and motion settings.
    pub fn format(&self) -> &MarqueeFormat {
        &self.format
    }

    /// The configured gap between repetitions, if any.
    pub fn gap(&self) -> Option<usize> {
        self.format.gap()
    }

    /// Whether `view` scrolls before rendering.
    pub fn scroll_on_view(&self) -> bool {
        self.scroll_on_view
    }

    /// Delay between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Offset of the window into the tape. 0 is the all-filler frame.
    pub fn position(&self) -> usize {
        self.state.get().position
    }

    /// Current travel direction. Only changes when bouncing.
    pub fn direction(&self) -> ScanDirection {
        self.state.get().direction
    }

    /// Whether the text is currently drawn mirrored.
    pub fn is_reversed(&self) -> bool {
        self.state.get().orientation == TextOrientation::Reversed
    }

    fn text_len(&self) -> usize {
        cell_len(&self.text)
    }

    fn effective_gap(&self) -> usize {
        self.format.gap().unwrap_or(self.width)
    }

    /// Number of frames before the window returns to the start.
    ///
    /// For a wrapping marquee this is `gap + len(text)`. For a bouncing one
    /// it is the full round trip, `2 * (width + len(text))`.
    pub fn period(&self) -> usize {
        if self.format.bounce() {
            2 * (self.width + self.text_len())
        } else {
            self.effective_gap() + self.text_len()
        }
    }

    /// Moves the window one cell.
    pub fn scroll(&mut self) {
        self.advance();
    }

    /// Returns to the all-filler frame, travelling forward with the text
    /// as given.
    pub fn reset(&mut self) {
        self.state.set(ScanState::START);
    }

    fn advance(&self) {
        let mut state = self.state.get();

        if self.format.bounce() {
            let end = self.width + self.text_len();
            if end == 0 {
                return;
            }

            let turned = match state.direction {
                ScanDirection::Forward => {
                    state.position = (state.position + 1).min(end);
                    state.position == end
                }
                ScanDirection::Backward => {
                    state.position = state.position.saturating_sub(1);
                    state.position == 0
                }
            };

            if turned {
                state.direction = state.direction.flipped();
                if self.format.reverse_text_on_bounce() {
                    state.orientation = state.orientation.flipped();
                }
                trace!(
                    "marquee {}: turned at {}, now {:?}",
                    self.id,
                    state.position,
                    state.direction
                );
            }
        } else {
            let period = self.period();
            state.position = if period == 0 {
                0
            } else {
                (state.position + 1) % period
            };
        }

        self.state.set(state);
    }

    /// Renders the marquee, scrolling first when `scroll_on_view` is set.
    pub fn view(&self) -> String {
        if self.scroll_on_view {
            self.advance();
        }
        self.render()
    }

    fn render(&self) -> String {
        let format = &self.format;
        let total = format.width() + self.width;

        if format.hidden_when().is_met() {
            return String::new();
        }

        if format.complete_when().is_met() {
            return fit(format.complete(), total, format.empty());
        }

        if format.empty_when().is_met() {
            return fill(format.empty(), total);
        }

        format.envelope().wrap(&self.track())
    }

    fn track(&self) -> String {
        let state = self.state.get();
        let text = match state.orientation {
            TextOrientation::Normal => cells(&self.text),
            TextOrientation::Reversed => cells(&self.reversed_text),
        };

        let mut buf = [0u8; 4];
        let empty: &str = self.format.empty().encode_utf8(&mut buf);

        let mut window: Vec<&str> = if self.format.bounce() {
            // filler * width, text, filler * width
            let lead = self.width;
            (0..self.width)
                .map(|i| {
                    let idx = state.position + i;
                    if idx >= lead && idx < lead + text.len() {
                        text[idx - lead]
                    } else {
                        empty
                    }
                })
                .collect()
        } else {
            let gap = self.effective_gap();
            let period = gap + text.len();
            (0..self.width)
                .map(|i| {
                    if period == 0 {
                        return empty;
                    }
                    let idx = (state.position + i) % period;
                    if idx < gap {
                        empty
                    } else {
                        text[idx - gap]
                    }
                })
                .collect()
        };

        if self.format.left_to_right() {
            window.reverse();
        }

        window.concat()
    }

    /// A tick message addressed to this marquee with its current tag.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Schedules the next tick after the configured interval.
    pub fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;

        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Scrolls once per matching tick and schedules the next one.
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            // If an ID is set, and the ID doesn't belong to this marquee, reject the message.
            if tick_msg.id > 0 && tick_msg.id != self.id {
                return None;
            }

            // Stale ticks would make the text scroll faster than the interval.
            if tick_msg.tag > 0 && tick_msg.tag != self.tag {
                trace!(
                    "marquee {}: dropped stale tick {} (expected {})",
                    self.id,
                    tick_msg.tag,
                    self.tag
                );
                return None;
            }

            self.scroll();
            self.tag += 1;
            return std::option::Option::Some(self.tick());
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
        let model = Model::default();
        let cmd = model.tick();
        (model, std::option::Option::Some(cmd))
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
        new("", DEFAULT_WIDTH, &[])
    }
}
