#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-progress/")]

//! # bubbletea-progress
//!
//! Two single-line terminal widgets that render to plain strings: a bounded
//! progress bar and a scrolling marquee. Each render has a fixed length, so
//! the output can be written over the same terminal line again and again.
//!
//! ## Overview
//!
//! Both widgets follow the same shape:
//!
//! - **state**: a clamped value (progress) or a scan position (marquee),
//! - **format**: fill characters, an envelope of padding and decorations, and
//!   [`Condition`] hooks that replace the output with a hidden, empty or
//!   complete rendering,
//! - **view**: a function of state and format producing the line.
//!
//! Every component also implements the bubbletea-rs `Model` trait, so it can
//! be embedded in a bubbletea-rs application and driven by messages.
//!
//! ## Progress Bar
//!
//! ```rust
//! use bubbletea_progress::progress::{new, with_maximum, with_format, CLASSIC};
//!
//! let mut bar = new(10, &[with_maximum(10), with_format(CLASSIC.clone())]);
//! for _ in 0..4 {
//!     bar.increment();
//! }
//! assert_eq!(bar.view(), "[===>      ]");
//! ```
//!
//! ## Marquee
//!
//! ```rust
//! use bubbletea_progress::marquee::{new, with_format, MarqueeFormat};
//!
//! let mut marquee = new("ab", 2, &[with_format(MarqueeFormat::new().with_bounce(true))]);
//! let mut frames = Vec::new();
//! for _ in 0..9 {
//!     frames.push(marquee.view());
//!     marquee.scroll();
//! }
//! assert_eq!(frames, ["  ", " a", "ab", "b ", "  ", "b ", "ab", " a", "  "]);
//! ```
//!
//! ## Override Hooks
//!
//! ```rust
//! use bubbletea_progress::prelude::*;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! let hidden = Arc::new(AtomicBool::new(false));
//! let bar = progress_new(
//!     10,
//!     &[progress_with_format(BarFormat::new().with_hidden_when(Condition::flag(hidden.clone())))],
//! );
//!
//! assert_eq!(bar.view().chars().count(), 10);
//! hidden.store(true, Ordering::SeqCst);
//! assert_eq!(bar.view(), "");
//! ```
//!
//! ## Component Overview
//!
//! | Component | Description | Use Case |
//! |-----------|-------------|----------|
//! | `Progress` | Clamped counter drawn as a bar with a tip | Downloads, batch jobs |
//! | `Marquee` | Text scrolling or bouncing across a fixed track | Status tickers, busy indicators |

pub mod condition;
pub mod envelope;
pub mod error;
pub mod marquee;
pub mod progress;

pub use condition::Condition;
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use marquee::{
    new as marquee_new, with_format as marquee_with_format, with_interval, with_scroll_on_view,
    MarqueeFormat, MarqueeOption, Model as Marquee, ScanDirection, TextOrientation,
    TickMsg as MarqueeTickMsg,
};
pub use progress::{
    new as progress_new, try_new as progress_try_new, with_bounds, with_format as progress_with_format,
    with_maximum, with_minimum, with_step, with_value, BarFormat, DecrementMsg, IncrementMsg,
    Model as Progress, ProgressOption, SetValueMsg, BLOCK, CLASSIC,
};

/// Everything needed to build and drive the widgets.
pub mod prelude {
    pub use crate::condition::Condition;
    pub use crate::envelope::Envelope;
    pub use crate::error::Error;
    pub use crate::marquee::{
        new as marquee_new, with_format as marquee_with_format, with_interval,
        with_scroll_on_view, MarqueeFormat, MarqueeOption, Model as Marquee, ScanDirection,
        TextOrientation, TickMsg as MarqueeTickMsg,
    };
    pub use crate::progress::{
        new as progress_new, try_new as progress_try_new, with_bounds,
        with_format as progress_with_format, with_maximum, with_minimum, with_step, with_value,
        BarFormat, DecrementMsg, IncrementMsg, Model as Progress, ProgressOption, SetValueMsg,
        BLOCK, CLASSIC,
    };
}
