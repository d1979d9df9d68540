//! Predicate hooks that switch a widget into one of its override states.
//!
//! Both widgets carry a handful of conditions (`hidden_when`, `empty_when`
//! and, for the marquee, `complete_when`). They are queried on every render
//! and must not have side effects the widget can observe.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_progress::condition::Condition;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! let hidden = Arc::new(AtomicBool::new(false));
//! let cond = Condition::flag(hidden.clone());
//! assert!(!cond.is_met());
//!
//! hidden.store(true, Ordering::SeqCst);
//! assert!(cond.is_met());
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Callback form of a condition.
/// Send + Sync so formats can live in shared statics and inside bubbletea-rs models.
pub type ConditionFn = Arc<dyn Fn() -> bool + Send + Sync>;

/// A boolean query evaluated at render time.
#[derive(Clone, Default)]
pub enum Condition {
    /// Never met. This is the default for every hook.
    #[default]
    Never,
    /// Always met.
    Always,
    /// Met while the shared flag is set.
    Flag(Arc<AtomicBool>),
    /// Met while the callback returns `true`.
    When(ConditionFn),
}

impl Condition {
    /// A condition that is never met.
    pub fn never() -> Self {
        Condition::Never
    }

    /// A condition that is always met.
    pub fn always() -> Self {
        Condition::Always
    }

    /// A condition that follows a shared flag.
    pub fn flag(flag: Arc<AtomicBool>) -> Self {
        Condition::Flag(flag)
    }

    /// A condition backed by an arbitrary callback.
    ///
    /// ```rust
    /// use bubbletea_progress::condition::Condition;
    ///
    /// let cond = Condition::when(|| 2 + 2 == 4);
    /// assert!(cond.is_met());
    /// ```
    pub fn when<F>(f: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Condition::When(Arc::new(f))
    }

    /// Evaluates the condition.
    pub fn is_met(&self) -> bool {
        match self {
            Condition::Never => false,
            Condition::Always => true,
            Condition::Flag(flag) => flag.load(Ordering::SeqCst),
            Condition::When(f) => f(),
        }
    }
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        if value {
            Condition::Always
        } else {
            Condition::Never
        }
    }
}

impl From<Arc<AtomicBool>> for Condition {
    fn from(flag: Arc<AtomicBool>) -> Self {
        Condition::Flag(flag)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Never => f.write_str("Never"),
            Condition::Always => f.write_str("Always"),
            Condition::Flag(flag) => f
                .debug_tuple("Flag")
                .field(&flag.load(Ordering::SeqCst))
                .finish(),
            Condition::When(_) => f.write_str("When(..)"),
        }
    }
}
