//! Appearance settings for the progress bar.

use crate::condition::Condition;
use crate::envelope::Envelope;
use once_cell::sync::Lazy;

/// Fill characters, envelope and override hooks of a progress bar.
///
/// A format is built once with the consuming `with_*` methods and then
/// handed to a bar; it has no setters.
///
/// # Examples
///
/// ```rust
/// use bubbletea_progress::progress::BarFormat;
///
/// let format = BarFormat::new()
///     .with_full('=')
///     .with_tip('>')
///     .with_empty(' ')
///     .with_left("[")
///     .with_right("]")
///     .with_padding_left(1);
///
/// assert_eq!(format.width(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct BarFormat {
    empty: char,
    full: char,
    tip: char,
    envelope: Envelope,
    empty_when: Condition,
    hidden_when: Condition,
}

impl Default for BarFormat {
    fn default() -> Self {
        Self {
            empty: ' ',
            full: '█',
            tip: '▌',
            envelope: Envelope::default(),
            empty_when: Condition::Never,
            hidden_when: Condition::Never,
        }
    }
}

impl BarFormat {
    /// Creates a format with the default appearance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the character for the unfilled part of the track.
    pub fn with_empty(mut self, empty: char) -> Self {
        self.empty = empty;
        self
    }

    /// Sets the character for the filled part of the track.
    pub fn with_full(mut self, full: char) -> Self {
        self.full = full;
        self
    }

    /// Sets the character marking the boundary cell.
    pub fn with_tip(mut self, tip: char) -> Self {
        self.tip = tip;
        self
    }

    /// Sets the decoration placed before the track.
    pub fn with_left(mut self, left: impl Into<String>) -> Self {
        self.envelope.left = left.into();
        self
    }

    /// Sets the decoration placed after the track.
    pub fn with_right(mut self, right: impl Into<String>) -> Self {
        self.envelope.right = right.into();
        self
    }

    /// Sets the number of pad characters before the left decoration.
    pub fn with_padding_left(mut self, padding: usize) -> Self {
        self.envelope.padding_left = padding;
        self
    }

    /// Sets the number of pad characters after the right decoration.
    pub fn with_padding_right(mut self, padding: usize) -> Self {
        self.envelope.padding_right = padding;
        self
    }

    /// Sets the padding character.
    pub fn with_pad(mut self, pad: char) -> Self {
        self.envelope.pad = pad;
        self
    }

    /// Replaces the whole envelope.
    pub fn with_envelope(mut self, envelope: Envelope) -> Self {
        self.envelope = envelope;
        self
    }

    /// Renders the bar as `empty` characters only while `cond` is met.
    pub fn with_empty_when(mut self, cond: impl Into<Condition>) -> Self {
        self.empty_when = cond.into();
        self
    }

    /// Renders the bar as a zero-length string while `cond` is met.
    pub fn with_hidden_when(mut self, cond: impl Into<Condition>) -> Self {
        self.hidden_when = cond.into();
        self
    }

    /// Character for the unfilled part of the track.
    pub fn empty(&self) -> char {
        self.empty
    }

    /// Character for the filled part of the track.
    pub fn full(&self) -> char {
        self.full
    }

    /// Character marking the boundary between filled and unfilled cells.
    pub fn tip(&self) -> char {
        self.tip
    }

    /// Decoration placed before the track.
    pub fn left(&self) -> &str {
        &self.envelope.left
    }

    /// Decoration placed after the track.
    pub fn right(&self) -> &str {
        &self.envelope.right
    }

    /// Pad characters before the left decoration.
    pub fn padding_left(&self) -> usize {
        self.envelope.padding_left
    }

    /// Pad characters after the right decoration.
    pub fn padding_right(&self) -> usize {
        self.envelope.padding_right
    }

    /// Padding character.
    pub fn pad(&self) -> char {
        self.envelope.pad
    }

    /// The envelope wrapped around the track.
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Hook forcing the all-empty rendering.
    pub fn empty_when(&self) -> &Condition {
        &self.empty_when
    }

    /// Hook forcing the zero-length rendering.
    pub fn hidden_when(&self) -> &Condition {
        &self.hidden_when
    }

    /// Width of the envelope in cells, excluding the track.
    pub fn width(&self) -> usize {
        self.envelope.width()
    }
}

/// `[=====>    ]`
pub static CLASSIC: Lazy<BarFormat> = Lazy::new(|| {
    BarFormat::new()
        .with_full('=')
        .with_tip('>')
        .with_empty(' ')
        .with_left("[")
        .with_right("]")
});

/// `▉▉▉▉░░░░░░`
pub static BLOCK: Lazy<BarFormat> = Lazy::new(|| {
    BarFormat::new()
        .with_full('▉')
        .with_tip('░')
        .with_empty('░')
});
