//! Appearance and motion settings for the marquee.

use crate::condition::Condition;
use crate::envelope::Envelope;

/// Filler, envelope, motion flags and override hooks of a marquee.
///
/// # Examples
///
/// ```rust
/// use bubbletea_progress::marquee::MarqueeFormat;
///
/// let format = MarqueeFormat::new()
///     .with_empty('.')
///     .with_bounce(true)
///     .with_left("|")
///     .with_right("|");
///
/// assert!(format.bounce());
/// assert_eq!(format.gap(), None);
/// assert_eq!(format.width(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MarqueeFormat {
    empty: char,
    complete: String,
    envelope: Envelope,
    bounce: bool,
    reverse_text_on_bounce: bool,
    left_to_right: bool,
    gap: Option<usize>,
    complete_when: Condition,
    empty_when: Condition,
    hidden_when: Condition,
}

impl Default for MarqueeFormat {
    fn default() -> Self {
        Self {
            empty: ' ',
            complete: String::new(),
            envelope: Envelope::default(),
            bounce: false,
            reverse_text_on_bounce: false,
            left_to_right: false,
            gap: None,
            complete_when: Condition::Never,
            empty_when: Condition::Never,
            hidden_when: Condition::Never,
        }
    }
}

impl MarqueeFormat {
    /// Creates a format with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the character filling the track around the text.
    pub fn with_empty(mut self, empty: char) -> Self {
        self.empty = empty;
        self
    }

    /// Sets the text shown while `complete_when` is met.
    pub fn with_complete(mut self, complete: impl Into<String>) -> Self {
        self.complete = complete.into();
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

    /// Makes the text travel back and forth instead of wrapping around.
    pub fn with_bounce(mut self, bounce: bool) -> Self {
        self.bounce = bounce;
        self
    }

    /// Mirrors the text every time a bouncing marquee changes direction.
    pub fn with_reverse_text_on_bounce(mut self, reverse: bool) -> Self {
        self.reverse_text_on_bounce = reverse;
        self
    }

    /// Makes the text travel from the left edge toward the right edge.
    pub fn with_left_to_right(mut self, left_to_right: bool) -> Self {
        self.left_to_right = left_to_right;
        self
    }

    /// Sets the number of filler cells between repetitions of the text.
    /// Without a gap the track width is used.
    pub fn with_gap(mut self, gap: usize) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Clears the gap so the track width is used again.
    pub fn without_gap(mut self) -> Self {
        self.gap = None;
        self
    }

    /// Shows the `complete` text while `cond` is met.
    pub fn with_complete_when(mut self, cond: impl Into<Condition>) -> Self {
        self.complete_when = cond.into();
        self
    }

    /// Renders only `empty` characters while `cond` is met.
    pub fn with_empty_when(mut self, cond: impl Into<Condition>) -> Self {
        self.empty_when = cond.into();
        self
    }

    /// Renders a zero-length string while `cond` is met.
    pub fn with_hidden_when(mut self, cond: impl Into<Condition>) -> Self {
        self.hidden_when = cond.into();
        self
    }

    /// Filler character.
    pub fn empty(&self) -> char {
        self.empty
    }

    /// Text shown in the complete state.
    pub fn complete(&self) -> &str {
        &self.complete
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

    /// Whether the marquee bounces.
    pub fn bounce(&self) -> bool {
        self.bounce
    }

    /// Whether the text is mirrored on every bounce.
    pub fn reverse_text_on_bounce(&self) -> bool {
        self.reverse_text_on_bounce
    }

    /// Whether the text travels left to right.
    pub fn left_to_right(&self) -> bool {
        self.left_to_right
    }

    /// Configured gap, if any.
    pub fn gap(&self) -> Option<usize> {
        self.gap
    }

    /// Hook forcing the complete rendering.
    pub fn complete_when(&self) -> &Condition {
        &self.complete_when
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keeps_given_values() {
        let format = MarqueeFormat::new()
            .with_empty('.')
            .with_complete("Done")
            .with_left("<")
            .with_right(">>")
            .with_padding_left(2)
            .with_padding_right(3)
            .with_pad('_')
            .with_bounce(true)
            .with_reverse_text_on_bounce(true)
            .with_left_to_right(true)
            .with_gap(4)
            .with_complete_when(true)
            .with_empty_when(true)
            .with_hidden_when(false);

        assert_eq!(format.empty(), '.');
        assert_eq!(format.complete(), "Done");
        assert_eq!(format.left(), "<");
        assert_eq!(format.right(), ">>");
        assert_eq!(format.padding_left(), 2);
        assert_eq!(format.padding_right(), 3);
        assert_eq!(format.pad(), '_');
        assert!(format.bounce());
        assert!(format.reverse_text_on_bounce());
        assert!(format.left_to_right());
        assert_eq!(format.gap(), Some(4));
        assert!(format.complete_when().is_met());
        assert!(format.empty_when().is_met());
        assert!(!format.hidden_when().is_met());
        assert_eq!(format.width(), 2 + 3 + 1 + 2);
    }

    #[test]
    fn test_zero_gap_is_distinct_from_unset() {
        assert_eq!(MarqueeFormat::new().gap(), None);
        assert_eq!(MarqueeFormat::new().with_gap(0).gap(), Some(0));
        assert_eq!(MarqueeFormat::new().with_gap(3).without_gap().gap(), None);
    }
}
