//! Decorative wrapping shared by the progress bar and the marquee.
//!
//! An envelope surrounds a widget's track with padding and a pair of
//! decorative strings:
//!
//! ```text
//! pad * padding_left + left + track + right + pad * padding_right
//! ```
//!
//! Lengths are measured in cells, one cell per extended grapheme cluster.

use unicode_segmentation::UnicodeSegmentation;

/// Padding and decorative strings placed around a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Decoration placed before the track.
    pub left: String,
    /// Decoration placed after the track.
    pub right: String,
    /// Number of pad characters before `left`.
    pub padding_left: usize,
    /// Number of pad characters after `right`.
    pub padding_right: usize,
    /// Character used for padding.
    pub pad: char,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            padding_left: 0,
            padding_right: 0,
            pad: ' ',
        }
    }
}

impl Envelope {
    /// Width in cells of everything except the track.
    ///
    /// ```rust
    /// use bubbletea_progress::envelope::Envelope;
    ///
    /// let env = Envelope {
    ///     left: "[".to_string(),
    ///     right: "]".to_string(),
    ///     padding_left: 1,
    ///     padding_right: 2,
    ///     pad: ' ',
    /// };
    /// assert_eq!(env.width(), 5);
    /// ```
    pub fn width(&self) -> usize {
        self.padding_left + self.padding_right + cell_len(&self.left) + cell_len(&self.right)
    }

    /// Wraps a track with padding and decorations.
    pub fn wrap(&self, track: &str) -> String {
        let mut out = String::with_capacity(
            track.len() + self.left.len() + self.right.len() + self.padding_left + self.padding_right,
        );
        push_fill(&mut out, self.pad, self.padding_left);
        out.push_str(&self.left);
        out.push_str(track);
        out.push_str(&self.right);
        push_fill(&mut out, self.pad, self.padding_right);
        out
    }
}

/// Number of cells in `s`.
pub fn cell_len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Splits `s` into cells.
pub fn cells(s: &str) -> Vec<&str> {
    s.graphemes(true).collect()
}

/// `ch` repeated `n` times.
pub fn fill(ch: char, n: usize) -> String {
    let mut out = String::with_capacity(n * ch.len_utf8());
    push_fill(&mut out, ch, n);
    out
}

pub(crate) fn push_fill(out: &mut String, ch: char, n: usize) {
    out.extend(std::iter::repeat(ch).take(n));
}

/// Left-aligns `s` in exactly `width` cells, padding with `ch` or cutting
/// off the cells that do not fit.
pub fn fit(s: &str, width: usize, ch: char) -> String {
    let mut out = String::with_capacity(width.max(s.len()));
    let mut used = 0;
    for cell in s.graphemes(true).take(width) {
        out.push_str(cell);
        used += 1;
    }
    push_fill(&mut out, ch, width - used);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bracketed() -> Envelope {
        Envelope {
            left: "LEFT".to_string(),
            right: "RIGHT".to_string(),
            padding_left: 3,
            padding_right: 2,
            pad: '0',
        }
    }

    #[test]
    fn test_default_envelope_is_transparent() {
        let env = Envelope::default();
        assert_eq!(env.width(), 0);
        assert_eq!(env.wrap("abc"), "abc");
    }

    #[test]
    fn test_wrap_order() {
        assert_eq!(bracketed().wrap(" "), "000LEFT RIGHT00");
    }

    #[test]
    fn test_width_excludes_track() {
        let env = bracketed();
        assert_eq!(env.width(), 14);
        assert_eq!(cell_len(&env.wrap("xyz")), env.width() + 3);
    }

    #[test]
    fn test_cells_count_graphemes() {
        // e + combining acute accent is a single cell
        assert_eq!(cell_len("e\u{301}x"), 2);
        assert_eq!(cells("ab"), vec!["a", "b"]);
        assert_eq!(cell_len("▉░"), 2);
    }

    #[test]
    fn test_fill() {
        assert_eq!(fill('.', 3), "...");
        assert_eq!(fill('░', 2), "░░");
        assert_eq!(fill('x', 0), "");
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("Done!", 10, '.'), "Done!.....");
        assert_eq!(fit("Finished", 4, '.'), "Fini");
        assert_eq!(fit("", 3, '-'), "---");
        assert_eq!(fit("abc", 0, '-'), "");
    }
}
