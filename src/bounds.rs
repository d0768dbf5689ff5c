/// Inclusive range of pixels owned by a single effect instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRange {
    start: usize,
    end: usize,
}

impl Default for PixelRange {
    fn default() -> Self {
        Self { start: 0, end: 0 }
    }
}

impl PixelRange {
    /// Create a range from inclusive bounds
    ///
    /// Returns `None` if `start > end`.
    pub const fn new(start: usize, end: usize) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(Self { start, end })
    }

    /// First pixel of the range
    pub const fn start(self) -> usize {
        self.start
    }

    /// Last pixel of the range
    pub const fn end(self) -> usize {
        self.end
    }

    /// Get the number of pixels in the range
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        self.end - self.start + 1
    }

    /// Returns the number of pixels before the center of the range
    pub const fn center(self) -> usize {
        self.len() / 2
    }

    /// Check if the range can be rendered into a buffer of `buffer_len` pixels
    pub const fn fits(self, buffer_len: usize) -> bool {
        self.end < buffer_len
    }

    pub const fn contains(self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }
}
