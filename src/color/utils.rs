use crate::color::Rgb;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Scale every channel by a floating point ratio
///
/// Values are truncated towards zero, the same way an 8-bit controller
/// converts a float product back to a channel value. Ratios outside
/// `0.0..=1.0` saturate.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_by_ratio(color: Rgb, ratio: f32) -> Rgb {
    Rgb {
        r: (f32::from(color.r) * ratio) as u8,
        g: (f32::from(color.g) * ratio) as u8,
        b: (f32::from(color.b) * ratio) as u8,
    }
}

/// Scale every channel by `percent / 100`
///
/// `percent` is clamped to 0-100.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn scale_percent(color: Rgb, percent: i32) -> Rgb {
    scale_by_ratio(color, percent.clamp(0, 100) as f32 / 100.0)
}

/// Integer division of every channel
///
/// A zero `denom` yields black.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn divide(color: Rgb, denom: usize) -> Rgb {
    if denom == 0 {
        return BLACK;
    }
    let div = |channel: u8| (usize::from(channel) / denom) as u8;
    Rgb {
        r: div(color.r),
        g: div(color.g),
        b: div(color.b),
    }
}

#[inline]
pub fn is_black(color: Rgb) -> bool {
    color == BLACK
}
