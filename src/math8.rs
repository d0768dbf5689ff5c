//! 8-bit waveform helpers ported from `FastLED`

/// Slope/offset pairs for the four quarter-wave segments of [`sin8`]
const SIN8_SEGMENTS: [u8; 8] = [0, 49, 49, 41, 90, 27, 117, 10];

/// Fast 8-bit sine approximation
///
/// Maps `theta` (0-255 = one full turn) to 0-255, centered on 128.
/// Piecewise linear, bit-exact with `FastLED`'s `sin8_C`.
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub const fn sin8(theta: u8) -> u8 {
    let mut offset = theta;
    if theta & 0x40 != 0 {
        offset = 255 - offset;
    }
    offset &= 0x3F;

    let mut secoffset = offset & 0x0F;
    if theta & 0x40 != 0 {
        secoffset += 1;
    }

    let section = (offset >> 4) as usize;
    let b = SIN8_SEGMENTS[section * 2];
    let m16 = SIN8_SEGMENTS[section * 2 + 1];

    let mx = ((m16 as u16 * secoffset as u16) >> 4) as u8;

    let mut y = mx.wrapping_add(b) as i8;
    if theta & 0x80 != 0 {
        y = y.wrapping_neg();
    }

    y.wrapping_add(-128) as u8
}

/// Triangle wave: 0 at 0, 254 at 127, back down to 0
pub const fn triwave8(theta: u8) -> u8 {
    let folded = if theta & 0x80 != 0 { 255 - theta } else { theta };
    folded << 1
}
