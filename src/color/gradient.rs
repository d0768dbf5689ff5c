use crate::{bounds::PixelRange, color::Rgb};

/// Fill every pixel of the range with one color
pub fn fill_solid(leds: &mut [Rgb], range: PixelRange, color: Rgb) {
    for led in &mut leds[range.start()..=range.end()] {
        *led = color;
    }
}

/// Fill the range with a linear gradient from `from` towards `to`
///
/// The last pixel stops one step short of `to`: pixel `i` gets
/// `from - (from - to) * (i / len)`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn fill_gradient(leds: &mut [Rgb], range: PixelRange, from: Rgb, to: Rgb) {
    let delta_r = f32::from(i16::from(from.r) - i16::from(to.r));
    let delta_g = f32::from(i16::from(from.g) - i16::from(to.g));
    let delta_b = f32::from(i16::from(from.b) - i16::from(to.b));
    let len = range.len() as f32;

    for (offset, led) in leds[range.start()..=range.end()].iter_mut().enumerate() {
        let part = offset as f32 / len;
        *led = Rgb {
            r: (f32::from(from.r) - delta_r * part) as u8,
            g: (f32::from(from.g) - delta_g * part) as u8,
            b: (f32::from(from.b) - delta_b * part) as u8,
        };
    }
}
