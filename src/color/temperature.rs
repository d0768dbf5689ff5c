use super::Rgb;

const MIN_KELVIN: f32 = 1_000.0;
const MAX_KELVIN: f32 = 40_000.0;

/// Convert a color temperature to an RGB color
///
/// Uses Tanner Helland's curve fit of the black body spectrum.
/// Temperatures are clamped to 1000K-40000K.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_from_kelvin(kelvin: u16) -> Rgb {
    let temp = f32::from(kelvin).clamp(MIN_KELVIN, MAX_KELVIN) / 100.0;

    let red = if temp <= 66.0 {
        255.0
    } else {
        329.698_73 * libm::powf(temp - 60.0, -0.133_204_76)
    };

    let green = if temp <= 66.0 {
        99.470_8 * libm::logf(temp) - 161.119_57
    } else {
        288.122_17 * libm::powf(temp - 60.0, -0.075_514_85)
    };

    let blue = if temp >= 66.0 {
        255.0
    } else if temp <= 19.0 {
        0.0
    } else {
        138.517_73 * libm::logf(temp - 10.0) - 305.044_8
    };

    Rgb {
        r: red.clamp(0.0, 255.0) as u8,
        g: green.clamp(0.0, 255.0) as u8,
        b: blue.clamp(0.0, 255.0) as u8,
    }
}
