//! Static and random noise
//!
//! Every frame redraws the whole range from the random source: either the
//! foreground scaled by a random ratio, or a fully random color.

use super::{EffectState, SUBTYPE_STATIC};
use crate::{
    RandomSource,
    color::{Rgb, scale_by_ratio},
};

/// Exclusive upper bound of a random percentage draw
const PERCENT_LIMIT: u8 = 101;

pub(crate) fn render<R: RandomSource>(state: &EffectState, leds: &mut [Rgb], rng: &mut R) {
    let entropy = rng.random16(0, u16::MAX);
    rng.add_entropy(entropy);

    for led in &mut leds[state.range.start()..=state.range.end()] {
        *led = if state.subtype == SUBTYPE_STATIC {
            scale_by_ratio(state.color, random_ratio(rng))
        } else {
            Rgb {
                r: random_channel(rng),
                g: random_channel(rng),
                b: random_channel(rng),
            }
        };
    }
}

fn random_percent<R: RandomSource>(rng: &mut R) -> u8 {
    rng.random8(0, PERCENT_LIMIT)
}

fn random_ratio<R: RandomSource>(rng: &mut R) -> f32 {
    f32::from(random_percent(rng)) / 100.0
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn random_channel<R: RandomSource>(rng: &mut R) -> u8 {
    (f32::from(u16::from(random_percent(rng)) * 255) / 100.0) as u8
}
