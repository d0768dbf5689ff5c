//! Static sine (or triangle) brightness profile across the range

use super::{Direction, EffectState, SUBTYPE_TRIANGLE};
use crate::{
    color::{Rgb, scale_by_ratio},
    math8::{sin8, triwave8},
};

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn render(state: &mut EffectState, leds: &mut [Rgb]) {
    let range = state.range;
    let len = range.len();

    for (offset, led) in leds[range.start()..=range.end()].iter_mut().enumerate() {
        // offset < len, so the phase stays below 255
        let theta = (255 * offset / len) as u8;
        let level = if state.subtype == SUBTYPE_TRIANGLE {
            triwave8(theta)
        } else {
            sin8(theta)
        };
        *led = scale_by_ratio(state.color, f32::from(level) / 255.0);
    }

    state.counter = match state.direction {
        Direction::Forward => state.counter.wrapping_add(1),
        Direction::Reverse => state.counter.wrapping_sub(1),
    };
}
