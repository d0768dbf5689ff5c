//! Two color checkerboard that swaps phase every frame

use super::EffectState;
use crate::color::Rgb;

pub(crate) fn render(state: &mut EffectState, leds: &mut [Rgb]) {
    let even_phase = state.counter.rem_euclid(2) == 0;
    for (index, led) in leds
        .iter_mut()
        .enumerate()
        .take(state.range.end() + 1)
        .skip(state.range.start())
    {
        let even_pixel = index % 2 == 0;
        *led = if even_pixel == even_phase {
            state.color
        } else {
            state.background
        };
    }
    state.counter = state.counter.wrapping_add(1);
}
