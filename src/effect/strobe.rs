//! Whole range flashes between foreground and background

use super::EffectState;
use crate::color::{Rgb, fill_solid};

pub(crate) fn render(state: &mut EffectState, leds: &mut [Rgb]) {
    let color = if state.counter.rem_euclid(2) == 0 {
        state.color
    } else {
        state.background
    };
    fill_solid(leds, state.range, color);
    state.counter = state.counter.wrapping_add(1);
}
