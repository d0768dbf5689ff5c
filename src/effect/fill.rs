//! Reveal the range one pixel per frame, then stop

use super::{Direction, EffectState};
use crate::color::Rgb;

pub(crate) fn render(state: &mut EffectState, leds: &mut [Rgb]) {
    leds[state.cursor] = state.color;

    match state.direction {
        Direction::Forward if state.cursor != state.range.end() => state.cursor += 1,
        Direction::Reverse if state.cursor != state.range.start() => state.cursor -= 1,
        _ => state.stop(),
    }
}
