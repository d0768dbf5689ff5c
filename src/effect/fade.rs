//! Fade whatever is in the buffer down to black

use super::{EffectState, pulse::PHASE_MAX};
use crate::color::{BLACK, Rgb, is_black, scale_percent};

pub(crate) fn render(state: &mut EffectState, leds: &mut [Rgb]) {
    if state.counter == 0 {
        state.counter = PHASE_MAX;
    }

    let mut last = BLACK;
    for led in &mut leds[state.range.start()..=state.range.end()] {
        last = scale_percent(*led, state.counter);
        *led = last;
    }

    state.counter -= 1;

    if state.counter <= 0 || is_black(last) {
        state.stop();
    }
}
