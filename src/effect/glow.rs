//! Symmetric glow
//!
//! A core band of `area` pixels centered in the range holds the glow color.
//! The flanks on both sides fall off as the glow color divided by an
//! increasing integer towards the range ends. The whole pattern breathes
//! like the pulse effect.

use super::{EffectState, pulse};
use crate::color::{Rgb, divide, scale_percent};

pub(crate) fn render(state: &mut EffectState, leds: &mut [Rgb]) {
    balance_area(state);

    let bottomed_out = pulse::breathe(state);
    let glow = scale_percent(state.color, state.counter);
    if bottomed_out && !state.repeat {
        state.stop();
    }

    let range = state.range;
    let flank = flank_len(state);
    for i in 0..flank {
        let color = divide(glow, flank + 1 - i);
        leds[range.start() + i] = color;
        leds[range.end() - i] = color;
    }
    for led in &mut leds[range.start() + flank..range.start() + flank + state.area] {
        *led = glow;
    }
}

/// Nudge the core band so both flanks have the same length
///
/// Area keeps the parity of the range length. Stays within `1..=len`:
/// an odd area in an even range is below the range length, and an even
/// area in an odd range is at least 2.
pub(crate) fn balance_area(state: &mut EffectState) {
    let len_even = state.range.len() % 2 == 0;
    let area_even = state.area % 2 == 0;
    if len_even && !area_even {
        state.area += 1;
    } else if !len_even && area_even {
        state.area -= 1;
    }
}

/// Length of each falloff band around the core
pub(crate) const fn flank_len(state: &EffectState) -> usize {
    (state.range.len() - state.area) / 2
}
