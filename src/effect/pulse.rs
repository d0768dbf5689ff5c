//! Breathing brightness ramp over the whole range

use super::{Direction, EffectState};
use crate::color::{Rgb, fill_solid, scale_percent};

/// Upper bound of the breathing counter
pub(crate) const PHASE_MAX: i32 = 100;

pub(crate) fn render(state: &mut EffectState, leds: &mut [Rgb]) {
    breathe(state);
    let color = scale_percent(state.color, state.counter);
    fill_solid(leds, state.range, color);
}

/// Step the counter one unit and bounce at 0 and 100
///
/// Returns `true` when the ramp has just landed back on 0.
pub(crate) fn breathe(state: &mut EffectState) -> bool {
    match state.direction {
        Direction::Forward => {
            state.counter += 1;
            if state.counter >= PHASE_MAX {
                state.direction = Direction::Reverse;
            }
            false
        }
        Direction::Reverse => {
            state.counter -= 1;
            if state.counter <= 0 {
                state.direction = Direction::Forward;
                return true;
            }
            false
        }
    }
}
