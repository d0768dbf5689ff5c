//! Comet and larson scanner
//!
//! Draws a tail of `area + 1` pixels ahead of the cursor with linearly
//! increasing brightness, then moves the cursor by one pixel.

use super::{Direction, EffectState, SUBTYPE_LARSON};
use crate::color::{Rgb, scale_by_ratio};

#[allow(clippy::cast_precision_loss)]
pub(crate) fn render(state: &mut EffectState, leds: &mut [Rgb]) {
    // The scanner only bounces, it never wraps
    if state.subtype == SUBTYPE_LARSON {
        state.repeat = false;
    }

    let area = state.area as f32;
    for offset in 0..=state.area {
        let Some(index) = tail_index(state, offset) else {
            continue;
        };
        leds[index] = scale_by_ratio(state.color, offset as f32 / area);
    }

    advance(state);
}

/// Pixel covered by the tail at `offset`, wrapped or suppressed at the range edge
fn tail_index(state: &EffectState, offset: usize) -> Option<usize> {
    let range = state.range;
    match state.direction {
        Direction::Forward => {
            let index = state.cursor + offset;
            if index <= range.end() {
                Some(index)
            } else if state.repeat {
                Some(index - range.len())
            } else {
                None
            }
        }
        Direction::Reverse => {
            if state.cursor >= range.start() + offset {
                Some(state.cursor - offset)
            } else if state.repeat {
                Some(state.cursor + range.len() - offset)
            } else {
                None
            }
        }
    }
}

fn advance(state: &mut EffectState) {
    let range = state.range;
    let edge = match state.direction {
        Direction::Forward => range.end(),
        Direction::Reverse => range.start(),
    };

    if state.cursor != edge {
        match state.direction {
            Direction::Forward => state.cursor += 1,
            Direction::Reverse => state.cursor -= 1,
        }
        return;
    }

    if state.repeat {
        state.cursor = match state.direction {
            Direction::Forward => range.start(),
            Direction::Reverse => range.end(),
        };
    } else if state.subtype == SUBTYPE_LARSON {
        state.direction = state.direction.reversed();
    } else {
        state.stop();
    }
}
