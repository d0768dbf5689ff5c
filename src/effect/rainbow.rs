//! Scrolling rainbow

use super::{Direction, EffectState};
use crate::color::{Hsv, Rgb, hsv2rgb};

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub(crate) fn render(state: &mut EffectState, leds: &mut [Rgb]) {
    let range = state.range;
    let hue_step = 255.0 / range.len() as f32;

    for (offset, led) in leds[range.start()..=range.end()].iter_mut().enumerate() {
        let position = state.counter.wrapping_add(offset as i32) as f32;
        let hue = ((position * hue_step) as i32).rem_euclid(256) as u8;
        *led = hsv2rgb(Hsv {
            hue,
            sat: 255,
            val: 255,
        });
    }

    state.counter = match state.direction {
        Direction::Forward => state.counter.wrapping_add(1),
        Direction::Reverse => state.counter.wrapping_sub(1),
    };
}
