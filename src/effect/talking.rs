//! Talking meter
//!
//! A bar that grows outwards from the two center pixels, like a voice
//! level indicator. On its own randomized cadence the meter picks a new
//! peak, climbs to it one pixel per frame and falls back to zero. While at
//! zero a dim glow marks the center.

use embassy_time::{Duration, Instant};

use super::{Direction, EffectState, TalkingState};
use crate::{
    RandomSource,
    bounds::PixelRange,
    color::{BLACK, Rgb, fill_solid, scale_by_ratio},
};

const HOLD_MIN_MS: u16 = 150;
const HOLD_MAX_MS: u16 = 450;
const MIN_PEAK: u8 = 3;

const IDLE_INNER_RATIO: f32 = 0.2;
const IDLE_OUTER_RATIO: f32 = 0.1;

pub(crate) fn render<R: RandomSource>(
    state: &mut EffectState,
    leds: &mut [Rgb],
    rng: &mut R,
    now: Instant,
) {
    if !state.talking.started {
        state.talking.level = 0;
        state.direction = Direction::Forward;
        state.talking.started = true;
    }

    if hold_expired(&state.talking, now) {
        let talking = &mut state.talking;
        talking.retargeted_at = Some(now);
        talking.hold = Duration::from_millis(u64::from(rng.random16(HOLD_MIN_MS, HOLD_MAX_MS)));
        talking.target = draw_peak(state.range.center(), rng);
        state.direction = if talking.target > talking.level {
            Direction::Forward
        } else {
            Direction::Reverse
        };
    }

    step(state);
    draw(state, leds);
}

fn hold_expired(talking: &TalkingState, now: Instant) -> bool {
    let Some(at) = talking.retargeted_at else {
        return true;
    };
    now.as_ticks().wrapping_sub(at.as_ticks()) > talking.hold.as_ticks()
}

/// Random peak in `[3, half)`, or `half` when the range is too short for that
fn draw_peak<R: RandomSource>(half: usize, rng: &mut R) -> usize {
    let limit = u8::try_from(half).unwrap_or(u8::MAX);
    if limit <= MIN_PEAK {
        return half;
    }
    usize::from(rng.random8(MIN_PEAK, limit))
}

fn step(state: &mut EffectState) {
    let half = state.range.center();
    let talking = &mut state.talking;

    if talking.level != talking.target {
        talking.level = match state.direction {
            Direction::Forward => (talking.level + 1).min(half),
            Direction::Reverse => talking.level.saturating_sub(1),
        };
    } else if talking.target != 0 {
        talking.target = 0;
        state.direction = Direction::Reverse;
    } else if state.direction == Direction::Reverse {
        state.direction = Direction::Forward;
    }
}

fn draw(state: &EffectState, leds: &mut [Rgb]) {
    let range = state.range;
    let center = range.start() + range.center();
    fill_solid(leds, range, BLACK);

    let level = state.talking.level;
    if level != 0 {
        for i in 0..level {
            put(leds, range, center.checked_sub(1 + i), state.color);
            put(leds, range, Some(center + i), state.color);
        }
        return;
    }

    let inner = scale_by_ratio(state.color, IDLE_INNER_RATIO);
    let outer = scale_by_ratio(state.color, IDLE_OUTER_RATIO);
    put(leds, range, center.checked_sub(1), inner);
    put(leds, range, Some(center), inner);
    put(leds, range, center.checked_sub(2), outer);
    put(leds, range, Some(center + 1), outer);
}

/// Write a pixel only if it lies inside the range
fn put(leds: &mut [Rgb], range: PixelRange, index: Option<usize>, color: Rgb) {
    if let Some(index) = index.filter(|index| range.contains(*index)) {
        leds[index] = color;
    }
}
