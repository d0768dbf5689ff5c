#![allow(dead_code)]

use myrtio_pixel_effects::{
    Clock, Direction, Duration, EffectConfig, EffectKind, Instant, PixelEffect, PixelRange,
    RandomSource, Rgb,
};

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
/// Marks pixels an effect must not touch
pub const SENTINEL: Rgb = Rgb { r: 1, g: 2, b: 3 };

/// Random source that always answers the same values
pub struct ScriptedRandom {
    pub value8: u8,
    pub value16: u16,
    pub draws8: usize,
    pub entropy_calls: usize,
}

impl ScriptedRandom {
    pub fn new(value8: u8, value16: u16) -> Self {
        Self {
            value8,
            value16,
            draws8: 0,
            entropy_calls: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn random8(&mut self, lo: u8, hi: u8) -> u8 {
        self.draws8 += 1;
        if hi <= lo {
            return lo;
        }
        self.value8.clamp(lo, hi - 1)
    }

    fn random16(&mut self, lo: u16, hi: u16) -> u16 {
        if hi <= lo {
            return lo;
        }
        self.value16.clamp(lo, hi - 1)
    }

    fn add_entropy(&mut self, _entropy: u16) {
        self.entropy_calls += 1;
    }
}

pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.0)
    }
}

pub fn config(kind: EffectKind, start: usize, end: usize, color: Rgb) -> EffectConfig {
    EffectConfig {
        kind,
        range: PixelRange::new(start, end).expect("valid range"),
        area: 1,
        interval: Duration::from_millis(10),
        color,
        repeat: true,
        direction: Direction::Forward,
    }
}

/// Drives an effect with synthetic time, always past the 10 ms interval
pub struct Ticker {
    pub now: u64,
}

impl Ticker {
    pub const STEP_MS: u64 = 11;

    pub fn new() -> Self {
        Self { now: 0 }
    }

    pub fn tick(&mut self, effect: &mut PixelEffect, leds: &mut [Rgb], rng: &mut ScriptedRandom) {
        self.now += Self::STEP_MS;
        effect.tick(Instant::from_millis(self.now), leds, rng);
    }

    pub fn run(
        &mut self,
        effect: &mut PixelEffect,
        leds: &mut [Rgb],
        rng: &mut ScriptedRandom,
        count: usize,
    ) {
        for _ in 0..count {
            self.tick(effect, leds, rng);
        }
    }
}
