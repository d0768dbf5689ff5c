use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bounds::PixelRange;
use crate::color::{self, BLACK, Rgb, rgb_from_kelvin};
use crate::effect::{
    Direction, EffectKind, EffectState, EffectStatus, SUBTYPE_COMET, SUBTYPE_LARSON,
    SUBTYPE_RANDOM, SUBTYPE_STATIC, chase, comet, fade, fill, glow, noise, pulse, rainbow,
    strobe, talking, wave,
};
use crate::source::{Clock, RandomSource};

/// Initial configuration of an effect instance
#[derive(Debug, Clone)]
pub struct EffectConfig {
    pub kind: EffectKind,
    pub range: PixelRange,
    /// Length of the sub-pattern inside the range
    pub area: usize,
    /// Time between frames
    pub interval: Duration,
    pub color: Rgb,
    pub repeat: bool,
    pub direction: Direction,
}

/// One effect animating a range of a shared pixel buffer
///
/// The instance never owns the buffer: every [`tick`](Self::tick) borrows
/// it, so several instances can drive different ranges of the same strip.
/// Overlapping ranges are not merged, the last instance to tick wins.
#[derive(Debug, Clone, Default)]
pub struct PixelEffect {
    state: EffectState,
}

impl PixelEffect {
    /// Create an effect from the initial configuration
    ///
    /// Values are applied through the regular setters, so invalid ones keep
    /// the idle defaults.
    pub fn new(config: &EffectConfig) -> Self {
        let mut effect = Self::default();
        effect.state.color = config.color;
        effect.state.repeat = config.repeat;
        effect.state.direction = config.direction;
        effect.set_range(config.range.start(), config.range.end());
        effect.set_area_of_effect(config.area);
        effect.set_interval(config.interval);
        effect.set_effect(config.kind);
        effect
    }

    /// Current effect state
    pub const fn state(&self) -> &EffectState {
        &self.state
    }

    /// Render one frame if the update interval has elapsed
    ///
    /// Call this as often as possible, the effect paces itself. The range
    /// must fit into `leds`; a range that does not is a caller bug and
    /// renders nothing.
    pub fn tick<R: RandomSource>(&mut self, now: Instant, leds: &mut [Rgb], rng: &mut R) {
        if self.state.kind == EffectKind::None && self.state.status != EffectStatus::Active {
            return;
        }
        if !self.is_due(now) {
            return;
        }

        debug_assert!(
            self.state.range.fits(leds.len()),
            "effect range ends past the pixel buffer"
        );
        if !self.state.range.fits(leds.len()) {
            return;
        }

        self.state.last_update = Some(now);
        self.render(now, leds, rng);
    }

    /// Read the clock and [`tick`](Self::tick)
    pub fn update<C: Clock, R: RandomSource>(&mut self, clock: &C, leds: &mut [Rgb], rng: &mut R) {
        self.tick(clock.now(), leds, rng);
    }

    fn is_due(&self, now: Instant) -> bool {
        let Some(last) = self.state.last_update else {
            return true;
        };
        let elapsed = now.as_ticks().wrapping_sub(last.as_ticks());
        elapsed > self.state.interval.as_ticks()
    }

    fn render<R: RandomSource>(&mut self, now: Instant, leds: &mut [Rgb], rng: &mut R) {
        let state = &mut self.state;
        match state.kind {
            EffectKind::Comet => {
                state.subtype = SUBTYPE_COMET;
                comet::render(state, leds);
            }
            EffectKind::Larson => {
                state.subtype = SUBTYPE_LARSON;
                comet::render(state, leds);
            }
            EffectKind::Chase => chase::render(state, leds),
            EffectKind::Pulse => pulse::render(state, leds),
            EffectKind::Static => {
                state.subtype = SUBTYPE_STATIC;
                noise::render(state, leds, rng);
            }
            EffectKind::Random => {
                state.subtype = SUBTYPE_RANDOM;
                noise::render(state, leds, rng);
            }
            EffectKind::Fade => fade::render(state, leds),
            EffectKind::FillIn => fill::render(state, leds),
            EffectKind::Glow => glow::render(state, leds),
            EffectKind::RainbowWave => rainbow::render(state, leds),
            EffectKind::Strobe => strobe::render(state, leds),
            EffectKind::SineWave => wave::render(state, leds),
            EffectKind::Talking => talking::render(state, leds, rng, now),
            EffectKind::None => {}
        }

        #[cfg(feature = "esp32-log")]
        {
            if state.status == EffectStatus::Inactive {
                println!("[PixelEffect.render] effect finished");
            }
        }
    }

    /// Select an effect and restart it from the beginning of the range
    ///
    /// Forward effects start at the first pixel with the counter at 0,
    /// reverse effects at the last pixel with the counter at 100.
    pub fn set_effect(&mut self, kind: EffectKind) {
        #[cfg(feature = "esp32-log")]
        println!("[PixelEffect.set_effect] switching to {}", kind.as_str());
        self.state.restart(kind);
    }

    /// Stop rendering until a new effect is selected
    pub fn stop(&mut self) {
        self.state.stop();
    }

    /// Set the inclusive pixel range
    ///
    /// An inverted range is ignored. The cursor moves to the first pixel of
    /// the current direction either way. Area of effect shrinks to fit.
    pub fn set_range(&mut self, start: usize, end: usize) {
        if let Some(range) = PixelRange::new(start, end) {
            self.state.range = range;
            self.state.area = self.state.area.min(range.len());
        } else {
            #[cfg(feature = "esp32-log")]
            println!("[PixelEffect.set_range] ignoring inverted range {}..={}", start, end);
        }
        self.state.cursor = match self.state.direction {
            Direction::Forward => self.state.range.start(),
            Direction::Reverse => self.state.range.end(),
        };
        self.state.last_update = None;
    }

    /// Set the length of the pattern inside the range
    ///
    /// Values outside `1..=range.len()` are ignored.
    pub fn set_area_of_effect(&mut self, area: usize) {
        if area > 0 && area <= self.state.range.len() {
            self.state.area = area;
        } else {
            #[cfg(feature = "esp32-log")]
            println!("[PixelEffect.set_area_of_effect] ignoring area {}", area);
        }
        self.state.last_update = None;
    }

    /// Set the time between frames
    ///
    /// A zero interval is ignored.
    pub fn set_interval(&mut self, interval: Duration) {
        if interval.as_millis() > 0 {
            self.state.interval = interval;
        } else {
            #[cfg(feature = "esp32-log")]
            println!("[PixelEffect.set_interval] ignoring zero interval");
        }
        self.state.last_update = None;
    }

    /// Set the frame rate
    ///
    /// Rates above 1000 Hz are limited to one frame per millisecond,
    /// a zero rate is ignored.
    pub fn set_rate_hz(&mut self, hz: u16) {
        if hz == 0 {
            self.state.last_update = None;
            return;
        }
        let interval_ms = (1000 / u64::from(hz)).max(1);
        self.set_interval(Duration::from_millis(interval_ms));
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.state.color = color;
        self.state.last_update = None;
    }

    pub fn set_color_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.set_color(Rgb { r, g, b });
    }

    /// Set the foreground to the color of a black body at `kelvin`
    pub fn set_color_temperature(&mut self, kelvin: u16) {
        self.set_color(rgb_from_kelvin(kelvin));
    }

    pub fn set_background_color(&mut self, color: Rgb) {
        self.state.background = color;
        self.state.last_update = None;
    }

    pub fn set_repeat(&mut self, repeat: bool) {
        self.state.repeat = repeat;
        self.state.last_update = None;
    }

    /// Set the direction without moving the cursor
    pub fn set_direction(&mut self, direction: Direction) {
        self.state.direction = direction;
        self.state.last_update = None;
    }

    pub fn set_subtype(&mut self, subtype: u8) {
        self.state.subtype = subtype;
        self.state.last_update = None;
    }

    pub fn set_status(&mut self, status: EffectStatus) {
        self.state.status = status;
        self.state.last_update = None;
    }

    /// Paint the whole range black
    pub fn clear(&self, leds: &mut [Rgb]) {
        self.fill_solid(leds, BLACK);
    }

    /// Paint the whole range with one color
    pub fn fill_solid(&self, leds: &mut [Rgb], color: Rgb) {
        if self.state.range.fits(leds.len()) {
            color::fill_solid(leds, self.state.range, color);
        }
    }

    /// Paint the range with a linear gradient between two colors
    pub fn fill_gradient(&self, leds: &mut [Rgb], from: Rgb, to: Rgb) {
        if self.state.range.fits(leds.len()) {
            color::fill_gradient(leds, self.state.range, from, to);
        }
    }
}
