use embassy_time::{Duration, Instant};

use super::{Direction, EffectKind, EffectStatus};
use crate::{bounds::PixelRange, color::Rgb};

/// Private timing and target state of the talking meter
///
/// The meter runs on its own randomized cadence on top of the shared
/// update interval, so every instance keeps its own copy.
#[derive(Debug, Clone, Default)]
pub struct TalkingState {
    /// Set once the meter has been initialized after activation
    pub(crate) started: bool,
    /// Number of pixels lit on each side of the center
    pub(crate) level: usize,
    /// Level the meter is moving towards
    pub(crate) target: usize,
    /// Time to hold the current target before drawing a new one
    pub(crate) hold: Duration,
    /// Time the current target was drawn
    pub(crate) retargeted_at: Option<Instant>,
}

impl TalkingState {
    pub const fn level(&self) -> usize {
        self.level
    }

    pub const fn target(&self) -> usize {
        self.target
    }
}

/// Per-instance effect state
///
/// Holds range, phase and timing of one effect. Invariants:
/// - `0 < area <= range.len()`
/// - `range.start() <= cursor <= range.end()`
#[derive(Debug, Clone)]
pub struct EffectState {
    pub(crate) kind: EffectKind,
    pub(crate) status: EffectStatus,
    pub(crate) range: PixelRange,
    /// Length of the sub-pattern inside the range
    pub(crate) area: usize,
    pub(crate) cursor: usize,
    /// Bounded to 0-100 for breathing effects, free-running otherwise
    pub(crate) counter: i32,
    pub(crate) subtype: u8,
    pub(crate) direction: Direction,
    pub(crate) repeat: bool,
    pub(crate) color: Rgb,
    pub(crate) background: Rgb,
    pub(crate) interval: Duration,
    /// `None` forces a render on the next tick
    pub(crate) last_update: Option<Instant>,
    pub(crate) talking: TalkingState,
}

impl Default for EffectState {
    fn default() -> Self {
        Self {
            kind: EffectKind::None,
            status: EffectStatus::Inactive,
            range: PixelRange::default(),
            area: 1,
            cursor: 0,
            counter: 0,
            subtype: 0,
            direction: Direction::Forward,
            repeat: true,
            color: Rgb::default(),
            background: Rgb::default(),
            interval: Duration::from_millis(0),
            last_update: None,
            talking: TalkingState::default(),
        }
    }
}

impl EffectState {
    pub const fn kind(&self) -> EffectKind {
        self.kind
    }

    pub const fn status(&self) -> EffectStatus {
        self.status
    }

    pub const fn range(&self) -> PixelRange {
        self.range
    }

    pub const fn area(&self) -> usize {
        self.area
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn counter(&self) -> i32 {
        self.counter
    }

    pub const fn subtype(&self) -> u8 {
        self.subtype
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn repeat(&self) -> bool {
        self.repeat
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub const fn background(&self) -> Rgb {
        self.background
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub const fn talking(&self) -> &TalkingState {
        &self.talking
    }

    /// Select an effect and rewind cursor and counter for the current direction
    pub(crate) fn restart(&mut self, kind: EffectKind) {
        self.kind = kind;
        self.rewind();
        self.talking = TalkingState::default();
        if kind != EffectKind::None {
            self.status = EffectStatus::Active;
        }
        self.last_update = None;
    }

    /// Move the cursor to the first pixel of the current direction
    pub(crate) fn rewind(&mut self) {
        match self.direction {
            Direction::Forward => {
                self.cursor = self.range.start();
                self.counter = 0;
            }
            Direction::Reverse => {
                self.cursor = self.range.end();
                self.counter = 100;
            }
        }
    }

    /// Drop the effect, terminal until a new effect is selected
    pub(crate) fn stop(&mut self) {
        self.restart(EffectKind::None);
        self.status = EffectStatus::Inactive;
    }
}
