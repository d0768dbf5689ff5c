//! Effect algorithms and identifiers
//!
//! Every effect is a function over the shared [`EffectState`] and the
//! caller's pixel buffer. Algorithms only touch pixels inside the state's
//! range and advance their own cursor, counter and direction.

pub(crate) mod chase;
pub(crate) mod comet;
pub(crate) mod fade;
pub(crate) mod fill;
pub(crate) mod glow;
pub(crate) mod noise;
pub(crate) mod pulse;
pub(crate) mod rainbow;
pub(crate) mod state;
pub(crate) mod strobe;
pub(crate) mod talking;
pub(crate) mod wave;

pub use state::{EffectState, TalkingState};

const EFFECT_NAME_COMET: &str = "comet";
const EFFECT_NAME_LARSON: &str = "larson";
const EFFECT_NAME_CHASE: &str = "chase";
const EFFECT_NAME_PULSE: &str = "pulse";
const EFFECT_NAME_STATIC: &str = "static";
const EFFECT_NAME_RANDOM: &str = "random";
const EFFECT_NAME_FADE: &str = "fade";
const EFFECT_NAME_FILL_IN: &str = "fill_in";
const EFFECT_NAME_GLOW: &str = "glow";
const EFFECT_NAME_RAINBOW_WAVE: &str = "rainbow_wave";
const EFFECT_NAME_STROBE: &str = "strobe";
const EFFECT_NAME_SINE_WAVE: &str = "sine_wave";
const EFFECT_NAME_TALKING: &str = "talking";
const EFFECT_NAME_NONE: &str = "none";

const EFFECT_ID_COMET: u8 = 0;
const EFFECT_ID_LARSON: u8 = 1;
const EFFECT_ID_CHASE: u8 = 2;
const EFFECT_ID_PULSE: u8 = 3;
const EFFECT_ID_STATIC: u8 = 4;
const EFFECT_ID_RANDOM: u8 = 5;
const EFFECT_ID_FADE: u8 = 6;
const EFFECT_ID_FILL_IN: u8 = 7;
const EFFECT_ID_GLOW: u8 = 8;
const EFFECT_ID_RAINBOW_WAVE: u8 = 9;
const EFFECT_ID_STROBE: u8 = 10;
const EFFECT_ID_SINE_WAVE: u8 = 11;
const EFFECT_ID_TALKING: u8 = 12;
const EFFECT_ID_NONE: u8 = 255;

/// Comet subtype: tail sweeps and wraps (or stops)
pub const SUBTYPE_COMET: u8 = 0;
/// Comet subtype: tail bounces between the range ends
pub const SUBTYPE_LARSON: u8 = 1;
/// Noise subtype: foreground scaled by a random ratio per pixel
pub const SUBTYPE_STATIC: u8 = 0;
/// Noise subtype: fully random color per pixel
pub const SUBTYPE_RANDOM: u8 = 1;
/// Wave subtype: sine brightness profile
pub const SUBTYPE_SINE: u8 = 0;
/// Wave subtype: triangle brightness profile
pub const SUBTYPE_TRIANGLE: u8 = 1;

/// Known effect kinds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectKind {
    Comet = EFFECT_ID_COMET,
    Larson = EFFECT_ID_LARSON,
    Chase = EFFECT_ID_CHASE,
    Pulse = EFFECT_ID_PULSE,
    Static = EFFECT_ID_STATIC,
    Random = EFFECT_ID_RANDOM,
    Fade = EFFECT_ID_FADE,
    FillIn = EFFECT_ID_FILL_IN,
    Glow = EFFECT_ID_GLOW,
    RainbowWave = EFFECT_ID_RAINBOW_WAVE,
    Strobe = EFFECT_ID_STROBE,
    SineWave = EFFECT_ID_SINE_WAVE,
    Talking = EFFECT_ID_TALKING,
    /// Idle, nothing is rendered
    #[default]
    None = EFFECT_ID_NONE,
}

impl EffectKind {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_COMET => Self::Comet,
            EFFECT_ID_LARSON => Self::Larson,
            EFFECT_ID_CHASE => Self::Chase,
            EFFECT_ID_PULSE => Self::Pulse,
            EFFECT_ID_STATIC => Self::Static,
            EFFECT_ID_RANDOM => Self::Random,
            EFFECT_ID_FADE => Self::Fade,
            EFFECT_ID_FILL_IN => Self::FillIn,
            EFFECT_ID_GLOW => Self::Glow,
            EFFECT_ID_RAINBOW_WAVE => Self::RainbowWave,
            EFFECT_ID_STROBE => Self::Strobe,
            EFFECT_ID_SINE_WAVE => Self::SineWave,
            EFFECT_ID_TALKING => Self::Talking,
            EFFECT_ID_NONE => Self::None,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comet => EFFECT_NAME_COMET,
            Self::Larson => EFFECT_NAME_LARSON,
            Self::Chase => EFFECT_NAME_CHASE,
            Self::Pulse => EFFECT_NAME_PULSE,
            Self::Static => EFFECT_NAME_STATIC,
            Self::Random => EFFECT_NAME_RANDOM,
            Self::Fade => EFFECT_NAME_FADE,
            Self::FillIn => EFFECT_NAME_FILL_IN,
            Self::Glow => EFFECT_NAME_GLOW,
            Self::RainbowWave => EFFECT_NAME_RAINBOW_WAVE,
            Self::Strobe => EFFECT_NAME_STROBE,
            Self::SineWave => EFFECT_NAME_SINE_WAVE,
            Self::Talking => EFFECT_NAME_TALKING,
            Self::None => EFFECT_NAME_NONE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_COMET => Some(Self::Comet),
            EFFECT_NAME_LARSON => Some(Self::Larson),
            EFFECT_NAME_CHASE => Some(Self::Chase),
            EFFECT_NAME_PULSE => Some(Self::Pulse),
            EFFECT_NAME_STATIC => Some(Self::Static),
            EFFECT_NAME_RANDOM => Some(Self::Random),
            EFFECT_NAME_FADE => Some(Self::Fade),
            EFFECT_NAME_FILL_IN => Some(Self::FillIn),
            EFFECT_NAME_GLOW => Some(Self::Glow),
            EFFECT_NAME_RAINBOW_WAVE => Some(Self::RainbowWave),
            EFFECT_NAME_STROBE => Some(Self::Strobe),
            EFFECT_NAME_SINE_WAVE => Some(Self::SineWave),
            EFFECT_NAME_TALKING => Some(Self::Talking),
            EFFECT_NAME_NONE => Some(Self::None),
            _ => None,
        }
    }
}

/// Traversal sense of sweep effects and ramp direction of breathing effects
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Towards the end of the range, counters increase
    #[default]
    Forward,
    /// Towards the start of the range, counters decrease
    Reverse,
}

impl Direction {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EffectStatus {
    Active,
    #[default]
    Inactive,
}
