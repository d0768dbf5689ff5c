#![no_std]

pub mod bounds;
pub mod color;
pub mod command;
pub mod effect;
pub mod engine;
pub mod math8;
pub mod source;

pub use bounds::PixelRange;
pub use command::{CommandQueue, CommandReceiver, CommandSender, EffectCommand};
pub use effect::{Direction, EffectKind, EffectState, EffectStatus};
pub use engine::{EffectConfig, PixelEffect};
pub use source::{Clock, FastRandom, RandomSource, SystemClock};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};
