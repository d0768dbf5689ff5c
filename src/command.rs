//! Queued configuration changes
//!
//! Setters on [`PixelEffect`] need exclusive access to the effect, which the
//! render loop usually holds. Other contexts (button interrupts, a network
//! task) push [`EffectCommand`]s into a [`CommandQueue`] instead, and the
//! render loop drains it with [`PixelEffect::process_pending`] between ticks.
//!
//! The queue is a fixed-size `heapless::Deque` guarded by a
//! `critical-section` mutex, so it is safe to share between interrupts and
//! the main loop.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Duration;
use heapless::Deque;

use crate::color::Rgb;
use crate::effect::{Direction, EffectKind, EffectStatus};
use crate::engine::PixelEffect;

/// Configuration change for a single effect instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectCommand {
    /// Select an effect and restart it
    SetEffect(EffectKind),
    /// Set the inclusive pixel range
    SetRange { start: usize, end: usize },
    /// Set the pattern length inside the range
    SetAreaOfEffect(usize),
    /// Set the time between frames
    SetInterval(Duration),
    /// Set the frame rate in Hz
    SetRate(u16),
    /// Set the foreground color
    SetColor(Rgb),
    /// Set the foreground color from a color temperature in Kelvin
    SetColorTemperature(u16),
    /// Set the background color
    SetBackgroundColor(Rgb),
    SetRepeat(bool),
    SetDirection(Direction),
    SetSubtype(u8),
    SetStatus(EffectStatus),
    /// Stop the effect
    Stop,
}

/// Error returned when trying to push into a full queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub EffectCommand);

/// Error returned when trying to pop from an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded command queue shared between contexts
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<EffectCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    /// Create an empty queue, usable in a `static`
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Get a receiver handle for this queue
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    /// Push a command
    ///
    /// Returns `Err(TrySendError(command))` if the queue is full.
    pub fn try_send(&self, command: EffectCommand) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    /// Pop the oldest command
    ///
    /// Returns `Err(TryReceiveError)` if the queue is empty.
    pub fn try_receive(&self) -> Result<EffectCommand, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, command: EffectCommand) -> Result<(), TrySendError> {
        self.queue.try_send(command)
    }
}

/// Receiving half of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<EffectCommand, TryReceiveError> {
        self.queue.try_receive()
    }
}

impl PixelEffect {
    /// Apply a single configuration command
    pub fn apply(&mut self, command: EffectCommand) {
        match command {
            EffectCommand::SetEffect(kind) => self.set_effect(kind),
            EffectCommand::SetRange { start, end } => self.set_range(start, end),
            EffectCommand::SetAreaOfEffect(area) => self.set_area_of_effect(area),
            EffectCommand::SetInterval(interval) => self.set_interval(interval),
            EffectCommand::SetRate(hz) => self.set_rate_hz(hz),
            EffectCommand::SetColor(color) => self.set_color(color),
            EffectCommand::SetColorTemperature(kelvin) => self.set_color_temperature(kelvin),
            EffectCommand::SetBackgroundColor(color) => self.set_background_color(color),
            EffectCommand::SetRepeat(repeat) => self.set_repeat(repeat),
            EffectCommand::SetDirection(direction) => self.set_direction(direction),
            EffectCommand::SetSubtype(subtype) => self.set_subtype(subtype),
            EffectCommand::SetStatus(status) => self.set_status(status),
            EffectCommand::Stop => self.stop(),
        }
    }

    /// Apply every queued command (non-blocking)
    ///
    /// Returns the number of commands applied.
    pub fn process_pending<const SIZE: usize>(&mut self, commands: &CommandReceiver<'_, SIZE>) -> usize {
        let mut applied = 0;
        while let Ok(command) = commands.try_receive() {
            self.apply(command);
            applied += 1;
        }
        applied
    }
}
