//! Interactive walk through the built-in effects.
//!
//! The sequencer is a small state machine:
//!
//! ```text
//! NotStarted --step--> ShowingEffect(0) --confirm--> ShowingEffect(1) ... --confirm--> Done
//! ```
//!
//! Leaving `ShowingEffect(i)` always requires one confirmation, including
//! after the last effect.

use crate::device::{Device, DeviceRegistry};
use crate::error::Result;
use crate::host::{CommandRunner, Confirmation};
use crate::invoke::{DeviceResult, set_mode};
use crate::sync::{SyncReport, SyncRequest, sync_all};

/// Effects shown by the demo, in order.
pub const DEMO_EFFECTS: &[&str] = &["Static", "Breathing", "Rainbow Wave", "Color Pulse"];

/// Effects the hardware renders without a color argument.
const COLOR_INDEPENDENT_EFFECTS: &[&str] = &["Rainbow Wave"];

/// Whether `effect` is applied without `--color`.
pub fn is_color_independent(effect: &str) -> bool {
    COLOR_INDEPENDENT_EFFECTS.contains(&effect)
}

/// Where the demo currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoState {
    /// Nothing applied yet.
    NotStarted,
    /// Effect at this position in [`DEMO_EFFECTS`] is on the devices.
    ShowingEffect(usize),
    /// All effects shown and confirmed.
    Done,
}

/// How an effect was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectRun {
    /// Applied with the demo color through a full sync.
    Synced(SyncReport),
    /// Applied mode-only to each device.
    ModeOnly(Vec<(Device, DeviceResult)>),
}

/// Receives demo progress. All methods default to doing nothing.
pub trait DemoObserver {
    /// An effect is about to be applied.
    fn effect_started(&mut self, _effect: &str) {}

    /// One device finished.
    fn device_done(&mut self, _device: &Device, _result: &DeviceResult) {}

    /// An effect was applied to every device.
    fn effect_finished(&mut self, _effect: &str, _run: &EffectRun) {}

    /// The demo is about to block for confirmation.
    fn awaiting_confirmation(&mut self, _effect: &str) {}
}

impl DemoObserver for () {}

/// Steps through [`DEMO_EFFECTS`] on every registered device.
#[derive(Debug, Clone)]
pub struct DemoSequencer<'a> {
    registry: DeviceRegistry,
    program: &'a str,
    hex_color: &'a str,
    state: DemoState,
}

impl<'a> DemoSequencer<'a> {
    /// Create a sequencer that uses `hex_color` for color-dependent effects.
    pub fn new(registry: DeviceRegistry, program: &'a str, hex_color: &'a str) -> Self {
        Self {
            registry,
            program,
            hex_color,
            state: DemoState::NotStarted,
        }
    }

    /// Current state.
    pub fn state(&self) -> DemoState {
        self.state
    }

    /// Advance by one transition and return the new state.
    ///
    /// From `NotStarted` this applies the first effect immediately. From
    /// `ShowingEffect(i)` it first blocks on `confirm`, then applies the next
    /// effect or finishes.
    pub fn step<R, C>(
        &mut self,
        runner: &mut R,
        confirm: &mut C,
        observer: &mut dyn DemoObserver,
    ) -> Result<DemoState>
    where
        R: CommandRunner + ?Sized,
        C: Confirmation + ?Sized,
    {
        self.state = match self.state {
            DemoState::NotStarted => {
                self.show(0, runner, observer);
                DemoState::ShowingEffect(0)
            },
            DemoState::ShowingEffect(i) => {
                observer.awaiting_confirmation(DEMO_EFFECTS[i]);
                confirm.wait_for_confirmation()?;
                let next = i + 1;
                if next < DEMO_EFFECTS.len() {
                    self.show(next, runner, observer);
                    DemoState::ShowingEffect(next)
                } else {
                    DemoState::Done
                }
            },
            DemoState::Done => DemoState::Done,
        };
        Ok(self.state)
    }

    /// Step until `Done`.
    pub fn run<R, C>(
        &mut self,
        runner: &mut R,
        confirm: &mut C,
        observer: &mut dyn DemoObserver,
    ) -> Result<()>
    where
        R: CommandRunner + ?Sized,
        C: Confirmation + ?Sized,
    {
        while self.step(runner, confirm, observer)? != DemoState::Done {}
        Ok(())
    }

    fn show<R: CommandRunner + ?Sized>(
        &self,
        position: usize,
        runner: &mut R,
        observer: &mut dyn DemoObserver,
    ) {
        let effect = DEMO_EFFECTS[position];
        observer.effect_started(effect);

        let run = if is_color_independent(effect) {
            let mut results = Vec::with_capacity(self.registry.len());
            for device in self.registry.devices() {
                let result = set_mode(runner, self.program, device.index, effect);
                observer.device_done(device, &result);
                results.push((*device, result));
            }
            EffectRun::ModeOnly(results)
        } else {
            let request = SyncRequest {
                program: self.program,
                hex_color: self.hex_color,
                mode: effect,
            };
            EffectRun::Synced(sync_all(runner, &self.registry, &request, &mut |d, r| {
                observer.device_done(d, r);
            }))
        };

        observer.effect_finished(effect, &run);
    }
}
