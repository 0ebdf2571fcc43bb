//! Foreground loop controller
//!
//! Owns every peripheral and the flashlight flag, and drives the loop
//! state machine. Each iteration samples the buttons, toggles the
//! flashlight on a chord (blocking until the chord is released), then
//! draws one frame. Input is always handled before that iteration's
//! frame, and the LEDs change as soon as the chord is seen.
//!
//! On the badge [`Controller::run`] never returns. Hosted builds use
//! [`Controller::run_until`], which shuts down cleanly.

use chordclock_hal::{BatteryMonitor, Buttons, Clock, Display, LedStrip};
use embedded_hal::delay::DelayNs;

use crate::config::BadgeConfig;
use crate::error::Fault;
use crate::flashlight::FlashlightController;
use crate::input::InputMonitor;
use crate::render::Renderer;
use crate::state::{Event, State};

/// Peripherals handed to the controller
pub struct Board<B, L, D, P, C, T> {
    pub buttons: B,
    pub leds: L,
    pub display: D,
    pub battery: P,
    pub clock: C,
    /// Delay used while waiting for a chord release
    pub delay: T,
}

/// Clock face loop
pub struct Controller<B, L, D, P, C, T> {
    input: InputMonitor<B>,
    flashlight: FlashlightController<L>,
    renderer: Renderer<D, P, C>,
    delay: T,
    state: State,
    /// Flashlight mode; off at power-up, flipped only by a chord
    flashlight_on: bool,
}

impl<B, L, D, P, C, T> Controller<B, L, D, P, C, T>
where
    B: Buttons,
    L: LedStrip,
    D: Display,
    P: BatteryMonitor,
    C: Clock,
    T: DelayNs,
{
    pub fn new(board: Board<B, L, D, P, C, T>, config: &BadgeConfig) -> Self {
        Self {
            input: InputMonitor::new(board.buttons, config.release_poll_ms),
            flashlight: FlashlightController::new(board.leds, config.flashlight_level),
            renderer: Renderer::new(board.display, board.battery, board.clock, config),
            delay: board.delay,
            state: State::Idle,
            flashlight_on: false,
        }
    }

    /// Current loop state
    pub fn state(&self) -> State {
        self.state
    }

    /// Whether flashlight mode is engaged
    pub fn flashlight_on(&self) -> bool {
        self.flashlight_on
    }

    fn apply(&mut self, event: Event) {
        let next = self.state.transition(event);
        #[cfg(feature = "defmt")]
        defmt::trace!("{} --{}--> {}", self.state, event, next);
        self.state = next;
    }

    /// Perform the work of the current state and advance by one transition
    pub fn step(&mut self) -> Result<State, Fault> {
        match self.state {
            State::Idle => {
                let event = if self.input.poll_chord() {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("chord detected");
                    Event::Chord
                } else {
                    Event::NoChord
                };
                self.apply(event);
                Ok(self.state)
            }
            State::ChordDetected => {
                self.flashlight_on = !self.flashlight_on;
                #[cfg(feature = "defmt")]
                defmt::info!("flashlight on: {=bool}", self.flashlight_on);
                // Wait for release even if the strip failed, or the held
                // chord would toggle again on the next sample
                let result = self.flashlight.set_flashlight(self.flashlight_on);
                self.input.wait_for_release(&mut self.delay);
                self.apply(Event::Released);
                result?;
                Ok(self.state)
            }
            State::Rendering => {
                let result = self.renderer.render_frame();
                self.apply(if result.is_ok() {
                    Event::FrameCommitted
                } else {
                    Event::FrameFailed
                });
                result?;
                Ok(self.state)
            }
            State::Stopped => Ok(self.state),
        }
    }

    /// Run one full loop iteration
    ///
    /// Every step of the iteration runs even if an earlier one faulted;
    /// the first fault is returned.
    pub fn tick(&mut self) -> Result<(), Fault> {
        let mut fault = None;
        loop {
            match self.step() {
                Ok(state) if state.is_iteration_boundary() => break,
                Ok(_) => {}
                Err(err) => {
                    fault.get_or_insert(err);
                    if self.state.is_iteration_boundary() {
                        break;
                    }
                }
            }
        }
        fault.map_or(Ok(()), Err)
    }

    /// Run the loop forever
    pub fn run(&mut self) -> ! {
        #[cfg(feature = "defmt")]
        defmt::info!("clock face loop started");
        loop {
            if let Err(_fault) = self.tick() {
                #[cfg(feature = "defmt")]
                defmt::warn!("iteration fault: {}", _fault);
            }
        }
    }

    /// Run the loop until `stop` returns true, then shut down
    ///
    /// `stop` is checked before every iteration.
    pub fn run_until<F: FnMut() -> bool>(&mut self, mut stop: F) -> Result<(), Fault> {
        #[cfg(feature = "defmt")]
        defmt::info!("clock face loop started");
        while self.state.is_running() && !stop() {
            if let Err(_fault) = self.tick() {
                #[cfg(feature = "defmt")]
                defmt::warn!("iteration fault: {}", _fault);
            }
        }
        self.shutdown()
    }

    /// Stop the loop and dark the LEDs if the flashlight was on
    ///
    /// The flashlight flag only clears once the strip has accepted the
    /// off sequence, so a failed shutdown can be retried.
    pub fn shutdown(&mut self) -> Result<(), Fault> {
        if self.state.is_running() {
            self.apply(Event::Shutdown);
            #[cfg(feature = "defmt")]
            defmt::info!("clock face loop stopped");
        }
        if self.flashlight_on {
            self.flashlight.set_flashlight(false)?;
            self.flashlight_on = false;
        }
        Ok(())
    }

    /// Give the peripherals back
    pub fn release(self) -> Board<B, L, D, P, C, T> {
        let (display, battery, clock) = self.renderer.release();
        Board {
            buttons: self.input.release(),
            leds: self.flashlight.release(),
            display,
            battery,
            clock,
            delay: self.delay,
        }
    }
}
