//! Clock face rendering
//!
//! One frame is battery bar, time and date. All readings are taken before
//! the display is opened, and the frame is only flipped once all three
//! lines have been printed, so a failure part-way leaves the previous
//! frame on screen.

pub mod battery;
pub mod clock;
pub mod layout;

use chordclock_hal::{BatteryMonitor, Clock, ClockError, Display, Font, Frame};

use crate::config::{BadgeConfig, Layout, BATTERY_BAR_LEN};
use crate::error::Fault;

use layout::{center_x, DATE_CHAR_PX, SMALL_CHAR_PX, TIME_CHAR_PX};

/// Draws the clock face
pub struct Renderer<D, P, C> {
    pub(crate) display: D,
    battery: P,
    clock: C,
    layout: Layout,
    battery_min_v: f32,
    battery_max_v: f32,
}

impl<D, P, C> Renderer<D, P, C>
where
    D: Display,
    P: BatteryMonitor,
    C: Clock,
{
    pub fn new(display: D, battery: P, clock: C, config: &BadgeConfig) -> Self {
        Self {
            display,
            battery,
            clock,
            layout: config.layout,
            battery_min_v: config.battery_min_v,
            battery_max_v: config.battery_max_v,
        }
    }

    /// Compose and commit one frame
    pub fn render_frame(&mut self) -> Result<(), Fault> {
        let voltage = self.battery.read_battery_voltage()?;
        let now = self.clock.local_time()?;
        if !now.is_valid() {
            return Err(ClockError::InvalidTime.into());
        }

        let bar = battery::battery_bar(battery::segments(
            voltage,
            self.battery_min_v,
            self.battery_max_v,
        ));
        let time = clock::format_time(&now);
        let date = clock::format_date(&now);

        let mut frame = self.display.open()?;
        frame.clear()?;
        // Centred on the segments; the border glyphs hang off each side
        frame.print(
            &bar,
            center_x(BATTERY_BAR_LEN, SMALL_CHAR_PX),
            self.layout.battery_y,
            Font::Font12,
        )?;
        frame.print(
            &time,
            center_x(time.len(), TIME_CHAR_PX),
            self.layout.time_y,
            Font::Font20,
        )?;
        frame.print(
            &date,
            center_x(date.len(), DATE_CHAR_PX),
            self.layout.date_y,
            Font::Font20,
        )?;
        frame.update()?;

        Ok(())
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Give the peripherals back
    pub fn release(self) -> (D, P, C) {
        (self.display, self.battery, self.clock)
    }
}
