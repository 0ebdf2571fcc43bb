//! In-memory HAL doubles for host tests

use std::string::String;
use std::vec::Vec;

use chordclock_hal::leds::MAX_DIM_LEVEL;
use chordclock_hal::{
    BatteryMonitor, Button, Buttons, Clock, ClockError, Color, DateTime, Display, DisplayError,
    Font, Frame, LedError, LedStrip, SensorError, LED_COUNT,
};
use embedded_hal::delay::DelayNs;

/// Scripted button pair
///
/// Each full sample (left read followed by right read) consumes one entry
/// of the script. Once the script runs out every read returns `rest`.
pub struct MockButtons {
    script: Vec<(bool, bool)>,
    cursor: usize,
    rest: (bool, bool),
    pub reads: usize,
}

impl MockButtons {
    pub fn new(script: &[(bool, bool)]) -> Self {
        Self {
            script: script.to_vec(),
            cursor: 0,
            rest: (false, false),
            reads: 0,
        }
    }

    fn current(&self) -> (bool, bool) {
        self.script.get(self.cursor).copied().unwrap_or(self.rest)
    }

    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.cursor)
    }
}

impl Buttons for MockButtons {
    fn read(&mut self, button: Button) -> bool {
        self.reads += 1;
        let (left, right) = self.current();
        match button {
            Button::BottomLeft => left,
            Button::BottomRight => {
                self.cursor += 1;
                right
            }
        }
    }
}

/// LED strip that keeps its buffered and committed state in memory
pub struct MockLeds {
    pub colors: [Color; LED_COUNT],
    pub bottom: u8,
    pub top: u8,
    pub powersave: bool,
    pub commits: usize,
    pub set_all_calls: usize,
    pub fail: Option<LedError>,
}

impl MockLeds {
    pub fn new() -> Self {
        Self {
            colors: [Color::BLACK; LED_COUNT],
            bottom: 0,
            top: 0,
            powersave: false,
            commits: 0,
            set_all_calls: 0,
            fail: None,
        }
    }

    fn check(&self) -> Result<(), LedError> {
        match self.fail {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn is_lit(&self) -> bool {
        self.bottom > 0 || self.top > 0
    }
}

impl LedStrip for MockLeds {
    fn set_all(&mut self, colors: &[Color]) -> Result<(), LedError> {
        self.check()?;
        if colors.len() != LED_COUNT {
            return Err(LedError::LengthMismatch);
        }
        self.colors.copy_from_slice(colors);
        self.set_all_calls += 1;
        Ok(())
    }

    fn dim_bottom(&mut self, level: u8) -> Result<(), LedError> {
        self.check()?;
        if level > MAX_DIM_LEVEL {
            return Err(LedError::InvalidLevel);
        }
        self.bottom = level;
        Ok(())
    }

    fn dim_top(&mut self, level: u8) -> Result<(), LedError> {
        self.check()?;
        if level > MAX_DIM_LEVEL {
            return Err(LedError::InvalidLevel);
        }
        self.top = level;
        Ok(())
    }

    fn set_powersave(&mut self, enabled: bool) -> Result<(), LedError> {
        self.check()?;
        self.powersave = enabled;
        Ok(())
    }

    fn update(&mut self) -> Result<(), LedError> {
        self.check()?;
        self.commits += 1;
        Ok(())
    }
}

/// One `print` call
#[derive(Debug, Clone, PartialEq)]
pub struct Printed {
    pub text: String,
    pub x: i16,
    pub y: i16,
    pub font: Font,
}

/// Display that records committed frames
pub struct MockDisplay {
    pub frames: Vec<Vec<Printed>>,
    pub opens: usize,
    pub clears: usize,
    pub fail_print: Option<DisplayError>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            opens: 0,
            clears: 0,
            fail_print: None,
        }
    }

    pub fn last_frame(&self) -> &[Printed] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

pub struct MockFrame<'a> {
    display: &'a mut MockDisplay,
    pending: Vec<Printed>,
}

impl Frame for MockFrame<'_> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.display.clears += 1;
        self.pending.clear();
        Ok(())
    }

    fn print(&mut self, text: &str, x: i16, y: i16, font: Font) -> Result<(), DisplayError> {
        if let Some(err) = self.display.fail_print {
            return Err(err);
        }
        self.pending.push(Printed {
            text: text.into(),
            x,
            y,
            font,
        });
        Ok(())
    }

    fn update(&mut self) -> Result<(), DisplayError> {
        let frame = core::mem::take(&mut self.pending);
        self.display.frames.push(frame);
        Ok(())
    }
}

impl Display for MockDisplay {
    type Frame<'a>
        = MockFrame<'a>
    where
        Self: 'a;

    fn open(&mut self) -> Result<Self::Frame<'_>, DisplayError> {
        self.opens += 1;
        Ok(MockFrame {
            display: self,
            pending: Vec::new(),
        })
    }
}

pub struct MockBattery(pub Result<f32, SensorError>);

impl BatteryMonitor for MockBattery {
    fn read_battery_voltage(&mut self) -> Result<f32, SensorError> {
        self.0
    }
}

pub struct MockClock(pub Result<DateTime, ClockError>);

impl Clock for MockClock {
    fn local_time(&mut self) -> Result<DateTime, ClockError> {
        self.0
    }
}

/// Delay that only counts
#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
    pub calls: usize,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.calls += 1;
    }
}
