//! Power management

/// Errors that can occur while sampling the battery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion error
    ConversionError,
    /// ADC not yet calibrated after power-up (board driver)
    NotReady,
}

/// Battery voltage source
///
/// Takes `&mut self` because ADC reads typically require mutable access.
pub trait BatteryMonitor {
    /// Read the battery terminal voltage in volts
    fn read_battery_voltage(&mut self) -> Result<f32, SensorError>;
}
