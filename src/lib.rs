//! Driver for the NXP PCA9551 8-bit I2C LED blinker.
//!
//! Each of the eight open-drain outputs is either on, off (high impedance), or
//! blinking at one of two programmable PWM rates.
//!
//! Datasheet: <https://www.nxp.com/docs/en/data-sheet/PCA9551.pdf>
//!
//! The LED selector registers are write-mostly: the driver keeps a copy of them and
//! only sends the result of each change, so a selector update is always a write of
//! LS0 followed by a write of LS1. The copy is not read back unless
//! [`Pca9551::sync_selectors`] is called.
//!
//! The driver does no locking. Wrap it in a mutex at the call site if it has to be
//! shared between threads or interrupt contexts.

#![cfg_attr(not(test), no_std)]

pub mod duty_cycle;
pub mod interface;
mod register;
mod selector;

use interface::RegisterAccess;
use register::{BitFlags, Register};
pub use selector::{LedOutOfRange, Selectors, NUM_LEDS};

/// Default 7 bit I2C address (all address pins high)
pub const DEFAULT_ADDRESS: u8 = 0x67;

/// Computes the 7 bit I2C address from the levels of the address pins A0, A1 and A2.
pub const fn address_from_pins(a0: bool, a1: bool, a2: bool) -> u8 {
    BitFlags::ADDRESS_PREFIX
        | if a0 { BitFlags::ADDRESS_A0 } else { 0 }
        | if a1 { BitFlags::ADDRESS_A1 } else { 0 }
        | if a2 { BitFlags::ADDRESS_A2 } else { 0 }
}

/// Error enum for the PCA9551 driver
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<IE> {
    /// An interface related error has occured
    Interface(IE),

    /// LED index is not in `0..NUM_LEDS`
    LedOutOfRange(u8),

    /// Duty cycle is not in `0.0..=1.0`
    InvalidDutyCycle,
}

impl<IE> From<LedOutOfRange> for Error<IE> {
    fn from(LedOutOfRange(led): LedOutOfRange) -> Self {
        Error::LedOutOfRange(led)
    }
}

pub trait ToRegisterValue<T> {
    fn register_value(&self) -> T;
}

/// Output state of a single LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedMode {
    /// Output is driven low (LED on)
    On,
    /// Output is high impedance (LED off, power-on default)
    Off,
    /// Output blinks at PWM0 rate
    Pwm0,
    /// Output blinks at PWM1 rate
    Pwm1,
}

impl ToRegisterValue<u8> for LedMode {
    fn register_value(&self) -> u8 {
        match self {
            LedMode::On => BitFlags::LS_LED_ON,
            LedMode::Off => BitFlags::LS_LED_OFF,
            LedMode::Pwm0 => BitFlags::LS_LED_PWM0,
            LedMode::Pwm1 => BitFlags::LS_LED_PWM1,
        }
    }
}

impl LedMode {
    /// Decodes a 2 bit selector field. Bits above the field are ignored.
    pub(crate) fn from_register_value(value: u8) -> Self {
        match value & BitFlags::LS_FIELD_MASK {
            BitFlags::LS_LED_ON => LedMode::On,
            BitFlags::LS_LED_OFF => LedMode::Off,
            BitFlags::LS_LED_PWM0 => LedMode::Pwm0,
            _ => LedMode::Pwm1,
        }
    }
}

/// The two blink generators of the chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmChannel {
    Pwm0,
    Pwm1,
}

impl PwmChannel {
    pub fn prescaler_reg_addr(&self) -> u8 {
        match self {
            PwmChannel::Pwm0 => Register::PSC0,
            PwmChannel::Pwm1 => Register::PSC1,
        }
    }

    pub fn duty_cycle_reg_addr(&self) -> u8 {
        match self {
            PwmChannel::Pwm0 => Register::PWM0,
            PwmChannel::Pwm1 => Register::PWM1,
        }
    }

    /// LED mode that makes an output blink at this channel's rate
    pub fn led_mode(&self) -> LedMode {
        match self {
            PwmChannel::Pwm0 => LedMode::Pwm0,
            PwmChannel::Pwm1 => LedMode::Pwm1,
        }
    }
}

/// Driver for the PCA9551.
pub struct Pca9551<I> {
    interface: I,
    selectors: Selectors,
}

impl<IE, I2C> Pca9551<interface::I2cInterface<I2C>>
where
    I2C: embedded_hal::i2c::I2c<Error = IE>,
{
    /// Create a driver talking to the chip at `address` on `i2c`.
    pub fn new_with_i2c(i2c: I2C, address: u8) -> Self {
        Pca9551::new(interface::I2cInterface::new(i2c, address))
    }

    /// Destroys the driver and releases the owned `I2c`-interface.
    pub fn release(self) -> I2C {
        self.interface.release()
    }
}

impl<I, IE> Pca9551<I>
where
    I: RegisterAccess<Error = Error<IE>>,
{
    /// Create a new driver on top of `interface`.
    ///
    /// No bus traffic happens here. The selector copy starts out as all LEDs off,
    /// which matches the chip after power-on.
    pub fn new(interface: I) -> Self {
        Pca9551 {
            interface,
            selectors: Selectors::ALL_OFF,
        }
    }

    /// Reads the INPUT register, which reflects the level of all eight pins.
    pub fn read_inputs(&mut self) -> Result<u8, Error<IE>> {
        self.interface.read_register(Register::INPUT)
    }

    /// The driver's current view of the LED selector registers.
    pub fn selectors(&self) -> Selectors {
        self.selectors
    }

    /// Mode of `led` according to the driver's selector copy.
    pub fn led_mode(&self, led: u8) -> Result<LedMode, Error<IE>> {
        Ok(self.selectors.mode(led)?)
    }

    /// Reads LS0 and LS1 from the chip and replaces the selector copy with them.
    ///
    /// Needed after the chip was reset or written behind the driver's back.
    pub fn sync_selectors(&mut self) -> Result<Selectors, Error<IE>> {
        let ls0 = self.interface.read_register(Register::LS0)?;
        let ls1 = self.interface.read_register(Register::LS1)?;

        self.selectors = Selectors::new(ls0, ls1);

        Ok(self.selectors)
    }

    /// Sets all `leds` to `mode`, leaving the other LEDs untouched.
    pub fn set_leds(&mut self, leds: &[u8], mode: LedMode) -> Result<(), Error<IE>> {
        let selectors = self.selectors.with_mode(leds, mode)?;
        self.write_selectors(selectors)
    }

    /// Turns on all `leds`. If `others_off` is set, every other LED is turned off,
    /// no matter what it was set to before.
    pub fn set_leds_on(&mut self, leds: &[u8], others_off: bool) -> Result<(), Error<IE>> {
        let base = if others_off {
            Selectors::ALL_OFF
        } else {
            self.selectors
        };

        let selectors = base.with_mode(leds, LedMode::On)?;
        self.write_selectors(selectors)
    }

    /// Turns off all `leds`.
    pub fn set_leds_off(&mut self, leds: &[u8]) -> Result<(), Error<IE>> {
        self.set_leds(leds, LedMode::Off)
    }

    /// Lets all `leds` blink at the PWM0 rate.
    pub fn set_leds_pwm0(&mut self, leds: &[u8]) -> Result<(), Error<IE>> {
        self.set_leds(leds, LedMode::Pwm0)
    }

    /// Lets all `leds` blink at the PWM1 rate.
    pub fn set_leds_pwm1(&mut self, leds: &[u8]) -> Result<(), Error<IE>> {
        self.set_leds(leds, LedMode::Pwm1)
    }

    fn write_selectors(&mut self, selectors: Selectors) -> Result<(), Error<IE>> {
        // the copy is updated up front and not rolled back if a write fails
        self.selectors = selectors;

        self.interface.write_register(Register::LS0, selectors.ls0())?;
        self.interface.write_register(Register::LS1, selectors.ls1())?;

        Ok(())
    }

    /// Reads the duty cycle of `channel` (0.0..=1.0, rounded to two decimals).
    pub fn get_pwm_duty_cycle(&mut self, channel: PwmChannel) -> Result<f32, Error<IE>> {
        let value = self
            .interface
            .read_register(channel.duty_cycle_reg_addr())?;

        Ok(duty_cycle::from_register_value(value))
    }

    /// Sets the duty cycle of `channel`, where 1.0 means the output is active for the
    /// whole period.
    pub fn set_pwm_duty_cycle(
        &mut self,
        channel: PwmChannel,
        duty_cycle: f32,
    ) -> Result<(), Error<IE>> {
        let value = duty_cycle::to_register_value(duty_cycle).ok_or(Error::InvalidDutyCycle)?;

        self.interface
            .write_register(channel.duty_cycle_reg_addr(), value)
    }

    /// Sets the prescaler of `channel`. The blink period is `(prescaler + 1) / 38` seconds.
    pub fn set_pwm_prescaler(
        &mut self,
        channel: PwmChannel,
        prescaler: u8,
    ) -> Result<(), Error<IE>> {
        self.interface
            .write_register(channel.prescaler_reg_addr(), prescaler)
    }
}

#[cfg(test)]
impl Pca9551<interface::mock::MockInterface> {
    /// Destroys the drivers and returns the owned [`MockInterface`].
    pub fn release(self) -> interface::mock::MockInterface {
        self.interface
    }
}
