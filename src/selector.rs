use crate::{register::BitFlags, LedMode, ToRegisterValue};

/// Number of LED outputs of the PCA9551
pub const NUM_LEDS: u8 = 8;

/// An LED index outside of `0..NUM_LEDS` was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedOutOfRange(pub u8);

/// Copy of the LED selector registers LS0 (LED0..LED3) and LS1 (LED4..LED7).
///
/// Viewed together as one 16 bit word with LS1 in the high byte, bits `2k` and `2k + 1`
/// hold the [`LedMode`] of LED `k`.
///
/// The driver never reads these registers back on its own. If the chip is reset or
/// written by someone else, the copy is stale until it is resynchronized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selectors {
    ls0: u8,
    ls1: u8,
}

impl Default for Selectors {
    fn default() -> Self {
        Self::ALL_OFF
    }
}

impl Selectors {
    /// All LEDs off, which is also the power-on state of the chip.
    pub const ALL_OFF: Self = Self::new(BitFlags::LS_ALL_OFF, BitFlags::LS_ALL_OFF);

    pub const fn new(ls0: u8, ls1: u8) -> Self {
        Self { ls0, ls1 }
    }

    /// Register value of LS0 (LED0..LED3)
    pub const fn ls0(&self) -> u8 {
        self.ls0
    }

    /// Register value of LS1 (LED4..LED7)
    pub const fn ls1(&self) -> u8 {
        self.ls1
    }

    fn word(&self) -> u16 {
        u16::from_le_bytes([self.ls0, self.ls1])
    }

    fn from_word(word: u16) -> Self {
        let [ls0, ls1] = word.to_le_bytes();
        Self { ls0, ls1 }
    }

    fn shift(led: u8) -> Result<u8, LedOutOfRange> {
        if led < NUM_LEDS {
            Ok(led * BitFlags::LS_FIELD_WIDTH)
        } else {
            Err(LedOutOfRange(led))
        }
    }

    /// Returns a copy with every LED in `leds` set to `mode`. All other fields are kept
    /// as they are. Duplicates in `leds` are fine, an empty slice changes nothing.
    pub fn with_mode(self, leds: &[u8], mode: LedMode) -> Result<Self, LedOutOfRange> {
        let mut word = self.word();

        for &led in leds {
            let shift = Self::shift(led)?;

            word &= !(u16::from(BitFlags::LS_FIELD_MASK) << shift);
            word |= u16::from(mode.register_value()) << shift;
        }

        Ok(Self::from_word(word))
    }

    /// Mode of a single LED.
    pub fn mode(&self, led: u8) -> Result<LedMode, LedOutOfRange> {
        let shift = Self::shift(led)?;
        let bits = (self.word() >> shift) as u8 & BitFlags::LS_FIELD_MASK;

        Ok(LedMode::from_register_value(bits))
    }
}
