/// PCA9551 registers
///
/// Register table: <https://www.nxp.com/docs/en/data-sheet/PCA9551.pdf>
pub struct Register;
impl Register {
    pub const INPUT: u8 = 0x00;
    pub const PSC0: u8 = 0x01;
    pub const PWM0: u8 = 0x02;
    pub const PSC1: u8 = 0x03;
    pub const PWM1: u8 = 0x04;
    pub const LS0: u8 = 0x05;
    pub const LS1: u8 = 0x06;
}

/// Bitflags for registers
pub struct BitFlags;
impl BitFlags {
    /// Width of one LED selector field in LS0/LS1
    pub const LS_FIELD_WIDTH: u8 = 2;
    pub const LS_FIELD_MASK: u8 = 0b11;

    /// LED output states
    pub const LS_LED_ON: u8 = 0b00;
    pub const LS_LED_OFF: u8 = 0b01;
    pub const LS_LED_PWM0: u8 = 0b10;
    pub const LS_LED_PWM1: u8 = 0b11;

    /// Selector register value with all four LEDs in `LS_LED_OFF` (power-on default)
    pub const LS_ALL_OFF: u8 = 0x55;

    /// Fixed upper bits of the 7-bit slave address
    pub const ADDRESS_PREFIX: u8 = 0b110_0000;
    pub const ADDRESS_A0: u8 = 1 << 0;
    pub const ADDRESS_A1: u8 = 1 << 1;
    pub const ADDRESS_A2: u8 = 1 << 2;
}
