use embedded_hal::delay::DelayNs;
use pca9551::{Pca9551, PwmChannel};

fn main() {
    // placeholders, replace with instances from your HAL
    let i2c_bus = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
    let mut delay = embedded_hal_mock::eh1::delay::NoopDelay::new();

    let mut led_driver = Pca9551::new_with_i2c(i2c_bus, pca9551::DEFAULT_ADDRESS);

    // PWM0: 1 Hz, 50% on. PWM1: 4 Hz, 10% on.
    led_driver.set_pwm_prescaler(PwmChannel::Pwm0, 37).unwrap();
    led_driver.set_pwm_duty_cycle(PwmChannel::Pwm0, 0.5).unwrap();
    led_driver.set_pwm_prescaler(PwmChannel::Pwm1, 8).unwrap();
    led_driver.set_pwm_duty_cycle(PwmChannel::Pwm1, 0.1).unwrap();

    led_driver.set_leds_pwm0(&[6]).unwrap();

    let mut led = 0;
    loop {
        // walk a steady light along LED0..LED5, LED6 keeps blinking on its own
        led_driver.set_leds_on(&[led], false).unwrap();
        delay.delay_ms(200);
        led_driver.set_leds_off(&[led]).unwrap();

        led = (led + 1) % 6;

        if led == 0 {
            led_driver.set_leds_pwm1(&[7]).unwrap();
        }
    }
}
