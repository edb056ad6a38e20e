//! Bus adapters and the owned transport handle
//!
//! The controller separates commands from pixel data. On I2C that is done
//! with a control byte in front of every write; on 4-wire SPI it is done
//! with the D/C# pin. [`Transport`] hides the difference so the driver only
//! deals in raw command and data bytes.
use core::convert::Infallible;
use core::time::Duration;

use crate::ssd1306::flag::Flag;
use display_interface::DisplayError;
use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, OutputPin},
    i2c::I2c,
    spi::SpiDevice,
};

const RESET_HIGH_MS: u32 = 1;
const RESET_LOW_MS: u32 = 10;

/// Write-only access to the controller
pub trait Transport {
    /// Send one command byte on its own
    fn write_command(&mut self, command: u8) -> Result<(), DisplayError>;

    /// Send a run of command bytes (opcodes and their parameters) as one stream
    fn write_commands(&mut self, commands: &[u8]) -> Result<(), DisplayError>;

    /// Send display RAM content
    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError>;
}

/// I2C transport.
///
/// Every write is a single bus transaction: `[0x80, cmd]` for a lone
/// command, `[0x00, cmds..]` for a command stream, `[0x40, data..]` for RAM.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Wrap a bus for the device at the 7-bit `address`
    pub fn new(i2c: I2C, address: u8) -> Self {
        I2cInterface { i2c, address }
    }

    /// Device address this interface talks to
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Hand the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    fn framed_write(&mut self, control: u8, payload: &[u8]) -> Result<(), DisplayError> {
        let mut frame = Vec::with_capacity(payload.len() + 1);
        frame.push(control);
        frame.extend_from_slice(payload);

        log::trace!(
            "I2C write to 0x{:02X}: control 0x{:02X}, {} bytes",
            self.address,
            control,
            payload.len()
        );
        match self.i2c.write(self.address, &frame) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!(
                    "I2C write error at 0x{:02X} (control 0x{:02X}): {:?}",
                    self.address,
                    control,
                    e
                );
                Err(DisplayError::BusWriteError)
            }
        }
    }
}

impl<I2C> Transport for I2cInterface<I2C>
where
    I2C: I2c,
{
    fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.framed_write(Flag::CONTROL_COMMAND_SINGLE, &[command])
    }

    fn write_commands(&mut self, commands: &[u8]) -> Result<(), DisplayError> {
        self.framed_write(Flag::CONTROL_COMMAND_STREAM, commands)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        self.framed_write(Flag::CONTROL_DATA_STREAM, data)
    }
}

/// 4-wire SPI transport
pub struct SpiInterface<SPI, DC> {
    /// SPI device
    spi: SPI,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
}

impl<SPI, DC> SpiInterface<SPI, DC> {
    /// Wrap an SPI device and its D/C# pin
    pub fn new(spi: SPI, dc: DC) -> Self {
        SpiInterface { spi, dc }
    }

    /// Hand the device and pin back
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> Transport for SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.write_commands(&[command])
    }

    fn write_commands(&mut self, commands: &[u8]) -> Result<(), DisplayError> {
        // low for commands
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;

        match self.spi.write(commands) {
            Ok(_) => Ok(()),
            Err(e) => {
                log::error!("SPI write error for {} command bytes: {:?}", commands.len(), e);
                Err(DisplayError::BusWriteError)
            }
        }
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        // high for data
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;

        match self.spi.write(data) {
            Ok(_) => Ok(()),
            Err(e) => {
                log::error!("SPI write error for {} data bytes: {:?}", data.len(), e);
                Err(DisplayError::BusWriteError)
            }
        }
    }
}

/// Stand-in for boards that tie RES# high
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResetPin;

impl ErrorType for NoResetPin {
    type Error = Infallible;
}

impl OutputPin for NoResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Exclusive handle on everything that reaches the panel: the bus, the
/// reset line and the delay source used for reset timing.
///
/// Acquired once when the driver is built and given back once by
/// [`release`](Self::release).
pub struct DisplayInterface<T, RST, DELAY> {
    transport: T,
    rst: RST,
    delay: DELAY,
}

impl<T, RST, DELAY> DisplayInterface<T, RST, DELAY> {
    /// Take ownership of the parts
    pub fn new(transport: T, rst: RST, delay: DELAY) -> Self {
        DisplayInterface {
            transport,
            rst,
            delay,
        }
    }

    /// Hand every part back
    pub fn release(self) -> (T, RST, DELAY) {
        (self.transport, self.rst, self.delay)
    }
}

impl<T, RST, DELAY> DisplayInterface<T, RST, DELAY>
where
    T: Transport,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Pulse RES# high-low-high so the controller latches a clean state
    pub(crate) fn reset(&mut self) -> Result<(), DisplayError> {
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(RESET_HIGH_MS);
        self.rst.set_low().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(RESET_LOW_MS);
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        Ok(())
    }

    /// Block for `span`, down to the nanosecond.
    ///
    /// Whole milliseconds go through `delay_ms`, in `u32::MAX` steps when
    /// the span is longer than one call can hold; the rest through `delay_ns`.
    pub(crate) fn pause(&mut self, span: Duration) {
        let mut millis = span.as_millis();
        while millis > 0 {
            let step = u32::try_from(millis).unwrap_or(u32::MAX);
            self.delay.delay_ms(step);
            millis -= u128::from(step);
        }
        let nanos = span.subsec_nanos() % 1_000_000;
        if nanos > 0 {
            self.delay.delay_ns(nanos);
        }
    }

    /// Basic function for sending a single command
    pub(crate) fn cmd(&mut self, command: u8) -> Result<(), DisplayError> {
        log::trace!("command 0x{:02X}", command);
        self.transport.write_command(command)
    }

    /// Basic function for sending a command stream
    pub(crate) fn cmds(&mut self, commands: &[u8]) -> Result<(), DisplayError> {
        log::trace!("command stream {:02X?}", commands);
        self.transport.write_commands(commands)
    }

    /// Basic function for sending display RAM content
    pub(crate) fn data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        self.transport.write_data(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    const ADDR: u8 = 0x3C;

    /// SPI device whose every transaction fails
    struct BrokenSpi;

    impl embedded_hal::spi::ErrorType for BrokenSpi {
        type Error = embedded_hal::spi::ErrorKind;
    }

    impl SpiDevice for BrokenSpi {
        fn transaction(
            &mut self,
            _operations: &mut [embedded_hal::spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            Err(embedded_hal::spi::ErrorKind::Other)
        }
    }

    /// Output pin that refuses every level change
    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = embedded_hal::digital::ErrorKind;
    }

    impl OutputPin for BrokenPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(embedded_hal::digital::ErrorKind::Other)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(embedded_hal::digital::ErrorKind::Other)
        }
    }

    /// The three SPI expectations behind one `SpiDevice::write`.
    fn spi_device_write(data: &[u8]) -> [SpiTransaction<u8>; 3] {
        [
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(data.to_vec()),
            SpiTransaction::transaction_end(),
        ]
    }

    #[test]
    fn i2c_frames_each_kind_of_write() {
        let mut i2c = I2cMock::new(&[
            I2cTransaction::write(ADDR, vec![0x80, 0xAF]),
            I2cTransaction::write(ADDR, vec![0x00, 0x81, 0x10]),
            I2cTransaction::write(ADDR, vec![0x40, 0x01, 0x02, 0x03]),
        ]);

        let mut interface = I2cInterface::new(i2c.clone(), ADDR);
        interface.write_command(0xAF).unwrap();
        interface.write_commands(&[0x81, 0x10]).unwrap();
        interface.write_data(&[0x01, 0x02, 0x03]).unwrap();
        assert_eq!(interface.address(), ADDR);

        i2c.done();
    }

    #[test]
    fn i2c_error_maps_to_bus_write_error() {
        let mut i2c = I2cMock::new(&[I2cTransaction::write(ADDR, vec![0x80, 0xAE])
            .with_error(embedded_hal::i2c::ErrorKind::Other)]);

        let mut interface = I2cInterface::new(i2c.clone(), ADDR);
        assert!(matches!(
            interface.write_command(0xAE),
            Err(DisplayError::BusWriteError)
        ));

        i2c.done();
    }

    #[test]
    fn spi_drives_dc_instead_of_control_bytes() {
        let expectations: Vec<SpiTransaction<u8>> = [
            &spi_device_write(&[0xA7]) as &[_],
            &spi_device_write(&[0x21, 0x00, 0x7F]),
            &spi_device_write(&[0xFF, 0x00]),
        ]
        .iter()
        .flat_map(|s| s.iter().cloned())
        .collect();
        let mut spi = SpiMock::new(&expectations);
        let mut dc = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);

        let mut interface = SpiInterface::new(spi.clone(), dc.clone());
        interface.write_command(0xA7).unwrap();
        interface.write_commands(&[0x21, 0x00, 0x7F]).unwrap();
        interface.write_data(&[0xFF, 0x00]).unwrap();

        spi.done();
        dc.done();
    }

    #[test]
    fn spi_write_errors_map_to_bus_write_error() {
        let mut dc = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);

        let mut interface = SpiInterface::new(BrokenSpi, dc.clone());
        assert!(matches!(
            interface.write_commands(&[0xAE]),
            Err(DisplayError::BusWriteError)
        ));
        assert!(matches!(
            interface.write_data(&[0xFF; 16]),
            Err(DisplayError::BusWriteError)
        ));

        dc.done();
    }

    #[test]
    fn dc_pin_failure_stops_before_the_bus() {
        let mut spi = SpiMock::<u8>::new(&[]);

        let mut interface = SpiInterface::new(spi.clone(), BrokenPin);
        assert!(matches!(
            interface.write_data(&[0x01]),
            Err(DisplayError::DCError)
        ));

        spi.done();
    }

    #[test]
    fn reset_pin_failure_maps_to_rs_error() {
        let mut i2c = I2cMock::new(&[]);

        let mut handle =
            DisplayInterface::new(I2cInterface::new(i2c.clone(), ADDR), BrokenPin, NoopDelay);
        assert!(matches!(handle.reset(), Err(DisplayError::RSError)));

        i2c.done();
    }

    #[test]
    fn reset_pulses_high_low_high() {
        let mut rst = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);
        let mut i2c = I2cMock::new(&[]);

        let mut handle = DisplayInterface::new(
            I2cInterface::new(i2c.clone(), ADDR),
            rst.clone(),
            NoopDelay,
        );
        handle.reset().unwrap();

        let (transport, _rst, _delay) = handle.release();
        assert_eq!(transport.address(), ADDR);

        rst.done();
        i2c.done();
    }

    /// Delay that records what it was asked to wait
    #[derive(Default)]
    struct RecordingDelay {
        waits: Vec<(&'static str, u32)>,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.waits.push(("ns", ns));
        }

        fn delay_ms(&mut self, ms: u32) {
            self.waits.push(("ms", ms));
        }
    }

    #[test]
    fn pause_keeps_sub_millisecond_spans() {
        let mut i2c = I2cMock::new(&[]);
        let mut handle = DisplayInterface::new(
            I2cInterface::new(i2c.clone(), ADDR),
            NoResetPin,
            RecordingDelay::default(),
        );

        handle.pause(Duration::from_micros(500));
        handle.pause(Duration::from_micros(1500));
        handle.pause(Duration::from_millis(40));
        handle.pause(Duration::ZERO);

        let (_transport, _rst, delay) = handle.release();
        assert_eq!(
            delay.waits,
            vec![("ns", 500_000), ("ms", 1), ("ns", 500_000), ("ms", 40)]
        );

        i2c.done();
    }

    #[test]
    fn pause_splits_spans_longer_than_one_call() {
        let mut i2c = I2cMock::new(&[]);
        let mut handle = DisplayInterface::new(
            I2cInterface::new(i2c.clone(), ADDR),
            NoResetPin,
            RecordingDelay::default(),
        );

        handle.pause(Duration::from_millis(u64::from(u32::MAX) + 5));

        let (_transport, _rst, delay) = handle.release();
        assert_eq!(delay.waits, vec![("ms", u32::MAX), ("ms", 5)]);

        i2c.done();
    }

    #[test]
    fn no_reset_pin_is_accepted() {
        let mut i2c = I2cMock::new(&[]);
        let mut handle = DisplayInterface::new(
            I2cInterface::new(i2c.clone(), ADDR),
            NoResetPin,
            NoopDelay,
        );
        handle.reset().unwrap();
        i2c.done();
    }
}
