//! SPI transport integration: the driver over a 4-wire SPI mock.
//!
//! Run with: cargo test --test spi_driver

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

use ssd1306_oled::{DisplayInterface, Geometry, PixelMode, Ssd1306, SpiInterface};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The three SPI expectations behind one `SpiDevice::write`.
fn spi_device_write(data: &[u8]) -> [SpiTransaction<u8>; 3] {
    [
        SpiTransaction::transaction_start(),
        SpiTransaction::write_vec(data.to_vec()),
        SpiTransaction::transaction_end(),
    ]
}

#[rustfmt::skip]
const INIT_128X32: [u8; 31] = [
    0xAE, 0x20, 0x00, 0xD5, 0x80, 0xA8, 31, 0xD3, 0x00, 0x40, 0x8D, 0x14,
    0xA1, 0xC8, 0xDA, 0x02, 0x81, 0x7F, 0xD9, 0xF1, 0xDB, 0x40,
    0x21, 0x00, 127, 0x22, 0x00, 3, 0xA4, 0xA6, 0xAF,
];

// ---------------------------------------------------------------------------
// Test: full lifecycle over SPI
// ---------------------------------------------------------------------------

/// init -> draw -> display -> contrast -> close, with D/C# switching
/// between command and data and no control bytes on the wire.
#[test]
fn spi_lifecycle() -> anyhow::Result<()> {
    let mut frame = vec![0u8; 512];
    frame[3 * 128 + 5] = 0x80; // (5, 31)

    let spi_expectations: Vec<SpiTransaction<u8>> = [
        &spi_device_write(&INIT_128X32) as &[_],
        &spi_device_write(&frame),
        &spi_device_write(&[0x81]),
        &spi_device_write(&[0xC0]),
        &spi_device_write(&[0u8; 512]),
    ]
    .iter()
    .flat_map(|s| s.iter().cloned())
    .collect();

    let dc_expectations = [
        PinTransaction::set(PinState::Low),  // init block
        PinTransaction::set(PinState::High), // frame
        PinTransaction::set(PinState::Low),  // contrast opcode
        PinTransaction::set(PinState::Low),  // contrast value
        PinTransaction::set(PinState::High), // blank frame
    ];
    let rst_expectations = [
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ];

    let mut spi = SpiMock::new(&spi_expectations);
    let mut dc = PinMock::new(&dc_expectations);
    let mut rst = PinMock::new(&rst_expectations);

    let interface = DisplayInterface::new(
        SpiInterface::new(spi.clone(), dc.clone()),
        rst.clone(),
        NoopDelay,
    );
    let mut drv = Ssd1306::new(interface, Geometry::new(128, 32)?);
    drv.init()?;
    drv.set_pixel(5, 31, PixelMode::Assert)?;
    drv.display()?;
    drv.set_contrast(0xC0)?;
    let (transport, _rst, _delay) = drv.close().map_err(|(err, _)| err)?;
    let (_spi, _dc) = transport.release();

    spi.done();
    dc.done();
    rst.done();
    Ok(())
}
