use std::sync::Mutex;
use std::time::Duration;

use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;

use crate::domain::entities::reading::Reading;
use crate::domain::ports::sensor::{SensorError, SensorReader};

/// Default SHT3x I2C address (ADDR pin low).
pub const DEFAULT_ADDRESS: u16 = 0x44;

/// Single-shot measurement, high repeatability, clock stretching enabled.
const CMD_MEASURE: [u8; 2] = [0x2c, 0x06];

/// Measurement duration upper bound for high repeatability.
const MEASURE_DELAY: Duration = Duration::from_millis(16);

/// Sensirion SHT3x over Linux I2C.
///
/// The bus device is opened once at construction and held for the life of
/// the process; every cycle borrows it for one blocking single-shot
/// transaction. No timeout beyond what the kernel driver applies.
pub struct Sht3x {
    // SensorReader::read takes &self; the bus handle needs exclusive access.
    dev: Mutex<LinuxI2CDevice>,
}

impl Sht3x {
    /// Open the sensor on the given bus device node at the default address.
    ///
    /// # Errors
    ///
    /// Returns `SensorError::Bus` if the device node cannot be opened.
    pub fn open(bus: &str) -> Result<Self, SensorError> {
        Self::with_address(bus, DEFAULT_ADDRESS)
    }

    /// Open the sensor at an explicit address (0x45 with the ADDR pin high).
    ///
    /// # Errors
    ///
    /// Returns `SensorError::Bus` if the device node cannot be opened.
    pub fn with_address(bus: &str, address: u16) -> Result<Self, SensorError> {
        let dev = LinuxI2CDevice::new(bus, address)
            .map_err(|e| SensorError::Bus(format!("{bus}: {e}")))?;
        Ok(Self {
            dev: Mutex::new(dev),
        })
    }
}

impl SensorReader for Sht3x {
    fn read(&self) -> Result<Reading, SensorError> {
        let mut dev = self
            .dev
            .lock()
            .map_err(|_| SensorError::Bus("bus handle poisoned".into()))?;

        dev.write(&CMD_MEASURE)
            .map_err(|e| SensorError::Bus(e.to_string()))?;
        std::thread::sleep(MEASURE_DELAY);

        let mut buf = [0u8; 6];
        dev.read(&mut buf)
            .map_err(|e| SensorError::Bus(e.to_string()))?;
        drop(dev);

        decode_measurement(&buf)
    }
}

/// Decode a 6-byte SHT3x response: two big-endian words, each followed by
/// its CRC-8 checksum.
fn decode_measurement(buf: &[u8; 6]) -> Result<Reading, SensorError> {
    if crc8(&[buf[0], buf[1]]) != buf[2] {
        return Err(SensorError::CorruptData(format!(
            "temperature crc mismatch (got {:#04x})",
            buf[2]
        )));
    }
    if crc8(&[buf[3], buf[4]]) != buf[5] {
        return Err(SensorError::CorruptData(format!(
            "humidity crc mismatch (got {:#04x})",
            buf[5]
        )));
    }

    let raw_temp = u16::from_be_bytes([buf[0], buf[1]]);
    let raw_hum = u16::from_be_bytes([buf[3], buf[4]]);

    Ok(Reading {
        temperature: convert_temperature(raw_temp),
        humidity: convert_humidity(raw_hum),
    })
}

/// Datasheet conversion: T = -45 + 175 * raw / (2^16 - 1).
fn convert_temperature(raw: u16) -> f32 {
    -45.0 + 175.0 * f32::from(raw) / 65535.0
}

/// Datasheet conversion: RH = 100 * raw / (2^16 - 1).
fn convert_humidity(raw: u16) -> f32 {
    100.0 * f32::from(raw) / 65535.0
}

/// CRC-8 as specified for the SHT3x: polynomial 0x31, init 0xFF, no final
/// XOR.
fn crc8(data: &[u8; 2]) -> u8 {
    let mut crc: u8 = 0xff;
    for byte in data {
        crc ^= byte;
        for _ in 0..8 {
            if crc & 0x80 != 0 {
                crc = (crc << 1) ^ 0x31;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}
