//! navX2 Register Encoding Rules
//!
//! Pure byte-span decoders for the device's little-endian register
//! encodings. These functions carry no device state and do no I/O, so the
//! same codec serves both the raw-register path and any higher-level driver
//! that exposes raw blocks.
//!
//! Callers are responsible for handing in spans of the correct width;
//! the layout is fixed by the register map, not discovered at runtime.

/// Decode a little-endian unsigned 16-bit value
pub fn decode_u16(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Decode a little-endian unsigned 32-bit value
pub fn decode_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Decode a little-endian signed 16-bit value
///
/// Same bit pattern as [`decode_u16`], reinterpreted as two's complement.
pub fn decode_i16(bytes: &[u8]) -> i16 {
    i16::from_le_bytes([bytes[0], bytes[1]])
}

/// Decode a signed hundredths fixed-point value
///
/// Used for the angle registers (yaw/pitch/roll, hundredths of a degree)
/// and the die temperature (hundredths of °C).
pub fn decode_signed_hundredths(bytes: &[u8]) -> f32 {
    decode_i16(bytes) as f32 / 100.0
}

/// Decode an unsigned hundredths fixed-point value
///
/// Used for the heading registers (0.00..=359.99 degrees).
pub fn decode_unsigned_hundredths(bytes: &[u8]) -> f32 {
    decode_u16(bytes) as f32 / 100.0
}

/// Decode a signed thousandths fixed-point value
///
/// Used for the world-frame linear acceleration registers (thousandths of g).
pub fn decode_signed_thousandths(bytes: &[u8]) -> f32 {
    decode_i16(bytes) as f32 / 1000.0
}

/// Decode a signed 16:16 fixed-point value
///
/// Used for the altitude registers (meters).
pub fn decode_q16_16(bytes: &[u8]) -> f32 {
    let raw = decode_u32(bytes) as i32;
    raw as f32 / 65536.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_u16() {
        assert_eq!(decode_u16(&[0x34, 0x12]), 0x1234);
        assert_eq!(decode_u16(&[0x00, 0x00]), 0);
        assert_eq!(decode_u16(&[0xFF, 0xFF]), 0xFFFF);
    }

    #[test]
    fn test_decode_u32() {
        assert_eq!(decode_u32(&[0x78, 0x56, 0x34, 0x12]), 0x1234_5678);
        assert_eq!(decode_u32(&[0xE8, 0x03, 0x00, 0x00]), 1000);
    }

    #[test]
    fn test_decode_i16() {
        assert_eq!(decode_i16(&[0xFF, 0xFF]), -1);
        assert_eq!(decode_i16(&[0x00, 0x80]), -32768);
        assert_eq!(decode_i16(&[0xFF, 0x7F]), 32767);
    }

    #[test]
    fn test_signed_unsigned_bit_agreement() {
        // Signed and unsigned decodes of the same span must agree bit-for-bit
        for raw in 0..=u16::MAX {
            let bytes = raw.to_le_bytes();
            assert_eq!(decode_i16(&bytes) as u16, decode_u16(&bytes));
        }
    }

    #[test]
    fn test_decode_signed_hundredths() {
        // 100 hundredths -> 1.00
        assert_eq!(decode_signed_hundredths(&[0x64, 0x00]), 1.00);
        // -1 hundredth -> -0.01
        assert!((decode_signed_hundredths(&[0xFF, 0xFF]) + 0.01).abs() < 1e-6);
        // 1234 hundredths -> 12.34
        assert!((decode_signed_hundredths(&[0xD2, 0x04]) - 12.34).abs() < 1e-6);
    }

    #[test]
    fn test_decode_unsigned_hundredths() {
        // 35999 hundredths -> 359.99, would be negative if misread as signed
        let bytes = 35999u16.to_le_bytes();
        assert!((decode_unsigned_hundredths(&bytes) - 359.99).abs() < 1e-3);
    }

    #[test]
    fn test_decode_signed_thousandths() {
        let bytes = (-500i16).to_le_bytes();
        assert!((decode_signed_thousandths(&bytes) + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_decode_q16_16() {
        // 1.5 m == 0x00018000 in 16:16
        assert_eq!(decode_q16_16(&[0x00, 0x80, 0x01, 0x00]), 1.5);
        // -0.25 m == 0xFFFFC000
        assert_eq!(decode_q16_16(&[0x00, 0xC0, 0xFF, 0xFF]), -0.25);
    }
}
