//! Table-driven CRC-32 used to authenticate packets.
//!
//! The wire format signs every record with a checksum built on the
//! reflected CRC-32 (IEEE 802.3) polynomial. The 256-entry lookup table is
//! generated once per process and never mutated afterward, so all codec
//! operations can read it concurrently without locks.

use once_cell::sync::Lazy;

/// Reflected form of the IEEE 802.3 CRC-32 polynomial.
const CRC32_POLYNOMIAL: u32 = 0xEDB8_8320;

/// Immutable 256-entry lookup table for byte-at-a-time CRC folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crc32Table([u32; 256]);

/// Process-wide table, built on first access (lazy static for simplicity)
static TABLE: Lazy<Crc32Table> = Lazy::new(Crc32Table::generate);

/// Get the process-wide lookup table
pub fn table() -> &'static Crc32Table {
    &TABLE
}

/// Checksum `buf` with the process-wide table
pub fn checksum(buf: &[u8]) -> u32 {
    TABLE.checksum(buf)
}

impl Crc32Table {
    /// Generate the lookup table.
    ///
    /// For each byte value the entry is the result of eight shift-and-xor
    /// rounds against the polynomial, matching the table the reference
    /// implementation builds at startup.
    pub fn generate() -> Self {
        let mut entries = [0u32; 256];
        for (i, entry) in entries.iter_mut().enumerate() {
            let mut crc = i as u32;
            for _ in 0..8 {
                if crc & 1 == 1 {
                    crc = (crc >> 1) ^ CRC32_POLYNOMIAL;
                } else {
                    crc >>= 1;
                }
            }
            *entry = crc;
        }
        Self(entries)
    }

    /// CRC-32 of `buf`.
    ///
    /// Accumulator seeded with `0xFFFFFFFF`, each byte folded through the
    /// table, final value inverted. Pure function of its inputs.
    pub fn checksum(&self, buf: &[u8]) -> u32 {
        let mut crc = 0xFFFF_FFFF_u32;
        for &byte in buf {
            crc = ((crc >> 8) & 0x00FF_FFFF) ^ self.0[((crc ^ u32::from(byte)) & 0xFF) as usize];
        }
        crc ^ 0xFFFF_FFFF
    }
}
