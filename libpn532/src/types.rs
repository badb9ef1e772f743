// libpn532/src/types.rs

use crate::Error;
use derive_more::{From, Into};
use std::convert::TryFrom;
use std::fmt;

/// Firmware version reported by GetFirmwareVersion, packed big-endian
/// as IC / Ver / Rev / Support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
pub struct FirmwareVersion(u32);

impl FirmwareVersion {
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// IC version (0x32 for a PN532)
    pub fn ic(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn version(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn revision(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Bit field of supported card families
    pub fn support(&self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PN5{:02x} v{}.{} (support {:#04x})",
            self.ic(),
            self.version(),
            self.revision(),
            self.support()
        )
    }
}

/// Opaque 32-bit target identifier passed through authentication payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
pub struct TargetId(u32);

impl TargetId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

/// NFCID reported by InListPassiveTarget (up to 7 bytes for ISO14443A).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nfcid {
    bytes: [u8; Nfcid::MAX_LEN],
    len: u8,
}

impl Nfcid {
    pub const MAX_LEN: usize = 7;

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Big-endian concatenation of the identifier bytes.
    pub fn to_u64(&self) -> u64 {
        crate::protocol::parser::be_concat(self.as_bytes())
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Nfcid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() > Self::MAX_LEN {
            return Err(Error::InvalidLength {
                expected: Self::MAX_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; Self::MAX_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }
}

/// First target reported by a passive target discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassiveTarget {
    /// Number of targets the chip initialised (1 or 2)
    pub targets_found: u8,
    /// Logical target number to use in later exchanges
    pub target: u8,
    pub sens_res: u16,
    pub sel_res: u8,
    pub nfcid: Nfcid,
}

impl PassiveTarget {
    /// Identifier as a big-endian integer.
    pub fn id(&self) -> u64 {
        self.nfcid.to_u64()
    }

    /// Low 32 bits of the identifier, as consumed by authentication.
    pub fn target_id(&self) -> TargetId {
        TargetId::new(self.id() as u32)
    }
}

/// BlockData (16 バイト) as returned by a MIFARE READ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; 16]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 16 {
            return Err(Error::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// MIFARE key slot used for authentication
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyType {
    #[default]
    A = crate::constants::MIFARE_CMD_AUTH_A,
    B = crate::constants::MIFARE_CMD_AUTH_B,
}

/// Baud rate and modulation used for passive target discovery (BrTy)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaudRate {
    #[default]
    Iso14443a106 = 0x00,
    Felica212 = 0x01,
    Felica424 = 0x02,
    Iso14443b106 = 0x03,
    Jewel106 = 0x04,
}

/// Baud rate for the active-mode DEP link
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DepBaudRate {
    Kbps106 = 0x00,
    #[default]
    Kbps212 = 0x01,
    Kbps424 = 0x02,
}

/// SAM configuration mode
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SamMode {
    /// SAM not used
    #[default]
    Normal = 0x01,
    VirtualCard = 0x02,
    WiredCard = 0x03,
    DualCard = 0x04,
}

/// Tag family the session is configured for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagFamily {
    /// MIFARE Classic 1K and other ISO14443A cards
    MifareIso14443a,
    /// NXP NTAG203 (NFC Forum Type 2)
    Ntag203,
}

impl TagFamily {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            crate::constants::PN532_TAG_MIFARE_ISO14443A => Some(Self::MifareIso14443a),
            crate::constants::PN532_TAG_NTAG203 => Some(Self::Ntag203),
            _ => None,
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::MifareIso14443a => crate::constants::PN532_TAG_MIFARE_ISO14443A,
            Self::Ntag203 => crate::constants::PN532_TAG_NTAG203,
        }
    }

    /// (blocks, bytes per block)
    pub fn geometry(&self) -> (u16, u16) {
        match self {
            Self::MifareIso14443a => (64, 16),
            Self::Ntag203 => (42, 4),
        }
    }
}
