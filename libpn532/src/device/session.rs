// libpn532/src/device/session.rs

use crate::device::config::Pn532Config;
use crate::protocol::commands::normalize_max_targets;
use crate::types::{BaudRate, TagFamily};
use crate::{Error, Result};

/// Bytes per memory page, independent of the tag family.
pub const PAGE_SIZE: u16 = 16;

/// Geometry and discovery parameters fixed when a tag family is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    family: TagFamily,
    blocks: u16,
    block_size: u16,
    baud_rate: BaudRate,
    max_targets: u8,
}

impl Session {
    pub fn for_family(family: TagFamily, config: &Pn532Config) -> Self {
        let (blocks, block_size) = family.geometry();
        Self {
            family,
            blocks,
            block_size,
            baud_rate: config.baud_rate,
            max_targets: normalize_max_targets(config.max_targets, config.baud_rate),
        }
    }

    pub fn family(&self) -> TagFamily {
        self.family
    }

    pub fn blocks(&self) -> u16 {
        self.blocks
    }

    pub fn block_size(&self) -> u16 {
        self.block_size
    }

    pub fn page_size(&self) -> u16 {
        PAGE_SIZE
    }

    pub fn memory_size(&self) -> u32 {
        u32::from(self.blocks) * u32::from(self.block_size)
    }

    pub fn pages(&self) -> u32 {
        self.memory_size().div_ceil(u32::from(PAGE_SIZE))
    }

    pub fn baud_rate(&self) -> BaudRate {
        self.baud_rate
    }

    pub fn max_targets(&self) -> u8 {
        self.max_targets
    }

    /// Reject block addresses past the end of the tag.
    pub fn check_block(&self, block: u8) -> Result<()> {
        if u16::from(block) >= self.blocks {
            return Err(Error::BlockOutOfRange {
                block,
                blocks: self.blocks,
            });
        }
        Ok(())
    }
}
