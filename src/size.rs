use crate::error::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

//===========================================================================//

/// The smallest edge length an icon image may have.
pub const MIN_ICON_SIZE: u32 = 1;

/// The largest edge length an ICO directory entry can describe.
pub const MAX_ICON_SIZE: u32 = 256;

//===========================================================================//

/// A requested icon edge length, in pixels, between 1 and 256 inclusive.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct IconSize(u32);

impl IconSize {
    /// Validates a requested size.  Returns `Error::InvalidSize` if it is
    /// outside the range an ICO file can hold.
    pub fn new(pixels: i64) -> Result<IconSize> {
        if pixels < MIN_ICON_SIZE as i64 || pixels > MAX_ICON_SIZE as i64 {
            return Err(Error::InvalidSize(pixels));
        }
        Ok(IconSize(pixels as u32))
    }

    /// Returns the edge length in pixels.
    pub fn pixels(self) -> u32 {
        self.0
    }

    /// Returns the value stored in an ICONDIRENTRY width/height byte.  The
    /// field is only eight bits wide, and the format reads a zero byte as
    /// 256, so truncating gives the right answer for the whole range.
    pub fn directory_byte(self) -> u8 {
        self.0 as u8
    }

    /// Inverse of `directory_byte`.
    pub(crate) fn from_directory_byte(byte: u8) -> IconSize {
        if byte == 0 {
            IconSize(MAX_ICON_SIZE)
        } else {
            IconSize(byte as u32)
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}x{}", self.0, self.0)
    }
}

//===========================================================================//


//===========================================================================//
