//! The Windows ICO container: a header, one fixed-size directory entry
//! per image, then the PNG payloads back to back.

use crate::error::{Error, Result};
use crate::size::IconSize;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Seek, SeekFrom, Write};

//===========================================================================//

// The ICONDIR resource type for icons (cursors are 2).
const ICON_RESOURCE_TYPE: u16 = 1;

/// The size of the ICONDIR header, in bytes.
pub const HEADER_LEN: u32 = 6;

/// The size of one ICONDIRENTRY record, in bytes.
pub const ENTRY_LEN: u32 = 16;

// Payloads are always RGBA PNGs.
const BITS_PER_PIXEL: u16 = 32;

// The signature that all PNG files start with.
const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G'];

//===========================================================================//

/// The images of a single ICO file, in the order they were requested.
#[derive(Clone, Debug, Default)]
pub struct IconDir {
    entries: Vec<IconDirEntry>,
}

impl IconDir {
    /// Creates a new, empty collection of icons.
    pub fn new() -> IconDir {
        IconDir { entries: Vec::new() }
    }

    /// Returns the entries in this collection.
    pub fn entries(&self) -> &[IconDirEntry] {
        &self.entries
    }

    /// Adds an entry to the end of the collection.
    pub fn add_entry(&mut self, entry: IconDirEntry) {
        self.entries.push(entry);
    }

    /// Computes the file offset of each entry's payload.  Fails if the
    /// collection cannot be represented in an ICO file.
    pub fn offsets(&self) -> Result<Vec<u32>> {
        if self.entries.len() > (u16::MAX as usize) {
            return Err(Error::Overflow(format!(
                "Too many entries in IconDir (was {}, but max is {})",
                self.entries.len(),
                u16::MAX
            )));
        }
        let mut offsets = Vec::with_capacity(self.entries.len());
        let mut data_offset =
            HEADER_LEN + ENTRY_LEN * (self.entries.len() as u32);
        for entry in self.entries.iter() {
            offsets.push(data_offset);
            data_offset = u32::try_from(entry.data.len())
                .ok()
                .and_then(|size| data_offset.checked_add(size))
                .ok_or_else(|| {
                    Error::Overflow(format!(
                        "Image data for {} entry pushes the ICO file past \
                         {} bytes",
                        entry.size,
                        u32::MAX
                    ))
                })?;
        }
        Ok(offsets)
    }

    /// Reads an ICO file into memory.  Offsets are taken relative to the
    /// start of `reader`, and every payload must lie within it.
    pub fn read<R: Read + Seek>(mut reader: R) -> Result<IconDir> {
        let stream_len = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;
        if stream_len < HEADER_LEN as u64 {
            malformed_icon!(
                "File is {} bytes, too short for the ICONDIR header",
                stream_len
            );
        }
        let reserved = reader.read_u16::<LittleEndian>()?;
        if reserved != 0 {
            malformed_icon!(
                "Invalid reserved field value in ICONDIR \
                 (was {}, but must be 0)",
                reserved
            );
        }
        let restype = reader.read_u16::<LittleEndian>()?;
        if restype != ICON_RESOURCE_TYPE {
            malformed_icon!(
                "Invalid resource type (was {}, but must be {})",
                restype,
                ICON_RESOURCE_TYPE
            );
        }
        let num_entries = reader.read_u16::<LittleEndian>()? as usize;
        let directory_end =
            HEADER_LEN as u64 + ENTRY_LEN as u64 * num_entries as u64;
        if stream_len < directory_end {
            malformed_icon!(
                "File is {} bytes, too short for {} directory entries",
                stream_len,
                num_entries
            );
        }
        let mut entries = Vec::<IconDirEntry>::with_capacity(num_entries);
        let mut spans = Vec::<(u32, u32)>::with_capacity(num_entries);
        for _ in 0..num_entries {
            let width_byte = reader.read_u8()?;
            let height_byte = reader.read_u8()?;
            if width_byte != height_byte {
                malformed_icon!(
                    "Entry is not square (width byte {}, height byte {})",
                    width_byte,
                    height_byte
                );
            }
            let _num_colors = reader.read_u8()?;
            let reserved = reader.read_u8()?;
            if reserved != 0 {
                malformed_icon!(
                    "Invalid reserved field value in ICONDIRENTRY \
                     (was {}, but must be 0)",
                    reserved
                );
            }
            let color_planes = reader.read_u16::<LittleEndian>()?;
            let bits_per_pixel = reader.read_u16::<LittleEndian>()?;
            let data_size = reader.read_u32::<LittleEndian>()?;
            let data_offset = reader.read_u32::<LittleEndian>()?;
            let data_end = data_offset as u64 + data_size as u64;
            if data_end > stream_len {
                malformed_icon!(
                    "Image data for {}x{} entry spans bytes {}..{}, but the \
                     file is only {} bytes",
                    width_byte,
                    height_byte,
                    data_offset,
                    data_end,
                    stream_len
                );
            }
            spans.push((data_offset, data_size));
            entries.push(IconDirEntry {
                size: IconSize::from_directory_byte(width_byte),
                color_planes,
                bits_per_pixel,
                data: Vec::new(),
            });
        }
        for (index, &(data_offset, data_size)) in spans.iter().enumerate() {
            reader.seek(SeekFrom::Start(data_offset as u64))?;
            let mut data = vec![0u8; data_size as usize];
            reader.read_exact(&mut data)?;
            entries[index].data = data;
        }
        Ok(IconDir { entries })
    }

    /// Writes the ICO file.  All validation happens before the first byte is
    /// written, so a failure never leaves a partial container behind in
    /// `writer`.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        let offsets = self.offsets()?;
        writer.write_u16::<LittleEndian>(0)?; // reserved
        writer.write_u16::<LittleEndian>(ICON_RESOURCE_TYPE)?;
        writer.write_u16::<LittleEndian>(self.entries.len() as u16)?;
        for (entry, &data_offset) in self.entries.iter().zip(offsets.iter()) {
            writer.write_u8(entry.size.directory_byte())?;
            writer.write_u8(entry.size.directory_byte())?;
            writer.write_u8(0)?; // num colors
            writer.write_u8(0)?; // reserved
            writer.write_u16::<LittleEndian>(entry.color_planes)?;
            writer.write_u16::<LittleEndian>(entry.bits_per_pixel)?;
            writer.write_u32::<LittleEndian>(entry.data.len() as u32)?;
            writer.write_u32::<LittleEndian>(data_offset)?;
        }
        for entry in self.entries.iter() {
            writer.write_all(&entry.data)?;
        }
        Ok(())
    }
}

//===========================================================================//

/// One image in an ICO file.
#[derive(Clone, Debug)]
pub struct IconDirEntry {
    size: IconSize,
    color_planes: u16,
    bits_per_pixel: u16,
    data: Vec<u8>,
}

impl IconDirEntry {
    /// Wraps PNG data for an image `size` pixels square.  Returns
    /// `Error::InvalidSize` if `size` cannot be stored in an ICO file.
    pub fn from_png(size: u32, data: Vec<u8>) -> Result<IconDirEntry> {
        let size = IconSize::new(size as i64)?;
        Ok(IconDirEntry {
            size,
            color_planes: 0,
            bits_per_pixel: BITS_PER_PIXEL,
            data,
        })
    }

    /// Returns the edge length of the image.
    pub fn size(&self) -> IconSize {
        self.size
    }

    /// Returns the color planes field.
    pub fn color_planes(&self) -> u16 {
        self.color_planes
    }

    /// Returns the bits-per-pixel (color depth) of the image.
    pub fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }

    /// Returns true if the payload looks like a PNG.
    pub fn is_png(&self) -> bool {
        self.data.starts_with(PNG_SIGNATURE)
    }

    /// Returns the raw, encoded image data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

//===========================================================================//

/// Serializes `(size, png_bytes)` pairs into an ICO file, keeping the order
/// given.
pub fn encode(images: &[(u32, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut icondir = IconDir::new();
    for (size, data) in images.iter() {
        icondir.add_entry(IconDirEntry::from_png(*size, data.clone())?);
    }
    let payload_len: usize = images.iter().map(|(_, data)| data.len()).sum();
    let mut output = Vec::with_capacity(
        (HEADER_LEN + ENTRY_LEN * images.len() as u32) as usize + payload_len,
    );
    icondir.write(&mut output)?;
    Ok(output)
}

//===========================================================================//


//===========================================================================//
