/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};
use std::io;
use std::io::{Error, Write};

/// Errors occurring during encoding
pub enum BmpEncodeErrors
{
    /// Only 1, 3 and 4 channel frames have a defined BMP layout
    UnsupportedChannelCount(usize),
    /// Data length does not match the declared dimensions
    TooShortInput(usize, usize),
    /// A dimension or byte count does not fit the format's 32-bit fields
    TooLargeDimensions(&'static str, usize),
    IoErrors(io::Error)
}

impl From<io::Error> for BmpEncodeErrors
{
    fn from(err: Error) -> Self
    {
        BmpEncodeErrors::IoErrors(err)
    }
}

impl Debug for BmpEncodeErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            BmpEncodeErrors::UnsupportedChannelCount(channels) =>
            {
                writeln!(
                    f,
                    "Unsupported channel count {channels}, bmp export supports 1, 3 or 4"
                )
            }
            BmpEncodeErrors::TooShortInput(expected, found) =>
            {
                writeln!(f, "Expected input of length {expected} but found {found}")
            }
            BmpEncodeErrors::TooLargeDimensions(field, value) =>
            {
                writeln!(f, "Too large {field}, {value} exceeds 32 bits")
            }
            BmpEncodeErrors::IoErrors(ref err) =>
            {
                writeln!(f, "{err}")
            }
        }
    }
}

const FILE_HEADER_SIZE: usize = 14;
const INFO_HEADER_SIZE: usize = 40;
const PALETTE_SIZE: usize = 256 * 4;

// 72 DPI, the conventional value for generated files
const PIXELS_PER_METRE: u32 = 2835;

/// A BMP encoder that writes to `writer`
pub struct BmpEncoder<'a, W: Write>
{
    writer: &'a mut W
}

impl<'a, W: Write> BmpEncoder<'a, W>
{
    /// Create a new BMP encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> BmpEncoder<'a, W>
    {
        Self { writer }
    }

    /// Encode 8-bit samples as a BMP file.
    ///
    /// `data` is row-major top-down, channel-interleaved, and must hold
    /// exactly `width * height * channels` bytes. The pixel format is
    /// chosen from `channels`: 1 maps to 8-bit indexed grayscale, 3 to
    /// 24-bit and 4 to 32-bit; anything else fails with
    /// [`BmpEncodeErrors::UnsupportedChannelCount`].
    pub fn encode_u8(
        &mut self, width: usize, height: usize, channels: usize, data: &[u8]
    ) -> Result<(), BmpEncodeErrors>
    {
        if !matches!(channels, 1 | 3 | 4)
        {
            return Err(BmpEncodeErrors::UnsupportedChannelCount(channels));
        }
        if width > i32::MAX as usize
        {
            return Err(BmpEncodeErrors::TooLargeDimensions("width", width));
        }
        if height > i32::MAX as usize
        {
            return Err(BmpEncodeErrors::TooLargeDimensions("height", height));
        }

        let row_bytes = width * channels;
        let expected = row_bytes
            .checked_mul(height)
            .ok_or(BmpEncodeErrors::TooLargeDimensions("image size", width))?;

        if data.len() != expected
        {
            return Err(BmpEncodeErrors::TooShortInput(expected, data.len()));
        }

        // each row is padded up to a multiple of four bytes
        let stride = (row_bytes + 3) & !3;
        let palette_size = if channels == 1 { PALETTE_SIZE } else { 0 };
        let data_offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE + palette_size;

        let file_size = stride
            .checked_mul(height)
            .and_then(|c| c.checked_add(data_offset))
            .filter(|c| *c <= u32::MAX as usize)
            .ok_or(BmpEncodeErrors::TooLargeDimensions("file size", width))?;

        self.write_file_header(file_size as u32, data_offset as u32)?;
        self.write_info_header(
            width as u32,
            height as u32,
            channels as u16,
            (file_size - data_offset) as u32
        )?;

        if channels == 1
        {
            self.write_gray_palette()?;
        }

        // positive-height files store rows bottom-up
        if row_bytes != 0
        {
            let padding = [0_u8; 3];

            for row in data.chunks_exact(row_bytes).rev()
            {
                self.writer.write_all(row)?;
                self.writer.write_all(&padding[..stride - row_bytes])?;
            }
        }

        Ok(())
    }

    fn write_file_header(&mut self, file_size: u32, data_offset: u32) -> Result<(), BmpEncodeErrors>
    {
        self.writer.write_all(b"BM")?;
        self.writer.write_all(&file_size.to_le_bytes())?;
        // two reserved shorts
        self.writer.write_all(&[0; 4])?;
        self.writer.write_all(&data_offset.to_le_bytes())?;

        Ok(())
    }

    fn write_info_header(
        &mut self, width: u32, height: u32, channels: u16, image_size: u32
    ) -> Result<(), BmpEncodeErrors>
    {
        self.writer
            .write_all(&(INFO_HEADER_SIZE as u32).to_le_bytes())?;
        self.writer.write_all(&width.to_le_bytes())?;
        self.writer.write_all(&height.to_le_bytes())?;
        // planes
        self.writer.write_all(&1_u16.to_le_bytes())?;
        // bits per pixel
        self.writer.write_all(&(channels * 8).to_le_bytes())?;
        // BI_RGB, no compression
        self.writer.write_all(&0_u32.to_le_bytes())?;
        self.writer.write_all(&image_size.to_le_bytes())?;
        self.writer.write_all(&PIXELS_PER_METRE.to_le_bytes())?;
        self.writer.write_all(&PIXELS_PER_METRE.to_le_bytes())?;

        // colors used / important
        let colors: u32 = if channels == 1 { 256 } else { 0 };
        self.writer.write_all(&colors.to_le_bytes())?;
        self.writer.write_all(&0_u32.to_le_bytes())?;

        Ok(())
    }

    /// The grayscale ramp, index i maps to color (i, i, i).
    ///
    /// Entries are stored as BGR plus one reserved byte.
    fn write_gray_palette(&mut self) -> Result<(), BmpEncodeErrors>
    {
        for i in 0..=255_u8
        {
            self.writer.write_all(&[i, i, i, 0])?;
        }

        Ok(())
    }
}
