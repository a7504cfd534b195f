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
pub enum TiffEncodeErrors
{
    /// Data length does not match the declared dimensions
    TooShortInput(usize, usize),
    /// A dimension or byte count does not fit the format's 32-bit fields
    TooLargeDimensions(&'static str, usize),
    IoErrors(io::Error)
}

impl From<io::Error> for TiffEncodeErrors
{
    fn from(err: Error) -> Self
    {
        TiffEncodeErrors::IoErrors(err)
    }
}

impl Debug for TiffEncodeErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            TiffEncodeErrors::TooShortInput(expected, found) =>
            {
                writeln!(f, "Expected input of length {expected} but found {found}")
            }
            TiffEncodeErrors::TooLargeDimensions(field, value) =>
            {
                writeln!(f, "Too large {field}, {value} exceeds 32 bits")
            }
            TiffEncodeErrors::IoErrors(ref err) =>
            {
                writeln!(f, "{err}")
            }
        }
    }
}

// baseline tag subset we emit, ascending order is mandated by the format
const TAG_IMAGE_WIDTH: u16 = 256;
const TAG_IMAGE_LENGTH: u16 = 257;
const TAG_BITS_PER_SAMPLE: u16 = 258;
const TAG_COMPRESSION: u16 = 259;
const TAG_PHOTOMETRIC: u16 = 262;
const TAG_STRIP_OFFSETS: u16 = 273;
const TAG_SAMPLES_PER_PIXEL: u16 = 277;
const TAG_ROWS_PER_STRIP: u16 = 278;
const TAG_STRIP_BYTE_COUNTS: u16 = 279;
const TAG_SAMPLE_FORMAT: u16 = 339;

const FIELD_SHORT: u16 = 3;
const FIELD_LONG: u16 = 4;

const COMPRESSION_NONE: u32 = 1;
const PHOTOMETRIC_MIN_IS_BLACK: u32 = 1;

const SAMPLE_FORMAT_UINT: u32 = 1;
const SAMPLE_FORMAT_IEEE_FLOAT: u32 = 3;

// 8-byte file header, strip data follows immediately
const STRIP_OFFSET: usize = 8;

const IFD_ENTRIES: u16 = 10;

/// A grayscale TIFF encoder that writes to `writer`.
///
/// # Note
///
/// Sample values are expected in native endian, the encoder converts them
/// to the little-endian byte order the file header declares.
pub struct TiffEncoder<'a, W: Write>
{
    writer: &'a mut W
}

impl<'a, W: Write> TiffEncoder<'a, W>
{
    /// Create a new TIFF encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> TiffEncoder<'a, W>
    {
        Self { writer }
    }

    /// Encode `data` as a 16-bit unsigned grayscale TIFF.
    ///
    /// `data` is row-major and must hold exactly `width * height` samples.
    pub fn encode_u16(
        &mut self, width: usize, height: usize, data: &[u16]
    ) -> Result<(), TiffEncodeErrors>
    {
        self.encode_gray(width, height, data, 16, SAMPLE_FORMAT_UINT, u16::to_le_bytes)
    }

    /// Encode `data` as a 32-bit IEEE float grayscale TIFF.
    ///
    /// `data` is row-major and must hold exactly `width * height` samples.
    pub fn encode_f32(
        &mut self, width: usize, height: usize, data: &[f32]
    ) -> Result<(), TiffEncodeErrors>
    {
        self.encode_gray(
            width,
            height,
            data,
            32,
            SAMPLE_FORMAT_IEEE_FLOAT,
            f32::to_le_bytes
        )
    }

    fn encode_gray<T: Copy, const N: usize>(
        &mut self, width: usize, height: usize, data: &[T], bits: u32, sample_format: u32,
        to_le_bytes: fn(T) -> [u8; N]
    ) -> Result<(), TiffEncodeErrors>
    {
        if width > u32::MAX as usize
        {
            return Err(TiffEncodeErrors::TooLargeDimensions("width", width));
        }
        if height > u32::MAX as usize
        {
            return Err(TiffEncodeErrors::TooLargeDimensions("height", height));
        }

        let expected = width
            .checked_mul(height)
            .ok_or(TiffEncodeErrors::TooLargeDimensions("image size", width))?;

        if data.len() != expected
        {
            return Err(TiffEncodeErrors::TooShortInput(expected, data.len()));
        }

        // the strip byte count and the IFD offset that follows the strip
        // must both fit the format's 32-bit fields
        let strip_bytes = expected
            .checked_mul(N)
            .filter(|c| c.checked_add(STRIP_OFFSET).is_some_and(|o| o <= u32::MAX as usize))
            .ok_or(TiffEncodeErrors::TooLargeDimensions("strip size", expected))?;

        // file header: byte order, magic, offset of the IFD which we place
        // right after the single strip
        self.writer.write_all(b"II")?;
        self.writer.write_all(&42_u16.to_le_bytes())?;
        self.writer
            .write_all(&((STRIP_OFFSET + strip_bytes) as u32).to_le_bytes())?;

        // one scanline at a time, top to bottom, each row exactly
        // width * N bytes with no stride padding
        if width != 0
        {
            let mut row = Vec::with_capacity(width * N);

            for scanline in data.chunks_exact(width)
            {
                row.clear();

                for sample in scanline
                {
                    row.extend_from_slice(&to_le_bytes(*sample));
                }
                self.writer.write_all(&row)?;
            }
        }

        self.write_ifd(
            width as u32,
            height as u32,
            bits,
            sample_format,
            strip_bytes as u32
        )?;

        Ok(())
    }

    fn write_ifd(
        &mut self, width: u32, height: u32, bits: u32, sample_format: u32, strip_bytes: u32
    ) -> Result<(), TiffEncodeErrors>
    {
        self.writer.write_all(&IFD_ENTRIES.to_le_bytes())?;

        self.ifd_entry(TAG_IMAGE_WIDTH, FIELD_LONG, width)?;
        self.ifd_entry(TAG_IMAGE_LENGTH, FIELD_LONG, height)?;
        self.ifd_entry(TAG_BITS_PER_SAMPLE, FIELD_SHORT, bits)?;
        self.ifd_entry(TAG_COMPRESSION, FIELD_SHORT, COMPRESSION_NONE)?;
        self.ifd_entry(TAG_PHOTOMETRIC, FIELD_SHORT, PHOTOMETRIC_MIN_IS_BLACK)?;
        self.ifd_entry(TAG_STRIP_OFFSETS, FIELD_LONG, STRIP_OFFSET as u32)?;
        self.ifd_entry(TAG_SAMPLES_PER_PIXEL, FIELD_SHORT, 1)?;
        self.ifd_entry(TAG_ROWS_PER_STRIP, FIELD_LONG, height)?;
        self.ifd_entry(TAG_STRIP_BYTE_COUNTS, FIELD_LONG, strip_bytes)?;
        self.ifd_entry(TAG_SAMPLE_FORMAT, FIELD_SHORT, sample_format)?;

        // no further IFDs
        self.writer.write_all(&0_u32.to_le_bytes())?;

        Ok(())
    }

    /// Write one 12-byte IFD entry with a count of one.
    ///
    /// Short values are left-justified in the 4-byte value field, which in
    /// a little-endian file means writing the value as a LE u32 works for
    /// both field types.
    fn ifd_entry(&mut self, tag: u16, field_type: u16, value: u32) -> Result<(), TiffEncodeErrors>
    {
        self.writer.write_all(&tag.to_le_bytes())?;
        self.writer.write_all(&field_type.to_le_bytes())?;
        self.writer.write_all(&1_u32.to_le_bytes())?;
        self.writer.write_all(&value.to_le_bytes())?;

        Ok(())
    }
}
