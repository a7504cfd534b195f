/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::path::Path;

use log::{info, trace};
use matpix_bmp::{BmpEncodeErrors, BmpEncoder};
use matpix_core::{decode_header, materialize, SampleBuffer, SampleType};
use matpix_tiff::TiffEncoder;

use crate::errors::ExportErrors;

/// All supported export targets.
///
/// A target is picked from the frame's (sample type, channel count) pair
/// by [`ExportTarget::for_frame`]; that table is the single place the
/// mapping lives.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ExportTarget
{
    /// 8-bit indexed BMP with a grayscale palette
    GrayBmp,
    /// 24-bit BMP
    RgbBmp,
    /// 32-bit BMP
    ArgbBmp,
    /// 16-bit unsigned grayscale TIFF
    GrayTiffU16,
    /// 32-bit float grayscale TIFF
    GrayTiffF32
}

impl ExportTarget
{
    /// The export mapping: which on-disk format a frame renders to.
    ///
    /// Returns `None` when no target is defined for the combination.
    pub const fn for_frame(sample_type: SampleType, channels: usize) -> Option<ExportTarget>
    {
        match (sample_type, channels)
        {
            (SampleType::U8, 1) => Some(Self::GrayBmp),
            (SampleType::U8, 3) => Some(Self::RgbBmp),
            (SampleType::U8, 4) => Some(Self::ArgbBmp),
            (SampleType::U16, 1) => Some(Self::GrayTiffU16),
            (SampleType::F32, 1) => Some(Self::GrayTiffF32),
            _ => None
        }
    }

    /// Suggested file name for this target, for callers that do not care
    /// about naming. The destination stays an explicit parameter of every
    /// export operation.
    pub const fn default_file_name(self) -> &'static str
    {
        match self
        {
            Self::GrayBmp | Self::RgbBmp | Self::ArgbBmp => "frame_8u.bmp",
            Self::GrayTiffU16 => "frame_16u.tif",
            Self::GrayTiffF32 => "frame_32f.tif"
        }
    }
}

/// Decode a wire buffer and encode it into the bytes of its matching
/// image file format, without touching the filesystem.
///
/// Returns the encoded file contents together with the target that was
/// chosen. Fails with whatever error the first failing stage signals.
pub fn encode_frame(bytes: &[u8]) -> Result<(Vec<u8>, ExportTarget), ExportErrors>
{
    let (header, payload) = decode_header(bytes)?;

    let channels = header.channels.max(0) as usize;
    let width = header.cols.max(0) as usize;
    let height = header.rows.max(0) as usize;

    let samples = materialize(&header, payload)?;

    let target = match ExportTarget::for_frame(header.sample_type, channels)
    {
        Some(target) => target,
        None =>
        {
            // 8-bit frames always route to the bitmap encoder, whose
            // channel check names the failure precisely
            if header.sample_type == SampleType::U8
            {
                return Err(BmpEncodeErrors::UnsupportedChannelCount(channels).into());
            }
            return Err(ExportErrors::UnsupportedExportTarget(
                header.sample_type,
                channels
            ));
        }
    };

    trace!("Exporting {}x{} frame as {target:?}", width, height);

    let mut out = Vec::new();

    match (target, samples)
    {
        (
            ExportTarget::GrayBmp | ExportTarget::RgbBmp | ExportTarget::ArgbBmp,
            SampleBuffer::U8(data)
        ) =>
        {
            BmpEncoder::new(&mut out).encode_u8(width, height, channels, &data)?;
        }
        (ExportTarget::GrayTiffU16, SampleBuffer::U16(data)) =>
        {
            TiffEncoder::new(&mut out).encode_u16(width, height, &data)?;
        }
        (ExportTarget::GrayTiffF32, SampleBuffer::F32(data)) =>
        {
            TiffEncoder::new(&mut out).encode_f32(width, height, &data)?;
        }
        // the routing table and the materializer both key off the header's
        // sample type, the pairs cannot disagree
        _ => unreachable!()
    }

    Ok((out, target))
}

/// Export a wire buffer to an image file at `path`.
///
/// The file contents are encoded fully in memory first, the file is only
/// created once encoding has succeeded; a failed export never leaves a
/// partial file behind.
pub fn export_frame<P: AsRef<Path>>(bytes: &[u8], path: P) -> Result<ExportTarget, ExportErrors>
{
    let (contents, target) = encode_frame(bytes)?;

    fs::write(path.as_ref(), contents)?;

    info!("Wrote {target:?} frame to {:?}", path.as_ref());

    Ok(target)
}
