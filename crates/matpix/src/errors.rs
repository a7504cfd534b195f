/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during frame export
use std::fmt::{Debug, Formatter};
use std::io;

use matpix_bmp::BmpEncodeErrors;
use matpix_core::{FrameErrors, SampleType};
use matpix_tiff::TiffEncodeErrors;

/// All possible errors that can occur while exporting a frame.
///
/// Wraps the errors of each pipeline stage, plus the routing failure for
/// frames no export mapping is defined for.
pub enum ExportErrors
{
    FrameErrors(FrameErrors),
    TiffEncodeErrors(TiffEncodeErrors),
    BmpEncodeErrors(BmpEncodeErrors),
    /// Valid frame, but no (sample type, channels) export mapping exists
    UnsupportedExportTarget(SampleType, usize),
    IoErrors(io::Error)
}

impl Debug for ExportErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Self::FrameErrors(ref error) =>
            {
                writeln!(f, "Frame decoding failed: {error:?}")
            }
            Self::TiffEncodeErrors(ref error) =>
            {
                writeln!(f, "Tiff encoding failed: {error:?}")
            }
            Self::BmpEncodeErrors(ref error) =>
            {
                writeln!(f, "Bmp encoding failed: {error:?}")
            }
            Self::UnsupportedExportTarget(sample_type, channels) =>
            {
                writeln!(
                    f,
                    "No export target defined for {sample_type:?} frames with {channels} channel(s)"
                )
            }
            Self::IoErrors(ref error) =>
            {
                writeln!(f, "{error}")
            }
        }
    }
}

impl From<FrameErrors> for ExportErrors
{
    fn from(from: FrameErrors) -> Self
    {
        ExportErrors::FrameErrors(from)
    }
}

impl From<TiffEncodeErrors> for ExportErrors
{
    fn from(from: TiffEncodeErrors) -> Self
    {
        ExportErrors::TiffEncodeErrors(from)
    }
}

impl From<BmpEncodeErrors> for ExportErrors
{
    fn from(from: BmpEncodeErrors) -> Self
    {
        ExportErrors::BmpEncodeErrors(from)
    }
}

impl From<io::Error> for ExportErrors
{
    fn from(from: io::Error) -> Self
    {
        ExportErrors::IoErrors(from)
    }
}
