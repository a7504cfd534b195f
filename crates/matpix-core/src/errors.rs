/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Formatter};

/// Errors possible when parsing or materializing a wire frame
pub enum FrameErrors
{
    /// The buffer cannot hold a full 16-byte header
    TruncatedHeader(usize, usize),
    /// The header tag does not map to a defined [`SampleType`](crate::SampleType)
    UnknownSampleType(i32),
    /// Rows or cols below zero, channels below one, or a shape whose
    /// byte size does not fit in memory
    InvalidDimensions(i32, i32, i32),
    /// Payload length differs from the header-declared shape
    PayloadSizeMismatch(usize, usize)
}

impl Debug for FrameErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        match self
        {
            Self::TruncatedHeader(expected, found) =>
            {
                writeln!(
                    f,
                    "Truncated header, expected at least {expected} bytes but found {found}"
                )
            }
            Self::UnknownSampleType(tag) =>
            {
                writeln!(f, "Unknown sample type tag {tag}")
            }
            Self::InvalidDimensions(rows, cols, channels) =>
            {
                writeln!(
                    f,
                    "Invalid frame shape rows={rows} cols={cols} channels={channels}"
                )
            }
            Self::PayloadSizeMismatch(expected, found) =>
            {
                writeln!(
                    f,
                    "Payload size mismatch, header declares {expected} bytes but found {found}"
                )
            }
        }
    }
}
