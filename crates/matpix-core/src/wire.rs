/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Parsing and producing the fixed 16-byte frame header.
//!
//! The codec here is a pure, minimal parser: it splits a byte buffer into
//! a [`FrameHeader`] and an uninterpreted payload. Checking the payload
//! length against the declared shape is the job of
//! [`materialize`](crate::samples::materialize).

use log::trace;

use crate::bytestream::ByteReader;
use crate::errors::FrameErrors;
use crate::sample_type::SampleType;

/// Size in bytes of the serialized frame header
pub const HEADER_SIZE: usize = 16;

/// Metadata describing one serialized frame.
///
/// Fields keep the wire's `i32` representation, shape validation happens
/// when the payload is materialized. A well-formed header has
/// `rows >= 0`, `cols >= 0` and `channels >= 1`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FrameHeader
{
    pub sample_type: SampleType,
    pub rows:        i32,
    pub cols:        i32,
    pub channels:    i32
}

impl FrameHeader
{
    pub const fn new(sample_type: SampleType, rows: i32, cols: i32, channels: i32) -> FrameHeader
    {
        FrameHeader {
            sample_type,
            rows,
            cols,
            channels
        }
    }

    /// Number of payload bytes the header declares.
    ///
    /// Fails with [`FrameErrors::InvalidDimensions`] for negative rows or
    /// cols, channels below one, or a product too large to address.
    pub fn payload_size(&self) -> Result<usize, FrameErrors>
    {
        if self.rows < 0 || self.cols < 0 || self.channels < 1
        {
            return Err(FrameErrors::InvalidDimensions(
                self.rows,
                self.cols,
                self.channels
            ));
        }

        (self.rows as usize)
            .checked_mul(self.cols as usize)
            .and_then(|c| c.checked_mul(self.channels as usize))
            .and_then(|c| c.checked_mul(self.sample_type.size_of()))
            .ok_or(FrameErrors::InvalidDimensions(
                self.rows,
                self.cols,
                self.channels
            ))
    }

    /// Number of samples the header declares, across all channels
    pub fn num_samples(&self) -> Result<usize, FrameErrors>
    {
        Ok(self.payload_size()? / self.sample_type.size_of())
    }
}

/// Split a wire buffer into its header and raw payload.
///
/// The payload is returned uninterpreted, its length is not checked
/// against the header shape here.
pub fn decode_header(bytes: &[u8]) -> Result<(FrameHeader, &[u8]), FrameErrors>
{
    let mut stream = ByteReader::new(bytes);

    if !stream.has(HEADER_SIZE)
    {
        return Err(FrameErrors::TruncatedHeader(HEADER_SIZE, stream.len()));
    }

    let tag = stream.get_i32_le();
    let rows = stream.get_i32_le();
    let cols = stream.get_i32_le();
    let channels = stream.get_i32_le();

    let sample_type = match SampleType::from_tag(tag)
    {
        Some(kind) => kind,
        None => return Err(FrameErrors::UnknownSampleType(tag))
    };

    trace!("Frame header: {sample_type:?} {rows}x{cols}, {channels} channel(s)");

    Ok((
        FrameHeader::new(sample_type, rows, cols, channels),
        stream.remaining_bytes()
    ))
}

/// Serialize a header and payload into a wire buffer.
///
/// The payload length must match the header-declared shape exactly,
/// otherwise this fails with [`FrameErrors::PayloadSizeMismatch`].
pub fn encode(header: &FrameHeader, payload: &[u8]) -> Result<Vec<u8>, FrameErrors>
{
    let expected = header.payload_size()?;

    if payload.len() != expected
    {
        return Err(FrameErrors::PayloadSizeMismatch(expected, payload.len()));
    }

    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());

    out.extend_from_slice(&header.sample_type.tag().to_le_bytes());
    out.extend_from_slice(&header.rows.to_le_bytes());
    out.extend_from_slice(&header.cols.to_le_bytes());
    out.extend_from_slice(&header.channels.to_le_bytes());
    out.extend_from_slice(payload);

    Ok(out)
}
