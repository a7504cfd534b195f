/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Turning raw payload bytes into typed sample arrays.

use crate::errors::FrameErrors;
use crate::sample_type::SampleType;
use crate::wire::FrameHeader;

/// A typed, owned sample array, one variant per wire sample type.
///
/// Samples are row-major and channel-fastest: all channels of one pixel
/// are stored contiguously before the next pixel's samples.
pub enum SampleBuffer
{
    U8(Vec<u8>),
    I8(Vec<i8>),
    U16(Vec<u16>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    F32(Vec<f32>),
    F64(Vec<f64>)
}

impl SampleBuffer
{
    /// The sample type stored in this buffer
    pub const fn sample_type(&self) -> SampleType
    {
        match self
        {
            Self::U8(_) => SampleType::U8,
            Self::I8(_) => SampleType::I8,
            Self::U16(_) => SampleType::U16,
            Self::I16(_) => SampleType::I16,
            Self::I32(_) => SampleType::I32,
            Self::F32(_) => SampleType::F32,
            Self::F64(_) => SampleType::F64
        }
    }

    /// Number of samples stored, counted in elements and not bytes
    pub fn len(&self) -> usize
    {
        match self
        {
            Self::U8(data) => data.len(),
            Self::I8(data) => data.len(),
            Self::U16(data) => data.len(),
            Self::I16(data) => data.len(),
            Self::I32(data) => data.len(),
            Self::F32(data) => data.len(),
            Self::F64(data) => data.len()
        }
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Return the contents if the buffer stores `Vec<u8>`, otherwise `None`.
    ///
    /// Useful for de-sugaring the result of a materialize call into the
    /// concrete array
    pub fn u8(self) -> Option<Vec<u8>>
    {
        match self
        {
            Self::U8(data) => Some(data),
            _ => None
        }
    }

    /// Return the contents if the buffer stores `Vec<u16>`, otherwise `None`
    pub fn u16(self) -> Option<Vec<u16>>
    {
        match self
        {
            Self::U16(data) => Some(data),
            _ => None
        }
    }

    /// Return the contents if the buffer stores `Vec<f32>`, otherwise `None`
    pub fn f32(self) -> Option<Vec<f32>>
    {
        match self
        {
            Self::F32(data) => Some(data),
            _ => None
        }
    }
}

/// Group native-endian payload bytes into native-width elements, in order
fn regroup<T, const N: usize>(payload: &[u8], from_ne_bytes: fn([u8; N]) -> T) -> Vec<T>
{
    payload
        .chunks_exact(N)
        .map(|chunk| from_ne_bytes(chunk.try_into().unwrap()))
        .collect()
}

/// Convert a raw payload into a typed sample array.
///
/// The payload length must equal `rows * cols * channels * size_of(type)`
/// exactly. A shorter or longer payload fails with
/// [`FrameErrors::PayloadSizeMismatch`], nothing is silently truncated.
///
/// One-byte sample types reinterpret the payload as-is; wider types
/// regroup the bytes into native-width units preserving the producer's
/// byte order.
pub fn materialize(header: &FrameHeader, payload: &[u8]) -> Result<SampleBuffer, FrameErrors>
{
    let expected = header.payload_size()?;

    if payload.len() != expected
    {
        return Err(FrameErrors::PayloadSizeMismatch(expected, payload.len()));
    }

    let samples = match header.sample_type
    {
        SampleType::U8 => SampleBuffer::U8(payload.to_vec()),
        SampleType::I8 => SampleBuffer::I8(bytemuck::cast_slice(payload).to_vec()),
        SampleType::U16 => SampleBuffer::U16(regroup(payload, u16::from_ne_bytes)),
        SampleType::I16 => SampleBuffer::I16(regroup(payload, i16::from_ne_bytes)),
        SampleType::I32 => SampleBuffer::I32(regroup(payload, i32::from_ne_bytes)),
        SampleType::F32 => SampleBuffer::F32(regroup(payload, f32::from_ne_bytes)),
        SampleType::F64 => SampleBuffer::F64(regroup(payload, f64::from_ne_bytes))
    };

    Ok(samples)
}
