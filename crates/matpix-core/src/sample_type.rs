/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// The element type of a frame's samples.
///
/// The wire format identifies the type by a small integer tag, every
/// variant carries a fixed byte width. Anything outside this set is a
/// malformed frame.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SampleType
{
    /// 8-bit unsigned integer
    U8,
    /// 8-bit signed integer
    I8,
    /// 16-bit unsigned integer
    U16,
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// 32-bit IEEE float
    F32,
    /// 64-bit IEEE float
    F64
}

impl SampleType
{
    /// Map a wire tag to a sample type, returning `None`
    /// for tags outside the defined set.
    pub const fn from_tag(tag: i32) -> Option<SampleType>
    {
        match tag
        {
            0 => Some(Self::U8),
            1 => Some(Self::I8),
            2 => Some(Self::U16),
            3 => Some(Self::I16),
            4 => Some(Self::I32),
            5 => Some(Self::F32),
            6 => Some(Self::F64),
            _ => None
        }
    }

    /// The tag written on the wire for this type
    pub const fn tag(self) -> i32
    {
        match self
        {
            Self::U8 => 0,
            Self::I8 => 1,
            Self::U16 => 2,
            Self::I16 => 3,
            Self::I32 => 4,
            Self::F32 => 5,
            Self::F64 => 6
        }
    }

    /// Number of bytes one sample of this type occupies
    #[rustfmt::skip]
    pub const fn size_of(self) -> usize
    {
        match self
        {
            Self::U8  | Self::I8  => 1,
            Self::U16 | Self::I16 => 2,
            Self::I32 | Self::F32 => 4,
            Self::F64             => 8
        }
    }

    /// Return true if samples of this type are floating point
    pub const fn is_float(self) -> bool
    {
        matches!(self, Self::F32 | Self::F64)
    }
}
