/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple slice-backed byte reader.
//!
//! Wire headers are tiny and fixed-size, so the reader stays deliberately
//! small: callers check [`has`](ByteReader::has) once up front and then use
//! the infallible getters, which return zero past the end of the stream.

/// An encapsulation of a byte stream we are reading from
pub struct ByteReader<'a>
{
    stream:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a>
{
    /// Create a new reader over `buf`
    pub const fn new(buf: &'a [u8]) -> ByteReader<'a>
    {
        ByteReader {
            stream:   buf,
            position: 0
        }
    }

    /// Length of the whole underlying stream
    pub const fn len(&self) -> usize
    {
        self.stream.len()
    }

    pub const fn is_empty(&self) -> bool
    {
        self.stream.is_empty()
    }

    /// Number of bytes between the cursor and the end of the stream
    pub const fn remaining(&self) -> usize
    {
        self.stream.len().saturating_sub(self.position)
    }

    /// Return true if the stream still holds at least `num` bytes
    pub const fn has(&self, num: usize) -> bool
    {
        self.remaining() >= num
    }

    /// Skip `num` bytes ahead of the stream
    pub fn skip(&mut self, num: usize)
    {
        self.position = self.position.saturating_add(num);
    }

    pub const fn position(&self) -> usize
    {
        self.position
    }

    /// Read one byte, or zero past the end of the stream
    pub fn get_u8(&mut self) -> u8
    {
        match self.stream.get(self.position)
        {
            Some(byte) =>
            {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    /// Read a little-endian u32, or zero past the end of the stream
    pub fn get_u32_le(&mut self) -> u32
    {
        const SIZE: usize = core::mem::size_of::<u32>();

        match self.stream.get(self.position..self.position + SIZE)
        {
            Some(bytes) =>
            {
                self.position += SIZE;
                u32::from_le_bytes(bytes.try_into().unwrap())
            }
            None => 0
        }
    }

    /// Read a little-endian i32, or zero past the end of the stream
    pub fn get_i32_le(&mut self) -> i32
    {
        self.get_u32_le() as i32
    }

    /// Return all bytes from the cursor to the end of the stream,
    /// moving the cursor to the end
    pub fn remaining_bytes(&mut self) -> &'a [u8]
    {
        let start = self.position.min(self.stream.len());
        self.position = self.stream.len();

        &self.stream[start..]
    }
}
