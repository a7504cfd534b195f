/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A minimal grayscale TIFF encoder.
//!
//! The encoder writes exactly the flavour of TIFF the matpix pipeline
//! needs and nothing more: little-endian, uncompressed, one sample per
//! pixel, min-is-black, with the whole image stored as a single strip
//! (`RowsPerStrip == ImageLength`). Supported sample layouts are 16-bit
//! unsigned integers and 32-bit IEEE floats.
//!
//! Single-strip layout keeps the writer a straight scanline loop and is
//! fine for camera-sized frames; very large images would want the strip
//! size revisited.
pub use crate::encoder::*;

mod encoder;
