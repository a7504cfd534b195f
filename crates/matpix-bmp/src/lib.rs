/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An 8-bit-per-sample BMP encoder.
//!
//! Writes uncompressed WinBMPv3 files (14-byte file header plus 40-byte
//! info header) in the three layouts the matpix pipeline exports:
//!
//! - 1 channel: 8-bit indexed, with a generated 256-entry grayscale
//!   palette mapping index `i` to `(i, i, i)`
//! - 3 channels: 24 bits per pixel
//! - 4 channels: 32 bits per pixel
//!
//! Input samples are row-major top-down and channel-interleaved with no
//! stride padding; the encoder handles the format's 4-byte row alignment
//! and bottom-up row order itself. Multi-channel samples are copied
//! through in the order given, the BMP convention for that order is
//! BGR(A).
pub use crate::encoder::*;

mod encoder;
