/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core primitives shared by the matpix frame crates.
//!
//! A frame crossing the wire is a 2-D, channel-interleaved pixel buffer
//! serialized with the following layout:
//!
//! ```text
//! ╔════════╤══════════════════════════════════════════════════════════╗
//! ║ Bytes  │ Description                                              ║
//! ╠════════╪══════════════════════════════════════════════════════════╣
//! ║ 4      │ 32-Bit LE signed integer (sample type tag, 0..=6)        ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit LE signed integer (rows)                          ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit LE signed integer (cols)                          ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit LE signed integer (channels)                      ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ [...]  │ rows*cols*channels samples, row-major, channel-fastest   ║
//! ╚════════╧══════════════════════════════════════════════════════════╝
//! ```
//!
//! Sample bytes are stored in the producer's native endianness, the format
//! carries no endianness tag. Producer and consumer are assumed to share a
//! platform; cross-endian interchange would need a header extension.
//!
//! The crate splits the work in two stages so each stays trivially
//! reviewable:
//!
//! - [`wire`] parses and produces the 16-byte header, it never interprets
//!   the payload.
//! - [`samples`] turns the raw payload into a typed [`SampleBuffer`],
//!   validating the payload length against the header's declared shape.
//!
//! [`SampleBuffer`]: samples::SampleBuffer
pub mod bytestream;
pub mod errors;
pub mod sample_type;
pub mod samples;
pub mod wire;

pub use errors::FrameErrors;
pub use sample_type::SampleType;
pub use samples::{materialize, SampleBuffer};
pub use wire::{decode_header, encode, FrameHeader, HEADER_SIZE};
