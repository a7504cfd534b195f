/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for the matpix frame export pipeline.
//!
//! A serialized frame comes in as one byte buffer, produced by an external
//! frame source (see [`matpix_core`] for the wire layout). This crate
//! composes the three stages that turn it into a file on disk:
//!
//! 1. [`matpix_core::decode_header`] splits the buffer into header and
//!    payload,
//! 2. [`matpix_core::materialize`] validates the shape and builds a typed
//!    sample array,
//! 3. the matching encoder ([`matpix_tiff`] or [`matpix_bmp`]) renders it
//!    into an image file.
//!
//! Which encoder runs is decided by [`ExportTarget::for_frame`], a single
//! routing table over (sample type, channel count). Every export takes an
//! explicit destination path; [`ExportTarget::default_file_name`] is only
//! an advisory helper for callers that want one name per target.
//!
//! # Example
//!
//! ```
//! use matpix_core::{encode, FrameHeader, SampleType};
//!
//! let header = FrameHeader::new(SampleType::U8, 2, 2, 1);
//! let wire = encode(&header, &[10, 20, 30, 40]).unwrap();
//!
//! let (contents, target) = matpix::encode_frame(&wire).unwrap();
//! assert_eq!(target, matpix::ExportTarget::GrayBmp);
//! assert_eq!(&contents[0..2], b"BM");
//! ```
pub use export::{encode_frame, export_frame, ExportTarget};
pub use matpix_core::{FrameHeader, SampleBuffer, SampleType};

pub mod errors;
mod export;
