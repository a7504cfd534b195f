/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use matpix::errors::ExportErrors;
use matpix::{encode_frame, export_frame, ExportTarget, FrameHeader, SampleType};
use matpix_bmp::BmpEncodeErrors;
use matpix_core::encode;

fn temp_path(name: &str) -> PathBuf
{
    let mut path = std::env::temp_dir();
    path.push(format!("matpix-test-{}-{name}", std::process::id()));
    path
}

fn wire_u8(rows: i32, cols: i32, channels: i32, payload: &[u8]) -> Vec<u8>
{
    let header = FrameHeader::new(SampleType::U8, rows, cols, channels);
    encode(&header, payload).unwrap()
}

#[test]
fn u8_frames_export_as_bmp()
{
    let bytes = wire_u8(2, 2, 1, &[10, 20, 30, 40]);
    let path = temp_path("gray.bmp");

    let target = export_frame(&bytes, &path).unwrap();
    assert_eq!(target, ExportTarget::GrayBmp);

    let contents = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(&contents[0..2], b"BM");
    // indexed format carries the full palette before pixel data
    let data_offset = u32::from_le_bytes(contents[10..14].try_into().unwrap()) as usize;
    assert_eq!(data_offset, 14 + 40 + 1024);
}

#[test]
fn rgb_and_argb_frames_route_by_channel_count()
{
    let bytes = wire_u8(1, 2, 3, &[1, 2, 3, 4, 5, 6]);
    let (_, target) = encode_frame(&bytes).unwrap();
    assert_eq!(target, ExportTarget::RgbBmp);

    let bytes = wire_u8(1, 1, 4, &[1, 2, 3, 4]);
    let (_, target) = encode_frame(&bytes).unwrap();
    assert_eq!(target, ExportTarget::ArgbBmp);
}

#[test]
fn u16_frames_export_as_unsigned_tiff()
{
    let values: [u16; 4] = [1000, 2000, 3000, 4000];
    let payload: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();

    let header = FrameHeader::new(SampleType::U16, 1, 4, 1);
    let bytes = encode(&header, &payload).unwrap();

    let (contents, target) = encode_frame(&bytes).unwrap();
    assert_eq!(target, ExportTarget::GrayTiffU16);
    assert_eq!(&contents[0..2], b"II");
}

#[test]
fn f32_frames_export_as_float_tiff()
{
    let values: [f32; 4] = [1.0, 2.0, 3.0, 4.0];
    let payload: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();

    let header = FrameHeader::new(SampleType::F32, 2, 2, 1);
    let bytes = encode(&header, &payload).unwrap();

    let path = temp_path("float.tif");
    let target = export_frame(&bytes, &path).unwrap();
    assert_eq!(target, ExportTarget::GrayTiffF32);

    let contents = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    // strip data sits right after the 8 byte header, rows top to bottom
    let row0: Vec<f32> = contents[8..16]
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes(c.try_into().unwrap()))
        .collect();
    assert_eq!(row0, vec![1.0, 2.0]);
}

#[test]
fn two_channel_u8_frames_fail_with_unsupported_channel_count()
{
    let bytes = wire_u8(2, 2, 2, &[0; 8]);
    let result = encode_frame(&bytes);

    assert!(matches!(
        result,
        Err(ExportErrors::BmpEncodeErrors(
            BmpEncodeErrors::UnsupportedChannelCount(2)
        ))
    ));
}

#[test]
fn frames_without_an_export_mapping_are_rejected()
{
    let doubles: [f64; 2] = [0.5, 1.5];
    let payload: Vec<u8> = doubles.iter().flat_map(|v| v.to_ne_bytes()).collect();

    let header = FrameHeader::new(SampleType::F64, 1, 2, 1);
    let bytes = encode(&header, &payload).unwrap();

    let result = encode_frame(&bytes);
    assert!(matches!(
        result,
        Err(ExportErrors::UnsupportedExportTarget(SampleType::F64, 1))
    ));

    // multi-channel wide types have no mapping either
    let values: [u16; 4] = [1, 2, 3, 4];
    let payload: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();

    let header = FrameHeader::new(SampleType::U16, 1, 2, 2);
    let bytes = encode(&header, &payload).unwrap();

    let result = encode_frame(&bytes);
    assert!(matches!(
        result,
        Err(ExportErrors::UnsupportedExportTarget(SampleType::U16, 2))
    ));
}

#[test]
fn decode_failures_propagate_unchanged()
{
    use matpix_core::FrameErrors;

    let result = encode_frame(&[0_u8; 5]);
    assert!(matches!(
        result,
        Err(ExportErrors::FrameErrors(FrameErrors::TruncatedHeader(16, 5)))
    ));

    let mut bytes = wire_u8(1, 1, 1, &[7]);
    // corrupt the tag
    bytes[0] = 42;
    let result = encode_frame(&bytes);
    assert!(matches!(
        result,
        Err(ExportErrors::FrameErrors(FrameErrors::UnknownSampleType(42)))
    ));
}

#[test]
fn failed_exports_leave_no_file_behind()
{
    let path = temp_path("never-written.bmp");

    // payload one byte short of the declared shape
    let header = FrameHeader::new(SampleType::U8, 2, 2, 1);
    let mut bytes = encode(&header, &[1, 2, 3, 4]).unwrap();
    bytes.pop();

    let result = export_frame(&bytes, &path);
    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn default_file_names_follow_the_target()
{
    assert_eq!(ExportTarget::GrayBmp.default_file_name(), "frame_8u.bmp");
    assert_eq!(ExportTarget::GrayTiffU16.default_file_name(), "frame_16u.tif");
    assert_eq!(ExportTarget::GrayTiffF32.default_file_name(), "frame_32f.tif");
}
