/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use matpix_core::{
    decode_header, encode, materialize, FrameErrors, FrameHeader, SampleBuffer, SampleType
};

fn wire_buffer(tag: i32, rows: i32, cols: i32, channels: i32, payload: &[u8]) -> Vec<u8>
{
    let mut out = Vec::with_capacity(16 + payload.len());
    out.extend_from_slice(&tag.to_le_bytes());
    out.extend_from_slice(&rows.to_le_bytes());
    out.extend_from_slice(&cols.to_le_bytes());
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(payload);
    out
}

#[test]
fn short_buffers_fail_with_truncated_header()
{
    for len in 0..16
    {
        let bytes = vec![0_u8; len];
        let result = decode_header(&bytes);

        assert!(
            matches!(result, Err(FrameErrors::TruncatedHeader(16, found)) if found == len),
            "{len} byte buffer did not report truncation"
        );
    }
}

#[test]
fn unknown_tags_are_rejected()
{
    for tag in [-1, 7, 100, i32::MAX, i32::MIN]
    {
        let bytes = wire_buffer(tag, 1, 1, 1, &[0]);
        let result = decode_header(&bytes);

        assert!(matches!(
            result,
            Err(FrameErrors::UnknownSampleType(found)) if found == tag
        ));
    }
}

#[test]
fn decode_returns_payload_uninterpreted()
{
    // payload length deliberately inconsistent with the declared shape,
    // the header parser must not care
    let bytes = wire_buffer(0, 100, 100, 1, &[1, 2, 3]);

    let (header, payload) = decode_header(&bytes).unwrap();

    assert_eq!(header.sample_type, SampleType::U8);
    assert_eq!((header.rows, header.cols, header.channels), (100, 100, 1));
    assert_eq!(payload, &[1, 2, 3]);
}

#[test]
fn payload_size_mismatch_is_an_error()
{
    let header = FrameHeader::new(SampleType::U16, 2, 2, 1);

    // one byte short
    let result = materialize(&header, &[0_u8; 7]);
    assert!(matches!(
        result,
        Err(FrameErrors::PayloadSizeMismatch(8, 7))
    ));

    // excess bytes are an error too, never silently ignored
    let result = materialize(&header, &[0_u8; 9]);
    assert!(matches!(
        result,
        Err(FrameErrors::PayloadSizeMismatch(8, 9))
    ));
}

#[test]
fn invalid_shapes_are_rejected()
{
    for (rows, cols, channels) in [(-1, 4, 1), (4, -1, 1), (4, 4, 0), (4, 4, -2)]
    {
        let header = FrameHeader::new(SampleType::U8, rows, cols, channels);
        let result = materialize(&header, &[]);

        assert!(matches!(result, Err(FrameErrors::InvalidDimensions(..))));
    }
}

#[test]
fn empty_frames_materialize_to_empty_buffers()
{
    let header = FrameHeader::new(SampleType::F32, 0, 0, 1);
    let samples = materialize(&header, &[]).unwrap();

    assert!(samples.is_empty());
    assert_eq!(samples.sample_type(), SampleType::F32);
}

#[test]
fn u8_payload_passes_through()
{
    let header = FrameHeader::new(SampleType::U8, 2, 2, 1);
    let samples = materialize(&header, &[10, 20, 30, 40]).unwrap();

    assert_eq!(samples.u8().unwrap(), vec![10, 20, 30, 40]);
}

#[test]
fn i8_payload_is_reinterpreted_not_copied_per_value()
{
    let header = FrameHeader::new(SampleType::I8, 1, 4, 1);
    let samples = materialize(&header, &[0x00, 0x7f, 0x80, 0xff]).unwrap();

    match samples
    {
        SampleBuffer::I8(data) => assert_eq!(data, vec![0, 127, -128, -1]),
        _ => panic!("wrong variant")
    }
}

#[test]
fn u16_samples_keep_native_byte_order()
{
    let values: [u16; 4] = [1000, 2000, 3000, 4000];
    let payload: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();

    let header = FrameHeader::new(SampleType::U16, 1, 4, 1);
    let samples = materialize(&header, &payload).unwrap();

    assert_eq!(samples.u16().unwrap(), values.to_vec());
}

#[test]
fn f32_samples_round_trip_through_the_wire()
{
    let values: [f32; 4] = [1.0, 2.0, 3.0, 4.0];
    let payload: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();

    let header = FrameHeader::new(SampleType::F32, 2, 2, 1);
    let bytes = encode(&header, &payload).unwrap();

    let (decoded, raw) = decode_header(&bytes).unwrap();
    assert_eq!(decoded, header);

    let samples = materialize(&decoded, raw).unwrap();
    assert_eq!(samples.f32().unwrap(), values.to_vec());
}

#[test]
fn f64_and_i32_round_trip()
{
    let doubles: [f64; 2] = [0.5, -2.25];
    let payload: Vec<u8> = doubles.iter().flat_map(|v| v.to_ne_bytes()).collect();

    let header = FrameHeader::new(SampleType::F64, 1, 2, 1);
    let bytes = encode(&header, &payload).unwrap();
    let (decoded, raw) = decode_header(&bytes).unwrap();

    match materialize(&decoded, raw).unwrap()
    {
        SampleBuffer::F64(data) => assert_eq!(data, doubles.to_vec()),
        _ => panic!("wrong variant")
    }

    let ints: [i32; 3] = [-1, 0, 65536];
    let payload: Vec<u8> = ints.iter().flat_map(|v| v.to_ne_bytes()).collect();

    let header = FrameHeader::new(SampleType::I32, 1, 1, 3);
    let bytes = encode(&header, &payload).unwrap();
    let (decoded, raw) = decode_header(&bytes).unwrap();

    match materialize(&decoded, raw).unwrap()
    {
        SampleBuffer::I32(data) => assert_eq!(data, ints.to_vec()),
        _ => panic!("wrong variant")
    }
}

#[test]
fn encode_validates_shape_before_writing()
{
    let header = FrameHeader::new(SampleType::U8, 2, 2, 1);
    let result = encode(&header, &[1, 2, 3]);

    assert!(matches!(
        result,
        Err(FrameErrors::PayloadSizeMismatch(4, 3))
    ));
}

#[test]
fn multi_channel_samples_stay_channel_interleaved()
{
    // 1x2 pixels, 3 channels, channel-fastest ordering
    let header = FrameHeader::new(SampleType::U8, 1, 2, 3);
    let samples = materialize(&header, &[1, 2, 3, 4, 5, 6]).unwrap();

    assert_eq!(samples.u8().unwrap(), vec![1, 2, 3, 4, 5, 6]);
}
