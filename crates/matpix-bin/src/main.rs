/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};
use std::process::exit;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{error, info, Level};
use matpix::{export_frame, ExportTarget};
use matpix_core::decode_header;

fn create_cmd_args() -> Command
{
    Command::new("matpix")
        .about("Export serialized pixel frames to TIFF or BMP files")
        .arg(
            Arg::new("in")
                .required(true)
                .help("Serialized frame file to export")
        )
        .arg(
            Arg::new("out")
                .short('o')
                .long("out")
                .help("Destination file, defaults to the target's default name beside the input")
        )
        .arg(
            Arg::new("probe")
                .long("probe")
                .action(ArgAction::SetTrue)
                .help("Print the decoded frame header and exit without exporting")
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Display debug information and higher")
        )
        .arg(
            Arg::new("trace")
                .long("trace")
                .action(ArgAction::SetTrue)
                .help("Display very verbose information")
        )
        .arg(
            Arg::new("info")
                .long("info")
                .action(ArgAction::SetTrue)
                .help("Display information about the decoding options")
        )
}

fn setup_logger(options: &ArgMatches)
{
    let log_level;

    if *options.get_one::<bool>("debug").unwrap()
    {
        log_level = Level::Debug;
    }
    else if *options.get_one::<bool>("trace").unwrap()
    {
        log_level = Level::Trace;
    }
    else if *options.get_one::<bool>("info").unwrap()
    {
        log_level = Level::Info;
    }
    else
    {
        log_level = Level::Warn;
    }

    simple_logger::init_with_level(log_level).unwrap();
}

/// Pick the destination: an explicit `-o` wins, otherwise the target's
/// default file name next to the input
fn destination(options: &ArgMatches, input: &Path, target: ExportTarget) -> PathBuf
{
    match options.get_one::<String>("out")
    {
        Some(out) => PathBuf::from(out),
        None => input.with_file_name(target.default_file_name())
    }
}

fn run(options: &ArgMatches) -> Result<(), String>
{
    let input = PathBuf::from(options.get_one::<String>("in").unwrap());

    let bytes = std::fs::read(&input).map_err(|e| format!("cannot read {input:?}: {e}"))?;

    let (header, payload) = decode_header(&bytes).map_err(|e| format!("{e:?}"))?;

    if *options.get_one::<bool>("probe").unwrap()
    {
        println!(
            "{:?}: {:?} {}x{}, {} channel(s), {} payload byte(s)",
            input,
            header.sample_type,
            header.rows,
            header.cols,
            header.channels,
            payload.len()
        );
        return Ok(());
    }

    let target = ExportTarget::for_frame(header.sample_type, header.channels.max(0) as usize);

    let path = match target
    {
        Some(target) => destination(options, &input, target),
        // no mapping, let the export pipeline produce the precise error
        None => destination(options, &input, ExportTarget::GrayBmp)
    };

    let target = export_frame(&bytes, &path).map_err(|e| format!("{e:?}"))?;

    info!("Exported {input:?} as {target:?} to {path:?}");

    Ok(())
}

fn main()
{
    let cmd = create_cmd_args();
    let options = cmd.get_matches();

    setup_logger(&options);

    if let Err(reason) = run(&options)
    {
        println!();
        error!(" Could not export frame, reason: {reason}");

        println!();
        exit(-1);
    }
}
