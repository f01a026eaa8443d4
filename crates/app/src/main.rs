//! huffpack CLI: compress a file into a persisted Huffman payload, or
//! reconstruct the original bytes from one.
//!
//! The binary is a thin boundary around `huffpack-core`: it reads bytes,
//! hands them to the codec, writes the result, and prints a run summary.

mod config;
mod input_gen;

use std::fs;
use std::process::ExitCode;

use huffpack_core::framing::{read_frame, write_frame};
use huffpack_core::{compress, Payload, Result};

use config::{Config, Format, Mode};
use input_gen::generate_sample_data;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    match config.mode {
        Mode::Compress => run_compress(config),
        Mode::Decompress => run_decompress(config),
    }
}

fn run_compress(config: &Config) -> Result<()> {
    let input = match &config.input_file {
        Some(path) => fs::read(path)?,
        None => {
            println!(
                "No input file given; generating {} sample bytes (seed {})",
                config.sample_bytes, config.seed
            );
            generate_sample_data(config.seed, config.sample_bytes)
        }
    };

    let payload = compress(&input)?;

    let output = match config.format {
        Format::Json => payload.to_json()?.into_bytes(),
        Format::Packed => write_frame(&payload)?,
    };
    fs::write(&config.output_file, &output)?;

    if config.print_stats {
        print_summary(&payload, input.len(), output.len());
        println!("Wrote {}", config.output_file.display());
    }

    Ok(())
}

fn run_decompress(config: &Config) -> Result<()> {
    let path = config.input_file.as_ref().ok_or_else(|| {
        huffpack_core::Error::Config("decompress requires an input path".to_string())
    })?;
    let raw = fs::read(path)?;

    let payload = match config.format {
        Format::Json => Payload::from_json(std::str::from_utf8(&raw).map_err(|e| {
            huffpack_core::Error::Config(format!("payload is not valid UTF-8: {e}"))
        })?)?,
        Format::Packed => read_frame(&raw)?,
    };

    let output = payload.decompress()?;
    fs::write(&config.output_file, &output)?;

    if config.print_stats {
        println!("=== Decompression ===");
        println!("Payload bytes:  {}", raw.len());
        println!("Restored bytes: {}", output.len());
        println!("Wrote {}", config.output_file.display());
    }

    Ok(())
}

fn print_summary(payload: &Payload, input_len: usize, output_len: usize) {
    println!("=== Compression ===");
    println!("Input bytes:      {input_len}");
    println!("Distinct symbols: {}", payload.codes.len());
    println!("Encoded bits:     {}", payload.encoded.len());
    println!("Payload bytes:    {output_len}");
    if input_len > 0 {
        println!(
            "Ratio:            {:.2}% of original",
            output_len as f64 / input_len as f64 * 100.0
        );
    }
}
