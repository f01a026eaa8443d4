//! Configuration for the huffpack CLI.
//!
//! Handles parsing command-line arguments into a run configuration.
//!
//! # Philosophy
//!
//! The tool should work with minimal arguments: `--compress` alone
//! generates a seeded sample input and writes `./out.huff`, so a first run
//! needs zero file wrangling. All resolved defaults can be printed so runs
//! are reproducible.

use std::path::PathBuf;

/// Which direction the run goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Read raw bytes, write a persisted payload
    Compress,
    /// Read a persisted payload, write the reconstructed bytes
    Decompress,
}

/// On-disk form of the persisted payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Self-describing JSON document ({"codes": .., "encoded": ..})
    Json,
    /// Compact CRC-protected binary frame with packed bits
    Packed,
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Compress or decompress
    pub mode: Mode,

    /// Payload format to write (compress) or expect (decompress)
    pub format: Format,

    /// Input file path (None = generate a sample, compress mode only)
    pub input_file: Option<PathBuf>,

    /// Output file path
    pub output_file: PathBuf,

    /// Seed for sample generation
    pub seed: u64,

    /// Approximate size of a generated sample, in bytes
    pub sample_bytes: usize,

    /// Whether to print the run summary
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut mode: Option<Mode> = None;
        let mut format = Format::Json;
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: usize = 16 * 1024;
        let mut print_stats = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--compress" | "-c" => {
                    mode = Some(Mode::Compress);
                }
                "--decompress" | "-d" => {
                    mode = Some(Mode::Decompress);
                }
                "--packed" => {
                    format = Format::Packed;
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--gen-sample" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--gen-sample requires a byte count".to_string());
                    }
                    sample_bytes = args[i].parse().map_err(|_| "invalid sample size")?;
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        let mode = mode.ok_or("one of --compress or --decompress is required")?;

        if mode == Mode::Decompress && input_file.is_none() {
            return Err("--decompress requires --in <PATH>".to_string());
        }

        // Time-based seed unless pinned for reproducibility
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        let output_file = output_file.unwrap_or_else(|| match mode {
            Mode::Compress => PathBuf::from("./out.huff"),
            Mode::Decompress => PathBuf::from("./out.bin"),
        });

        Ok(Config {
            mode,
            format,
            input_file,
            output_file,
            seed,
            sample_bytes,
            print_stats,
        })
    }
}

fn print_help() {
    println!("huffpack: file compression with Huffman coding");
    println!();
    println!("USAGE:");
    println!("    huffpack --compress [OPTIONS]");
    println!("    huffpack --decompress --in <PATH> [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --compress, -c          Compress input to a payload");
    println!("    --decompress, -d        Reconstruct input from a payload");
    println!("    --packed                Use the compact binary frame instead of JSON");
    println!();
    println!("    --in <PATH>             Input file (compress default: generate sample)");
    println!("    --out <PATH>            Output file (default: ./out.huff or ./out.bin)");
    println!();
    println!("    --seed <N>              Seed for sample generation");
    println!("    --gen-sample <BYTES>    Generated sample size (default: 16384)");
    println!();
    println!("    --no-stats              Don't print the run summary");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpack -c --seed 42                    # Compress a generated sample");
    println!("    huffpack -c --in notes.txt --out n.huff  # Compress a specific file");
    println!("    huffpack -d --in n.huff --out notes.txt  # Reconstruct it");
    println!("    huffpack -c --in big.bin --packed        # Compact binary payload");
    println!();
}
