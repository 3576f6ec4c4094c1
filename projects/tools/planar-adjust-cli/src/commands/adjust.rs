use crate::error::CliError;
use crate::util::Throughput;
use argh::FromArgs;
use bytesize::ByteSize;
use log::debug;
use planar_adjust_kernels::adjustment::{
    Adjustment, DEFAULT_BRIGHTNESS_DELTA, DEFAULT_CONTRAST_FACTOR, DEFAULT_SATURATION_FACTOR,
};
use planar_adjust_ppm::file_io::{read_ppm_file, write_ppm_file};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const DEFAULT_INPUT: &str = "input.ppm";
pub const DEFAULT_OUTPUT: &str = "output.ppm";

#[derive(FromArgs, Debug)]
/// Increase brightness by adding a constant to every sample
#[argh(subcommand, name = "brighten")]
pub struct BrightenCmd {
    /// input image path [default: input.ppm]
    #[argh(option, default = "PathBuf::from(DEFAULT_INPUT)")]
    pub input: PathBuf,

    /// output image path [default: output.ppm]
    #[argh(option, default = "PathBuf::from(DEFAULT_OUTPUT)")]
    pub output: PathBuf,

    /// value added to every sample, may be negative [default: 50]
    #[argh(option, default = "DEFAULT_BRIGHTNESS_DELTA")]
    pub delta: i32,
}

#[derive(FromArgs, Debug)]
/// Scale each pixel's distance from its grey average
#[argh(subcommand, name = "saturate")]
pub struct SaturateCmd {
    /// input image path [default: input.ppm]
    #[argh(option, default = "PathBuf::from(DEFAULT_INPUT)")]
    pub input: PathBuf,

    /// output image path [default: output.ppm]
    #[argh(option, default = "PathBuf::from(DEFAULT_OUTPUT)")]
    pub output: PathBuf,

    /// saturation factor, 1 keeps the image unchanged [default: 1.5]
    #[argh(option, default = "DEFAULT_SATURATION_FACTOR")]
    pub factor: f32,
}

#[derive(FromArgs, Debug)]
/// Replace every sample s with 255 - s
#[argh(subcommand, name = "invert")]
pub struct InvertCmd {
    /// input image path [default: input.ppm]
    #[argh(option, default = "PathBuf::from(DEFAULT_INPUT)")]
    pub input: PathBuf,

    /// output image path [default: output.ppm]
    #[argh(option, default = "PathBuf::from(DEFAULT_OUTPUT)")]
    pub output: PathBuf,
}

#[derive(FromArgs, Debug)]
/// Scale every sample's distance from mid-grey (128)
#[argh(subcommand, name = "contrast")]
pub struct ContrastCmd {
    /// input image path [default: input.ppm]
    #[argh(option, default = "PathBuf::from(DEFAULT_INPUT)")]
    pub input: PathBuf,

    /// output image path [default: output.ppm]
    #[argh(option, default = "PathBuf::from(DEFAULT_OUTPUT)")]
    pub output: PathBuf,

    /// contrast factor, 1 keeps the image unchanged [default: 2.0]
    #[argh(option, default = "DEFAULT_CONTRAST_FACTOR")]
    pub factor: f32,
}

/// Everything needed for a single run: one input, one output, one adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub adjustment: Adjustment,
}

impl From<BrightenCmd> for RunConfig {
    fn from(cmd: BrightenCmd) -> Self {
        Self {
            input: cmd.input,
            output: cmd.output,
            adjustment: Adjustment::Brighten { delta: cmd.delta },
        }
    }
}

impl From<SaturateCmd> for RunConfig {
    fn from(cmd: SaturateCmd) -> Self {
        Self {
            input: cmd.input,
            output: cmd.output,
            adjustment: Adjustment::Saturate { factor: cmd.factor },
        }
    }
}

impl From<InvertCmd> for RunConfig {
    fn from(cmd: InvertCmd) -> Self {
        Self {
            input: cmd.input,
            output: cmd.output,
            adjustment: Adjustment::Invert,
        }
    }
}

impl From<ContrastCmd> for RunConfig {
    fn from(cmd: ContrastCmd) -> Self {
        Self {
            input: cmd.input,
            output: cmd.output,
            adjustment: Adjustment::Contrast { factor: cmd.factor },
        }
    }
}

/// What a completed run did, for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub width: u32,
    pub height: u32,
    /// Pixel data bytes (all three planes).
    pub data_bytes: u64,
    pub elapsed: Duration,
}

/// Reads the input, applies the adjustment and writes the output.
///
/// The adjustment is validated before the input is opened, and nothing is written unless
/// the whole image was decoded and adjusted.
pub fn run_adjustment(config: &RunConfig) -> Result<RunSummary, CliError> {
    config.adjustment.validate()?;

    let start = Instant::now();
    let input = read_ppm_file(&config.input).map_err(|source| CliError::Read {
        path: config.input.clone(),
        source,
    })?;
    let output = config.adjustment.apply(&input);
    write_ppm_file(&output, &config.output).map_err(|source| CliError::Write {
        path: config.output.clone(),
        source,
    })?;
    let elapsed = start.elapsed();

    debug!("{} finished in {elapsed:?}", config.adjustment);
    Ok(RunSummary {
        width: output.width(),
        height: output.height(),
        data_bytes: output.sample_count() as u64,
        elapsed,
    })
}

pub fn handle_adjust_command(config: RunConfig) -> Result<(), CliError> {
    println!(
        "Applying {} to {}...",
        config.adjustment,
        config.input.display()
    );

    let summary = run_adjustment(&config)?;
    print_summary(&config, &summary);
    Ok(())
}

fn print_summary(config: &RunConfig, summary: &RunSummary) {
    let throughput = Throughput::from_elapsed(summary.data_bytes, summary.elapsed);

    println!("\n=== Adjustment Complete ===");
    println!("Image: {}x{}", summary.width, summary.height);
    println!("Output: {}", config.output.display());
    println!("Time taken: {:.2?}", summary.elapsed);
    println!("Data processed: {}", ByteSize(summary.data_bytes));
    println!("Throughput: {throughput}");
}
