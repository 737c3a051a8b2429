use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use digital_filters::config::{FilterConfig, FilterSpec};
use digital_filters::wav::{read_wav_mono, save_wav_mono};

#[derive(Parser, Debug)]
#[command(name = "digital-filters")]
#[command(about = "Filter a WAV file with a chain of recursive digital filters", long_about = None)]
struct Args {
    /// Input WAV file (channels are mixed down to mono)
    input: PathBuf,

    /// Output WAV file (mono, 32-bit float)
    output: PathBuf,

    /// Filter stage, repeatable (e.g. "butterworth:4:200hz", "average:5", "tau:10ms")
    #[arg(short, long = "filter")]
    filters: Vec<FilterSpec>,

    /// TOML filter chain configuration; --filter stages are appended to it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Filter forward and backward for zero phase distortion
    #[arg(short, long)]
    zero_phase: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => FilterConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FilterConfig::default(),
    };
    config.filters.extend(args.filters.iter().cloned());
    config.zero_phase |= args.zero_phase;

    let signal = read_wav_mono(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let sample_rate = signal.sample_rate as f64;

    let filter = config
        .build(sample_rate)
        .context("Failed to build filter chain")?;

    let stages: Vec<String> = config.filters.iter().map(|s| s.to_string()).collect();
    log::info!(
        "{} samples at {} Hz through [{}] (order {}, {})",
        signal.samples.len(),
        signal.sample_rate,
        stages.join(", "),
        filter.order(),
        if config.zero_phase { "zero phase" } else { "causal" }
    );

    let filtered = match signal.samples.first() {
        None => {
            log::warn!("{} contains no samples", args.input.display());
            Vec::new()
        }
        Some(_) if config.zero_phase => filter.filter2(&signal.samples),
        Some(&first) => {
            // Start from steady state on the first sample
            let x0 = vec![first; filter.numerator().len() - 1];
            let y0 = vec![first; filter.denominator().len() - 1];
            filter.filter_sequence(&x0, &y0, &signal.samples)?
        }
    };

    save_wav_mono(&args.output, &filtered, signal.sample_rate)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Wrote {} samples to {}",
        filtered.len(),
        args.output.display()
    );

    Ok(())
}
