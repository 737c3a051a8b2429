use std::f64::consts::FRAC_PI_2;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use digital_filters::design::{average_filter, butterworth_filter, exponential_time_constant_filter};
use digital_filters::output::{OutputFormat, SignalRow, create_formatter};
use digital_filters::simulation::{SignalConfig, generate_signal};
use digital_filters::{Filter, SampleFilter};

#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(about = "Filter a noisy synthetic signal with the built-in filter designs")]
struct Args {
    /// Output format: text, csv, json
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Sampling period in seconds
    #[arg(long, default_value_t = 0.05)]
    dt: f64,

    /// Signal duration in seconds
    #[arg(short, long, default_value_t = 10.0)]
    duration: f64,

    /// Uniform noise amplitude
    #[arg(long, default_value_t = 0.05)]
    noise: f64,

    /// Seed for reproducible noise
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML signal description, replacing the built-in test signal
    #[arg(long)]
    signal: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.signal {
        Some(path) => SignalConfig::load(path)
            .with_context(|| format!("Failed to load signal {}", path.display()))?,
        // sin(t) + 0.1 cos(3t) + 0.1 sin(20t) + noise
        None => SignalConfig::new(args.duration, args.dt)
            .with_tone(1.0, 1.0)
            .with_tone_phase(0.1, 3.0, FRAC_PI_2)
            .with_tone(0.1, 20.0)
            .with_uniform_noise(args.noise),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let dt = config.sample_period_s;
    let fs = config.sample_rate();

    let times = config.times();
    let x = generate_signal(&config).context("Failed to generate signal")?;

    let mut streaming: Vec<(String, Filter<f64, f64>)> = vec![
        ("butterworth".to_string(), butterworth_filter(4, fs / 4.0, fs)?),
        ("average".to_string(), average_filter(5)?),
        (
            "exponential".to_string(),
            exponential_time_constant_filter(dt, 3.0 * dt)?,
        ),
    ];

    let mut columns: Vec<String> = streaming.iter().map(|(name, _)| name.clone()).collect();
    let mut outputs: Vec<Vec<f64>> = Vec::with_capacity(streaming.len() + 2);
    for (_, filter) in streaming.iter_mut() {
        let mut y = x.clone();
        filter.process_buffer(&mut y);
        outputs.push(y);
    }

    // Causal and zero-phase passes of a gentler Butterworth, side by side
    let smoother: Filter<f64, f64> = butterworth_filter(3, fs / 25.0, fs)?;
    if let Some(&first) = x.first() {
        let x0 = vec![first; smoother.numerator().len() - 1];
        let y0 = vec![first; smoother.denominator().len() - 1];
        columns.push("causal".to_string());
        outputs.push(smoother.filter_sequence(&x0, &y0, &x)?);
    }
    columns.push("filter2".to_string());
    outputs.push(smoother.filter2(&x));

    let formatter = create_formatter(args.format);
    if let Some(header) = formatter.header(&columns) {
        println!("{}", header);
    }

    let mut row_values = vec![0.0; outputs.len()];
    for (i, (&t, &raw)) in times.iter().zip(&x).enumerate() {
        for (value, output) in row_values.iter_mut().zip(&outputs) {
            *value = output[i];
        }
        let row = SignalRow {
            time: t,
            raw,
            filtered: &row_values,
        };
        println!("{}", formatter.format(&columns, &row));
    }

    Ok(())
}
