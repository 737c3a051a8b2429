use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::Result;

/// Mono signal read from a WAV file
#[derive(Debug, Clone)]
pub struct WavSignal {
    pub samples: Vec<f64>,
    pub sample_rate: u32,
}

/// Read a WAV file, averaging all channels into one.
///
/// Integer samples are scaled to [-1, 1].
pub fn read_wav_mono<P: AsRef<Path>>(path: P) -> Result<WavSignal> {
    let reader = WavReader::open(path.as_ref())?;
    let spec = reader.spec();
    let interleaved = read_samples(reader, &spec)?;

    let channels = spec.channels.max(1) as usize;
    let samples = interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f64>() / channels as f64)
        .collect();

    Ok(WavSignal {
        samples,
        sample_rate: spec.sample_rate,
    })
}

fn read_samples(mut reader: WavReader<BufReader<File>>, spec: &WavSpec) -> Result<Vec<f64>> {
    let samples = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = 2_i64.pow(spec.bits_per_sample as u32 - 1) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };
    Ok(samples)
}

/// Write a mono 32-bit float WAV file
pub fn save_wav_mono<P: AsRef<Path>>(path: P, samples: &[f64], sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path.as_ref(), spec)?;
    for &sample in samples {
        writer.write_sample(sample as f32)?;
    }
    writer.finalize()?;
    Ok(())
}
