use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal, Uniform};

use crate::error::{FilterError, Result};

/// Sinusoidal component `amplitude * sin(omega * t + phase)`
#[derive(Clone, Debug, serde::Deserialize)]
pub struct Tone {
    pub amplitude: f64,
    /// Angular frequency in rad/s
    pub omega: f64,
    #[serde(default)]
    pub phase: f64,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NoiseConfig {
    /// Uniform noise in `[-amplitude, amplitude)`
    Uniform { amplitude: f64 },
    /// Zero-mean Gaussian noise
    Gaussian { std_dev: f64 },
}

/// Synthetic test signal: a sum of tones plus optional noise
///
/// Can be read from TOML:
///
/// ```toml
/// duration_s = 10.0
/// sample_period_s = 0.05
/// seed = 1
///
/// [[tones]]
/// amplitude = 1.0
/// omega = 1.0
///
/// [noise]
/// type = "uniform"
/// amplitude = 0.05
/// ```
#[derive(Clone, Debug, serde::Deserialize)]
pub struct SignalConfig {
    pub duration_s: f64,
    pub sample_period_s: f64,
    #[serde(default)]
    pub tones: Vec<Tone>,
    pub noise: Option<NoiseConfig>,
    pub seed: Option<u64>,
}

impl SignalConfig {
    pub fn new(duration_s: f64, sample_period_s: f64) -> Self {
        Self {
            duration_s,
            sample_period_s,
            tones: Vec::new(),
            noise: None,
            seed: None,
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| FilterError::Config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tone(self, amplitude: f64, omega: f64) -> Self {
        self.with_tone_phase(amplitude, omega, 0.0)
    }

    pub fn with_tone_phase(mut self, amplitude: f64, omega: f64, phase: f64) -> Self {
        self.tones.push(Tone {
            amplitude,
            omega,
            phase,
        });
        self
    }

    pub fn with_uniform_noise(mut self, amplitude: f64) -> Self {
        self.noise = Some(NoiseConfig::Uniform { amplitude });
        self
    }

    pub fn with_gaussian_noise(mut self, std_dev: f64) -> Self {
        self.noise = Some(NoiseConfig::Gaussian { std_dev });
        self
    }

    pub fn sample_rate(&self) -> f64 {
        1.0 / self.sample_period_s
    }

    /// Sample times `0, dt, 2 dt, ...` up to and including the duration
    pub fn times(&self) -> Vec<f64> {
        let n = (self.duration_s / self.sample_period_s + 1e-9).floor() as usize + 1;
        (0..n).map(|i| i as f64 * self.sample_period_s).collect()
    }
}

fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

/// Generate the configured signal, one sample per entry of `config.times()`
///
/// # Errors
/// Returns `FilterError::Config` for a non-positive sample period or an
/// invalid noise distribution
pub fn generate_signal(config: &SignalConfig) -> Result<Vec<f64>> {
    if !(config.sample_period_s > 0.0) {
        return Err(FilterError::Config(
            "sample period must be positive".to_string(),
        ));
    }

    let mut samples: Vec<f64> = config
        .times()
        .into_iter()
        .map(|t| {
            config
                .tones
                .iter()
                .map(|tone| tone.amplitude * (tone.omega * t + tone.phase).sin())
                .sum::<f64>()
        })
        .collect();

    let mut rng = create_rng(config.seed);
    match config.noise {
        Some(NoiseConfig::Uniform { amplitude }) if amplitude > 0.0 => {
            let dist = Uniform::new(-amplitude, amplitude)
                .map_err(|e| FilterError::Config(format!("uniform noise: {}", e)))?;
            for sample in samples.iter_mut() {
                *sample += dist.sample(&mut rng);
            }
        }
        Some(NoiseConfig::Gaussian { std_dev }) if std_dev > 0.0 => {
            let dist = Normal::new(0.0, std_dev)
                .map_err(|e| FilterError::Config(format!("gaussian noise: {}", e)))?;
            for sample in samples.iter_mut() {
                *sample += dist.sample(&mut rng);
            }
        }
        _ => {}
    }

    Ok(samples)
}

pub fn signal_power(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    signal.iter().map(|&x| x * x).sum::<f64>() / signal.len() as f64
}
