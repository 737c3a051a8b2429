mod signal;

pub use signal::{NoiseConfig, SignalConfig, Tone, generate_signal, signal_power};
