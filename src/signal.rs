//! Synthetic signal generation.
//!
//! Three generation policies are supported:
//!
//! - **Random**: independent uniform samples in `[offset, offset + max_amplitude)`.
//! - **Sinusoidal**: a sum of `sin_components` sinusoids with random amplitude,
//!   frequency and phase, shifted by `offset`.
//! - **Squared**: a random binary square wave taking the values `offset` and
//!   `offset + max_amplitude`.
//!
//! [`generate_data`] draws from the thread-local RNG and is not reproducible;
//! [`generate_data_with`] accepts any [`Rng`] for seeded generation.

use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};

/// A generated numeric sequence.
pub type Signal = Vec<f32>;

/// Signal generation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignalKind {
    /// Uniform random samples.
    #[default]
    Random,
    /// Sum of random sinusoids.
    Sinusoidal,
    /// Random binary square wave.
    Squared,
}

impl SignalKind {
    /// Lowercase name as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sinusoidal => "sinusoidal",
            Self::Squared => "squared",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "sinusoidal" => Ok(Self::Sinusoidal),
            "squared" => Ok(Self::Squared),
            _ => Err(Error::UnknownSignalKind(s.to_string())),
        }
    }
}

/// Parameters for [`generate_data`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Samples per signal.
    pub length: usize,
    /// Number of signals to generate.
    pub num_signals: usize,
    /// Generation policy.
    pub kind: SignalKind,
    /// Number of sinusoidal components (sinusoidal mode only).
    pub sin_components: usize,
    /// Amplitude scale.
    pub max_amplitude: f32,
    /// Constant added to every sample.
    pub offset: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 50,
            num_signals: 1,
            kind: SignalKind::Random,
            sin_components: 10,
            max_amplitude: 1.0,
            offset: 0.0,
        }
    }
}

impl GeneratorConfig {
    /// Create a config with default parameters for the given kind.
    #[must_use]
    pub fn new(kind: SignalKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Set the number of samples per signal.
    #[must_use]
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set the number of signals.
    #[must_use]
    pub fn num_signals(mut self, num_signals: usize) -> Self {
        self.num_signals = num_signals;
        self
    }

    /// Set the number of sinusoidal components.
    #[must_use]
    pub fn sin_components(mut self, sin_components: usize) -> Self {
        self.sin_components = sin_components;
        self
    }

    /// Set the amplitude scale.
    #[must_use]
    pub fn max_amplitude(mut self, max_amplitude: f32) -> Self {
        self.max_amplitude = max_amplitude;
        self
    }

    /// Set the offset.
    #[must_use]
    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }
}

/// Generate signals using the thread-local RNG.
#[must_use]
pub fn generate_data(config: &GeneratorConfig) -> Vec<Signal> {
    generate_data_with(config, &mut rand::thread_rng())
}

/// Generate signals drawing randomness from `rng`.
pub fn generate_data_with<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Vec<Signal> {
    debug!(
        kind = %config.kind,
        length = config.length,
        num_signals = config.num_signals,
        max_amplitude = config.max_amplitude,
        offset = config.offset,
        "generating synthetic signals"
    );

    (0..config.num_signals)
        .map(|_| match config.kind {
            SignalKind::Random => random_signal(config, rng),
            SignalKind::Sinusoidal => sinusoidal_signal(config, rng),
            SignalKind::Squared => squared_signal(config, rng),
        })
        .collect()
}

fn random_signal<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Signal {
    (0..config.length)
        .map(|_| rng.gen::<f32>() * config.max_amplitude + config.offset)
        .collect()
}

fn sinusoidal_signal<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Signal {
    let t = linspace(0.0, TAU, config.length);
    let mut signal = vec![0.0_f32; config.length];

    for _ in 0..config.sin_components {
        let amplitude = rng.gen::<f32>() * (config.max_amplitude / config.sin_components as f32);
        let frequency = rng.gen::<f32>() * 10.0;
        let phase = rng.gen::<f32>() * TAU;

        for (sample, &ti) in signal.iter_mut().zip(&t) {
            *sample += amplitude * (ti * frequency + phase).sin();
        }
    }

    signal.iter().map(|s| s + config.offset).collect()
}

fn squared_signal<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Signal {
    (0..config.length)
        .map(|_| {
            let bit = f32::from(u8::from(rng.gen_bool(0.5)));
            bit * config.max_amplitude + config.offset
        })
        .collect()
}

/// `n` evenly spaced values over `[start, end]`, endpoints included.
///
/// A single point yields `[start]`; zero points yield an empty vector.
#[must_use]
pub fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f32;
            (0..n).map(|i| start + step * i as f32).collect()
        }
    }
}

/// Random per-point bubble sizes in `[1, 100)`, one list per signal.
pub fn random_bubble_sizes<R: Rng + ?Sized>(data: &[Signal], rng: &mut R) -> Vec<Vec<f32>> {
    data.iter()
        .map(|signal| {
            (0..signal.len())
                .map(|_| rng.gen_range(1u32..100) as f32)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_squared_example() {
        let config = GeneratorConfig::new(SignalKind::Squared)
            .length(10)
            .num_signals(2);
        let data = generate_data(&config);

        assert_eq!(data.len(), 2);
        for signal in &data {
            assert_eq!(signal.len(), 10);
            assert!(signal.iter().all(|&v| v == 0.0 || v == 1.0));
        }
    }

    #[test]
    fn test_squared_scaled_and_offset() {
        let config = GeneratorConfig::new(SignalKind::Squared)
            .length(200)
            .max_amplitude(5.0)
            .offset(2.0);
        let data = generate_data_with(&config, &mut rng());

        assert!(data[0].iter().all(|&v| v == 2.0 || v == 7.0));
        // 200 fair coin flips produce both levels.
        assert!(data[0].contains(&2.0));
        assert!(data[0].contains(&7.0));
    }

    #[test]
    fn test_random_bounds() {
        let config = GeneratorConfig::new(SignalKind::Random)
            .length(500)
            .num_signals(3)
            .max_amplitude(10.0)
            .offset(30.0);
        let data = generate_data_with(&config, &mut rng());

        assert_eq!(data.len(), 3);
        for signal in &data {
            assert!(signal.iter().all(|&v| (30.0..=40.0).contains(&v)));
        }
    }

    #[test]
    fn test_sinusoidal_bounds() {
        let config = GeneratorConfig::new(SignalKind::Sinusoidal)
            .length(100)
            .num_signals(3)
            .max_amplitude(10.0)
            .offset(30.0);
        let data = generate_data_with(&config, &mut rng());

        for signal in &data {
            assert_eq!(signal.len(), 100);
            assert!(signal.iter().all(|&v| (20.0..=40.0).contains(&v)));
        }
    }

    #[test]
    fn test_sinusoidal_without_components_is_flat() {
        let config = GeneratorConfig::new(SignalKind::Sinusoidal)
            .length(8)
            .sin_components(0)
            .offset(3.0);
        let data = generate_data_with(&config, &mut rng());
        assert!(data[0].iter().all(|&v| (v - 3.0).abs() < f32::EPSILON));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = GeneratorConfig::new(SignalKind::Sinusoidal).num_signals(2);
        let a = generate_data_with(&config, &mut rng());
        let b = generate_data_with(&config, &mut rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_requests() {
        let none = generate_data(&GeneratorConfig::default().num_signals(0));
        assert!(none.is_empty());

        let short = generate_data(&GeneratorConfig::default().length(0).num_signals(2));
        assert_eq!(short.len(), 2);
        assert!(short.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_defaults_match_original_signature() {
        let config = GeneratorConfig::default();
        assert_eq!(config.length, 50);
        assert_eq!(config.num_signals, 1);
        assert_eq!(config.kind, SignalKind::Random);
        assert_eq!(config.sin_components, 10);
        assert_relative_eq!(config.max_amplitude, 1.0);
        assert_relative_eq!(config.offset, 0.0);
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("random".parse::<SignalKind>().unwrap(), SignalKind::Random);
        assert_eq!(
            "Sinusoidal".parse::<SignalKind>().unwrap(),
            SignalKind::Sinusoidal
        );
        assert_eq!(" squared ".parse::<SignalKind>().unwrap(), SignalKind::Squared);
        assert!("square".parse::<SignalKind>().is_err());
    }

    #[test]
    fn test_linspace() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v.len(), 5);
        assert_relative_eq!(v[0], 0.0);
        assert_relative_eq!(v[2], 0.5);
        assert_relative_eq!(v[4], 1.0);
        assert_eq!(linspace(2.0, 9.0, 1), vec![2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_random_bubble_sizes_shape() {
        let data = vec![vec![0.0; 4], vec![0.0; 7]];
        let sizes = random_bubble_sizes(&data, &mut rng());
        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes[0].len(), 4);
        assert_eq!(sizes[1].len(), 7);
        assert!(sizes
            .iter()
            .flatten()
            .all(|&s| (1.0..100.0).contains(&s) && s.fract() == 0.0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn any_kind() -> impl Strategy<Value = SignalKind> {
        prop_oneof![
            Just(SignalKind::Random),
            Just(SignalKind::Sinusoidal),
            Just(SignalKind::Squared),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Every mode returns `num_signals` signals of `length` samples.
        #[test]
        fn prop_shape_matches_request(
            kind in any_kind(),
            length in 0usize..200,
            num_signals in 0usize..8,
            seed in any::<u64>(),
        ) {
            let config = GeneratorConfig::new(kind).length(length).num_signals(num_signals);
            let data = generate_data_with(&config, &mut StdRng::seed_from_u64(seed));

            prop_assert_eq!(data.len(), num_signals);
            for signal in &data {
                prop_assert_eq!(signal.len(), length);
            }
        }

        /// Random samples stay in `[offset, offset + max_amplitude]`.
        #[test]
        fn prop_random_within_range(
            max_amplitude in 0.0f32..100.0,
            offset in -50.0f32..50.0,
            seed in any::<u64>(),
        ) {
            let config = GeneratorConfig::new(SignalKind::Random)
                .length(64)
                .max_amplitude(max_amplitude)
                .offset(offset);
            let data = generate_data_with(&config, &mut StdRng::seed_from_u64(seed));

            let tolerance = 1e-3;
            for &v in &data[0] {
                prop_assert!(v >= offset - tolerance);
                prop_assert!(v <= offset + max_amplitude + tolerance);
            }
        }

        /// Square samples take only the two levels.
        #[test]
        fn prop_squared_two_levels(
            max_amplitude in 0.1f32..100.0,
            offset in -50.0f32..50.0,
            seed in any::<u64>(),
        ) {
            let config = GeneratorConfig::new(SignalKind::Squared)
                .length(64)
                .max_amplitude(max_amplitude)
                .offset(offset);
            let data = generate_data_with(&config, &mut StdRng::seed_from_u64(seed));

            let high = max_amplitude + offset;
            for &v in &data[0] {
                prop_assert!(v == offset || v == high);
            }
        }
    }
}
