// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use std::path::Path;

use config::{Config, File, FileFormat};
use serde::Deserialize;
use tracing::debug;

use crate::playback::{HandleState, PlaybackError};
use crate::resampler::InterpolationMode;
use crate::sample::{
    SampleData, SampleError, StereoFrame, DEFAULT_BASE_FREQUENCY, DEFAULT_SAMPLE_RATE,
};

mod error;

pub use error::ConfigError;

/// Engine-wide playback settings.
///
/// ```yaml
/// processing_sample_rate: 48000
/// base_frequency: 440.0
/// interpolation: sinc_medium
/// varying_pitch: true
/// ```
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PlaybackConfig {
    /// Rate the mixer pulls frames at.
    processing_sample_rate: Option<u32>,

    /// Base frequency given to stores that don't set their own.
    base_frequency: Option<f32>,

    /// Resampling quality for new voices.
    interpolation: Option<InterpolationMode>,

    /// Whether new voices always go through the resampler.
    varying_pitch: Option<bool>,
}

impl PlaybackConfig {
    /// Creates a new playback config.
    pub fn new(
        processing_sample_rate: Option<u32>,
        base_frequency: Option<f32>,
        interpolation: Option<InterpolationMode>,
        varying_pitch: Option<bool>,
    ) -> Self {
        Self {
            processing_sample_rate,
            base_frequency,
            interpolation,
            varying_pitch,
        }
    }

    /// Loads and validates a config file. The format follows the extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize::<PlaybackConfig>()?;
        debug!(path = %path.display(), ?config, "Loaded playback config");
        config.validate()
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?
            .try_deserialize::<PlaybackConfig>()?
            .validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.processing_sample_rate == Some(0) {
            return Err(ConfigError::Invalid(
                "processing_sample_rate must be positive".to_string(),
            ));
        }
        if let Some(frequency) = self.base_frequency {
            if !frequency.is_finite() || frequency <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "base_frequency must be positive, got {}",
                    frequency
                )));
            }
        }
        Ok(self)
    }

    /// Gets the processing sample rate, defaulting to 44.1kHz.
    pub fn processing_sample_rate(&self) -> u32 {
        self.processing_sample_rate.unwrap_or(DEFAULT_SAMPLE_RATE)
    }

    /// Gets the base frequency, defaulting to A4.
    pub fn base_frequency(&self) -> f32 {
        self.base_frequency.unwrap_or(DEFAULT_BASE_FREQUENCY)
    }

    pub fn interpolation(&self) -> InterpolationMode {
        self.interpolation.unwrap_or_default()
    }

    pub fn varying_pitch(&self) -> bool {
        self.varying_pitch.unwrap_or(false)
    }

    /// Builds a store tuned to the configured base frequency.
    pub fn new_sample(
        &self,
        frames: Vec<StereoFrame>,
        sample_rate: u32,
    ) -> Result<SampleData, SampleError> {
        SampleData::new(frames, sample_rate)?.with_frequency(self.base_frequency())
    }

    /// Creates a voice handle with the configured quality.
    pub fn new_handle(&self) -> Result<HandleState, PlaybackError> {
        HandleState::new(self.varying_pitch(), self.interpolation())
    }
}
