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

//! Owner of a replaceable sample store.
//!
//! Voices never see a store change under them: every replacement publishes a
//! new immutable [`SampleData`] and swaps the shared reference, while voices
//! that already took a snapshot keep the old one alive until they drop it.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use super::data::SampleData;
use super::error::SampleError;
use super::settings::SampleSettings;

/// A sample store that can be reloaded while voices are playing it.
pub struct SampleBuffer {
    /// The currently published store.
    data: RwLock<Arc<SampleData>>,
    /// Incremented on every publish.
    generation: AtomicU64,
}

impl SampleBuffer {
    /// Creates a buffer publishing `data`.
    pub fn new(data: SampleData) -> Self {
        Self {
            data: RwLock::new(Arc::new(data)),
            generation: AtomicU64::new(0),
        }
    }

    /// Creates a buffer with no audio.
    pub fn empty() -> Self {
        Self::new(SampleData::empty())
    }

    /// Returns the current store. Cheap enough to call once per audio block.
    pub fn snapshot(&self) -> Arc<SampleData> {
        self.data.read().clone()
    }

    /// Publishes a new store.
    pub fn replace(&self, data: SampleData) {
        let frames = data.frame_count();
        let sample_rate = data.sample_rate();
        *self.data.write() = Arc::new(data);
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        debug!(frames, sample_rate, generation, "Sample data replaced");
    }

    /// Publishes the current frames with a different base frequency.
    pub fn set_frequency(&self, frequency: f32) -> Result<(), SampleError> {
        let tuned = self.snapshot().with_frequency(frequency)?;
        self.replace(tuned);
        Ok(())
    }

    /// Replaces the store with frames decoded from exported bytes.
    pub fn rehydrate(&self, sample_rate: u32, bytes: &[u8]) -> Result<(), SampleError> {
        self.replace(SampleData::from_bytes(sample_rate, bytes)?);
        Ok(())
    }

    /// Number of times the store has been replaced.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn sample_rate(&self) -> u32 {
        self.data.read().sample_rate()
    }

    pub fn frequency(&self) -> f32 {
        self.data.read().frequency()
    }

    pub fn frame_count(&self) -> usize {
        self.data.read().frame_count()
    }

    /// Exports the current frames as bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.snapshot().to_bytes()
    }

    /// Captures everything needed to restore this buffer later.
    pub fn save_settings(&self) -> SampleSettings {
        let data = self.snapshot();
        SampleSettings::new(
            Some(data.to_bytes()),
            Some(data.sample_rate()),
            Some(data.frequency()),
        )
    }

    /// Restores a buffer from saved settings, publishing a single new store.
    ///
    /// `default_rate` is used when the settings carry no sample rate.
    pub fn load_settings(
        &self,
        settings: &SampleSettings,
        default_rate: u32,
    ) -> Result<(), SampleError> {
        let sample_rate = match settings.sample_rate() {
            Some(rate) => rate,
            None => {
                warn!(
                    default_rate,
                    "Sample settings have no sample rate, using the default; playback speed may be wrong"
                );
                default_rate
            }
        };

        let mut data = match settings.data() {
            Some(bytes) => SampleData::from_bytes(sample_rate, bytes)?,
            None => self.snapshot().as_ref().clone(),
        };
        if let Some(frequency) = settings.frequency() {
            data = data.with_frequency(frequency)?;
        }

        self.replace(data);
        Ok(())
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for SampleBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampleBuffer")
            .field("data", &*self.data.read())
            .field("generation", &self.generation())
            .finish()
    }
}
