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
use serde::{Deserialize, Serialize};

/// Persisted form of a sample buffer.
///
/// Frame data is kept as raw bytes; how they are encoded on disk (base64 in a
/// project file, a binary blob, ...) is up to the serializer.
#[derive(Deserialize, Clone, Serialize, Debug, Default, PartialEq)]
pub struct SampleSettings {
    /// Little-endian `f32` frame pairs.
    #[serde(default)]
    data: Option<Vec<u8>>,

    /// Rate the frames were authored at.
    #[serde(default)]
    sample_rate: Option<u32>,

    /// Base frequency override.
    #[serde(default)]
    frequency: Option<f32>,
}

impl SampleSettings {
    /// Creates new sample settings.
    pub fn new(data: Option<Vec<u8>>, sample_rate: Option<u32>, frequency: Option<f32>) -> Self {
        Self {
            data,
            sample_rate,
            frequency,
        }
    }

    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    pub fn sample_rate(&self) -> Option<u32> {
        self.sample_rate
    }

    pub fn frequency(&self) -> Option<f32> {
        self.frequency
    }
}
