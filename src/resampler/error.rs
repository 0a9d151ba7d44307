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
use super::Processed;

/// Error types for resampler construction and processing
#[derive(Debug, thiserror::Error)]
pub enum ResamplerError {
    #[error("Resampler construction failed: {0}")]
    Construction(#[from] rubato::ResamplerConstructionError),

    #[error("Invalid resample ratio: {0}")]
    InvalidRatio(f64),

    #[error("Resampling failed after {consumed} input and {produced} output frames: {source}")]
    Process {
        consumed: usize,
        produced: usize,
        #[source]
        source: rubato::ResampleError,
    },
}

impl ResamplerError {
    /// Work completed before the error, so callers can keep their cursor accurate.
    pub fn partial(&self) -> Processed {
        match self {
            ResamplerError::Process {
                consumed, produced, ..
            } => Processed {
                consumed: *consumed,
                produced: *produced,
            },
            _ => Processed::default(),
        }
    }
}
