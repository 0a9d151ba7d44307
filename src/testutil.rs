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

//! Signal generators and logging setup shared by the unit tests.

use std::f32::consts::PI;

use crate::sample::StereoFrame;

/// Installs a test-writer subscriber so `tracing` output shows up in failing tests.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Frames whose left channel holds the frame index and right channel its negation.
pub fn indexed_frames(count: usize) -> Vec<StereoFrame> {
    (0..count)
        .map(|i| StereoFrame::new(i as f32, -(i as f32)))
        .collect()
}

/// A normalized ramp from 0 up towards 1.
pub fn ramp(count: usize) -> Vec<StereoFrame> {
    (0..count)
        .map(|i| {
            let value = i as f32 / count.max(1) as f32;
            StereoFrame::new(value, -value)
        })
        .collect()
}

/// A stereo sine wave with the right channel a quarter cycle behind.
pub fn sine(frequency: f32, sample_rate: u32, count: usize) -> Vec<StereoFrame> {
    (0..count)
        .map(|i| {
            let phase = 2.0 * PI * frequency * i as f32 / sample_rate as f32;
            StereoFrame::new(phase.sin(), phase.cos())
        })
        .collect()
}
