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

/// Number of bytes a single frame occupies in the exported byte layout.
pub const BYTES_PER_FRAME: usize = 2 * std::mem::size_of::<f32>();

/// One sample instant across both channels.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StereoFrame {
    pub left: f32,
    pub right: f32,
}

impl StereoFrame {
    /// Creates a new frame.
    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// A silent frame.
    pub const fn silence() -> Self {
        Self {
            left: 0.0,
            right: 0.0,
        }
    }

    /// Returns this frame with both channels multiplied by `gain`.
    #[inline]
    pub fn scale(self, gain: f32) -> Self {
        Self {
            left: self.left * gain,
            right: self.right * gain,
        }
    }

    /// Linear interpolation between `a` and `b`, `t` in [0, 1].
    #[inline]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self {
            left: a.left + (b.left - a.left) * t,
            right: a.right + (b.right - a.right) * t,
        }
    }

    /// Appends the little-endian byte form of this frame to `out`.
    pub(crate) fn write_le_bytes(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.left.to_le_bytes());
        out.extend_from_slice(&self.right.to_le_bytes());
    }

    /// Reads a frame from exactly `BYTES_PER_FRAME` little-endian bytes.
    pub(crate) fn from_le_bytes(bytes: &[u8; BYTES_PER_FRAME]) -> Self {
        let [l0, l1, l2, l3, r0, r1, r2, r3] = *bytes;
        Self {
            left: f32::from_le_bytes([l0, l1, l2, l3]),
            right: f32::from_le_bytes([r0, r1, r2, r3]),
        }
    }
}
