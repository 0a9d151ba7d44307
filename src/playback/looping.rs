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

//! Loop traversal policies and the index arithmetic behind them.

use serde::{Deserialize, Serialize};

/// How playback behaves when it reaches the loop end.
#[derive(Deserialize, Clone, Copy, Serialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    /// Play once through to the end frame.
    #[default]
    Off,
    /// Jump back to the loop start whenever the loop end is reached.
    On,
    /// Bounce between the loop boundaries, reversing direction at each.
    PingPong,
}

/// Which branch of the ping-pong reflection produced an index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reflection {
    /// The index was before the loop end and was returned as is.
    None,
    /// The index landed in a backwards pass.
    Backwards,
    /// The index landed in a forwards pass after at least one bounce.
    Forwards,
}

/// Wraps `index` into `[loop_start, loop_end)` once it reaches the loop end.
///
/// Indices before the loop end are returned unchanged, so playback that starts
/// before the loop region runs into it naturally. `loop_end` must be greater
/// than `loop_start`.
pub fn looped_index(index: usize, loop_start: usize, loop_end: usize) -> usize {
    debug_assert!(loop_end > loop_start, "empty loop region");
    if index < loop_end {
        return index;
    }
    loop_start + (index - loop_start) % (loop_end - loop_start)
}

/// Reflects `index` back and forth between the loop boundaries.
///
/// The result lies in `[loop_start, loop_end]`. The function alone does not
/// say which way playback is heading; see [`ping_pong_reflect`].
pub fn ping_pong_index(index: usize, loop_start: usize, loop_end: usize) -> usize {
    ping_pong_reflect(index, loop_start, loop_end).0
}

/// Same as [`ping_pong_index`], also reporting which branch fired.
pub(crate) fn ping_pong_reflect(
    index: usize,
    loop_start: usize,
    loop_end: usize,
) -> (usize, Reflection) {
    debug_assert!(loop_end > loop_start, "empty loop region");
    if index < loop_end {
        return (index, Reflection::None);
    }
    let loop_len = loop_end - loop_start;
    let pos = (index - loop_end) % (loop_len * 2);

    if pos < loop_len {
        (loop_end - pos, Reflection::Backwards)
    } else {
        (loop_start + (pos - loop_len), Reflection::Forwards)
    }
}
