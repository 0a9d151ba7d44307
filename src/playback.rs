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

//! Voice playback.
//!
//! A voice is a [`HandleState`] driven through a shared sample store by a
//! [`SamplePlayer`], within the bounds of a [`PlaybackWindow`].

mod error;
mod handle;
mod looping;
mod player;
mod window;

pub use error::PlaybackError;
pub use handle::HandleState;
pub use looping::{looped_index, ping_pong_index, LoopMode};
pub use player::SamplePlayer;
pub use window::PlaybackWindow;
