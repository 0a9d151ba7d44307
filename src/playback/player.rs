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

//! The per-block frame advance: pitch, loops and cursor bookkeeping.

use tracing::{debug, warn};

use super::error::PlaybackError;
use super::handle::HandleState;
use super::looping::{looped_index, ping_pong_reflect, LoopMode, Reflection};
use super::window::PlaybackWindow;
use crate::config::PlaybackConfig;
use crate::sample::{SampleData, StereoFrame};

/// Renders voices at a fixed processing rate.
#[derive(Clone, Debug)]
pub struct SamplePlayer {
    processing_sample_rate: u32,
}

impl SamplePlayer {
    /// Creates a player for an engine running at `processing_sample_rate`.
    pub fn new(processing_sample_rate: u32) -> Result<Self, PlaybackError> {
        if processing_sample_rate == 0 {
            return Err(PlaybackError::InvalidProcessingRate(processing_sample_rate));
        }
        Ok(Self {
            processing_sample_rate,
        })
    }

    pub fn from_config(config: &PlaybackConfig) -> Result<Self, PlaybackError> {
        Self::new(config.processing_sample_rate())
    }

    pub fn processing_sample_rate(&self) -> u32 {
        self.processing_sample_rate
    }

    /// Store frames consumed per output frame when playing `data` at `frequency`.
    ///
    /// Below 1 the sample is stretched, above 1 it is compressed.
    pub fn frequency_factor(&self, data: &SampleData, frequency: f32) -> f64 {
        frequency as f64 / data.frequency() as f64 * data.sample_rate() as f64
            / self.processing_sample_rate as f64
    }

    /// Fills `output` with the next frames of a voice and advances its cursor.
    ///
    /// Returns false, leaving `state` untouched, when there is nothing to play:
    /// an empty window or output, an unusable frequency, or a loop-less voice
    /// that has run off its end. Resampler trouble never fails a call; it is
    /// logged and the block is completed with silence.
    pub fn play(
        &self,
        data: &SampleData,
        state: &mut HandleState,
        window: &PlaybackWindow,
        output: &mut [StereoFrame],
        frequency: f32,
        loop_mode: LoopMode,
    ) -> bool {
        let frames = output.len();
        let store_len = data.frame_count();
        let end = window.end().min(store_len);
        let start = window.start().min(end);
        if end == 0 || frames == 0 {
            return false;
        }
        if !frequency.is_finite() || frequency <= 0.0 {
            debug!(frequency, "Ignoring play request with unusable frequency");
            return false;
        }

        let factor = self.frequency_factor(data, frequency);
        if pitched_frames(end - start, factor) == 0 {
            return false;
        }

        let loop_end = window.loop_end().min(store_len);
        let loop_start = window.loop_start().min(loop_end);
        let loop_mode = match loop_mode {
            LoopMode::On | LoopMode::PingPong if loop_end <= loop_start => {
                debug!(
                    loop_start,
                    loop_end, "Loop region is empty, playing without looping"
                );
                LoopMode::Off
            }
            mode => mode,
        };

        let mut play_frame = state.frame_index().max(start);
        let mut backwards = state.is_backwards();
        match loop_mode {
            LoopMode::Off => {
                if play_frame >= end || pitched_frames(end - play_frame, factor) == 0 {
                    return false;
                }
            }
            LoopMode::On => play_frame = looped_index(play_frame, loop_start, loop_end),
            LoopMode::PingPong => {
                (play_frame, backwards) = reflect(play_frame, backwards, loop_start, loop_end)
            }
        }

        let margin = state.interpolation_mode().margin();
        let fragment_size = (frames as f64 * factor).ceil() as usize + margin;
        let fragment = data.fragment(
            play_frame,
            fragment_size,
            loop_mode,
            backwards,
            loop_start,
            loop_end,
            end,
        );

        let used = if factor != 1.0 || state.varying_pitch() {
            resample(state, &fragment, output, factor)
        } else {
            output.copy_from_slice(&fragment[..frames]);
            frames
        };
        drop(fragment);

        match loop_mode {
            LoopMode::Off => play_frame += used,
            LoopMode::On => play_frame = looped_index(play_frame + used, loop_start, loop_end),
            LoopMode::PingPong => {
                let advanced = if !backwards {
                    play_frame + used
                } else if play_frame >= loop_start + used {
                    play_frame - used
                } else {
                    // Bounce off the loop start. What is left of `used` after
                    // the overshoot is carried forwards from there.
                    let overshoot = loop_start + used - play_frame;
                    backwards = false;
                    loop_start + used.saturating_sub(overshoot)
                };
                (play_frame, backwards) = reflect(advanced, backwards, loop_start, loop_end);
            }
        }

        state.set_frame_index(play_frame);
        state.set_backwards(backwards);

        let amplification = window.amplification();
        for frame in output.iter_mut() {
            *frame = frame.scale(amplification);
        }
        true
    }
}

/// Whole output frames `frames` store frames last at `factor`.
fn pitched_frames(frames: usize, factor: f64) -> u64 {
    (frames as f64 / factor).floor() as u64
}

/// Ping-pong remap that also settles the direction of travel.
fn reflect(index: usize, backwards: bool, loop_start: usize, loop_end: usize) -> (usize, bool) {
    let (position, reflection) = ping_pong_reflect(index, loop_start, loop_end);
    let backwards = match reflection {
        Reflection::Backwards => true,
        Reflection::Forwards => false,
        Reflection::None if position <= loop_start => false,
        Reflection::None => backwards,
    };
    (position, backwards)
}

/// Resamples `fragment` into `output`, returning the store frames consumed.
fn resample(
    state: &mut HandleState,
    fragment: &[StereoFrame],
    output: &mut [StereoFrame],
    factor: f64,
) -> usize {
    let frames = output.len();
    let processed = match state.resampler_mut().process(fragment, output, 1.0 / factor) {
        Ok(processed) => processed,
        Err(e) => {
            warn!(err = %e, "Resampling failed, keeping partial output");
            e.partial()
        }
    };

    let produced = if processed.produced > frames {
        warn!(
            produced = processed.produced,
            frames, "Resampler reported more frames than requested"
        );
        frames
    } else {
        processed.produced
    };
    if produced < frames {
        warn!(
            produced,
            frames,
            fragment = fragment.len(),
            "Resampler ran short of input, padding with silence"
        );
        output[produced..].fill(StereoFrame::silence());
    }

    processed.consumed.min(fragment.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resampler::{InterpolationMode, Processed, Resampler, ResamplerError};
    use crate::testutil::{indexed_frames, init_logging, sine};

    const MARKER: StereoFrame = StereoFrame::new(1.0, -1.0);

    /// Writes two frames, then fails having consumed three.
    struct FailingResampler;

    impl Resampler for FailingResampler {
        fn reset(&mut self) {}

        fn process(
            &mut self,
            _input: &[StereoFrame],
            output: &mut [StereoFrame],
            _ratio: f64,
        ) -> Result<Processed, ResamplerError> {
            output[..2].fill(MARKER);
            Err(ResamplerError::Process {
                consumed: 3,
                produced: 2,
                source: rubato::ResampleError::WrongNumberOfInputChannels {
                    expected: 2,
                    actual: 1,
                },
            })
        }
    }

    /// Fills the block but claims to have produced more.
    struct OverReportingResampler;

    impl Resampler for OverReportingResampler {
        fn reset(&mut self) {}

        fn process(
            &mut self,
            _input: &[StereoFrame],
            output: &mut [StereoFrame],
            _ratio: f64,
        ) -> Result<Processed, ResamplerError> {
            output.fill(MARKER);
            Ok(Processed {
                consumed: output.len(),
                produced: output.len() + 5,
            })
        }
    }

    fn store(frames: usize) -> SampleData {
        SampleData::new(indexed_frames(frames), 44100).unwrap()
    }

    fn player() -> SamplePlayer {
        SamplePlayer::new(44100).unwrap()
    }

    fn render(
        data: &SampleData,
        state: &mut HandleState,
        window: &PlaybackWindow,
        output: &mut [StereoFrame],
        frequency: f32,
        loop_mode: LoopMode,
    ) -> bool {
        player().play(data, state, window, output, frequency, loop_mode)
    }

    fn handle(varying_pitch: bool) -> HandleState {
        HandleState::new(varying_pitch, InterpolationMode::Linear).unwrap()
    }

    fn looped_window(frames: usize, loop_start: usize, loop_end: usize) -> PlaybackWindow {
        let mut window = PlaybackWindow::new(frames);
        window.set_loop_range(loop_start, loop_end).unwrap();
        window
    }

    fn lefts(frames: &[StereoFrame]) -> Vec<f32> {
        frames.iter().map(|frame| frame.left).collect()
    }

    #[test]
    fn test_new_rejects_zero_rate() {
        assert!(matches!(
            SamplePlayer::new(0),
            Err(PlaybackError::InvalidProcessingRate(0))
        ));
    }

    #[test]
    fn test_frequency_factor() {
        let player = player();
        let data = store(10);
        assert_eq!(player.frequency_factor(&data, 440.0), 1.0);
        assert_eq!(player.frequency_factor(&data, 880.0), 2.0);

        let half_rate = SampleData::new(indexed_frames(10), 22050).unwrap();
        assert_eq!(player.frequency_factor(&half_rate, 440.0), 0.5);

        let tuned = data.with_frequency(220.0).unwrap();
        assert_eq!(player.frequency_factor(&tuned, 440.0), 2.0);
    }

    #[test]
    fn test_unity_copy_advances_cursor() {
        let data = store(100);
        let window = PlaybackWindow::new(100);
        let mut state = handle(false);
        let mut output = vec![StereoFrame::silence(); 10];

        assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::Off));
        assert_eq!(output.as_slice(), &data.frames()[..10]);
        assert_eq!(state.frame_index(), 10);

        assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::Off));
        assert_eq!(output.as_slice(), &data.frames()[10..20]);
        assert_eq!(state.frame_index(), 20);
    }

    #[test]
    fn test_unity_copy_is_scaled_by_amplification() {
        let data = store(100);
        let mut window = PlaybackWindow::new(100);
        window.set_amplification(0.5).unwrap();
        let mut state = handle(false);
        let mut output = vec![StereoFrame::silence(); 10];

        assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::Off));

        let expected: Vec<StereoFrame> = data.frames()[..10]
            .iter()
            .map(|frame| frame.scale(0.5))
            .collect();
        assert_eq!(output, expected);
    }

    #[test]
    fn test_playback_starts_at_window_start() {
        let data = store(100);
        let mut window = PlaybackWindow::new(100);
        window.set_range(30, 100).unwrap();
        let mut state = handle(false);
        let mut output = vec![StereoFrame::silence(); 4];

        assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::Off));
        assert_eq!(lefts(&output), vec![30.0, 31.0, 32.0, 33.0]);
        assert_eq!(state.frame_index(), 34);
    }

    #[test]
    fn test_nothing_to_play_leaves_state_alone() {
        let data = store(100);
        let mut state = handle(false);
        state.set_frame_index(5);
        let mut output = vec![StereoFrame::silence(); 10];

        let mut window = PlaybackWindow::new(100);
        window.set_range(0, 0).unwrap();
        assert!(!render(&data, &mut state, &window, &mut output, 440.0, LoopMode::On));
        assert_eq!(state.frame_index(), 5);

        let window = PlaybackWindow::new(100);
        assert!(!render(&data, &mut state, &window, &mut [], 440.0, LoopMode::Off));
        assert_eq!(state.frame_index(), 5);

        let empty = SampleData::empty();
        assert!(!render(&empty, &mut state, &window, &mut output, 440.0, LoopMode::Off));
        assert_eq!(state.frame_index(), 5);
    }

    #[test]
    fn test_unusable_frequency_returns_false() {
        init_logging();
        let data = store(100);
        let window = PlaybackWindow::new(100);
        let mut state = handle(false);
        let mut output = vec![StereoFrame::silence(); 10];

        for frequency in [0.0, -440.0, f32::NAN, f32::INFINITY] {
            assert!(!render(&data, &mut state, &window, &mut output, frequency, LoopMode::Off));
        }
        assert_eq!(state.frame_index(), 0);
    }

    #[test]
    fn test_window_too_short_for_pitch() {
        let data = store(100);
        let mut window = PlaybackWindow::new(100);
        window.set_range(0, 1).unwrap();
        let mut state = handle(false);
        let mut output = vec![StereoFrame::silence(); 4];

        // One store frame is half an output frame at double speed.
        assert!(!render(&data, &mut state, &window, &mut output, 880.0, LoopMode::Off));
        assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::Off));
    }

    #[test]
    fn test_loop_off_pads_then_finishes() {
        let data = store(100);
        let window = PlaybackWindow::new(100);
        let mut state = handle(false);
        state.set_frame_index(95);
        let mut output = vec![StereoFrame::silence(); 10];

        assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::Off));
        assert_eq!(
            lefts(&output),
            vec![95.0, 96.0, 97.0, 98.0, 99.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
        assert_eq!(state.frame_index(), 105);

        assert!(!render(&data, &mut state, &window, &mut output, 440.0, LoopMode::Off));
        assert_eq!(state.frame_index(), 105);
    }

    #[test]
    fn test_window_is_clamped_to_store() {
        let data = store(10);
        let window = PlaybackWindow::new(1000);
        let mut state = handle(false);
        state.set_frame_index(8);
        let mut output = vec![StereoFrame::silence(); 4];

        assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::Off));
        assert_eq!(lefts(&output), vec![8.0, 9.0, 0.0, 0.0]);
        assert!(!render(&data, &mut state, &window, &mut output, 440.0, LoopMode::Off));
    }

    #[test]
    fn test_loop_on_wraps() {
        let data = store(100);
        let window = looped_window(100, 20, 80);
        let mut state = handle(false);
        state.set_frame_index(75);
        let mut output = vec![StereoFrame::silence(); 10];

        assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::On));
        assert_eq!(
            lefts(&output),
            vec![75.0, 76.0, 77.0, 78.0, 79.0, 20.0, 21.0, 22.0, 23.0, 24.0]
        );
        assert_eq!(state.frame_index(), 25);
    }

    #[test]
    fn test_loop_on_cursor_stays_in_loop() {
        let data = store(100);
        let window = looped_window(100, 20, 80);
        let mut state = handle(true);
        let mut entered = false;

        for (i, frequency) in [440.0, 660.0, 330.0, 523.25].iter().cycle().take(200).enumerate() {
            let mut output = vec![StereoFrame::silence(); 1 + i % 13];
            assert!(render(&data, &mut state, &window, &mut output, *frequency, LoopMode::On));

            let cursor = state.frame_index();
            assert!(cursor < 80, "cursor {} left the loop", cursor);
            entered |= cursor >= 20;
            if entered {
                assert!(cursor >= 20, "cursor {} left the loop", cursor);
            }
        }
        assert!(entered);
    }

    #[test]
    fn test_empty_loop_plays_without_looping() {
        init_logging();
        let data = store(100);
        let window = looped_window(100, 30, 30);
        let mut state = handle(false);
        state.set_frame_index(95);
        let mut output = vec![StereoFrame::silence(); 10];

        assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::On));
        assert_eq!(state.frame_index(), 105);
        assert!(!render(&data, &mut state, &window, &mut output, 440.0, LoopMode::PingPong));
    }

    #[test]
    fn test_ping_pong_trajectory_is_symmetric() {
        let data = store(100);
        let window = looped_window(100, 20, 80);
        let mut state = handle(false);
        state.set_frame_index(70);

        let trajectory: Vec<f32> = (0..200)
            .map(|_| {
                let mut output = [StereoFrame::silence()];
                assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::PingPong));
                output[0].left
            })
            .collect();

        let top = trajectory.iter().position(|&v| v == 80.0).unwrap();
        assert_eq!(top, 10);
        for k in 0..10 {
            assert_eq!(trajectory[top + k], trajectory[top - k], "k = {}", k);
        }

        let bottom = top + trajectory[top..].iter().position(|&v| v == 20.0).unwrap();
        assert_eq!(bottom, top + 60);
        for k in 0..60 {
            assert_eq!(trajectory[bottom + k], trajectory[bottom - k], "k = {}", k);
        }
        // Each boundary frame is played once per bounce.
        assert_eq!(trajectory[bottom + 60], 80.0);
        assert_ne!(trajectory[bottom + 61], 80.0);
    }

    #[test]
    fn test_ping_pong_direction_is_stored() {
        let data = store(100);
        let window = looped_window(100, 20, 80);
        let mut state = handle(false);
        state.set_frame_index(75);
        let mut output = vec![StereoFrame::silence(); 10];

        assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::PingPong));
        assert_eq!(
            lefts(&output),
            vec![75.0, 76.0, 77.0, 78.0, 79.0, 80.0, 79.0, 78.0, 77.0, 76.0]
        );
        assert_eq!(state.frame_index(), 75);
        assert!(state.is_backwards());

        assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::PingPong));
        assert_eq!(
            lefts(&output),
            vec![75.0, 74.0, 73.0, 72.0, 71.0, 70.0, 69.0, 68.0, 67.0, 66.0]
        );
        assert_eq!(state.frame_index(), 65);
        assert!(state.is_backwards());
    }

    #[test]
    fn test_ping_pong_backwards_underflow_carries_forwards() {
        let data = store(100);
        let window = looped_window(100, 20, 80);

        // Once through the unity copy, once through the resampler.
        for varying_pitch in [false, true] {
            let mut state = handle(varying_pitch);
            state.set_frame_index(22);
            state.set_backwards(true);
            let mut output = vec![StereoFrame::silence(); 10];

            assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::PingPong));

            assert_eq!(
                lefts(&output),
                vec![22.0, 21.0, 20.0, 21.0, 22.0, 23.0, 24.0, 25.0, 26.0, 27.0]
            );
            // Eight frames overshoot the loop start, two carry forwards from it.
            assert_eq!(state.frame_index(), 22);
            assert!(!state.is_backwards());
        }
    }

    #[test]
    fn test_ping_pong_backwards_underflow_next_to_loop_start() {
        let data = store(100);
        let window = looped_window(100, 20, 80);
        let mut state = handle(false);
        state.set_frame_index(21);
        state.set_backwards(true);
        let mut output = vec![StereoFrame::silence(); 10];

        assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::PingPong));

        assert_eq!(&lefts(&output)[..3], &[21.0, 20.0, 21.0]);
        // Nine frames overshoot, one is carried past the loop start.
        assert_eq!(state.frame_index(), 21);
        assert!(!state.is_backwards());
    }

    #[test]
    fn test_ping_pong_backwards_landing_on_loop_start() {
        let data = store(100);
        let window = looped_window(100, 20, 80);
        let mut state = handle(false);
        state.set_frame_index(30);
        state.set_backwards(true);
        let mut output = vec![StereoFrame::silence(); 10];

        assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::PingPong));
        assert_eq!(state.frame_index(), 20);
        assert!(!state.is_backwards());

        assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::PingPong));
        assert_eq!(output[0].left, 20.0);
        assert_eq!(output[1].left, 21.0);
        assert_eq!(state.frame_index(), 30);
    }

    #[test]
    fn test_ping_pong_before_loop_heads_forwards() {
        let data = store(100);
        let window = looped_window(100, 20, 80);
        let mut state = handle(false);
        state.set_frame_index(5);
        state.set_backwards(true);
        let mut output = vec![StereoFrame::silence(); 4];

        assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::PingPong));
        assert_eq!(lefts(&output), vec![5.0, 6.0, 7.0, 8.0]);
        assert_eq!(state.frame_index(), 9);
        assert!(!state.is_backwards());
    }

    #[test]
    fn test_varying_pitch_unity_matches_copy() {
        let data = store(100);
        let window = PlaybackWindow::new(100);
        let mut copied = handle(false);
        let mut resampled = handle(true);
        let mut a = vec![StereoFrame::silence(); 16];
        let mut b = vec![StereoFrame::silence(); 16];

        for _ in 0..4 {
            assert!(render(&data, &mut copied, &window, &mut a, 440.0, LoopMode::Off));
            assert!(render(&data, &mut resampled, &window, &mut b, 440.0, LoopMode::Off));
            assert_eq!(a, b);
            assert_eq!(copied.frame_index(), resampled.frame_index());
        }
    }

    #[test]
    fn test_pitch_shift_consumes_scaled_frames() {
        let data = store(100);
        let window = PlaybackWindow::new(100);
        let mut output = vec![StereoFrame::silence(); 8];

        let mut state = handle(false);
        assert!(render(&data, &mut state, &window, &mut output, 880.0, LoopMode::Off));
        assert_eq!(
            lefts(&output),
            vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0]
        );
        assert_eq!(state.frame_index(), 16);

        let mut state = handle(false);
        assert!(render(&data, &mut state, &window, &mut output, 220.0, LoopMode::Off));
        assert_eq!(
            lefts(&output),
            vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5]
        );
        assert_eq!(state.frame_index(), 4);
    }

    #[test]
    fn test_sinc_playback_stays_sane() {
        init_logging();
        let data = SampleData::new(sine(440.0, 44100, 8192), 44100).unwrap();
        let window = PlaybackWindow::new(8192);

        for mode in [
            InterpolationMode::SincBest,
            InterpolationMode::SincMedium,
            InterpolationMode::SincFastest,
        ] {
            let mut state = HandleState::new(true, mode).unwrap();
            let mut output = vec![StereoFrame::silence(); 256];
            let mut previous = 0;

            for _ in 0..8 {
                assert!(render(&data, &mut state, &window, &mut output, 466.16, LoopMode::Off));
                let cursor = state.frame_index();
                assert!(cursor > previous, "{:?} cursor stalled", mode);
                assert!(cursor - previous <= 256 * 2 + mode.margin());
                assert!(output.iter().all(|f| f.left.is_finite() && f.right.is_finite()));
                previous = cursor;
            }
        }
    }

    #[test]
    fn test_wide_pitch_shift_advances_at_requested_rate() {
        init_logging();
        let data = SampleData::new(sine(440.0, 44100, 32768), 44100).unwrap();
        let window = PlaybackWindow::new(32768);

        for mode in [
            InterpolationMode::Linear,
            InterpolationMode::SincFastest,
            InterpolationMode::SincMedium,
            InterpolationMode::SincBest,
        ] {
            let mut state = HandleState::new(true, mode).unwrap();
            let mut output = vec![StereoFrame::silence(); 256];
            for _ in 0..4 {
                assert!(render(&data, &mut state, &window, &mut output, 7040.0, LoopMode::Off));
            }

            // 7040 Hz is sixteen times the base frequency, so each of the
            // 1024 output frames eats sixteen store frames.
            let cursor = state.frame_index();
            assert!(
                cursor.abs_diff(16384) <= 128,
                "{:?} cursor = {}",
                mode,
                cursor
            );
        }
    }

    #[test]
    fn test_resampler_error_keeps_partial_progress() {
        init_logging();
        let data = store(100);
        let window = PlaybackWindow::new(100);
        let mut state = HandleState::with_resampler(
            true,
            InterpolationMode::Linear,
            Box::new(FailingResampler),
        );
        let mut output = vec![StereoFrame::new(9.0, 9.0); 8];

        assert!(render(&data, &mut state, &window, &mut output, 440.0, LoopMode::Off));

        assert_eq!(state.frame_index(), 3);
        assert_eq!(&output[..2], &[MARKER, MARKER]);
        assert!(output[2..].iter().all(|frame| *frame == StereoFrame::silence()));
    }

    #[test]
    fn test_over_reported_output_stays_in_block() {
        init_logging();
        let data = store(100);
        let window = PlaybackWindow::new(100);
        let mut state = HandleState::with_resampler(
            true,
            InterpolationMode::Linear,
            Box::new(OverReportingResampler),
        );
        let mut buffer = vec![StereoFrame::silence(); 12];

        assert!(render(&data, &mut state, &window, &mut buffer[..8], 440.0, LoopMode::Off));

        assert_eq!(state.frame_index(), 8);
        assert!(buffer[..8].iter().all(|frame| *frame == MARKER));
        assert!(buffer[8..].iter().all(|frame| *frame == StereoFrame::silence()));
    }

    #[test]
    fn test_from_config() {
        let config = PlaybackConfig::from_yaml("processing_sample_rate: 48000\n").unwrap();
        let player = SamplePlayer::from_config(&config).unwrap();
        assert_eq!(player.processing_sample_rate(), 48000);
    }
}
