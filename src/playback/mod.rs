//! Playback controller for a recorded trace
//!
//! [`Player`] holds one immutable [`Trace`] and a cursor into it. The cursor
//! is always within `[0, len - 1]`. Auto-play advances one step each time the
//! play interval elapses; the interval is derived from the speed setting
//! (`510 - speed` milliseconds, so higher is faster).

use crate::snapshot::{Step, Trace};
use std::fmt;
use std::time::{Duration, Instant};

pub const MIN_SPEED: u16 = 10;
pub const MAX_SPEED: u16 = 500;
pub const DEFAULT_SPEED: u16 = 100;
pub const SPEED_INCREMENT: u16 = 10;

/// Errors from cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    /// Already at the first step
    AtStart,
    /// Already at the last step
    AtEnd,
    /// The trace holds no steps
    EmptyTrace,
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::AtStart => write!(f, "Already at the first step"),
            PlaybackError::AtEnd => write!(f, "Already at the last step"),
            PlaybackError::EmptyTrace => write!(f, "No steps recorded"),
        }
    }
}

impl std::error::Error for PlaybackError {}

/// What a call to [`Player::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not playing, or the interval has not elapsed
    Idle,
    /// Advanced one step
    Advanced,
    /// Reached the last step and stopped playing
    Finished,
}

#[derive(Debug)]
pub struct Player {
    trace: Trace,
    position: usize,
    playing: bool,
    speed: u16,
    last_advance: Instant,
}

impl Player {
    pub fn new(trace: Trace, speed: u16) -> Self {
        Player {
            trace,
            position: 0,
            playing: false,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            last_advance: Instant::now(),
        }
    }

    /// Swap in a freshly generated trace, rewinding and pausing
    pub fn load(&mut self, trace: Trace) {
        self.trace = trace;
        self.position = 0;
        self.playing = false;
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The step under the cursor
    pub fn current(&self) -> Option<&Step> {
        self.trace.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }

    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        if self.trace.is_empty() {
            return Err(PlaybackError::EmptyTrace);
        }
        if self.is_at_end() {
            return Err(PlaybackError::AtEnd);
        }
        self.position += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), PlaybackError> {
        if self.trace.is_empty() {
            return Err(PlaybackError::EmptyTrace);
        }
        if self.position == 0 {
            return Err(PlaybackError::AtStart);
        }
        self.position -= 1;
        Ok(())
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.trace.len().saturating_sub(1);
    }

    /// Move the cursor to `index`, clamped to the trace bounds
    pub fn seek(&mut self, index: usize) {
        self.position = index.min(self.trace.len().saturating_sub(1));
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Toggle auto-play. Starting from the last step replays from the start.
    pub fn toggle_play(&mut self) {
        if self.playing {
            self.playing = false;
            return;
        }
        if self.is_at_end() {
            self.position = 0;
        }
        self.playing = true;
        // First tick advances immediately
        self.last_advance = Instant::now()
            .checked_sub(self.interval())
            .unwrap_or_else(Instant::now);
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Advance auto-play if the interval has elapsed by `now`
    pub fn tick(&mut self, now: Instant) -> Tick {
        if !self.playing || now.duration_since(self.last_advance) < self.interval() {
            return Tick::Idle;
        }
        self.last_advance = now;

        if self.step_forward().is_ok() && !self.is_at_end() {
            Tick::Advanced
        } else {
            self.playing = false;
            Tick::Finished
        }
    }

    pub fn speed(&self) -> u16 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: u16) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    pub fn faster(&mut self) {
        self.set_speed(self.speed.saturating_add(SPEED_INCREMENT));
    }

    pub fn slower(&mut self) {
        self.set_speed(self.speed.saturating_sub(SPEED_INCREMENT));
    }

    /// Delay between auto-play steps
    pub fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(MAX_SPEED + 10 - self.speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::{generate_trace, Algorithm};

    fn player_for(input: &[i32]) -> Player {
        let trace = generate_trace(Algorithm::Bubble, input).expect("bubble never fails");
        Player::new(trace, DEFAULT_SPEED)
    }

    #[test]
    fn test_step_bounds() {
        let mut player = player_for(&[2, 1]);
        assert_eq!(player.step_backward(), Err(PlaybackError::AtStart));

        while player.step_forward().is_ok() {}
        assert!(player.is_at_end());
        assert_eq!(player.position(), player.len() - 1);
        assert_eq!(player.step_forward(), Err(PlaybackError::AtEnd));

        player.rewind_to_start();
        assert!(player.is_at_start());
    }

    #[test]
    fn test_seek_is_clamped() {
        let mut player = player_for(&[3, 2, 1]);
        player.seek(usize::MAX);
        assert_eq!(player.position(), player.len() - 1);
        player.seek(1);
        assert_eq!(player.position(), 1);
    }

    #[test]
    fn test_tick_advances_then_finishes() {
        let mut player = player_for(&[1]);
        assert_eq!(player.len(), 2);

        let start = Instant::now();
        assert_eq!(player.tick(start), Tick::Idle);

        player.toggle_play();
        assert_eq!(player.tick(Instant::now()), Tick::Finished);
        assert!(!player.is_playing());
        assert!(player.is_at_end());
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut player = player_for(&[4, 3, 2, 1]);
        player.toggle_play();
        let now = Instant::now();
        assert_eq!(player.tick(now), Tick::Advanced);
        assert_eq!(player.tick(now), Tick::Idle);
        assert_eq!(player.tick(now + player.interval()), Tick::Advanced);
        assert_eq!(player.position(), 2);
    }

    #[test]
    fn test_speed_clamps() {
        let mut player = player_for(&[]);
        player.set_speed(MAX_SPEED);
        player.faster();
        assert_eq!(player.speed(), MAX_SPEED);
        assert_eq!(player.interval(), Duration::from_millis(10));

        player.set_speed(0);
        assert_eq!(player.speed(), MIN_SPEED);
        player.slower();
        assert_eq!(player.speed(), MIN_SPEED);
    }

    #[test]
    fn test_load_rewinds_and_pauses() {
        let mut player = player_for(&[2, 1]);
        player.jump_to_end();
        player.toggle_play();
        assert!(player.is_playing());
        assert!(player.is_at_start());

        player.load(generate_trace(Algorithm::Quick, &[5, 4]).expect("quick never fails"));
        assert!(!player.is_playing());
        assert_eq!(player.position(), 0);
    }
}
