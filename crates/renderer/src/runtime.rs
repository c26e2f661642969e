use std::time::{Duration, Instant};

/// High-level behaviour requested by the caller.
///
/// The render policy decides whether frames animate continuously or keep
/// re-presenting a fixed timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderPolicy {
    /// Run the render loop continuously, optionally clamping the frame rate.
    Animate {
        /// Optional requested frames-per-second cap.
        target_fps: Option<f32>,
    },
    /// Evaluate the image at a fixed timestamp every frame. Re-presenting
    /// the same timestamp yields an identical image; nothing besides the
    /// time value feeds the shading.
    Still {
        /// Timestamp to evaluate at (seconds); defaults to 0.
        time: Option<f32>,
    },
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self::Animate { target_fps: None }
    }
}

/// Snapshot of the time state supplied to the shader uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample {
    /// Elapsed wall-clock or fixed time in seconds.
    pub seconds: f32,
    /// Monotonic frame counter for the running session.
    pub frame_index: u64,
}

impl TimeSample {
    pub fn new(seconds: f32, frame_index: u64) -> Self {
        Self {
            seconds,
            frame_index,
        }
    }
}

/// Abstraction over where time values originate from.
pub trait TimeSource: Send {
    /// Resets the source to its initial state.
    fn reset(&mut self);
    /// Produces a time sample for the next frame.
    fn sample(&mut self) -> TimeSample;
}

/// Time source backed by the system monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemTimeSource {
    origin: Instant,
    frame: u64,
}

impl SystemTimeSource {
    /// Creates a system time source initialised to `Instant::now()`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
            frame: 0,
        }
    }
}

impl TimeSource for SystemTimeSource {
    fn reset(&mut self) {
        self.origin = Instant::now();
        self.frame = 0;
    }

    fn sample(&mut self) -> TimeSample {
        let elapsed = self.origin.elapsed();
        let sample = TimeSample::new(elapsed.as_secs_f32(), self.frame);
        self.frame = self.frame.saturating_add(1);
        sample
    }
}

/// Time source that always reports the same fixed timestamp.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource {
    time: f32,
}

impl FixedTimeSource {
    pub fn new(time: f32) -> Self {
        Self { time }
    }

    pub fn time(&self) -> f32 {
        self.time
    }
}

impl TimeSource for FixedTimeSource {
    fn reset(&mut self) {}

    fn sample(&mut self) -> TimeSample {
        TimeSample::new(self.time, 0)
    }
}

/// Convenient alias for owning time sources behind trait objects.
pub type BoxedTimeSource = Box<dyn TimeSource + Send>;

/// Builds a time source suited to the requested render policy.
pub fn time_source_for_policy(policy: &RenderPolicy) -> BoxedTimeSource {
    match policy {
        RenderPolicy::Animate { .. } => Box::new(SystemTimeSource::new()),
        RenderPolicy::Still { time } => Box::new(FixedTimeSource::new(time.unwrap_or(0.0))),
    }
}

/// Paces redraw requests against an optional FPS cap.
///
/// Without a cap every loop iteration is ready, preserving the
/// one-draw-per-callback contract; with a cap the scheduler hands the
/// event loop a deadline to sleep until.
#[derive(Debug)]
pub struct FrameScheduler {
    interval: Option<Duration>,
    next_frame_at: Option<Instant>,
}

impl FrameScheduler {
    pub fn new(policy: &RenderPolicy) -> Self {
        let interval = match policy {
            RenderPolicy::Animate {
                target_fps: Some(fps),
            } if *fps > 0.0 => Some(Duration::from_secs_f32(1.0 / fps)),
            _ => None,
        };
        Self {
            interval,
            next_frame_at: None,
        }
    }

    /// True when the next frame should be drawn at `now`.
    pub fn ready_for_frame(&self, now: Instant) -> bool {
        match (self.interval, self.next_frame_at) {
            (None, _) | (Some(_), None) => true,
            (Some(_), Some(deadline)) => now >= deadline,
        }
    }

    /// Records that a frame was just presented.
    pub fn mark_rendered(&mut self) {
        if let Some(interval) = self.interval {
            self.next_frame_at = Some(Instant::now() + interval);
        }
    }

    /// Deadline the event loop may sleep until, if a cap is active.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.interval.and(self.next_frame_at)
    }

    pub fn reset(&mut self) {
        self.next_frame_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_source_repeats_identical_samples() {
        let mut source = FixedTimeSource::new(1.25);
        let first = source.sample();
        let second = source.sample();
        assert_eq!(first, second);
        assert_eq!(first.seconds, 1.25);
        assert_eq!(first.frame_index, 0);
    }

    #[test]
    fn system_source_advances_frames_monotonically() {
        let mut source = SystemTimeSource::new();
        let first = source.sample();
        let second = source.sample();
        assert_eq!(first.frame_index, 0);
        assert_eq!(second.frame_index, 1);
        assert!(second.seconds >= first.seconds);

        source.reset();
        assert_eq!(source.sample().frame_index, 0);
    }

    #[test]
    fn policy_selects_matching_source() {
        let mut animated = time_source_for_policy(&RenderPolicy::default());
        assert_eq!(animated.sample().frame_index, 0);
        assert_eq!(animated.sample().frame_index, 1);

        let mut still = time_source_for_policy(&RenderPolicy::Still { time: Some(3.0) });
        assert_eq!(still.sample().seconds, 3.0);
        assert_eq!(still.sample().frame_index, 0);
    }

    #[test]
    fn uncapped_scheduler_is_always_ready() {
        let mut scheduler = FrameScheduler::new(&RenderPolicy::default());
        let now = Instant::now();
        assert!(scheduler.ready_for_frame(now));
        scheduler.mark_rendered();
        assert!(scheduler.ready_for_frame(now));
        assert_eq!(scheduler.next_deadline(), None);
    }

    #[test]
    fn capped_scheduler_spaces_frames_by_period() {
        let mut scheduler = FrameScheduler::new(&RenderPolicy::Animate {
            target_fps: Some(10.0),
        });
        let before = Instant::now();
        assert!(scheduler.ready_for_frame(before));

        scheduler.mark_rendered();
        let deadline = scheduler.next_deadline().expect("cap must set a deadline");
        assert!(deadline >= before + Duration::from_millis(90));
        assert!(!scheduler.ready_for_frame(before));
        assert!(scheduler.ready_for_frame(deadline));

        scheduler.reset();
        assert!(scheduler.ready_for_frame(before));
    }

    #[test]
    fn non_positive_fps_cap_is_treated_as_uncapped() {
        let scheduler = FrameScheduler::new(&RenderPolicy::Animate {
            target_fps: Some(0.0),
        });
        assert_eq!(scheduler.next_deadline(), None);
        assert!(scheduler.ready_for_frame(Instant::now()));
    }
}
