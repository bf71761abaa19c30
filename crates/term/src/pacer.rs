use std::time::Duration;

/// Fixed-rate frame schedule.
///
/// Times are offsets from the start of the animation, which keeps the pacer
/// independent of the wall clock and easy to drive from tests.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next_due: Option<Duration>,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Pacer for `fps` frames per second. `fps` of zero is treated as one.
    pub fn from_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs(1) / fps.max(1))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Decide whether a frame is due at `now`.
    ///
    /// - The first call is always due.
    /// - After that, frames are due every `interval` on a fixed schedule, so a
    ///   slightly late frame does not push later frames back.
    /// - When more than a whole interval has been missed, the schedule
    ///   restarts from `now` rather than emitting a burst of catch-up frames.
    pub fn frame_due(&mut self, now: Duration) -> bool {
        match self.next_due {
            None => {
                self.next_due = Some(now + self.interval);
                true
            }
            Some(due) if now >= due => {
                let next = due + self.interval;
                self.next_due = Some(if now >= next { now + self.interval } else { next });
                true
            }
            Some(_) => false,
        }
    }

    /// Time left until the next frame is due (zero if it already is).
    pub fn remaining(&self, now: Duration) -> Duration {
        self.next_due
            .map_or(Duration::ZERO, |due| due.saturating_sub(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn first_frame_is_due_immediately() {
        let mut p = FramePacer::new(ms(100));
        assert_eq!(p.remaining(ms(0)), Duration::ZERO);
        assert!(p.frame_due(ms(0)));
        assert_eq!(p.remaining(ms(0)), ms(100));
    }

    #[test]
    fn frames_wait_for_interval() {
        let mut p = FramePacer::new(ms(100));
        assert!(p.frame_due(ms(0)));
        assert!(!p.frame_due(ms(10)));
        assert!(!p.frame_due(ms(99)));
        assert_eq!(p.remaining(ms(40)), ms(60));
        assert!(p.frame_due(ms(100)));
    }

    #[test]
    fn late_frame_keeps_fixed_schedule() {
        let mut p = FramePacer::new(ms(100));
        assert!(p.frame_due(ms(0)));
        assert!(p.frame_due(ms(130)));
        // Next is due at 200, not 230.
        assert_eq!(p.remaining(ms(130)), ms(70));
        assert!(p.frame_due(ms(200)));
    }

    #[test]
    fn stall_reanchors_instead_of_bursting() {
        let mut p = FramePacer::new(ms(100));
        assert!(p.frame_due(ms(0)));
        assert!(p.frame_due(ms(450)));
        assert!(!p.frame_due(ms(451)));
        assert_eq!(p.remaining(ms(450)), ms(100));
    }

    #[test]
    fn from_fps_computes_interval() {
        assert_eq!(FramePacer::from_fps(30).interval(), Duration::from_secs(1) / 30);
        assert_eq!(FramePacer::from_fps(0).interval(), Duration::from_secs(1));
    }
}
