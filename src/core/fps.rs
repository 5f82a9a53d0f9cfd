use std::time::Instant;

/// Minimal frame-rate counter ticked once per step.
///
/// Logs the measured rate each time an interval completes; diagnostic only.
#[derive(Debug)]
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    interval_secs: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::with_interval(1.0)
    }

    /// Counter that reports every `interval_secs` seconds.
    pub fn with_interval(interval_secs: f32) -> Self {
        FpsCounter {
            window_start: Instant::now(),
            frames: 0,
            interval_secs,
        }
    }

    /// Count one frame. Returns the measured rate when an interval just
    /// completed, `None` otherwise.
    pub fn tick(&mut self) -> Option<f32> {
        self.frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed < self.interval_secs {
            return None;
        }

        let fps = self.frames as f32 / elapsed;
        log::debug!("fps: {fps:.1}");
        self.window_start = Instant::now();
        self.frames = 0;
        Some(fps)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_no_report_inside_interval() {
        let mut fps = FpsCounter::with_interval(60.0);
        assert_eq!(fps.tick(), None);
        assert_eq!(fps.tick(), None);
    }

    #[test]
    fn test_reports_after_interval_elapses() {
        let mut fps = FpsCounter::with_interval(0.01);
        fps.tick();
        thread::sleep(Duration::from_millis(20));

        let rate = fps.tick();
        assert!(rate.is_some());
        assert!(rate.unwrap() > 0.0);

        // window restarts after a report
        assert_eq!(fps.tick(), None);
    }
}
