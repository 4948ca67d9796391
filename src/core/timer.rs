/// Fires once every `interval` seconds of accumulated frame time
#[derive(Debug, Clone, Copy)]
pub struct FixedHz {
    interval: f32,
    elapsed: f32,
}

impl FixedHz {
    pub fn new(hz: f32) -> Self {
        Self {
            interval: hz.recip(),
            elapsed: 0.0,
        }
    }

    /// Add `delta` seconds; true when an interval boundary was crossed
    pub fn tick(&mut self, delta: f32) -> bool {
        self.elapsed += delta;
        let fired = self.elapsed >= self.interval;
        if fired {
            self.elapsed -= self.interval;
        }
        fired
    }
}

/// Frames-per-second meter reporting once per interval
#[derive(Debug, Clone, Copy)]
pub struct FpsMeter {
    timer: FixedHz,
    frames: u32,
    window: f32,
}

impl FpsMeter {
    /// Meter that reports every `interval` seconds
    pub fn new(interval: f32) -> Self {
        Self {
            timer: FixedHz::new(1.0 / interval),
            frames: 0,
            window: 0.0,
        }
    }

    /// Record one frame; returns the fresh average when the interval elapses
    pub fn frame(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.window += delta;

        if !self.timer.tick(delta) {
            return None;
        }

        let fps = self.frames as f32 / self.window;
        self.frames = 0;
        self.window = 0.0;
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_hz_fires_at_rate() {
        let mut timer = FixedHz::new(60.0);

        assert!(!timer.tick(0.01));
        assert!(timer.tick(0.01));
        assert!(!timer.tick(0.001));
    }

    #[test]
    fn fps_meter_reports_once_per_interval() {
        let mut meter = FpsMeter::new(1.0);

        for _ in 0..3 {
            assert_eq!(meter.frame(0.25), None);
        }
        let fps = meter.frame(0.25).expect("interval elapsed");
        assert!((fps - 4.0).abs() < 1e-4);

        assert_eq!(meter.frame(0.25), None);
    }
}
