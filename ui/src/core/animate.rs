//! Count-up animation for dashboard totals.

/// Fixed-step tween from `start` to `end`.
///
/// Each frame advances by `(end - start) / (duration / frame)`; the frame that
/// would reach or pass `end` is clamped onto it and ends the sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    current: f64,
    end: f64,
    increment: f64,
    done: bool,
}

impl CountUp {
    pub fn new(start: f64, end: f64, duration_ms: u64, frame_ms: u64) -> Self {
        let frames = duration_ms as f64 / frame_ms.max(1) as f64;
        let range = end - start;
        let increment = if frames > 0.0 { range / frames } else { range };
        let degenerate = !start.is_finite() || !end.is_finite() || increment == 0.0;

        Self {
            current: if degenerate { end } else { start },
            end,
            increment,
            done: false,
        }
    }
}

impl Iterator for CountUp {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }
        if self.current == self.end || !self.increment.is_finite() {
            self.done = true;
            return Some(self.end);
        }

        self.current += self.increment;
        let arrived = (self.increment > 0.0 && self.current >= self.end)
            || (self.increment < 0.0 && self.current <= self.end);
        if arrived {
            self.current = self.end;
            self.done = true;
        }
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lands_exactly_on_end_without_overshoot() {
        let frames: Vec<f64> = CountUp::new(0.0, 100.0, 1000, 16).collect();
        assert_eq!(frames.last().copied(), Some(100.0));
        assert!(frames.iter().all(|v| *v <= 100.0));
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(frames.len(), 63);
    }

    #[test]
    fn counts_down_for_negative_ranges() {
        let frames: Vec<f64> = CountUp::new(0.0, -50.0, 160, 16).collect();
        assert_eq!(frames.len(), 10);
        assert_eq!(frames.last().copied(), Some(-50.0));
        assert!(frames.iter().all(|v| *v >= -50.0));
    }

    #[test]
    fn zero_range_yields_single_frame() {
        let frames: Vec<f64> = CountUp::new(0.0, 0.0, 1000, 16).collect();
        assert_eq!(frames, vec![0.0]);
    }
}
