//! # scout-saturation
//!
//! Detects when exploration has stopped moving confidence.

use std::collections::VecDeque;

use scout_core::config::SaturationConfig;

/// True iff `window` holds at least `size` samples and the last `size`
/// of them span less than `epsilon`.
pub fn is_saturated(window: &[f64], size: usize, epsilon: f64) -> bool {
    if size == 0 || window.len() < size {
        return false;
    }
    let tail = &window[window.len() - size..];
    let (min, max) = tail
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });
    max - min < epsilon
}

/// Rolling window of the most recent confidence values.
///
/// Advisory only: the orchestrator decides what to do when it trips.
#[derive(Debug, Clone)]
pub struct SaturationDetector {
    window: VecDeque<f64>,
    size: usize,
    epsilon: f64,
}

impl SaturationDetector {
    pub fn new(config: &SaturationConfig) -> Self {
        Self {
            window: VecDeque::with_capacity(config.window),
            size: config.window,
            epsilon: config.epsilon,
        }
    }

    /// Push a confidence value, evicting the oldest once full.
    pub fn observe(&mut self, confidence: f64) {
        if self.size == 0 {
            return;
        }
        if self.window.len() == self.size {
            self.window.pop_front();
        }
        self.window.push_back(confidence);
    }

    pub fn is_saturated(&self) -> bool {
        let samples: Vec<f64> = self.window.iter().copied().collect();
        is_saturated(&samples, self.size, self.epsilon)
    }

    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.window.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

impl Default for SaturationDetector {
    fn default() -> Self {
        Self::new(&SaturationConfig::default())
    }
}
