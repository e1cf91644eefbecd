//! Current-slide bookkeeping: the index, the in-flight lock and the autoplay
//! timer. Time only moves through [`Navigator::tick`].

use std::time::Duration;

use tracing::{debug, trace};

use crate::config::{SlideDirection, SliderConfig, SliderMode};
use crate::constants::SETTLE_DURATION;
use crate::state::NavigationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

impl Step {
    /// Autoplay moves with the configured flow: forward through the indices for `Rtl`.
    pub fn autoplay(direction: SlideDirection) -> Self {
        match direction {
            SlideDirection::Rtl => Step::Next,
            SlideDirection::Ltr => Step::Previous,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AutoplayKey {
    auto_play: bool,
    interval: u32,
    image_count: usize,
    mode: SliderMode,
    direction: SlideDirection,
}

impl AutoplayKey {
    fn of(config: &SliderConfig) -> Self {
        Self {
            auto_play: config.auto_play,
            interval: config.interval,
            image_count: config.images.len(),
            mode: config.mode,
            direction: config.direction,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct AutoplayTimer {
    interval: Duration,
    elapsed: Duration,
    step: Step,
}

#[derive(Debug)]
pub struct Navigator {
    current_index: usize,
    image_count: usize,
    state: NavigationState,
    settle_remaining: Duration,
    autoplay: Option<AutoplayTimer>,
    autoplay_key: Option<AutoplayKey>,
}

impl Navigator {
    pub fn new(config: &SliderConfig) -> Self {
        let mut navigator = Self {
            current_index: 0,
            image_count: 0,
            state: NavigationState::Resting,
            settle_remaining: Duration::ZERO,
            autoplay: None,
            autoplay_key: None,
        };
        navigator.sync(config);
        navigator
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state == NavigationState::Settling
    }

    pub fn autoplay_armed(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Moves one slide around the ring. Rejected while a step is settling or
    /// when there is nothing to move to.
    pub fn advance(&mut self, step: Step) -> bool {
        if self.is_animating() || self.image_count <= 1 {
            trace!(?step, state = ?self.state, count = self.image_count, "advance rejected");
            return false;
        }

        let n = self.image_count;
        self.current_index = match step {
            Step::Next => (self.current_index + 1) % n,
            Step::Previous => (self.current_index + n - 1) % n,
        };
        self.state = NavigationState::Settling;
        self.settle_remaining = SETTLE_DURATION;
        debug!(?step, index = self.current_index, "advanced");
        true
    }

    /// Direct selection, e.g. from a position dot. Ignores the settle lock.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if self.image_count == 0 {
            return false;
        }
        self.current_index = index % self.image_count;
        debug!(index = self.current_index, "jumped");
        true
    }

    /// Advances both timers by `dt`. Returns true if the current index changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.state == NavigationState::Settling {
            self.settle_remaining = self.settle_remaining.saturating_sub(dt);
            if self.settle_remaining.is_zero() {
                self.state = NavigationState::Resting;
                trace!("settled");
            }
        }

        let mut fired = 0;
        let mut step = Step::Next;
        if let Some(timer) = self.autoplay.as_mut() {
            timer.elapsed += dt;
            while timer.elapsed >= timer.interval {
                timer.elapsed -= timer.interval;
                fired += 1;
            }
            step = timer.step;
        }

        let mut changed = false;
        for _ in 0..fired {
            changed |= self.advance(step);
        }
        changed
    }

    /// Applies a (possibly new) configuration. The autoplay timer is re-armed
    /// only when one of the fields governing it changed.
    pub fn sync(&mut self, config: &SliderConfig) {
        let count = config.images.len();
        if count != self.image_count {
            self.image_count = count;
            self.current_index = if count == 0 { 0 } else { self.current_index % count };
        }

        let key = AutoplayKey::of(config);
        if self.autoplay_key == Some(key) {
            return;
        }
        self.autoplay_key = Some(key);

        let wanted = key.auto_play && key.mode != SliderMode::Linear && key.image_count > 1;
        self.autoplay = if wanted && key.interval > 0 {
            Some(AutoplayTimer {
                interval: Duration::from_millis(u64::from(key.interval)),
                elapsed: Duration::ZERO,
                step: Step::autoplay(key.direction),
            })
        } else {
            None
        };
        debug!(armed = self.autoplay.is_some(), interval = key.interval, "autoplay timer reset");
    }

    /// Clears every timer. A later [`sync`](Self::sync) arms autoplay again.
    pub fn teardown(&mut self) {
        self.autoplay = None;
        self.autoplay_key = None;
        self.state = NavigationState::Resting;
        self.settle_remaining = Duration::ZERO;
        debug!("navigator torn down");
    }
}
