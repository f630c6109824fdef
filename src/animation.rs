use crate::{physics, state::SceneState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Paused,
    /// Terminal. Nothing resumes a stopped loop.
    Stopped,
}

/// Scheduler handle for the per-tick physics step.
///
/// The host calls [`AnimationLoop::frame`] at a fixed rate; whether a tick
/// actually runs is decided only by the named transitions below.
pub struct AnimationLoop {
    state: LoopState,
    ticks: u64,
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
            ticks: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Number of ticks actually applied so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn pause(&mut self) {
        if self.state == LoopState::Running {
            log::debug!("animation paused after {} ticks", self.ticks);
            self.state = LoopState::Paused;
        }
    }

    pub fn resume(&mut self) {
        match self.state {
            LoopState::Paused => {
                log::debug!("animation resumed");
                self.state = LoopState::Running;
            }
            LoopState::Running => {}
            LoopState::Stopped => log::warn!("ignoring resume of a stopped animation loop"),
        }
    }

    /// Cancels any further ticks, for teardown.
    pub fn stop(&mut self) {
        if self.state != LoopState::Stopped {
            log::info!("animation stopped after {} ticks", self.ticks);
            self.state = LoopState::Stopped;
        }
    }

    /// Runs one physics tick if the loop is running. Returns whether it did.
    pub fn frame(&mut self, scene: &mut SceneState) -> bool {
        if !self.is_running() {
            return false;
        }
        physics::tick(scene);
        self.ticks += 1;
        true
    }
}
