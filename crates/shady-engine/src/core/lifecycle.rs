/// Render loop state.
///
/// The only transition is `Running -> Closing`, taken on a close request.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LoopState {
    #[default]
    Running,
    Closing,
}

impl LoopState {
    #[inline]
    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }

    /// Moves to `Closing`. Repeated requests are no-ops.
    #[inline]
    pub fn request_close(&mut self) {
        *self = LoopState::Closing;
    }
}

/// Resources released at teardown, in release order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Stage {
    /// Vertex buffer and its layout.
    Geometry,
    /// Linked shader program.
    Program,
    /// Window and its GPU context.
    Window,
    /// Windowing library (event loop).
    Platform,
}

impl Stage {
    /// Reverse of acquisition order.
    pub const TEARDOWN_ORDER: [Stage; 4] =
        [Stage::Geometry, Stage::Program, Stage::Window, Stage::Platform];
}

/// Runs the teardown sequence at most once.
#[derive(Debug, Default)]
pub struct Teardown {
    done: bool,
}

impl Teardown {
    /// Calls `release` for every stage in [`Stage::TEARDOWN_ORDER`].
    ///
    /// Returns `false` without calling anything if teardown already ran.
    pub fn run(&mut self, mut release: impl FnMut(Stage)) -> bool {
        if self.done {
            return false;
        }
        self.done = true;

        for stage in Stage::TEARDOWN_ORDER {
            log::debug!("teardown: releasing {stage:?}");
            release(stage);
        }
        true
    }
}

/// Counts frames that actually reached the screen.
#[derive(Debug, Copy, Clone, Default)]
pub struct FrameCounter {
    presented: u64,
}

impl FrameCounter {
    /// Frames presented so far; also the index of the next frame.
    #[inline]
    pub fn presented(self) -> u64 {
        self.presented
    }

    /// Records the outcome of one redraw. Skipped frames are not counted.
    #[inline]
    pub fn record(&mut self, presented: bool) {
        if presented {
            self.presented += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_starts_running_and_closes_once() {
        let mut state = LoopState::default();
        assert!(state.is_running());

        state.request_close();
        assert_eq!(state, LoopState::Closing);

        state.request_close();
        assert_eq!(state, LoopState::Closing);
    }

    #[test]
    fn teardown_releases_in_reverse_acquisition_order() {
        let mut released = Vec::new();
        let mut teardown = Teardown::default();

        assert!(teardown.run(|s| released.push(s)));
        assert_eq!(
            released,
            [Stage::Geometry, Stage::Program, Stage::Window, Stage::Platform]
        );
        assert!(!teardown.run(|s| released.push(s)));
        assert_eq!(released.len(), 4);
    }

    #[test]
    fn teardown_runs_exactly_once() {
        let mut calls = 0;
        let mut teardown = Teardown::default();

        assert!(teardown.run(|_| calls += 1));
        assert!(!teardown.run(|_| calls += 1));
        assert!(!teardown.run(|_| calls += 1));
        assert_eq!(calls, 4);
    }

    #[test]
    fn skipped_frames_are_not_counted() {
        let mut frames = FrameCounter::default();

        frames.record(true);
        frames.record(false);
        frames.record(false);
        frames.record(true);

        assert_eq!(frames.presented(), 2);
    }
}
