//! Single-threaded frame loop.
//!
//! A `calloop` timer fires once per frame. Each tick feeds the next scripted input
//! step (if any) to the application and then redraws the whole canvas, whether or
//! not anything changed. The loop ends once the script is drained, or when the
//! frame cap is hit.

use crate::config::RenderConfig;
use crate::draw::{Canvas, RenderError};
use crate::input::Step;
use anyhow::{Context, Result, anyhow};
use calloop::EventLoop;
use calloop::timer::{TimeoutAction, Timer};
use log::{debug, info, warn};
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Something the frame loop can drive.
pub trait FrameApp {
    /// Applies one scripted input step. May move the canvas (scroll steps).
    fn apply_step(&mut self, canvas: &mut Canvas, step: &Step);

    /// Clears the canvas and redraws everything.
    fn render(&mut self, canvas: &Canvas) -> Result<(), RenderError>;
}

/// Frame loop tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOptions {
    /// Frames per second
    pub fps: u32,
    /// Maximum frames to render before stopping
    pub max_frames: u64,
    /// If set, every frame is written there as `frame-NNNN.png`
    pub frames_dir: Option<PathBuf>,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl FrameOptions {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            fps: config.fps,
            max_frames: config.max_frames,
            frames_dir: None,
        }
    }

    /// Delay between two frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps.max(1)))
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames rendered
    pub frames: u64,
    /// Input steps applied
    pub steps: usize,
}

struct LoopState<'a, A> {
    app: &'a mut A,
    canvas: &'a mut Canvas,
    options: &'a FrameOptions,
    pending: VecDeque<Step>,
    stats: FrameStats,
    error: Option<anyhow::Error>,
    done: bool,
}

impl<A: FrameApp> LoopState<'_, A> {
    /// Runs one frame. Returns whether another frame should be scheduled.
    fn tick(&mut self) -> bool {
        if let Some(step) = self.pending.pop_front() {
            debug!("Frame {}: applying {:?}", self.stats.frames + 1, step);
            self.app.apply_step(self.canvas, &step);
            self.stats.steps += 1;
        }

        if let Err(err) = self.draw_frame() {
            self.error = Some(err);
            self.done = true;
            return false;
        }

        if self.pending.is_empty() {
            self.done = true;
            return false;
        }

        if self.stats.frames >= self.options.max_frames {
            warn!(
                "Frame limit ({}) reached with {} input steps left",
                self.options.max_frames,
                self.pending.len()
            );
            self.done = true;
            return false;
        }

        true
    }

    fn draw_frame(&mut self) -> Result<()> {
        self.app.render(self.canvas)?;
        self.stats.frames += 1;

        if let Some(dir) = &self.options.frames_dir {
            let path = dir.join(format!("frame-{:04}.png", self.stats.frames));
            self.canvas.write_png(&path)?;
        }
        Ok(())
    }
}

/// Runs `app` against `canvas`, replaying `steps` one per frame.
///
/// At least one frame is always rendered, so an empty script still produces an
/// initial render.
pub fn run<A: FrameApp>(
    app: &mut A,
    canvas: &mut Canvas,
    steps: Vec<Step>,
    options: &FrameOptions,
) -> Result<FrameStats> {
    if let Some(dir) = &options.frames_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create frames directory {}", dir.display()))?;
    }

    let mut event_loop: EventLoop<'_, LoopState<'_, A>> =
        EventLoop::try_new().context("Failed to create event loop")?;

    let interval = options.frame_interval();
    event_loop
        .handle()
        .insert_source(Timer::immediate(), move |_deadline, _, state| {
            if state.tick() {
                TimeoutAction::ToDuration(interval)
            } else {
                TimeoutAction::Drop
            }
        })
        .map_err(|err| anyhow!("Failed to register frame timer: {}", err.error))?;

    let signal = event_loop.get_signal();
    let mut state = LoopState {
        app,
        canvas,
        options,
        pending: steps.into(),
        stats: FrameStats::default(),
        error: None,
        done: false,
    };

    info!(
        "Running frame loop at {} fps with {} input steps",
        options.fps,
        state.pending.len()
    );

    event_loop
        .run(None, &mut state, |state| {
            if state.done {
                signal.stop();
            }
        })
        .context("Frame loop failed")?;

    if let Some(err) = state.error.take() {
        return Err(err);
    }

    info!(
        "Frame loop finished after {} frames ({} steps)",
        state.stats.frames, state.stats.steps
    );
    Ok(state.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::Point;

    #[derive(Default)]
    struct Recorder {
        applied: Vec<Step>,
        renders: u32,
        fail_render_at: Option<u32>,
    }

    impl FrameApp for Recorder {
        fn apply_step(&mut self, canvas: &mut Canvas, step: &Step) {
            if let Step::Scroll { dx, dy } = step {
                canvas.scroll_by(*dx, *dy);
            }
            self.applied.push(step.clone());
        }

        fn render(&mut self, _canvas: &Canvas) -> Result<(), RenderError> {
            self.renders += 1;
            if Some(self.renders) == self.fail_render_at {
                return Err(RenderError::Context(cairo::Error::NoMemory));
            }
            Ok(())
        }
    }

    fn fast() -> FrameOptions {
        FrameOptions {
            fps: 240,
            max_frames: 1000,
            frames_dir: None,
        }
    }

    fn canvas() -> Canvas {
        Canvas::new(20, 20, 1.0, Point::default()).unwrap()
    }

    #[test]
    fn one_step_is_applied_per_frame() {
        let mut app = Recorder::default();
        let mut canvas = canvas();
        let steps = vec![
            Step::Down {
                x: 1.0,
                y: 1.0,
                button: Default::default(),
            },
            Step::Move { x: 2.0, y: 2.0 },
            Step::Up {
                x: 2.0,
                y: 2.0,
                button: Default::default(),
            },
        ];

        let stats = run(&mut app, &mut canvas, steps.clone(), &fast()).unwrap();

        assert_eq!(stats, FrameStats { frames: 3, steps: 3 });
        assert_eq!(app.applied, steps);
        assert_eq!(app.renders, 3);
    }

    #[test]
    fn empty_script_still_renders_once() {
        let mut app = Recorder::default();
        let mut canvas = canvas();
        let stats = run(&mut app, &mut canvas, Vec::new(), &fast()).unwrap();
        assert_eq!(stats, FrameStats { frames: 1, steps: 0 });
    }

    #[test]
    fn frame_cap_stops_the_loop() {
        let mut app = Recorder::default();
        let mut canvas = canvas();
        let steps = vec![Step::Move { x: 0.0, y: 0.0 }; 10];
        let options = FrameOptions {
            max_frames: 4,
            ..fast()
        };

        let stats = run(&mut app, &mut canvas, steps, &options).unwrap();
        assert_eq!(stats.frames, 4);
        assert_eq!(stats.steps, 4);
    }

    #[test]
    fn steps_can_move_the_canvas() {
        let mut app = Recorder::default();
        let mut canvas = canvas();
        run(
            &mut app,
            &mut canvas,
            vec![Step::Scroll { dx: 0.0, dy: 15.0 }],
            &fast(),
        )
        .unwrap();
        assert_eq!(canvas.offset(), Point::new(0.0, -15.0));
    }

    #[test]
    fn render_errors_abort_the_run() {
        let mut app = Recorder {
            fail_render_at: Some(2),
            ..Recorder::default()
        };
        let mut canvas = canvas();
        let steps = vec![Step::Move { x: 0.0, y: 0.0 }; 5];

        let err = run(&mut app, &mut canvas, steps, &fast()).unwrap_err();
        assert!(err.to_string().contains("drawing context"));
        assert_eq!(app.renders, 2);
    }

    #[test]
    fn frames_are_dumped_when_requested() {
        let dir = tempfile::tempdir().unwrap();
        let frames = dir.path().join("frames");
        let mut app = Recorder::default();
        let mut canvas = canvas();
        let options = FrameOptions {
            frames_dir: Some(frames.clone()),
            ..fast()
        };

        run(
            &mut app,
            &mut canvas,
            vec![Step::Move { x: 0.0, y: 0.0 }; 2],
            &options,
        )
        .unwrap();

        assert!(frames.join("frame-0001.png").exists());
        assert!(frames.join("frame-0002.png").exists());
        assert!(!frames.join("frame-0003.png").exists());
    }

    #[test]
    fn interval_follows_fps() {
        let options = FrameOptions {
            fps: 50,
            ..fast()
        };
        assert_eq!(options.frame_interval(), Duration::from_millis(20));
    }
}
