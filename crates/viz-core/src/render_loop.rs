use crate::controller::InputController;
use crate::scene::{SceneState, Surface};

/// Requests one callback at the next display refresh.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Per-frame driver: resize if the surface changed, render, reschedule.
///
/// The loop is never cancelled from outside. It stops itself on the first
/// tick that finds the controller destroyed.
pub struct RenderLoop<F, V> {
    scheduler: F,
    surface: V,
    stopped: bool,
    frames: u64,
}

impl<F: FrameScheduler, V: Surface> RenderLoop<F, V> {
    pub fn new(scheduler: F, surface: V) -> Self {
        Self {
            scheduler,
            surface,
            stopped: false,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        log::info!("[loop] starting");
        self.scheduler.request_frame();
    }

    pub fn tick<S: SceneState>(&mut self, controller: &mut InputController<S>) -> LoopControl {
        if self.stopped {
            return LoopControl::Stop;
        }
        if controller.is_destroyed() {
            log::info!("[loop] stopped after {} frames", self.frames);
            self.stopped = true;
            return LoopControl::Stop;
        }

        match self.surface.viewport() {
            Some(viewport) => {
                controller.resize(viewport);
            }
            None => log::warn!("[resize] surface has no container; keeping previous size"),
        }
        controller.render();
        self.frames += 1;

        self.scheduler.request_frame();
        LoopControl::Continue
    }

    /// Re-arm without ticking, for a frame whose controller could not be borrowed.
    pub fn reschedule(&mut self) {
        if !self.stopped {
            self.scheduler.request_frame();
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn surface_mut(&mut self) -> &mut V {
        &mut self.surface
    }
}
