//! Pointer, touch and wheel handling on top of a [`SceneState`].
//!
//! The controller owns the scene and renderer handles plus a small amount of
//! local state: the highlight cycle, the pinch gesture and the destroyed flag.
//! Every handler is synchronous and reports bad input through
//! [`ControllerError`] instead of forwarding it to the scene.

use glam::DVec2;

use crate::camera::{self, CameraPatch, Viewport};
use crate::config::ControllerConfig;
use crate::constants::PINCH_TOUCH_COUNT;
use crate::error::{ControllerError, Result};
use crate::input::{pinch_distance, Gesture, PointerInput};
use crate::scene::{Graph, NodeOf, RendererHandle, SceneState, StatusUpdate};
use crate::selection::{Highlight, HighlightMode, HitInfo, Selection};

pub struct InputController<S: SceneState> {
    scene: S,
    renderer: S::Renderer,
    config: ControllerConfig,
    hit_info: HitInfo<NodeOf<S>>,
    gesture: Gesture,
    destroyed: bool,
}

impl<S: SceneState> InputController<S> {
    pub fn new(scene: S, renderer: S::Renderer, config: ControllerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scene,
            renderer,
            config,
            hit_info: HitInfo::default(),
            gesture: Gesture::Idle,
            destroyed: false,
        })
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn renderer(&self) -> &S::Renderer {
        &self.renderer
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn highlight_mode(&self) -> HighlightMode {
        self.hit_info.mode()
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn set_zoom_bounds(&mut self, bounds: camera::ZoomBounds) -> Result<()> {
        bounds.validate()?;
        self.config.zoom_bounds = bounds;
        Ok(())
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Stop the render loop at its next tick. Irreversible.
    pub fn destroy(&mut self) {
        if !self.destroyed {
            log::info!("[loop] destroy requested");
        }
        self.destroyed = true;
    }

    // ---------------- Frame ----------------

    /// Push a changed viewport into the camera and renderer. Returns whether
    /// anything changed; an unchanged viewport makes no calls at all.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if self.scene.camera().viewport() == viewport {
            return false;
        }
        log::debug!(
            "[resize] {}x{} @{}",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio
        );
        self.scene
            .update_status(StatusUpdate::Camera(CameraPatch::viewport(viewport)));
        self.renderer.set_pixel_ratio(viewport.pixel_ratio);
        self.renderer.set_size(viewport.width, viewport.height);
        true
    }

    pub fn render(&mut self) {
        self.scene.render(&mut self.renderer);
    }

    // ---------------- Selection ----------------

    /// Select `selection`, cycling the highlight mode when it repeats the
    /// previous target, and return the resulting mode.
    pub fn toggle_hit(&mut self, selection: Selection<NodeOf<S>>) -> Result<HighlightMode> {
        self.ensure_alive()?;
        let highlight = self.hit_info.toggle(&selection);
        let graph = self.scene.graph_mut();
        match highlight {
            Highlight::Clear => graph.set_alpha(None),
            Highlight::Relates { targets, query } => {
                let relates = graph.relates(&targets, query);
                graph.set_alpha(Some(relates));
            }
        }
        let mode = self.hit_info.mode();
        log::info!("[select] {:?} mode={:?}", selection, mode);
        self.scene
            .update_status(StatusUpdate::Pick(self.hit_info.published()));
        self.scene.mark_dirty();
        Ok(mode)
    }

    // ---------------- Pointer ----------------

    pub fn on_click(&mut self, input: &PointerInput) -> Result<HighlightMode> {
        self.ensure_alive()?;
        let picked = self
            .scene
            .pick(&self.renderer, input.client.x, input.client.y);
        let selection = match picked {
            Some(index) => {
                let graph = self.scene.graph();
                let node = graph.node(index).ok_or(ControllerError::NodeOutOfRange {
                    index,
                    len: graph.node_count(),
                })?;
                Selection::Single(node)
            }
            None => Selection::None,
        };
        self.toggle_hit(selection)
    }

    /// Pan on a primary drag (returns `true`), or refresh the hover target for
    /// a bare mouse move (returns `false`). Other pointers are ignored.
    pub fn on_pointer_move(&mut self, input: &PointerInput) -> Result<bool> {
        self.ensure_alive()?;
        if input.is_primary_drag() {
            let status = self.scene.camera();
            let position = camera::pan_offset(&status, input.movement);
            self.scene
                .update_status(StatusUpdate::Camera(CameraPatch::pan(position)));
            return Ok(true);
        }
        if input.is_hover_probe() {
            let hit = self
                .scene
                .pick(&self.renderer, input.client.x, input.client.y);
            self.scene.update_status(StatusUpdate::Hover(hit));
        }
        Ok(false)
    }

    pub fn on_wheel(&mut self, delta_y: f64) -> Result<f64> {
        self.ensure_alive()?;
        let factor = camera::wheel_zoom_factor(delta_y, self.config.wheel_zoom_step);
        let scale = self.scene.camera().scale * factor;
        self.push_scale(scale)
    }

    // ---------------- Touch ----------------

    pub fn on_touch_start(&mut self, touches: &[DVec2]) -> Result<()> {
        self.ensure_alive()?;
        if touches.is_empty() {
            return Err(ControllerError::NoTouches);
        }
        if let Some(distance) = pinch_distance(touches) {
            log::debug!("[pinch] start at {:.1}px", distance);
            self.gesture = Gesture::Pinching {
                last_distance: distance,
            };
        }
        Ok(())
    }

    /// Scale by the ratio to the previous move's distance, not the gesture's
    /// starting distance.
    pub fn on_touch_move(&mut self, touches: &[DVec2]) -> Result<()> {
        self.ensure_alive()?;
        if touches.is_empty() {
            return Err(ControllerError::NoTouches);
        }
        let Gesture::Pinching { last_distance } = self.gesture else {
            return Ok(());
        };
        let Some(distance) = pinch_distance(touches) else {
            return Ok(());
        };
        // Fingers that started on the same spot give no ratio; just rebase.
        if last_distance > 0.0 {
            let scale = camera::pinch_scale(self.scene.camera().scale, last_distance, distance);
            self.push_scale(scale)?;
        }
        self.gesture = Gesture::Pinching {
            last_distance: distance,
        };
        Ok(())
    }

    pub fn on_touch_end(&mut self, touches: &[DVec2]) -> Result<()> {
        self.ensure_alive()?;
        if touches.len() < PINCH_TOUCH_COUNT && self.gesture.is_pinching() {
            log::debug!("[pinch] end");
            self.gesture = Gesture::Idle;
        }
        Ok(())
    }

    fn push_scale(&mut self, scale: f64) -> Result<f64> {
        let scale = self.config.zoom_bounds.clamp(camera::checked_scale(scale)?);
        self.scene
            .update_status(StatusUpdate::Camera(CameraPatch::scale(scale)));
        Ok(scale)
    }

    fn ensure_alive(&self) -> Result<()> {
        if self.destroyed {
            Err(ControllerError::Destroyed)
        } else {
            Ok(())
        }
    }
}
