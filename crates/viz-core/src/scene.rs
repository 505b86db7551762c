//! Collaborator contracts.
//!
//! The scene graph, camera projection, picking and the GPU renderer live
//! outside this crate. The controller talks to them only through these traits,
//! which the web frontend implements over the JavaScript objects and the tests
//! implement in memory.

use std::fmt;

use crate::camera::{CameraPatch, CameraStatus, Viewport};
use crate::selection::Selection;

/// Position of a node in the graph's node table.
pub type NodeIndex = usize;

/// Opaque node record returned by the graph. Equality decides whether a click
/// hit the same target as last time.
pub trait NodeRef: Clone + PartialEq + fmt::Debug {
    fn index(&self) -> NodeIndex;
}

/// Direction filters handed to [`Graph::relates`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelationQuery {
    pub incoming: bool,
    pub outgoing: bool,
    /// Restrict to the targets' own relations instead of the whole closure.
    pub restrict: bool,
}

/// Partial status update pushed into the scene.
#[derive(Clone, Debug, PartialEq)]
pub enum StatusUpdate<N> {
    Camera(CameraPatch),
    /// Current selection shown by the graph; `Selection::None` clears it.
    Pick(Selection<N>),
    /// Transient hover target under the mouse.
    Hover(Option<NodeIndex>),
}

pub trait RendererHandle {
    fn set_pixel_ratio(&mut self, ratio: f64);
    fn set_size(&mut self, width: f64, height: f64);
}

pub trait Graph {
    type Node: NodeRef;
    /// Relation set produced by `relates` and consumed by `set_alpha`.
    type Relates;

    fn node(&self, index: NodeIndex) -> Option<Self::Node>;
    fn node_count(&self) -> usize;
    fn relates(&self, targets: &[NodeIndex], query: RelationQuery) -> Self::Relates;
    /// Fade everything outside `relates`; `None` restores full opacity.
    fn set_alpha(&mut self, relates: Option<Self::Relates>);
}

pub type NodeOf<S> = <<S as SceneState>::Graph as Graph>::Node;

pub trait SceneState {
    type Renderer: RendererHandle;
    type Graph: Graph;

    fn camera(&self) -> CameraStatus;
    fn graph(&self) -> &Self::Graph;
    fn graph_mut(&mut self) -> &mut Self::Graph;
    fn update_status(&mut self, update: StatusUpdate<NodeOf<Self>>);
    /// Hit-test client coordinates; returns the node index under them, if any.
    fn pick(&mut self, renderer: &Self::Renderer, x: f64, y: f64) -> Option<NodeIndex>;
    /// Force a redraw on the next frame even if no status changed.
    fn mark_dirty(&mut self);
    fn render(&mut self, renderer: &mut Self::Renderer);
}

/// Drawable surface the loop sizes the renderer against.
pub trait Surface {
    /// `None` while the surface has no container to measure.
    fn viewport(&self) -> Option<Viewport>;
}
