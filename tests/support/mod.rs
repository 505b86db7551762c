// In-memory collaborators that record every call the controller makes.

#![allow(dead_code)]

use viz_core::*;

#[derive(Clone, Debug, PartialEq)]
pub struct FakeNode {
    pub index: NodeIndex,
    pub name: &'static str,
}

impl NodeRef for FakeNode {
    fn index(&self) -> NodeIndex {
        self.index
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FakeRelates {
    pub targets: Vec<NodeIndex>,
    pub query: RelationQuery,
}

#[derive(Default)]
pub struct FakeGraph {
    pub nodes: Vec<FakeNode>,
    pub alpha_calls: Vec<Option<FakeRelates>>,
}

impl Graph for FakeGraph {
    type Node = FakeNode;
    type Relates = FakeRelates;

    fn node(&self, index: NodeIndex) -> Option<FakeNode> {
        self.nodes.get(index).cloned()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn relates(&self, targets: &[NodeIndex], query: RelationQuery) -> FakeRelates {
        FakeRelates {
            targets: targets.to_vec(),
            query,
        }
    }

    fn set_alpha(&mut self, relates: Option<FakeRelates>) {
        self.alpha_calls.push(relates);
    }
}

#[derive(Default)]
pub struct FakeRenderer {
    pub pixel_ratios: Vec<f64>,
    pub sizes: Vec<(f64, f64)>,
}

impl RendererHandle for FakeRenderer {
    fn set_pixel_ratio(&mut self, ratio: f64) {
        self.pixel_ratios.push(ratio);
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.sizes.push((width, height));
    }
}

#[derive(Default)]
pub struct FakeScene {
    pub status: CameraStatus,
    pub graph: FakeGraph,
    pub updates: Vec<StatusUpdate<FakeNode>>,
    pub pick_result: Option<NodeIndex>,
    pub picks: Vec<(f64, f64)>,
    pub dirty_marks: usize,
    pub renders: usize,
}

impl FakeScene {
    pub fn with_nodes(names: &[&'static str]) -> Self {
        let nodes = names
            .iter()
            .enumerate()
            .map(|(index, name)| FakeNode { index, name })
            .collect();
        Self {
            graph: FakeGraph {
                nodes,
                ..FakeGraph::default()
            },
            ..Self::default()
        }
    }

    pub fn camera_updates(&self) -> Vec<CameraPatch> {
        self.updates
            .iter()
            .filter_map(|u| match u {
                StatusUpdate::Camera(patch) => Some(*patch),
                _ => None,
            })
            .collect()
    }

    pub fn last_update(&self) -> Option<&StatusUpdate<FakeNode>> {
        self.updates.last()
    }
}

impl SceneState for FakeScene {
    type Renderer = FakeRenderer;
    type Graph = FakeGraph;

    fn camera(&self) -> CameraStatus {
        self.status
    }

    fn graph(&self) -> &FakeGraph {
        &self.graph
    }

    fn graph_mut(&mut self) -> &mut FakeGraph {
        &mut self.graph
    }

    fn update_status(&mut self, update: StatusUpdate<FakeNode>) {
        if let StatusUpdate::Camera(patch) = &update {
            self.status.apply(patch);
        }
        self.updates.push(update);
    }

    fn pick(&mut self, _renderer: &FakeRenderer, x: f64, y: f64) -> Option<NodeIndex> {
        self.picks.push((x, y));
        self.pick_result
    }

    fn mark_dirty(&mut self) {
        self.dirty_marks += 1;
    }

    fn render(&mut self, _renderer: &mut FakeRenderer) {
        self.renders += 1;
    }
}

#[derive(Default)]
pub struct CountingScheduler {
    pub requests: usize,
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) {
        self.requests += 1;
    }
}

pub struct FixedSurface {
    pub viewport: Option<Viewport>,
}

impl Surface for FixedSurface {
    fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }
}

pub fn controller(scene: FakeScene) -> InputController<FakeScene> {
    InputController::new(scene, FakeRenderer::default(), ControllerConfig::default())
        .expect("default config is valid")
}

pub fn viewport(width: f64, height: f64, pixel_ratio: f64) -> Viewport {
    Viewport {
        width,
        height,
        pixel_ratio,
    }
}
