use crate::bindings::{get_number, set_field, Scene, SceneGraph, WebGLRenderer};
use js_sys::{Array, Object};
use viz_core::{
    CameraPatch, CameraStatus, Graph, NodeIndex, NodeRef, RelationQuery, RendererHandle,
    SceneState, Selection, StatusUpdate,
};
use wasm_bindgen::JsValue;

/// Node record from `graph.status.nodes`, compared by JS identity.
#[derive(Clone, Debug)]
pub struct JsNode {
    record: JsValue,
    index: NodeIndex,
}

impl JsNode {
    /// Wrap a record handed in from JavaScript; it must carry a numeric `index`.
    pub fn from_record(record: JsValue) -> anyhow::Result<Self> {
        let index = get_number(&record, "index")
            .filter(|v| *v >= 0.0)
            .ok_or_else(|| anyhow::anyhow!("node record has no valid `index`"))?;
        Ok(Self {
            record,
            index: index as NodeIndex,
        })
    }

    pub fn record(&self) -> &JsValue {
        &self.record
    }
}

impl PartialEq for JsNode {
    fn eq(&self, other: &Self) -> bool {
        Object::is(&self.record, &other.record)
    }
}

impl NodeRef for JsNode {
    fn index(&self) -> NodeIndex {
        self.index
    }
}

/// Classify a value passed to `toggleHit` from JavaScript.
pub fn selection_from_js(value: &JsValue) -> anyhow::Result<Selection<JsNode>> {
    if value.is_falsy() {
        return Ok(Selection::None);
    }
    if Array::is_array(value) {
        let indices = Array::from(value)
            .iter()
            .map(|v| {
                v.as_f64()
                    .filter(|i| *i >= 0.0)
                    .map(|i| i as NodeIndex)
                    .ok_or_else(|| anyhow::anyhow!("multi-selection entries must be node indices"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        return Ok(Selection::Multiple(indices));
    }
    Ok(Selection::Single(JsNode::from_record(value.clone())?))
}

fn selection_to_js(selection: &Selection<JsNode>) -> JsValue {
    match selection {
        Selection::None => JsValue::UNDEFINED,
        Selection::Single(node) => node.record().clone(),
        Selection::Multiple(indices) => indices
            .iter()
            .map(|i| JsValue::from_f64(*i as f64))
            .collect::<Array>()
            .into(),
    }
}

pub struct JsRenderer(pub WebGLRenderer);

impl RendererHandle for JsRenderer {
    fn set_pixel_ratio(&mut self, ratio: f64) {
        self.0.set_pixel_ratio(ratio);
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.0.set_size(width, height);
    }
}

pub struct JsGraph {
    inner: SceneGraph,
}

impl JsGraph {
    fn nodes(&self) -> JsValue {
        js_sys::Reflect::get(&self.inner.status(), &JsValue::from_str("nodes"))
            .unwrap_or(JsValue::UNDEFINED)
    }
}

impl Graph for JsGraph {
    type Node = JsNode;
    type Relates = JsValue;

    fn node(&self, index: NodeIndex) -> Option<JsNode> {
        let nodes = self.nodes();
        if nodes.is_undefined() || nodes.is_null() {
            return None;
        }
        let record = js_sys::Reflect::get_u32(&nodes, index as u32).ok()?;
        if record.is_undefined() || record.is_null() {
            return None;
        }
        Some(JsNode { record, index })
    }

    fn node_count(&self) -> usize {
        get_number(&self.nodes(), "length").map_or(0, |n| n as usize)
    }

    fn relates(&self, targets: &[NodeIndex], query: RelationQuery) -> JsValue {
        let targets = targets
            .iter()
            .map(|i| JsValue::from_f64(*i as f64))
            .collect::<Array>();
        self.inner
            .get_relates(&targets, query.incoming, query.outgoing, query.restrict)
    }

    fn set_alpha(&mut self, relates: Option<JsValue>) {
        self.inner
            .set_alpha(&relates.unwrap_or(JsValue::UNDEFINED));
    }
}

pub struct JsScene {
    scene: Scene,
    graph: JsGraph,
}

impl JsScene {
    pub fn new(scene: Scene) -> Self {
        let graph = JsGraph {
            inner: scene.graph(),
        };
        Self { scene, graph }
    }

    fn push(&self, section: &str, fields: &[(&str, JsValue)]) -> anyhow::Result<()> {
        let inner = Object::new();
        for (key, value) in fields {
            set_field(&inner, key, value)?;
        }
        let partial = Object::new();
        set_field(&partial, section, &inner)?;
        self.scene.update_status(&partial);
        Ok(())
    }
}

impl SceneState for JsScene {
    type Renderer = JsRenderer;
    type Graph = JsGraph;

    fn camera(&self) -> CameraStatus {
        let status: JsValue = self.scene.camera().status().into();
        let d = CameraStatus::default();
        let read = |key: &str, fallback: f64| get_number(&status, key).unwrap_or(fallback);
        CameraStatus {
            x: read("x", d.x),
            y: read("y", d.y),
            scale: read("scale", d.scale),
            width: read("width", d.width),
            height: read("height", d.height),
            pixel_ratio: read("pixelRatio", d.pixel_ratio),
        }
    }

    fn graph(&self) -> &JsGraph {
        &self.graph
    }

    fn graph_mut(&mut self) -> &mut JsGraph {
        &mut self.graph
    }

    fn update_status(&mut self, update: StatusUpdate<JsNode>) {
        let result = match update {
            StatusUpdate::Camera(patch) => self.push("camera", &camera_fields(&patch)),
            StatusUpdate::Pick(selection) => {
                self.push("graph", &[("pick", selection_to_js(&selection))])
            }
            StatusUpdate::Hover(hit) => {
                let hit = hit.map_or(JsValue::NULL, |i| JsValue::from_f64(i as f64));
                self.push("graph", &[("hit", hit)])
            }
        };
        if let Err(e) = result {
            log::warn!("[scene] updateStatus failed: {:?}", e);
        }
    }

    fn pick(&mut self, renderer: &JsRenderer, x: f64, y: f64) -> Option<NodeIndex> {
        self.scene
            .pick(&renderer.0, x, y)
            .as_f64()
            .filter(|i| *i >= 0.0)
            .map(|i| i as NodeIndex)
    }

    fn mark_dirty(&mut self) {
        self.scene.set_need_render(true);
    }

    fn render(&mut self, renderer: &mut JsRenderer) {
        self.scene.render(&renderer.0);
    }
}

fn camera_fields(patch: &CameraPatch) -> Vec<(&'static str, JsValue)> {
    [
        ("x", patch.x),
        ("y", patch.y),
        ("scale", patch.scale),
        ("width", patch.width),
        ("height", patch.height),
        ("pixelRatio", patch.pixel_ratio),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.map(|v| (key, JsValue::from_f64(v))))
    .collect()
}
