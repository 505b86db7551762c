use smallvec::{smallvec, SmallVec};

use crate::scene::{NodeIndex, NodeRef, RelationQuery};

/// What a click or an external search selected.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<N> {
    None,
    Single(N),
    /// Multi-select by node index, as produced by searches.
    Multiple(Vec<NodeIndex>),
}

impl<N> Default for Selection<N> {
    fn default() -> Self {
        Selection::None
    }
}

impl<N: NodeRef> Selection<N> {
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Selection::Multiple(_))
    }

    /// Node indices the relation lookup starts from.
    pub fn targets(&self) -> SmallVec<[NodeIndex; 1]> {
        match self {
            Selection::None => SmallVec::new(),
            Selection::Single(node) => smallvec![node.index()],
            Selection::Multiple(indices) => SmallVec::from_slice(indices),
        }
    }
}

/// Highlight style; repeated clicks on the same target walk through the cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HighlightMode {
    #[default]
    Cleared,
    Related,
    Outgoing,
    Incoming,
}

impl HighlightMode {
    pub fn next(self) -> Self {
        match self {
            HighlightMode::Cleared => HighlightMode::Related,
            HighlightMode::Related => HighlightMode::Outgoing,
            HighlightMode::Outgoing => HighlightMode::Incoming,
            HighlightMode::Incoming => HighlightMode::Cleared,
        }
    }

    /// Position in the cycle as exposed to JavaScript (0 = cleared).
    pub fn as_index(self) -> u8 {
        match self {
            HighlightMode::Cleared => 0,
            HighlightMode::Related => 1,
            HighlightMode::Outgoing => 2,
            HighlightMode::Incoming => 3,
        }
    }

    pub fn is_active(self) -> bool {
        self != HighlightMode::Cleared
    }

    /// Relation filters for this mode; `None` means clear the highlight.
    pub fn query(self, multiple: bool) -> Option<RelationQuery> {
        match self {
            HighlightMode::Cleared => None,
            HighlightMode::Related => Some(RelationQuery {
                incoming: !multiple,
                outgoing: !multiple,
                restrict: false,
            }),
            HighlightMode::Outgoing => Some(RelationQuery {
                incoming: false,
                outgoing: true,
                restrict: !multiple,
            }),
            HighlightMode::Incoming => Some(RelationQuery {
                incoming: true,
                outgoing: false,
                restrict: !multiple,
            }),
        }
    }
}

/// What the graph should do after a toggle.
#[derive(Clone, Debug, PartialEq)]
pub enum Highlight {
    Clear,
    Relates {
        targets: SmallVec<[NodeIndex; 1]>,
        query: RelationQuery,
    },
}

/// Remembered selection target and its position in the highlight cycle.
#[derive(Clone, Debug)]
pub struct HitInfo<N> {
    hit: Option<Selection<N>>,
    mode: HighlightMode,
}

impl<N> Default for HitInfo<N> {
    fn default() -> Self {
        Self {
            hit: None,
            mode: HighlightMode::Cleared,
        }
    }
}

impl<N: NodeRef> HitInfo<N> {
    pub fn mode(&self) -> HighlightMode {
        self.mode
    }

    pub fn hit(&self) -> Option<&Selection<N>> {
        self.hit.as_ref()
    }

    /// Advance the cycle for a repeated target, or restart it for a new one,
    /// and return the highlight to apply.
    pub fn toggle(&mut self, selection: &Selection<N>) -> Highlight {
        if self.hit.as_ref() == Some(selection) {
            self.mode = self.mode.next();
        } else {
            self.hit = Some(selection.clone());
            self.mode = HighlightMode::Related;
        }

        if selection.is_none() {
            return Highlight::Clear;
        }
        match self.mode.query(selection.is_multiple()) {
            Some(query) => Highlight::Relates {
                targets: selection.targets(),
                query,
            },
            None => Highlight::Clear,
        }
    }

    /// Selection to publish as the scene's pick: the target while a highlight
    /// is active, nothing once the cycle is back at `Cleared`.
    pub fn published(&self) -> Selection<N> {
        match &self.hit {
            Some(hit) if self.mode.is_active() => hit.clone(),
            _ => Selection::None,
        }
    }
}
