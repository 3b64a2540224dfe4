//! Layout dependency graph.
//!
//! Every element on the poster is placed relative to another one: the album
//! name hangs below the cover, the artist below the album name, the date off
//! the end of the divider line. Each [`LayoutNode`] records what it is
//! anchored to and the offset applied after anchoring. [`LayoutGraph::resolve`]
//! orders the nodes topologically and computes every reference point and
//! final position in a single pass.

use std::collections::{HashMap, VecDeque};

use apg_core::LayoutError;
use glam::Vec2;

/// Unique identifier for a layout node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutNodeId(pub u32);

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create bounds from position and size vectors.
    pub fn from_vecs(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Compute intersection with another bounds.
    pub fn intersect(&self, other: &Bounds) -> Option<Bounds> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x1 < x2 && y1 < y2 {
            Some(Bounds::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Inset bounds by a uniform amount.
    pub fn inset(&self, amount: f32) -> Bounds {
        Bounds::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }
}

/// What a node's reference point is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// A fixed canvas coordinate.
    Absolute(Vec2),
    /// The final position (reference point + offset) of another node.
    PositionOf(LayoutNodeId),
    /// The reference point of another node, ignoring its offset.
    ReferenceOf(LayoutNodeId),
    /// The bottom-left corner of another node's box.
    BottomLeftOf(LayoutNodeId),
}

impl Anchor {
    fn dependency(&self) -> Option<LayoutNodeId> {
        match *self {
            Anchor::Absolute(_) => None,
            Anchor::PositionOf(id) | Anchor::ReferenceOf(id) | Anchor::BottomLeftOf(id) => Some(id),
        }
    }
}

/// A node in the layout graph.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub id: LayoutNodeId,
    /// Name for diagnostics.
    pub name: String,
    pub anchor: Anchor,
    pub offset: Vec2,
    /// Measured size of the element this node places.
    pub size: Vec2,
}

impl LayoutNode {
    /// Create a node anchored at the canvas origin.
    pub fn new(id: LayoutNodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            anchor: Anchor::Absolute(Vec2::ZERO),
            offset: Vec2::ZERO,
            size: Vec2::ZERO,
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }
}

/// A resolved node: where it is anchored and where it ends up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedNode {
    pub reference_point: Vec2,
    pub offset: Vec2,
    pub size: Vec2,
}

impl ResolvedNode {
    /// Reference point plus offset.
    pub fn position(&self) -> Vec2 {
        self.reference_point + self.offset
    }

    /// Box spanned by the node at its final position.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_vecs(self.position(), self.size)
    }
}

/// Graph of layout nodes, resolved in one topological pass.
#[derive(Debug, Clone, Default)]
pub struct LayoutGraph {
    nodes: Vec<LayoutNode>,
    next_id: u32,
}

impl LayoutGraph {
    /// Create an empty layout graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique node ID.
    pub fn next_id(&mut self) -> LayoutNodeId {
        let id = LayoutNodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a node built by the caller.
    pub fn add(&mut self, node: LayoutNode) -> LayoutNodeId {
        let id = node.id;
        self.nodes.push(node);
        id
    }

    /// Shorthand: allocate an id and add a node in one call.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        anchor: Anchor,
        offset: Vec2,
        size: Vec2,
    ) -> LayoutNodeId {
        let id = self.next_id();
        self.add(
            LayoutNode::new(id, name)
                .with_anchor(anchor)
                .with_offset(offset)
                .with_size(size),
        )
    }

    /// Order node indices so every node comes after the node it anchors on.
    fn topological_order(&self) -> Result<Vec<usize>, LayoutError> {
        let index: HashMap<LayoutNodeId, usize> =
            self.nodes.iter().enumerate().map(|(i, n)| (n.id, i)).collect();

        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); self.nodes.len()];
        let mut pending = vec![0usize; self.nodes.len()];

        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(dep) = node.anchor.dependency() {
                let &dep_index = index.get(&dep).ok_or_else(|| LayoutError::UnknownNode {
                    node: node.name.clone(),
                })?;
                dependents[dep_index].push(i);
                pending[i] += 1;
            }
        }

        let mut ready: VecDeque<usize> = (0..self.nodes.len()).filter(|&i| pending[i] == 0).collect();
        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(i) = ready.pop_front() {
            order.push(i);
            for &next in &dependents[i] {
                pending[next] -= 1;
                if pending[next] == 0 {
                    ready.push_back(next);
                }
            }
        }

        if order.len() != self.nodes.len() {
            let stuck = pending
                .iter()
                .position(|&p| p > 0)
                .map(|i| self.nodes[i].name.clone())
                .unwrap_or_default();
            return Err(LayoutError::CycleDetected { node: stuck });
        }

        Ok(order)
    }

    /// Resolve every node's reference point and final position.
    pub fn resolve(&self) -> Result<ResolvedLayout, LayoutError> {
        let order = self.topological_order()?;
        let mut resolved: HashMap<LayoutNodeId, ResolvedNode> = HashMap::with_capacity(self.nodes.len());

        for i in order {
            let node = &self.nodes[i];
            let reference_point = match node.anchor {
                Anchor::Absolute(point) => point,
                Anchor::PositionOf(id) => lookup(&resolved, id, node)?.position(),
                Anchor::ReferenceOf(id) => lookup(&resolved, id, node)?.reference_point,
                Anchor::BottomLeftOf(id) => {
                    let target = lookup(&resolved, id, node)?;
                    target.position() + Vec2::new(0.0, target.size.y)
                }
            };
            resolved.insert(
                node.id,
                ResolvedNode {
                    reference_point,
                    offset: node.offset,
                    size: node.size,
                },
            );
        }

        Ok(ResolvedLayout { nodes: resolved })
    }
}

fn lookup(
    resolved: &HashMap<LayoutNodeId, ResolvedNode>,
    id: LayoutNodeId,
    from: &LayoutNode,
) -> Result<ResolvedNode, LayoutError> {
    resolved.get(&id).copied().ok_or_else(|| LayoutError::UnknownNode {
        node: from.name.clone(),
    })
}

/// Output of [`LayoutGraph::resolve`].
#[derive(Debug, Clone, Default)]
pub struct ResolvedLayout {
    nodes: HashMap<LayoutNodeId, ResolvedNode>,
}

impl ResolvedLayout {
    /// Get a resolved node by ID.
    pub fn get(&self, id: LayoutNodeId) -> Option<&ResolvedNode> {
        self.nodes.get(&id)
    }

    /// Get a resolved node, failing with the node's name when it is missing.
    pub fn require(&self, id: LayoutNodeId) -> Result<&ResolvedNode, LayoutError> {
        self.nodes.get(&id).ok_or_else(|| LayoutError::UnknownNode {
            node: format!("#{}", id.0),
        })
    }
}
