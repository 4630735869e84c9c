//! Articulated model: vertex pool, segment arena and the tree they form

use glam::Vec3;
use log::{debug, warn};

use crate::common::{BOX_FACE_COUNT, SegmentIndex, SurfaceMode};
use crate::error::{LinkKind, ModelError, Result};
use crate::segment::Segment;

/// A validated articulated object.
///
/// Segments live in a flat list and refer to each other by index. The
/// sibling/child links are checked on construction to form a single tree
/// rooted at `root`, so traversal never needs to guard against cycles.
/// Topology is fixed after construction; only pose state (held elsewhere)
/// changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    vertices: Vec<Vec3>,
    segments: Vec<Segment>,
    root: SegmentIndex,
    surface_mode: SurfaceMode,
    /// Parent of each segment, `None` for the root
    parents: Vec<Option<SegmentIndex>>,
    depths: Vec<usize>,
    /// Pre-order: parent, then its child subtree, then its siblings
    order: Vec<SegmentIndex>,
}

impl Model {
    /// Build and validate a model
    ///
    /// Fails on the first violated invariant: face indices outside the
    /// vertex pool, colour/face count mismatch, inverted angle limits,
    /// dangling or self links, and any link graph that is not one tree
    /// covering every segment exactly once.
    pub fn new(
        vertices: Vec<Vec3>,
        segments: Vec<Segment>,
        root: SegmentIndex,
        surface_mode: SurfaceMode,
    ) -> Result<Self> {
        if segments.is_empty() {
            return Err(ModelError::EmptyModel);
        }

        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(ModelError::NonFiniteVertex { index });
        }

        for (index, segment) in segments.iter().enumerate() {
            validate_segment(index, segment, vertices.len(), segments.len())?;
        }

        let count = segments.len();
        if root >= count {
            return Err(ModelError::RootOutOfRange { root, count });
        }
        if let Some(sibling) = segments[root].sibling {
            return Err(ModelError::RootHasSibling { root, sibling });
        }

        let TreeWalk {
            order,
            parents,
            depths,
        } = walk_tree(&segments, root)?;

        debug!(
            "Built model: {} vertices, {} segments, root {}",
            vertices.len(),
            count,
            root
        );

        Ok(Self {
            vertices,
            segments,
            root,
            surface_mode,
            parents,
            depths,
            order,
        })
    }

    /// Shared vertex pool
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, index: SegmentIndex) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Like [`Model::segment`], but an out-of-range index is an error
    pub fn try_segment(&self, index: SegmentIndex) -> Result<&Segment> {
        self.segments
            .get(index)
            .ok_or(ModelError::SegmentOutOfRange {
                index,
                count: self.segments.len(),
            })
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn root(&self) -> SegmentIndex {
        self.root
    }

    pub fn surface_mode(&self) -> SurfaceMode {
        self.surface_mode
    }

    /// Segment indices in depth-first pre-order from the root
    pub fn traversal_order(&self) -> &[SegmentIndex] {
        &self.order
    }

    pub fn parent_of(&self, index: SegmentIndex) -> Option<SegmentIndex> {
        self.parents.get(index).copied().flatten()
    }

    /// Direct children, first child first
    pub fn children_of(&self, index: SegmentIndex) -> Vec<SegmentIndex> {
        let mut children = Vec::new();
        let mut cursor = self.segments.get(index).and_then(|s| s.child);
        while let Some(child) = cursor {
            children.push(child);
            cursor = self.segments[child].sibling;
        }
        children
    }

    /// Number of ancestors between a segment and the root (root is 0)
    pub fn depth_of(&self, index: SegmentIndex) -> usize {
        self.depths.get(index).copied().unwrap_or(0)
    }

    /// Depth of the deepest segment
    pub fn max_depth(&self) -> usize {
        self.depths.iter().copied().max().unwrap_or(0)
    }

    /// First segment whose name matches exactly
    pub fn find_segment(&self, name: &str) -> Option<SegmentIndex> {
        self.segments
            .iter()
            .position(|s| s.name.as_deref() == Some(name))
    }

    /// Total number of faces over all segments
    pub fn face_count(&self) -> usize {
        self.segments.iter().map(Segment::face_count).sum()
    }
}

fn validate_segment(
    index: SegmentIndex,
    segment: &Segment,
    pool_len: usize,
    count: usize,
) -> Result<()> {
    if segment.colors.len() != segment.topology.len() {
        return Err(ModelError::ColorCountMismatch {
            segment: index,
            faces: segment.topology.len(),
            colors: segment.colors.len(),
        });
    }

    for (face_index, face) in segment.topology.iter().enumerate() {
        if let Some(&vertex) = face.iter().find(|&&v| v >= pool_len) {
            return Err(ModelError::VertexOutOfRange {
                segment: index,
                face: face_index,
                index: vertex,
                pool_len,
            });
        }
    }

    if segment.topology.len() != BOX_FACE_COUNT {
        warn!(
            "Segment {} has {} faces; box renderers expect {}",
            index,
            segment.topology.len(),
            BOX_FACE_COUNT
        );
    }

    if !segment.joint.is_finite() {
        return Err(ModelError::NonFiniteJoint { segment: index });
    }

    let (min, max) = (segment.angle_min, segment.angle_max);
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(ModelError::InvalidAngleRange {
            segment: index,
            min,
            max,
        });
    }

    for (link, target) in [
        (LinkKind::Sibling, segment.sibling),
        (LinkKind::Child, segment.child),
    ] {
        let Some(target) = target else { continue };
        if target >= count {
            return Err(ModelError::LinkOutOfRange {
                segment: index,
                link,
                target,
                count,
            });
        }
        if target == index {
            return Err(ModelError::SelfLink {
                segment: index,
                link,
            });
        }
    }

    Ok(())
}

struct TreeWalk {
    order: Vec<SegmentIndex>,
    parents: Vec<Option<SegmentIndex>>,
    depths: Vec<usize>,
}

/// Walk child-then-sibling links from the root, rejecting any segment
/// reached twice and any segment never reached.
fn walk_tree(segments: &[Segment], root: SegmentIndex) -> Result<TreeWalk> {
    let count = segments.len();
    let mut visited = vec![false; count];
    let mut parents = vec![None; count];
    let mut depths = vec![0; count];
    let mut order = Vec::with_capacity(count);
    let mut stack: Vec<(SegmentIndex, Option<SegmentIndex>, usize)> = vec![(root, None, 0)];

    while let Some((index, parent, depth)) = stack.pop() {
        if visited[index] {
            return Err(ModelError::CycleDetected { segment: index });
        }
        visited[index] = true;
        parents[index] = parent;
        depths[index] = depth;
        order.push(index);

        let segment = &segments[index];
        // Sibling goes under the child so the child subtree is visited first
        if let Some(sibling) = segment.sibling {
            stack.push((sibling, parent, depth));
        }
        if let Some(child) = segment.child {
            stack.push((child, Some(index), depth + 1));
        }
    }

    if let Some(segment) = visited.iter().position(|&v| !v) {
        return Err(ModelError::Unreachable { segment, root });
    }

    Ok(TreeWalk {
        order,
        parents,
        depths,
    })
}
