//! Layout surface: the boundary between the box widget and whatever lays text out.
//!
//! The widget never reaches into a renderer directly. It creates, attaches and
//! removes nodes, and reads post-layout heights, through [`LayoutSurface`].
//! [`CellSurface`] is the in-memory implementation used by the terminal view.

pub mod cell;
pub mod probe;
pub mod wrap;

pub use cell::{CellSurface, Viewport};
pub use probe::ProbeGuard;
pub use wrap::wrap_text;

use std::fmt;
use thiserror::Error;

/// Handle to a node on a layout surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Wrap a raw arena index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Presentation flags that influence layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeStyle {
    /// Not painted. Still occupies layout space, like CSS `visibility: hidden`.
    pub hidden: bool,
    /// Text only breaks at hard newlines.
    pub nowrap: bool,
}

impl NodeStyle {
    /// Visible block whose text wraps at the container width.
    pub const BLOCK: NodeStyle = NodeStyle {
        hidden: false,
        nowrap: false,
    };

    /// Invisible, non-wrapping node used to measure one line of text.
    pub const PROBE: NodeStyle = NodeStyle {
        hidden: true,
        nowrap: true,
    };
}

/// Failures reported by a layout surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The handle does not name a live node (destroyed or from another surface).
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),

    /// `remove_child` was asked to detach a node from something that is not its parent.
    #[error("Node {child} is not a child of {parent}")]
    NotAChild {
        /// Expected parent.
        parent: NodeId,
        /// Node that was not found under `parent`.
        child: NodeId,
    },
}

/// Rendering capabilities the box widget consumes.
///
/// Heights are in pixels and reflect committed layout: a surface must only be
/// queried after the rows it reports on have been laid out.
pub trait LayoutSurface {
    /// Create a detached node holding `text`.
    fn create_node(&mut self, text: &str, style: NodeStyle) -> NodeId;

    /// Destroy a node and everything under it, detaching it first if needed.
    fn destroy_node(&mut self, node: NodeId) -> Result<(), SurfaceError>;

    /// Attach `child` as the last child of `parent`, moving it if already attached.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SurfaceError>;

    /// Detach `child` from `parent`.
    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SurfaceError>;

    /// Rendered height in pixels. Detached nodes have no layout and report 0.
    fn offset_height(&self, node: NodeId) -> Result<f64, SurfaceError>;

    /// Concatenated text of the node and its descendants.
    fn text_content(&self, node: NodeId) -> Result<String, SurfaceError>;

    /// Whether the node is reachable from the surface root.
    fn is_attached(&self, node: NodeId) -> bool;

    /// Number of live nodes, attached or not.
    fn node_count(&self) -> usize;
}

/// The rendered row handles handed to the widget after one render commit.
///
/// All handles in a set share a generation. The generation changes whenever the
/// entry list behind the rows changes, which is how the widget tells a new row
/// set from a repaint of the old one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowSet {
    generation: u64,
    rows: Vec<NodeId>,
}

impl RowSet {
    /// Row handles in entry order, stamped with `generation`.
    pub fn new(generation: u64, rows: Vec<NodeId>) -> Self {
        Self { generation, rows }
    }

    /// Generation of the entry list these rows were rendered from.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// First row, the sample used for line-height measurement.
    pub fn first(&self) -> Option<NodeId> {
        self.rows.first().copied()
    }

    /// Row handles in order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.rows.iter().copied()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
