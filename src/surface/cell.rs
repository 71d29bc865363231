//! In-memory layout surface for the terminal view.
//!
//! Lays text out in simulated pixels so that font size has a real effect on
//! wrapping: glyph advance and line height both scale with the font, while the
//! container width is a fixed share of the terminal width.

use super::wrap::wrap_text;
use super::{LayoutSurface, NodeId, NodeStyle, RowSet, SurfaceError};
use crate::model::{EntryList, FontSize};
use tracing::trace;

/// Pixel width of one terminal cell, the advance of a 16px glyph.
pub const CELL_WIDTH_PX: f64 = 9.6;

/// Glyph advance per display column as a fraction of the font size.
pub const ADVANCE_RATIO: f64 = 0.6;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_RATIO: f64 = 1.25;

/// Container border width on each side, in pixels.
pub const BORDER_PX: f64 = 2.0;

/// Terminal width and the share of it the container occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Terminal width in cells.
    pub cols: u16,
    /// Container width as a percentage of the terminal width, 1..=100.
    pub width_percent: u8,
}

impl Viewport {
    /// Build a viewport, clamping the percentage into 1..=100.
    pub fn new(cols: u16, width_percent: u8) -> Self {
        Self {
            cols,
            width_percent: width_percent.clamp(1, 100),
        }
    }

    /// Width available to text inside the container border, in pixels.
    pub fn content_width_px(self) -> f64 {
        let outer = f64::from(self.cols) * CELL_WIDTH_PX * f64::from(self.width_percent) / 100.0;
        (outer - 2.0 * BORDER_PX).max(0.0)
    }
}

#[derive(Debug)]
struct Node {
    text: String,
    style: NodeStyle,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena of nodes rooted at a single container.
#[derive(Debug)]
pub struct CellSurface {
    nodes: Vec<Option<Node>>,
    root: NodeId,
    font_size: FontSize,
    content_width_px: f64,
}

impl CellSurface {
    /// Empty surface holding only the container.
    pub fn new(font_size: FontSize, viewport: Viewport) -> Self {
        let root = Node {
            text: String::new(),
            style: NodeStyle::BLOCK,
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![Some(root)],
            root: NodeId::new(0),
            font_size,
            content_width_px: viewport.content_width_px(),
        }
    }

    /// Render one block row per entry into a fresh container.
    ///
    /// Returns the surface and the row handles stamped with `generation`.
    pub fn mount(
        entries: &EntryList,
        font_size: FontSize,
        viewport: Viewport,
        generation: u64,
    ) -> (Self, RowSet) {
        let mut surface = Self::new(font_size, viewport);
        let root = surface.root;
        let rows = entries
            .iter()
            .map(|entry| {
                let row = surface.create_node(entry, NodeStyle::BLOCK);
                surface.attach_unchecked(root, row);
                row
            })
            .collect();
        trace!(
            rows = entries.len(),
            font_px = font_size.px(),
            columns = surface.columns(),
            "Mounted cell surface"
        );
        (surface, RowSet::new(generation, rows))
    }

    /// The container node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Font size the surface lays text out with.
    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    /// Display columns that fit on one line inside the container.
    pub fn columns(&self) -> usize {
        let advance = f64::from(self.font_size.px()) * ADVANCE_RATIO;
        ((self.content_width_px / advance).floor() as usize).max(1)
    }

    /// Height of one line of text, in pixels.
    pub fn line_height(&self) -> f64 {
        f64::from(self.font_size.px()) * LINE_HEIGHT_RATIO
    }

    /// Wrapped lines of a node's own text, as the view should paint them.
    pub fn lines_of(&self, node: NodeId) -> Result<Vec<String>, SurfaceError> {
        let node = self.get(node)?;
        if node.text.is_empty() {
            return Ok(Vec::new());
        }
        if node.style.nowrap {
            // Newlines collapse to spaces, so a nowrap node is always one line.
            return Ok(vec![node.text.replace('\n', " ")]);
        }
        Ok(wrap_text(&node.text, self.columns()))
    }

    fn get(&self, id: NodeId) -> Result<&Node, SurfaceError> {
        self.nodes
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(SurfaceError::UnknownNode(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node, SurfaceError> {
        self.nodes
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(SurfaceError::UnknownNode(id))
    }

    // Both ids are known live.
    fn attach_unchecked(&mut self, parent: NodeId, child: NodeId) {
        if let Some(Some(node)) = self.nodes.get_mut(child.index()) {
            node.parent = Some(parent);
        }
        if let Some(Some(node)) = self.nodes.get_mut(parent.index()) {
            node.children.push(child);
        }
    }

    fn detach(&mut self, child: NodeId) -> Result<(), SurfaceError> {
        let parent = self.get_mut(child)?.parent.take();
        if let Some(parent) = parent {
            self.get_mut(parent)?.children.retain(|&c| c != child);
        }
        Ok(())
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == candidate {
                return true;
            }
            match self.get(node).ok().and_then(|n| n.parent) {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    fn layout_height(&self, id: NodeId) -> Result<f64, SurfaceError> {
        let node = self.get(id)?;
        let own_lines = self.lines_of(id)?.len();
        let mut height = own_lines as f64 * self.line_height();
        for &child in &node.children {
            height += self.layout_height(child)?;
        }
        Ok(height)
    }
}

impl LayoutSurface for CellSurface {
    fn create_node(&mut self, text: &str, style: NodeStyle) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Some(Node {
            text: text.to_string(),
            style,
            parent: None,
            children: Vec::new(),
        }));
        id
    }

    fn destroy_node(&mut self, node: NodeId) -> Result<(), SurfaceError> {
        self.detach(node)?;
        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            if let Some(removed) = self.nodes.get_mut(id.index()).and_then(Option::take) {
                pending.extend(removed.children);
            }
        }
        Ok(())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SurfaceError> {
        self.get(parent)?;
        self.get(child)?;
        if self.is_ancestor_or_self(child, parent) {
            // Attaching a node under itself would make a cycle.
            return Err(SurfaceError::NotAChild { parent, child });
        }
        self.detach(child)?;
        self.attach_unchecked(parent, child);
        Ok(())
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SurfaceError> {
        self.get(parent)?;
        if self.get(child)?.parent != Some(parent) {
            return Err(SurfaceError::NotAChild { parent, child });
        }
        self.detach(child)
    }

    fn offset_height(&self, node: NodeId) -> Result<f64, SurfaceError> {
        self.get(node)?;
        if !self.is_attached(node) {
            return Ok(0.0);
        }
        self.layout_height(node)
    }

    fn text_content(&self, node: NodeId) -> Result<String, SurfaceError> {
        let n = self.get(node)?;
        let mut text = n.text.clone();
        for &child in &n.children {
            text.push_str(&self.text_content(child)?);
        }
        Ok(text)
    }

    fn is_attached(&self, node: NodeId) -> bool {
        self.get(node).is_ok() && self.is_ancestor_or_self(self.root, node)
    }

    fn node_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }
}
