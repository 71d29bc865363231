//! Scoped measurement probe.

use super::{LayoutSurface, NodeId, NodeStyle, SurfaceError};
use tracing::warn;

/// A hidden, non-wrapping node attached under `parent` for as long as the guard lives.
///
/// Dropping the guard removes and destroys the probe, so the node never
/// outlives the measurement regardless of how the caller exits.
pub struct ProbeGuard<'s, S: LayoutSurface + ?Sized> {
    surface: &'s mut S,
    parent: NodeId,
    probe: NodeId,
}

impl<'s, S: LayoutSurface + ?Sized> ProbeGuard<'s, S> {
    /// Create a probe holding `text` and attach it under `parent`.
    ///
    /// If attaching fails the probe is destroyed before the error is returned.
    pub fn attach(surface: &'s mut S, parent: NodeId, text: &str) -> Result<Self, SurfaceError> {
        let probe = surface.create_node(text, NodeStyle::PROBE);
        if let Err(err) = surface.append_child(parent, probe) {
            if let Err(cleanup) = surface.destroy_node(probe) {
                warn!(%probe, error = %cleanup, "Failed to destroy unattached probe");
            }
            return Err(err);
        }
        Ok(Self {
            surface,
            parent,
            probe,
        })
    }

    /// Handle of the probe node.
    pub fn node(&self) -> NodeId {
        self.probe
    }

    /// Rendered height of the probe.
    pub fn height(&self) -> Result<f64, SurfaceError> {
        self.surface.offset_height(self.probe)
    }
}

impl<S: LayoutSurface + ?Sized> Drop for ProbeGuard<'_, S> {
    fn drop(&mut self) {
        if let Err(err) = self.surface.remove_child(self.parent, self.probe) {
            warn!(probe = %self.probe, parent = %self.parent, error = %err, "Failed to detach probe");
        }
        if let Err(err) = self.surface.destroy_node(self.probe) {
            warn!(probe = %self.probe, error = %err, "Failed to destroy probe");
        }
    }
}
