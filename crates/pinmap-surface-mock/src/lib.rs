//! Mock render surface for testing the layer engine
//!
//! Records every mutation the engine performs (source payloads, layer
//! visibility, cursor changes, camera fit requests) so tests can assert
//! on the surface state without a real map renderer. Camera transitions
//! never settle on their own; tests decide when to report idle to the
//! engine, which is what makes the settle-continuation path
//! deterministic.

use std::collections::BTreeMap;

use pinmap_geo::{Extent, FeatureCollection};
use pinmap_surface::{Cursor, FitOptions, LayerSpec, RenderSurface, SurfaceError, Visibility};

/// Recording render surface for unit and integration tests
#[derive(Debug, Default)]
pub struct MockSurface {
    /// Current payload per source id
    sources: BTreeMap<String, FeatureCollection>,
    /// Registered layers by id
    layers: BTreeMap<String, LayerSpec>,
    /// Source ids in the order payloads were replaced
    push_log: Vec<String>,
    /// Every cursor change, oldest first
    cursor_log: Vec<Cursor>,
    /// Every fit-to-bounds request, oldest first
    fit_requests: Vec<(Extent, FitOptions)>,
}

impl MockSurface {
    /// Create an empty mock surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Current payload of a source
    pub fn source_data(&self, id: &str) -> Option<&FeatureCollection> {
        self.sources.get(id)
    }

    /// Registered layer spec
    pub fn layer(&self, id: &str) -> Option<&LayerSpec> {
        self.layers.get(id)
    }

    /// Current visibility of a layer
    pub fn layer_visibility(&self, id: &str) -> Option<Visibility> {
        self.layers.get(id).map(|l| l.visibility)
    }

    /// Number of payload replacements a source has received
    pub fn pushes_to(&self, id: &str) -> usize {
        self.push_log.iter().filter(|s| s.as_str() == id).count()
    }

    /// Most recent cursor change, if any
    pub fn last_cursor(&self) -> Option<Cursor> {
        self.cursor_log.last().copied()
    }

    /// All cursor changes, oldest first
    pub fn cursor_log(&self) -> &[Cursor] {
        &self.cursor_log
    }

    /// All fit-to-bounds requests, oldest first
    pub fn fit_requests(&self) -> &[(Extent, FitOptions)] {
        &self.fit_requests
    }

    /// Drop a source, simulating a renderer that lost (or never
    /// finished) its initialization
    pub fn remove_source(&mut self, id: &str) {
        self.sources.remove(id);
    }
}

impl RenderSurface for MockSurface {
    fn add_source(&mut self, id: &str, data: FeatureCollection) -> Result<(), SurfaceError> {
        if self.sources.contains_key(id) {
            return Err(SurfaceError::DuplicateSource(id.to_string()));
        }
        self.sources.insert(id.to_string(), data);
        Ok(())
    }

    fn set_source_data(&mut self, id: &str, data: FeatureCollection) -> Result<(), SurfaceError> {
        match self.sources.get_mut(id) {
            Some(slot) => {
                *slot = data;
                self.push_log.push(id.to_string());
                Ok(())
            }
            None => Err(SurfaceError::SourceNotFound(id.to_string())),
        }
    }

    fn add_layer(&mut self, spec: LayerSpec) -> Result<(), SurfaceError> {
        if self.layers.contains_key(&spec.id) {
            return Err(SurfaceError::DuplicateLayer(spec.id));
        }
        if !self.sources.contains_key(&spec.source) {
            return Err(SurfaceError::SourceNotFound(spec.source));
        }
        self.layers.insert(spec.id.clone(), spec);
        Ok(())
    }

    fn set_layer_visibility(
        &mut self,
        id: &str,
        visibility: Visibility,
    ) -> Result<(), SurfaceError> {
        match self.layers.get_mut(id) {
            Some(layer) => {
                layer.visibility = visibility;
                Ok(())
            }
            None => Err(SurfaceError::LayerNotFound(id.to_string())),
        }
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor_log.push(cursor);
    }

    fn fit_bounds(&mut self, extent: Extent, options: FitOptions) -> Result<(), SurfaceError> {
        self.fit_requests.push((extent, options));
        Ok(())
    }
}
