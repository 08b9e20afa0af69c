//! Source and layer management on the render surface

use pinmap_geo::{Circle, FeatureCollection, LngLat, Mask};
use pinmap_surface::{LayerKind, LayerSpec, RenderSurface, SurfaceError, Visibility};

use super::{LayerState, ServiceAreaEngine};

impl<S: RenderSurface> ServiceAreaEngine<S> {
    /// Register the two geometry sources and three styled layers
    pub(crate) fn install(&mut self) -> Result<(), SurfaceError> {
        self.surface
            .add_source(&self.config.source_id, FeatureCollection::empty())?;
        self.surface
            .add_source(&self.config.mask_source_id, FeatureCollection::empty())?;

        self.surface.add_layer(LayerSpec {
            id: self.config.border_layer_id.clone(),
            source: self.config.source_id.clone(),
            kind: LayerKind::Line,
            visibility: Visibility::Visible,
            paint: self.config.border_paint.clone(),
        })?;
        self.surface.add_layer(LayerSpec {
            id: self.config.fill_layer_id.clone(),
            source: self.config.source_id.clone(),
            kind: LayerKind::Fill,
            visibility: Visibility::Visible,
            paint: self.config.fill_paint.clone(),
        })?;
        self.surface.add_layer(LayerSpec {
            id: self.config.mask_layer_id.clone(),
            source: self.config.mask_source_id.clone(),
            kind: LayerKind::Fill,
            visibility: Visibility::Visible,
            paint: self.config.mask_paint.clone(),
        })?;

        Ok(())
    }

    /// Make the border, fill, and mask layers visible
    ///
    /// Geometry is left untouched: after a `hide()` the sources stay
    /// empty until the next recenter or drag provides new data.
    pub fn show(&mut self) {
        self.layer_state = LayerState::Visible;
        self.set_all_layers(Visibility::Visible);
    }

    /// Hide the layers and clear their geometry
    ///
    /// Clearing the sources here means a later `show()` cannot flash
    /// the stale pre-hide circle while new data is on its way. The
    /// committed region is dropped with them; the stored radius
    /// survives for the next recenter.
    pub fn hide(&mut self) {
        self.layer_state = LayerState::Hidden;
        self.set_all_layers(Visibility::None);

        self.circle = None;
        self.hovering = false;
        let _ = self
            .surface
            .set_source_data(&self.config.source_id, FeatureCollection::empty());
        let _ = self
            .surface
            .set_source_data(&self.config.mask_source_id, FeatureCollection::empty());
    }

    fn set_all_layers(&mut self, visibility: Visibility) {
        // Missing layers mean the surface was torn down under us;
        // treated the same as a missing source on push.
        let _ = self
            .surface
            .set_layer_visibility(&self.config.border_layer_id, visibility);
        let _ = self
            .surface
            .set_layer_visibility(&self.config.fill_layer_id, visibility);
        let _ = self
            .surface
            .set_layer_visibility(&self.config.mask_layer_id, visibility);
    }

    /// Recompute the mask and push both geometries to the surface
    ///
    /// Runs on every drag move, so it stays synchronous and O(ring
    /// length). Pushes to a source the surface does not (yet) know are
    /// dropped: map initialization order is not guaranteed relative to
    /// layer construction.
    pub(crate) fn push_region(&mut self, circle: &Circle) {
        let mask = Mask::around(circle);

        let _ = self.surface.set_source_data(
            &self.config.source_id,
            FeatureCollection::single(circle.to_feature()),
        );
        let _ = self.surface.set_source_data(
            &self.config.mask_source_id,
            FeatureCollection::single(mask.to_feature()),
        );
    }

    /// Rebuild the region at a new center and push it
    ///
    /// Returns false without touching the committed geometry when the
    /// center is out of range (a drag can momentarily leave the valid
    /// coordinate space at the poles; such moves are skipped).
    pub(crate) fn move_region_to(&mut self, center: LngLat) -> bool {
        match Circle::new(center, self.radius, self.unit) {
            Ok(circle) => {
                self.push_region(&circle);
                self.circle = Some(circle);
                true
            }
            Err(_) => false,
        }
    }
}
