//! Programmatic recenter, radius updates, and camera-settle callbacks

use pinmap_geo::{Circle, GeometryError, LngLat};
use pinmap_surface::{FitOptions, RenderSurface};

use super::ServiceAreaEngine;

impl<S: RenderSurface> ServiceAreaEngine<S> {
    /// Set the region center programmatically
    ///
    /// Recomputes and pushes the circle and mask, then starts a camera
    /// move fitting the circle's extent. `on_settled` receives the
    /// resulting circle exactly once, when the embedding reports the
    /// camera idle via [`handle_camera_idle`](Self::handle_camera_idle).
    ///
    /// Geometry errors (bad coordinate, and a bad stored radius would
    /// have been rejected by `set_radius`) propagate to the caller.
    pub fn set_center(
        &mut self,
        point: LngLat,
        on_settled: impl FnOnce(Circle) + 'static,
    ) -> Result<(), GeometryError> {
        let circle = Circle::new(point, self.radius, self.unit)?;

        self.push_region(&circle);
        let _ = self.surface.fit_bounds(
            circle.extent(),
            FitOptions {
                padding: self.config.fit_padding,
            },
        );

        let snapshot = circle.clone();
        self.settle_queue.push(Box::new(move || on_settled(snapshot)));
        self.circle = Some(circle);
        Ok(())
    }

    /// Change the region radius, keeping the center fixed
    ///
    /// When a center is set this recomputes and pushes both geometries
    /// through the same path a drag move uses; no camera move is
    /// started. With no center yet, the radius is stored for the next
    /// recenter or drag.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), GeometryError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }

        self.radius = radius;
        if let Some(center) = self.center() {
            self.move_region_to(center);
        }
        Ok(())
    }

    /// Report that the surface's camera finished its transition
    ///
    /// Drains the settle queue: every continuation queued by
    /// `set_center` since the last idle runs now, each exactly once,
    /// with the circle its call produced.
    pub fn handle_camera_idle(&mut self) {
        let queue = std::mem::take(&mut self.settle_queue);
        for continuation in queue {
            continuation();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayerConfig;
    use pinmap_surface_mock::MockSurface;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn engine() -> ServiceAreaEngine<MockSurface> {
        ServiceAreaEngine::new(MockSurface::new(), LayerConfig::default()).unwrap()
    }

    #[test]
    fn test_set_center_pushes_and_fits() {
        let mut engine = engine();
        engine
            .set_center(LngLat::new(-118.25, 34.05), |_| {})
            .unwrap();

        assert_eq!(engine.surface.pushes_to("shed"), 1);
        assert_eq!(engine.surface.pushes_to("shed-mask"), 1);

        let fits = engine.surface.fit_requests();
        assert_eq!(fits.len(), 1);
        let (extent, options) = fits[0];
        assert!((options.padding - 50.0).abs() < 0.001);
        assert!(extent.contains(LngLat::new(-118.25, 34.05)));
    }

    #[test]
    fn test_set_center_rejects_bad_point() {
        let mut engine = engine();
        let result = engine.set_center(LngLat::new(-200.0, 34.05), |_| {});
        assert!(matches!(
            result,
            Err(GeometryError::InvalidCoordinate { .. })
        ));
        assert!(engine.region().is_none());
        assert_eq!(engine.surface.pushes_to("shed"), 0);
    }

    #[test]
    fn test_settle_fires_exactly_once() {
        let mut engine = engine();
        let settled = Rc::new(RefCell::new(Vec::new()));

        let sink = settled.clone();
        engine
            .set_center(LngLat::new(-118.25, 34.05), move |circle| {
                sink.borrow_mut().push(circle.center());
            })
            .unwrap();
        assert!(settled.borrow().is_empty());

        engine.handle_camera_idle();
        assert_eq!(settled.borrow().len(), 1);
        assert!((settled.borrow()[0].lng - (-118.25)).abs() < 1e-9);

        // A later idle with nothing queued fires nothing
        engine.handle_camera_idle();
        assert_eq!(settled.borrow().len(), 1);
    }

    #[test]
    fn test_two_recenters_both_settle_once_each() {
        let mut engine = engine();
        let settled = Rc::new(RefCell::new(Vec::new()));

        for lng in [-118.25, -118.30] {
            let sink = settled.clone();
            engine
                .set_center(LngLat::new(lng, 34.05), move |circle| {
                    sink.borrow_mut().push(circle.center().lng);
                })
                .unwrap();
        }

        engine.handle_camera_idle();
        let settled = settled.borrow();
        assert_eq!(settled.len(), 2);
        // Each continuation saw the circle its own call produced
        assert!((settled[0] - (-118.25)).abs() < 1e-9);
        assert!((settled[1] - (-118.30)).abs() < 1e-9);
    }

    #[test]
    fn test_set_radius_recomputes_in_place() {
        let mut engine = engine();
        engine
            .set_center(LngLat::new(-118.25, 34.05), |_| {})
            .unwrap();
        let fits_before = engine.surface.fit_requests().len();

        engine.set_radius(2.0).unwrap();

        let region = engine.region().unwrap();
        assert!((region.geometry.radius() - 2.0).abs() < 1e-12);
        assert!((region.center.lng - (-118.25)).abs() < 1e-9);
        assert_eq!(engine.surface.pushes_to("shed"), 2);
        // No camera move for a radius change
        assert_eq!(engine.surface.fit_requests().len(), fits_before);
    }

    #[test]
    fn test_set_radius_before_center_is_stored() {
        let mut engine = engine();
        engine.set_radius(3.0).unwrap();
        assert!((engine.radius() - 3.0).abs() < 1e-12);
        assert_eq!(engine.surface.pushes_to("shed"), 0);

        engine
            .set_center(LngLat::new(-118.25, 34.05), |_| {})
            .unwrap();
        assert!((engine.region().unwrap().geometry.radius() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_set_radius_rejects_non_positive() {
        let mut engine = engine();
        assert_eq!(
            engine.set_radius(0.0),
            Err(GeometryError::InvalidRadius(0.0))
        );
        assert_eq!(
            engine.set_radius(-2.0),
            Err(GeometryError::InvalidRadius(-2.0))
        );
        assert!(engine.set_radius(f64::NAN).is_err());
        // Stored radius is unchanged
        assert!((engine.radius() - 1.0).abs() < 1e-12);
    }
}
