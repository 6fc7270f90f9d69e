use thiserror::Error;

/// Error raised when bounding box vertices do not describe a valid region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Min and max vertices have a different number of components.
    #[error("vertex dimensionality mismatch: min has {min} components, max has {max}")]
    DimensionMismatch { min: usize, max: usize },
    /// Vertices are zero-dimensional.
    #[error("bounding box vertices must have at least one component")]
    Empty,
    /// A min component exceeds the corresponding max component.
    #[error("min vertex exceeds max vertex in component {component}")]
    InvertedVertex { component: usize },
}

/// Axis-aligned rectangular region described by a minimum and a maximum
/// vertex.
///
/// Dimensionality is context-defined (typically 2 for image regions) and
/// fixed at construction. Instances are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    min_vertex: Vec<f64>,
    max_vertex: Vec<f64>,
}

impl BoundingBox {
    /// Create a bounding box from min and max vertices.
    ///
    /// Fails if the vertices differ in dimensionality, are empty, or if any
    /// min component exceeds its max counterpart.
    pub fn new(min_vertex: Vec<f64>, max_vertex: Vec<f64>) -> Result<Self, GeometryError> {
        if min_vertex.len() != max_vertex.len() {
            return Err(GeometryError::DimensionMismatch {
                min: min_vertex.len(),
                max: max_vertex.len(),
            });
        }
        if min_vertex.is_empty() {
            return Err(GeometryError::Empty);
        }
        for (component, (lo, hi)) in min_vertex.iter().zip(&max_vertex).enumerate() {
            if lo > hi {
                return Err(GeometryError::InvertedVertex { component });
            }
        }
        Ok(Self {
            min_vertex,
            max_vertex,
        })
    }

    /// Create a 2-D bounding box from top-left and bottom-right corners.
    #[inline]
    pub fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, GeometryError> {
        Self::new(vec![x1, y1], vec![x2, y2])
    }

    /// Minimum vertex components.
    #[inline]
    pub fn min_vertex(&self) -> &[f64] {
        &self.min_vertex
    }

    /// Maximum vertex components.
    #[inline]
    pub fn max_vertex(&self) -> &[f64] {
        &self.max_vertex
    }

    /// Number of spatial dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.min_vertex.len()
    }

    /// Per-dimension extents (max - min).
    pub fn deltas(&self) -> Vec<f64> {
        self.min_vertex
            .iter()
            .zip(&self.max_vertex)
            .map(|(lo, hi)| hi - lo)
            .collect()
    }

    /// Product of the per-dimension extents.
    pub fn hypervolume(&self) -> f64 {
        self.deltas().iter().product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_accessors() {
        let bbox = BoundingBox::rect(10.0, 20.0, 40.0, 60.0).unwrap();
        assert_eq!(bbox.min_vertex(), [10.0, 20.0]);
        assert_eq!(bbox.max_vertex(), [40.0, 60.0]);
        assert_eq!(bbox.ndim(), 2);
        assert_eq!(bbox.deltas(), [30.0, 40.0]);
        assert!((bbox.hypervolume() - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let err = BoundingBox::new(vec![0.0, 0.0], vec![1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(err, GeometryError::DimensionMismatch { min: 2, max: 3 });
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            BoundingBox::new(vec![], vec![]).unwrap_err(),
            GeometryError::Empty
        );
    }

    #[test]
    fn test_inverted_vertex_rejected() {
        let err = BoundingBox::rect(0.0, 5.0, 10.0, 2.0).unwrap_err();
        assert_eq!(err, GeometryError::InvertedVertex { component: 1 });
    }

    #[test]
    fn test_degenerate_box_allowed() {
        // Zero-extent boxes are valid regions (a point or a line).
        let bbox = BoundingBox::rect(3.0, 3.0, 3.0, 3.0).unwrap();
        assert_eq!(bbox.hypervolume(), 0.0);
    }

    #[test]
    fn test_three_dimensional() {
        let bbox = BoundingBox::new(vec![0.0, 0.0, 0.0], vec![2.0, 3.0, 4.0]).unwrap();
        assert_eq!(bbox.ndim(), 3);
        assert!((bbox.hypervolume() - 24.0).abs() < 1e-9);
    }
}
