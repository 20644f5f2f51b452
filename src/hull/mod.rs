//! Geometria do casco: dimensões principais e parâmetros derivados.

pub mod geometry;

pub use geometry::{derive_geometry, GeometryError, HullDerivedGeometry, HullPrincipalDimensions};
