//! Interpolation einer Höhenfunktion über dem Inneren eines einfachen
//! Polygons mittels verallgemeinerter baryzentrischer Koordinaten.
//!
//! Die Pipeline: `Polygon` → `PolygonTriangulator` (Ear Clipping mit
//! Randverschiebung nach innen) → `MeshRefiner` (rekursive Unterteilung,
//! Höhenabfrage pro Samplepunkt) → flacher Vertex-Buffer für den Renderer.

pub mod math;

pub use math::prelude;
