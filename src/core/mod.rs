//! Core-Domänentypen: Koordinaten, Auswahl, Routen, Kamera.

pub mod camera;
pub mod geo;
pub mod route;
pub mod selection;

pub use camera::MapCamera;
pub use geo::GeoPoint;
pub use route::{
    AppliedCondition, NetworkType, OptimizeFor, RouteOptions, RouteResult, RouteSegment,
};
pub use selection::{Selection, SelectionPhase, SelectionTransition};
