//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod route_options;
pub mod route_request;
pub mod selection;
pub mod viewport;
