//! Pequod Route Viewer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod client;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use client::{
    HttpReply, HttpTransport, RequestPhase, RequestState, RouteClient, RouteError,
    RouteTransport, TransportError, ValidationError,
};
pub use core::{
    GeoPoint, MapCamera, NetworkType, OptimizeFor, RouteOptions, RouteResult, RouteSegment,
    Selection, SelectionPhase,
};
pub use shared::{ClientOptions, RenderScene};
