//! Renderer-boundary lookups: asset paths for image tokens, illustration
//! substitution for icon glyphs, and clickable-highlight routing.

pub mod icons;
pub mod media;
pub mod routes;

pub use icons::{illustration_for, Illustration};
pub use media::{media_source, MEDIA_ROOT};
pub use routes::route_for;
