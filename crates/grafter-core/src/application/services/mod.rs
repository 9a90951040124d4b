//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! use cases: "apply staged dependencies to a manifest" and "ensure a
//! plugin is registered exactly once".

pub mod manifest_editor;
pub mod plugin_registrar;

pub use manifest_editor::ManifestEditor;
pub use plugin_registrar::{PluginRegistrar, Registration};
