//! scaffold - Go project scaffolding
//!
//! "Three answers in, a buildable skeleton out."
//!
//! Asks for a project name, a module path and a Go version, then writes a
//! fixed directory layout with a handful of rendered files. It never touches
//! an existing directory: the root must not exist before the run.

pub mod collector;
pub mod config;
pub mod error;
pub mod materialize;
pub mod render;
pub mod templates;

pub use collector::{Collector, Preset, Prompt};
pub use config::{ProjectConfig, DEFAULT_RUNTIME_VERSION};
pub use error::{FilesystemError, InputError, ScaffoldError, TemplateError, ValidationError};
pub use materialize::{plan, EntryKind, Materializer, PlannedEntry};
pub use render::render;
pub use templates::{Placeholder, TemplateEntry, SCAFFOLD_DIRS, TEMPLATES};
