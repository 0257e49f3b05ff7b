//! Artifact loading and minification.

mod kind;
mod load;
pub mod minify;

pub use kind::AssetKind;
pub use load::{Artifact, ArtifactSpec, load_artifacts};
