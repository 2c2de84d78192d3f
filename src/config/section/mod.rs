//! Configuration section definitions.

mod build;
mod redirects;

pub use build::{BuildConfig, BuilderKind};
pub use redirects::RedirectsConfig;
