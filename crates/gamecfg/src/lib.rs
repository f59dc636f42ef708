//! Config tables, appearance models and placed scene objects for the game client.
//!
//! This crate sits on top of [`gamecfg_decode`] and adds:
//!
//! - [`ConfigContext`]: owns the decoded config tables for one archive
//! - [`KitModels`]: builds recolored body and head models from identikits
//! - [`ModelSource`]: the seam to whatever loads models ([`ModelCache`] in memory)
//! - [`Location`]: an immutable placed scene object
//!
//! # Example
//!
//! ```no_run
//! use gamecfg::{ConfigContext, ConfigSettings, KitModels, ModelCache};
//!
//! # fn main() -> gamecfg::Result<()> {
//! let bytes = std::fs::read("config").expect("read archive");
//! let ctx = ConfigContext::load(&bytes, &ConfigSettings::default())?;
//! let models = ModelCache::new();
//! if let Some(kit) = ctx.identikits().get(0) {
//!     let head = kit.head_model(&models);
//!     println!("head has {} triangles", head.triangle_count());
//! }
//! # Ok(())
//! # }
//! ```

mod appearance;
mod config;
mod error;
mod location;
mod model;

pub use appearance::KitModels;
pub use config::{ConfigContext, ConfigSettings, IdentikitTable};
pub use error::{Error, Result};
pub use location::{EntityHandle, Location, LocationParams};
pub use model::{Model, ModelCache, ModelSource, NoModels};

// Re-export decode types callers need.
pub use gamecfg_decode::{Archive, BodyPart, DecodeError, IdentikitDef};
