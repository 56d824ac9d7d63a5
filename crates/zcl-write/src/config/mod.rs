//! Configuration for the writer
//!
//! Settings are read from a config file discovered by walking up from a
//! start directory, or from an explicit path. Supported files, in discovery
//! order:
//! - `.zclrc.json`
//! - `.zclrc.toml`
//! - `zcl.yaml` / `zcl.yml`
//! - `zcl.json`
//!
//! ## Example Configuration (zcl.yaml)
//!
//! ```yaml
//! writer:
//!   spaceChunkSize: 64
//! ```

mod loader;
mod zcl_config;

pub use loader::ConfigLoader;
pub use zcl_config::{WriterConfiguration, ZclConfig};
