//! Configuration file management.
//!
//! The configuration lives as JSON at `<etc dir>/config.json` and carries
//! the few settings that are not derivable from the layout itself: a
//! default installation prefix and the daemon log file name.

pub mod io;
pub mod structure;

pub use io::{
    load_config, load_config_from_file, resolve_prefix, save_config, save_config_to_file,
};
pub use structure::Config;
