//! # mpwt
//!
//! Multi-pane Windows Terminal launcher: open a grid of panes, one per
//! command, with a single `wt` invocation.
//!
//! Windows Terminal can build pane layouts from its command line, but only
//! through a sequence of `split-pane` and `move-focus` statements whose
//! sizes are relative to the pane being split. mpwt computes that sequence
//! from a flat list of commands and a column count.
//!
//! ## Quick Example
//!
//! ```
//! use mpwt::layout::{synthesize, LayoutRequest};
//!
//! let request = LayoutRequest::new(vec!["echo 1".into(), "echo 2".into(), "echo 3".into()]);
//! let rendered = synthesize(&request, None).unwrap();
//! assert_eq!(
//!     rendered,
//!     "wt -w new cmd /k echo 1 ; sp -H -s 0.67 cmd /k echo 2 ; sp -H -s 0.50 cmd /k echo 3 ; mf first"
//! );
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`splitter`]: relative split ratios for equal-sized panes
//! - [`grouper`]: partitioning commands into columns
//! - [`builder`]: pane operation sequence for a column grid
//! - [`render`]: serialization into Windows Terminal's command grammar
//! - [`layout`]: layout requests and the [`synthesize`] entry point
//! - [`config`]: TOML configuration and validation
//! - [`loader`]: config, store and log file locations
//! - [`store`]: run history and favourites
//! - [`wt`]: launching the rendered command
//! - [`log`]: logging capability and subscriber setup
//! - [`cli`]: command-line argument parsing with clap
//! - [`error`]: error types

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod grouper;
pub mod layout;
pub mod loader;
pub mod log;
pub mod render;
pub mod splitter;
pub mod store;
pub mod wt;

pub use config::Config;
pub use error::{MpwtError, Result};
pub use layout::{Direction, LayoutRequest, OpenMode, synthesize};
