//! fzman Core Library
//!
//! This crate provides the decision logic behind fzman, a terminal front-end
//! that fuzzy-searches installed manual pages through an external finder and
//! opens the chosen one, optionally next to quick-reference examples.
//!
//! # Key Features
//!
//! - **Capability Probing**: Find optional highlighters and example providers on `PATH`
//! - **Preview Pipelines**: One of four fixed shell pipelines for the finder's preview pane
//! - **Selection Parsing**: Turn the finder's chosen line back into a manual target
//! - **Direct Targets**: Skip the finder when a name given up front has a manual entry
//! - **Configuration**: Optional YAML file naming the collaborating programs
//!
//! # Examples
//!
//! Building the preview command for the current machine:
//!
//! ```no_run
//! use fzman_core::capabilities::{probe, SearchPath};
//! use fzman_core::collaborators::Collaborators;
//! use fzman_core::config::PreviewWidth;
//! use fzman_core::preview::PreviewPipeline;
//! use fzman_core::session::DisplayMode;
//!
//! let collaborators = Collaborators::default();
//! let capabilities = probe(&SearchPath::from_env(), &collaborators);
//! let pipeline = PreviewPipeline::build(
//!     DisplayMode::ExamplesOn,
//!     &capabilities,
//!     PreviewWidth::default(),
//!     &collaborators,
//! )?;
//! println!("{pipeline}");
//! # Ok::<(), fzman_core::error::Error>(())
//! ```

pub mod capabilities;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod interpolation;
pub mod manual;
pub mod preview;
pub mod selection;
pub mod session;
