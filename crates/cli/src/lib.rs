//! fzman CLI Library
//!
//! This crate provides the command-line front-end of fzman: it parses the
//! arguments, decides whether to open a page directly or to run the fuzzy
//! finder over the manual index, and hands the chosen page to the renderer.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`flow`]: Direct target versus interactive search
//! - [`finder`]: Invocation of the external fuzzy finder
//! - [`display`]: Final display, optionally with examples
//! - [`notices`]: Non-fatal messages for the user
//!
//! # Examples
//!
//! ```bash
//! # Interactive search over every manual page
//! fzman
//!
//! # Interactive search with tldr examples in the preview
//! fzman -e
//!
//! # Open a page directly, falling back to the search if it does not exist
//! fzman tar
//! ```

pub mod cli_args;
pub mod display;
pub mod finder;
pub mod flow;
pub mod notices;
