//! `updblock_core` is the core library for the updblock block regenerator. It
//! finds a delimited block of lines in a file, such as a license header
//! bounded by start and end marker lines, and replaces it with a freshly
//! rendered, fixed-width, optionally centered block of text.
//!
//! ## Processing Pipeline
//!
//! ```text
//! updblock.ini
//!   → INI reader (sections with their entries in file order)
//!   → Config (filetypes, blocks, actions and texts merged by name)
//!   → Layout resolver (the single width every rendered line uses)
//!   → Renderer (first line, padding, middle lines, padding, last line)
//!   → Block scanner (replaces every block in a stream of lines)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from `updblock.ini` and the typed
//!   lookups used during rendering.
//! - [`project`]: Directory walking and the selection of actions per file.
//!
//! ## Configuration
//!
//! ```ini
//! [filetype:c]
//! extensions = c, h
//! firstline-start = /*
//! firstline-filler = *
//! midline-start = " * "
//! lastline-end = */
//!
//! [block:license]
//! start-pattern = /\*+ LICENSE-START
//! end-pattern = \*+ LICENSE-END
//! start = LICENSE-START
//! end = LICENSE-END
//!
//! [text-blocks]
//! mit = Permission is hereby granted, free of charge,
//!   to any person obtaining a copy of this software.
//!
//! [action:c-license]
//! filetype = c
//! block = license
//! text = mit
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use updblock_core::Config;
//! use updblock_core::compute_updates;
//! use updblock_core::write_updates;
//!
//! let config = Config::load(Path::new("updblock.ini")).unwrap();
//! let updates = compute_updates(&config, Path::new(".")).unwrap();
//! if !updates.is_up_to_date() {
//! 	eprintln!("{} file(s) out of date", updates.updated_files.len());
//! }
//! write_updates(&updates).unwrap();
//! ```

pub use attribute::*;
pub use config::*;
pub use error::*;
pub use layout::*;
pub use project::*;
pub use render::*;
pub use scanner::*;
pub use schema::*;
pub use section::*;
pub use text::*;

mod attribute;
pub mod config;
#[allow(unused_assignments)]
mod error;
pub mod ini;
mod layout;
pub mod project;
mod render;
mod scanner;
mod schema;
mod section;
mod text;

#[cfg(test)]
mod __fixtures;
