//! Selector service: runs the external `commando select` program and turns
//! its standard output into a [`Selection`](crate::model::Selection).
//!
//! It never talks to the window manager; focusing is done by the invoker.

mod dry_run;
mod process;
mod r#trait;

pub use self::r#trait::{create_selector, SelectorTrait};
