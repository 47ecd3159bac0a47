//! Window-manager clients: responsibility and boundaries
//!
//! This module and its submodules are responsible ONLY for delivering a single
//! "focus window N" request to the running window manager (Qtile IPC, sway/i3
//! IPC, xdotool, wmctrl). They never run the selector and never parse its output.

mod detect;
mod dry_run;
mod qtile;
mod sway;
mod tool;
mod wmctrl;
mod xdotool;
mod r#trait;

#[cfg(test)]
pub use self::dry_run::DryRunWindowManager;
pub use self::r#trait::{create_window_manager, WindowManagerTrait};
