//! Presentation layer: the contract between the controller and the screen.
//!
//! This module contains:
//! - The presentation surface and confirmation contracts
//! - The retained surface snapshot the egui panels draw from
//! - The native confirmation dialog
//! - Theme color lookup for the panels

pub mod surface;
pub mod native_confirm;
pub mod color_mapping;

pub use surface::{ConfirmDialog, ModalView, PresentationSurface, SurfaceSnapshot};
pub use native_confirm::NativeConfirmDialog;
