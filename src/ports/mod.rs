//! Collaborator traits for the hardware-facing subsystems.
//!
//! One implementation of each trait wraps the board's flash filesystem
//! driver, its WiFi radio and its OTA transport. The controller never talks
//! to hardware directly.

pub mod filesystem;
pub mod network;
pub mod ota;

pub use filesystem::*;
pub use network::*;
pub use ota::*;
