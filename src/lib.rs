#![no_std]

//! Bring-up sequencing for embedded WiFi boards.
//!
//! [`BootController`] mounts a flash filesystem, brings the network up as a
//! station or an access point, and starts an over-the-air update listener,
//! in that order. The flash driver, the radio and the OTA transport are
//! reached through the provider traits in [`ports`], so the controller runs
//! unchanged on hardware and in host tests.

pub mod config;
pub mod controller;
pub mod ota;
pub mod ports;

pub use config::{BootConfig, ConfigError, ConnectPolicy, WifiMode};
pub use controller::{BootController, BootStep, ConnectOutcome, SetupReport};
pub use ota::{OtaErrorKind, OtaPhase, transfer_percent};
pub use ports::{
    FilesystemProvider,
    FsError,
    LinkError,
    LinkState,
    NetworkProvider,
    OtaEvent,
    OtaProvider,
};
