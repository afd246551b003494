//! Boot controller: sequences filesystem, network and OTA bring-up.

use core::net::Ipv4Addr;

use embassy_time::{Duration, Timer, with_timeout};
use heapless::Vec;
use log::{error, info, warn};

use crate::config::{BootConfig, WifiMode};
use crate::ota::{OtaErrorKind, OtaPhase, transfer_percent};
use crate::ports::{
    FilesystemProvider,
    LinkError,
    LinkState,
    NetworkProvider,
    OtaEvent,
    OtaProvider,
};

/// One entry of the boot plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStep {
    Filesystem,
    Network,
    OtaListener,
}

/// Network bring-up result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected(Ipv4Addr),
    TimedOut,
    Failed(LinkError),
}

/// What [`BootController::setup`] actually did, step by step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetupReport {
    /// `None` when the filesystem step was not planned
    pub filesystem_mounted: Option<bool>,
    /// `None` only if setup has not run
    pub network: Option<ConnectOutcome>,
    pub ota_listening: bool,
}

/// Sequences board bring-up over three injected collaborators.
///
/// Created once at boot; [`BootController::setup`] runs once, then the main
/// loop calls [`BootController::service`] for the life of the process.
pub struct BootController<F, N, O> {
    config: BootConfig,
    fs: F,
    net: N,
    ota: O,
    address: Option<Ipv4Addr>,
    ota_phase: OtaPhase,
}

impl<F, N, O> BootController<F, N, O>
where
    F: FilesystemProvider,
    N: NetworkProvider,
    O: OtaProvider,
{
    /// Store the configuration and collaborators. Performs no I/O.
    pub fn new(config: BootConfig, fs: F, net: N, ota: O) -> Self {
        Self {
            config,
            fs,
            net,
            ota,
            address: None,
            ota_phase: OtaPhase::Idle,
        }
    }

    /// The ordered list of steps [`BootController::setup`] will run
    pub fn plan(&self) -> Vec<BootStep, 3> {
        let mut steps = Vec::new();
        if self.config.filesystem {
            steps.push(BootStep::Filesystem).ok();
        }
        steps.push(BootStep::Network).ok();
        if self.config.ota {
            steps.push(BootStep::OtaListener).ok();
        }
        steps
    }

    /// Run the boot plan once.
    ///
    /// A failed mount is logged and does not stop the sequence. In station
    /// mode this suspends until the link is up, the radio reports a failure,
    /// or the configured timeout elapses; access-point mode never waits.
    pub async fn setup(&mut self) -> SetupReport {
        let mut report = SetupReport::default();
        for step in self.plan() {
            match step {
                BootStep::Filesystem => {
                    report.filesystem_mounted = Some(self.mount_filesystem());
                }
                BootStep::Network => {
                    report.network = Some(self.bring_up_network().await);
                }
                BootStep::OtaListener => {
                    self.ota.begin();
                    report.ota_listening = true;
                    info!("ota: listening for updates");
                }
            }
        }
        report
    }

    /// Periodic servicing hook, called from the main loop.
    ///
    /// Pumps the OTA collaborator unconditionally; when no update is pending
    /// the collaborator reports nothing and this returns immediately.
    pub fn service(&mut self) -> OtaPhase {
        while let Some(event) = self.ota.poll_event() {
            self.apply_ota_event(event);
        }
        self.ota_phase
    }

    /// Whether the filesystem was requested at construction.
    ///
    /// Configuration intent, not mount state: stays `true` even when the
    /// mount failed.
    pub fn has_filesystem(&self) -> bool {
        self.config.filesystem
    }

    /// Address assigned during network bring-up, `None` until then
    pub fn address(&self) -> Option<Ipv4Addr> {
        self.address
    }

    /// Phase of the current or most recent OTA session
    pub fn ota_phase(&self) -> OtaPhase {
        self.ota_phase
    }

    fn mount_filesystem(&mut self) -> bool {
        match self.fs.mount(true) {
            Ok(()) => {
                info!("fs: mounted");
                true
            }
            Err(e) => {
                // Non-fatal: the boot sequence continues, later filesystem
                // use is on the caller.
                error!("fs: mount failed: {e:?}");
                false
            }
        }
    }

    async fn bring_up_network(&mut self) -> ConnectOutcome {
        match self.config.mode {
            WifiMode::AccessPoint => {
                self.net
                    .start_access_point(self.config.ssid.as_str(), self.config.password.as_str())
                    .await;
                let address = self.net.access_point_address();
                self.address = Some(address);
                info!("network: access point up, address {address}");
                ConnectOutcome::Connected(address)
            }
            WifiMode::Station => {
                self.net
                    .join_network(self.config.ssid.as_str(), self.config.password.as_str())
                    .await;
                let interval = self.config.connect.poll_interval;
                let waited = match self.config.connect.timeout {
                    Some(limit) => {
                        match with_timeout(limit, wait_for_link(&self.net, interval)).await {
                            Ok(result) => result,
                            Err(_) => {
                                warn!("network: connect timed out");
                                return ConnectOutcome::TimedOut;
                            }
                        }
                    }
                    None => wait_for_link(&self.net, interval).await,
                };
                match waited {
                    Ok(()) => {
                        let address = self.net.station_address();
                        self.address = Some(address);
                        info!("network: up, address {address}");
                        ConnectOutcome::Connected(address)
                    }
                    Err(e) => {
                        error!("network: connect failed: {e:?}");
                        ConnectOutcome::Failed(e)
                    }
                }
            }
        }
    }

    fn apply_ota_event(&mut self, event: OtaEvent) {
        match event {
            OtaEvent::Started { total } => {
                info!("ota: update start, {total} bytes");
                // The image may need exclusive flash access. Keyed on the
                // configured flag, not on whether the mount succeeded.
                if self.config.filesystem {
                    self.fs.unmount();
                    info!("fs: unmounted for update");
                }
                self.ota_phase = OtaPhase::InProgress { percent: 0 };
            }
            OtaEvent::Progress { written, total } => match transfer_percent(written, total) {
                Some(percent) => {
                    info!("ota: progress {percent}%");
                    self.ota_phase = OtaPhase::InProgress { percent };
                }
                None => {
                    warn!("ota: image of {total} bytes too small to report progress");
                }
            },
            OtaEvent::Completed => {
                info!("ota: update end");
                self.ota_phase = OtaPhase::Completed;
            }
            OtaEvent::Error(code) => {
                // Unrecognized codes are dropped without comment.
                if let Some(kind) = OtaErrorKind::from_raw(code) {
                    error!("ota: {}", kind.describe());
                    self.ota_phase = OtaPhase::Failed(kind);
                }
            }
        }
    }
}

/// Poll the radio until the link is up or the radio gives up
async fn wait_for_link<N: NetworkProvider>(
    net: &N,
    poll_interval: Duration,
) -> Result<(), LinkError> {
    loop {
        match net.link_state() {
            LinkState::Up => return Ok(()),
            LinkState::Failed(e) => return Err(e),
            LinkState::Down | LinkState::Connecting => {
                info!("network: connecting");
                Timer::after(poll_interval).await;
            }
        }
    }
}
