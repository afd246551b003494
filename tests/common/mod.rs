//! Mock collaborators for driving the boot controller on the host.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::net::Ipv4Addr;
use std::rc::Rc;

use bringup::{
    BootConfig,
    ConnectPolicy,
    FilesystemProvider,
    FsError,
    LinkState,
    NetworkProvider,
    OtaEvent,
    OtaProvider,
    WifiMode,
};
use embassy_time::Duration;

pub const AP_ADDR: Ipv4Addr = Ipv4Addr::new(192, 168, 4, 1);
pub const STA_ADDR: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 23);

pub fn config(filesystem: bool, mode: WifiMode, ota: bool) -> BootConfig {
    BootConfig::new(filesystem, mode, "workshop", "hunter22", ota).unwrap()
}

pub fn policy(poll_ms: u64, timeout_ms: Option<u64>) -> ConnectPolicy {
    ConnectPolicy {
        poll_interval: Duration::from_millis(poll_ms),
        timeout: timeout_ms.map(Duration::from_millis),
    }
}

#[derive(Default)]
pub struct FsProbe {
    pub mount_ok: Cell<bool>,
    pub mounts: Cell<u32>,
    pub format_flag: Cell<Option<bool>>,
    pub unmounts: Cell<u32>,
}

pub struct MockFs(Rc<FsProbe>);

pub fn mock_fs(mount_ok: bool) -> (MockFs, Rc<FsProbe>) {
    let probe = Rc::new(FsProbe::default());
    probe.mount_ok.set(mount_ok);
    (MockFs(Rc::clone(&probe)), probe)
}

impl FilesystemProvider for MockFs {
    fn mount(&mut self, format_on_failure: bool) -> Result<(), FsError> {
        self.0.mounts.set(self.0.mounts.get() + 1);
        self.0.format_flag.set(Some(format_on_failure));
        if self.0.mount_ok.get() {
            Ok(())
        } else {
            Err(FsError::MountFailed)
        }
    }

    fn unmount(&mut self) {
        self.0.unmounts.set(self.0.unmounts.get() + 1);
    }
}

#[derive(Default)]
pub struct NetProbe {
    /// Link states returned per poll; the last entry repeats forever.
    pub link_plan: RefCell<VecDeque<LinkState>>,
    pub ap_started: Cell<bool>,
    pub join_requested: Cell<bool>,
    pub polls: Cell<u32>,
}

pub struct MockNet(Rc<NetProbe>);

pub fn mock_net(plan: &[LinkState]) -> (MockNet, Rc<NetProbe>) {
    let probe = Rc::new(NetProbe::default());
    probe.link_plan.borrow_mut().extend(plan.iter().copied());
    (MockNet(Rc::clone(&probe)), probe)
}

impl NetworkProvider for MockNet {
    async fn start_access_point(&mut self, _ssid: &str, _password: &str) {
        self.0.ap_started.set(true);
    }

    fn access_point_address(&self) -> Ipv4Addr {
        AP_ADDR
    }

    async fn join_network(&mut self, _ssid: &str, _password: &str) {
        self.0.join_requested.set(true);
    }

    fn link_state(&self) -> LinkState {
        self.0.polls.set(self.0.polls.get() + 1);
        let mut plan = self.0.link_plan.borrow_mut();
        if plan.len() > 1 {
            plan.pop_front().unwrap()
        } else {
            plan.front().copied().unwrap_or(LinkState::Down)
        }
    }

    fn station_address(&self) -> Ipv4Addr {
        STA_ADDR
    }
}

#[derive(Default)]
pub struct OtaProbe {
    pub begun: Cell<bool>,
    pub polls: Cell<u32>,
    pub events: RefCell<VecDeque<OtaEvent>>,
}

pub struct MockOta(Rc<OtaProbe>);

pub fn mock_ota(events: &[OtaEvent]) -> (MockOta, Rc<OtaProbe>) {
    let probe = Rc::new(OtaProbe::default());
    probe.events.borrow_mut().extend(events.iter().copied());
    (MockOta(Rc::clone(&probe)), probe)
}

impl OtaProvider for MockOta {
    fn begin(&mut self) {
        self.0.begun.set(true);
    }

    fn poll_event(&mut self) -> Option<OtaEvent> {
        self.0.polls.set(self.0.polls.get() + 1);
        self.0.events.borrow_mut().pop_front()
    }
}
