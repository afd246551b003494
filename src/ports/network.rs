use core::net::Ipv4Addr;

/// Reason the radio gave up on joining a network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// No access point with the requested SSID was found
    NetworkNotFound,
    /// The access point rejected the credentials
    AuthFailed,
}

/// Station link state reported by the radio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Down,
    Connecting,
    Up,
    Failed(LinkError),
}

/// WiFi radio collaborator
///
/// One implementation drives one radio. The controller observes connection
/// progress through [`NetworkProvider::link_state`] and never owns the
/// network stack itself.
#[allow(async_fn_in_trait)]
pub trait NetworkProvider {
    /// Start a local access point with the given credentials
    async fn start_access_point(&mut self, ssid: &str, password: &str);

    /// Address of the access point interface, valid once the AP is started
    fn access_point_address(&self) -> Ipv4Addr;

    /// Begin joining the named network.
    ///
    /// Returns once the join is dispatched; progress is observed through
    /// [`NetworkProvider::link_state`].
    async fn join_network(&mut self, ssid: &str, password: &str);

    /// Current station link state
    fn link_state(&self) -> LinkState;

    /// Address assigned to the station interface, valid once the link is up
    fn station_address(&self) -> Ipv4Addr;
}
