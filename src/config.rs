use embassy_time::Duration;
use heapless::String;

/// Maximum length of an SSID (802.11 limit)
const MAX_SSID_LEN: usize = 32;

/// Maximum length of a WPA passphrase
const MAX_PASSWORD_LEN: usize = 64;

/// Network role selected at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiMode {
    /// Join an existing network as a client
    Station,
    /// Create a local network
    AccessPoint,
}

/// Station-mode wait policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectPolicy {
    /// Interval between link state polls
    pub poll_interval: Duration,
    /// Give up after this long. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for ConnectPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(500),
            timeout: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    SsidTooLong,
    PasswordTooLong,
}

/// Boot-time configuration. Fixed for the controller's lifetime.
#[derive(Debug, Clone)]
pub struct BootConfig {
    /// Mount the flash filesystem during setup
    pub filesystem: bool,
    /// Station or access point
    pub mode: WifiMode,
    pub ssid: String<MAX_SSID_LEN>,
    pub password: String<MAX_PASSWORD_LEN>,
    /// Start the OTA update listener during setup
    pub ota: bool,
    /// How long to wait for a station link
    pub connect: ConnectPolicy,
}

impl BootConfig {
    pub fn new(
        filesystem: bool,
        mode: WifiMode,
        ssid: &str,
        password: &str,
        ota: bool,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            filesystem,
            mode,
            ssid: String::try_from(ssid).map_err(|_| ConfigError::SsidTooLong)?,
            password: String::try_from(password).map_err(|_| ConfigError::PasswordTooLong)?,
            ota,
            connect: ConnectPolicy::default(),
        })
    }

    /// Replace the station-mode wait policy
    #[must_use]
    pub fn with_connect_policy(mut self, connect: ConnectPolicy) -> Self {
        self.connect = connect;
        self
    }
}
