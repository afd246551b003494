/// Lifecycle event reported by the OTA listener
///
/// Error codes carry the transport's raw values; see
/// [`crate::ota::OtaErrorKind::from_raw`] for the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtaEvent {
    /// An update session was accepted; `total` is the announced image size
    Started { total: u32 },
    /// A chunk of the image was received and flashed
    Progress { written: u32, total: u32 },
    /// The image was received completely
    Completed,
    /// The session failed with a transport error code
    Error(u32),
}

/// OTA update listener collaborator
pub trait OtaProvider {
    /// Start listening for update sessions
    fn begin(&mut self);

    /// Process pending transfer work and report the next lifecycle event,
    /// if any.
    ///
    /// Work per call is bounded and non-blocking. Must be cheap to call
    /// while idle, including before [`OtaProvider::begin`].
    fn poll_event(&mut self) -> Option<OtaEvent>;
}
