/// Error type for flash filesystem operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    /// The volume could not be mounted, even after a format attempt
    MountFailed,
}

/// Flash filesystem collaborator
pub trait FilesystemProvider {
    /// Mount the flash volume.
    ///
    /// With `format_on_failure` set, a blank or corrupt region is formatted
    /// and the mount retried once before giving up.
    fn mount(&mut self, format_on_failure: bool) -> Result<(), FsError>;

    /// Release the volume so another subsystem can take exclusive flash
    /// access.
    fn unmount(&mut self);
}
