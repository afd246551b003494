//! OTA session bookkeeping: failure categories, phase and progress math.

/// Category of an OTA session failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtaErrorKind {
    Auth,
    Begin,
    Connect,
    Receive,
    End,
}

impl OtaErrorKind {
    /// Map a transport error code to a category.
    ///
    /// Codes follow the classic OTA transport numbering: 0 auth, 1 begin,
    /// 2 connect, 3 receive, 4 end. Anything else yields `None` and is
    /// dropped by the caller.
    pub fn from_raw(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Auth),
            1 => Some(Self::Begin),
            2 => Some(Self::Connect),
            3 => Some(Self::Receive),
            4 => Some(Self::End),
            _ => None,
        }
    }

    pub(crate) fn describe(self) -> &'static str {
        match self {
            Self::Auth => "auth failed",
            Self::Begin => "begin failed",
            Self::Connect => "connect failed",
            Self::Receive => "receive failed",
            Self::End => "end failed",
        }
    }
}

/// Phase of the current (or most recent) OTA session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OtaPhase {
    #[default]
    Idle,
    InProgress {
        percent: u32,
    },
    Completed,
    Failed(OtaErrorKind),
}

/// Whole percent of an update transfer.
///
/// Computes `written / (total / 100)`. The divisor truncates first, so the
/// result runs slightly ahead of `written * 100 / total`, and images smaller
/// than 100 bytes have no defined percentage at all; `None` in that case.
pub fn transfer_percent(written: u32, total: u32) -> Option<u32> {
    match total / 100 {
        0 => None,
        unit => Some(written / unit),
    }
}
