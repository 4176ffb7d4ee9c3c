use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// ErrNoActiveMediaSection indicates that no media section has both a
    /// non-zero port and an ICE username fragment.
    #[error("no active media section found")]
    ErrNoActiveMediaSection,

    /// ErrNoFingerprint indicates that neither the active media section nor
    /// the session carries a certificate fingerprint.
    #[error("no fingerprint found for the active media section")]
    ErrNoFingerprint,

    /// ErrInvalidFingerprint indicates that an `a=fingerprint` value is not
    /// `<hash-func> <fingerprint>`.
    #[error("invalid fingerprint: {0}")]
    ErrInvalidFingerprint(String),

    /// ErrInvalidRtpMap indicates that an `a=rtpmap` value lacks the encoding name.
    #[error("invalid rtpmap: {0}")]
    ErrInvalidRtpMap(String),

    /// ErrInvalidFmtp indicates that an `a=fmtp` value lacks the payload type.
    #[error("invalid fmtp: {0}")]
    ErrInvalidFmtp(String),

    /// ErrInvalidRtcpFb indicates that an `a=rtcp-fb` value lacks the feedback type.
    #[error("invalid rtcp-fb: {0}")]
    ErrInvalidRtcpFb(String),

    /// ErrInvalidExtMap indicates that an `a=extmap` value lacks the extension URI.
    #[error("invalid extmap: {0}")]
    ErrInvalidExtMap(String),

    /// ErrInvalidPort indicates that the port of an `m=` line does not fit
    /// in 16 bits.
    #[error("invalid media port: {0}")]
    ErrInvalidPort(isize),

    #[error("parse int: {0}")]
    ParseInt(#[from] ParseIntError),

    #[error("sdp: {0}")]
    Sdp(#[from] sdp::Error),
}
