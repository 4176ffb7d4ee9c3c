use std::fmt;

use serde::{Deserialize, Serialize};

use crate::description::PayloadType;
use crate::fmtp::Parameters;

/// RTPCodecKind determines the type of a codec
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RtpCodecKind {
    #[default]
    Unspecified,

    /// Audio indicates this is an audio codec
    Audio,

    /// Video indicates this is a video codec
    Video,
}

impl From<&str> for RtpCodecKind {
    fn from(raw: &str) -> Self {
        match raw {
            "audio" => RtpCodecKind::Audio,
            "video" => RtpCodecKind::Video,
            _ => RtpCodecKind::Unspecified,
        }
    }
}

impl fmt::Display for RtpCodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RtpCodecKind::Audio => "audio",
            RtpCodecKind::Video => "video",
            RtpCodecKind::Unspecified => crate::UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}

/// RtcpFeedback signals the connection to use additional RTCP packet types.
/// <https://draft.ortc.org/#dom-rtcrtcpfeedback>
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtcpFeedback {
    /// Type is the type of feedback.
    /// valid: ack, ccm, nack, goog-remb, transport-cc
    #[serde(rename = "type")]
    pub typ: String,

    /// The parameter value depends on the type.
    /// For example, type="nack" parameter="pli" will send Picture Loss Indicator packets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

/// RtpCodecParameters describes a codec offered by a media section together
/// with the payload type the remote side prefers for it.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtpCodecParameters {
    pub name: String,
    pub mime_type: String,
    pub kind: RtpCodecKind,
    pub clock_rate: u32,
    pub preferred_payload_type: PayloadType,

    /// Only set for audio codecs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<u16>,
    #[serde(default)]
    pub rtcp_feedback: Vec<RtcpFeedback>,
    #[serde(default)]
    pub parameters: Parameters,
}

/// RtpHeaderExtension is a RFC 8285 RTP header extension offered by a
/// media section.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtpHeaderExtension {
    pub kind: RtpCodecKind,
    pub uri: String,
    pub preferred_id: u16,
}
