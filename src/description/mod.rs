
use std::io;

use sdp::description::common::Attribute;
use sdp::description::media::MediaDescription;
use sdp::description::session::SessionDescription;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub(crate) const ATTR_KEY_ICE_UFRAG: &str = "ice-ufrag";
pub(crate) const ATTR_KEY_FINGERPRINT: &str = "fingerprint";
pub(crate) const ATTR_KEY_SETUP: &str = "setup";
pub(crate) const ATTR_KEY_RTPMAP: &str = "rtpmap";
pub(crate) const ATTR_KEY_FMTP: &str = "fmtp";
pub(crate) const ATTR_KEY_RTCP_FB: &str = "rtcp-fb";
pub(crate) const ATTR_KEY_EXTMAP: &str = "extmap";

const PAYLOAD_TYPE_WILDCARD: &str = "*";

/// PayloadType identifies the format of the RTP payload and determines
/// its interpretation by the application. Each codec in a RTP Session
/// will have a different PayloadType
/// <https://tools.ietf.org/html/rfc3550#section-3>
pub type PayloadType = u8;

/// SdpDocument is a session description as handed over by an SDP parser.
///
/// The serde representation uses the field names of the `sdp-transform`
/// JavaScript parser, so its JSON output can be deserialized directly.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdpDocument {
    #[serde(default)]
    pub media: Vec<MediaSection>,

    /// Session level `a=fingerprint`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Fingerprint>,
}

/// MediaSection is a single `m=` block and the attributes it carries.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSection {
    /// Media type of the `m=` line ("audio", "video", "application", ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ice_ufrag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Fingerprint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup: Option<String>,
    #[serde(default)]
    pub rtp: Vec<RtpMap>,
    #[serde(default)]
    pub fmtp: Vec<FmtpLine>,
    #[serde(default, rename = "rtcpFb")]
    pub rtcp_feedback: Vec<RtcpFbLine>,
    #[serde(default)]
    pub ext: Vec<ExtMapLine>,
}

impl MediaSection {
    /// is_active reports whether the section has been negotiated and is not
    /// rejected, i.e. it has an ICE username fragment and a non-zero port.
    pub fn is_active(&self) -> bool {
        self.port != 0 && self.ice_ufrag.as_deref().is_some_and(|u| !u.is_empty())
    }
}

/// Fingerprint is the value of an `a=fingerprint:<hash-func> <fingerprint>` line.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Hash function name, e.g. "sha-256".
    #[serde(rename = "type")]
    pub typ: String,
    pub hash: String,
}

/// RtpMap is an `a=rtpmap:<payload type> <encoding name>/<clock rate>[/<encoding parameters>]` line.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtpMap {
    #[serde(rename = "payload")]
    pub payload_type: PayloadType,
    #[serde(rename = "codec")]
    pub codec_name: String,
    #[serde(rename = "rate", default)]
    pub clock_rate: u32,
    #[serde(rename = "encoding", default, skip_serializing_if = "Option::is_none")]
    pub encoding_param: Option<u16>,
}

/// FmtpLine is an `a=fmtp:<payload type> <config>` line.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FmtpLine {
    #[serde(rename = "payload")]
    pub payload_type: PayloadType,
    #[serde(default)]
    pub config: String,
}

/// RtcpFbLine is an `a=rtcp-fb:<payload type> <type> [<subtype>]` line.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtcpFbLine {
    /// `None` stands for the `*` wildcard.
    #[serde(rename = "payload", with = "wildcard_payload_type")]
    pub payload_type: Option<PayloadType>,
    #[serde(rename = "type")]
    pub typ: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
}

/// ExtMapLine is an `a=extmap:<id>[/<direction>] <uri>` line.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtMapLine {
    pub uri: String,
    #[serde(rename = "value")]
    pub id: u16,
}

mod wildcard_payload_type {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{PayloadType, PAYLOAD_TYPE_WILDCARD};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPayloadType {
        Number(PayloadType),
        Text(String),
    }

    pub(super) fn serialize<S>(
        payload_type: &Option<PayloadType>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match payload_type {
            Some(pt) => serializer.serialize_u8(*pt),
            None => serializer.serialize_str(PAYLOAD_TYPE_WILDCARD),
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<PayloadType>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawPayloadType::deserialize(deserializer)? {
            RawPayloadType::Number(pt) => Ok(Some(pt)),
            RawPayloadType::Text(s) if s == PAYLOAD_TYPE_WILDCARD => Ok(None),
            RawPayloadType::Text(s) => s.parse().map(Some).map_err(de::Error::custom),
        }
    }
}

impl SdpDocument {
    /// unmarshal parses SDP text and converts it into an SdpDocument.
    pub fn unmarshal<R: io::BufRead + io::Seek>(reader: &mut R) -> Result<Self> {
        let desc = SessionDescription::unmarshal(reader)?;
        SdpDocument::try_from(&desc)
    }
}

impl TryFrom<&SessionDescription> for SdpDocument {
    type Error = Error;

    fn try_from(desc: &SessionDescription) -> Result<Self> {
        let fingerprint = attribute_value(&desc.attributes, ATTR_KEY_FINGERPRINT)
            .map(parse_fingerprint)
            .transpose()?;

        let media = desc
            .media_descriptions
            .iter()
            .map(MediaSection::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(SdpDocument { media, fingerprint })
    }
}

impl TryFrom<&MediaDescription> for MediaSection {
    type Error = Error;

    fn try_from(m: &MediaDescription) -> Result<Self> {
        let port = u16::try_from(m.media_name.port.value)
            .map_err(|_| Error::ErrInvalidPort(m.media_name.port.value))?;

        let mut section = MediaSection {
            kind: m.media_name.media.clone(),
            port,
            ..Default::default()
        };

        for a in &m.attributes {
            let value = a.value.as_deref().unwrap_or_default();
            match a.key.as_str() {
                ATTR_KEY_ICE_UFRAG => section.ice_ufrag = Some(value.to_owned()),
                ATTR_KEY_FINGERPRINT => section.fingerprint = Some(parse_fingerprint(value)?),
                ATTR_KEY_SETUP => section.setup = Some(value.to_owned()),
                ATTR_KEY_RTPMAP => section.rtp.push(parse_rtpmap(value)?),
                ATTR_KEY_FMTP => section.fmtp.push(parse_fmtp(value)?),
                ATTR_KEY_RTCP_FB => section.rtcp_feedback.push(parse_rtcp_fb(value)?),
                ATTR_KEY_EXTMAP => section.ext.push(parse_extmap(value)?),
                _ => {}
            }
        }

        Ok(section)
    }
}

fn attribute_value<'a>(attributes: &'a [Attribute], key: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|a| a.key == key)
        .map(|a| a.value.as_deref().unwrap_or_default())
}

/// Splits `<head> <rest>` at the first run of whitespace.
fn split_head(value: &str) -> (&str, &str) {
    let value = value.trim();
    match value.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (value, ""),
    }
}

pub(crate) fn parse_fingerprint(value: &str) -> Result<Fingerprint> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(Error::ErrInvalidFingerprint(value.to_owned()));
    }

    Ok(Fingerprint {
        typ: parts[0].to_owned(),
        hash: parts[1].to_owned(),
    })
}

pub(crate) fn parse_rtpmap(value: &str) -> Result<RtpMap> {
    let (payload_type, encoding) = split_head(value);
    if encoding.is_empty() {
        return Err(Error::ErrInvalidRtpMap(value.to_owned()));
    }
    let payload_type = payload_type.parse::<PayloadType>()?;

    let mut split = encoding.split('/');
    let codec_name = split.next().unwrap_or_default();
    if codec_name.is_empty() {
        return Err(Error::ErrInvalidRtpMap(value.to_owned()));
    }
    let clock_rate = match split.next() {
        Some(rate) => rate.parse::<u32>()?,
        None => 0,
    };
    let encoding_param = split.next().and_then(|enc| enc.parse::<u16>().ok());

    Ok(RtpMap {
        payload_type,
        codec_name: codec_name.to_owned(),
        clock_rate,
        encoding_param,
    })
}

pub(crate) fn parse_fmtp(value: &str) -> Result<FmtpLine> {
    let (payload_type, config) = split_head(value);
    if payload_type.is_empty() {
        return Err(Error::ErrInvalidFmtp(value.to_owned()));
    }

    Ok(FmtpLine {
        payload_type: payload_type.parse::<PayloadType>()?,
        config: config.to_owned(),
    })
}

pub(crate) fn parse_rtcp_fb(value: &str) -> Result<RtcpFbLine> {
    let (payload_type, feedback) = split_head(value);
    let (typ, rest) = split_head(feedback);
    // only the first token after the type, e.g. "tmmbr" of "ccm tmmbr smaxpr=120"
    let (subtype, _) = split_head(rest);
    if typ.is_empty() {
        return Err(Error::ErrInvalidRtcpFb(value.to_owned()));
    }

    let payload_type = if payload_type == PAYLOAD_TYPE_WILDCARD {
        None
    } else {
        Some(payload_type.parse::<PayloadType>()?)
    };

    Ok(RtcpFbLine {
        payload_type,
        typ: typ.to_owned(),
        subtype: (!subtype.is_empty()).then(|| subtype.to_owned()),
    })
}

pub(crate) fn parse_extmap(value: &str) -> Result<ExtMapLine> {
    let fields: Vec<&str> = value.split_whitespace().collect();
    if fields.len() < 2 {
        return Err(Error::ErrInvalidExtMap(value.to_owned()));
    }

    // <id>[/<direction>]
    let id = match fields[0].split_once('/') {
        Some((id, _direction)) => id,
        None => fields[0],
    };

    Ok(ExtMapLine {
        uri: fields[1].to_owned(),
        id: id.parse::<u16>()?,
    })
}
