
pub mod rtp_codec;

use std::collections::HashMap;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::description::{MediaSection, PayloadType, SdpDocument};
use crate::fmtp::{DefaultFmtpConfigParser, FmtpConfigParser};
use rtp_codec::*;

/// RtpCapabilities represents the codecs and header extensions a session
/// description offers.
/// <https://w3c.github.io/webrtc-pc/#rtcrtpcapabilities>
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtpCapabilities {
    pub codecs: Vec<RtpCodecParameters>,
    pub header_extensions: Vec<RtpHeaderExtension>,
    /// Always empty, FEC mechanisms are not discovered from the SDP.
    pub fec_mechanisms: Vec<String>,
}

/// Codecs in first-seen order, indexed by payload type.
#[derive(Default)]
struct CodecTable {
    codecs: Vec<RtpCodecParameters>,
    by_payload_type: HashMap<PayloadType, usize>,
}

impl CodecTable {
    /// A codec reusing a known payload type replaces the old one in place.
    fn insert(&mut self, codec: RtpCodecParameters) {
        match self.by_payload_type.get(&codec.preferred_payload_type) {
            Some(&index) => self.codecs[index] = codec,
            None => {
                self.by_payload_type
                    .insert(codec.preferred_payload_type, self.codecs.len());
                self.codecs.push(codec);
            }
        }
    }

    fn get_mut(&mut self, payload_type: PayloadType) -> Option<&mut RtpCodecParameters> {
        let index = *self.by_payload_type.get(&payload_type)?;
        self.codecs.get_mut(index)
    }
}

/// extract_rtp_capabilities collects the codecs and RTP header extensions of
/// the first audio and the first video media section of `doc`.
pub fn extract_rtp_capabilities(doc: &SdpDocument) -> RtpCapabilities {
    extract_rtp_capabilities_with(doc, &DefaultFmtpConfigParser)
}

pub(crate) fn extract_rtp_capabilities_with(
    doc: &SdpDocument,
    fmtp_parser: &dyn FmtpConfigParser,
) -> RtpCapabilities {
    let mut table = CodecTable::default();
    let mut header_extensions = vec![];
    let mut got_audio = false;
    let mut got_video = false;

    for (i, m) in doc.media.iter().enumerate() {
        let kind = RtpCodecKind::from(m.kind.as_str());
        let got_kind = match kind {
            RtpCodecKind::Audio => &mut got_audio,
            RtpCodecKind::Video => &mut got_video,
            RtpCodecKind::Unspecified => {
                trace!("skipping media section {i} of type {}", m.kind);
                continue;
            }
        };
        if *got_kind {
            trace!("skipping media section {i}, already got {kind}");
            continue;
        }
        *got_kind = true;

        add_media_section(&mut table, &mut header_extensions, kind, m, fmtp_parser);
    }

    debug!(
        "extracted {} codecs and {} header extensions",
        table.codecs.len(),
        header_extensions.len()
    );

    RtpCapabilities {
        codecs: table.codecs,
        header_extensions,
        fec_mechanisms: vec![],
    }
}

fn add_media_section(
    table: &mut CodecTable,
    header_extensions: &mut Vec<RtpHeaderExtension>,
    kind: RtpCodecKind,
    m: &MediaSection,
    fmtp_parser: &dyn FmtpConfigParser,
) {
    for rtp in &m.rtp {
        let channels = if kind == RtpCodecKind::Audio {
            Some(rtp.encoding_param.filter(|&c| c != 0).unwrap_or(1))
        } else {
            None
        };

        table.insert(RtpCodecParameters {
            name: rtp.codec_name.clone(),
            mime_type: format!("{kind}/{}", rtp.codec_name),
            kind,
            clock_rate: rtp.clock_rate,
            preferred_payload_type: rtp.payload_type,
            channels,
            rtcp_feedback: vec![],
            parameters: Default::default(),
        });
    }

    for fmtp in &m.fmtp {
        let parameters = fmtp_parser.parse_config(&fmtp.config);
        if let Some(codec) = table.get_mut(fmtp.payload_type) {
            codec.parameters = parameters;
        }
    }

    for fb in &m.rtcp_feedback {
        let Some(codec) = fb.payload_type.and_then(|pt| table.get_mut(pt)) else {
            continue;
        };
        codec.rtcp_feedback.push(RtcpFeedback {
            typ: fb.typ.clone(),
            parameter: fb.subtype.clone().filter(|s| !s.is_empty()),
        });
    }

    for ext in &m.ext {
        header_extensions.push(RtpHeaderExtension {
            kind,
            uri: ext.uri.clone(),
            preferred_id: ext.id,
        });
    }
}
