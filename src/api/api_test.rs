use std::thread;

use super::*;
use crate::description::{FmtpLine, MediaSection, RtpMap};
use crate::fmtp::Parameters;

fn opus_document() -> SdpDocument {
    SdpDocument {
        media: vec![MediaSection {
            kind: "audio".to_owned(),
            port: 9,
            ice_ufrag: Some("abc".to_owned()),
            rtp: vec![RtpMap {
                payload_type: 111,
                codec_name: "opus".to_owned(),
                clock_rate: 48000,
                encoding_param: Some(2),
            }],
            fmtp: vec![FmtpLine {
                payload_type: 111,
                config: "minptime=10;useinbandfec=1".to_owned(),
            }],
            ..Default::default()
        }],
        ..Default::default()
    }
}

#[test]
fn test_default_extractor() {
    let extractor = CapabilityExtractorBuilder::new().build();
    let caps = extractor.rtp_capabilities(&opus_document());

    assert_eq!(caps.codecs.len(), 1);
    assert_eq!(
        caps.codecs[0].parameters.get("useinbandfec").map(String::as_str),
        Some("1")
    );
    assert_eq!(caps, crate::extract_rtp_capabilities(&opus_document()));
}

#[test]
fn test_with_fmtp_parser() {
    let extractor = CapabilityExtractorBuilder::new()
        .with_fmtp_parser(|config: &str| {
            let mut parameters = Parameters::new();
            parameters.insert("raw".to_owned(), config.to_owned());
            parameters
        })
        .build();

    let caps = extractor.rtp_capabilities(&opus_document());
    assert_eq!(caps.codecs[0].parameters.len(), 1);
    assert_eq!(
        caps.codecs[0].parameters.get("raw").map(String::as_str),
        Some("minptime=10;useinbandfec=1")
    );
}

#[test]
fn test_dtls_parameters_without_fingerprint() {
    let extractor = CapabilityExtractor::default();
    assert_eq!(
        extractor.dtls_parameters(&opus_document()),
        Err(crate::Error::ErrNoFingerprint)
    );
}

#[test]
fn test_extractor_shared_between_threads() {
    let extractor = CapabilityExtractor::default();
    let doc = Arc::new(opus_document());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let extractor = extractor.clone();
            let doc = Arc::clone(&doc);
            thread::spawn(move || extractor.rtp_capabilities(&doc))
        })
        .collect();

    for handle in handles {
        let caps = handle.join().expect("extraction thread panicked");
        assert_eq!(caps.codecs[0].mime_type, "audio/opus");
    }
}
