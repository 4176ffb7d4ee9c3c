#![warn(rust_2018_idioms)]
#![allow(dead_code)]

//! Extraction of RTP capabilities and DTLS parameters from a session
//! description.
//!
//! The input is an [`SdpDocument`], either built directly, deserialized from
//! the JSON produced by `sdp-transform`, or parsed from SDP text through the
//! [`sdp`] crate:
//!
//! ```
//! use std::io::Cursor;
//! use webrtc_sdp_capabilities::{extract_dtls_parameters, extract_rtp_capabilities, SdpDocument};
//!
//! let offer = "v=0\r\n\
//! o=- 1 2 IN IP4 127.0.0.1\r\n\
//! s=-\r\n\
//! t=0 0\r\n\
//! m=audio 9 UDP/TLS/RTP/SAVPF 111\r\n\
//! a=ice-ufrag:abc\r\n\
//! a=fingerprint:sha-256 AA:BB\r\n\
//! a=setup:actpass\r\n\
//! a=rtpmap:111 opus/48000/2\r\n";
//!
//! let doc = SdpDocument::unmarshal(&mut Cursor::new(offer.as_bytes())).unwrap();
//! let caps = extract_rtp_capabilities(&doc);
//! assert_eq!(caps.codecs[0].mime_type, "audio/opus");
//!
//! let dtls = extract_dtls_parameters(&doc).unwrap();
//! assert_eq!(dtls.role.to_string(), "auto");
//! ```

pub use sdp;

pub mod api;
pub mod description;
pub mod dtls_transport;
pub mod error;
pub mod fmtp;
pub mod rtp_capabilities;

pub use api::{CapabilityExtractor, CapabilityExtractorBuilder};
pub use description::SdpDocument;
pub use dtls_transport::extract_dtls_parameters;
pub use error::Error;
pub use rtp_capabilities::extract_rtp_capabilities;

pub(crate) const UNSPECIFIED_STR: &str = "Unspecified";
