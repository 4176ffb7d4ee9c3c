#[cfg(test)]
mod api_test;

use std::fmt;
use std::sync::Arc;

use crate::description::SdpDocument;
use crate::dtls_transport::dtls_parameters::DtlsParameters;
use crate::dtls_transport::extract_dtls_parameters;
use crate::error::Result;
use crate::fmtp::{DefaultFmtpConfigParser, FmtpConfigParser};
use crate::rtp_capabilities::{extract_rtp_capabilities_with, RtpCapabilities};

/// CapabilityExtractor turns session descriptions into RTP capabilities and
/// DTLS parameters. It holds no per-call state and can be shared between
/// threads.
#[derive(Clone)]
pub struct CapabilityExtractor {
    pub(crate) fmtp_parser: Arc<dyn FmtpConfigParser + Send + Sync>,
}

impl Default for CapabilityExtractor {
    fn default() -> Self {
        CapabilityExtractorBuilder::new().build()
    }
}

impl fmt::Debug for CapabilityExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityExtractor").finish_non_exhaustive()
    }
}

impl CapabilityExtractor {
    /// rtp_capabilities extracts the codecs and header extensions of the
    /// first audio and first video media section.
    pub fn rtp_capabilities(&self, doc: &SdpDocument) -> RtpCapabilities {
        extract_rtp_capabilities_with(doc, self.fmtp_parser.as_ref())
    }

    /// dtls_parameters extracts the DTLS role and fingerprint of the first
    /// active media section.
    pub fn dtls_parameters(&self, doc: &SdpDocument) -> Result<DtlsParameters> {
        extract_dtls_parameters(doc)
    }
}

#[derive(Default)]
pub struct CapabilityExtractorBuilder {
    fmtp_parser: Option<Arc<dyn FmtpConfigParser + Send + Sync>>,
}

impl CapabilityExtractorBuilder {
    pub fn new() -> Self {
        CapabilityExtractorBuilder::default()
    }

    pub fn build(mut self) -> CapabilityExtractor {
        CapabilityExtractor {
            fmtp_parser: if let Some(fmtp_parser) = self.fmtp_parser.take() {
                fmtp_parser
            } else {
                Arc::new(DefaultFmtpConfigParser)
            },
        }
    }

    /// with_fmtp_parser replaces the parser used for `a=fmtp` configuration
    /// strings.
    pub fn with_fmtp_parser<P>(mut self, fmtp_parser: P) -> Self
    where
        P: FmtpConfigParser + Send + Sync + 'static,
    {
        self.fmtp_parser = Some(Arc::new(fmtp_parser));
        self
    }
}
