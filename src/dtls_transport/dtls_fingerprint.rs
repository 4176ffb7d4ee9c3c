use serde::{Deserialize, Serialize};

use crate::description::Fingerprint;

/// DtlsFingerprint specifies the hash function algorithm and certificate
/// fingerprint as described in [RFC 4572].
///
/// ## Specifications
///
/// * [W3C]
///
/// [W3C]: https://w3c.github.io/webrtc-pc/#rtcdtlsfingerprint
/// [RFC 4572]: https://tools.ietf.org/html/rfc4572
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtlsFingerprint {
    /// Algorithm specifies one of the the hash function algorithms defined in
    /// the 'Hash function Textual Names' registry.
    pub algorithm: String,

    /// Value specifies the value of the certificate fingerprint as
    /// expressed utilizing the syntax of 'fingerprint' in
    /// <https://tools.ietf.org/html/rfc4572#section-5>.
    pub value: String,
}

impl From<&Fingerprint> for DtlsFingerprint {
    fn from(fingerprint: &Fingerprint) -> Self {
        DtlsFingerprint {
            algorithm: fingerprint.typ.clone(),
            value: fingerprint.hash.clone(),
        }
    }
}
