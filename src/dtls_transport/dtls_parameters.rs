use serde::{Deserialize, Serialize};

use super::dtls_fingerprint::*;
use super::dtls_role::*;

/// DtlsParameters holds information relating to DTLS configuration.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtlsParameters {
    #[serde(default, skip_serializing_if = "DtlsRole::is_unspecified")]
    pub role: DtlsRole,
    pub fingerprints: Vec<DtlsFingerprint>,
}
