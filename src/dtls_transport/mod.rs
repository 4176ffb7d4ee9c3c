
pub mod dtls_fingerprint;
pub mod dtls_parameters;
pub mod dtls_role;

use log::trace;

use crate::description::{MediaSection, SdpDocument};
use crate::error::{Error, Result};
use dtls_fingerprint::DtlsFingerprint;
use dtls_parameters::DtlsParameters;
use dtls_role::DtlsRole;

/// get_first_active_media_section returns the first media section that has
/// an ICE username fragment and was not rejected with port 0.
pub fn get_first_active_media_section(doc: &SdpDocument) -> Option<&MediaSection> {
    doc.media.iter().find(|m| m.is_active())
}

/// extract_dtls_parameters derives the DTLS role and the remote certificate
/// fingerprint from the first active media section of `doc`.
///
/// The fingerprint of the media section takes precedence over the session
/// level one. An `a=setup` value other than active, passive or actpass leaves
/// the role unspecified.
pub fn extract_dtls_parameters(doc: &SdpDocument) -> Result<DtlsParameters> {
    let media = get_first_active_media_section(doc).ok_or(Error::ErrNoActiveMediaSection)?;
    trace!("using media section of type {} for dtls parameters", media.kind);

    let fingerprint = media
        .fingerprint
        .as_ref()
        .or(doc.fingerprint.as_ref())
        .ok_or(Error::ErrNoFingerprint)?;

    let role = media
        .setup
        .as_deref()
        .map(DtlsRole::from)
        .unwrap_or_default();

    Ok(DtlsParameters {
        role,
        fingerprints: vec![DtlsFingerprint::from(fingerprint)],
    })
}
