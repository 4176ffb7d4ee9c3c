use std::fmt;

use sdp::util::ConnectionRole;
use serde::{Deserialize, Serialize};

/// DtlsRole indicates the role of the DTLS transport.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DtlsRole {
    /// No usable `a=setup` attribute was found; the role is left unset.
    #[default]
    #[serde(rename = "unspecified")]
    Unspecified,

    /// Auto defines the DTLS role is determined based on
    /// the resolved ICE role: the ICE controlled role acts as the DTLS
    /// client and the ICE controlling role acts as the DTLS server.
    #[serde(rename = "auto")]
    Auto,

    /// Client defines the DTLS client role.
    #[serde(rename = "client")]
    Client,

    /// Server defines the DTLS server role.
    #[serde(rename = "server")]
    Server,
}

impl DtlsRole {
    pub fn is_unspecified(&self) -> bool {
        *self == DtlsRole::Unspecified
    }
}

impl fmt::Display for DtlsRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DtlsRole::Auto => write!(f, "auto"),
            DtlsRole::Client => write!(f, "client"),
            DtlsRole::Server => write!(f, "server"),
            DtlsRole::Unspecified => write!(f, "{}", crate::UNSPECIFIED_STR),
        }
    }
}

/// <https://tools.ietf.org/html/rfc5763>
/// setup:active initiates the handshake (client), setup:passive waits for it
/// (server) and setup:actpass leaves the choice to the answerer.
impl From<ConnectionRole> for DtlsRole {
    fn from(role: ConnectionRole) -> Self {
        match role {
            ConnectionRole::Active => DtlsRole::Client,
            ConnectionRole::Passive => DtlsRole::Server,
            ConnectionRole::Actpass => DtlsRole::Auto,
            _ => DtlsRole::Unspecified,
        }
    }
}

/// Maps the value of an `a=setup` attribute.
impl From<&str> for DtlsRole {
    fn from(setup: &str) -> Self {
        DtlsRole::from(ConnectionRole::from(setup))
    }
}
