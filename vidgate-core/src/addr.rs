//! Client address resolution behind a trusted proxy
//!
//! The CDN in front of the service forwards the originating client address in
//! a header; the transport peer is the CDN edge itself and only a fallback.

use crate::error::AddressError;
use std::net::IpAddr;

/// Resolve the caller's address from the trusted header and the transport peer.
///
/// The header value wins when present, even if malformed: a proxy that sends a
/// garbage header is a misconfiguration worth surfacing, not something to
/// paper over with the peer address.
pub fn resolve_client_addr(
    header: Option<&str>,
    peer: Option<IpAddr>,
) -> Result<IpAddr, AddressError> {
    tracing::debug!("cf-connecting-ip: {:?}, client ip: {:?}", header, peer);

    // An empty header counts as absent
    match header.filter(|value| !value.is_empty()) {
        Some(value) => value
            .parse()
            .map_err(|_| AddressError::Invalid(value.to_string())),
        None => peer.ok_or(AddressError::Missing),
    }
}
