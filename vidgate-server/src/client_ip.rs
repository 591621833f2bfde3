//! Client IP extractor

use axum::async_trait;
use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum::http::StatusCode;
use std::net::{IpAddr, SocketAddr};
use vidgate_core::addr::resolve_client_addr;

/// Header the CDN uses to forward the originating client address
pub const CLIENT_IP_HEADER: &str = "cf-connecting-ip";

/// The caller's resolved network address.
///
/// Prefers the trusted CDN header over the transport peer; rejects with 400
/// when neither yields a parseable address.
#[derive(Debug, Clone, Copy)]
pub struct ClientIp(pub IpAddr);

#[async_trait]
impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(CLIENT_IP_HEADER)
            .and_then(|value| value.to_str().ok());
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0.ip());

        resolve_client_addr(header, peer)
            .map(ClientIp)
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
    }
}
