use actix_web::HttpRequest;

use crate::constants::UNKNOWN_SOURCE;

/// Identify the caller for rate limiting.
/// `trust_forwarded`: read `Forwarded` / `X-Forwarded-For` before the socket peer.
/// Falls back to `"unknown"` when no address is available.
pub fn client_source_id(req: &HttpRequest, trust_forwarded: bool) -> String {
    let info = req.connection_info();
    let addr = if trust_forwarded {
        info.realip_remote_addr()
    } else {
        info.peer_addr()
    };

    addr.map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string())
}
