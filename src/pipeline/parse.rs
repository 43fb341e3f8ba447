use tracing::debug;

use super::handshake::handshake_seconds;
use crate::model::{Annotations, InterfaceSnapshot, PeerSnapshot};

fn field<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.strip_prefix(prefix).map(str::trim)
}

/// Rebuilds an [`InterfaceSnapshot`] from `wg show <interface>` output.
///
/// Peers are kept in the order `wg` printed them and seeded with their annotation when the
/// public key matches exactly. Only the first reported interface is represented.
pub fn parse_status(output: &str, annotations: &Annotations) -> InterfaceSnapshot {
    let mut snapshot = InterfaceSnapshot::default();
    let mut current: Option<PeerSnapshot> = None;
    let mut seen_interface = false;

    for line in output.lines() {
        let line = line.trim();

        if let Some(name) = field(line, "interface:") {
            if seen_interface {
                debug!(next = name, "status lists several interfaces, keeping the first");
                break;
            }
            seen_interface = true;
            snapshot.name = name.to_string();
        } else if let Some(key) = field(line, "peer:") {
            snapshot.peers.extend(current.take());
            current = Some(PeerSnapshot::new(key.to_string(), annotations.get(key)));
        } else if let Some(peer) = current.as_mut() {
            apply_peer_field(peer, line);
        } else if let Some(key) = field(line, "public key:") {
            snapshot.public_key = key.to_string();
        } else if let Some(port) = field(line, "listening port:") {
            snapshot.listening_port = port.to_string();
        }
    }

    snapshot.peers.extend(current);
    snapshot
}

fn apply_peer_field(peer: &mut PeerSnapshot, line: &str) {
    if let Some(value) = field(line, "endpoint:") {
        peer.endpoint = value.to_string();
    } else if let Some(value) = field(line, "allowed ips:") {
        peer.allowed_ips = value.to_string();
    } else if let Some(value) = field(line, "latest handshake:") {
        peer.latest_handshake = value.to_string();
        peer.handshake_seconds = handshake_seconds(value);
    } else if let Some(value) = field(line, "transfer:") {
        peer.transfer = value.to_string();
    } else if let Some(value) = field(line, "persistent keepalive:") {
        peer.persistent_keepalive = value.to_string();
    }
}

/// First interface named in status output, if any.
pub fn first_interface(output: &str) -> Option<&str> {
    output
        .lines()
        .find_map(|line| line.trim().strip_prefix("interface:"))
        .map(str::trim)
        .and_then(|rest| rest.split_whitespace().next())
}
