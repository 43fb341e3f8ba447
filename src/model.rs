use serde::Serialize;
use std::collections::HashMap;

/// Handshake seconds recorded for a peer that never completed a handshake.
pub const NEVER_HANDSHAKED: u64 = u64::MAX;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeerAnnotation {
    pub nickname: String,
    pub group: String,
    pub maintainer: String,
}

impl PeerAnnotation {
    pub fn is_empty(&self) -> bool {
        self.nickname.is_empty() && self.group.is_empty() && self.maintainer.is_empty()
    }
}

/// Public key to annotation mapping recovered from a WireGuard config file.
///
/// Built once by the extractor and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Annotations {
    peers: HashMap<String, PeerAnnotation>,
}

impl Annotations {
    pub fn new(peers: HashMap<String, PeerAnnotation>) -> Self {
        Self { peers }
    }

    pub fn get(&self, public_key: &str) -> Option<&PeerAnnotation> {
        self.peers.get(public_key)
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeerSnapshot {
    pub public_key: String,
    pub nickname: String,
    pub group: String,
    pub maintainer: String,
    pub endpoint: String,
    pub allowed_ips: String,
    pub latest_handshake: String,
    pub handshake_seconds: u64,
    pub transfer: String,
    pub persistent_keepalive: String,
}

impl PeerSnapshot {
    pub fn new(public_key: String, annotation: Option<&PeerAnnotation>) -> Self {
        let mut peer = Self {
            public_key,
            handshake_seconds: NEVER_HANDSHAKED,
            ..Self::default()
        };

        if let Some(annotation) = annotation {
            peer.nickname = annotation.nickname.clone();
            peer.group = annotation.group.clone();
            peer.maintainer = annotation.maintainer.clone();
        }

        peer
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceSnapshot {
    pub name: String,
    pub public_key: String,
    pub listening_port: String,
    pub peers: Vec<PeerSnapshot>,
}
