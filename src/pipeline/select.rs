use clap::ValueEnum;

use crate::model::{InterfaceSnapshot, PeerSnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Most recent handshake first
    Asc,
    /// Stalest handshake first
    Desc,
}

#[derive(Debug, Clone, Default)]
pub struct PeerFilter {
    pub maintainer: Option<String>,
    pub group: Option<String>,
}

impl PeerFilter {
    pub fn new(maintainer: Option<String>, group: Option<String>) -> Self {
        Self {
            maintainer: maintainer.filter(|m| !m.is_empty()),
            group: group.filter(|g| !g.is_empty()),
        }
    }

    pub fn matches(&self, peer: &PeerSnapshot) -> bool {
        let maintainer_ok = self
            .maintainer
            .as_deref()
            .is_none_or(|maintainer| peer.maintainer == maintainer);
        let group_ok = self
            .group
            .as_deref()
            .is_none_or(|group| peer.group == group);
        maintainer_ok && group_ok
    }
}

#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub filter: PeerFilter,
    pub sort: Option<SortOrder>,
}

impl Selection {
    /// Drops filtered peers and orders the rest. Ties keep their original order.
    pub fn apply(&self, snapshot: &mut InterfaceSnapshot) {
        snapshot.peers.retain(|peer| self.filter.matches(peer));

        match self.sort {
            Some(SortOrder::Asc) => snapshot.peers.sort_by_key(|peer| peer.handshake_seconds),
            Some(SortOrder::Desc) => snapshot
                .peers
                .sort_by(|a, b| b.handshake_seconds.cmp(&a.handshake_seconds)),
            None => {}
        }
    }
}
