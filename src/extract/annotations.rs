use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

use super::directive::is_directive;
use crate::model::{Annotations, PeerAnnotation};

pub const PEER_MARKER: &str = "[Peer]";
pub const INTERFACE_MARKER: &str = "[Interface]";
const PUBLIC_KEY: &str = "PublicKey";

static MAINTAINER_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(@([A-Za-z0-9_]+)\)$").expect("maintainer pattern is valid"));

/// Recovers nickname, group and maintainer for every annotated `[Peer]` in a config file.
///
/// Conventions, all positional:
///
/// ```text
/// # Office                 <- group for every `##` peer below it
///
/// ## Alice (@bob)          <- nickname "Alice", maintainer "bob"
/// [Peer]
/// PublicKey = ...
///
/// # Printer                <- bare nickname
/// [Peer]
/// PublicKey = ...
/// ```
pub fn extract_annotations<S: AsRef<str>>(lines: &[S]) -> Annotations {
    let mut scanner = Scanner::default();
    for line in lines {
        scanner.advance(line.as_ref());
    }
    scanner.finish()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Comment {
    Single(String),
    Double(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    Idle,
    SawSingleComment(String),
    SawDoubleComment(String),
    /// Inside a `[Peer]` section before its `PublicKey`. `trailing` holds a comment seen on the
    /// previous line, which belongs to the next section if the key never shows up.
    InPeerAwaitingKey {
        annotation: PeerAnnotation,
        trailing: Option<Comment>,
    },
}

enum Line<'a> {
    Interface,
    Peer,
    DoubleComment(&'a str),
    SingleComment(&'a str),
    PublicKey(&'a str),
    Other,
}

fn classify(line: &str) -> Line<'_> {
    if line == PEER_MARKER {
        return Line::Peer;
    }
    if line == INTERFACE_MARKER {
        return Line::Interface;
    }
    if let Some(rest) = line.strip_prefix("##") {
        return Line::DoubleComment(rest.trim());
    }
    if let Some(rest) = line.strip_prefix('#') {
        return Line::SingleComment(rest.trim());
    }
    if let Some((key, value)) = line.split_once('=') {
        if key.trim().eq_ignore_ascii_case(PUBLIC_KEY) {
            return Line::PublicKey(value.trim());
        }
    }
    Line::Other
}

struct Scanner {
    state: ScanState,
    group: Option<String>,
    peers: HashMap<String, PeerAnnotation>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            state: ScanState::Idle,
            group: None,
            peers: HashMap::new(),
        }
    }
}

impl Scanner {
    fn advance(&mut self, line: &str) {
        let state = std::mem::replace(&mut self.state, ScanState::Idle);

        self.state = match classify(line.trim()) {
            Line::Interface => {
                self.abandon(&state);
                self.group = None;
                ScanState::Idle
            }
            Line::Peer => {
                self.abandon(&state);
                let annotation = self.open_peer(state);
                ScanState::InPeerAwaitingKey {
                    annotation,
                    trailing: None,
                }
            }
            Line::DoubleComment(text) => match state {
                ScanState::InPeerAwaitingKey { annotation, .. } => ScanState::InPeerAwaitingKey {
                    annotation,
                    trailing: Some(Comment::Double(text.to_string())),
                },
                _ => ScanState::SawDoubleComment(text.to_string()),
            },
            Line::SingleComment(text) if !is_directive(text) => {
                self.group = Some(text.to_string());
                match state {
                    ScanState::InPeerAwaitingKey { annotation, .. } => {
                        ScanState::InPeerAwaitingKey {
                            annotation,
                            trailing: Some(Comment::Single(text.to_string())),
                        }
                    }
                    _ => ScanState::SawSingleComment(text.to_string()),
                }
            }
            Line::PublicKey(key) => match state {
                ScanState::InPeerAwaitingKey { annotation, .. } => {
                    if !annotation.is_empty() {
                        self.peers.insert(key.to_string(), annotation);
                    }
                    ScanState::Idle
                }
                _ => ScanState::Idle,
            },
            Line::SingleComment(_) | Line::Other => match state {
                ScanState::InPeerAwaitingKey { annotation, .. } => ScanState::InPeerAwaitingKey {
                    annotation,
                    trailing: None,
                },
                _ => ScanState::Idle,
            },
        };
    }

    fn open_peer(&self, previous: ScanState) -> PeerAnnotation {
        let comment = match previous {
            ScanState::SawSingleComment(text) => Some(Comment::Single(text)),
            ScanState::SawDoubleComment(text) => Some(Comment::Double(text)),
            ScanState::InPeerAwaitingKey { trailing, .. } => trailing,
            ScanState::Idle => None,
        };

        match comment {
            Some(Comment::Double(text)) => {
                let (nickname, maintainer) = split_maintainer(&text);
                PeerAnnotation {
                    nickname,
                    maintainer,
                    group: self.group.clone().unwrap_or_default(),
                }
            }
            Some(Comment::Single(text)) => {
                let (nickname, maintainer) = split_maintainer(&text);
                PeerAnnotation {
                    nickname,
                    maintainer,
                    group: String::new(),
                }
            }
            None => PeerAnnotation::default(),
        }
    }

    fn abandon(&self, state: &ScanState) {
        if let ScanState::InPeerAwaitingKey { annotation, .. } = state {
            debug!(
                nickname = %annotation.nickname,
                "peer section ended without a PublicKey, dropping its annotation"
            );
        }
    }

    fn finish(self) -> Annotations {
        self.abandon(&self.state);
        Annotations::new(self.peers)
    }
}

/// Splits `Name (@handle)` into `("Name", "handle")`.
pub fn split_maintainer(text: &str) -> (String, String) {
    let text = text.trim();
    match MAINTAINER_SUFFIX.captures(text) {
        Some(captures) => {
            let maintainer = captures[1].to_string();
            let nickname = MAINTAINER_SUFFIX.replace(text, "").trim().to_string();
            (nickname, maintainer)
        }
        None => (text.to_string(), String::new()),
    }
}
