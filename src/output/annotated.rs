use anyhow::Result;
use std::collections::HashMap;
use std::fmt::Write;

use super::style::{StyleTable, paint};
use crate::model::{InterfaceSnapshot, PeerSnapshot};

/// `wg show` output split into the interface header and one raw line block per peer.
struct RawBlocks<'a> {
    header: Vec<&'a str>,
    peers: HashMap<&'a str, Vec<&'a str>>,
}

fn split_blocks(raw: &str) -> RawBlocks<'_> {
    let mut header = Vec::new();
    let mut peers: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut current: Option<&str> = None;
    let mut seen_interface = false;

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("interface:") {
            if seen_interface {
                break;
            }
            seen_interface = true;
        }

        if let Some(key) = trimmed.strip_prefix("peer:") {
            let key = key.trim();
            peers.entry(key).or_default();
            current = Some(key);
            continue;
        }

        match current {
            Some(key) => peers.entry(key).or_default().push(line),
            None => header.push(line),
        }
    }

    RawBlocks { header, peers }
}

fn trim_trailing_blank<'a, 'b>(lines: &'b [&'a str]) -> &'b [&'a str] {
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |i| i + 1);
    &lines[..end]
}

/// Re-emits the original status text with annotations inserted below each peer line.
///
/// Header lines and every line inside a peer block are kept verbatim; peers appear in the
/// snapshot's (filtered, sorted) order.
pub fn render_annotated(
    raw: &str,
    snapshot: &InterfaceSnapshot,
    styles: &StyleTable,
) -> Result<String> {
    let blocks = split_blocks(raw);
    let mut out = String::new();

    for line in trim_trailing_blank(&blocks.header) {
        match line.trim().strip_prefix("interface:") {
            Some(name) => {
                let styled = paint(&format!("interface: {}", name.trim()), styles.interface);
                writeln!(out, "{}", styled)?;
            }
            None => writeln!(out, "{}", line)?,
        }
    }

    for peer in &snapshot.peers {
        out.push('\n');
        write_peer(&mut out, peer, styles)?;

        let body = blocks
            .peers
            .get(peer.public_key.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default();
        for line in trim_trailing_blank(body) {
            writeln!(out, "{}", line)?;
        }
    }

    if !snapshot.peers.is_empty() {
        out.push('\n');
    }

    Ok(out)
}

fn write_peer(out: &mut String, peer: &PeerSnapshot, styles: &StyleTable) -> Result<()> {
    writeln!(
        out,
        "{}",
        paint(&format!("peer: {}", peer.public_key), styles.peer)
    )?;

    let metadata = [
        ("nickname", &peer.nickname, styles.nickname),
        ("maintainer", &peer.maintainer, styles.maintainer),
        ("group", &peer.group, styles.group),
    ];
    for (label, value, style) in metadata {
        if !value.is_empty() {
            writeln!(out, "  {}: {}", label, paint(value, style))?;
        }
    }

    Ok(())
}
