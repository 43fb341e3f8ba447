use anyhow::Result;
use std::fmt::Write;

use super::style::{StyleTable, paint};
use crate::config::TableWidths;
use crate::model::{InterfaceSnapshot, PeerSnapshot};

const MIN_RULE_WIDTH: usize = 120;
const KEY_PREVIEW_CHARS: usize = 16;
const ELLIPSIS: &str = "...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Nickname,
    Maintainer,
    Group,
    Endpoint,
    Handshake,
}

impl Column {
    pub fn title(&self) -> &'static str {
        match self {
            Column::Nickname => "Nickname",
            Column::Maintainer => "Maintainer",
            Column::Group => "Group",
            Column::Endpoint => "Endpoint",
            Column::Handshake => "Handshake",
        }
    }

    fn value(&self, peer: &PeerSnapshot) -> String {
        let raw = match self {
            Column::Nickname => {
                if peer.nickname.is_empty() {
                    return key_preview(&peer.public_key);
                }
                &peer.nickname
            }
            Column::Maintainer => &peer.maintainer,
            Column::Group => &peer.group,
            Column::Endpoint => &peer.endpoint,
            Column::Handshake => &peer.latest_handshake,
        };

        if raw.is_empty() {
            "-".to_string()
        } else {
            raw.clone()
        }
    }

    fn style(&self, styles: &StyleTable) -> Option<owo_colors::Style> {
        match self {
            Column::Nickname => styles.nickname,
            Column::Maintainer => styles.maintainer,
            Column::Group => styles.group,
            Column::Endpoint => styles.endpoint,
            Column::Handshake => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub column: Column,
    pub width: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSpec {
    pub columns: Vec<ColumnSpec>,
}

impl Default for TableSpec {
    fn default() -> Self {
        Self::new(&TableWidths::default())
    }
}

impl TableSpec {
    pub fn new(widths: &TableWidths) -> Self {
        let columns = [
            (Column::Nickname, widths.nickname),
            (Column::Maintainer, widths.maintainer),
            (Column::Group, widths.group),
            (Column::Endpoint, widths.endpoint),
            (Column::Handshake, widths.handshake),
        ]
        .into_iter()
        .map(|(column, width)| ColumnSpec { column, width })
        .collect();

        Self { columns }
    }

    fn rule(&self) -> String {
        let content: usize = self.columns.iter().map(|c| c.width).sum::<usize>()
            + self.columns.len().saturating_sub(1);
        "─".repeat(content.max(MIN_RULE_WIDTH))
    }
}

pub fn render_table(
    snapshot: &InterfaceSnapshot,
    spec: &TableSpec,
    styles: &StyleTable,
) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "{}{}", paint("Interface: ", styles.heading), snapshot.name)?;
    if !snapshot.public_key.is_empty() {
        writeln!(
            out,
            "{}{}",
            paint("Public Key: ", styles.label),
            snapshot.public_key
        )?;
    }
    if !snapshot.listening_port.is_empty() {
        writeln!(
            out,
            "{}{}",
            paint("Listening Port: ", styles.label),
            snapshot.listening_port
        )?;
    }
    out.push('\n');

    if snapshot.peers.is_empty() {
        out.push_str("No peers found.\n");
        return Ok(out);
    }

    let rule = spec.rule();
    let header = spec
        .columns
        .iter()
        .map(|c| fit(c.column.title(), c.width))
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(out, "{}", paint("Peers:", styles.label))?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", paint(&header, styles.label))?;
    writeln!(out, "{}", rule)?;

    for peer in &snapshot.peers {
        let row = spec
            .columns
            .iter()
            .map(|c| paint(&fit(&c.column.value(peer), c.width), c.column.style(styles)))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", row)?;

        if !peer.allowed_ips.is_empty() {
            writeln!(out, "  Allowed IPs: {}", peer.allowed_ips)?;
        }
        if !peer.transfer.is_empty() {
            writeln!(out, "  Transfer: {}", peer.transfer)?;
        }
        out.push('\n');
    }

    Ok(out)
}

fn key_preview(public_key: &str) -> String {
    if public_key.chars().count() <= KEY_PREVIEW_CHARS {
        return public_key.to_string();
    }
    let preview: String = public_key.chars().take(KEY_PREVIEW_CHARS).collect();
    preview + ELLIPSIS
}

/// Truncates to `width` characters, ending in `...` when something was cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= ELLIPSIS.len() {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - ELLIPSIS.len()).collect();
    kept + ELLIPSIS
}

pub fn pad_right(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

/// Truncated and padded to exactly `width` characters.
pub fn fit(text: &str, width: usize) -> String {
    pad_right(&truncate(text, width), width)
}
