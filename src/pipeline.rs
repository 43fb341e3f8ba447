pub mod handshake;
pub mod parse;
pub mod read;
pub mod select;

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::extract::extract_annotations;
use crate::model::{Annotations, InterfaceSnapshot};

pub use handshake::handshake_seconds;
pub use parse::{first_interface, parse_status};
pub use select::{PeerFilter, Selection, SortOrder};

// `wg show all` and `wg show interfaces` print shapes the status parser does not understand.
const PASSTHROUGH_TARGETS: &[&str] = &["all", "interfaces"];

/// Picks the interface whose config should annotate this status output.
///
/// Returns `None` when the forwarded arguments ask for something other than the plain
/// single-interface view, or when a bare `wg show` reported several interfaces. The output is
/// then shown untouched.
pub fn enrichment_target(wg_args: &[String], output: &str) -> Option<String> {
    match wg_args {
        [] if interface_count(output) > 1 => None,
        [] => first_interface(output).map(str::to_string),
        [target] if PASSTHROUGH_TARGETS.contains(&target.as_str()) => None,
        [target] => Some(target.clone()),
        _ => None,
    }
}

fn interface_count(output: &str) -> usize {
    output
        .lines()
        .filter(|line| line.trim().starts_with("interface:"))
        .count()
}

pub async fn load_annotations(config_dir: &Path, interface: &str) -> Result<Annotations> {
    let path = read::config_path(config_dir, interface);
    let lines = read::read_config_lines(&path).await?;
    let annotations = extract_annotations(&lines);

    debug!(
        config = %path.display(),
        lines = lines.len(),
        annotated = annotations.len(),
        "loaded peer annotations"
    );

    Ok(annotations)
}

pub fn build_snapshot(
    output: &str,
    annotations: &Annotations,
    selection: &Selection,
) -> InterfaceSnapshot {
    let mut snapshot = parse_status(output, annotations);
    let total = snapshot.peers.len();
    selection.apply(&mut snapshot);

    debug!(
        interface = %snapshot.name,
        total,
        shown = snapshot.peers.len(),
        "selected peers"
    );

    snapshot
}
