use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::output::{ColorMode, RenderMode};
use crate::pipeline::{PeerFilter, Selection, SortOrder};

#[derive(Parser, Debug)]
#[command(
    name = "wg-show",
    about = "wg show, annotated with peer nicknames, groups and maintainers from config comments"
)]
pub struct Cli {
    #[arg(short = 'v', long, help = "Print version and exit")]
    pub version: bool,

    #[arg(long, help = "Render peers as a table")]
    pub show_table: bool,

    #[arg(long, conflicts_with = "show_table", help = "Render the snapshot as JSON")]
    pub json: bool,

    #[arg(long, value_name = "NAME", help = "Only show peers with this exact maintainer")]
    pub filter_maintainer: Option<String>,

    #[arg(long, value_name = "NAME", help = "Only show peers in this exact group")]
    pub filter_group: Option<String>,

    #[arg(long, value_name = "ORDER", help = "Sort peers by latest handshake (asc, desc)")]
    pub sort_handshake: Option<SortOrder>,

    #[arg(long, help = "When to color output (default from settings, else auto)")]
    pub color: Option<ColorMode>,

    #[arg(long, value_name = "PATH", help = "Settings file (default: ~/.config/wg-show/settings.toml)")]
    pub settings: Option<PathBuf>,

    #[arg(help = "Arguments forwarded to `wg show` (e.g. an interface name); `--` forwards the rest")]
    pub wg_args: Vec<String>,
}

impl Cli {
    /// Parses the command line, forwarding every token that is not one of our own flags to
    /// `wg show` unchanged, including ones that start with `-`. A bare `--` forwards the rest.
    pub fn parse_forwarding<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut command = Self::command();
        command.build();

        let mut args = args.into_iter().map(Into::into);
        let mut ours: Vec<OsString> = args.next().into_iter().collect();
        let mut forwarded = Vec::new();

        while let Some(arg) = args.next() {
            let text = arg.to_string_lossy().into_owned();
            if text == "--" {
                forwarded.extend(args.by_ref());
                break;
            }
            match own_flag(&command, &text) {
                Some(needs_value) => {
                    ours.push(arg);
                    if needs_value {
                        ours.extend(args.next());
                    }
                }
                None => forwarded.push(arg),
            }
        }

        ours.push("--".into());
        ours.extend(forwarded);
        Self::parse_from(ours)
    }

    pub fn render_mode(&self) -> RenderMode {
        if self.json {
            RenderMode::Json
        } else if self.show_table {
            RenderMode::Table
        } else {
            RenderMode::Annotated
        }
    }

    pub fn selection(&self) -> Selection {
        Selection {
            filter: PeerFilter::new(self.filter_maintainer.clone(), self.filter_group.clone()),
            sort: self.sort_handshake,
        }
    }
}

/// `Some(needs_value)` when `token` names one of our flags; `needs_value` is true when the flag
/// takes a value that was not given inline (`--color=never`, `-ofoo`).
fn own_flag(command: &clap::Command, token: &str) -> Option<bool> {
    let (arg, inline) = if let Some(long) = token.strip_prefix("--") {
        let (name, value) = match long.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (long, None),
        };
        let arg = command.get_arguments().find(|arg| arg.get_long() == Some(name))?;
        (arg, value.is_some())
    } else {
        let mut chars = token.strip_prefix('-')?.chars();
        let short = chars.next()?;
        let arg = command.get_arguments().find(|arg| arg.get_short() == Some(short))?;
        (arg, chars.next().is_some())
    };
    Some(arg.get_action().takes_values() && !inline)
}
