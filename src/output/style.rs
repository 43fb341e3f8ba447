use clap::ValueEnum;
use owo_colors::{OwoColorize, Style};
use serde::Deserialize;
use std::io::IsTerminal;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => {
                std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Style per kind of rendered value. `None` renders the text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleTable {
    pub interface: Option<Style>,
    pub heading: Option<Style>,
    pub label: Option<Style>,
    pub peer: Option<Style>,
    pub nickname: Option<Style>,
    pub maintainer: Option<Style>,
    pub group: Option<Style>,
    pub endpoint: Option<Style>,
}

impl StyleTable {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn colored() -> Self {
        Self {
            interface: Some(Style::new().cyan()),
            heading: Some(Style::new().cyan().bold()),
            label: Some(Style::new().white().bold()),
            peer: Some(Style::new().yellow()),
            nickname: Some(Style::new().green()),
            maintainer: Some(Style::new().blue().bold()),
            group: Some(Style::new().magenta()),
            endpoint: Some(Style::new().yellow()),
        }
    }

    pub fn for_mode(mode: ColorMode) -> Self {
        if mode.enabled() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

pub fn paint(text: &str, style: Option<Style>) -> String {
    match style {
        Some(style) => text.style(style).to_string(),
        None => text.to_string(),
    }
}
