// SPDX-FileCopyrightText: 2026 ChitChat Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Terminal output for the launcher: progress bars, notifications, and
//! release-notes rendering.

use console::style;
use indicatif::ProgressBar;

use chitchat_core::release_notes::{self, BlockKind, SpanStyle};
use chitchat_core::{DownloadProgress, UpdateObserver};

/// Print an informational line.
pub fn info(message: &str) {
    eprintln!("{}", style(message).cyan());
}

/// Observer that drives an indicatif bar per downloaded asset.
pub struct ProgressDisplay {
    bar: Option<ProgressBar>,
    asset: Option<String>,
}

impl ProgressDisplay {
    pub fn new() -> Self {
        Self {
            bar: None,
            asset: None,
        }
    }

    /// Clear any bar still on screen.
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        self.asset = None;
    }
}

impl UpdateObserver for ProgressDisplay {
    fn on_progress(&mut self, progress: DownloadProgress) {
        if self.asset.as_deref() != Some(progress.asset.as_str()) {
            // New asset started; the previous bar is done
            self.finish();
            let bar = ProgressBar::new(100);
            bar.set_message(progress.asset.clone());
            self.asset = Some(progress.asset.clone());
            self.bar = Some(bar);
        }

        if let Some(bar) = &self.bar {
            bar.set_position(progress.percent.round() as u64);
        }
    }

    fn on_notify(&mut self, message: &str) {
        info(message);
    }
}

/// Render release-notes markdown to stdout with terminal styling.
pub fn render_notes(text: &str) {
    for block in release_notes::parse(text) {
        match block.kind {
            BlockKind::Heading(level) => {
                let joined = block.lines.join(" ");
                if level <= 2 {
                    println!("{}", style(joined).bold().underlined());
                } else {
                    println!("{}", style(joined).bold());
                }
            }
            BlockKind::Bullets(_) => {
                for line in &block.lines {
                    println!("  • {}", render_line(line));
                }
            }
            BlockKind::Paragraph => {
                for line in &block.lines {
                    println!("{}", render_line(line));
                }
            }
        }
        println!();
    }
}

fn render_line(line: &str) -> String {
    release_notes::spans(line)
        .into_iter()
        .map(|span| match span.style {
            SpanStyle::Plain => span.text,
            SpanStyle::Bold => style(span.text).bold().to_string(),
            SpanStyle::Italic => style(span.text).italic().to_string(),
            SpanStyle::Underline => style(span.text).underlined().to_string(),
            // Terminals rarely render strikethrough; dim instead
            SpanStyle::Strikethrough => style(span.text).dim().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
