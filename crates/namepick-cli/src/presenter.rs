//! CLI presenter for group listings and draws.

use std::io::{self, Write};

use namepick_core::ViewState;

use crate::ui;

/// Writes CLI results to stdout.
pub struct CliPresenter {
    quiet: bool,
    color: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            color: !ui::is_color_disabled() && console::Term::stdout().is_term(),
        }
    }

    /// Presenter that never emits ANSI styling.
    #[must_use]
    pub fn plain(quiet: bool) -> Self {
        Self {
            quiet,
            color: false,
        }
    }

    /// Lines listing the members of the active group.
    ///
    /// Quiet mode prints bare names only.
    #[must_use]
    pub fn name_lines(&self, view: &ViewState) -> Vec<String> {
        if self.quiet {
            return view.names.iter().map(|n| n.name.clone()).collect();
        }
        let mut lines = vec![ui::heading(&view.group, self.color)];
        if view.names.is_empty() {
            lines.push("(no names)".to_string());
        }
        for entry in &view.names {
            if entry.chosen {
                lines.push(format!("  {}", ui::chosen(&entry.name, self.color)));
            } else {
                lines.push(format!("  {}", entry.name));
            }
        }
        lines
    }

    /// Lines listing all groups, marking the active one.
    #[must_use]
    pub fn group_lines(&self, groups: &[String], active: &str) -> Vec<String> {
        groups
            .iter()
            .map(|group| {
                if self.quiet {
                    group.clone()
                } else if group == active {
                    format!("* {group}")
                } else {
                    format!("  {group}")
                }
            })
            .collect()
    }

    /// Lines for drawn names, one per line.
    #[must_use]
    pub fn pick_lines(&self, picks: &[String]) -> Vec<String> {
        picks.iter().map(|p| ui::picked(p, self.color)).collect()
    }

    pub fn present_names(&self, view: &ViewState) -> io::Result<()> {
        write_lines(&self.name_lines(view))
    }

    pub fn present_groups(&self, groups: &[String], active: &str) -> io::Result<()> {
        write_lines(&self.group_lines(groups, active))
    }

    pub fn present_picks(&self, picks: &[String]) -> io::Result<()> {
        write_lines(&self.pick_lines(picks))
    }

    /// Informational message, suppressed in quiet mode.
    pub fn present_notice(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        write_lines(&[text.to_string()])
    }

    pub fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}

fn write_lines(lines: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
