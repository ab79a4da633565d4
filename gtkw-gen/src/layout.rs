//! Rendering of GTKWave save files.
//!
//! A layout is a handful of directives followed by one trace per line:
//!
//! ```text
//! [*]
//! [size] 1900 900
//! -comp_foo
//! -Inputs:
//! comp_foo.reset
//! -Outputs:
//! comp_foo.q0[7:0]
//! ```
//!
//! Lines starting with `-` are comment/label traces; empty groups get no label.

use std::fmt;

use gtkw_parser::GroupedSignals;

/// Marks the start of a save file; GTKWave ignores the rest of the line.
pub const WILDCARD_MARKER: &str = "[*]";

/// GTKWave main window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDocument {
    lines: Vec<String>,
}

impl LayoutDocument {
    pub fn new(module_name: &str, signals: &GroupedSignals, size: WindowSize) -> Self {
        let mut lines = vec![
            WILDCARD_MARKER.to_string(),
            format!("[size] {} {}", size.width, size.height),
            format!("-{}", module_name),
        ];

        for (group, members) in signals.iter_groups() {
            if members.is_empty() {
                continue;
            }
            lines.push(format!("-{}:", group.label()));
            lines.extend(
                members
                    .iter()
                    .map(|signal| format!("{}.{}", module_name, signal)),
            );
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of signal traces, excluding directives and labels.
    pub fn trace_count(&self) -> usize {
        self.lines.iter().filter(|line| is_trace(line)).count()
    }
}

fn is_trace(line: &str) -> bool {
    !line.starts_with('-') && !line.starts_with('[')
}

impl fmt::Display for LayoutDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
