//! Discovery of the top-level Verilog source through the simulation script.
//!
//! A Vivado simulation script elaborates the design with a line such as
//!
//! ```text
//! xelab  comp_foo glbl -prj top.prj
//! ```
//!
//! naming the top module and a project file. The project file lists the
//! sources, one library entry per line:
//!
//! ```text
//! verilog work "../comp_foo.v"
//! ```
//!
//! Relative paths are resolved against the directory of the file that
//! mentions them.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::GenError;

const PROJECT_FLAG: &str = "-prj";

/// Project file entry kinds that can name a Verilog source.
const SOURCE_KINDS: [&str; 2] = ["verilog", "sv"];

/// Everything found by following the chain of references from the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSources {
    pub module_name: String,
    pub script: PathBuf,
    pub project_file: PathBuf,
    pub source_file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ProjectLocator {
    elaborate_command: String,
}

impl ProjectLocator {
    pub fn new(elaborate_command: impl Into<String>) -> Self {
        Self {
            elaborate_command: elaborate_command.into(),
        }
    }

    pub fn elaborate_command(&self) -> &str {
        &self.elaborate_command
    }

    /// Follows script -> project file -> Verilog source.
    ///
    /// Every missing link is a [`GenError::Lookup`] naming the file that
    /// should have contained it.
    pub fn discover(&self, script: &Path) -> Result<ProjectSources, GenError> {
        let script_lines = read_lines(script)?;

        let invocation = self.find_invocation(&script_lines).ok_or_else(|| {
            GenError::lookup(script, format!("unable to find {}", self.elaborate_command))
        })?;
        debug!("elaboration: {}", invocation.join(" "));

        let module_name = invocation
            .get(1)
            .filter(|word| !word.starts_with('-'))
            .ok_or_else(|| {
                GenError::lookup(
                    script,
                    format!("unable to find a module after {}", self.elaborate_command),
                )
            })?
            .to_string();

        let project_ref = invocation
            .iter()
            .rposition(|word| *word == PROJECT_FLAG)
            .and_then(|index| invocation.get(index + 1))
            .ok_or_else(|| GenError::lookup(script, format!("unable to find {}", PROJECT_FLAG)))?;
        let project_file = resolve_relative(script, project_ref);
        info!(
            "module {} with project file {}",
            module_name,
            project_file.display()
        );

        let project_lines = read_lines(&project_file)?;
        let source_ref = find_source(&project_lines, &module_name).ok_or_else(|| {
            GenError::lookup(&project_file, format!("unable to find {}", module_name))
        })?;
        let source_file = resolve_relative(&project_file, &source_ref);
        info!("module {} is in {}", module_name, source_file.display());

        Ok(ProjectSources {
            module_name,
            script: script.to_path_buf(),
            project_file,
            source_file,
        })
    }

    /// Words of the last line that runs the elaboration command.
    fn find_invocation<'a>(&self, lines: &'a [String]) -> Option<Vec<&'a str>> {
        lines
            .iter()
            .map(|line| line.split_whitespace().collect::<Vec<_>>())
            .filter(|words| {
                words
                    .first()
                    .is_some_and(|command| self.is_elaborate_command(command))
            })
            .last()
    }

    // `xelab` also matches `/opt/Xilinx/Vivado/bin/xelab`
    fn is_elaborate_command(&self, word: &str) -> bool {
        word == self.elaborate_command
            || Path::new(word)
                .file_name()
                .is_some_and(|name| name == self.elaborate_command.as_str())
    }
}

/// Source path of the last project entry whose file is `<module>.v` or `<module>.sv`.
fn find_source(lines: &[String], module_name: &str) -> Option<String> {
    let candidates = [format!("{}.v", module_name), format!("{}.sv", module_name)];

    lines
        .iter()
        .filter_map(|line| {
            let words: Vec<&str> = line.split_whitespace().collect();
            if !words.first().is_some_and(|kind| SOURCE_KINDS.contains(kind)) {
                return None;
            }
            // <kind> <library> <file>...
            words
                .iter()
                .skip(2)
                .map(|word| word.trim_matches('"'))
                .find(|file| {
                    Path::new(file)
                        .file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| candidates.iter().any(|c| c == name))
                })
                .map(str::to_string)
        })
        .last()
}

fn resolve_relative(referrer: &Path, target: &str) -> PathBuf {
    let target = Path::new(target);
    if target.is_absolute() {
        return target.to_path_buf();
    }
    referrer
        .parent()
        .map(|dir| dir.join(target))
        .unwrap_or_else(|| target.to_path_buf())
}

/// Reads a text file as lines without their terminators.
pub(crate) fn read_lines(path: &Path) -> Result<Vec<String>, GenError> {
    let content = fs::read_to_string(path).map_err(|source| GenError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn last_invocation_wins() {
        let locator = ProjectLocator::new("xelab");
        let script = lines("xelab first glbl -prj a.prj\necho done\nxelab second glbl -prj b.prj\n");
        let words = locator.find_invocation(&script).unwrap();
        assert_eq!(words[1], "second");
    }

    #[test]
    fn invocation_by_full_path() {
        let locator = ProjectLocator::new("xelab");
        let script = lines("/opt/Xilinx/bin/xelab top -prj top.prj");
        assert!(locator.find_invocation(&script).is_some());
        assert!(locator
            .find_invocation(&lines("xelabx top -prj top.prj"))
            .is_none());
    }

    #[test]
    fn source_matches_whole_file_name() {
        let prj = lines(
            "verilog work \"../comp_foo_tb.v\"\nverilog work \"../comp_foo.vh\"\nverilog work \"../comp_foo.v\"\n",
        );
        assert_eq!(find_source(&prj, "comp_foo").as_deref(), Some("../comp_foo.v"));
    }

    #[test]
    fn source_in_sv_entry_with_several_files() {
        let prj = lines("vhdl work \"pkg.vhd\"\nsv xil_defaultlib \"a.sv\" \"rtl/top.sv\"\n");
        assert_eq!(find_source(&prj, "top").as_deref(), Some("rtl/top.sv"));
    }

    #[test]
    fn source_ignores_other_kinds() {
        let prj = lines("vhdl work \"top.v\"\n");
        assert_eq!(find_source(&prj, "top"), None);
    }

    #[test]
    fn relative_paths_follow_referrer() {
        assert_eq!(
            resolve_relative(Path::new("sim/simulate.sh"), "top.prj"),
            PathBuf::from("sim/top.prj")
        );
        assert_eq!(
            resolve_relative(Path::new("simulate.sh"), "../comp_foo.v"),
            PathBuf::from("../comp_foo.v")
        );
        assert_eq!(
            resolve_relative(Path::new("sim/top.prj"), "/abs/top.v"),
            PathBuf::from("/abs/top.v")
        );
    }
}
