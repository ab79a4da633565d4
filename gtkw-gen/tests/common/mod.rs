use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const COMP_FOO_SCRIPT: &str = "#!/bin/sh\nxvlog --prj top.prj\nxelab  comp_foo glbl -prj top.prj -s comp_foo_sim\nxsim comp_foo_sim -R\n";

pub const COMP_FOO_PRJ: &str = "verilog work \"../comp_foo.v\"\nverilog work \"glbl.v\"\n";

pub const COMP_FOO_V: &str = "\
module comp_foo
(
 input  wire       reset,
 output wire [7:0] q0,
);
reg  [2:0]   rst_cnt;

always @ (posedge clk_pop or posedge reset ) begin : proc_flops
  rst_cnt <= rst_cnt + 1;
end
endmodule
";

#[allow(dead_code)]
pub const COMP_FOO_LAYOUT: &str = "\
[*]
[size] 1900 900
-comp_foo
-Inputs:
comp_foo.reset
-Outputs:
comp_foo.q0[7:0]
-Internals:
comp_foo.rst_cnt[2:0]
";

pub fn create_temp_file(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}

/// A project tree laid out like a Vivado export: sources at the root,
/// simulation files under `sim/`.
pub struct SimProject {
    pub root: TempDir,
}

impl SimProject {
    pub fn new(script: &str, prj: &str, verilog: &str) -> Self {
        let root = TempDir::new().unwrap();
        create_temp_file(root.path(), "sim/simulate.sh", script);
        create_temp_file(root.path(), "sim/top.prj", prj);
        create_temp_file(root.path(), "comp_foo.v", verilog);
        Self { root }
    }

    pub fn comp_foo() -> Self {
        Self::new(COMP_FOO_SCRIPT, COMP_FOO_PRJ, COMP_FOO_V)
    }

    pub fn script(&self) -> PathBuf {
        self.root.path().join("sim/simulate.sh")
    }

    #[allow(dead_code)]
    pub fn sim_dir(&self) -> PathBuf {
        self.root.path().join("sim")
    }

    #[allow(dead_code)]
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }
}
