// Licensed under the Apache-2.0 license

//! SystemVerilog rendering.
//!
//! The register block is rendered as five fixed-order sections (ports,
//! register definitions, write process, combinational logic, read process),
//! each assembled as an ordered list of lines ([`Section`]) and joined in a
//! single pass. Sections can be inspected individually, so each one is
//! testable without comparing whole files.
//!
//! Rendering is deterministic: output depends only on the register list and
//! the [`EmitConfig`], with no environment-dependent formatting. It is also
//! total: a validated model always renders, and nothing is emitted for a
//! model that failed validation upstream.

use crate::model::{Field, Register};
use crate::util::hex32;

const DIVIDER: &str =
    "//--------------------------------------------------------------------------";

/// Configuration for the emitted module.
#[derive(Clone, Debug)]
pub struct EmitConfig {
    /// SystemVerilog module name.
    pub module_name: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        EmitConfig {
            module_name: "reg_block".to_string(),
        }
    }
}

impl EmitConfig {
    /// Override the generated module name.
    pub fn with_module_name(mut self, name: &str) -> Self {
        self.module_name = name.to_string();
        self
    }
}

/// One named section of the output: rendered lines in final order.
#[derive(Clone, Debug)]
pub struct Section {
    pub name: &'static str,
    pub lines: Vec<String>,
}

impl Section {
    fn new(name: &'static str) -> Section {
        Section {
            name,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn push_divider(&mut self, title: &str) {
        self.push(DIVIDER);
        self.push(format!("// {title}"));
        self.push(DIVIDER);
        self.push("");
    }
}

/// Renders the complete SystemVerilog register block.
pub fn generate_sv(registers: &[Register], config: &EmitConfig) -> String {
    let mut output = String::new();
    for section in sections(registers, config) {
        for line in &section.lines {
            output.push_str(line);
            output.push('\n');
        }
    }
    output.push_str("endmodule\n");
    output
}

/// Assembles the five output sections in their fixed order.
pub fn sections(registers: &[Register], config: &EmitConfig) -> Vec<Section> {
    vec![
        ports_section(registers, config),
        definitions_section(registers),
        write_section(registers),
        comb_section(registers),
        read_section(registers),
    ]
}

fn port_type(field: &Field) -> String {
    let width = field.range.width();
    if width > 1 {
        format!("logic [{}:0]", width - 1)
    } else {
        "logic       ".to_string()
    }
}

fn ports_section(registers: &[Register], config: &EmitConfig) -> Section {
    let mut s = Section::new("ports");
    s.push(format!("module {} (", config.module_name));
    s.push("    // Clock and Reset");
    s.push("    input  logic        i_clk,");
    s.push("    input  logic        i_rst_n,");
    s.push("");
    s.push("    // Bus Interface");
    s.push("    input  logic        i_write,");
    s.push("    input  logic        i_read,");
    s.push("    input  logic [31:0] i_addr,");
    s.push("    input  logic [31:0] i_wdata,");
    s.push("    output logic [31:0] o_rdata,");
    s.push("");
    for reg in registers {
        s.push(format!(
            "    // Register Field Outputs ({} - {})",
            reg.name(),
            reg.description()
        ));
        for field in reg.fields() {
            s.push(format!(
                "    output {}  {},",
                port_type(field),
                field.port_name()
            ));
        }
    }
    // The terminal port carries no separator.
    if let Some(last_port) = s.lines.iter_mut().rev().find(|l| l.ends_with(',')) {
        last_port.truncate(last_port.len() - 1);
    }
    s.push(");");
    s.push("");
    s
}

fn definitions_section(registers: &[Register]) -> Section {
    let mut s = Section::new("definitions");
    s.push_divider("Register Definitions");
    for reg in registers {
        let name = reg.name();
        let max_bit = reg
            .fields()
            .iter()
            .map(|f| f.range.msb)
            .max()
            .unwrap_or(0);
        s.push(format!("// {} @ 0x{:08x}", reg.description(), reg.offset()));
        s.push(format!(
            "localparam {name}_ADDR       = {};",
            hex32(reg.offset())
        ));
        s.push(format!(
            "localparam {name}_VALID_BIT  = {};  // [{max_bit}:0] valid bits",
            hex32(reg.valid_mask())
        ));
        s.push(format!(
            "localparam {name}_DEFAULT    = {};",
            hex32(reg.reset_default())
        ));
        s.push("");
    }
    for reg in registers {
        s.push(format!("logic [31:0] r_{};", reg.ident()));
    }
    for reg in registers {
        s.push(format!("logic        w_{}_wr;", reg.ident()));
    }
    s.push("");
    s
}

fn write_section(registers: &[Register]) -> Section {
    let mut s = Section::new("write");
    s.push_divider("Register Write Logic");
    s.push("always_ff @(posedge i_clk or negedge i_rst_n) begin");
    s.push("    if (~i_rst_n) begin");
    for reg in registers {
        s.push(format!("        // {}", reg.description()));
        s.push(format!("        r_{} <= {}_DEFAULT;", reg.ident(), reg.name()));
    }
    s.push("    end else begin");
    for reg in registers {
        // Bits outside the valid mask are cleared on every write, whatever
        // their prior value.
        s.push(format!("        // {}", reg.description()));
        s.push(format!("        if (w_{}_wr) begin", reg.ident()));
        s.push(format!(
            "            r_{} <= i_wdata & {}_VALID_BIT;",
            reg.ident(),
            reg.name()
        ));
        s.push("        end");
    }
    s.push("    end");
    s.push("end");
    s.push("");
    s
}

fn comb_section(registers: &[Register]) -> Section {
    let mut s = Section::new("comb");
    s.push_divider("Combinational Logic (Write Enables and Output Assignments)");
    s.push("always_comb begin : REG_REGION");
    s.push("    // Default assignments");
    for reg in registers {
        s.push(format!("    w_{}_wr = 1'b0;", reg.ident()));
    }
    s.push("");
    for reg in registers {
        s.push(format!("    // {}", reg.description()));
        s.push(format!(
            "    w_{}_wr = i_write & (i_addr == {}_ADDR);",
            reg.ident(),
            reg.name()
        ));
        s.push("");
    }
    for reg in registers {
        for field in reg.fields() {
            s.push(format!(
                "    {:<30} = r_{}{};",
                field.port_name(),
                reg.ident(),
                field.range.slice()
            ));
        }
    }
    s.push("");
    s.push("end");
    s.push("");
    s
}

fn read_section(registers: &[Register]) -> Section {
    let mut s = Section::new("read");
    s.push_divider("Register Read Logic");
    s.push("always_ff @(posedge i_clk or negedge i_rst_n) begin : READ_REG");
    s.push("    if (~i_rst_n) begin");
    s.push("        o_rdata <= 32'd0;");
    s.push("    end else if (i_read) begin");
    s.push("        case (i_addr)");
    for reg in registers {
        s.push(format!(
            "            {}_ADDR: o_rdata <= r_{};",
            reg.name(),
            reg.ident()
        ));
    }
    s.push("            default:  o_rdata <= 32'd0;");
    s.push("        endcase");
    s.push("    end else begin");
    // Hold the last read value while i_read is deasserted.
    s.push("        o_rdata <= o_rdata;");
    s.push("    end");
    s.push("end");
    s.push("");
    s
}
