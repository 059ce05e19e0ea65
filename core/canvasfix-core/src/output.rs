//! Report rendering for the CLI

use std::io::Write;

use anyhow::Result;

use crate::artifact::{PatchReport, COMPLETION_NOTICE};

/// Write the human completion line.
pub fn write_report_plain(_report: &PatchReport, mut w: impl Write) -> Result<()> {
    writeln!(w, "{COMPLETION_NOTICE}")?;
    Ok(())
}

/// Write the report as a prettified JSON object.
pub fn write_report_json(report: &PatchReport, mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}
