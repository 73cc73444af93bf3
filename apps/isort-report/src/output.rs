//! Output rendering for check results.
//!
//! Supports `human` (default) and `json` outputs. Human output runs the
//! selected reporter; JSON prints the `CheckResult` itself.

use crate::error::Result;
use crate::models::CheckResult;
use crate::reporter::{ReportContext, Reporter};
use serde_json::Value as JsonVal;
use std::io::Write;

/// Whether ANSI colors should be used for `output`.
pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print a check result in the requested format.
pub fn print_result(
    res: &CheckResult,
    output: &str,
    reporter: &Reporter,
    ctx: &ReportContext,
    sink: &mut dyn Write,
) -> Result<()> {
    match output {
        "json" => {
            let body = serde_json::to_string_pretty(res).map_err(std::io::Error::other)?;
            writeln!(sink, "{}", body)?;
            Ok(())
        }
        _ => reporter.report(res, ctx, sink),
    }
}

/// Compose result JSON object (pure) for testing/snapshot purposes.
pub fn compose_result_json(res: &CheckResult) -> Result<JsonVal> {
    serde_json::to_value(res).map_err(|e| std::io::Error::other(e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    #[test]
    fn test_compose_result_json_empty() {
        let out = compose_result_json(&CheckResult::empty()).unwrap();
        assert_eq!(out, serde_json::json!({"success": true}));
    }

    #[test]
    fn test_compose_result_json_shape() {
        let res = parse("ERROR: a.py bad\nSkipped 2 files\n");
        let out = compose_result_json(&res).unwrap();
        assert_eq!(out["success"], false);
        assert_eq!(out["errorCount"], 1);
        assert_eq!(out["errorList"][0]["filename"], "a.py:");
        assert_eq!(out["errorList"][0]["reason"], " bad");
        assert_eq!(out["infoList"][0]["filename"], "");
        assert_eq!(out["infoList"][0]["reason"], "Skipped 2 files");
    }

    #[test]
    fn test_print_result_json_ignores_reporter() {
        let res = parse("ERROR: a.py bad\n");
        let mut buf: Vec<u8> = Vec::new();
        print_result(
            &res,
            "json",
            &Reporter::select(Some("fancy")),
            &ReportContext::new(""),
            &mut buf,
        )
        .unwrap();
        let v: JsonVal = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["errorCount"], 1);
        assert_eq!(v, compose_result_json(&res).unwrap());
    }

    #[test]
    fn test_print_result_human_uses_reporter() {
        let res = parse("ERROR: /w/a.py bad\n");
        let mut buf: Vec<u8> = Vec::new();
        print_result(
            &res,
            "human",
            &Reporter::default(),
            &ReportContext::new("/w"),
            &mut buf,
        )
        .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a.py:  bad\n");
    }
}
