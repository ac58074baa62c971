use crate::commands::{CmdMessage, CmdResult};
use crate::lint;
use crate::model::SpecInput;

pub fn run(input: &SpecInput) -> CmdResult {
    let findings = lint::lint(input);
    let mut result = CmdResult::default();
    if findings.is_empty() {
        result.add_message(CmdMessage::success("No findings. The spec looks complete."));
    }
    result.with_findings(findings)
}
