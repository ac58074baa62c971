use crate::catalog::PresetCatalog;
use crate::commands::{CmdMessage, CmdResult};

pub fn run<C: PresetCatalog + ?Sized>(catalog: &C) -> CmdResult {
    let presets = catalog.presets().to_vec();
    let mut result = CmdResult::default();
    if presets.is_empty() {
        result.add_message(CmdMessage::info("The preset catalog is empty."));
    }
    result.with_presets(presets)
}
