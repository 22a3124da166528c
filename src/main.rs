mod quest_extractor;
mod quests;
mod reconciler;
mod report;
mod test;
mod utilities;

use std::error::Error;

use log::{error, info, warn};

use quest_extractor::QuestExtractor;
use quests::reference_list::ReferenceList;
use reconciler::QuestReconciler;
use report::{generate_report, save_reconciliation};
use utilities::config::CONFIG;

fn load_reference_list() -> Result<ReferenceList, Box<dyn Error>> {
    if CONFIG.reference_list_path.is_empty() {
        info!("Using the built-in OSRS reference list");
        return Ok(ReferenceList::osrs_default());
    }
    ReferenceList::from_json_file(&CONFIG.reference_list_path)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let start_time = chrono::prelude::Local::now();
    info!("Starting at {}", start_time);

    let extractor = QuestExtractor::new(CONFIG.extraction_mode);
    let local_quests = extractor.extract_from_file(&CONFIG.quests_path)?;

    let reference = load_reference_list()?;
    if reference.is_empty() {
        warn!("Reference list is empty, every local quest will be reported as unrecognized");
    }
    let reconciler = QuestReconciler::new(reference);
    let reconciliation = reconciler.reconcile(&local_quests);

    print!("{}", generate_report(&reconciliation, reconciler.reference()));

    if !CONFIG.report_dir.is_empty() {
        if let Err(e) = save_reconciliation(&reconciliation, &CONFIG.report_dir) {
            error!("Failed to save reconciliation to {}: {}", CONFIG.report_dir, e);
        }
    }

    let end_time = chrono::prelude::Local::now();
    info!(
        "Quest check started at: {}. Finished at: {}. Took: {} seconds with {} local quests from: {}",
        start_time,
        end_time,
        (end_time - start_time).num_seconds(),
        local_quests.len(),
        CONFIG.quests_path
    );

    Ok(())
}
