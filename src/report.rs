use std::error::Error;

use log::info;

use crate::{
    quests::{questname::QuestName, reference_list::ReferenceList},
    reconciler::{QuestStatusLine, Reconciliation},
    utilities::{
        constants::{RECONCILIATION_FILE_PREFIX, REPORT_TITLE},
        file_management::save_to_file,
        string_manipulators::date_time_as_string,
    },
};

pub fn generate_report(reconciliation: &Reconciliation, reference: &ReferenceList) -> String {
    let mut report = generate_report_header(reconciliation, reference);

    report.push_str(&generate_status_section(
        "F2P QUESTS STATUS",
        &reconciliation.f2p,
    ));
    report.push('\n');
    report.push_str(&generate_status_section(
        "MEMBERS QUESTS STATUS (Sample)",
        &reconciliation.members,
    ));

    report.push_str(&format!(
        "\n=== SUMMARY ===\n\
         Quests found in local file: {}\n\
         Quests missing from local file: {}\n",
        reconciliation.found.len(),
        reconciliation.missing.len()
    ));

    if !reconciliation.missing.is_empty() {
        report.push('\n');
        report.push_str(&generate_numbered_section(
            "MISSING QUESTS",
            &reconciliation.missing,
        ));
    }

    if !reconciliation.extra_local.is_empty() {
        report.push('\n');
        report.push_str(&generate_numbered_section(
            "LOCAL QUESTS NOT IN OFFICIAL LIST (may be formatting issues)",
            &reconciliation.extra_local,
        ));
    }

    report
}

fn generate_report_header(reconciliation: &Reconciliation, reference: &ReferenceList) -> String {
    format!(
        "=== {} ===\n\
         Local quests found: {}\n\
         Official F2P quests: {}\n\
         Sample Members quests checked: {}\n\
         Total official quests in this analysis: {}\n\n",
        REPORT_TITLE,
        reconciliation.local_count,
        reference.f2p.len(),
        reference.members.len(),
        reference.len()
    )
}

fn generate_status_section(title: &str, lines: &[QuestStatusLine]) -> String {
    let mut section = format!("=== {} ===\n", title);
    for line in lines {
        section.push_str(&format!("{:<8} - {}\n", line.status, line.quest));
    }
    section
}

fn generate_numbered_section(title: &str, quests: &[QuestName]) -> String {
    let mut section = format!("=== {} ===\n", title);
    for (i, quest) in quests.iter().enumerate() {
        section.push_str(&format!("{}. {}\n", i + 1, quest));
    }
    section
}

/// Writes the reconciliation as json to `<dir>/quest_reconciliation_<date>.json`
/// and returns the path.
pub fn save_reconciliation(
    reconciliation: &Reconciliation,
    dir: &str,
) -> Result<String, Box<dyn Error>> {
    let path = format!(
        "{}/{}{}.json",
        dir.trim_end_matches('/'),
        RECONCILIATION_FILE_PREFIX,
        date_time_as_string(None, None)
    );
    save_to_file(&path, reconciliation)?;
    info!("Saved reconciliation to {}", path);
    Ok(path)
}
