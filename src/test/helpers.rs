use std::collections::BTreeSet;

use crate::quests::{questname::QuestName, reference_list::ReferenceList};

pub static QUESTS_JS_SAMPLE_PATH: &str = "src/test/quests_sample.js";

pub fn local_quests(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub fn raw_names(quests: &[QuestName]) -> Vec<String> {
    quests.iter().map(|quest| quest.raw.clone()).collect()
}

pub fn small_reference_list() -> ReferenceList {
    ReferenceList::new(
        vec![
            "Cook's Assistant".to_string(),
            "Black Knights' Fortress".to_string(),
            "Imp Catcher".to_string(),
            "Rune Mysteries".to_string(),
        ],
        vec![
            "Druidic Ritual".to_string(),
            "Witch's House".to_string(),
            "Desert Treasure II - The Fallen Empire".to_string(),
        ],
    )
}
