use std::{
    collections::{BTreeSet, HashMap, HashSet},
    fmt,
};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::quests::{questname::QuestName, reference_list::ReferenceList};

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuestStatus {
    Found,
    Missing,
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // pad so callers can left-justify the status in a column
        match self {
            QuestStatus::Found => f.pad("FOUND"),
            QuestStatus::Missing => f.pad("MISSING"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct QuestStatusLine {
    pub quest: QuestName,
    pub status: QuestStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct Reconciliation {
    pub local_count: usize,
    /// One line per reference entry, in reference order
    pub f2p: Vec<QuestStatusLine>,
    pub members: Vec<QuestStatusLine>,
    /// One entry per distinct key of the reference list
    pub found: Vec<QuestName>,
    pub missing: Vec<QuestName>,
    /// Local quests the reference list doesn't know, sorted by raw name
    pub extra_local: Vec<QuestName>,
}

pub struct QuestReconciler {
    reference: ReferenceList,
}

impl QuestReconciler {
    pub fn new(reference: ReferenceList) -> Self {
        QuestReconciler { reference }
    }

    pub fn reference(&self) -> &ReferenceList {
        &self.reference
    }

    pub fn reconcile(&self, local_quests: &BTreeSet<String>) -> Reconciliation {
        let local_names = Self::index_by_key(local_quests.iter());
        let reference_names = Self::index_by_key(self.reference.all());

        let local_keys: HashSet<&str> = local_names.iter().map(|q| q.key.as_str()).collect();
        let reference_keys: HashSet<&str> =
            reference_names.iter().map(|q| q.key.as_str()).collect();

        let (found, missing): (Vec<QuestName>, Vec<QuestName>) = reference_names
            .iter()
            .cloned()
            .partition(|quest| local_keys.contains(quest.key.as_str()));

        let mut extra_local: Vec<QuestName> = local_names
            .iter()
            .filter(|quest| !reference_keys.contains(quest.key.as_str()))
            .cloned()
            .collect();
        extra_local.sort_by(|a, b| a.raw.cmp(&b.raw));

        for quest in &missing {
            debug!("Missing from local file: {}", quest);
        }
        info!(
            "Reconciled {} local quests against {} reference quests: {} found, {} missing, {} unrecognized",
            local_quests.len(),
            self.reference.len(),
            found.len(),
            missing.len(),
            extra_local.len()
        );

        Reconciliation {
            local_count: local_quests.len(),
            f2p: Self::status_lines(&self.reference.f2p, &local_keys),
            members: Self::status_lines(&self.reference.members, &local_keys),
            found,
            missing,
            extra_local,
        }
    }

    fn status_lines(quests: &[String], local_keys: &HashSet<&str>) -> Vec<QuestStatusLine> {
        quests
            .iter()
            .map(|raw| {
                let quest = QuestName::new(raw);
                let status = if local_keys.contains(quest.key.as_str()) {
                    QuestStatus::Found
                } else {
                    QuestStatus::Missing
                };
                QuestStatusLine { quest, status }
            })
            .collect()
    }

    /// One name per key. A key keeps the position where it was first seen but
    /// takes the raw name that was seen last.
    fn index_by_key<'a, I>(names: I) -> Vec<QuestName>
    where
        I: Iterator<Item = &'a String>,
    {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut indexed: Vec<QuestName> = Vec::new();

        for raw in names {
            let quest = QuestName::new(raw);
            match positions.get(&quest.key) {
                Some(&position) => indexed[position] = quest,
                None => {
                    positions.insert(quest.key.clone(), indexed.len());
                    indexed.push(quest);
                }
            }
        }
        indexed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::helpers::{local_quests, raw_names, small_reference_list};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_found_missing_and_extra() {
        init();
        let reconciler = QuestReconciler::new(ReferenceList::new(
            vec!["Cook's Assistant".to_string(), "Rune Mysteries".to_string()],
            vec![],
        ));

        let result = reconciler.reconcile(&local_quests(&["Cook's Assistant", "Sheep Shearer"]));

        assert_eq!(result.local_count, 2);
        assert_eq!(raw_names(&result.found), vec!["Cook's Assistant"]);
        assert_eq!(raw_names(&result.missing), vec!["Rune Mysteries"]);
        assert_eq!(raw_names(&result.extra_local), vec!["Sheep Shearer"]);
        assert_eq!(result.f2p[0].status, QuestStatus::Found);
        assert_eq!(result.f2p[1].status, QuestStatus::Missing);
        assert!(result.members.is_empty());
    }

    #[test]
    fn test_empty_local_set_misses_everything() {
        let reconciler = QuestReconciler::new(small_reference_list());

        let result = reconciler.reconcile(&BTreeSet::new());

        assert_eq!(result.local_count, 0);
        assert!(result.found.is_empty());
        assert_eq!(result.missing.len(), reconciler.reference().len());
        assert!(result.extra_local.is_empty());
        assert!(result
            .f2p
            .iter()
            .chain(result.members.iter())
            .all(|line| line.status == QuestStatus::Missing));
    }

    #[test]
    fn test_matching_ignores_case_and_punctuation() {
        let reconciler = QuestReconciler::new(small_reference_list());

        let result = reconciler.reconcile(&local_quests(&[
            "black knights fortress",
            "DESERT TREASURE II THE FALLEN EMPIRE",
            "Druidic-Ritual",
        ]));

        assert_eq!(
            raw_names(&result.found),
            vec![
                "Black Knights' Fortress",
                "Druidic Ritual",
                "Desert Treasure II - The Fallen Empire"
            ]
        );
        assert!(result.extra_local.is_empty());
    }

    #[test]
    fn test_status_lines_keep_reference_order_and_groups() {
        let reference = small_reference_list();
        let reconciler = QuestReconciler::new(reference.clone());

        let result = reconciler.reconcile(&local_quests(&["Imp Catcher"]));

        assert_eq!(
            result.f2p.iter().map(|l| l.quest.raw.clone()).collect::<Vec<_>>(),
            reference.f2p
        );
        assert_eq!(
            result
                .members
                .iter()
                .map(|l| l.quest.raw.clone())
                .collect::<Vec<_>>(),
            reference.members
        );
        let imp_catcher = result
            .f2p
            .iter()
            .find(|l| l.quest.raw == "Imp Catcher")
            .unwrap();
        assert_eq!(imp_catcher.status, QuestStatus::Found);
    }

    #[test]
    fn test_extra_local_is_sorted() {
        let reconciler = QuestReconciler::new(small_reference_list());

        let result = reconciler.reconcile(&local_quests(&[
            "Zogre Flesh Eaters",
            "Animal Magnetism",
            "Cook",
            "Witch\\",
        ]));

        assert_eq!(
            raw_names(&result.extra_local),
            vec!["Animal Magnetism", "Cook", "Witch\\", "Zogre Flesh Eaters"]
        );
    }

    #[test]
    fn test_reference_collision_keeps_first_position_and_last_name() {
        let reconciler = QuestReconciler::new(ReferenceList::new(
            vec![
                "Dragon Slayer I".to_string(),
                "Imp Catcher".to_string(),
                "Dragon-Slayer I".to_string(),
            ],
            vec![],
        ));

        let result = reconciler.reconcile(&BTreeSet::new());

        assert_eq!(
            raw_names(&result.missing),
            vec!["Dragon-Slayer I", "Imp Catcher"]
        );
        // Status lines are per raw entry, duplicates included
        assert_eq!(result.f2p.len(), 3);
    }

    #[test]
    fn test_local_collision_counts_once() {
        let reconciler = QuestReconciler::new(ReferenceList::new(
            vec!["Heroes' Quest".to_string()],
            vec![],
        ));

        let result = reconciler.reconcile(&local_quests(&["Heroes Quest", "heroes' quest"]));

        assert_eq!(result.local_count, 2);
        assert_eq!(raw_names(&result.found), vec!["Heroes' Quest"]);
        assert!(result.extra_local.is_empty());
    }

    #[test]
    fn test_status_display_is_padded() {
        assert_eq!(format!("{:<8}|", QuestStatus::Found), "FOUND   |");
        assert_eq!(format!("{:<8}|", QuestStatus::Missing), "MISSING |");
        assert_eq!(QuestStatus::Missing.to_string(), "MISSING");
    }
}
