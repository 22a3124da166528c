pub const DEFAULT_QUESTS_PATH: &str = "quests.js";

pub const RECONCILIATION_FILE_PREFIX: &str = "quest_reconciliation_";

pub const REPORT_TITLE: &str = "OSRS Quest Comparison Analysis";

// Anything shorter is an id or a stray key rather than a quest name
pub const MIN_QUEST_NAME_LENGTH: usize = 3;
