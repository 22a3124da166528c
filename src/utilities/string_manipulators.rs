use chrono::{DateTime, Local};

pub fn date_time_as_string(dt: Option<DateTime<Local>>, format: Option<&str>) -> String {
    dt.unwrap_or(Local::now())
        .format(format.unwrap_or("%d_%m_%Y-%H-%M"))
        .to_string()
}

/// Comparison key for a quest name. Lowercases, then drops spaces, apostrophes,
/// double quotes and hyphens. Never shown to the user.
pub fn normalize_quest_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\'' | '"' | '-'))
        .collect::<String>()
}
