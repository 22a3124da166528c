use std::{
    error::Error,
    fs::{self, File},
    io::BufReader,
    path::Path,
};

use serde::{de::DeserializeOwned, Serialize};

pub fn save_to_file<T: Serialize>(path: &str, content: &T) -> Result<(), Box<dyn Error>> {
    // Create all parent directories if they don't exist
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(content)?;
    fs::write(path, json)?;

    Ok(())
}

pub fn load_from_json_file<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let content = serde_json::from_reader(reader)?;
    Ok(content)
}
