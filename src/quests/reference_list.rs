use std::error::Error;

use log::info;
use serde::{Deserialize, Serialize};

use crate::utilities::file_management::load_from_json_file;

const F2P_QUESTS: [&str; 22] = [
    "The Restless Ghost",
    "The Knight's Sword",
    "The Corsair Curse",
    "Cook's Assistant",
    "Sheep Shearer",
    "Below Ice Mountain",
    "X Marks the Spot",
    "Misthalin Mystery",
    "Rune Mysteries",
    "Dragon Slayer I",
    "Pirate's Treasure",
    "Goblin Diplomacy",
    "Witch's Potion",
    "Black Knights' Fortress",
    "Doric's Quest",
    "Prince Ali Rescue",
    "Imp Catcher",
    "Vampyre Slayer",
    "Ernest the Chicken",
    "Shield of Arrav",
    "Demon Slayer",
    "Romeo & Juliet",
];

// Not the full members list, a sample of the major ones
const MEMBERS_QUESTS_SAMPLE: [&str; 62] = [
    "Druidic Ritual",
    "Lost City",
    "Witch's House",
    "Merlin's Crystal",
    "Heroes' Quest",
    "Scorpion Catcher",
    "Family Crest",
    "Fishing Contest",
    "Tribal Totem",
    "Monk's Friend",
    "Temple of Ikov",
    "Clock Tower",
    "Holy Grail",
    "Tree Gnome Village",
    "Fight Arena",
    "Hazeel Cult",
    "Sheep Herder",
    "Plague City",
    "Sea Slug",
    "Waterfall Quest",
    "Jungle Potion",
    "The Grand Tree",
    "Underground Pass",
    "Observatory Quest",
    "The Tourist Trap",
    "Watchtower",
    "Dwarf Cannon",
    "Murder Mystery",
    "The Dig Site",
    "Gertrude's Cat",
    "Legends' Quest",
    "Death Plateau",
    "Eadgar's Ruse",
    "Big Chompy Bird Hunting",
    "Elemental Workshop I",
    "Nature Spirit",
    "Priest in Peril",
    "Regicide",
    "Shilo Village",
    "Monkey Madness I",
    "Desert Treasure",
    "Recipe for Disaster",
    "Animal Magnetism",
    "Horror from the Deep",
    "Throne of Miscellania",
    "The Fremennik Trials",
    "Dragon Slayer II",
    "Monkey Madness II",
    "Song of the Elves",
    "Desert Treasure II - The Fallen Empire",
    "Sins of the Father",
    "A Taste of Hope",
    "Making Friends with My Arm",
    "Bone Voyage",
    "Client of Kourend",
    "Architectural Alliance",
    "The Ascent of Arceuus",
    "The Depths of Despair",
    "The Forsaken Tower",
    "The Queen of Thieves",
    "Tale of the Righteous",
    "The Final Dawn",
];

/// Quests the local file is checked against, in report order.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ReferenceList {
    pub f2p: Vec<String>,
    pub members: Vec<String>,
}

impl ReferenceList {
    pub fn new(f2p: Vec<String>, members: Vec<String>) -> Self {
        ReferenceList { f2p, members }
    }

    /// Built-in list based on the OSRS wiki: every free-to-play quest and a
    /// sample of members quests.
    pub fn osrs_default() -> Self {
        ReferenceList::new(
            F2P_QUESTS.iter().map(|q| q.to_string()).collect(),
            MEMBERS_QUESTS_SAMPLE.iter().map(|q| q.to_string()).collect(),
        )
    }

    /// Expects `{"f2p": [...], "members": [...]}`.
    pub fn from_json_file(path: &str) -> Result<Self, Box<dyn Error>> {
        let list = load_from_json_file::<ReferenceList>(path)?;
        info!(
            "Loaded reference list from {} with {} f2p and {} members quests",
            path,
            list.f2p.len(),
            list.members.len()
        );
        Ok(list)
    }

    /// Free-to-play entries first, then members.
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.f2p.iter().chain(self.members.iter())
    }

    pub fn len(&self) -> usize {
        self.f2p.len() + self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.f2p.is_empty() && self.members.is_empty()
    }
}
