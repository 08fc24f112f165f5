use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Highest value accepted for any preference slider
pub const MAX_PREFERENCE: u8 = 10;

/// Basic taste preferences, each on a 0..=10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TastePreferences {
    pub sweet: u8,
    pub sour: u8,
    pub salty: u8,
    pub bitter: u8,
    pub umami: u8,
}

/// Texture preferences, each on a 0..=10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TexturePreferences {
    pub crunchy: u8,
    pub creamy: u8,
    pub chewy: u8,
}

/// A user's personalised sensory profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensoryProfile {
    pub taste: TastePreferences,
    pub texture: TexturePreferences,
}

impl Default for SensoryProfile {
    fn default() -> Self {
        Self {
            taste: TastePreferences {
                sweet: 6,
                sour: 4,
                salty: 7,
                bitter: 3,
                umami: 8,
            },
            texture: TexturePreferences {
                crunchy: 7,
                creamy: 8,
                chewy: 5,
            },
        }
    }
}

impl SensoryProfile {
    fn sliders(&self) -> [(&'static str, u8); 8] {
        [
            ("sweet", self.taste.sweet),
            ("sour", self.taste.sour),
            ("salty", self.taste.salty),
            ("bitter", self.taste.bitter),
            ("umami", self.taste.umami),
            ("crunchy", self.texture.crunchy),
            ("creamy", self.texture.creamy),
            ("chewy", self.texture.chewy),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.sliders() {
            if value > MAX_PREFERENCE {
                return Err(Error::InvalidInput(format!(
                    "{} preference {} exceeds {}",
                    name, value, MAX_PREFERENCE
                )));
            }
        }
        Ok(())
    }
}

/// A recipe the user has cooked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub recipe_id: String,
    pub name: String,
    pub cooked_on: NaiveDate,
    /// 1..=5 stars
    pub rating: u8,
}
