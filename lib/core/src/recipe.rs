use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

/// A recipe as returned by an ingredient search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Minutes
    #[serde(default)]
    pub cooking_time: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasuredIngredient {
    pub name: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MeasuredIngredient {
    pub fn new(name: &str, amount: &str, note: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            amount: amount.to_string(),
            note: note.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub step: u32,
    pub text: String,
}

/// Full recipe with quantities and cooking steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub summary: RecipeSummary,
    #[serde(default)]
    pub measured_ingredients: Vec<MeasuredIngredient>,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

impl RecipeDetail {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    /// Number instructions from 1 in the order given
    pub fn with_steps(mut self, steps: &[&str]) -> Self {
        self.instructions = steps
            .iter()
            .enumerate()
            .map(|(i, text)| Instruction {
                step: i as u32 + 1,
                text: text.to_string(),
            })
            .collect();
        self
    }
}
