use crate::error::QuizError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mammal,
    Bird,
    Reptile,
    Fish,
    Amphibian,
    Insect,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Mammal,
        Category::Bird,
        Category::Reptile,
        Category::Fish,
        Category::Amphibian,
        Category::Insect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mammal => "mammal",
            Category::Bird => "bird",
            Category::Reptile => "reptile",
            Category::Fish => "fish",
            Category::Amphibian => "amphibian",
            Category::Insect => "insect",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diet {
    Herbivore,
    Carnivore,
    Omnivore,
    Insectivore,
}

impl Diet {
    pub const ALL: [Diet; 4] = [
        Diet::Herbivore,
        Diet::Carnivore,
        Diet::Omnivore,
        Diet::Insectivore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Diet::Herbivore => "Herbivore",
            Diet::Carnivore => "Carnivore",
            Diet::Omnivore => "Omnivore",
            Diet::Insectivore => "Insectivore",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Diet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Diet::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown diet: {}", s))
    }
}

/// An entry of the animal catalog. Read-only to the quiz engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub diet: Diet,
    /// Comma-separated habitat phrases, the first one being the primary habitat.
    pub habitat: String,
    /// A sentence whose first word is the grammatical subject.
    pub fun_fact: String,
    pub image_url: String,
}

impl Animal {
    pub fn primary_habitat(&self) -> &str {
        self.habitat.split(',').next().unwrap_or_default().trim()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    ImageIdentification,
    Diet,
    Habitat,
    Category,
    FactTrueFalse,
    Comparison,
    HabitatMatch,
}

impl QuestionType {
    pub const ALL: [QuestionType; 7] = [
        QuestionType::ImageIdentification,
        QuestionType::Diet,
        QuestionType::Habitat,
        QuestionType::Category,
        QuestionType::FactTrueFalse,
        QuestionType::Comparison,
        QuestionType::HabitatMatch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::ImageIdentification => "image-identification",
            QuestionType::Diet => "diet",
            QuestionType::Habitat => "habitat",
            QuestionType::Category => "category",
            QuestionType::FactTrueFalse => "fact-true-false",
            QuestionType::Comparison => "comparison",
            QuestionType::HabitatMatch => "habitat-match",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        QuestionType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| format!("unknown question type: {}", s))
    }
}

/// A single generated quiz question. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question_text: String,
    pub correct_answer: String,
    /// Display strings in randomized order; contains `correct_answer` exactly once.
    pub options: Vec<String>,
    pub subject_animal: Animal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_animal: Option<Animal>,
}

impl Question {
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }

    /// Checks the options invariant: 2 to 4 unique entries, one of which is
    /// the correct answer.
    pub fn validate(&self) -> Result<(), QuizError> {
        let unique: HashSet<&str> = self.options.iter().map(String::as_str).collect();
        let well_formed = (2..=4).contains(&self.options.len())
            && unique.len() == self.options.len()
            && unique.contains(self.correct_answer.as_str());

        if well_formed {
            Ok(())
        } else {
            Err(QuizError::AmbiguousAnswer {
                id: self.id.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lion() -> Animal {
        Animal {
            id: "lion".to_string(),
            name: "Lion".to_string(),
            category: Category::Mammal,
            diet: Diet::Carnivore,
            habitat: "Savanna grasslands, open woodlands".to_string(),
            fun_fact: "Lions sleep up to 20 hours a day.".to_string(),
            image_url: "lion.png".to_string(),
        }
    }

    fn question(options: &[&str], correct: &str) -> Question {
        Question {
            id: "q0".to_string(),
            question_type: QuestionType::Diet,
            question_text: "What is the diet of a Lion?".to_string(),
            correct_answer: correct.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            subject_animal: lion(),
            image_ref: None,
            second_animal: None,
        }
    }

    #[test]
    fn test_primary_habitat_takes_first_phrase() {
        assert_eq!(lion().primary_habitat(), "Savanna grasslands");
    }

    #[test]
    fn test_primary_habitat_without_commas() {
        let mut animal = lion();
        animal.habitat = "  Arctic sea ice ".to_string();
        assert_eq!(animal.primary_habitat(), "Arctic sea ice");
    }

    #[test]
    fn test_category_parsing_is_case_insensitive() {
        assert_eq!("Bird".parse::<Category>(), Ok(Category::Bird));
        assert_eq!(" amphibian ".parse::<Category>(), Ok(Category::Amphibian));
        assert!("dragon".parse::<Category>().is_err());
    }

    #[test]
    fn test_diet_parsing_and_display() {
        assert_eq!("carnivore".parse::<Diet>(), Ok(Diet::Carnivore));
        assert_eq!(Diet::Insectivore.to_string(), "Insectivore");
        assert!("vegan".parse::<Diet>().is_err());
    }

    #[test]
    fn test_question_type_round_trips_through_display() {
        for question_type in QuestionType::ALL {
            assert_eq!(
                question_type.to_string().parse::<QuestionType>(),
                Ok(question_type)
            );
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_options() {
        let q = question(&["Carnivore", "Herbivore", "Omnivore"], "Carnivore");
        assert!(q.validate().is_ok());
        assert!(q.is_correct("Carnivore"));
        assert!(!q.is_correct("Herbivore"));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let q = question(&["Carnivore", "Carnivore", "Omnivore"], "Carnivore");
        assert_eq!(
            q.validate(),
            Err(QuizError::AmbiguousAnswer {
                id: "q0".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_missing_answer_and_bad_sizes() {
        assert!(question(&["Herbivore", "Omnivore"], "Carnivore")
            .validate()
            .is_err());
        assert!(question(&["Carnivore"], "Carnivore").validate().is_err());
        assert!(question(&["Carnivore", "A", "B", "C", "D"], "Carnivore")
            .validate()
            .is_err());
    }

    #[test]
    fn test_question_serializes_type_field() {
        let q = question(&["Carnivore", "Herbivore"], "Carnivore");
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["type"], "diet");
        assert_eq!(json["correctAnswer"], "Carnivore");
        assert_eq!(json["subjectAnimal"]["category"], "mammal");
        assert!(json.get("imageRef").is_none());
    }
}
