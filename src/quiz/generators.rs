use crate::error::QuizError;
use crate::logger;
use crate::models::{Animal, Category, Diet, Question, QuestionType};
use crate::random::{pick_random_excluding, shuffle};
use rand::seq::SliceRandom;
use rand::Rng;

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 4;

/// Scanned in order against the lowercased primary habitat; the first hit wins,
/// so "tropical rainforest" resolves to "forest".
pub const HABITAT_KEYWORDS: [&str; 7] = [
    "forest",
    "ocean",
    "desert",
    "grassland",
    "arctic",
    "rainforest",
    "savanna",
];

pub const TRUE_ANSWER: &str = "True";
pub const FALSE_ANSWER: &str = "False";

impl QuestionType {
    /// Runs the generator for this question type without any fallback.
    pub fn generate<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        subject: &Animal,
        pool: &[Animal],
        index: usize,
    ) -> Result<Question, QuizError> {
        match self {
            QuestionType::ImageIdentification => {
                create_image_identification_question(rng, subject, pool, index)
            }
            QuestionType::Diet => Ok(create_diet_question(rng, subject, index)),
            QuestionType::Habitat => create_habitat_question(rng, subject, pool, index),
            QuestionType::Category => Ok(create_category_question(rng, subject, index)),
            QuestionType::FactTrueFalse => {
                create_fact_true_false_question(rng, subject, pool, index)
            }
            QuestionType::Comparison => create_comparison_question(rng, subject, pool, index),
            QuestionType::HabitatMatch => try_habitat_match_question(rng, subject, pool, index),
        }
    }
}

/// Generates a question of the requested type, degrading to a category
/// question for the same subject when the pool cannot support it.
pub fn build_question<R: Rng + ?Sized>(
    rng: &mut R,
    question_type: QuestionType,
    subject: &Animal,
    pool: &[Animal],
    index: usize,
) -> Question {
    match question_type.generate(rng, subject, pool, index) {
        Ok(question) => question,
        Err(err) => {
            logger::log(&format!("{}; falling back to category question", err));
            create_category_question(rng, subject, index)
        }
    }
}

pub fn create_image_identification_question<R: Rng + ?Sized>(
    rng: &mut R,
    subject: &Animal,
    pool: &[Animal],
    index: usize,
) -> Result<Question, QuizError> {
    let distractors: Vec<String> = pick_random_excluding(rng, subject, MAX_OPTIONS - 1, pool)
        .into_iter()
        .map(|a| a.name.clone())
        .collect();
    let options = assemble_options(
        rng,
        QuestionType::ImageIdentification,
        subject,
        &subject.name,
        distractors,
    )?;

    Ok(Question {
        id: question_id(index),
        question_type: QuestionType::ImageIdentification,
        question_text: "What animal is this?".to_string(),
        correct_answer: subject.name.clone(),
        options,
        subject_animal: subject.clone(),
        image_ref: Some(subject.image_url.clone()),
        second_animal: None,
    })
}

pub fn create_diet_question<R: Rng + ?Sized>(
    rng: &mut R,
    subject: &Animal,
    index: usize,
) -> Question {
    let others: Vec<&str> = Diet::ALL
        .iter()
        .filter(|d| **d != subject.diet)
        .map(Diet::as_str)
        .collect();

    Question {
        id: question_id(index),
        question_type: QuestionType::Diet,
        question_text: format!("What is the diet of a {}?", subject.name),
        correct_answer: subject.diet.to_string(),
        options: enumeration_options(rng, subject.diet.as_str(), &others),
        subject_animal: subject.clone(),
        image_ref: None,
        second_animal: None,
    }
}

pub fn create_habitat_question<R: Rng + ?Sized>(
    rng: &mut R,
    subject: &Animal,
    pool: &[Animal],
    index: usize,
) -> Result<Question, QuizError> {
    let correct = subject.primary_habitat();
    if correct.is_empty() {
        return Err(insufficient(QuestionType::Habitat, subject, 1, 0));
    }

    // Animals that mention the subject's habitat anywhere would make a second right answer.
    let candidates: Vec<&Animal> = pool
        .iter()
        .filter(|a| a.id != subject.id && !a.habitat.contains(correct))
        .collect();
    let distractors: Vec<String> = shuffle(rng, &candidates)
        .into_iter()
        .map(|a| a.primary_habitat().to_string())
        .filter(|h| !h.is_empty())
        .collect();
    let options = assemble_options(rng, QuestionType::Habitat, subject, correct, distractors)?;

    Ok(Question {
        id: question_id(index),
        question_type: QuestionType::Habitat,
        question_text: format!("Where does a {} typically live?", subject.name),
        correct_answer: correct.to_string(),
        options,
        subject_animal: subject.clone(),
        image_ref: None,
        second_animal: None,
    })
}

/// Always succeeds: the category enumeration supplies its own distractors.
pub fn create_category_question<R: Rng + ?Sized>(
    rng: &mut R,
    subject: &Animal,
    index: usize,
) -> Question {
    let others: Vec<&str> = Category::ALL
        .iter()
        .filter(|c| **c != subject.category)
        .map(Category::as_str)
        .collect();

    Question {
        id: question_id(index),
        question_type: QuestionType::Category,
        question_text: format!("Which category does a {} belong to?", subject.name),
        correct_answer: subject.category.to_string(),
        options: enumeration_options(rng, subject.category.as_str(), &others),
        subject_animal: subject.clone(),
        image_ref: None,
        second_animal: None,
    }
}

pub fn create_fact_true_false_question<R: Rng + ?Sized>(
    rng: &mut R,
    subject: &Animal,
    pool: &[Animal],
    index: usize,
) -> Result<Question, QuizError> {
    let (statement, answer) = if rng.gen_bool(0.5) {
        (subject.fun_fact.clone(), TRUE_ANSWER)
    } else {
        let other = pick_random_excluding(rng, subject, 1, pool)
            .into_iter()
            .next()
            .ok_or_else(|| insufficient(QuestionType::FactTrueFalse, subject, 1, 0))?;
        (false_statement(subject, other), FALSE_ANSWER)
    };

    Ok(Question {
        id: question_id(index),
        question_type: QuestionType::FactTrueFalse,
        question_text: format!("True or False: {}", statement),
        correct_answer: answer.to_string(),
        options: vec![TRUE_ANSWER.to_string(), FALSE_ANSWER.to_string()],
        subject_animal: subject.clone(),
        image_ref: None,
        second_animal: None,
    })
}

/// Puts `subject` in place of the first word of `other`'s fun fact, e.g.
/// "Penguins" + "Owls can turn their heads..." gives "Penguins can turn their heads...".
///
/// This is a plain text transform. Facts that do not open with a one-word
/// subject produce awkward sentences and are left as they are.
pub fn false_statement(subject: &Animal, other: &Animal) -> String {
    let rest = other
        .fun_fact
        .split_once(' ')
        .map(|(_, rest)| rest)
        .unwrap_or(&other.fun_fact);
    format!("{}s {}", subject.name, rest)
}

pub fn create_comparison_question<R: Rng + ?Sized>(
    rng: &mut R,
    subject: &Animal,
    pool: &[Animal],
    index: usize,
) -> Result<Question, QuizError> {
    let others: Vec<&Animal> = pool
        .iter()
        .filter(|a| a.category != subject.category)
        .collect();
    let other = *others
        .choose(rng)
        .ok_or_else(|| insufficient(QuestionType::Comparison, subject, 1, 0))?;

    let (question_text, answer) = compare(rng, subject, other);
    let distractor = if answer.id == subject.id {
        &other.name
    } else {
        &subject.name
    };
    let options = assemble_options(
        rng,
        QuestionType::Comparison,
        subject,
        &answer.name,
        [distractor.clone()],
    )?;

    Ok(Question {
        id: question_id(index),
        question_type: QuestionType::Comparison,
        question_text,
        correct_answer: answer.name.clone(),
        options,
        subject_animal: subject.clone(),
        image_ref: None,
        second_animal: Some(other.clone()),
    })
}

/// Picks the prompt and the animal it is true for. First matching rule wins:
/// flight between a bird and a mammal, then herbivore against carnivore, then
/// a coin flip on which of the two categories to ask about.
fn compare<'a, R: Rng + ?Sized>(
    rng: &mut R,
    subject: &'a Animal,
    other: &'a Animal,
) -> (String, &'a Animal) {
    match (subject.category, other.category, subject.diet, other.diet) {
        (Category::Bird, Category::Mammal, _, _) => ("Which animal can fly?".to_string(), subject),
        (Category::Mammal, Category::Bird, _, _) => ("Which animal can fly?".to_string(), other),
        (_, _, Diet::Herbivore, Diet::Carnivore) => ("Which animal eats meat?".to_string(), other),
        (_, _, Diet::Carnivore, Diet::Herbivore) => {
            ("Which animal eats plants?".to_string(), other)
        }
        _ => {
            let pick = if rng.gen_bool(0.5) { subject } else { other };
            (format!("Which animal is a {}?", pick.category), pick)
        }
    }
}

pub fn habitat_keyword(animal: &Animal) -> Option<&'static str> {
    let primary = animal.primary_habitat().to_lowercase();
    HABITAT_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| primary.contains(keyword))
}

/// Never fails: falls back to a category question when the pool has no
/// recognised habitat keyword, no habitat mate, or fewer than three outsiders.
pub fn create_habitat_match_question<R: Rng + ?Sized>(
    rng: &mut R,
    subject: &Animal,
    pool: &[Animal],
    index: usize,
) -> Question {
    build_question(rng, QuestionType::HabitatMatch, subject, pool, index)
}

fn try_habitat_match_question<R: Rng + ?Sized>(
    rng: &mut R,
    subject: &Animal,
    pool: &[Animal],
    index: usize,
) -> Result<Question, QuizError> {
    let keyword = habitat_keyword(subject)
        .ok_or_else(|| insufficient(QuestionType::HabitatMatch, subject, 1, 0))?;
    let lives_there = |a: &Animal| a.habitat.to_lowercase().contains(keyword);

    let same_habitat: Vec<&Animal> = pool
        .iter()
        .filter(|a| a.id != subject.id && lives_there(*a))
        .collect();
    let different_habitat: Vec<&Animal> = pool.iter().filter(|a| !lives_there(*a)).collect();

    let mate = *same_habitat
        .choose(rng)
        .ok_or_else(|| insufficient(QuestionType::HabitatMatch, subject, 1, 0))?;
    if different_habitat.len() < MAX_OPTIONS - 1 {
        return Err(insufficient(
            QuestionType::HabitatMatch,
            subject,
            MAX_OPTIONS - 1,
            different_habitat.len(),
        ));
    }

    let distractors: Vec<String> = shuffle(rng, &different_habitat)
        .into_iter()
        .map(|a| a.name.clone())
        .collect();
    let options = assemble_options(
        rng,
        QuestionType::HabitatMatch,
        subject,
        &mate.name,
        distractors,
    )?;

    Ok(Question {
        id: question_id(index),
        question_type: QuestionType::HabitatMatch,
        question_text: format!(
            "Which animal shares the same habitat as the {}?",
            subject.name
        ),
        correct_answer: mate.name.clone(),
        options,
        subject_animal: subject.clone(),
        image_ref: Some(subject.image_url.clone()),
        second_animal: None,
    })
}

fn question_id(index: usize) -> String {
    format!("q{}", index)
}

fn insufficient(
    question_type: QuestionType,
    subject: &Animal,
    needed: usize,
    found: usize,
) -> QuizError {
    QuizError::InsufficientData {
        question_type,
        subject: subject.name.clone(),
        needed,
        found,
    }
}

/// Correct answer plus up to three distinct distractors, shuffled.
/// Distractors equal to the answer or to an earlier distractor are skipped.
fn assemble_options<R, I>(
    rng: &mut R,
    question_type: QuestionType,
    subject: &Animal,
    correct: &str,
    distractors: I,
) -> Result<Vec<String>, QuizError>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = String>,
{
    let mut options = vec![correct.to_string()];
    for distractor in distractors {
        if options.len() == MAX_OPTIONS {
            break;
        }
        if !options.contains(&distractor) {
            options.push(distractor);
        }
    }

    if options.len() < MIN_OPTIONS {
        return Err(insufficient(
            question_type,
            subject,
            MIN_OPTIONS,
            options.len(),
        ));
    }

    options.shuffle(rng);
    Ok(options)
}

fn enumeration_options<R: Rng + ?Sized>(rng: &mut R, correct: &str, others: &[&str]) -> Vec<String> {
    let mut options = vec![correct.to_string()];
    options.extend(
        shuffle(rng, others)
            .into_iter()
            .take(MAX_OPTIONS - 1)
            .map(str::to_string),
    );
    options.shuffle(rng);
    options
}
