//! Deterministic fallback grammar exercises.
//!
//! Used whenever generation, extraction, or validation fails on the grammar
//! path. This is the system's sole availability guarantee: a grammar
//! request always produces an exercise. Only grammar carries a fallback;
//! vocabulary and conversation surface their errors.

use crate::exercise::entities::GrammarExercise;
use crate::exercise::value_objects::SkillLevel;

/// Fixed exercise for the given skill level.
pub fn fallback_grammar_exercise(level: SkillLevel) -> GrammarExercise {
    match level {
        SkillLevel::Beginner => GrammarExercise {
            question: "Complete the sentence: I ___ a student.".to_string(),
            options: vec!["am".to_string(), "is".to_string(), "are".to_string()],
            correct_answer: "am".to_string(),
        },
        SkillLevel::Intermediate => GrammarExercise {
            question: "Choose the correct form: She ___ to the gym every morning.".to_string(),
            options: vec![
                "go".to_string(),
                "goes".to_string(),
                "going".to_string(),
            ],
            correct_answer: "goes".to_string(),
        },
        SkillLevel::Advanced => GrammarExercise {
            question: "Complete the conditional: If I ___ known about the delay, I would have left earlier.".to_string(),
            options: vec![
                "had".to_string(),
                "have".to_string(),
                "would have".to_string(),
            ],
            correct_answer: "had".to_string(),
        },
    }
}

/// Generic exercise for code paths with no usable skill level.
pub fn generic_grammar_exercise() -> GrammarExercise {
    GrammarExercise {
        question: "Choose the correct word: They ___ happy.".to_string(),
        options: vec!["is".to_string(), "are".to_string(), "am".to_string()],
        correct_answer: "are".to_string(),
    }
}
