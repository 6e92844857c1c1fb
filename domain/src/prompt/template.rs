//! Prompt templates for each generated action.
//!
//! Pure functions of (skill level, parameters) -> instruction string. The
//! vocabulary and grammar prompts ask for JSON so the extractor has a
//! fragment to find; the conversation prompt asks for plain text.

use crate::exercise::value_objects::SkillLevel;

/// Templates for generating prompts for each action
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for the conversation action: a tutor reply calibrated to the
    /// learner's level, correcting their input.
    pub fn conversation(level: SkillLevel, user_input: &str) -> String {
        format!(
            r#"You are a friendly English tutor working with a {} level learner.
Correct only the mistakes in this sentence.
Identify and list the grammar mistakes along with their corrections.
Count and list the filler words used.
Do not provide explanations.
Keep your reply short and encouraging, matched to the learner's level.

Sentence: "{}""#,
            level, user_input
        )
    }

    /// Prompt for the vocabulary action: exactly `count` word exercises.
    pub fn vocabulary(level: SkillLevel, count: usize) -> String {
        format!(
            r#"Generate {} vocabulary word exercises for a {} level English learner.
Choose words that are contextual and relevant to the learner's skill level.
Provide each word's definition and an example sentence.
Avoid basic words like "hello" or "goodbye".
Format the response as a JSON array:
[
  {{
    "word": "example1",
    "definition": "a short definition for example1",
    "exampleSentence": "An example sentence using example1."
  }}
]"#,
            count, level
        )
    }

    /// Prompt for the grammar action. The requested structures branch on
    /// the learner's level.
    pub fn grammar(level: SkillLevel) -> String {
        let focus = match level {
            SkillLevel::Beginner => {
                "basic subject-verb agreement (am/is/are, simple present)"
            }
            SkillLevel::Intermediate => {
                "choosing the correct tense or verb form in everyday sentences"
            }
            SkillLevel::Advanced => {
                "complex structures: conditionals, passive voice, or reported speech"
            }
        };

        format!(
            r#"Generate one multiple-choice grammar exercise for a {} level English learner.
The exercise should test {}.
Format the response as a JSON object:
{{
  "question": "The question text with a blank to fill",
  "options": ["option1", "option2", "option3"],
  "correctAnswer": "option1"
}}"#,
            level, focus
        )
    }
}
