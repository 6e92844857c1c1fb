//! Use cases for the exercise pipeline, one per generated action.

pub mod conversation;
pub mod grammar;
pub mod vocabulary;

#[cfg(test)]
pub(crate) mod test_support;
