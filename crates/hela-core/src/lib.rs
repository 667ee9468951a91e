pub mod assembler;
pub mod classifier;
pub mod converter;
pub mod lexicon;
pub mod rules;
pub mod settings;
pub mod unicode;
