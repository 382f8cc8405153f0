pub mod display;
pub mod prompts;
