pub mod analysis;
pub mod openai;
pub mod prompt;
pub mod vision;
