use std::sync::OnceLock;

use crate::models::beverage::BeverageProfile;

/// Completion length cap for one analysis.
pub const MAX_TOKENS: u32 = 500;

/// Image detail level requested from the model.
pub const IMAGE_DETAIL: &str = "high";

const INSTRUCTIONS: &str = concat!(
    "What's in this image? - Explain to me about this alcoholic beverage ",
    "and return as a json object start with\n\n",
);

const OUTPUT_RULES: &str = concat!(
    "\njust give me these fields and nothing else, dont add any other fields ",
    "or comments or anything else, just the json object\n",
    "i need my data to be in json format and i need to return the json object as a string ",
    "exclude backticks in start well start and the response with {  } \n}",
);

/// Instruction sent with every image, embedding the example schema.
pub fn beverage_prompt() -> &'static str {
    static PROMPT: OnceLock<String> = OnceLock::new();
    PROMPT.get_or_init(|| {
        let example = serde_json::to_string_pretty(&BeverageProfile::example())
            .unwrap_or_else(|_| "{}".to_string());
        format!("{INSTRUCTIONS}{example}{OUTPUT_RULES}")
    })
}
