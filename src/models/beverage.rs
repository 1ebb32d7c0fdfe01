use serde::{Deserialize, Serialize};

/// Shape the model is asked to return for a photographed beverage.
///
/// Only the example instance is used at runtime: it is rendered into the
/// prompt. Replies are relayed as untyped JSON and never checked against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BeverageProfile {
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub brand: String,
    pub price: Price,
    pub flavor_profile: FlavorProfile,
    pub alcohol_content: AlcoholContent,
    pub production: Production,
    pub dietary_info: DietaryInfo,
    pub packaging: Packaging,
    pub occasion: String,
    pub pairing_options: Vec<String>,
    pub reviews: Reviews,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Price {
    pub currency: String,
    pub amount: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlavorProfile {
    /// 1-5
    pub sweetness: u8,
    pub aroma: Vec<String>,
    /// 1-5
    pub smoothness: u8,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlcoholContent {
    pub abv: u32,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Production {
    pub age: u32,
    pub distillation: String,
    pub barrel_type: String,
    pub country_of_origin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietaryInfo {
    pub calories_per_serving: u32,
    pub gluten_free: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Packaging {
    pub bottle_size: u32,
    pub unit: String,
    pub design: String,
    pub gift_packaging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reviews {
    pub average_rating: f64,
    pub critic_reviews: Vec<String>,
    pub user_reviews: u32,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl BeverageProfile {
    /// The worked example embedded in the analysis prompt.
    pub fn example() -> Self {
        Self {
            kind: "Whiskey".to_string(),
            category: "Single Malt".to_string(),
            brand: "Glenfiddich".to_string(),
            price: Price {
                currency: "USD".to_string(),
                amount: 60,
            },
            flavor_profile: FlavorProfile {
                sweetness: 3,
                aroma: strings(&["Fruity", "Floral"]),
                smoothness: 4,
                notes: strings(&["Vanilla", "Oak", "Honey"]),
            },
            alcohol_content: AlcoholContent {
                abv: 40,
                unit: "%".to_string(),
            },
            production: Production {
                age: 12,
                distillation: "Triple Distilled".to_string(),
                barrel_type: "Ex-Bourbon Oak".to_string(),
                country_of_origin: "Scotland".to_string(),
            },
            dietary_info: DietaryInfo {
                calories_per_serving: 70,
                gluten_free: true,
            },
            packaging: Packaging {
                bottle_size: 750,
                unit: "ml".to_string(),
                design: "Premium".to_string(),
                gift_packaging: false,
            },
            occasion: "Special Event".to_string(),
            pairing_options: strings(&["Cheese", "Dark Chocolate", "Grilled Meat"]),
            reviews: Reviews {
                average_rating: 4.7,
                critic_reviews: strings(&["Highly Recommended by Whisky Advocate"]),
                user_reviews: 350,
            },
        }
    }
}
