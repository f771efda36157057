use std::collections::HashMap;

use crate::models::{MacroSplit, MealSuggestion, MealType, PrepDifficulty};

/// Pre-authored meal suggestions keyed by meal type.
///
/// Purely static: every meal type returns its full authored list, and the
/// suggestions carry their own nutrition facts independent of any calorie
/// target. Built once and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct MealCatalog {
    suggestions: HashMap<MealType, Vec<MealSuggestion>>,
}

impl MealCatalog {
    pub fn new() -> Self {
        let mut suggestions = HashMap::new();
        for meal_type in MealType::ALL {
            suggestions.insert(meal_type, build_suggestions(meal_type));
        }
        Self { suggestions }
    }

    /// Full authored list for a meal type; empty only for a key the
    /// constructor never saw, which the closed enum rules out.
    pub fn suggestions(&self, meal_type: MealType) -> &[MealSuggestion] {
        self.suggestions.get(&meal_type).map_or(&[], Vec::as_slice)
    }
}

impl Default for MealCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn build_suggestions(meal_type: MealType) -> Vec<MealSuggestion> {
    match meal_type {
        MealType::Breakfast => vec![
            suggestion(
                "Greek Yogurt Parfait",
                &["greek yogurt", "granola", "mixed berries", "honey"],
                350,
                25,
                45,
                8,
                5,
                PrepDifficulty::Easy,
            ),
            suggestion(
                "Veggie Omelette with Toast",
                &["eggs", "spinach", "bell pepper", "wholegrain bread", "olive oil"],
                420,
                28,
                30,
                21,
                15,
                PrepDifficulty::Moderate,
            ),
            suggestion(
                "Peanut Butter Overnight Oats",
                &["rolled oats", "milk", "peanut butter", "banana", "chia seeds"],
                450,
                18,
                58,
                16,
                10,
                PrepDifficulty::Easy,
            ),
        ],
        MealType::Lunch => vec![
            suggestion(
                "Grilled Chicken Quinoa Bowl",
                &["chicken breast", "quinoa", "avocado", "mixed greens", "lemon dressing"],
                550,
                42,
                48,
                20,
                25,
                PrepDifficulty::Moderate,
            ),
            suggestion(
                "Tuna Salad Wrap",
                &["canned tuna", "wholewheat wrap", "greek yogurt", "lettuce", "tomato"],
                480,
                35,
                45,
                16,
                10,
                PrepDifficulty::Easy,
            ),
            suggestion(
                "Lentil and Roast Vegetable Salad",
                &["green lentils", "roasted peppers", "courgette", "feta", "olive oil"],
                520,
                24,
                60,
                18,
                30,
                PrepDifficulty::Involved,
            ),
        ],
        MealType::Dinner => vec![
            suggestion(
                "Baked Salmon with Sweet Potato",
                &["salmon fillet", "sweet potato", "broccoli", "olive oil", "lemon"],
                580,
                40,
                45,
                24,
                35,
                PrepDifficulty::Moderate,
            ),
            suggestion(
                "Lean Beef Stir-Fry with Rice",
                &["lean beef strips", "basmati rice", "mixed vegetables", "soy sauce", "ginger"],
                620,
                38,
                62,
                20,
                20,
                PrepDifficulty::Moderate,
            ),
            suggestion(
                "Chickpea and Spinach Curry",
                &["chickpeas", "spinach", "coconut milk", "curry paste", "brown rice"],
                540,
                18,
                70,
                20,
                30,
                PrepDifficulty::Involved,
            ),
        ],
        MealType::Snack => vec![
            suggestion(
                "Apple with Almond Butter",
                &["apple", "almond butter"],
                200,
                5,
                24,
                10,
                2,
                PrepDifficulty::Easy,
            ),
            suggestion(
                "Cottage Cheese with Pineapple",
                &["cottage cheese", "pineapple chunks"],
                180,
                20,
                18,
                3,
                3,
                PrepDifficulty::Easy,
            ),
            suggestion(
                "Trail Mix",
                &["almonds", "walnuts", "pumpkin seeds", "dried cranberries"],
                250,
                8,
                22,
                15,
                1,
                PrepDifficulty::Easy,
            ),
        ],
    }
}

#[allow(clippy::too_many_arguments)]
fn suggestion(
    name: &str,
    ingredients: &[&str],
    calories: u32,
    protein_g: u32,
    carbs_g: u32,
    fat_g: u32,
    prep_time_minutes: u32,
    difficulty: PrepDifficulty,
) -> MealSuggestion {
    MealSuggestion {
        name: name.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        calories,
        macros: MacroSplit {
            protein_g,
            carbs_g,
            fat_g,
        },
        prep_time_minutes,
        difficulty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_meal_type_has_suggestions() {
        let catalog = MealCatalog::new();

        for meal_type in MealType::ALL {
            let suggestions = catalog.suggestions(meal_type);
            assert!(
                suggestions.len() >= 3,
                "{meal_type:?} must carry at least 3 suggestions"
            );
        }
    }

    #[test]
    fn test_suggestions_carry_nutrition_facts() {
        let catalog = MealCatalog::new();

        for meal_type in MealType::ALL {
            for suggestion in catalog.suggestions(meal_type) {
                assert!(suggestion.calories > 0, "{} has no calories", suggestion.name);
                assert!(
                    !suggestion.ingredients.is_empty(),
                    "{} has no ingredients",
                    suggestion.name
                );
            }
        }
    }
}
