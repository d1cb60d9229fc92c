//! Built-in agricultural training content.
//!
//! Static data shipped with the platform; embedding applications can
//! supply their own lists instead.

use crate::classify::{Bins, ClassifyCard};
use crate::quiz::QuizQuestion;
use matching_core::VocabEntry;

/// Term/definition vocabulary for the card-matching game.
pub fn builtin_vocabulary() -> Vec<VocabEntry> {
    let entries = [
        (1, "Crop rotation", "Growing different crops on the same field in sequenced seasons", "🌱"),
        (2, "Silage", "Fermented high-moisture fodder stored for winter feeding", "🌾"),
        (3, "Loam", "Soil with balanced sand, silt, and clay fractions", "🟤"),
        (4, "Germination", "The sprouting of a seed into a seedling", "🌿"),
        (5, "Irrigation", "Controlled artificial application of water to cropland", "💧"),
        (6, "Compost", "Decomposed organic matter used to enrich soil", "♻️"),
        (7, "Pollination", "Transfer of pollen enabling fertilization of flowers", "🐝"),
        (8, "Fallow", "Cropland left unsown for a season to recover", "🛌"),
        (9, "Legume", "A nitrogen-fixing plant such as clover or peas", "🫛"),
        (10, "Tillage", "Mechanical preparation of soil for planting", "🚜"),
        (11, "Windbreak", "A row of trees sheltering fields from wind erosion", "🌳"),
        (12, "Harrowing", "Breaking up and smoothing ploughed soil", "🪓"),
    ];
    entries
        .into_iter()
        .map(|(id, term, definition, icon)| VocabEntry {
            id,
            term: term.to_string(),
            definition: definition.to_string(),
            icon: Some(icon.to_string()),
        })
        .collect()
}

/// Question bank for the multiple-choice quiz.
pub fn builtin_quiz() -> Vec<QuizQuestion> {
    let questions = [
        (
            1,
            "Which practice restores soil nitrogen naturally?",
            ["Planting legumes", "Deep ploughing", "Monocropping"],
            0,
        ),
        (
            2,
            "Silage is preserved primarily by which process?",
            ["Drying", "Fermentation", "Freezing"],
            1,
        ),
        (
            3,
            "What does leaving a field fallow achieve?",
            ["Faster harvest", "Pest attraction", "Soil recovery"],
            2,
        ),
        (
            4,
            "Which soil texture is considered ideal for most crops?",
            ["Loam", "Pure clay", "Coarse gravel"],
            0,
        ),
        (
            5,
            "A windbreak mainly protects fields from what?",
            ["Frost", "Wind erosion", "Flooding"],
            1,
        ),
        (
            6,
            "Which insects are the main pollinators of orchard crops?",
            ["Locusts", "Aphids", "Bees"],
            2,
        ),
    ];
    questions
        .into_iter()
        .map(|(id, prompt, choices, correct)| QuizQuestion {
            id,
            prompt: prompt.to_string(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            correct,
        })
        .collect()
}

/// Card stack and bins for the swipe-classification game.
pub fn builtin_classification() -> (Bins, Vec<ClassifyCard>) {
    let bins = Bins::new("crop", "livestock");
    let cards = [
        (1, "Barley", "crop"),
        (2, "Holstein cattle", "livestock"),
        (3, "Rapeseed", "crop"),
        (4, "Merino sheep", "livestock"),
        (5, "Sugar beet", "crop"),
        (6, "Leghorn hens", "livestock"),
        (7, "Alfalfa", "crop"),
        (8, "Duroc pigs", "livestock"),
    ];
    let cards = cards
        .into_iter()
        .map(|(id, label, category)| ClassifyCard {
            id,
            label: label.to_string(),
            icon: None,
            category: category.to_string(),
        })
        .collect();
    (bins, cards)
}
