//! Default word-valence lists for the built-in lexicon.

use super::CompoundLexicon;

/// Build the default English lexicon with common sentiment-bearing words.
pub(super) fn default_lexicon() -> CompoundLexicon {
    let mut lexicon = CompoundLexicon::new();

    // Strongly positive (0.9)
    for word in &[
        "excellent",
        "wonderful",
        "amazing",
        "fantastic",
        "brilliant",
        "outstanding",
        "perfect",
        "exceptional",
        "superb",
        "magnificent",
        "love",
        "best",
    ] {
        lexicon.add_positive(word, 0.9);
    }

    // Moderately positive (0.6)
    for word in &[
        "good",
        "great",
        "nice",
        "pleasant",
        "lovely",
        "delightful",
        "happy",
        "glad",
        "pleased",
        "satisfied",
        "enjoyable",
        "impressive",
        "fun",
        "beautiful",
        "valuable",
        "useful",
        "helpful",
    ] {
        lexicon.add_positive(word, 0.6);
    }

    // Mildly positive (0.3)
    for word in &[
        "okay",
        "fine",
        "decent",
        "adequate",
        "acceptable",
        "reasonable",
        "promising",
        "hopeful",
        "favorable",
        "interesting",
    ] {
        lexicon.add_positive(word, 0.3);
    }

    // Strongly negative (0.9)
    for word in &[
        "terrible",
        "awful",
        "horrible",
        "dreadful",
        "atrocious",
        "abysmal",
        "disastrous",
        "appalling",
        "hate",
        "worst",
    ] {
        lexicon.add_negative(word, 0.9);
    }

    // Moderately negative (0.6)
    for word in &[
        "bad",
        "poor",
        "disappointing",
        "frustrating",
        "annoying",
        "unpleasant",
        "ugly",
        "sad",
        "angry",
        "painful",
        "broken",
        "useless",
    ] {
        lexicon.add_negative(word, 0.6);
    }

    // Mildly negative (0.3)
    for word in &[
        "mediocre",
        "subpar",
        "boring",
        "tedious",
        "dull",
        "lacking",
        "underwhelming",
        "forgettable",
        "unremarkable",
    ] {
        lexicon.add_negative(word, 0.3);
    }

    lexicon
}
