//! Tag inference from ingredient text
//!
//! Tags are lowercase, hyphenated keywords. An ingredient line contributes a
//! tag when one of the tag's keywords appears in the line as a whole word or
//! phrase, ignoring case.

use std::collections::BTreeSet;

/// Keyword → tags vocabulary. Multi-word keywords are matched as phrases.
pub const TAG_VOCABULARY: &[(&str, &[&str])] = &[
    // spirits
    ("rum", &["rum"]),
    ("gin", &["gin"]),
    ("vodka", &["vodka"]),
    ("tequila", &["tequila"]),
    ("mezcal", &["mezcal", "smoky"]),
    ("whiskey", &["whiskey"]),
    ("whisky", &["whiskey"]),
    ("bourbon", &["whiskey", "bourbon"]),
    ("brandy", &["brandy"]),
    ("pisco", &["brandy"]),
    ("aquavit", &["aquavit", "herbal"]),
    ("sparkling wine", &["sparkling", "wine"]),
    // fruit
    ("pineapple", &["pineapple", "tropical"]),
    ("mango", &["mango", "tropical"]),
    ("passion fruit", &["passion-fruit", "tropical"]),
    ("coconut", &["coconut", "tropical"]),
    ("grapefruit", &["grapefruit", "citrus"]),
    ("lemon", &["lemon", "citrus"]),
    ("lemonade", &["lemon", "citrus"]),
    ("lime", &["lime", "citrus"]),
    ("orange", &["orange", "citrus"]),
    ("triple sec", &["orange", "citrus"]),
    ("cherry", &["cherry"]),
    // mixers
    ("tonic", &["tonic"]),
    ("soda water", &["soda"]),
    ("soda", &["soda"]),
    ("ginger", &["ginger", "spicy"]),
    ("cucumber", &["cucumber", "fresh"]),
    ("cream", &["creamy"]),
    ("milk", &["creamy"]),
    ("coffee", &["coffee"]),
    ("espresso", &["coffee"]),
    // accents
    ("mint", &["mint", "fresh"]),
    ("basil", &["basil", "herbal"]),
    ("rosemary", &["herbal"]),
    ("chartreuse", &["herbal"]),
    ("celery", &["herbal"]),
    ("elderflower", &["floral"]),
    ("orchid", &["floral"]),
    ("vanilla", &["vanilla", "sweet"]),
    ("honey", &["honey", "sweet"]),
    ("simple syrup", &["sweet"]),
    ("amaretto", &["nutty"]),
    ("orgeat", &["nutty"]),
    ("falernum", &["spiced"]),
    ("spiced", &["spiced"]),
    ("nutmeg", &["spiced"]),
    ("cinnamon", &["spiced"]),
    ("cocoa", &["chocolate"]),
    ("campari", &["bitter"]),
    ("aperol", &["bitter"]),
    ("bitters", &["bitter"]),
    ("vermouth", &["vermouth"]),
];

/// Infers tags for an ingredient list. Pure and deterministic.
pub fn infer_tags(ingredients: &[String]) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();

    for line in ingredients {
        let line = line.to_lowercase();

        for (keyword, keyword_tags) in TAG_VOCABULARY {
            if contains_word(&line, keyword) {
                tags.extend(keyword_tags.iter().map(|t| (*t).to_owned()));
            }
        }
    }

    tags
}

/// Lowercases a free-form tag and joins its words with `-`. Returns `None`
/// for a blank tag.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let tag = tag
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    (!tag.is_empty()).then_some(tag)
}

/// Whether `needle` occurs in `haystack` with no letter or digit directly
/// before or after it.
fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();

        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
