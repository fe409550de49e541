//! ActiveSupport-style inflections for model and table names.
//!
//! Covers the subset of `underscore`, `camelize`, `pluralize` and `tableize`
//! that model resolution and snippet synthesis rely on. Case conversion is
//! delegated to `heck`; English number rules are local.

use heck::{ToPascalCase, ToSnakeCase};

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
];

/// `Admin::UserProfile` -> `admin/user_profile`, `HTTPRequest` -> `http_request`.
pub fn underscore(word: &str) -> String {
    word.split("::")
        .map(|segment| segment.to_snake_case())
        .collect::<Vec<_>>()
        .join("/")
}

/// `admin/user_profile` -> `Admin::UserProfile`, `email` -> `Email`.
pub fn camelize(word: &str) -> String {
    word.split('/')
        .map(|segment| segment.to_pascal_case())
        .collect::<Vec<_>>()
        .join("::")
}

/// English plural of the last word: `role` -> `roles`, `status` -> `statuses`,
/// `category` -> `categories`.
pub fn pluralize(word: &str) -> String {
    let (head, last) = match word.rfind(['_', '/']) {
        Some(idx) => word.split_at(idx + 1),
        None => ("", word),
    };
    let lower = last.to_ascii_lowercase();

    if lower.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        return format!("{head}{plural}");
    }
    if IRREGULAR.iter().any(|(_, plural)| *plural == lower) {
        return word.to_string();
    }

    format!("{head}{}", pluralize_word(last))
}

fn pluralize_word(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    let stem = |n: usize| &word[..word.len() - n];

    if lower.ends_with("quiz") {
        return format!("{word}zes");
    }
    if lower.ends_with("matrix") || lower.ends_with("vertex") || lower.ends_with("index") {
        return format!("{}ices", stem(2));
    }
    if lower.ends_with("alias") || lower.ends_with("status") || lower.ends_with("bus") {
        return format!("{word}es");
    }
    if lower.ends_with("ss")
        || lower.ends_with("sh")
        || lower.ends_with("ch")
        || lower.ends_with('x')
    {
        return format!("{word}es");
    }
    if let Some(before_y) = lower.strip_suffix('y') {
        let vowel_before = before_y.ends_with(['a', 'e', 'i', 'o', 'u']);
        if !vowel_before || lower.ends_with("quy") {
            return format!("{}ies", stem(1));
        }
    }
    if lower.ends_with("fe") {
        return format!("{}ves", stem(2));
    }
    if lower.ends_with("lf") || lower.ends_with("rf") {
        return format!("{}ves", stem(1));
    }
    if lower.ends_with("tomato") || lower.ends_with("potato") || lower.ends_with("hero") {
        return format!("{word}es");
    }
    if lower.ends_with("sis") {
        return format!("{}ses", stem(3));
    }
    if lower.ends_with("ium") || lower.ends_with("tum") {
        return format!("{}a", stem(2));
    }
    if lower.ends_with('s') {
        return word.to_string();
    }
    format!("{word}s")
}

/// English singular of the last word: `users` -> `user`, `statuses` ->
/// `status`, `categories` -> `category`. Singular words come back unchanged.
pub fn singularize(word: &str) -> String {
    let (head, last) = match word.rfind(['_', '/']) {
        Some(idx) => word.split_at(idx + 1),
        None => ("", word),
    };
    let lower = last.to_ascii_lowercase();

    if lower.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == lower) {
        return format!("{head}{singular}");
    }
    if IRREGULAR.iter().any(|(singular, _)| *singular == lower) {
        return word.to_string();
    }

    format!("{head}{}", singularize_word(last))
}

fn singularize_word(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    let stem = |n: usize| &word[..word.len() - n];

    if lower.ends_with("quizzes") {
        return stem(3).to_string();
    }
    if lower.ends_with("matrices") {
        return format!("{}x", stem(3));
    }
    if lower.ends_with("vertices") || lower.ends_with("indices") {
        return format!("{}ex", stem(4));
    }
    if lower.ends_with("aliases")
        || lower.ends_with("statuses")
        || lower.ends_with("buses")
        || lower.ends_with("sses")
    {
        return stem(2).to_string();
    }
    if lower.ends_with("lyses") || lower.ends_with("theses") {
        return format!("{}is", stem(2));
    }
    if lower.ends_with("shes") || lower.ends_with("ches") || lower.ends_with("xes") {
        return stem(2).to_string();
    }
    if lower.ends_with("ies") && lower.len() > 4 {
        return format!("{}y", stem(3));
    }
    if lower.ends_with("lves") || lower.ends_with("rves") {
        return format!("{}f", stem(3));
    }
    if lower.ends_with("ves") {
        return format!("{}fe", stem(3));
    }
    if lower.ends_with("tomatoes") || lower.ends_with("potatoes") || lower.ends_with("heroes") {
        return stem(2).to_string();
    }
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return word.to_string();
    }
    if lower.ends_with('s') {
        return stem(1).to_string();
    }
    word.to_string()
}

/// `Admin::User` -> `admin/users`.
pub fn tableize(class_name: &str) -> String {
    pluralize(&underscore(class_name))
}
