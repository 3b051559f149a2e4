//! Resource naming helpers used by callers to derive a [`ResourceToken`]
//! from a user-supplied resource name.

use crate::ResourceToken;
use crate::ScaffoldError;
use crate::ScaffoldResult;

/// Words with the same singular and plural form.
const UNCOUNTABLE: &[&str] = &[
	"equipment",
	"information",
	"rice",
	"money",
	"species",
	"series",
	"fish",
	"sheep",
	"deer",
	"news",
	"data",
	"metadata",
];

/// Irregular singular/plural pairs.
const IRREGULAR: &[(&str, &str)] = &[
	("person", "people"),
	("man", "men"),
	("woman", "women"),
	("child", "children"),
	("tooth", "teeth"),
	("foot", "feet"),
	("mouse", "mice"),
	("goose", "geese"),
	("ox", "oxen"),
	("leaf", "leaves"),
	("life", "lives"),
	("knife", "knives"),
	("wife", "wives"),
	("half", "halves"),
	("wolf", "wolves"),
	("shelf", "shelves"),
	("quiz", "quizzes"),
	("bus", "buses"),
	("alias", "aliases"),
	("status", "statuses"),
	("campus", "campuses"),
	("virus", "viruses"),
	("bonus", "bonuses"),
	("census", "censuses"),
	("circus", "circuses"),
	("lens", "lenses"),
	("gas", "gases"),
];

/// Convert a resource name to dash-case.
///
/// `BlogPost`, `blogPost`, `blog_post` and `blog post` all become
/// `blog-post`.
pub fn dasherize(name: &str) -> String {
	let mut result = String::with_capacity(name.len() + 4);
	let mut previous: Option<char> = None;

	for ch in name.trim().chars() {
		if ch == '_' || ch == '-' || ch.is_whitespace() {
			if !result.is_empty() && !result.ends_with('-') {
				result.push('-');
			}
		} else if ch.is_uppercase() {
			let after_word = previous.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
			if after_word && !result.ends_with('-') {
				result.push('-');
			}
			result.extend(ch.to_lowercase());
		} else {
			result.push(ch);
		}
		previous = Some(ch);
	}

	while result.ends_with('-') {
		result.pop();
	}

	result
}

/// Pluralize the last dash-separated segment of `word`.
///
/// The rules cover common English nouns only. A word ending in `s` that is
/// not in the irregular table is assumed to be plural already, so an
/// unlisted singular such as `octopus` is returned unchanged; pass an
/// explicit token for those. Irregular replacements follow the input's
/// capitalisation (`Person` becomes `People`).
pub fn pluralize(word: &str) -> String {
	match word.rsplit_once('-') {
		Some((head, last)) => format!("{head}-{}", pluralize_word(last)),
		None => pluralize_word(word),
	}
}

fn pluralize_word(word: &str) -> String {
	let lower = word.to_lowercase();

	if lower.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
		return word.to_string();
	}

	if IRREGULAR.iter().any(|(_, plural)| *plural == lower) {
		return word.to_string();
	}

	if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
		return match_case(word, plural);
	}

	if let Some(stem) = word.strip_suffix('y') {
		let before_vowel = stem.ends_with(['a', 'e', 'i', 'o', 'u']);
		if !before_vowel && !stem.is_empty() {
			return format!("{stem}ies");
		}
	}

	let sibilant = ["ss", "x", "z", "ch", "sh"]
		.iter()
		.any(|suffix| lower.ends_with(suffix));
	if sibilant {
		return format!("{word}es");
	}

	// Anything else ending in `s` is treated as already plural.
	if lower.ends_with('s') {
		return word.to_string();
	}

	format!("{word}s")
}

/// Apply the capitalisation of `original` to the lowercase `replacement`.
fn match_case(original: &str, replacement: &str) -> String {
	let has_upper = original.chars().any(char::is_uppercase);
	if has_upper && !original.chars().any(char::is_lowercase) {
		return replacement.to_uppercase();
	}

	let mut chars = replacement.chars();
	match (original.chars().next(), chars.next()) {
		(Some(first), Some(head)) if first.is_uppercase() => {
			head.to_uppercase().chain(chars).collect()
		}
		_ => replacement.to_string(),
	}
}

/// Derive the routes-block token for a resource name: the dasherized name
/// with its last segment pluralized (`user` → `users`, `BlogPost` →
/// `blog-posts`).
pub fn resource_token(name: &str) -> ScaffoldResult<ResourceToken> {
	let dasherized = dasherize(name);
	if dasherized.is_empty() {
		return Err(ScaffoldError::EmptyResourceName);
	}

	ResourceToken::new(pluralize(&dasherized))
}
