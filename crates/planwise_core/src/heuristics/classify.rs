//! Task categorization heuristics.
//!
//! # Responsibility
//! - Map a task title to an existing category id via keyword scoring.
//! - Switch to a trained bag-of-words model once enough history exists.
//!
//! # Invariants
//! - Classification is total: `None` is returned only for an empty category
//!   list.
//! - The keyword path only returns ids present in `categories`; the trained
//!   path returns whatever id the history voted for.

use crate::model::category::{Category, CategoryId};
use crate::model::task::Task;
use std::collections::HashMap;

/// History size at which the trained model replaces keyword scoring.
pub const MIN_TRAINING_TASKS: usize = 10;

/// Vocabulary cap for the trained model.
const MAX_VOCABULARY_TERMS: usize = 100;

/// Fixed keyword domains used before enough history exists.
const DOMAIN_KEYWORDS: [(&str, &[&str]); 4] = [
    (
        "work",
        &[
            "meeting",
            "project",
            "report",
            "presentation",
            "client",
            "boss",
            "deadline",
            "email",
            "call",
            "office",
        ],
    ),
    (
        "personal",
        &[
            "home",
            "family",
            "friend",
            "shopping",
            "clean",
            "appointment",
            "personal",
            "party",
            "visit",
            "social",
        ],
    ),
    (
        "health",
        &[
            "exercise",
            "workout",
            "gym",
            "run",
            "jog",
            "swim",
            "doctor",
            "dentist",
            "meal",
            "diet",
            "sleep",
            "rest",
            "meditate",
        ],
    ),
    (
        "learning",
        &[
            "study",
            "learn",
            "read",
            "book",
            "course",
            "class",
            "lecture",
            "tutorial",
            "homework",
            "assignment",
        ],
    ),
];

/// Picks a category id for a task title.
///
/// With at least [`MIN_TRAINING_TASKS`] categorized tasks in `history`, a
/// multinomial naive-bayes model is fitted on `(title, category_id)` pairs
/// and its prediction is returned as-is, low confidence included. Otherwise
/// keyword scoring applies, falling back to the first category when no
/// keyword hits.
///
/// Returns `None` only when `categories` is empty.
pub fn classify(title: &str, categories: &[Category], history: &[Task]) -> Option<CategoryId> {
    if categories.is_empty() {
        return None;
    }

    if history.len() >= MIN_TRAINING_TASKS {
        if let Some(model) = BayesModel::train(history) {
            if let Some(predicted) = model.predict(title) {
                return Some(predicted);
            }
        }
    }

    Some(keyword_classify(title, categories))
}

fn keyword_classify(title: &str, categories: &[Category]) -> CategoryId {
    let title_lower = title.to_lowercase();
    let mut scores = vec![0usize; categories.len()];

    for (domain, keywords) in DOMAIN_KEYWORDS {
        let target = domain_category_index(domain, categories);
        for keyword in keywords {
            if title_lower.contains(keyword) {
                scores[target] += 1;
            }
        }
    }

    // First category reaching the maximum wins; zero hits fall back to the
    // first category.
    let mut best = 0;
    for (index, &score) in scores.iter().enumerate() {
        if score > scores[best] {
            best = index;
        }
    }
    categories[best].id
}

/// Resolves a keyword domain to the closest existing category.
///
/// Exact lower-cased name match first, then substring match either
/// direction, then the first category.
fn domain_category_index(domain: &str, categories: &[Category]) -> usize {
    if let Some(index) = categories
        .iter()
        .position(|category| category.name.to_lowercase() == domain)
    {
        return index;
    }
    if let Some(index) = categories.iter().position(|category| {
        let name = category.name.to_lowercase();
        name.contains(domain) || domain.contains(name.as_str())
    }) {
        return index;
    }
    0
}

/// Multinomial naive-bayes over bag-of-words title features.
///
/// Vocabulary is capped at the [`MAX_VOCABULARY_TERMS`] most frequent terms
/// across the training titles; likelihoods use Laplace smoothing.
struct BayesModel {
    vocabulary: HashMap<String, usize>,
    classes: Vec<ClassStats>,
}

struct ClassStats {
    id: CategoryId,
    log_prior: f64,
    log_likelihood: Vec<f64>,
}

impl BayesModel {
    fn train(history: &[Task]) -> Option<Self> {
        let labeled: Vec<(Vec<String>, CategoryId)> = history
            .iter()
            .filter_map(|task| {
                task.category_id
                    .map(|category_id| (tokenize(&task.title), category_id))
            })
            .collect();
        if labeled.is_empty() {
            return None;
        }

        let vocabulary = build_vocabulary(&labeled);
        if vocabulary.is_empty() {
            return None;
        }

        // Per-class term counts, classes kept in first-seen order so that
        // prediction ties resolve deterministically.
        let mut class_ids: Vec<CategoryId> = Vec::new();
        let mut term_counts: Vec<Vec<u32>> = Vec::new();
        let mut doc_counts: Vec<u32> = Vec::new();
        for (tokens, category_id) in &labeled {
            let class_index = match class_ids.iter().position(|id| id == category_id) {
                Some(index) => index,
                None => {
                    class_ids.push(*category_id);
                    term_counts.push(vec![0; vocabulary.len()]);
                    doc_counts.push(0);
                    class_ids.len() - 1
                }
            };
            doc_counts[class_index] += 1;
            for token in tokens {
                if let Some(&term_index) = vocabulary.get(token) {
                    term_counts[class_index][term_index] += 1;
                }
            }
        }

        let total_docs = labeled.len() as f64;
        let vocab_size = vocabulary.len() as f64;
        let classes = class_ids
            .into_iter()
            .zip(term_counts)
            .zip(doc_counts)
            .map(|((id, counts), docs)| {
                let class_total: u32 = counts.iter().sum();
                let denominator = f64::from(class_total) + vocab_size;
                let log_likelihood = counts
                    .iter()
                    .map(|&count| ((f64::from(count) + 1.0) / denominator).ln())
                    .collect();
                ClassStats {
                    id,
                    log_prior: (f64::from(docs) / total_docs).ln(),
                    log_likelihood,
                }
            })
            .collect();

        Some(Self {
            vocabulary,
            classes,
        })
    }

    fn predict(&self, title: &str) -> Option<CategoryId> {
        let tokens = tokenize(title);
        let mut best: Option<(CategoryId, f64)> = None;
        for class in &self.classes {
            let mut score = class.log_prior;
            for token in &tokens {
                if let Some(&term_index) = self.vocabulary.get(token) {
                    score += class.log_likelihood[term_index];
                }
            }
            let improves = match best {
                Some((_, best_score)) => score > best_score,
                None => true,
            };
            if improves {
                best = Some((class.id, score));
            }
        }
        best.map(|(id, _)| id)
    }
}

fn build_vocabulary(labeled: &[(Vec<String>, CategoryId)]) -> HashMap<String, usize> {
    let mut frequencies: HashMap<&str, u32> = HashMap::new();
    for (tokens, _) in labeled {
        for token in tokens {
            *frequencies.entry(token.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, u32)> = frequencies.into_iter().collect();
    // Frequency-descending with a lexicographic tie-break keeps the cap
    // deterministic.
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(MAX_VOCABULARY_TERMS);

    ranked
        .into_iter()
        .enumerate()
        .map(|(index, (term, _))| (term.to_string(), index))
        .collect()
}

/// Splits a title into lower-cased word tokens of two or more characters.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{domain_category_index, tokenize};
    use crate::model::category::Category;

    #[test]
    fn tokenize_drops_single_char_tokens_and_punctuation() {
        assert_eq!(
            tokenize("Email J. the Q3 report!"),
            vec!["email", "the", "q3", "report"]
        );
    }

    #[test]
    fn domain_resolution_prefers_exact_then_substring_then_first() {
        let categories = vec![
            Category::new("Errands"),
            Category::new("Work Projects"),
            Category::new("Health"),
        ];
        assert_eq!(domain_category_index("health", &categories), 2);
        assert_eq!(domain_category_index("work", &categories), 1);
        assert_eq!(domain_category_index("learning", &categories), 0);
    }
}
