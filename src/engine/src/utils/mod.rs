use std::cmp::Ordering;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownLabel {
    pub fn new(kind: &'static str, value: &str) -> Self {
        UnknownLabel {
            kind,
            value: value.to_string(),
        }
    }
}

pub struct TimeEstimation;

impl TimeEstimation {
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let now = Instant::now();

        let result = action();

        (result, now.elapsed().as_millis())
    }
}

pub struct FloatUtils;

impl FloatUtils {
    /// Rounds half away from zero to the given number of decimal places.
    pub fn round(value: f64, places: u32) -> f64 {
        let factor = 10f64.powi(places as i32);
        (value * factor).round() / factor
    }
}

pub struct StringUtils;

impl StringUtils {
    /// Lowercased name with Latin diacritics folded, so "Álvaro" sorts next to "Alvaro".
    pub fn collation_key(value: &str) -> String {
        value
            .chars()
            .flat_map(char::to_lowercase)
            .map(fold_diacritic)
            .collect()
    }

    /// Ascending by collation key; byte order only separates names that fold together.
    pub fn cmp_names(a: &str, b: &str) -> Ordering {
        Self::collation_key(a)
            .cmp(&Self::collation_key(b))
            .then_with(|| a.cmp(b))
    }
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
