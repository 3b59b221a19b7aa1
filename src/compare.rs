//! Positional line alignment and classification.

use crate::model::{
    Classification, Comparison, LineRef, MappingEntry, SIMILAR_WEIGHT, Summary,
};

/// Classifies the pair of lines found at one index.
///
/// "Similar" compares after `str::trim`, which strips Unicode `White_Space`
/// characters. The ASCII separators U+001C..=U+001F are not whitespace there
/// and so still make two lines different.
pub fn classify(source: Option<&str>, target: Option<&str>) -> Classification {
    match (source, target) {
        (Some(a), Some(b)) if a == b => Classification::Exact,
        (Some(a), Some(b)) if a.trim() == b.trim() => Classification::Similar,
        (Some(_), Some(_)) => Classification::Different,
        _ => Classification::Unpaired,
    }
}

/// Aligns `source` and `target` by index and summarizes the result.
///
/// The mapping has one entry per index up to the longer input. Counts for
/// exact/similar/different only cover the overlapping range; every index past
/// the shorter input is unpaired.
pub fn compare_lines<S: AsRef<str>>(source: &[S], target: &[S]) -> Comparison {
    let total = source.len().max(target.len());
    let mut mappings = Vec::with_capacity(total);
    let mut exact = 0;
    let mut similar = 0;
    let mut different = 0;
    let mut unpaired = 0;

    for i in 0..total {
        let a = source.get(i).map(AsRef::as_ref);
        let b = target.get(i).map(AsRef::as_ref);
        let classification = classify(a, b);
        match classification {
            Classification::Exact => exact += 1,
            Classification::Similar => similar += 1,
            Classification::Different => different += 1,
            Classification::Unpaired => unpaired += 1,
        }

        mappings.push(MappingEntry {
            index: i + 1,
            source: a.map(|text| LineRef {
                number: i + 1,
                text: text.to_string(),
            }),
            target: b.map(|text| LineRef {
                number: i + 1,
                text: text.to_string(),
            }),
            classification,
        });
    }

    let similarity_score = if total == 0 {
        0.0
    } else {
        (exact as f64 + SIMILAR_WEIGHT * similar as f64) / total as f64 * 100.0
    };

    Comparison {
        mappings,
        summary: Summary {
            total_lines: total,
            exact,
            similar,
            different,
            unpaired,
            similarity_score,
        },
    }
}

#[cfg(test)]
#[path = "tests/compare_tests.rs"]
mod tests;
