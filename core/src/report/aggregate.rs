//! Derived statistics over tracker output

use hashbrown::HashMap;
use serde::Serialize;

use crate::combat_log::TargetEntity;

pub use sunderlog_types::DEFAULT_TOP_N;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetCount {
    pub name: String,
    pub count: usize,
}

/// `numerator / denominator * 100`, rounded to two decimals.
/// A zero denominator yields 0.0 instead of NaN or infinity.
pub fn percentage(numerator: usize, denominator: u32) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    let pct = numerator as f64 / denominator as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}

pub fn format_percentage(pct: f64) -> String {
    format!("{pct:.2}")
}

/// The `n` most frequent target names. Equal counts keep the order in which
/// the names first appeared in `targets`.
pub fn top_targets(targets: &[TargetEntity], n: usize) -> Vec<TargetCount> {
    let mut counts: Vec<TargetCount> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for target in targets {
        match index_by_name.get(target.name.as_str()) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                index_by_name.insert(&target.name, counts.len());
                counts.push(TargetCount {
                    name: target.name.clone(),
                    count: 1,
                });
            }
        }
    }

    // stable sort keeps first-appearance order among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

/// `Name(count)` pairs joined by ", "
pub fn format_top(top: &[TargetCount]) -> String {
    top.iter()
        .map(|t| format!("{}({})", t.name, t.count))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(names: &[&str]) -> Vec<TargetEntity> {
        names
            .iter()
            .map(|name| TargetEntity {
                name: name.to_string(),
                kind_tag: "Creature-0-1-2-3-4-5".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(2, 10), 20.0);
        assert_eq!(format_percentage(percentage(2, 10)), "20.00");
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(2, 3), 66.67);
        assert_eq!(percentage(15, 10), 150.0);
    }

    #[test]
    fn test_percentage_zero_denominator() {
        let pct = percentage(2, 0);
        assert_eq!(pct, 0.0);
        assert!(pct.is_finite());
        assert_eq!(format_percentage(percentage(0, 0)), "0.00");
    }

    #[test]
    fn test_top_targets() {
        let top = top_targets(&targets(&["X", "Y", "X", "Z", "X", "Y"]), DEFAULT_TOP_N);
        assert_eq!(
            top,
            vec![
                TargetCount { name: "X".into(), count: 3 },
                TargetCount { name: "Y".into(), count: 2 },
                TargetCount { name: "Z".into(), count: 1 },
            ]
        );
        assert_eq!(format_top(&top), "X(3), Y(2), Z(1)");
    }

    #[test]
    fn test_top_targets_ties_keep_first_appearance() {
        let top = top_targets(&targets(&["Rat", "Imp", "Bat", "Imp", "Rat", "Cow", "Bat"]), 3);
        let names: Vec<&str> = top.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Rat", "Imp", "Bat"]);
    }

    #[test]
    fn test_top_targets_fewer_than_n() {
        let top = top_targets(&targets(&["Rat"]), 3);
        assert_eq!(format_top(&top), "Rat(1)");
        assert!(top_targets(&[], 3).is_empty());
        assert_eq!(format_top(&[]), "");
    }
}
