use crate::domain::model::{ClassificationPolicy, ComparisonResult, LineClass, LineSet, SortMode};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct DiffEngine {
    policy: ClassificationPolicy,
}

impl DiffEngine {
    pub fn new(policy: ClassificationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ClassificationPolicy {
        self.policy
    }

    /// 計算兩側各自獨有的行並依排序模式重排
    pub fn compare(&self, a: &LineSet, b: &LineSet, sort_mode: SortMode) -> ComparisonResult {
        let index_a: HashSet<&str> = a.iter().collect();
        let index_b: HashSet<&str> = b.iter().collect();

        let raw_unique_to_a = one_sided(a, &index_b);
        let raw_unique_to_b = one_sided(b, &index_a);

        ComparisonResult {
            unique_to_a: self.order(raw_unique_to_a, sort_mode),
            unique_to_b: self.order(raw_unique_to_b, sort_mode),
        }
    }

    /// Stable partition by line class. Lines of the same class never swap.
    pub fn order(&self, lines: Vec<String>, sort_mode: SortMode) -> Vec<String> {
        let (special, ordinary): (Vec<String>, Vec<String>) = lines
            .into_iter()
            .partition(|line| self.policy.classify(line) == LineClass::Special);

        let (first, second) = match sort_mode {
            SortMode::Top => (special, ordinary),
            SortMode::Bottom => (ordinary, special),
        };

        let mut ordered = first;
        ordered.extend(second);
        ordered
    }
}

fn one_sided(source: &LineSet, other: &HashSet<&str>) -> Vec<String> {
    source
        .iter()
        .filter(|line| !other.contains(line))
        .map(str::to_string)
        .collect()
}
