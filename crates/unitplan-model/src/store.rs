//! The loaded, read-only collection of all datasets.

use crate::dataset::{BenchmarkSet, Category, Dataset};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    categories: Vec<Category>,
    benchmarks: Vec<BenchmarkSet>,
}

impl RecordStore {
    pub fn new(categories: Vec<Category>, benchmarks: Vec<BenchmarkSet>) -> Self {
        Self {
            categories,
            benchmarks,
        }
    }

    /// Categories in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.name.as_str())
    }

    /// Dataset for `name`; `None` for categories the catalog never named.
    pub fn dataset(&self, name: &str) -> Option<&Dataset> {
        self.categories
            .iter()
            .find(|category| category.name == name)
            .map(|category| &category.dataset)
    }

    /// Benchmark sets in catalog order.
    pub fn benchmark_sets(&self) -> &[BenchmarkSet] {
        &self.benchmarks
    }

    pub fn benchmark_set(&self, key: &str) -> Option<&BenchmarkSet> {
        self.benchmarks.iter().find(|set| set.key == key)
    }
}
