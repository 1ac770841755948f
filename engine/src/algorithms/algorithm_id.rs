// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The five supported algorithms. The lowercase serialized form (`bubble`, `selection`,
/// ...) is the identifier the host shell uses for selection.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
    Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum AlgorithmId {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

/// Human-facing card for one algorithm: name, description, and complexity summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Best / average / worst case time complexity.
    pub time_complexity: (&'static str, &'static str, &'static str),
    pub space_complexity: &'static str,
}

const BUBBLE_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Bubble Sort",
    description: "Bubble Sort repeatedly steps through the list, compares adjacent \
                  elements and swaps them if they are in the wrong order.",
    time_complexity: ("O(n)", "O(n²)", "O(n²)"),
    space_complexity: "O(1)",
};

const SELECTION_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Selection Sort",
    description: "Selection Sort divides the input list into two parts: a sorted \
                  sublist and a sublist of remaining unsorted items.",
    time_complexity: ("O(n²)", "O(n²)", "O(n²)"),
    space_complexity: "O(1)",
};

const INSERTION_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Insertion Sort",
    description: "Insertion Sort builds the final sorted array one item at a time. \
                  Efficient for small data sets or nearly sorted data.",
    time_complexity: ("O(n)", "O(n²)", "O(n²)"),
    space_complexity: "O(1)",
};

const MERGE_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Merge Sort",
    description: "Merge Sort is a divide-and-conquer algorithm that divides the input \
                  array into two halves and then merges the two sorted halves.",
    time_complexity: ("O(n log n)", "O(n log n)", "O(n log n)"),
    space_complexity: "O(n)",
};

const QUICK_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Quick Sort",
    description: "Quick Sort picks an element as pivot and partitions the array around \
                  the pivot. Generally faster than Merge Sort for small data sets.",
    time_complexity: ("O(n log n)", "O(n log n)", "O(n²)"),
    space_complexity: "O(log n)",
};

impl AlgorithmId {
    #[must_use]
    pub fn info(&self) -> &'static AlgorithmInfo {
        match self {
            Self::Bubble => &BUBBLE_INFO,
            Self::Selection => &SELECTION_INFO,
            Self::Insertion => &INSERTION_INFO,
            Self::Merge => &MERGE_INFO,
            Self::Quick => &QUICK_INFO,
        }
    }
}
