/// Mapping of modules in src/ to type of computation
/// and whether deterministic or stochastic
pub const PUZZLES_COMPUTATION_MAP: &[(&str, &str, &str)] = &[
    // Searching
    ("searching/pair_sum.rs", "Search", "Deterministic"),
    // Data structures
    (
        "data_structures/digit_list.rs",
        "Data structure operations",
        "Deterministic",
    ),
    // Numerical
    (
        "numerical/digit_addition.rs",
        "Arithmetic",
        "Deterministic",
    ),
];
