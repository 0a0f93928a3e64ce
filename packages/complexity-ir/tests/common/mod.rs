//! Common test utilities for complexity-ir
//!
//! Shared fixtures and assertions for integration tests.

#![allow(dead_code)]

use complexity_ir::{analyze_source, Dialect};

/// Assert the rendered complexity of `source`
#[track_caller]
pub fn assert_complexity(source: &str, dialect: Dialect, expected: &str) {
    let actual = analyze_source(source, dialect).to_string();
    assert_eq!(actual, expected, "source:\n{}", source);
}

pub const C_BUBBLE_SORT: &str = r#"
void bubble_sort(int *a, int n) {
    for (int i = 0; i < n; i++) {
        for (int j = 0; j < n - i - 1; j++) {
            if (a[j] > a[j + 1]) {
                int t = a[j];
                a[j] = a[j + 1];
                a[j + 1] = t;
            }
        }
    }
}
"#;

pub const C_BINARY_SEARCH: &str = r#"
int binary_search(int *a, int n, int key) {
    int lo = 0, hi = n - 1;
    while (hi >= lo) {
        int mid = (lo + hi) / 2;
        if (a[mid] == key) return mid;
        if (a[mid] < key) lo = mid + 1; else hi = mid - 1;
        hi /= 2;
    }
    return -1;
}
"#;

pub const C_MERGE_LOOPS: &str = r#"
/* n log n: outer doubling width, inner linear sweep */
void merge_passes(int *a, int n) {
    for (int width = 1; width < n; width *= 2) {
        for (int i = 0; i < n; i++) {
            merge_step(a, i, width);
        }
    }
}
"#;

pub const PY_PAIRS: &str = r#"
def count_pairs(items, n):
    total = 0
    for i in range(n):
        for j in range(n):
            if items[i] == items[j]:
                total += 1
    return total
"#;

pub const PY_TRIAL_DIVISION: &str = r#"
def is_prime(n):
    i = 2
    while i * i <= n:
        if n % i == 0:
            return False
        i += 1
    return True
"#;
