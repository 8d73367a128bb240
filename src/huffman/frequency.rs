use itertools::Itertools;

use crate::{Freq, FrequencyEntry};

/// Counts the occurrences of every distinct symbol of `text`.
///
/// Entries are collected in order of first appearance and then stably sorted by descending count,
/// so symbols with the same count keep the order in which they first showed up in the text.
pub fn frequency_table(text: &str) -> Vec<FrequencyEntry> {
    let counts = text.chars().counts();

    let mut table = text
        .chars()
        .unique()
        .map(|symbol| FrequencyEntry::new(symbol, counts[&symbol]))
        .collect::<Vec<FrequencyEntry>>();

    // sort_by is stable: ties stay in first-appearance order.
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

/// The sum of all the counts in the table, i.e. the number of symbols of the analyzed text.
pub fn total_count(table: &[FrequencyEntry]) -> Freq {
    table.iter().map(|entry| entry.count).sum()
}
