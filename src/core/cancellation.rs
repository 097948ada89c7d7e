use crate::domain::model::CancellationResult;
use std::collections::BTreeSet;

fn letters(name: &str) -> Vec<char> {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Pairs off letters between two normalized names.
///
/// Each letter of the first name, scanned left to right, consumes the leftmost
/// unconsumed occurrence of the same letter in the second name. After a match
/// the same position is examined again, since the next letter has shifted into
/// it.
pub fn cancel_common_letters(first: &str, second: &str) -> CancellationResult {
    let mut a = letters(first);
    let mut b = letters(second);
    let mut common_letters = BTreeSet::new();

    let mut i = 0;
    while i < a.len() {
        let letter = a[i];
        match b.iter().position(|&c| c == letter) {
            Some(j) => {
                common_letters.insert(letter);
                a.remove(i);
                b.remove(j);
            }
            None => i += 1,
        }
    }

    CancellationResult {
        remaining_count: a.len() + b.len(),
        common_letters,
        leftover_first: a,
        leftover_second: b,
    }
}
