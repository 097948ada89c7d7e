use crate::domain::model::FlamesLabel;

/// Josephus-style elimination over `F L A M E S`.
///
/// Every round counts `remaining_count` positions from the cursor and removes
/// the element it lands on. The cursor then stays at the removed index, which
/// wraps to 0 when the old last element was removed.
///
/// `remaining_count` must be at least 1; a zero count has no label and is
/// handled as the no-score outcome by the caller.
pub fn eliminate(remaining_count: usize) -> FlamesLabel {
    debug_assert!(remaining_count >= 1, "elimination needs at least one letter");

    let mut sequence = FlamesLabel::SEQUENCE.to_vec();
    let mut cursor = 0usize;
    // Reduce first so huge counts cannot overflow the addition.
    let step = remaining_count.saturating_sub(1);

    while sequence.len() > 1 {
        let remove_index = (cursor + step % sequence.len()) % sequence.len();
        sequence.remove(remove_index);
        cursor = remove_index % sequence.len();
    }

    sequence[0]
}
