use super::types::AgendaItem;

/// Sorts appointments ascending by their start instant, tie-broken by
/// the displayed "HH:MM" label compared numerically.
///
/// The primary key is the parsed instant, never a formatted string: two
/// timestamps that differ only in representation still order correctly.
/// The label tie-break keeps same-instant rows in the order the day view
/// displays them. `sort_by` is stable, so full ties keep their input
/// order.
pub fn sort_chronologically(items: &mut [AgendaItem]) {
    items.sort_by(|a, b| {
        let instant_cmp = a.start_at.cmp(&b.start_at);
        if instant_cmp != std::cmp::Ordering::Equal {
            return instant_cmp;
        }

        label_minutes(&a.start_label).cmp(&label_minutes(&b.start_label))
    });
}

/// "09:30" -> 930, mirroring the numeric comparison the day view uses.
fn label_minutes(label: &str) -> u32 {
    label.replace(':', "").parse().unwrap_or(0)
}
