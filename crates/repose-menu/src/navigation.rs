//! Focus movement over a registry snapshot.
//!
//! Every function is total over the registry: an empty registry yields
//! `None` (nothing to focus) and callers simply leave focus where it is.
//! The `current` id must come from the same registry; `checked_step` and
//! `checked_find_by_char` report foreign ids instead of guessing.

use crate::error::Result;
use crate::registry::{ItemId, ItemRegistry, typeahead_key};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    First,
    Last,
    Previous,
    Next,
}

pub fn first<H>(items: &ItemRegistry<H>) -> Option<ItemId> {
    items.first().map(|i| i.id())
}

pub fn last<H>(items: &ItemRegistry<H>) -> Option<ItemId> {
    items.last().map(|i| i.id())
}

/// Item before `current`, wrapping from the first item to the last.
pub fn previous<H>(items: &ItemRegistry<H>, current: ItemId) -> Option<ItemId> {
    if current.0 == 0 {
        last(items)
    } else {
        items.get(ItemId(current.0 - 1)).map(|i| i.id())
    }
}

/// Item after `current`, wrapping from the last item to the first.
pub fn next<H>(items: &ItemRegistry<H>, current: ItemId) -> Option<ItemId> {
    if current.0.saturating_add(1) >= items.len() {
        first(items)
    } else {
        items.get(ItemId(current.0 + 1)).map(|i| i.id())
    }
}

pub fn step<H>(items: &ItemRegistry<H>, current: Option<ItemId>, dir: Direction) -> Option<ItemId> {
    match (dir, current) {
        (Direction::First, _) | (Direction::Next, None) => first(items),
        (Direction::Last, _) | (Direction::Previous, None) => last(items),
        (Direction::Previous, Some(cur)) => previous(items, cur),
        (Direction::Next, Some(cur)) => next(items, cur),
    }
}

/// Next item (circularly, after `current`) whose label starts with `ch`,
/// ignoring case. `current` itself is checked last, so pressing the same
/// letter repeatedly cycles through every match.
pub fn find_by_char<H>(items: &ItemRegistry<H>, current: ItemId, ch: char) -> Option<ItemId> {
    let len = items.len();
    if len == 0 {
        return None;
    }
    let needle = typeahead_key(ch.encode_utf8(&mut [0; 4]));
    if needle.is_empty() {
        return None;
    }
    let start = current.0.saturating_add(1) % len;
    (0..len)
        .map(|offset| ItemId((start + offset) % len))
        .find(|&id| items[id].key() == needle)
}

pub fn checked_step<H>(
    items: &ItemRegistry<H>,
    current: ItemId,
    dir: Direction,
) -> Result<Option<ItemId>> {
    let current = items.check(current)?;
    Ok(step(items, Some(current), dir))
}

pub fn checked_find_by_char<H>(
    items: &ItemRegistry<H>,
    current: ItemId,
    ch: char,
) -> Result<Option<ItemId>> {
    let current = items.check(current)?;
    Ok(find_by_char(items, current, ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MenuError;

    fn registry(labels: &[&str]) -> ItemRegistry<()> {
        let mut r = ItemRegistry::new();
        for label in labels {
            r.register(label, ());
        }
        r
    }

    #[test]
    fn next_and_previous_are_cyclic() {
        for n in 1..=5 {
            let labels: Vec<String> = (0..n).map(|i| format!("Item {i}")).collect();
            let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
            let r = registry(&refs);
            for start in 0..n {
                let mut fwd = ItemId(start);
                let mut back = ItemId(start);
                for _ in 0..n {
                    fwd = next(&r, fwd).unwrap();
                    back = previous(&r, back).unwrap();
                }
                assert_eq!(fwd, ItemId(start));
                assert_eq!(back, ItemId(start));
            }
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        let r = registry(&["a", "b", "c"]);
        assert_eq!(previous(&r, first(&r).unwrap()), last(&r));
        assert_eq!(next(&r, last(&r).unwrap()), first(&r));
        assert_eq!(next(&r, ItemId(0)), Some(ItemId(1)));
        assert_eq!(previous(&r, ItemId(2)), Some(ItemId(1)));
    }

    #[test]
    fn single_item_moves_to_itself() {
        let r = registry(&["only"]);
        assert_eq!(next(&r, ItemId(0)), Some(ItemId(0)));
        assert_eq!(previous(&r, ItemId(0)), Some(ItemId(0)));
        assert_eq!(first(&r), last(&r));
    }

    #[test]
    fn empty_registry_is_noop() {
        let r = registry(&[]);
        assert_eq!(first(&r), None);
        assert_eq!(last(&r), None);
        assert_eq!(step(&r, None, Direction::Next), None);
        assert_eq!(find_by_char(&r, ItemId(0), 'a'), None);
    }

    #[test]
    fn typeahead_picks_next_occurrence() {
        let r = registry(&["apple", "banana", "avocado", "cherry"]);
        assert_eq!(find_by_char(&r, ItemId(0), 'a'), Some(ItemId(2)));
        assert_eq!(find_by_char(&r, ItemId(3), 'a'), Some(ItemId(0)));
        assert_eq!(find_by_char(&r, ItemId(2), 'A'), Some(ItemId(0)));
    }

    #[test]
    fn typeahead_cycles_and_misses_quietly() {
        let r = registry(&["apple", "banana", "avocado", "cherry"]);
        let mut cur = ItemId(1);
        let mut seen = Vec::new();
        for _ in 0..4 {
            cur = find_by_char(&r, cur, 'a').unwrap();
            seen.push(cur.index());
        }
        assert_eq!(seen, vec![2, 0, 2, 0]);
        assert_eq!(find_by_char(&r, ItemId(1), 'z'), None);
    }

    #[test]
    fn typeahead_sole_match_is_current() {
        let r = registry(&["banana", "cherry"]);
        assert_eq!(find_by_char(&r, ItemId(0), 'b'), Some(ItemId(0)));
    }

    #[test]
    fn out_of_range_ids_do_not_overflow() {
        let r = registry(&["a", "b"]);
        assert_eq!(next(&r, ItemId(usize::MAX)), Some(ItemId(0)));
        assert!(find_by_char(&r, ItemId(usize::MAX), 'b').is_some());
    }

    #[test]
    fn step_without_current_enters_from_edges() {
        let r = registry(&["a", "b", "c"]);
        assert_eq!(step(&r, None, Direction::Next), Some(ItemId(0)));
        assert_eq!(step(&r, None, Direction::Previous), Some(ItemId(2)));
        assert_eq!(step(&r, Some(ItemId(1)), Direction::Last), Some(ItemId(2)));
    }

    #[test]
    fn checked_variants_reject_foreign_ids() {
        let r = registry(&["a", "b"]);
        assert_eq!(
            checked_step(&r, ItemId(7), Direction::Next),
            Err(MenuError::IndexOutOfRange { index: 7, len: 2 })
        );
        assert_eq!(checked_find_by_char(&r, ItemId(0), 'b'), Ok(Some(ItemId(1))));
    }
}
