/// Keeps the candidates that do not occur in `excluded`, in iteration order.
pub fn absent_from<'a, T, I>(candidates: I, excluded: &[T]) -> Vec<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    T: PartialEq + 'a,
{
    candidates
        .into_iter()
        .filter(|c| !excluded.contains(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn readers_who_are_not_authors() {
        let authors = owned(&["Dmitry", "Alice", "Bob"]);
        let readers = set(&["Alice", "Carol"]);
        assert_eq!(absent_from(&readers, &authors), vec!["Carol"]);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let authors = owned(&["alice"]);
        let readers = set(&["Alice"]);
        assert_eq!(absent_from(&readers, &authors), vec!["Alice"]);
    }

    #[test]
    fn empty_exclusion_keeps_everything() {
        let readers = set(&["Alice", "Carol"]);
        assert_eq!(absent_from(&readers, &[]), vec!["Alice", "Carol"]);
    }

    #[test]
    fn everything_excluded() {
        let nums = [1, 2, 3];
        assert!(absent_from(&nums, &[3, 2, 1]).is_empty());
    }

    #[test]
    fn keeps_candidate_order() {
        let nums = [5, 1, 4, 2];
        assert_eq!(absent_from(&nums, &[1]), vec![&5, &4, &2]);
    }
}
