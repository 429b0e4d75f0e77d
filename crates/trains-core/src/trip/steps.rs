//! Persistent step list shared between a trip and its extensions

use std::cmp::Ordering;
use std::sync::Arc;

#[derive(Debug)]
struct StepNode {
    city: Arc<str>,
    prev: Option<Arc<StepNode>>,
}

/// Append-only list of cities where every extension shares its prefix with
/// the list it was built from
#[derive(Debug, Clone, Default)]
pub struct StepList {
    last: Option<Arc<StepNode>>,
    len: usize,
}

impl StepList {
    pub fn new() -> Self {
        Self::default()
    }

    /// New list with `city` appended; `self` is left untouched
    pub fn push(&self, city: &str) -> StepList {
        StepList {
            last: Some(Arc::new(StepNode {
                city: Arc::from(city),
                prev: self.last.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref().map(|node| &*node.city)
    }

    /// Cities from the most recent step back to the first
    pub fn iter_rev(&self) -> StepsRev<'_> {
        StepsRev {
            next: self.last.as_deref(),
        }
    }

    /// Compare two lists city by city in travel order; a prefix sorts first
    ///
    /// Walks both lists from the back without allocating. Only the common
    /// prefix length is compared pairwise, and the pair nearest the front
    /// that differs decides.
    pub fn cmp_in_order(&self, other: &StepList) -> Ordering {
        let common = self.len.min(other.len);
        let left = self.iter_rev().skip(self.len - common);
        let right = other.iter_rev().skip(other.len - common);

        let mut first_difference = Ordering::Equal;
        for (a, b) in left.zip(right) {
            let ord = a.cmp(b);
            if ord != Ordering::Equal {
                first_difference = ord;
            }
        }
        first_difference.then(self.len.cmp(&other.len))
    }

    /// Cities in travel order
    pub fn to_vec(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = self.iter_rev().collect();
        cities.reverse();
        cities
    }
}

pub struct StepsRev<'a> {
    next: Option<&'a StepNode>,
}

impl<'a> Iterator for StepsRev<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.prev.as_deref();
        Some(&*node.city)
    }
}

impl Drop for StepList {
    // Unlink uniquely owned nodes iteratively so long lists cannot overflow
    // the stack through recursive drops.
    fn drop(&mut self) {
        let mut next = self.last.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut owned) => next = owned.prev.take(),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_leaves_source_untouched() {
        let base = StepList::new().push("B").push("C");
        let extended = base.push("D");

        assert_eq!(base.to_vec(), vec!["B", "C"]);
        assert_eq!(extended.to_vec(), vec!["B", "C", "D"]);
        assert_eq!(base.len(), 2);
        assert_eq!(extended.len(), 3);
        assert_eq!(extended.last(), Some("D"));
    }

    #[test]
    fn test_empty_list() {
        let list = StepList::new();
        assert_eq!(list.len(), 0);
        assert_eq!(list.last(), None);
        assert!(list.to_vec().is_empty());
    }

    fn list(cities: &[&str]) -> StepList {
        cities
            .iter()
            .fold(StepList::new(), |list, city| list.push(city))
    }

    #[test]
    fn test_cmp_in_order_matches_vec_ordering() {
        let lists = [
            vec![],
            vec!["B"],
            vec!["B", "C"],
            vec!["B", "C", "A"],
            vec!["C"],
            vec!["C", "A"],
            vec!["A", "Z", "Z"],
            vec!["Z", "A", "A"],
        ];
        for a in &lists {
            for b in &lists {
                assert_eq!(
                    list(a).cmp_in_order(&list(b)),
                    a.cmp(b),
                    "{:?} vs {:?}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_cmp_in_order_earliest_difference_wins() {
        // Later cities differ the other way; the first step decides
        let a = list(&["A", "Z", "Z"]);
        let b = list(&["B", "A", "A"]);
        assert_eq!(a.cmp_in_order(&b), Ordering::Less);
        assert_eq!(b.cmp_in_order(&a), Ordering::Greater);
    }

    #[test]
    fn test_long_list_drops_without_overflow() {
        let mut list = StepList::new();
        for _ in 0..200_000 {
            list = list.push("A");
        }
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
