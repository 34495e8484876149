use crate::utils::error::{Result, UtilError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Concatenates one level of nesting.
pub fn flatten_list<I>(nested: I) -> Vec<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    nested.into_iter().flatten().collect()
}

/// Keeps the first occurrence of each element, in input order.
pub fn remove_duplicates<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

pub fn random_element<T>(items: &[T]) -> Option<&T> {
    random_element_with(&mut rand::thread_rng(), items)
}

pub fn random_element_with<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

pub fn chunk_list<T: Clone>(items: &[T], chunk_size: i64) -> Result<Vec<Vec<T>>> {
    if chunk_size <= 0 {
        tracing::debug!("rejected chunk size {}", chunk_size);
        return Err(UtilError::invalid_argument(
            "chunk_size",
            "Chunk size must be positive",
        ));
    }
    let size = usize::try_from(chunk_size).unwrap_or(usize::MAX);
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Highest-frequency element. On equal counts the element that appears
/// first in `items` wins.
pub fn most_common_element<T: Eq + Hash + Clone>(items: &[T]) -> Option<T> {
    let mut tally: HashMap<&T, (usize, usize)> = HashMap::new();
    for (position, item) in items.iter().enumerate() {
        tally.entry(item).or_insert((0, position)).0 += 1;
    }

    tally
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(item, _)| item.clone())
}

pub fn shuffle_in_place<T>(items: &mut [T]) {
    shuffle_in_place_with(&mut rand::thread_rng(), items);
}

pub fn shuffle_in_place_with<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    items.shuffle(rng);
}

pub fn find_intersection<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> HashSet<T> {
    let right: HashSet<&T> = b.iter().collect();
    a.iter()
        .filter(|item| right.contains(item))
        .cloned()
        .collect()
}

/// Elements of `a` that do not occur in `b`.
pub fn find_difference<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> HashSet<T> {
    let right: HashSet<&T> = b.iter().collect();
    a.iter()
        .filter(|item| !right.contains(item))
        .cloned()
        .collect()
}
