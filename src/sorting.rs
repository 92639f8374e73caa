//!
//! Sorting and order statistics
//!
//! * insertion_sort, merge_sort, quicksort: comparison sorts in place
//! * randomized_quicksort, randomized_select: random pivot
//! * counting_sort, bucket_sort: linear time sorts for restricted inputs
//!
use super::error::{Error, Result};
use log::trace;
use rand::Rng;

pub fn insertion_sort<T: PartialOrd>(a: &mut [T]) {
    for i in 1..a.len() {
        // move a[i] left until the prefix a[..=i] is sorted
        let mut j = i;
        while j > 0 && a[j - 1] > a[j] {
            a.swap(j - 1, j);
            j -= 1;
        }
    }
}

///
/// Stable merge sort
///
pub fn merge_sort<T: PartialOrd + Clone>(a: &mut [T]) {
    if a.len() > 1 {
        let mid = a.len() / 2;
        merge_sort(&mut a[..mid]);
        merge_sort(&mut a[mid..]);
        merge(a, mid);
    }
}

///
/// Merge the sorted halves `a[..mid]` and `a[mid..]`
///
fn merge<T: PartialOrd + Clone>(a: &mut [T], mid: usize) {
    let left = a[..mid].to_vec();
    let right = a[mid..].to_vec();
    let (mut i, mut j) = (0, 0);
    for slot in a.iter_mut() {
        // take from left on ties to keep the sort stable
        let take_left = j >= right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

///
/// Lomuto partition around the last element.
///
/// Returns the final index p of the pivot:
/// `a[..p] <= a[p] < a[p+1..]`
///
fn partition<T: PartialOrd>(a: &mut [T]) -> usize {
    let last = a.len() - 1;
    let mut i = 0;
    for j in 0..last {
        if a[j] <= a[last] {
            a.swap(i, j);
            i += 1;
        }
    }
    a.swap(i, last);
    i
}

fn randomized_partition<T: PartialOrd, R: Rng + ?Sized>(a: &mut [T], rng: &mut R) -> usize {
    let pivot = rng.gen_range(0..a.len());
    a.swap(pivot, a.len() - 1);
    partition(a)
}

pub fn quicksort<T: PartialOrd>(a: &mut [T]) {
    if a.len() > 1 {
        let p = partition(a);
        quicksort(&mut a[..p]);
        quicksort(&mut a[p + 1..]);
    }
}

///
/// Quicksort with a uniformly random pivot
///
pub fn randomized_quicksort<T: PartialOrd, R: Rng + ?Sized>(a: &mut [T], rng: &mut R) {
    if a.len() > 1 {
        let p = randomized_partition(a, rng);
        randomized_quicksort(&mut a[..p], rng);
        randomized_quicksort(&mut a[p + 1..], rng);
    }
}

///
/// The `order`-th smallest element (1-based) in expected linear time.
///
/// The slice is reordered.
///
pub fn randomized_select<T: PartialOrd + Clone, R: Rng + ?Sized>(
    a: &mut [T],
    order: usize,
    rng: &mut R,
) -> Result<T> {
    if order == 0 || order > a.len() {
        return Err(Error::OrderOutOfRange {
            order,
            len: a.len(),
        });
    }
    Ok(select(a, order, rng))
}

fn select<T: PartialOrd + Clone, R: Rng + ?Sized>(a: &mut [T], order: usize, rng: &mut R) -> T {
    if a.len() == 1 {
        return a[0].clone();
    }
    let p = randomized_partition(a, rng);
    // number of elements in the low side, plus the pivot
    let k = p + 1;
    trace!("select order={} len={} pivot rank={}", order, a.len(), k);
    match order.cmp(&k) {
        std::cmp::Ordering::Equal => a[p].clone(),
        std::cmp::Ordering::Less => select(&mut a[..p], order, rng),
        std::cmp::Ordering::Greater => select(&mut a[p + 1..], order - k, rng),
    }
}

///
/// Stable counting sort of integers in `0..=max`
///
pub fn counting_sort(a: &[usize], max: usize) -> Result<Vec<usize>> {
    if let Some(&value) = a.iter().find(|&&x| x > max) {
        return Err(Error::ValueOutOfRange {
            value: value as f64,
            max: max as f64,
        });
    }
    // one counter for each value in 0..=max
    let size = max.checked_add(1).ok_or(Error::ValueOutOfRange {
        value: max as f64,
        max: (usize::MAX - 1) as f64,
    })?;
    // c[i] = number of elements equal to i
    let mut c = vec![0usize; size];
    for &x in a {
        c[x] += 1;
    }
    // c[i] = number of elements less than or equal to i
    for i in 1..=max {
        c[i] += c[i - 1];
    }
    let mut b = vec![0; a.len()];
    for &x in a.iter().rev() {
        c[x] -= 1;
        b[c[x]] = x;
    }
    Ok(b)
}

///
/// Bucket sort of values in `[0, 1)`
///
/// n buckets of width 1/n, each sorted by insertion sort.
/// Linear expected time for uniformly distributed input.
///
pub fn bucket_sort(a: &[f64]) -> Result<Vec<f64>> {
    if let Some(&value) = a.iter().find(|&&x| !(0.0..1.0).contains(&x)) {
        return Err(Error::ValueOutOfRange { value, max: 1.0 });
    }
    let n = a.len();
    let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); n];
    for &x in a {
        let i = ((n as f64 * x) as usize).min(n - 1);
        buckets[i].push(x);
    }
    Ok(buckets
        .into_iter()
        .flat_map(|mut bucket| {
            insertion_sort(&mut bucket);
            bucket
        })
        .collect())
}

//
// tests
//
