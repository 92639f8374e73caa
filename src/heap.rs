//!
//! Binary min-heap, also used as a min-priority queue
//!
//! The ordering is a strict "less than" function given at construction,
//! so the same heap can order vertices by distance (Dijkstra) or by key (Prim).
//!
//! 0-indexed array layout
//! * parent(i) = (i - 1) / 2
//! * left(i) = 2i + 1
//! * right(i) = 2i + 2
//!
//! Heap invariant: `!less(array[i], array[parent(i)])` for all i > 0
//!
use super::error::{Error, Result};

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left(i: usize) -> usize {
    2 * i + 1
}

fn right(i: usize) -> usize {
    2 * i + 2
}

fn natural_less<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

pub struct MinHeap<T, F = fn(&T, &T) -> bool> {
    array: Vec<T>,
    less: F,
}

impl<T: PartialOrd> MinHeap<T> {
    ///
    /// Build a heap ordered by `PartialOrd` of the elements
    ///
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        MinHeap::with_order(items, natural_less::<T> as fn(&T, &T) -> bool)
    }
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    ///
    /// Build a heap from `items` in O(n), ordered by the strict comparison `less`
    ///
    pub fn with_order<I: IntoIterator<Item = T>>(items: I, less: F) -> Self {
        let mut heap = MinHeap {
            array: items.into_iter().collect(),
            less,
        };
        heap.build_min_heap();
        heap
    }

    pub fn size(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// elements in array order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.array.iter()
    }

    pub fn minimum(&self) -> Option<&T> {
        self.array.first()
    }

    ///
    /// Index of the first element (in array order) satisfying `pred`
    ///
    pub fn position<P: Fn(&T) -> bool>(&self, pred: P) -> Option<usize> {
        self.array.iter().position(pred)
    }

    pub fn contains<P: Fn(&T) -> bool>(&self, pred: P) -> bool {
        self.position(pred).is_some()
    }

    ///
    /// Sift the element at `i` down until both children are not less than it.
    ///
    /// Only a strictly smaller child is swapped up, so equal keys stay in place.
    ///
    pub fn min_heapify(&mut self, mut i: usize) {
        let n = self.array.len();
        loop {
            let l = left(i);
            let r = right(i);
            let mut smallest = i;
            if l < n && (self.less)(&self.array[l], &self.array[smallest]) {
                smallest = l;
            }
            if r < n && (self.less)(&self.array[r], &self.array[smallest]) {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            self.array.swap(i, smallest);
            i = smallest;
        }
    }

    ///
    /// Restore heap order for the whole array.
    ///
    /// Needed after keys of the elements were changed from outside.
    ///
    pub fn build_min_heap(&mut self) {
        for i in (0..self.array.len() / 2).rev() {
            self.min_heapify(i);
        }
    }

    ///
    /// Remove and return the minimum element
    ///
    pub fn extract_min(&mut self) -> Result<T> {
        if self.array.is_empty() {
            return Err(Error::EmptyHeap);
        }
        let min = self.array.swap_remove(0);
        self.min_heapify(0);
        Ok(min)
    }

    ///
    /// Replace the element at index `i` by a smaller (or equal) `key`
    /// and move it up to its place.
    ///
    pub fn decrease_key(&mut self, mut i: usize, key: T) -> Result<()> {
        if i >= self.array.len() || (self.less)(&self.array[i], &key) {
            return Err(Error::InvalidKey { index: i });
        }
        self.array[i] = key;
        while i > 0 && (self.less)(&self.array[i], &self.array[parent(i)]) {
            self.array.swap(i, parent(i));
            i = parent(i);
        }
        Ok(())
    }

    ///
    /// Drain the heap by repeated extract_min (heap sort)
    ///
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.array.len());
        while let Ok(min) = self.extract_min() {
            sorted.push(min);
        }
        sorted
    }
}

impl<T: std::fmt::Debug, F> std::fmt::Debug for MinHeap<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("MinHeap")
            .field("array", &self.array)
            .finish()
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn is_heap<T, F: Fn(&T, &T) -> bool>(heap: &MinHeap<T, F>) -> bool {
        (1..heap.array.len()).all(|i| !(heap.less)(&heap.array[i], &heap.array[parent(i)]))
    }

    #[test]
    fn heap_extract_clrs() {
        let mut heap = MinHeap::new(vec![4, 1, 3, 2, 16, 9, 10, 14, 8, 7]);
        assert!(is_heap(&heap));
        assert_eq!(heap.minimum(), Some(&1));
        assert_eq!(heap.extract_min(), Ok(1));
        assert!(is_heap(&heap));
        assert_eq!(heap.extract_min(), Ok(2));
        assert!(is_heap(&heap));
        assert_eq!(heap.extract_min(), Ok(3));
        assert!(is_heap(&heap));
        assert_eq!(heap.size(), 7);
    }

    #[test]
    fn heap_empty() {
        let mut heap: MinHeap<i32> = MinHeap::new(vec![]);
        assert!(heap.is_empty());
        assert_eq!(heap.minimum(), None);
        assert_eq!(heap.extract_min(), Err(Error::EmptyHeap));

        let mut heap = MinHeap::new(vec![5]);
        assert_eq!(heap.extract_min(), Ok(5));
        assert_eq!(heap.extract_min(), Err(Error::EmptyHeap));
    }

    #[test]
    fn heap_decrease_key() {
        let mut heap = MinHeap::new(vec![4, 1, 3, 2, 16, 9, 10, 14, 8, 7]);
        let i = heap.position(|&x| x == 14).unwrap();
        assert_eq!(heap.decrease_key(i, 0), Ok(()));
        assert!(is_heap(&heap));
        assert_eq!(heap.minimum(), Some(&0));

        let i = heap.position(|&x| x == 9).unwrap();
        assert_eq!(heap.decrease_key(i, 12), Err(Error::InvalidKey { index: i }));
        assert_eq!(heap.decrease_key(10, 0), Err(Error::InvalidKey { index: 10 }));
        // equal key is allowed
        assert_eq!(heap.decrease_key(i, 9), Ok(()));
        assert!(heap.contains(|&x| x == 9));
        assert!(!heap.contains(|&x| x == 14));
    }

    #[test]
    fn heap_with_order_by_key() {
        let dist = vec![7.0, 0.0, 3.5, f64::INFINITY];
        let mut heap = MinHeap::with_order(vec![0usize, 1, 2, 3], |&a: &usize, &b: &usize| {
            dist[a] < dist[b]
        });
        assert_eq!(heap.extract_min(), Ok(1));
        assert_eq!(heap.extract_min(), Ok(2));
        assert_eq!(heap.extract_min(), Ok(0));
        assert_eq!(heap.extract_min(), Ok(3));
    }

    #[test]
    fn heap_equal_keys_do_not_swap() {
        // ordered by the first field only
        let mut heap = MinHeap::with_order(
            vec![(1, 'a'), (1, 'b'), (1, 'c')],
            |a: &(i32, char), b: &(i32, char)| a.0 < b.0,
        );
        heap.min_heapify(0);
        assert_eq!(heap.iter().map(|x| x.1).collect::<String>(), "abc");
        assert_eq!(heap.extract_min(), Ok((1, 'a')));
    }

    #[test]
    fn heap_sort_random() {
        let mut rng = StdRng::seed_from_u64(0);
        for n in 0..50 {
            let xs: Vec<i64> = (0..n).map(|_| rng.gen_range(-20..20)).collect();
            let mut expected = xs.clone();
            expected.sort();
            assert_eq!(MinHeap::new(xs).into_sorted_vec(), expected);
        }
    }

    #[test]
    fn heap_rebuild_after_external_change() {
        let mut heap = MinHeap::new(vec![3, 5, 8, 9]);
        heap.array[3] = 1;
        assert!(!is_heap(&heap));
        heap.build_min_heap();
        assert!(is_heap(&heap));
        assert_eq!(heap.minimum(), Some(&1));
    }
}
