#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_repeat_default() {
    let arr: Array<Option<u8>> = Array::repeat_default(3);
    assert_eq!(arr.size(), 3);
    assert!(arr.iter().all(Option::is_none), "All slots should start empty.");

    let empty: Array<u8> = Array::new();
    assert_eq!(empty.size(), 0);
    assert_eq!(empty, Array::default());
}

#[test]
fn test_realloc() {
    let mut arr = Array::from([0, 1, 2, 3, 4]);

    arr.realloc_with_default(8);
    assert_eq!(
        &*arr, &[0, 1, 2, 3, 4, 0, 0, 0],
        "When growing, existing elements should keep their indices."
    );

    arr.realloc_with(10, || 9);
    assert_eq!(&arr[8..], &[9, 9], "New slots should come from the provided closure.");

    arr.realloc_with_default(2);
    assert_eq!(&*arr, &[0, 1], "When shrinking, trailing elements should be discarded.");

    arr.realloc_with_default(0);
    assert_eq!(arr.size(), 0);
}

#[test]
fn test_realloc_drops_truncated() {
    let counter = CountedDrop::new(0);
    let mut arr = Array::repeat_with(5, || counter.clone());

    arr.realloc_with(2, || counter.clone());
    assert_eq!(counter.count(), 3, "Truncated elements should be dropped exactly once.");

    drop(arr);
    assert_eq!(counter.count(), 5, "Remaining elements should be dropped with the Array.");
}

#[test]
fn test_iteration() {
    let mut arr: Array<_> = (1..=4).collect();
    for item in &mut arr {
        *item *= 10;
    }
    assert_eq!(arr.iter().copied().collect::<Vec<_>>(), [10, 20, 30, 40]);
    assert_eq!(arr.clone().into_iter().rev().collect::<Vec<_>>(), [40, 30, 20, 10]);
    assert_eq!(arr.into_iter().len(), 4);
}
