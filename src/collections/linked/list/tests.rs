#![cfg(test)]

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

use super::*;
use crate::collections::traits::List;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn abc() -> LinkedList<char> {
    ['A', 'B', 'C'].into_iter().collect()
}

#[test]
fn test_insert_then_delete() {
    let mut list = abc();
    list.insert(1, 'X').unwrap();
    list.verify_double_links();
    assert_eq!(list.iter().copied().collect::<String>(), "AXBC");

    assert_eq!(list.delete(0), Ok('A'));
    list.verify_double_links();
    assert_eq!(list.get(2), &'C', "Elements after the deleted one should shift down.");
    assert_eq!(list.to_string(), "[X, B, C]");
}

#[test]
fn test_add_remove_is_lifo() {
    let mut list = LinkedList::new();
    for i in 0..5 {
        list.add(i);
    }
    for i in (0..5).rev() {
        assert_eq!(list.remove(), Ok(i));
    }
    assert_eq!(list.remove(), Err(EmptyContainer));
    assert!(list.is_empty());
}

#[test]
fn test_front_and_back() {
    let mut list = LinkedList::new();
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);

    list.add(1);
    assert_eq!(list.front(), list.back(), "A single element is both the front and the back.");

    list.push_front(0);
    list.push_back(2);
    assert_eq!(list.front(), Some(&0));
    assert_eq!(list.back(), Some(&2));

    assert_eq!(list.pop_front(), Some(0));
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), Some(1));
    assert_eq!(list.pop_front(), None);
    list.verify_double_links();
}

#[rstest]
#[case(0, "XABC")]
#[case(1, "AXBC")]
#[case(2, "ABXC")]
#[case(3, "ABCX")]
fn test_insert_positions(#[case] index: usize, #[case] expected: &str) {
    let mut list = abc();
    assert_eq!(list.insert(index, 'X'), Ok(()));
    list.verify_double_links();
    assert_eq!(list.iter().copied().collect::<String>(), expected);
    assert_eq!(list.iter().rev().copied().collect::<String>(), expected.chars().rev().collect::<String>());
}

#[rstest]
#[case(0, 'A', "BC")]
#[case(1, 'B', "AC")]
#[case(2, 'C', "AB")]
fn test_delete_positions(#[case] index: usize, #[case] removed: char, #[case] expected: &str) {
    let mut list = abc();
    assert_eq!(list.delete(index), Ok(removed));
    list.verify_double_links();
    assert_eq!(list.iter().copied().collect::<String>(), expected);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_index_errors() {
    let mut list = abc();
    assert_eq!(list.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.set(5, 'Z'), Err(IndexOutOfBounds { index: 5, len: 3 }));
    assert_eq!(list.insert(4, 'Z'), Err(IndexOutOfBounds { index: 4, len: 3 }));
    assert_eq!(list.delete(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.len(), 3, "Failed operations should leave the list unchanged.");

    let mut empty: LinkedList<u8> = LinkedList::new();
    assert_eq!(empty.try_get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_eq!(empty.delete(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_eq!(empty.insert(0, 1), Ok(()), "Inserting at len is valid, even when empty.");
}

#[test]
fn test_get_panics() {
    assert_panics!({
        let list = abc();
        list.get(3);
    });
    assert_panics!({
        let list = abc();
        let _value = list[10];
    });
}

#[test]
fn test_set_and_search() {
    let mut list = abc();
    assert_eq!(list.set(1, 'Z'), Ok('B'));
    assert_eq!(list.get(1), &'Z');
    list[2] = 'Z';

    assert_eq!(list.index_of(&'Z'), Some(1), "index_of should find the first match.");
    assert_eq!(list.index_of(&'B'), None);
    assert!(list.contains(&'A'));
    assert!(!list.contains(&'C'));
}

#[test]
fn test_iteration() {
    let mut list: LinkedList<_> = (0..6).collect();

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.collect::<Vec<_>>(), [&1, &2, &3, &4]);
    assert_eq!(list.iter().count(), 6, "Each call to iter should start from the front.");

    for value in list.iter_mut() {
        *value *= 2;
    }
    assert_eq!(list.clone().into_iter().rev().collect::<Vec<_>>(), [10, 8, 6, 4, 2, 0]);

    let empty: LinkedList<u8> = LinkedList::new();
    assert_eq!(empty.iter().next(), None);
    assert_eq!(empty.to_string(), "[]");
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new(0);
    let mut list: LinkedList<_> = (0..5).map(|_| counter.clone()).collect();

    drop(list.delete(2));
    assert_eq!(counter.count(), 1);
    drop(list.set(0, counter.clone()));
    assert_eq!(counter.count(), 2);

    let mut iter = list.into_iter();
    iter.next();
    assert_eq!(counter.count(), 3);
    drop(iter);
    assert_eq!(counter.count(), 6, "Unyielded elements should be dropped with the iterator.");
}

#[test]
fn test_equality_and_formatting() {
    let a = abc();
    let mut b = LinkedList::new();
    b.extend(['A', 'B', 'C']);
    assert_eq!(a, b);

    b.delete(1).unwrap();
    assert_ne!(a, b);

    assert_eq!(a.to_string(), "[A, B, C]");
    assert_eq!(format!("{b:?}"), "LinkedList { contents: ['A', 'C'], len: 2 }");
}

#[test]
fn test_list_trait() {
    fn build<L: List<u32> + Default>() -> L {
        let mut list = L::default();
        for i in 0..10 {
            list.add(i);
        }
        list.delete(0).unwrap();
        list.insert(0, 100).unwrap();
        list.remove().unwrap();
        list
    }

    let list: LinkedList<u32> = build();
    assert_eq!(List::len(&list), 9);
    assert_eq!(List::get(&list, 0), &100);
    assert!(List::contains(&list, &8));
    assert!(!List::contains(&list, &9));
    assert_eq!(List::iter(&list).sum::<u32>(), 100 + (1..9).sum::<u32>());
}

#[test]
fn test_send_sync() {
    fn assert_send_sync<S: Send + Sync>(_: &S) {}

    let mut list: LinkedList<String> = ["a".to_string()].into_iter().collect();
    assert_send_sync(&list.iter());
    assert_send_sync(&list.iter_mut());
    assert_send_sync(&list);

    let handle = std::thread::spawn(move || list.remove());
    assert_eq!(handle.join().ok(), Some(Ok("a".to_string())));
}

#[test]
fn test_against_std() {
    let mut rng = StdRng::seed_from_u64(0x11B7);
    let mut list = LinkedList::new();
    let mut expected = VecDeque::new();

    for _ in 0..5_000 {
        let len = expected.len();
        match rng.gen_range(0..6) {
            0 => {
                let value = rng.r#gen::<i32>();
                list.add(value);
                expected.push_back(value);
            },
            1 => assert_eq!(list.remove().ok(), expected.pop_back()),
            2 => {
                let index = rng.gen_range(0..=len);
                let value = rng.r#gen::<i32>();
                list.insert(index, value).unwrap();
                expected.insert(index, value);
            },
            3 if len > 0 => {
                let index = rng.gen_range(0..len);
                assert_eq!(list.delete(index).ok(), expected.remove(index));
            },
            4 if len > 0 => {
                let index = rng.gen_range(0..len);
                let value = rng.r#gen::<i32>();
                assert_eq!(list.set(index, value).ok(), Some(expected[index]));
                expected[index] = value;
            },
            _ => {
                let index = rng.gen_range(0..len + 1);
                assert_eq!(list.try_get(index).ok(), expected.get(index));
            },
        }
        assert_eq!(list.len(), expected.len());
    }

    list.verify_double_links();
    assert!(list.iter().eq(expected.iter()));
}
