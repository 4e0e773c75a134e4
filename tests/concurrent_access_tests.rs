//! Concurrent access tests
//!
//! Multi-threaded checks of the shared rack table: no lost updates under
//! parallel registration, atomic reset, and readers racing writers.
//! Run with: cargo test --test concurrent_access_tests

use rackmap::{DEFAULT_RACK, RackMapping, StaticMapping};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_parallel_add_entries_are_all_visible() {
    let mapping = StaticMapping::isolated();
    let num_threads = 16;
    let barrier = Arc::new(Barrier::new(num_threads));

    let mut handles = vec![];
    for thread_id in 0..num_threads {
        let mapping = mapping.clone();
        let barrier = Arc::clone(&barrier);

        handles.push(thread::spawn(move || {
            barrier.wait();
            mapping
                .add_entry(&format!("host{}", thread_id), &format!("/rack{}", thread_id))
                .unwrap();
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let input: Vec<String> = (0..num_threads).map(|i| format!("host{}", i)).collect();
    let racks = mapping.resolve(&input).unwrap();

    let expected: Vec<String> = (0..num_threads).map(|i| format!("/rack{}", i)).collect();
    assert_eq!(racks, expected, "a concurrent add_entry was lost");
}

#[test]
fn test_concurrent_readers_see_consistent_table() {
    let mapping = StaticMapping::isolated();
    for i in 0..100 {
        mapping
            .add_entry(&format!("host{}", i), &format!("/rack{}", i % 4))
            .unwrap();
    }

    let input: Vec<String> = (0..100).map(|i| format!("host{}", i)).collect();
    let mut handles = vec![];

    for _ in 0..8 {
        let mapping = mapping.clone();
        let input = input.clone();

        handles.push(thread::spawn(move || {
            for _ in 0..50 {
                let racks = mapping.resolve(&input).unwrap();
                assert_eq!(racks.len(), input.len());
                for (i, rack) in racks.iter().enumerate() {
                    assert_eq!(rack, &format!("/rack{}", i % 4));
                }
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_reset_is_atomic_for_resolvers() {
    let mapping = StaticMapping::isolated();
    let num_hosts = 64;
    for i in 0..num_hosts {
        mapping
            .add_entry(&format!("host{}", i), "/rack-live")
            .unwrap();
    }

    let input: Vec<String> = (0..num_hosts).map(|i| format!("host{}", i)).collect();
    let barrier = Arc::new(Barrier::new(5));
    let mut handles = vec![];

    // Four resolvers race one reset. The clear is atomic, so each batch
    // must come back either fully mapped or fully defaulted.
    for _ in 0..4 {
        let mapping = mapping.clone();
        let input = input.clone();
        let barrier = Arc::clone(&barrier);

        handles.push(thread::spawn(move || {
            barrier.wait();
            for _ in 0..100 {
                let racks = mapping.resolve(&input).unwrap();
                let all_live = racks.iter().all(|r| r == "/rack-live");
                let all_default = racks.iter().all(|r| r == DEFAULT_RACK);
                assert!(
                    all_live || all_default,
                    "observed a partially cleared table: {:?}",
                    racks
                );
            }
        }));
    }

    {
        let mapping = mapping.clone();
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            mapping.reset().unwrap();
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // Post-reset, everything is on the default rack.
    let racks = mapping.resolve(&input).unwrap();
    assert!(racks.iter().all(|r| r == DEFAULT_RACK));
}

#[test]
fn test_concurrent_overwrite_of_one_name_yields_one_of_the_writes() {
    let mapping = StaticMapping::isolated();
    let barrier = Arc::new(Barrier::new(2));

    let mut handles = vec![];
    for rack in ["/rack-a", "/rack-b"] {
        let mapping = mapping.clone();
        let barrier = Arc::clone(&barrier);

        handles.push(thread::spawn(move || {
            barrier.wait();
            mapping.add_entry("contested", rack).unwrap();
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let racks = mapping.resolve(&["contested".to_string()]).unwrap();
    assert!(
        racks == vec!["/rack-a".to_string()] || racks == vec!["/rack-b".to_string()],
        "unexpected rack after racing writers: {:?}",
        racks
    );
}

#[test]
fn test_readers_racing_a_writer_always_get_full_batches() {
    let mapping = StaticMapping::isolated();
    let barrier = Arc::new(Barrier::new(3));
    let input: Vec<String> = (0..32).map(|i| format!("node{}", i)).collect();

    let mut handles = vec![];
    for _ in 0..2 {
        let mapping = mapping.clone();
        let input = input.clone();
        let barrier = Arc::clone(&barrier);

        handles.push(thread::spawn(move || {
            barrier.wait();
            for _ in 0..200 {
                let racks = mapping.resolve(&input).unwrap();
                assert_eq!(racks.len(), input.len());
                for rack in &racks {
                    assert!(rack == DEFAULT_RACK || rack.starts_with("/added"));
                }
            }
        }));
    }

    {
        let mapping = mapping.clone();
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for i in 0..32 {
                mapping
                    .add_entry(&format!("node{}", i), &format!("/added{}", i))
                    .unwrap();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
