mod support;

use std::thread;

use arbor_core::{FolderStore, OrgId, sample};
use rand::SeedableRng;
use rand::rngs::StdRng;
use support::path_of;

#[test]
fn snapshots_are_isolated_from_later_moves() {
    let org = OrgId::new();
    let store = FolderStore::new(sample::fixture(org).unwrap());
    let reader = store.reader();

    let before = reader.snapshot();
    store.move_folder("bravo", "delta").unwrap();
    let after = reader.snapshot();

    assert_eq!(path_of(&before, "charlie"), "alpha.bravo.charlie");
    assert_eq!(path_of(&after, "charlie"), "alpha.delta.bravo.charlie");
}

#[test]
fn readers_never_observe_a_partial_move() {
    let org = OrgId::new();
    let store = FolderStore::new(sample::fixture(org).unwrap());
    let writer = store.writer();
    let reader = store.reader();

    thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..200 {
                writer.move_folder("bravo", "delta").unwrap();
                writer.move_folder("bravo", "alpha").unwrap();
            }
        });

        for _ in 0..200 {
            let snap = reader.snapshot();
            let bravo = path_of(&snap, "bravo");
            let charlie = path_of(&snap, "charlie");
            assert_eq!(format!("{bravo}.charlie"), charlie);
        }
    });

    assert_eq!(path_of(&store.folders(), "bravo"), "alpha.bravo");
}

#[test]
fn concurrent_writers_serialize() {
    let spec = sample::SampleSpec {
        orgs: 1,
        roots_per_org: 3,
        max_depth: 3,
        max_children: 2,
    };
    let folders = sample::generate(&spec, &mut StdRng::seed_from_u64(9)).unwrap();
    let total = folders.len();
    let roots: Vec<String> = folders
        .iter()
        .filter(|f| f.is_root())
        .map(|f| f.name.clone())
        .collect();
    let store = FolderStore::new(folders);

    thread::scope(|scope| {
        for _ in 0..4 {
            let writer = store.writer();
            let roots = &roots;
            scope.spawn(move || {
                for _ in 0..50 {
                    writer.move_folder(&roots[1], &roots[0]).unwrap();
                    writer.move_folder(&roots[0], &roots[2]).unwrap();
                }
            });
        }
    });

    let end = store.folders();
    assert_eq!(end.len(), total);
    assert_eq!(
        path_of(&end, &roots[1]),
        format!("{}.{}.{}", roots[2], roots[0], roots[1])
    );
    arbor_core::validation::validate(&end).unwrap();
}
