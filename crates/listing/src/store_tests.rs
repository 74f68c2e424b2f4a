use super::*;

use std::fs::{create_dir, create_dir_all, write};

use dirview_fs::ScanMode;

// root/
//   b.txt        (3 bytes)
//   A.Txt        (10 bytes)
//   notes.md     (1 byte)
//   zeta/
//     inner.rs   (6 bytes)
//   Alpha/
fn sample_tree() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    write(root.join("b.txt"), b"bbb").expect("write b.txt");
    write(root.join("A.Txt"), b"aaaaaaaaaa").expect("write A.Txt");
    write(root.join("notes.md"), b"n").expect("write notes.md");
    create_dir(root.join("zeta")).expect("create zeta");
    write(root.join("zeta").join("inner.rs"), b"fn(){}").expect("write inner.rs");
    create_dir(root.join("Alpha")).expect("create Alpha");

    tmp
}

fn names(store: &ListingStore) -> Vec<String> {
    store.rows().map(|r| r.name().to_owned()).collect()
}

fn drain(rx: &Receiver<ListingEvent>) -> Vec<ListingEvent> {
    rx.try_iter().collect()
}

fn assert_directories_first(store: &ListingStore) {
    let first_file = store.rows().position(|r| !r.is_directory());
    if let Some(first_file) = first_file {
        assert!(
            store.rows().skip(first_file).all(|r| !r.is_directory()),
            "directory after a file in {:?}",
            names(store)
        );
    }
}

#[test]
fn new_store_is_empty() {
    let store = ListingStore::default();

    assert_eq!(store.state(), ListingState::Empty);
    assert_eq!(store.row_count(), 0);
    assert!(store.root().is_none());
    assert!(store.diagnostics().is_empty());
}

#[test]
fn empty_state_commands_are_no_ops() {
    let mut store = ListingStore::default();
    let rx = store.subscribe();

    store.sort_by_name();
    store.sort_by_type();
    store.sort_by_size();
    store.set_show_full_path(true);

    assert_eq!(store.row_count(), 0);
    assert_eq!(store.state(), ListingState::Empty);
    assert_eq!(store.sort_order(), None);
    assert!(!store.show_full_path());
    assert!(drain(&rx).is_empty(), "no events before the first scan");
}

#[test]
fn rescan_without_root_is_a_no_op() {
    let mut store = ListingStore::default();
    let summary = store.rescan().expect("rescan");

    assert_eq!(summary, ScanSummary::default());
    assert_eq!(store.state(), ListingState::Empty);
}

#[test]
fn scan_populates_and_notifies_once() {
    let tmp = sample_tree();
    let mut store = ListingStore::default();
    let rx = store.subscribe();

    let summary = store.scan(tmp.path()).expect("scan");

    assert_eq!(summary, ScanSummary { rows: 6, failures: 0 });
    assert_eq!(store.row_count(), 6);
    assert_eq!(store.state(), ListingState::Populated);
    assert_eq!(store.root(), Some(tmp.path()));
    assert_eq!(
        drain(&rx),
        vec![
            ListingEvent::RootChanged(tmp.path().to_path_buf()),
            ListingEvent::Reset,
        ]
    );
}

#[test]
fn sort_by_name_puts_directories_first() {
    let tmp = sample_tree();
    let mut store = ListingStore::default();
    store.scan(tmp.path()).expect("scan");

    store.sort_by_name();

    assert_eq!(
        names(&store),
        vec!["Alpha", "zeta", "A.Txt", "b.txt", "inner.rs", "notes.md"]
    );
    assert_directories_first(&store);
    assert_eq!(store.sort_order(), Some(SortOrder::Name));
}

#[test]
fn sort_by_type_keeps_mixed_case_extensions_adjacent() {
    let tmp = sample_tree();
    let mut store = ListingStore::default();
    store.scan(tmp.path()).expect("scan");

    store.sort_by_type();

    assert_eq!(
        names(&store),
        vec!["Alpha", "zeta", "notes.md", "inner.rs", "A.Txt", "b.txt"]
    );
    assert_directories_first(&store);
}

#[test]
fn sort_by_size_ascending() {
    let tmp = sample_tree();
    let mut store = ListingStore::default();
    store.scan(tmp.path()).expect("scan");

    store.sort_by_size();

    assert_eq!(
        names(&store),
        vec!["Alpha", "zeta", "notes.md", "b.txt", "inner.rs", "A.Txt"]
    );
    assert_directories_first(&store);
}

#[test]
fn sorting_is_idempotent() {
    let tmp = sample_tree();
    let mut store = ListingStore::default();
    store.scan(tmp.path()).expect("scan");

    for order in [SortOrder::Name, SortOrder::Type, SortOrder::Size] {
        store.sort(order);
        let first = names(&store);
        store.sort(order);
        assert_eq!(first, names(&store), "{order:?} should be idempotent");
    }
}

#[test]
fn sort_emits_reset() {
    let tmp = sample_tree();
    let mut store = ListingStore::default();
    store.scan(tmp.path()).expect("scan");
    let rx = store.subscribe();

    store.sort_by_size();

    assert_eq!(drain(&rx), vec![ListingEvent::Reset]);
}

#[test]
fn display_toggle_changes_only_display_name() {
    let tmp = sample_tree();
    let mut store = ListingStore::default();
    store.scan(tmp.path()).expect("scan");
    store.sort_by_name();
    let before = names(&store);
    let rx = store.subscribe();

    store.set_show_full_path(true);
    assert!(store.show_full_path());
    assert_eq!(store.row_count(), 6);
    assert_eq!(names(&store), before);
    for row in store.rows() {
        assert_eq!(row.display_name(), row.path().to_string_lossy());
    }

    // Setting the same value again is silent.
    store.set_show_full_path(true);

    store.set_show_full_path(false);
    for row in store.rows() {
        assert_eq!(row.display_name(), row.name());
    }
    assert_eq!(names(&store), before);

    assert_eq!(
        drain(&rx),
        vec![
            ListingEvent::FieldsChanged(RowFields::DISPLAY_NAME),
            ListingEvent::FieldsChanged(RowFields::DISPLAY_NAME),
        ]
    );
}

#[test]
fn row_at_is_bounds_checked() {
    let tmp = sample_tree();
    let mut store = ListingStore::default();
    store.scan(tmp.path()).expect("scan");

    assert!(store.row_at(5).is_ok());
    assert_eq!(
        store.row_at(6).map(|r| r.name().to_owned()),
        Err(ListingError::IndexOutOfRange { index: 6, len: 6 })
    );
    assert!(ListingStore::default().row_at(0).is_err());
}

#[test]
fn rescan_replaces_rows_and_keeps_sort_order() {
    let tmp = sample_tree();
    let mut store = ListingStore::default();
    store.scan(tmp.path()).expect("scan");
    store.sort_by_size();

    write(tmp.path().join("0-huge.bin"), vec![0u8; 64]).expect("write huge");
    let rx = store.subscribe();
    let summary = store.rescan().expect("rescan");

    assert_eq!(summary.rows, 7);
    assert_eq!(names(&store).last().map(String::as_str), Some("0-huge.bin"));
    assert_eq!(drain(&rx), vec![ListingEvent::Reset], "same root, no RootChanged");
}

#[test]
fn set_root_only_rescans_on_change() {
    let first = sample_tree();
    let second = tempfile::tempdir().expect("create temp dir");
    write(second.path().join("only.txt"), b"x").expect("write only.txt");

    let mut store = ListingStore::default();
    assert!(store.set_root(first.path()).expect("set_root").is_some());

    let rx = store.subscribe();
    assert!(store.set_root(first.path()).expect("set_root").is_none());
    assert!(drain(&rx).is_empty());

    let summary = store.set_root(second.path()).expect("set_root");
    assert_eq!(summary, Some(ScanSummary { rows: 1, failures: 0 }));
    assert_eq!(names(&store), vec!["only.txt"]);
    assert_eq!(store.root(), Some(second.path()));
}

#[test]
fn failed_scan_leaves_empty_populated_store() {
    let tmp = sample_tree();
    let missing = tmp.path().join("missing");
    let mut store = ListingStore::default();
    store.scan(tmp.path()).expect("scan");
    let rx = store.subscribe();

    let err = store.scan(&missing).expect_err("missing root");

    assert!(matches!(err, ScanError::RootNotFound(_)));
    assert_eq!(store.row_count(), 0);
    assert_eq!(store.state(), ListingState::Populated);
    assert_eq!(store.root(), Some(missing.as_path()));
    assert_eq!(
        drain(&rx),
        vec![ListingEvent::RootChanged(missing.clone()), ListingEvent::Reset]
    );
}

#[test]
fn files_only_store_has_no_directory_rows() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();
    create_dir_all(root.join("a").join("b")).expect("create a/b");
    write(root.join("a").join("b").join("c.txt"), b"c").expect("write c.txt");
    write(root.join("top.txt"), b"t").expect("write top.txt");

    let options = ScanOptions::default().with_mode(ScanMode::FilesOnly);
    let mut store = ListingStore::new(options);
    store.scan(root).expect("scan");
    store.sort_by_name();

    let rows: Vec<_> = store
        .rows()
        .map(|r| (r.name().to_owned(), r.relative_path().to_owned()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("c.txt".to_owned(), "a/b".to_owned()),
            ("top.txt".to_owned(), String::new()),
        ]
    );
}

#[test]
fn replace_is_a_single_bulk_change() {
    let mut store = ListingStore::default();
    let rx = store.subscribe();

    store.replace(vec![
        Entry::file(PathBuf::from("/r/b"), String::new(), 2),
        Entry::file(PathBuf::from("/r/a"), String::new(), 1),
    ]);

    assert_eq!(store.state(), ListingState::Populated);
    assert_eq!(store.row_count(), 2);
    assert_eq!(drain(&rx), vec![ListingEvent::Reset]);
}

#[test]
fn dropped_subscribers_are_pruned() {
    let mut store = ListingStore::default();
    let kept = store.subscribe();
    drop(store.subscribe());

    store.replace(Vec::new());

    assert_eq!(store.notifier.subscriber_count(), 1);
    assert_eq!(drain(&kept), vec![ListingEvent::Reset]);
}

#[cfg(unix)]
#[test]
fn partial_scan_keeps_readable_rows_and_diagnostics() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();
    let locked = root.join("locked");
    create_dir(&locked).expect("create locked");
    create_dir(root.join("ok")).expect("create ok");
    write(root.join("ok").join("file.txt"), b"f").expect("write file");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod 000");

    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("restore");
        eprintln!("skipping: locked directory is still readable");
        return;
    }

    let mut store = ListingStore::default();
    let summary = store.scan(root);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("restore");
    let summary = summary.expect("partial scan succeeds");

    assert_eq!(summary.failures, 1);
    assert!(store.rows().any(|r| r.relative_path() == "ok/file.txt"));
    assert_eq!(store.diagnostics()[0].path(), Some(&locked));
}
