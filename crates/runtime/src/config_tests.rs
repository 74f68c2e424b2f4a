use super::*;
use serial_test::serial;

#[test]
#[serial]
fn default_scan_root_is_current_dir() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let previous = std::env::current_dir().expect("current dir");

    std::env::set_current_dir(tmp.path()).expect("chdir into temp dir");
    let root = default_scan_root();
    std::env::set_current_dir(&previous).expect("restore cwd");

    assert_eq!(
        root.canonicalize().expect("canonicalize root"),
        tmp.path().canonicalize().expect("canonicalize tmp"),
    );
}

#[test]
fn default_exclude_patterns_cover_vcs_dirs() {
    for vcs in [".git/", ".hg/", ".svn/"] {
        assert!(
            DEFAULT_EXCLUDE_PATTERNS.contains(&vcs),
            "{vcs} should be excluded by default"
        );
    }
}
