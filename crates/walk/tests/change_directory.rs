//! Working-directory tracking during walks that change directory.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use test_support::TestTree;
use walk::{
    VisitOutcome, Visitor, WalkError, WalkErrorKind, WalkEvent, WalkOptions, WalkOutcome,
    WalkStatistics, walk,
};

struct RestoreCwd(PathBuf);

impl RestoreCwd {
    fn capture() -> Self {
        Self(env::current_dir().expect("current dir"))
    }
}

impl Drop for RestoreCwd {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.0);
    }
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).expect("canonicalize")
}

fn physical_cwd() -> PathBuf {
    canonical(&env::current_dir().expect("current dir"))
}

/// Checks that the process sits in the directory owning each event.
#[derive(Default)]
struct CwdChecker {
    checked: usize,
    mismatches: Vec<String>,
    errors: Vec<WalkErrorKind>,
}

impl Visitor for CwdChecker {
    fn visit(&mut self, event: &WalkEvent<'_>) -> VisitOutcome {
        let path = Path::new(event.path());
        let expected = match event {
            WalkEvent::DirEntered { .. } => canonical(path),
            WalkEvent::Entry { .. } => canonical(path.parent().expect("entry parent")),
        };
        self.checked += 1;
        if physical_cwd() != expected {
            self.mismatches.push(event.path().to_owned());
        }
        VisitOutcome::Continue
    }

    fn on_error(&mut self, error: &WalkError) {
        self.errors.push(error.kind());
    }
}

#[test]
#[serial]
fn working_directory_follows_the_walk_and_is_restored() {
    let _restore = RestoreCwd::capture();
    let tree = TestTree::new();
    tree.file("a/b/deep");
    tree.file("a/shallow");
    tree.file("c/other");
    tree.file("top");
    let before = physical_cwd();

    let mut checker = CwdChecker::default();
    let mut stats = WalkStatistics::new();
    let options = WalkOptions::new().change_directory(true);
    let outcome = walk(tree.root_str(), &options, &mut stats, &mut checker).expect("walk");

    assert_eq!(outcome, WalkOutcome::Complete);
    assert_eq!(checker.checked, 11);
    assert!(checker.mismatches.is_empty(), "{:?}", checker.mismatches);
    assert!(checker.errors.is_empty());
    assert_eq!(physical_cwd(), before);
}

#[cfg(unix)]
#[test]
#[serial]
fn returning_from_a_followed_link_lands_in_the_link_directory() {
    let _restore = RestoreCwd::capture();
    let tree = TestTree::new();
    fs::create_dir_all(tree.outside().join("elsewhere/deeper")).expect("mkdir");
    fs::write(tree.outside().join("elsewhere/deeper/file"), b"x").expect("write");
    tree.symlink("../elsewhere", "link");
    tree.file("sibling1");
    tree.file("sibling2");
    tree.file("sub/file");

    let mut checker = CwdChecker::default();
    let mut stats = WalkStatistics::new();
    let options = WalkOptions::new().change_directory(true).follow_links(true);
    let outcome = walk(tree.root_str(), &options, &mut stats, &mut checker).expect("walk");

    assert_eq!(outcome, WalkOutcome::Complete);
    assert_eq!(stats.directories_visited, 4);
    assert!(checker.mismatches.is_empty(), "{:?}", checker.mismatches);
}

#[test]
#[serial]
fn abort_restores_the_working_directory() {
    let _restore = RestoreCwd::capture();
    let tree = TestTree::new();
    tree.file("one/two/three/file");
    let before = physical_cwd();

    let mut stats = WalkStatistics::new();
    let options = WalkOptions::new().change_directory(true);
    let outcome = walk(
        tree.root_str(),
        &options,
        &mut stats,
        &mut |event: &WalkEvent<'_>| {
            if event.depth() == 3 {
                VisitOutcome::Abort
            } else {
                VisitOutcome::Continue
            }
        },
    )
    .expect("walk");

    assert_eq!(outcome, WalkOutcome::Aborted);
    assert_eq!(physical_cwd(), before);
}

#[test]
#[serial]
fn relative_roots_resolve_against_the_starting_directory() {
    let _restore = RestoreCwd::capture();
    let tree = TestTree::new();
    tree.file("a/file");
    env::set_current_dir(tree.outside()).expect("enter scratch dir");
    let before = physical_cwd();

    let mut entered = Vec::new();
    let mut stats = WalkStatistics::new();
    let options = WalkOptions::new().change_directory(true);
    let outcome = walk(
        "root",
        &options,
        &mut stats,
        &mut |event: &WalkEvent<'_>| {
            if let WalkEvent::DirEntered { path, .. } = event {
                entered.push((canonical(Path::new(path)), physical_cwd()));
            }
            VisitOutcome::Continue
        },
    )
    .expect("walk");

    assert_eq!(outcome, WalkOutcome::Complete);
    assert_eq!(entered.len(), 2);
    assert!(entered.contains(&(canonical(tree.root()), canonical(tree.root()))));
    assert!(entered.contains(&(canonical(&tree.path("a")), canonical(&tree.path("a")))));
    assert_eq!(physical_cwd(), before);
}

#[test]
#[serial]
fn event_paths_can_be_opened_from_inside_the_callback() {
    let _restore = RestoreCwd::capture();
    let tree = TestTree::new();
    tree.file("a/b/file.txt");
    env::set_current_dir(tree.outside()).expect("enter scratch dir");

    let mut opened = 0;
    let mut unreachable = Vec::new();
    let mut stats = WalkStatistics::new();
    let options = WalkOptions::new().change_directory(true);
    let outcome = walk(
        "root",
        &options,
        &mut stats,
        &mut |event: &WalkEvent<'_>| {
            let path = Path::new(event.path());
            if path.is_absolute() && fs::symlink_metadata(path).is_ok() {
                opened += 1;
            } else {
                unreachable.push(event.path().to_owned());
            }
            VisitOutcome::Continue
        },
    )
    .expect("walk");

    assert_eq!(outcome, WalkOutcome::Complete);
    assert!(unreachable.is_empty(), "{unreachable:?}");
    assert_eq!(opened, 6);
}

#[cfg(unix)]
#[test]
#[serial]
fn parent_that_cannot_be_re_entered_stops_its_remaining_entries() {
    let _restore = RestoreCwd::capture();
    let tree = TestTree::new();
    tree.file("p/c/inner");
    for name in ["p/x1", "p/x2", "p/x3", "top1", "top2"] {
        tree.file(name);
    }
    let before = physical_cwd();
    let root = canonical(tree.root());
    let p_prefix = format!("{}/p/", tree.root_str());
    let c_path = format!("{}/p/c", tree.root_str());

    let mut moved = false;
    let mut stray = Vec::new();
    let mut misplaced = Vec::new();
    let mut stats = WalkStatistics::new();
    let options = WalkOptions::new().change_directory(true);
    let outcome = walk(
        tree.root_str(),
        &options,
        &mut stats,
        &mut |event: &WalkEvent<'_>| {
            let path = event.path();
            if moved {
                if path.starts_with(&p_prefix) && !path.starts_with(&c_path) {
                    stray.push(path.to_owned());
                }
                if matches!(event, WalkEvent::Entry { .. })
                    && Path::new(path).parent() == Some(tree.root())
                    && physical_cwd() != root
                {
                    misplaced.push(path.to_owned());
                }
            }
            if matches!(event, WalkEvent::DirEntered { .. }) && path == c_path {
                // Returning from `c` to `p` now fails.
                fs::rename(tree.path("p"), tree.outside().join("moved")).expect("rename");
                moved = true;
            }
            VisitOutcome::Continue
        },
    )
    .expect("walk");

    assert!(moved);
    assert_eq!(outcome, WalkOutcome::Errors(1));
    assert_eq!(stats.errors_encountered, 1);
    assert!(stray.is_empty(), "{stray:?}");
    assert!(misplaced.is_empty(), "{misplaced:?}");
    assert_eq!(physical_cwd(), before);
}

#[test]
#[serial]
fn failed_change_into_a_child_is_counted_and_the_walk_continues() {
    let _restore = RestoreCwd::capture();
    let tree = TestTree::new();
    tree.file("gone/inner");
    tree.file("kept");
    let before = physical_cwd();

    let mut seen = Vec::new();
    let mut stats = WalkStatistics::new();
    let options = WalkOptions::new().change_directory(true);
    let outcome = walk(
        tree.root_str(),
        &options,
        &mut stats,
        &mut |event: &WalkEvent<'_>| {
            if let WalkEvent::Entry { path, .. } = event {
                seen.push((*path).to_owned());
                if path.ends_with("/gone") {
                    tree.remove("gone");
                }
            }
            VisitOutcome::Continue
        },
    )
    .expect("walk");

    assert_eq!(outcome, WalkOutcome::Errors(1));
    assert_eq!(stats.errors_encountered, 1);
    assert_eq!(seen.len(), 2);
    assert_eq!(physical_cwd(), before);
}
