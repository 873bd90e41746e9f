use super::*;
use std::collections::BTreeSet;
use std::io;
use test_support::TestTree;

struct Output {
    code: i32,
    stdout: String,
    stderr: String,
}

impl Output {
    fn lines(&self) -> BTreeSet<&str> {
        self.stdout.lines().collect()
    }
}

fn invoke(args: &[&str]) -> Output {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run(
        std::iter::once("treewalk").chain(args.iter().copied()),
        &mut stdout,
        &mut stderr,
    );
    Output {
        code,
        stdout: String::from_utf8(stdout).expect("stdout is UTF-8"),
        stderr: String::from_utf8(stderr).expect("stderr is UTF-8"),
    }
}

fn sample_tree() -> TestTree {
    let tree = TestTree::new();
    tree.file("top.txt");
    tree.file("a/inner.txt");
    tree.file("a/b/deep.txt");
    tree
}

#[test]
fn help_goes_to_stdout() {
    let output = invoke(&["--help"]);
    assert_eq!(output.code, EXIT_OK);
    assert!(output.stdout.contains("Usage"));
    assert!(output.stdout.contains("--follow-links"));
    assert!(output.stderr.is_empty());
}

#[test]
fn unknown_option_is_a_syntax_error() {
    let output = invoke(&["--frobnicate"]);
    assert_eq!(output.code, EXIT_SYNTAX);
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("--frobnicate"));
}

#[test]
fn conflicting_filters_are_rejected() {
    let output = invoke(&["--dirs-only", "--files-only", "."]);
    assert_eq!(output.code, EXIT_SYNTAX);
}

#[test]
fn bad_debug_flag_is_reported() {
    let output = invoke(&["--debug", "walk,bogus", "."]);
    assert_eq!(output.code, EXIT_SYNTAX);
    assert!(output.stderr.starts_with("treewalk: invalid --debug value"));
}

#[test]
fn lists_every_entry() {
    let tree = sample_tree();
    let root = tree.root_str();
    let output = invoke(&[root]);

    assert_eq!(output.code, EXIT_OK, "{}", output.stderr);
    let expected: BTreeSet<String> = ["top.txt", "a", "a/inner.txt", "a/b", "a/b/deep.txt"]
        .iter()
        .map(|name| format!("{root}/{name}"))
        .collect();
    let lines: BTreeSet<String> = output.lines().into_iter().map(str::to_owned).collect();
    assert_eq!(lines, expected);
}

#[test]
fn filters_and_depth_limit_the_listing() {
    let tree = sample_tree();
    let root = tree.root_str();

    let dirs = invoke(&["--dirs-only", root]);
    assert_eq!(dirs.stdout.lines().count(), 2);
    assert!(dirs.lines().contains(format!("{root}/a/b").as_str()));

    let files = invoke(&["--files-only", root]);
    assert_eq!(files.stdout.lines().count(), 3);

    let shallow = invoke(&["-d", "1", root]);
    assert_eq!(shallow.stdout.lines().count(), 2);

    let flat = invoke(&["--no-recurse", root]);
    assert_eq!(flat.lines(), shallow.lines());
}

#[test]
fn events_mode_prints_entered_directories_and_kinds() {
    let tree = sample_tree();
    let root = tree.root_str();
    let output = invoke(&["--events", root]);

    let lines = output.lines();
    assert!(lines.contains(format!("enter {root}").as_str()));
    assert!(lines.contains(format!("enter {root}/a/b").as_str()));
    assert!(lines.contains(format!("dir {root}/a").as_str()));
    assert!(lines.contains(format!("file {root}/top.txt").as_str()));
}

#[test]
fn stats_summary_is_printed_last() {
    let tree = sample_tree();
    let output = invoke(&["--stats", tree.root_str()]);

    let tail: Vec<&str> = output.stdout.lines().rev().take(3).collect();
    assert_eq!(
        tail,
        ["errors: 0", "entries listed: 5", "directories visited: 3"]
    );
}

#[test]
fn missing_root_is_a_partial_failure() {
    let tree = TestTree::new();
    let missing = tree.path_str("missing");
    let output = invoke(&[missing.as_str()]);

    assert_eq!(output.code, EXIT_PARTIAL);
    assert!(output.stderr.contains("failed to open directory"));
    assert!(output.stderr.contains(&missing));
}

#[test]
fn ignored_missing_root_succeeds_quietly() {
    let tree = TestTree::new();
    let missing = tree.path_str("missing");
    let output = invoke(&["-i", "-q", missing.as_str(), tree.root_str()]);

    assert_eq!(output.code, EXIT_OK);
    assert!(output.stderr.is_empty());
}

#[test]
fn limit_stops_the_walk() {
    let tree = sample_tree();
    let output = invoke(&["--limit", "2", tree.root_str()]);

    assert_eq!(output.code, EXIT_ABORTED);
    assert_eq!(output.stdout.lines().count(), 2);
}

#[test]
fn limit_applies_across_roots() {
    let first = sample_tree();
    let second = sample_tree();
    let output = invoke(&["--limit", "6", first.root_str(), second.root_str()]);

    assert_eq!(output.code, EXIT_ABORTED);
    assert_eq!(output.stdout.lines().count(), 6);
}

#[test]
fn once_spans_multiple_roots() {
    let tree = sample_tree();
    let nested = tree.path_str("a");
    let output = invoke(&["--once", "--events", nested.as_str(), tree.root_str()]);

    assert_eq!(output.code, EXIT_OK);
    let entered = output
        .stdout
        .lines()
        .filter(|line| line.starts_with("enter "))
        .count();
    // `a` and `a/b` from the first root, then only the root itself.
    assert_eq!(entered, 3);
}

struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn unwritable_output_stops_with_file_io_code() {
    let tree = sample_tree();
    let mut stderr = Vec::new();
    let code = run(["treewalk", tree.root_str()], &mut BrokenPipe, &mut stderr);

    assert_eq!(code, EXIT_FILE_IO);
    assert!(String::from_utf8_lossy(&stderr).contains("failed to write listing"));
}
