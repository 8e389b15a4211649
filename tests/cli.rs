use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn descrambler() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_descrambler"));
    cmd.env("NO_COLOR", "1").env_remove("DESCRAMBLER_WORDS");
    cmd
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = descrambler()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn failed");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().expect("run failed")
}

fn write_bank(dir: &Path) {
    fs::write(dir.join("3-letter.txt"), "cat\nact\ntab\n").unwrap();
    fs::write(dir.join("4-letter.txt"), "tabs\n").unwrap();
    fs::write(dir.join("5-letter.txt"), "state\n").unwrap();
    fs::write(dir.join("6-letter.txt"), "planet\n").unwrap();
    fs::write(dir.join("7-letter.txt"), "example\n").unwrap();
}

#[test]
fn one_shot_lists_words_by_length() {
    let output = descrambler().arg("tabs").output().expect("run failed");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    for len in 3..=7 {
        assert!(stdout.contains(&format!("LENGTH OF {len} ===============")));
    }
    assert!(stdout.contains("\ntabs\n"));
    assert!(stdout.contains("\ntab\n"));
}

#[test]
fn one_shot_quiet_summary() {
    let dir = tempfile::tempdir().unwrap();
    write_bank(dir.path());

    let output = descrambler()
        .args(["--quiet", "-w", dir.path().to_str().unwrap(), "tabs"])
        .output()
        .expect("run failed");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "tabs: 2 words (3:1 4:1 5:0 6:0 7:0)\n");
}

#[test]
fn interactive_loop_until_exit() {
    let output = run_with_stdin(&["-g", "multiset"], "cat\n\\exit\ntabs\n");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Welcome to the descrambler"));
    assert!(stdout.contains("\ncat\n"));
    assert!(!stdout.contains("\ntabs\n"));
}

#[test]
fn missing_word_bank_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_bank(dir.path());
    fs::remove_file(dir.path().join("5-letter.txt")).unwrap();

    let output = descrambler()
        .args(["-w", dir.path().to_str().unwrap(), "cat"])
        .output()
        .expect("run failed");
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to load word banks"));
}

#[test]
fn oversized_one_shot_fails() {
    let output = descrambler()
        .arg("abcdefghijklmnop")
        .output()
        .expect("run failed");
    assert!(!output.status.success());
}

#[test]
fn batch_summarizes_each_line() {
    let dir = tempfile::tempdir().unwrap();
    write_bank(dir.path());
    let input = dir.path().join("inputs.txt");
    fs::write(&input, "tabs\ncta\n\nplanet\n").unwrap();

    let output = descrambler()
        .args(["-q", "-w", dir.path().to_str().unwrap(), "batch", input.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("tabs: 2 words"));
    assert!(stdout.contains("cta: 2 words"));
    assert!(stdout.contains("planet: 1 word "));
}

#[test]
fn benchmark_with_seed() {
    let output = descrambler()
        .args(["benchmark", "-n", "5", "--seed", "11", "-q"])
        .output()
        .expect("run failed");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("BENCHMARK RESULTS"));
    assert!(stdout.contains("5/5"));
}

#[test]
fn global_flags_before_benchmark() {
    let output = descrambler()
        .args(["-q", "-g", "multiset", "benchmark", "-n", "2", "--seed", "3"])
        .output()
        .expect("run failed");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("multiset generator"));
    assert!(stdout.contains("2/2"));
}

#[test]
fn global_flags_before_batch() {
    let dir = tempfile::tempdir().unwrap();
    write_bank(dir.path());
    let input = dir.path().join("inputs.txt");
    fs::write(&input, "tabs\n").unwrap();

    let output = descrambler()
        .args(["-w", dir.path().to_str().unwrap(), "-q", "batch", input.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("tabs: 2 words"));
}

#[test]
fn subcommand_name_descrambled_after_double_dash() {
    let dir = tempfile::tempdir().unwrap();
    write_bank(dir.path());

    let output = descrambler()
        .args(["-q", "-w", dir.path().to_str().unwrap(), "--", "batch"])
        .output()
        .expect("run failed");
    assert!(output.status.success());

    // b-a-t-c-h spells cat, act and tab
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "batch: 3 words (3:3 4:0 5:0 6:0 7:0)\n");
}

#[test]
fn help_is_a_word_not_a_subcommand() {
    let output = descrambler().arg("help").output().expect("run failed");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("LENGTH OF 3 ==============="));
}

#[test]
fn max_len_overrides_input_limit() {
    let refused = descrambler()
        .args(["--max-len", "3", "tabs"])
        .output()
        .expect("run failed");
    assert!(!refused.status.success());
    assert!(String::from_utf8(refused.stderr).unwrap().contains("at most 3"));

    let accepted = descrambler()
        .args(["-q", "--max-len", "4", "tabs"])
        .output()
        .expect("run failed");
    assert!(accepted.status.success());
}
