use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn mixseg(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mixseg"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

/// Writes a dictionary file under the target's temporary directory.
fn dictionary(name: &str, contents: &str) -> PathBuf {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_argument_is_a_usage_error() {
    let words = dictionary("usage_words.dic", "世界\n");
    let output = mixseg(&[words.to_str().unwrap()], b"");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}

#[test]
fn missing_dictionary_file() {
    let words = dictionary("missing_words.dic", "世界\n");
    let output = mixseg(&[words.to_str().unwrap(), "no/such/chars.dic"], b"1,x\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot load dictionaries"), "{stderr}");
    assert!(stderr.contains("no/such/chars.dic"), "{stderr}");
}

#[test]
fn diagnostics_go_to_stderr() {
    let words = dictionary("stderr_words.dic", "世界\n");
    let chars = dictionary("stderr_chars.dic", "世 10\n界 10\n");
    let output = mixseg(
        &[words.to_str().unwrap(), chars.to_str().unwrap()],
        b"1,hello\xe4\xb8\x96\xe7\x95\x8c\n2,a\xffb\n3,bye\n",
    );
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, "1,hello 世界\n2,a b\n3,bye\n".as_bytes());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot decode segment (2): \\xff"), "{stderr}");
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    // no colour codes when stderr is not a terminal
    assert!(!stderr.contains('\u{1b}'), "{stderr}");
}
