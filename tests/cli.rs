use std::io::Write;
use std::process::{Command, Output, Stdio};

fn hexer(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hexer"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn hexer");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(stdin)
        .expect("write stdin");
    child.wait_with_output().expect("wait for hexer")
}

/// Run hexer with its stdout pipe closed before any input is sent.
///
/// Write errors on stdin are ignored: the child may exit before reading it all.
fn hexer_with_closed_stdout(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hexer"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn hexer");
    drop(child.stdout.take());
    let mut input = child.stdin.take().expect("stdin handle");
    let _ = input.write_all(stdin);
    drop(input);
    child.wait_with_output().expect("wait for hexer")
}

fn stderr_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn encodes_plain_by_default() {
    let out = hexer(&[], b"\x00\x01\xfe\xff");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"0001feff");
    assert!(out.stderr.is_empty());
}

#[test]
fn encodes_formatted() {
    let input: Vec<u8> = (0..9).collect();
    let out = hexer(&["-f"], &input);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"00 01 02 03  04 05 06 07\n08\n");
}

#[test]
fn empty_input_in_every_mode() {
    assert_eq!(hexer(&[], b"").stdout, b"");
    assert_eq!(hexer(&["--format"], b"").stdout, b"\n");

    let out = hexer(&["-r", "-s"], b"");
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn decodes_with_whitespace() {
    let out = hexer(&["--read", "--strict"], b"4a 4B\r\n4c\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, [0x4A, 0x4B, 0x4C]);
}

#[test]
fn strict_decode_stops_at_garbage() {
    let out = hexer(&["-r", "-s"], b"4aXX4b");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(out.stdout, [0x4A]);
    let err = stderr_of(&out);
    assert!(err.starts_with("Could not decode hex stream properly. Reason: The character X (88)"));
}

#[test]
fn lenient_decode_skips_garbage() {
    let out = hexer(&["-r"], b"4aXX4b");
    assert!(out.status.success());
    assert_eq!(out.stdout, [0x4A, 0x4B]);
}

#[test]
fn odd_digit_count_fails_after_complete_pairs() {
    let out = hexer(&["-r"], b"4a4");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(out.stdout, [0x4A]);
    assert!(stderr_of(&out).contains("EOF before even-numbered hex digit"));
}

#[test]
fn json_error_envelope() {
    let out = hexer(&["-r", "--json"], b"abc");
    assert_eq!(out.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&out.stderr).expect("json on stderr");
    assert_eq!(value["ok"], false);
    assert_eq!(value["error"]["code"], "incomplete_pair");
    assert_eq!(value["error"]["offset"], 3);
}

#[test]
fn formatted_output_decodes_back() {
    let input: Vec<u8> = (0..=255).collect();
    let encoded = hexer(&["-f"], &input);
    assert!(encoded.status.success());
    let decoded = hexer(&["-r", "-s"], &encoded.stdout);
    assert!(decoded.status.success());
    assert_eq!(decoded.stdout, input);
}

#[test]
fn debug_reports_to_stderr_only() {
    let out = hexer(&["--debug"], b"hi");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"6869");
    let err = stderr_of(&out);
    assert!(err.contains("[debug] encode:"));
    assert!(err.contains("[debug] encoded 2 bytes into 4 hex digits"));
}

#[test]
fn unknown_flag_is_an_argument_error() {
    let out = hexer(&["--nope"], b"");
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert!(!out.stderr.is_empty());
}

#[test]
fn decode_error_reported_when_stdout_is_closed() {
    let out = hexer_with_closed_stdout(&["-r", "-s"], b"4aXX4b");
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("The character X (88) is not a valid hex digit"));
}

#[test]
fn incomplete_pair_reported_when_stdout_is_closed() {
    let out = hexer_with_closed_stdout(&["-r"], b"4a4");
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("EOF before even-numbered hex digit"));
}

#[test]
fn closed_stdout_ends_encode_quietly() {
    let input = vec![0x5Au8; 1 << 20];
    let out = hexer_with_closed_stdout(&["--format"], &input);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty());
}
