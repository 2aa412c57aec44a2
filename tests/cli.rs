//! Integration tests: run the binary against real files.
//!
//! Every run gets its own temp directory holding the transcript, a config
//! file pointing the star store and log there, so nothing touches $HOME.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

const TRANSCRIPT: &str = "Messages are end-to-end encrypted.\r
1/1/23, 9:00 PM - Alice: dinner at 8?\r
1/1/23, 9:01 PM - Bob: IMG-20230101-WA0001.jpg\r
the menu\r
1/1/23, 9:02 PM - Carol: <b>yes</b>\r
";

struct Sandbox {
    dir: PathBuf,
}

impl Sandbox {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("chatv_cli_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create sandbox");

        let config = format!(
            "star_store_path = {:?}\nlog_file_path = {:?}\n",
            dir.join("starred.json"),
            dir.join("chatv.log"),
        );
        fs::write(dir.join("config.toml"), config).expect("write config");
        fs::write(dir.join("chat.txt"), TRANSCRIPT).expect("write transcript");

        Sandbox { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_chatv"));
        cmd.arg("--config")
            .arg(self.path("config.toml"))
            .env_remove("CHATV_CONFIG")
            .env_remove("CHATV_FORMAT")
            .env_remove("CHATV_STAR_STORE")
            .env_remove("RUST_LOG")
            .stdin(Stdio::null());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command()
            .arg(self.path("chat.txt"))
            .args(args)
            .output()
            .expect("Failed to execute binary")
    }
}

impl Drop for Sandbox {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "chatv failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read file")).expect("valid JSON")
}

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_chatv"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn text_output_lists_every_message() {
    let sandbox = Sandbox::new("text");

    let stdout = stdout_of(&sandbox.run(&[]));

    assert_eq!(
        stdout,
        "[ ] #1 1/1/23 9:00 PM Alice: dinner at 8?\n\
         [ ] #2 1/1/23 9:01 PM Bob: [Media omitted]\n    the menu\n\
         [ ] #3 1/1/23 9:02 PM Carol: <b>yes</b>\n    \n"
    );
}

#[test]
fn json_output_carries_message_fields() {
    let sandbox = Sandbox::new("json");

    let stdout = stdout_of(&sandbox.run(&["--format", "json"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    let entries = value.as_array().expect("array");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1]["id"], 2);
    assert_eq!(entries[1]["sender"], "Bob");
    assert_eq!(entries[1]["text"], "[Media omitted]\nthe menu");
    assert_eq!(entries[1]["starred"], false);
    // Final CRLF leaves an empty continuation on the last message
    assert_eq!(entries[2]["text"], "<b>yes</b>\n");
}

#[test]
fn html_output_escapes_text() {
    let sandbox = Sandbox::new("html");

    let stdout = stdout_of(&sandbox.run(&["--format", "html", "--search", "carol"]));

    assert!(stdout.contains("&lt;b&gt;yes&lt;/b&gt;"), "got: {}", stdout);
    assert!(!stdout.contains("Alice"));
}

#[test]
fn search_filters_by_sender_and_text() {
    let sandbox = Sandbox::new("search");

    let stdout = stdout_of(&sandbox.run(&["-s", "MENU"]));

    assert_eq!(stdout.lines().count(), 2, "Bob's message plus its continuation");
    assert!(stdout.starts_with("[ ] #2 "));
}

#[test]
fn stars_persist_across_runs() {
    let sandbox = Sandbox::new("stars");

    stdout_of(&sandbox.run(&["--star", "3", "--star", "1"]));
    assert_eq!(read_json(&sandbox.path("starred.json")), serde_json::json!([1, 3]));

    let stdout = stdout_of(&sandbox.run(&["--starred"]));
    let headers: Vec<&str> = stdout.lines().filter(|line| !line.starts_with("    ")).collect();
    assert_eq!(headers.len(), 2);
    assert!(headers.iter().all(|line| line.starts_with("[*]")));

    stdout_of(&sandbox.run(&["--unstar", "1", "--star", "99"]));
    assert_eq!(read_json(&sandbox.path("starred.json")), serde_json::json!([3]));
}

#[test]
fn corrupt_star_store_reads_as_empty() {
    let sandbox = Sandbox::new("corrupt");
    fs::write(sandbox.path("starred.json"), "{not json").expect("write store");

    let stdout = stdout_of(&sandbox.run(&[]));

    assert!(stdout.lines().all(|line| !line.starts_with("[*]")));
}

#[test]
fn reads_transcript_from_piped_stdin() {
    let sandbox = Sandbox::new("stdin");

    let mut child = sandbox
        .command()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn chatv");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(b"1/1/23, 10:00 - Alice: piped\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait for chatv");

    assert_eq!(stdout_of(&output), "[ ] #1 1/1/23 10:00 Alice: piped\n    \n");
}

#[test]
fn missing_file_fails_with_message() {
    let sandbox = Sandbox::new("missing");

    let output = sandbox
        .command()
        .arg(sandbox.path("nope.txt"))
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.txt"), "stderr: {}", stderr);
}

#[test]
fn log_file_is_written_to_configured_path() {
    let sandbox = Sandbox::new("log");

    stdout_of(&sandbox.run(&[]));

    let log = fs::read_to_string(sandbox.path("chatv.log")).expect("log file exists");
    assert!(log.contains("Transcript parsed"), "log: {}", log);
}
