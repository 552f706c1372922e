//! CLI integration tests.
//!
//! These spawn the `docnotes` binary and drive its menus over stdin. Only the
//! paths that end before anything is launched are covered here; opening notes
//! is covered in `app_spec.rs` with a recording launcher.

mod common;

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use common::*;
use tempfile::TempDir;

/// Run `docnotes <search_dir>` with an isolated config directory and the given stdin.
fn run_cli(search_dir: &Path, stdin: &str) -> Output {
    let home = TempDir::new().expect("Failed to create temp home");
    run_cli_with_home(search_dir, stdin, &home)
}

/// Like [`run_cli`], using `home` as both `HOME` and `XDG_CONFIG_HOME`.
fn run_cli_with_home(search_dir: &Path, stdin: &str, home: &TempDir) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_docnotes"))
        .arg(search_dir)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("DOCNOTES_EDITOR")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn docnotes");

    child
        .stdin
        .take()
        .expect("Failed to get stdin")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for docnotes")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

mod cli {
    use super::*;

    #[test]
    fn missing_directory_reports_uppercased_name() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("not-here");

        let output = run_cli(&missing, "");
        let stdout = stdout_of(&output);

        assert!(output.status.success());
        let expected = format!(
            "ERROR: NO SUCH DIRECTORY \"{}\"",
            missing.display().to_string().to_uppercase()
        );
        assert_eq!(stdout.lines().next(), Some(expected.as_str()));
    }

    #[test]
    fn empty_tree_reports_nothing_found() {
        let tmp = TempDir::new().unwrap();

        let output = run_cli(tmp.path(), "");

        assert!(output.status.success());
        assert_eq!(
            stdout_of(&output).trim_end(),
            format!(
                "no directories with \"notes.json\" found in \"{}\"",
                tmp.path().display()
            )
        );
    }

    #[test]
    fn broken_config_file_falls_back_to_defaults() {
        let home = TempDir::new().unwrap();
        let config_dir = home.path().join("docnotes");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.json"), "{not json").unwrap();
        let tmp = TempDir::new().unwrap();

        let output = run_cli_with_home(tmp.path(), "", &home);

        assert!(output.status.success());
        assert_eq!(
            stdout_of(&output).trim_end(),
            format!(
                "no directories with \"notes.json\" found in \"{}\"",
                tmp.path().display()
            )
        );
    }

    #[test]
    fn config_file_sets_manifest_name() {
        let home = TempDir::new().unwrap();
        let config_dir = home.path().join("docnotes");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.json"),
            r#"{"manifest_file": "subjects.json", "editor": ["vim"]}"#,
        )
        .unwrap();
        let tmp = TempDir::new().unwrap();
        write_manifest(&tmp.path().join("docs"), REACT_ONLY);

        let output = run_cli_with_home(tmp.path(), "", &home);

        assert!(output.status.success());
        assert_eq!(
            stdout_of(&output).trim_end(),
            format!(
                "no directories with \"subjects.json\" found in \"{}\"",
                tmp.path().display()
            )
        );
    }

    #[test]
    fn quitting_at_directory_menu_exits_cleanly() {
        let tmp = TempDir::new().unwrap();
        write_manifest(&tmp.path().join("backend"), REACT_ONLY);
        write_manifest(&tmp.path().join("frontend"), REACT_AND_REDUX);

        let output = run_cli(tmp.path(), "q\n");
        let stdout = stdout_of(&output);

        assert!(output.status.success());
        assert!(stdout.starts_with("CHOOSE NOTES DIRECTORY:\n"));
        assert!(stdout.ends_with('?'));
        assert!(!tmp.path().join("backend/notes").exists());
        assert!(!tmp.path().join("frontend/notes").exists());
    }

    #[test]
    fn invalid_manifest_is_reported_cleanly() {
        let tmp = TempDir::new().unwrap();
        let manifest = write_manifest(&tmp.path().join("docs"), r#"[{"base_url": "x"}]"#);

        let output = run_cli(tmp.path(), "");

        assert!(output.status.success());
        assert_eq!(
            stdout_of(&output).trim_end(),
            format!(
                "ERROR: INVALID MANIFEST \"{}\": subject 0: missing field 'name'",
                manifest.display()
            )
        );
    }

    #[test]
    fn malformed_manifest_fails() {
        let tmp = TempDir::new().unwrap();
        write_manifest(&tmp.path().join("docs"), "not json");

        let output = run_cli(tmp.path(), "");

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("failed to parse manifest"));
    }
}
