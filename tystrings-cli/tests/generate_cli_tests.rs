use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn tystrings_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("tystrings"))
}

#[test]
fn test_generate_missing_input_is_a_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = tystrings_cmd()
        .current_dir(temp_dir.path())
        .args(["generate", "Missing.m"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("'Missing.m' does not exist"));
}

#[test]
fn test_generate_directory_input_is_a_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("Sources")).unwrap();

    let output = tystrings_cmd()
        .current_dir(temp_dir.path())
        .args(["generate", "Sources"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("'Sources' is a directory"));
}

#[test]
fn test_generate_requires_files() {
    let output = tystrings_cmd().arg("generate").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("View.m"), "").unwrap();
    fs::write(temp_dir.path().join("tystrings.toml"), "[extract\n").unwrap();

    let output = tystrings_cmd()
        .current_dir(temp_dir.path())
        .args(["generate", "View.m"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid config"));
}

#[cfg(unix)]
mod with_fake_extractor {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    /// Mimics genstrings: writes a UTF-8 strings file into the `-o`
    /// directory and exits with `$FAKE_EXIT`.
    const SCRIPT: &str = r#"#!/bin/sh
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    -o) out="$2"; shift 2 ;;
    *) echo "scanning $1"; shift ;;
  esac
done
printf '/* No comment provided by engineer. */\n"A" = "1";\n\n"B" = "two";\n"C" = "three";\n' > "$out/Localizable.strings"
exit ${FAKE_EXIT:-0}
"#;

    fn setup(abort_on_failure: bool) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("fake-genstrings");
        fs::write(&script, SCRIPT).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        fs::write(
            temp_dir.path().join("tystrings.toml"),
            format!(
                "[extract]\nprogram = \"{}\"\nabort_on_failure = {}\n",
                script.display(),
                abort_on_failure
            ),
        )
        .unwrap();
        fs::write(temp_dir.path().join("View.m"), "").unwrap();
        temp_dir
    }

    fn write_reference(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(
            dir.join("Localizable.strings"),
            "\"A\" = \"1\";\n\"B\" = \"deux\";\n",
        )
        .unwrap();
    }

    const MERGED: &str = "/* No comment provided by engineer. */\n\"A\" = \"1\";\n\n\"B\" = \"deux\";\n\"C\" = \"three\";\n";

    #[test]
    fn test_generate_keeps_translations() {
        let temp_dir = setup(false);
        write_reference(&temp_dir.path().join("fr.lproj"));

        let output = tystrings_cmd()
            .current_dir(temp_dir.path())
            .args(["generate", "View.m", "--utf8", "-v", "-o", "fr.lproj"])
            .output()
            .unwrap();

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(output.status.success(), "stderr: {}", stderr);
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("fr.lproj/Localizable.strings")).unwrap(),
            MERGED
        );

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("3 entries, 1 restored, 1 new, 1 unchanged"), "stdout: {}", stdout);
        assert!(stderr.contains("scanning View.m"), "stderr: {}", stderr);
        assert!(stderr.contains("B => deux (was two)"), "stderr: {}", stderr);
        assert!(stderr.contains("have fun!"), "stderr: {}", stderr);
    }

    #[test]
    fn test_generate_into_several_directories() {
        let temp_dir = setup(false);
        write_reference(&temp_dir.path().join("fr.lproj"));
        fs::create_dir(temp_dir.path().join("de.lproj")).unwrap();

        let output = tystrings_cmd()
            .current_dir(temp_dir.path())
            .args(["generate", "View.m", "--utf8", "-o", "fr.lproj", "de.lproj"])
            .output()
            .unwrap();

        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("fr.lproj/Localizable.strings")).unwrap(),
            MERGED
        );
        assert!(
            fs::read_to_string(temp_dir.path().join("de.lproj/Localizable.strings"))
                .unwrap()
                .contains("\"B\" = \"two\";")
        );
    }

    #[test]
    fn test_generate_defaults_to_working_directory() {
        let temp_dir = setup(false);

        let output = tystrings_cmd()
            .current_dir(temp_dir.path())
            .args(["generate", "View.m", "--utf8"])
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(temp_dir.path().join("Localizable.strings").exists());
    }

    #[test]
    fn test_failed_extraction_still_merges() {
        let temp_dir = setup(false);
        write_reference(&temp_dir.path().join("fr.lproj"));

        let output = tystrings_cmd()
            .current_dir(temp_dir.path())
            .env("FAKE_EXIT", "3")
            .args(["generate", "View.m", "--utf8", "-o", "fr.lproj"])
            .output()
            .unwrap();

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(output.status.success(), "stderr: {}", stderr);
        assert!(stderr.contains("exit code 3"), "stderr: {}", stderr);
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("fr.lproj/Localizable.strings")).unwrap(),
            MERGED
        );
    }

    #[test]
    fn test_failed_extraction_aborts_when_configured() {
        let temp_dir = setup(true);
        write_reference(&temp_dir.path().join("fr.lproj"));

        let output = tystrings_cmd()
            .current_dir(temp_dir.path())
            .env("FAKE_EXIT", "3")
            .args(["generate", "View.m", "--utf8", "-o", "fr.lproj"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("extraction failed"));
        // The extractor's output is left as is.
        assert!(
            fs::read_to_string(temp_dir.path().join("fr.lproj/Localizable.strings"))
                .unwrap()
                .contains("\"B\" = \"two\";")
        );
    }
}
