//! End-to-end tests for the `mm` binary against a stub manage script
//!
//! The stub records fake-apply calls in `fakes.log` and keeps failing the
//! apply pass with a duplicate-object error until at least one migration has
//! been faked, mimicking an out-of-sync ledger.

#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Path to the compiled mm binary (resolved at compile time)
fn mm_bin() -> String {
    env!("CARGO_BIN_EXE_mm").to_string()
}

/// Lay out a project directory whose migration tool is the given script.
fn project_with_stub(script: &str) -> TempDir {
    let dir = TempDir::new().expect("create tempdir");
    let script_path = dir.path().join("manage.sh");
    fs::write(&script_path, script).expect("write stub");
    fs::write(
        dir.path().join("migramend.yml"),
        format!(
            "manage_command: [\"/bin/sh\", \"{}\"]\n",
            script_path.display()
        ),
    )
    .expect("write config");
    dir
}

const HEALABLE_STUB: &str = r#"dir=$(dirname "$0")
if [ "$4" = "--fake" ]; then
  echo "faked: $2.$3" >> "$dir/fakes.log"
  exit 0
fi
if [ -f "$dir/fakes.log" ]; then
  echo "No migrations to apply."
  exit 0
fi
echo "Running migrations:"
echo "  Applying shop.0003_create_order..."
echo 'django.db.utils.ProgrammingError: relation "shop_order" already exists' >&2
exit 1
"#;

fn run_mm(project: &Path, args: &[&str]) -> std::process::Output {
    Command::new(mm_bin())
        .args(args)
        .args(["--project-dir", &project.display().to_string()])
        .output()
        .expect("failed to run mm")
}

#[test]
fn test_repair_heals_out_of_sync_ledger() {
    let project = project_with_stub(HEALABLE_STUB);
    let output = run_mm(project.path(), &["repair"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        output.status.success(),
        "repair should converge.\nstdout: {stdout}\nstderr: {stderr}"
    );
    assert!(stdout.contains("marked shop.0003_create_order as applied"));

    let fakes = fs::read_to_string(project.path().join("fakes.log")).unwrap();
    assert_eq!(fakes.trim(), "faked: shop.0003_create_order");
}

#[test]
fn test_repair_writes_json_report() {
    let project = project_with_stub(HEALABLE_STUB);
    let report_path = project.path().join("repair.json");
    let output = run_mm(
        project.path(),
        &["repair", "--report", &report_path.display().to_string()],
    );
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["attempts"], 2);
    assert_eq!(report["faked"][0]["app"], "shop");
    assert_eq!(report["faked"][0]["name"], "0003_create_order");
}

#[test]
fn test_repair_surfaces_unexpected_error_with_original_exit_code() {
    let project = project_with_stub(
        "echo 'psycopg2.OperationalError: connection refused' >&2\nexit 2\n",
    );
    let output = run_mm(project.path(), &["repair"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("connection refused"));
    assert!(!project.path().join("fakes.log").exists(), "must not fake");
}

#[test]
fn test_repair_propagates_fake_apply_failure() {
    let project = project_with_stub(
        r#"if [ "$4" = "--fake" ]; then
  echo "CommandError: migration not found" >&2
  exit 3
fi
echo "  Applying shop.0003_create_order..."
echo 'relation "shop_order" already exists' >&2
exit 1
"#,
    );
    let output = run_mm(project.path(), &["repair"]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CommandError: migration not found"));
}

#[test]
fn test_apply_mirrors_tool_success() {
    let project = project_with_stub("echo 'No migrations to apply.'\nexit 0\n");
    let output = run_mm(project.path(), &["apply"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No migrations to apply."));
}

#[test]
fn test_fake_invokes_tool_with_target() {
    let project = project_with_stub(HEALABLE_STUB);
    let output = run_mm(project.path(), &["fake", "shop", "0001_initial"]);

    assert!(output.status.success());
    let fakes = fs::read_to_string(project.path().join("fakes.log")).unwrap();
    assert_eq!(fakes.trim(), "faked: shop.0001_initial");
}
