//! End-to-end runs of the patchserver-deploy binary against scratch release roots.

use assert_cmd::Command;
use predicates::prelude::*;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

const SHARED_ENTRIES: [&str; 5] = [
    "patchserver/game/dat/mhfdat.bin",
    "patchserver/game/mhfo.dll",
    "patchserver/images/launcher_bg.png",
    "patchserver/launcher.json",
    "patchserver/patch_config.json",
];

fn release_root() -> TempDir {
    let root = tempfile::tempdir().expect("create release root");
    let path = root.path();
    fs::create_dir_all(path.join("game/dat")).unwrap();
    fs::write(path.join("game/dat/mhfdat.bin"), b"dat").unwrap();
    fs::write(path.join("game/mhfo.dll"), b"dll").unwrap();
    fs::create_dir_all(path.join("images")).unwrap();
    fs::write(path.join("images/launcher_bg.png"), b"png").unwrap();
    fs::write(path.join("launcher.json"), br#"{"Servers":[]}"#).unwrap();
    fs::write(path.join("patch_config.json"), br#"{"PatchPort":8080}"#).unwrap();
    root
}

fn deploy(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("patchserver-deploy").expect("binary built");
    cmd.arg("--root").arg(root).env("NO_COLOR", "1").env_remove("PATCHSERVER_DEPLOY_ROOT");
    cmd
}

fn entry_names(zip_path: &Path) -> BTreeSet<String> {
    let archive = zip::ZipArchive::new(File::open(zip_path).expect("open archive")).expect("read archive");
    archive.file_names().map(str::to_owned).collect()
}

fn expected_entries(executable: &str) -> BTreeSet<String> {
    SHARED_ENTRIES
        .iter()
        .map(|s| (*s).to_owned())
        .chain([format!("patchserver/{executable}")])
        .collect()
}

#[test]
fn missing_assets_abort_before_any_output() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("images")).unwrap();
    fs::write(root.path().join("patchserver"), b"ELF").unwrap();

    deploy(root.path())
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("game")
                .and(predicate::str::contains("launcher.json"))
                .and(predicate::str::contains("patch_config.json")),
        );

    assert!(!root.path().join("releases").exists());
}

#[test]
fn linux_only_produces_linux_archive() {
    let root = release_root();
    fs::write(root.path().join("patchserver"), b"ELF").unwrap();

    deploy(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("patchserver.exe (windows) not found"))
        .stdout(predicate::str::contains("Linux-amd64.zip"));

    let releases = root.path().join("releases");
    assert!(releases.join("Linux-amd64.zip").is_file());
    assert!(!releases.join("Windows-amd64.zip").exists());
    assert!(!releases.join("Windows").exists());
}

#[test]
fn both_executables_produce_both_archives() {
    let root = release_root();
    fs::write(root.path().join("patchserver"), b"ELF").unwrap();
    fs::write(root.path().join("patchserver.exe"), b"MZ").unwrap();

    deploy(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: patchserver/launcher.json"));

    let releases = root.path().join("releases");
    assert_eq!(
        entry_names(&releases.join("Linux-amd64.zip")),
        expected_entries("patchserver")
    );
    assert_eq!(
        entry_names(&releases.join("Windows-amd64.zip")),
        expected_entries("patchserver.exe")
    );
    assert!(releases.join("Windows/patchserver/patchserver.exe").is_file());
}

#[test]
fn repeated_runs_are_identical() {
    let root = release_root();
    fs::write(root.path().join("patchserver"), b"ELF").unwrap();
    let staging = root.path().join("releases/Linux/patchserver");
    let zip_path = root.path().join("releases/Linux-amd64.zip");

    deploy(root.path()).assert().success();
    let first = entry_names(&zip_path);
    fs::write(staging.join("stale.log"), b"left behind").unwrap();

    deploy(root.path()).assert().success();

    assert_eq!(entry_names(&zip_path), first);
    assert!(!staging.join("stale.log").exists());
    assert_eq!(fs::read(staging.join("game/dat/mhfdat.bin")).unwrap(), b"dat");
}

#[cfg(unix)]
#[test]
fn linux_executable_is_packaged_executable() {
    use std::os::unix::fs::PermissionsExt;

    let root = release_root();
    let exe = root.path().join("patchserver");
    fs::write(&exe, b"ELF").unwrap();
    fs::set_permissions(&exe, fs::Permissions::from_mode(0o644)).unwrap();

    deploy(root.path()).assert().success();

    let staged = root.path().join("releases/Linux/patchserver/patchserver");
    assert_ne!(fs::metadata(&staged).unwrap().permissions().mode() & 0o111, 0);

    let zip_path = root.path().join("releases/Linux-amd64.zip");
    let mut archive = zip::ZipArchive::new(File::open(zip_path).unwrap()).unwrap();
    let entry = archive.by_name("patchserver/patchserver").unwrap();
    assert_ne!(entry.unix_mode().unwrap() & 0o111, 0);
}

#[test]
fn no_executables_still_succeeds() {
    let root = release_root();

    deploy(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 archives"));

    let releases = root.path().join("releases");
    assert!(releases.is_dir());
    assert!(!releases.join("Linux-amd64.zip").exists());
    assert!(!releases.join("Windows-amd64.zip").exists());
}

#[test]
fn require_package_fails_empty_run() {
    let root = release_root();

    deploy(root.path()).arg("--require-package").assert().code(1);
}

#[test]
fn config_file_in_root_changes_layout() {
    let root = release_root();
    fs::write(root.path().join("patchserver"), b"ELF").unwrap();
    fs::write(
        root.path().join("deploy.toml"),
        r#"
release_dir = "dist"

[[platforms]]
name = "linux"
executable = "patchserver"
staging_dir = "Linux"
archive = "patchserver-linux.zip"
make_executable = true
"#,
    )
    .unwrap();

    deploy(root.path()).assert().success();

    assert!(root.path().join("dist/patchserver-linux.zip").is_file());
    assert!(!root.path().join("releases").exists());
}

#[test]
fn invalid_config_is_a_critical_error() {
    let root = release_root();
    let config = root.path().join("broken.toml");
    fs::write(&config, "platforms = 3\n").unwrap();

    deploy(root.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Critical error"));
}

#[test]
fn config_cannot_stage_over_shared_assets() {
    let root = release_root();
    fs::write(root.path().join("patchserver"), b"ELF").unwrap();
    fs::write(
        root.path().join("deploy.toml"),
        r#"
package_dir = "game"

[[platforms]]
name = "linux"
executable = "patchserver"
staging_dir = ".."
archive = "Linux-amd64.zip"
make_executable = true
"#,
    )
    .unwrap();

    deploy(root.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("staging_dir must be a single relative name"));

    assert_eq!(
        fs::read(root.path().join("game/dat/mhfdat.bin")).unwrap(),
        b"dat"
    );
    assert!(!root.path().join("releases").exists());
}
