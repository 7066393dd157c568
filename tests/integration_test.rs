use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// M1 and M2 both export org.foo, M3 imports M2's version.
const SCENARIO: &str = r#"{
    "modules": [
        {
            "id": 1, "symbolic_name": "m1", "version": "1.0", "state": "active",
            "exports": [ { "name": "org.foo", "version": "1.0.0" } ]
        },
        {
            "id": 2, "symbolic_name": "m2", "version": "2.0", "state": "active",
            "exports": [ { "name": "org.foo", "version": "2.0.0" } ]
        },
        {
            "id": 3, "symbolic_name": "m3", "version": "1.0", "state": "active",
            "imports": [ { "package": "org.foo", "provider": 2 } ]
        }
    ]
}"#;

fn write_snapshot(content: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("registry.json");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

fn wirecheck(registry: &Path) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("wirecheck"));
    cmd.arg("--registry")
        .arg(registry)
        .arg("--color")
        .arg("never")
        .env_remove("WIRECHECK_REGISTRY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_packages_lists_exporters_and_importers() {
    let (_dir, path) = write_snapshot(SCENARIO);

    wirecheck(&path)
        .arg("packages")
        .arg("org.foo")
        .assert()
        .success()
        .stdout(
            "org.foo 1.0.0 from m1/1.0.0 [1]\n\
             org.foo 2.0.0 from m2/2.0.0 [2]\n  \
             imported by m3/1.0.0 [3]\n",
        );
}

#[test]
fn test_packages_unknown_name_prints_nothing() {
    let (_dir, path) = write_snapshot(SCENARIO);

    wirecheck(&path)
        .arg("packages")
        .arg("org.unknown")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_package_conflicts_reports_group() {
    let (_dir, path) = write_snapshot(SCENARIO);

    wirecheck(&path)
        .arg("package-conflicts")
        .assert()
        .success()
        .stdout(
            "Package org.foo has potential conflicts between:\n  \
             version <1.0.0> exported by m1/1.0.0 [1]\n  \
             version <2.0.0> exported by m2/2.0.0 [2]\n    \
             imported by m3/1.0.0 [3]\n",
        );
}

#[test]
fn test_single_exporter_is_not_a_conflict() {
    let (_dir, path) = write_snapshot(
        r#"{"modules": [
            {"id": 1, "symbolic_name": "m1", "version": "1.0", "state": "active",
             "exports": [ {"name": "org.bar"} ]}
        ]}"#,
    );

    wirecheck(&path)
        .arg("package-conflicts")
        .assert()
        .success()
        .stdout("");

    wirecheck(&path)
        .arg("packages")
        .arg("org.bar")
        .assert()
        .success()
        .stdout("org.bar from m1/1.0.0 [1]\n");
}

#[test]
fn test_absent_version_is_omitted() {
    let (_dir, path) = write_snapshot(
        r#"{"modules": [
            {"id": 1, "symbolic_name": "m1", "version": "1.0", "state": "active",
             "exports": [ {"name": "org.bar"} ]},
            {"id": 2, "symbolic_name": "m2", "version": "1.0", "state": "active",
             "exports": [ {"name": "org.bar", "version": "0.0.0"} ]}
        ]}"#,
    );

    wirecheck(&path)
        .arg("packages")
        .arg("org.bar")
        .assert()
        .success()
        .stdout("org.bar from m1/1.0.0 [1]\norg.bar 0.0.0 from m2/1.0.0 [2]\n");

    wirecheck(&path)
        .arg("package-conflicts")
        .assert()
        .success()
        .stdout(
            "Package org.bar has potential conflicts between:\n  \
             exported by m1/1.0.0 [1]\n  \
             version <0.0.0> exported by m2/1.0.0 [2]\n",
        );
}

#[test]
fn test_uses_directive_is_rendered() {
    let (_dir, path) = write_snapshot(
        r#"{"modules": [
            {"id": 1, "symbolic_name": "m1", "version": "1.0", "state": "active",
             "exports": [ {"name": "org.baz", "version": "1.0", "uses": "org.qux"} ]},
            {"id": 2, "symbolic_name": "m2", "version": "1.0", "state": "resolved",
             "exports": [ {"name": "org.baz", "version": "1.1"} ]}
        ]}"#,
    );

    wirecheck(&path)
        .arg("package-conflicts")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  version <1.0.0> exported by m1/1.0.0 [1] uses:=org.qux\n",
        ))
        .stdout(predicate::str::contains(
            "  version <1.1.0> exported by m2/1.0.0 [2]\n",
        ));
}

#[test]
fn test_installed_module_is_excluded() {
    let (_dir, path) = write_snapshot(
        r#"{"modules": [
            {"id": 1, "symbolic_name": "m1", "version": "1.0", "state": "active",
             "exports": [ {"name": "org.foo"} ]},
            {"id": 2, "symbolic_name": "m2", "version": "1.0", "state": "installed",
             "exports": [ {"name": "org.foo"} ]}
        ]}"#,
    );

    wirecheck(&path)
        .arg("package-conflicts")
        .assert()
        .success()
        .stdout("");

    wirecheck(&path)
        .arg("packages")
        .arg("org.foo")
        .assert()
        .success()
        .stdout(predicate::str::contains("m2").not());
}

#[test]
fn test_missing_snapshot_is_fatal() {
    let dir = tempdir().unwrap();

    wirecheck(&dir.path().join("absent.json"))
        .arg("package-conflicts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_invalid_snapshot_is_fatal() {
    let (_dir, path) = write_snapshot("invalid json");

    wirecheck(&path)
        .arg("packages")
        .arg("org.foo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid registry snapshot"));
}

#[test]
fn test_registry_from_environment() {
    let (_dir, path) = write_snapshot(SCENARIO);

    Command::new(cargo::cargo_bin!("wirecheck"))
        .env("WIRECHECK_REGISTRY", &path)
        .arg("--color")
        .arg("never")
        .arg("packages")
        .arg("org.foo")
        .assert()
        .success()
        .stdout(predicate::str::contains("from m2/2.0.0 [2]"));
}

#[test]
fn test_packages_requires_name() {
    let (_dir, path) = write_snapshot(SCENARIO);

    wirecheck(&path).arg("packages").assert().failure();
}
