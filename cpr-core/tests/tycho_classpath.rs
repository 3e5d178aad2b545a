//! End-to-end resolution of Tycho modules against a temporary workspace.
//!
//! `true` and `false` stand in for `mvn`: they ignore the goal argument and
//! write nothing, so each test seeds `target/dependencies-list.txt` itself.
#![cfg(unix)]

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use cpr_common::error::CprError;
use cpr_core::{ClassPathResolver, TychoClassPathResolver};

struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn module(&self, name: &str) -> PathBuf {
        let module = self.root().join(name);
        fs::create_dir_all(&module).unwrap();
        let pom = module.join("pom.xml");
        fs::write(&pom, "<project/>").unwrap();
        pom
    }

    fn dependency_list(&self, module: &str, lines: &[String]) {
        let target = self.root().join(module).join("target");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("dependencies-list.txt"), lines.join("\n")).unwrap();
    }
}

fn resolver(pom: &Path, mvn: &str) -> TychoClassPathResolver {
    let command = which::which(mvn).unwrap();
    TychoClassPathResolver::maybe_create(pom)
        .unwrap()
        .with_command(command)
}

fn set(paths: &[PathBuf]) -> HashSet<PathBuf> {
    paths.iter().cloned().collect()
}

#[test]
fn resolves_sibling_sources_and_external_jars() {
    let ws = Workspace::new();
    let pom = ws.module("mod-a");
    fs::create_dir(ws.root().join("mod-b")).unwrap();
    let lib = ws.root().join("libX-2.3.jar");
    ws.dependency_list(
        "mod-a",
        &[
            ws.root()
                .join("mod-b/target/mod-b-1.0.0-SNAPSHOT.jar")
                .display()
                .to_string(),
            lib.display().to_string(),
        ],
    );

    let classpath = resolver(&pom, "true").classpath().unwrap();

    assert_eq!(
        classpath,
        set(&[
            ws.root().join("mod-b/bin"),
            ws.root().join("mod-b/.kotlin-eclipse/classes"),
            lib,
            ws.root().join("mod-a/bin"),
        ])
    );
}

#[test]
fn empty_list_yields_only_own_output() {
    let ws = Workspace::new();
    let pom = ws.module("mod-a");
    ws.dependency_list("mod-a", &[]);

    let classpath = resolver(&pom, "true").classpath().unwrap();

    assert_eq!(classpath, set(&[ws.root().join("mod-a/bin")]));
}

#[test]
fn entries_resolving_to_the_same_paths_appear_once() {
    let ws = Workspace::new();
    let pom = ws.module("mod-a");
    fs::create_dir(ws.root().join("mod-b")).unwrap();
    ws.dependency_list(
        "mod-a",
        &[
            "/repo/one/mod-b-1.0.0-SNAPSHOT.jar".to_string(),
            "/repo/two/mod-b-1.0.1-SNAPSHOT.jar".to_string(),
            "/repo/libs/libY-1.0.jar".to_string(),
            "/repo/libs/libY-1.0.jar".to_string(),
        ],
    );

    let classpath = resolver(&pom, "true").classpath().unwrap();

    assert_eq!(
        classpath,
        set(&[
            ws.root().join("mod-b/bin"),
            ws.root().join("mod-b/.kotlin-eclipse/classes"),
            PathBuf::from("/repo/libs/libY-1.0.jar"),
            ws.root().join("mod-a/bin"),
        ])
    );
}

#[test]
fn snapshot_without_checkout_stays_a_jar() {
    let ws = Workspace::new();
    let pom = ws.module("mod-a");
    let jar = PathBuf::from("/repo/mod-z-3.1.4-SNAPSHOT.jar");
    ws.dependency_list("mod-a", &[jar.display().to_string()]);

    let classpath = resolver(&pom, "true").classpath().unwrap();

    assert_eq!(classpath, set(&[jar, ws.root().join("mod-a/bin")]));
}

#[test]
fn failed_build_still_reads_existing_list() {
    let ws = Workspace::new();
    let pom = ws.module("mod-a");
    ws.dependency_list("mod-a", &["/repo/libs/stale-1.0.jar".to_string()]);

    let classpath = resolver(&pom, "false").classpath().unwrap();

    assert_eq!(
        classpath,
        set(&[
            PathBuf::from("/repo/libs/stale-1.0.jar"),
            ws.root().join("mod-a/bin"),
        ])
    );
}

#[test]
fn missing_list_is_a_hard_error() {
    let ws = Workspace::new();
    let pom = ws.module("mod-a");

    let err = resolver(&pom, "true").classpath().unwrap_err();

    assert!(matches!(err, CprError::Io(_)));
}

#[test]
fn unlaunchable_command_is_an_error() {
    let ws = Workspace::new();
    let pom = ws.module("mod-a");
    ws.dependency_list("mod-a", &[]);

    let err = TychoClassPathResolver::maybe_create(&pom)
        .unwrap()
        .with_command(ws.root().join("no-such-mvn"))
        .classpath()
        .unwrap_err();

    assert!(matches!(err, CprError::Io(_)));
}
