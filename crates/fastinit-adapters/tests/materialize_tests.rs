//! End-to-end scaffolding through the real and in-memory filesystems.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fastinit_adapters::{LocalFilesystem, MemoryFilesystem, catalog};
use fastinit_core::{
    application::{ApplicationError, ScaffoldService},
    domain::{Database, Linter, Orm, ProjectOptions, TestFramework},
    error::{ErrorKind, FastinitError},
};
use tempfile::TempDir;
use walkdir::WalkDir;

fn demo() -> ProjectOptions {
    ProjectOptions::builder()
        .name("demo")
        .unwrap()
        .database(Database::PostgreSql)
        .orm(Orm::SqlAlchemy)
        .linter(Linter::Ruff)
        .test_framework(TestFramework::PyTest)
        .docker(true)
        .build()
}

fn local_service() -> ScaffoldService {
    ScaffoldService::new(Arc::new(catalog().unwrap()), Box::new(LocalFilesystem::new()))
}

fn files_under(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn written_tree_matches_the_plan_exactly() {
    let temp = TempDir::new().unwrap();
    let service = local_service();
    let options = demo();

    let plan = service.plan(&options).unwrap();
    let report = service.scaffold(&options, temp.path()).unwrap();

    let root = temp.path().join("demo");
    assert_eq!(report.root, root);
    assert_eq!(report.files_written, plan.len());

    let expected: BTreeSet<String> = plan.paths().map(|p| p.as_str().to_string()).collect();
    assert_eq!(files_under(&root), expected);

    for task in plan.tasks() {
        let on_disk = fs::read_to_string(root.join(task.path())).unwrap();
        assert_eq!(on_disk, task.content(), "content differs for {}", task.path());
    }
}

#[test]
fn existing_empty_directory_is_accepted() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("demo")).unwrap();

    let report = local_service().scaffold(&demo(), temp.path()).unwrap();
    assert!(report.files_written > 0);
    assert!(temp.path().join("demo/app/main.py").is_file());
}

#[test]
fn non_empty_directory_is_left_untouched() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("demo");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("notes.txt"), "keep me").unwrap();

    let err = local_service().scaffold(&demo(), temp.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DestinationUnusable);
    assert_eq!(files_under(&root), BTreeSet::from(["notes.txt".to_string()]));
    assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), "keep me");
}

#[test]
fn file_in_place_of_root_is_unusable() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("demo"), "").unwrap();

    let err = local_service().scaffold(&demo(), temp.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DestinationUnusable);
}

#[test]
fn non_empty_memory_root_gets_zero_writes() {
    let fs = MemoryFilesystem::new().with_file("/work/demo/keep.txt", "x");
    let service = ScaffoldService::new(Arc::new(catalog().unwrap()), Box::new(fs.clone()));

    let err = service.scaffold(&demo(), "/work").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DestinationUnusable);
    assert_eq!(fs.write_attempts(), 0);
    assert_eq!(fs.list_files(), vec![PathBuf::from("/work/demo/keep.txt")]);
}

#[test]
fn failure_part_way_keeps_earlier_files() {
    let fs = MemoryFilesystem::new().fail_after(3);
    let service = ScaffoldService::new(Arc::new(catalog().unwrap()), Box::new(fs.clone()));
    let plan = service.plan(&demo()).unwrap();

    let err = service.scaffold(&demo(), "/work").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WriteFailure);
    assert!(err.leaves_partial_state());

    let failed = &plan.tasks()[3];
    match &err {
        FastinitError::Application(ApplicationError::WriteFailed { task, .. }) => {
            assert_eq!(task, failed.path().as_str());
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(fs.file_count(), 3);
    for task in &plan.tasks()[..3] {
        let written = fs.read_file(Path::new("/work/demo").join(task.path()));
        assert_eq!(written.as_deref(), Some(task.content()));
    }
}

#[test]
fn injected_permission_error_names_the_file() {
    let fs = MemoryFilesystem::new()
        .fail_on("/work/demo/app/main.py", io::ErrorKind::PermissionDenied);
    let service = ScaffoldService::new(Arc::new(catalog().unwrap()), Box::new(fs));

    let err = service.scaffold(&demo(), "/work").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WriteFailure);
    assert!(err.to_string().contains("app/main.py"));
}

#[test]
fn progress_callback_sees_every_file_in_plan_order() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Arc::new(catalog().unwrap()), Box::new(fs));
    let plan = service.plan(&demo()).unwrap();

    let mut seen = Vec::new();
    service
        .scaffold_with(&demo(), "/work", |task| seen.push(task.path().clone()))
        .unwrap();

    let expected: Vec<_> = plan.paths().cloned().collect();
    assert_eq!(seen, expected);
}
