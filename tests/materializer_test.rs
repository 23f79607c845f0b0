mod support;

use compose_generator::config::TemplateDefinition;
use compose_generator::error::Error;
use compose_generator::materializer::{clean_destination, ignored_patterns, Materializer, MergePolicy};
use std::fs;
use std::path::Path;
use support::write_tree;
use tempfile::TempDir;

fn template(source: &Path) -> TemplateDefinition {
    write_tree(
        source,
        &[
            ("config.json", r#"{"label": "Redis"}"#),
            ("README.md", "# Redis"),
            ("docker-compose.yml", "services:\n  redis:\n    image: redis\n"),
            ("environment.env", "REDIS_PASSWORD=changeme\n"),
            ("volumes/data/.gitkeep", ""),
            ("volumes/conf/redis.conf", "appendonly yes\n"),
            ("volumes/conf/README.md", "config notes"),
        ],
    );
    TemplateDefinition {
        label: "Redis".to_string(),
        directory: "redis".to_string(),
        files: Vec::new(),
        questions: Vec::new(),
        volumes: Vec::new(),
        secrets: Vec::new(),
        source_dir: source.to_path_buf(),
    }
}

#[test]
fn test_ignored_patterns() {
    let ignored = ignored_patterns().unwrap();
    assert!(ignored.is_match("config.json"));
    assert!(ignored.is_match("config.yaml"));
    assert!(ignored.is_match("volumes/conf/README.md"));
    assert!(ignored.is_match("volumes/data/.gitkeep"));
    assert!(!ignored.is_match("docker-compose.yml"));
    assert!(!ignored.is_match("volumes/conf/redis.conf"));
}

#[test]
fn test_copies_tree_without_metadata() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let expected = TempDir::new().unwrap();
    let template = template(source.path());

    let written = Materializer::new(MergePolicy::Replace)
        .unwrap()
        .materialize(&template, output.path())
        .unwrap();

    write_tree(
        expected.path(),
        &[
            ("docker-compose.yml", "services:\n  redis:\n    image: redis\n"),
            ("environment.env", "REDIS_PASSWORD=changeme\n"),
            ("volumes/conf/redis.conf", "appendonly yes\n"),
        ],
    );
    fs::create_dir_all(expected.path().join("volumes/data")).unwrap();

    assert!(!dir_diff::is_different(output.path(), expected.path()).unwrap());
    assert_eq!(written.len(), 3);
}

#[test]
fn test_replace_policy_never_merges() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let template = template(source.path());
    write_tree(
        output.path(),
        &[
            ("docker-compose.yml", "services:\n  old:\n    image: old\n  legacy: {}\n"),
            ("volumes/conf/stale.conf", "stale"),
            ("notes.txt", "keep me"),
        ],
    );

    Materializer::new(MergePolicy::Replace).unwrap().materialize(&template, output.path()).unwrap();

    let compose = fs::read_to_string(output.path().join("docker-compose.yml")).unwrap();
    assert_eq!(compose, "services:\n  redis:\n    image: redis\n");
    assert!(!output.path().join("volumes/conf/stale.conf").exists());
    assert!(output.path().join("notes.txt").exists());
}

#[test]
fn test_merge_policy_keeps_unrelated_files() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let template = template(source.path());
    write_tree(output.path(), &[("volumes/conf/extra.conf", "extra")]);

    let materializer = Materializer::new(MergePolicy::Merge).unwrap();
    assert_eq!(materializer.policy(), MergePolicy::Merge);
    materializer.materialize(&template, output.path()).unwrap();

    assert!(output.path().join("volumes/conf/extra.conf").exists());
    assert!(output.path().join("volumes/conf/redis.conf").exists());
}

#[test]
fn test_abort_on_conflict_policy() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let template = template(source.path());
    write_tree(output.path(), &[("docker-compose.yml", "services: {}\n")]);

    let result = Materializer::new(MergePolicy::AbortOnConflict)
        .unwrap()
        .materialize(&template, output.path());

    assert!(matches!(result, Err(Error::CopyError { .. })));
}

#[test]
fn test_clean_destination() {
    let output = TempDir::new().unwrap();
    write_tree(
        output.path(),
        &[
            ("docker-compose.yml", "old"),
            ("environment.env", "old"),
            ("volumes/db/data.bin", "old"),
            ("Dockerfile", "FROM scratch"),
        ],
    );

    clean_destination(output.path()).unwrap();
    assert!(!output.path().join("docker-compose.yml").exists());
    assert!(!output.path().join("environment.env").exists());
    assert!(!output.path().join("volumes").exists());
    assert!(output.path().join("Dockerfile").exists());

    // A second cleanup has nothing left to do.
    clean_destination(output.path()).unwrap();
}
