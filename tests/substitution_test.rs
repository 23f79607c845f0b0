use compose_generator::environment::EnvironmentMap;
use compose_generator::substitution::{substitute_file, substitute_str};
use std::fs;
use tempfile::TempDir;

const COMPOSE: &str = "services:\n  app:\n    container_name: ${{PROJECT_NAME_CONTAINER}}\n    image: ${{IMAGE}}\n    ports:\n      - ${{PORT}}:${{PORT}}\n";

#[test]
fn test_round_trip() {
    let mut env = EnvironmentMap::new();
    env.insert("X", "v");
    let content = "a=${{X}}\nb=${{X}}${{X}}\n";

    assert_eq!(substitute_str(content, &env), "a=v\nb=vv\n");
}

#[test]
fn test_idempotent_on_unknown_tokens() {
    let mut env = EnvironmentMap::for_project("My Shop");
    env.insert("PORT", "8080");

    let once = substitute_str(COMPOSE, &env);
    let twice = substitute_str(&once, &env);

    assert_eq!(once, twice);
    assert!(once.contains("${{IMAGE}}"));
    assert!(once.contains("container_name: my-shop"));
    assert!(once.contains("- 8080:8080"));
}

#[test]
fn test_key_order_does_not_matter() {
    let mut forward = EnvironmentMap::new();
    forward.insert("A", "1");
    forward.insert("B", "2");
    let mut backward = EnvironmentMap::new();
    backward.insert("B", "2");
    backward.insert("A", "1");

    let content = "${{A}}-${{B}}-${{C}}";
    assert_eq!(substitute_str(content, &forward), substitute_str(content, &backward));
}

#[test]
fn test_substitute_file_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("docker-compose.yml");
    fs::write(&path, COMPOSE).unwrap();
    let mut env = EnvironmentMap::new();
    env.insert("IMAGE", "nginx:latest");

    substitute_file(&path, &env).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("image: nginx:latest"));
    assert!(content.contains("${{PORT}}"));
}

#[test]
fn test_missing_file_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("environment.env");

    substitute_file(&path, &EnvironmentMap::new()).unwrap();
    assert!(!path.exists());
}
