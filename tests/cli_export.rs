mod common;

use std::path::Path;

use common::*;

fn fox_env() -> TestEnv {
    TestEnv::new()
        .with_file("decl/fox.yml", FOX)
        .with_file("decl/fox_blue.yml", FOX_BLUE)
}

fn manifest(env: &TestEnv, relative: &str) -> serde_json::Value {
    serde_json::from_str(&env.read(relative)).unwrap()
}

#[test]
fn export_writes_one_manifest_per_entry() {
    let env = fox_env();

    let result = env.run(&["export", "decl/fox_blue.yml", "-o", "out"]);

    assert!(result.success, "{}", result.combined_output());
    for entry in ["base", "happy", "sad", "angry"] {
        assert!(
            env.project_path(&format!("out/fox_blue_{entry}.json")).is_file(),
            "missing manifest for {entry}"
        );
    }
    assert!(result.stdout.contains("Exported 4 entries of 'fox_blue'"));

    let happy = manifest(&env, "out/fox_blue_happy.json");
    assert_eq!(happy["origin"], serde_json::json!(["fox", "fox_blue"]));
    assert_eq!(happy["assets"].as_array().unwrap().len(), 1);
    assert_eq!(happy["assets"][0]["color"], "blue");
    let eye = happy["assets"][0]["src"].as_str().unwrap();
    assert!(Path::new(eye).ends_with("decl/eye.svg"), "{eye}");
    assert_eq!(happy["resize"], true);
}

#[test]
fn export_selected_names_and_reports_unknown_ones() {
    let env = fox_env();

    let result = env.run(&[
        "export",
        "decl/fox_blue.yml",
        "happy",
        "-e",
        "angry,hapy",
        "-o",
        "out",
    ]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.project_path("out/fox_blue_happy.json").is_file());
    assert!(env.project_path("out/fox_blue_angry.json").is_file());
    assert!(!env.project_path("out/fox_blue_sad.json").exists());
    assert!(result
        .stdout
        .contains("set 'fox_blue' has no entry 'hapy' (did you mean 'happy'?)"));
}

#[test]
fn export_uses_project_config_and_cli_overrides() {
    let env = fox_env().with_file(
        "decl/emotegen.toml",
        "[export]\noutput_dir = \"build\"\ndimensions = [64, 128]\n",
    );

    let from_config = env.run(&["export", "decl/fox.yml", "happy"]);
    assert!(from_config.success, "{}", from_config.combined_output());
    let happy = manifest(&env, "build/fox_happy.json");
    assert_eq!(happy["dimensions"], serde_json::json!([64, 128]));

    let overridden = env.run(&[
        "export",
        "decl/fox.yml",
        "happy",
        "--dim",
        "32",
        "--dim",
        "32",
        "--no-resize",
    ]);
    assert!(overridden.success, "{}", overridden.combined_output());
    let happy = manifest(&env, "build/fox_happy.json");
    assert_eq!(happy["dimensions"], serde_json::json!([32]));
    assert_eq!(happy["resize"], false);
}

#[test]
fn export_output_dir_from_environment() {
    let env = fox_env();

    let result = env.run_with_env(
        &["export", "decl/fox.yml", "sad"],
        &[("EMOTEGEN_OUTPUT_DIR", "env-out")],
    );

    assert!(result.success, "{}", result.combined_output());
    assert!(env.project_path("env-out/fox_sad.json").is_file());
}

#[test]
fn export_second_run_leaves_files_unchanged() {
    let env = fox_env();

    let first = env.run(&["export", "decl/fox.yml", "--json", "-o", "out"]);
    let second = env.run(&["export", "decl/fox.yml", "--json", "-o", "out"]);

    assert!(first.success && second.success);
    let first = &first.events()[0];
    let second = &second.events()[0];
    assert_eq!(first["event"], "export");
    assert!(first["rendered"]
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["written"] == true));
    assert!(second["rendered"]
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["written"] == false));
}

#[test]
fn export_of_unresolvable_declaration_fails() {
    let env = TestEnv::new().with_file("decl/fox_blue.yml", FOX_BLUE);

    let result = env.run(&["export", "decl/fox_blue.yml", "-o", "out"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("is based on 'fox'"));
    assert!(!env.project_path("out").exists());
}
