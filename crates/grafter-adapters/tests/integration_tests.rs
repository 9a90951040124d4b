//! Integration tests for the editor and registrar over real adapters.

use std::path::Path;

use grafter_adapters::{LocalFileTree, MemoryFileTree, NoopFormatter, NoopInstaller};
use grafter_core::{
    application::{ApplicationError, ManifestEditor, PluginRegistrar, Registration},
    domain::{Manifest, Section},
    error::GraftError,
};

fn editor_over(tree: &MemoryFileTree) -> ManifestEditor {
    ManifestEditor::new(
        Box::new(tree.clone()),
        Box::new(NoopInstaller::new()),
        Box::new(NoopFormatter::new()),
    )
}

fn manifest_at(tree: &MemoryFileTree, path: &str) -> Manifest {
    use grafter_core::application::ports::FileTree;
    let text = tree.read_file(Path::new(path)).unwrap().expect("manifest written");
    Manifest::parse(&text).unwrap()
}

// ── manifest editor ──────────────────────────────────────────────────────────

#[test]
fn merge_keeps_existing_dev_dependencies() {
    let tree = MemoryFileTree::new();
    tree.seed_file(
        Path::new("package.json"),
        r#"{"devDependencies": {"a": "1.0.0"}}"#,
    );

    editor_over(&tree)
        .add_dev_dependency("b", "2.0.0")
        .persist()
        .unwrap();

    let manifest = manifest_at(&tree, "package.json");
    let dev = manifest.section(Section::Development).unwrap();
    assert_eq!(dev["a"], "1.0.0");
    assert_eq!(dev["b"], "2.0.0");
}

#[test]
fn collision_resolves_to_last_write() {
    let tree = MemoryFileTree::new();
    editor_over(&tree)
        .add_dependency("x", "1.0.0")
        .add_dependency("x", "2.0.0")
        .persist()
        .unwrap();

    let manifest = manifest_at(&tree, "package.json");
    let deps = manifest.section(Section::Production).unwrap();
    assert_eq!(deps.len(), 1);
    assert_eq!(deps["x"], "2.0.0");
}

#[test]
fn missing_manifest_created_with_staged_sets_only() {
    let tree = MemoryFileTree::new();
    tree.create_dir_all(Path::new("apps/api"));

    editor_over(&tree)
        .target("apps/api/package.json")
        .add_dependency("express", "^4.18.0")
        .add_dev_dependency("jest", "*")
        .persist()
        .unwrap();

    let manifest = manifest_at(&tree, "apps/api/package.json");
    assert_eq!(
        manifest.section(Section::Production).unwrap()["express"],
        "^4.18.0"
    );
    assert_eq!(manifest.section(Section::Development).unwrap()["jest"], "*");
}

#[test]
fn missing_parent_directory_fails_without_creating_anything() {
    let tree = MemoryFileTree::new();
    let err = editor_over(&tree)
        .target("apps/api/package.json")
        .add_dependency("express", "*")
        .persist()
        .unwrap_err();

    assert!(matches!(
        err,
        GraftError::Application(ApplicationError::ManifestNotFound { .. })
    ));
    assert!(tree.list_files().is_empty());
}

#[test]
fn clear_then_persist_leaves_sections_unchanged() {
    let before = r#"{"name": "demo", "dependencies": {"kept": "1.0.0"}}"#;
    let tree = MemoryFileTree::new();
    tree.seed_file(Path::new("package.json"), before);

    editor_over(&tree)
        .add_dependency("dropped", "9.9.9")
        .add_dev_dependency("also-dropped", "*")
        .clear()
        .persist()
        .unwrap();

    let manifest = manifest_at(&tree, "package.json");
    let deps = manifest.section(Section::Production).unwrap();
    assert_eq!(deps.len(), 1);
    assert_eq!(deps["kept"], "1.0.0");
    assert!(manifest.section(Section::Development).is_none());
}

#[test]
fn unknown_top_level_fields_survive_the_round_trip() {
    let tree = MemoryFileTree::new();
    tree.seed_file(
        Path::new("package.json"),
        r#"{"name": "demo", "scripts": {"test": "jest"}, "workspaces": ["libs/*"]}"#,
    );

    editor_over(&tree)
        .add_dev_dependency("@nestjs/graphql", "*")
        .persist()
        .unwrap();

    let manifest = manifest_at(&tree, "package.json");
    assert_eq!(*manifest.field("name").unwrap(), "demo");
    assert_eq!(manifest.field("scripts").unwrap()["test"], "jest");
    assert_eq!(manifest.field("workspaces").unwrap()[0], "libs/*");
}

#[test]
fn root_and_nested_manifests_both_written_in_call_order() {
    let tree = MemoryFileTree::new();
    tree.create_dir_all(Path::new("libs/feature"));

    editor_over(&tree)
        .add_dev_dependency("gherkin-io", "*")
        .persist()
        .unwrap();
    editor_over(&tree)
        .target("libs/feature/package.json")
        .add_dev_dependency("@cucumber/messages", "*")
        .persist()
        .unwrap();

    assert!(manifest_at(&tree, "package.json")
        .section(Section::Development)
        .unwrap()
        .contains_key("gherkin-io"));
    assert!(manifest_at(&tree, "libs/feature/package.json")
        .section(Section::Development)
        .unwrap()
        .contains_key("@cucumber/messages"));
}

#[test]
fn local_tree_create_or_update_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = dir.path().join("package.json");

    let editor = ManifestEditor::new(
        Box::new(LocalFileTree::new()),
        Box::new(NoopInstaller::new()),
        Box::new(NoopFormatter::new()),
    )
    .target(&manifest_path)
    .add_dependency("react", "^18.0.0");
    editor.persist().unwrap();

    // Second edit merges into the file created by the first.
    let editor = ManifestEditor::new(
        Box::new(LocalFileTree::new()),
        Box::new(NoopInstaller::new()),
        Box::new(NoopFormatter::new()),
    )
    .target(&manifest_path)
    .add_dependency("react-dom", "^18.0.0");
    editor.persist().unwrap();

    let text = std::fs::read_to_string(&manifest_path).unwrap();
    let manifest = Manifest::parse(&text).unwrap();
    let deps = manifest.section(Section::Production).unwrap();
    assert_eq!(deps["react"], "^18.0.0");
    assert_eq!(deps["react-dom"], "^18.0.0");
    assert!(text.ends_with('\n'));
}

// ── plugin registrar ─────────────────────────────────────────────────────────

#[test]
fn register_twice_yields_exactly_one_entry_with_first_options() {
    let tree = MemoryFileTree::new();
    tree.seed_file(Path::new("workspace.json"), r#"{"plugins": []}"#);

    let mut first = PluginRegistrar::load(
        Box::new(tree.clone()),
        "workspace.json",
        "@scope/x-prisma",
    )
    .unwrap()
    .with_option("schema", "./prisma/schema.prisma".into());
    assert_eq!(first.register().unwrap(), Registration::Added);

    // A fresh registrar over the updated file must see the entry and keep
    // the first call's options.
    let mut second = PluginRegistrar::load(
        Box::new(tree.clone()),
        "workspace.json",
        "@scope/x-prisma",
    )
    .unwrap()
    .with_option("schema", "./changed.prisma".into());
    assert!(second.is_registered());
    assert_eq!(second.register().unwrap(), Registration::AlreadyRegistered);

    use grafter_core::application::ports::FileTree;
    let text = tree.read_file(Path::new("workspace.json")).unwrap().unwrap();
    let registry = grafter_core::domain::Registry::parse(&text).unwrap();
    let entries = registry.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["options"]["schema"], "./prisma/schema.prisma");
}

#[test]
fn detection_symmetry_between_entry_forms() {
    let tree = MemoryFileTree::new();
    tree.seed_file(
        Path::new("workspace.json"),
        r#"{"plugins": ["@scope/bare", {"plugin": "@scope/object", "options": {}}]}"#,
    );

    let bare =
        PluginRegistrar::load(Box::new(tree.clone()), "workspace.json", "@scope/bare").unwrap();
    let object =
        PluginRegistrar::load(Box::new(tree.clone()), "workspace.json", "@scope/object").unwrap();
    assert!(bare.is_registered());
    assert!(object.is_registered());
}

#[test]
fn registry_created_when_missing() {
    let tree = MemoryFileTree::new();
    let mut registrar =
        PluginRegistrar::load(Box::new(tree.clone()), "workspace.json", "@scope/x-utils").unwrap();
    assert_eq!(registrar.register().unwrap(), Registration::Added);

    use grafter_core::application::ports::FileTree;
    let text = tree.read_file(Path::new("workspace.json")).unwrap().unwrap();
    let registry = grafter_core::domain::Registry::parse(&text).unwrap();
    assert!(registry.contains("@scope/x-utils"));
}

#[test]
fn registry_preserves_unrelated_fields() {
    let tree = MemoryFileTree::new();
    tree.seed_file(
        Path::new("workspace.json"),
        r#"{"npmScope": "demo", "affected": {"defaultBase": "main"}, "plugins": []}"#,
    );

    let mut registrar =
        PluginRegistrar::load(Box::new(tree.clone()), "workspace.json", "@scope/p").unwrap();
    registrar.register().unwrap();

    use grafter_core::application::ports::FileTree;
    let text = tree.read_file(Path::new("workspace.json")).unwrap().unwrap();
    assert!(text.contains("npmScope"));
    assert!(text.contains("defaultBase"));
}

// ── generator-style composition ──────────────────────────────────────────────

// The shape every init generator takes: register the plugin, then add the
// dev dependencies it needs, against the same tree.
#[test]
fn init_flow_registers_plugin_and_adds_dev_dependency() {
    let tree = MemoryFileTree::new();
    tree.seed_file(Path::new("workspace.json"), r#"{"plugins": []}"#);
    tree.seed_file(Path::new("package.json"), r#"{"name": "workspace-root"}"#);

    let mut registrar = PluginRegistrar::load(
        Box::new(tree.clone()),
        "workspace.json",
        "@scope/x-prisma",
    )
    .unwrap()
    .with_option("outputPath", "./generated".into());
    registrar.register().unwrap();

    editor_over(&tree)
        .add_dev_dependency("prisma-generator-typescript-interfaces", "*")
        .persist()
        .unwrap();

    use grafter_core::application::ports::FileTree;
    let registry_text = tree.read_file(Path::new("workspace.json")).unwrap().unwrap();
    assert!(registry_text.contains("@scope/x-prisma"));

    let manifest = manifest_at(&tree, "package.json");
    assert!(manifest
        .section(Section::Development)
        .unwrap()
        .contains_key("prisma-generator-typescript-interfaces"));
    assert_eq!(*manifest.field("name").unwrap(), "workspace-root");
}
