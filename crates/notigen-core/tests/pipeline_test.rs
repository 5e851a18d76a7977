//! End-to-end pipeline tests against a real (temporary) filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use notigen_core::{DiskStore, GenerateError, Generator, NotigenConfig};

const PLAYER: &str = r#"<?php

namespace App\Packages\Domain\Entities;

/**
 * Player Entity.
 */
class Player
{
    /**
     * @param int|null $score
     */
    public function __construct(
        private string $name,
        private ?int $score,
    ) {
    }
}
"#;

/// Helper: create a project tree containing one entity source.
fn project_with(class_name: &str, source: &str) -> tempfile::TempDir {
    let dir = tempfile::TempDir::new().unwrap();
    let entities = dir.path().join("app/Packages/Domain/Entities");
    fs::create_dir_all(&entities).unwrap();
    fs::write(entities.join(format!("{class_name}.php")), source).unwrap();
    dir
}

fn generator(root: &Path) -> Generator<DiskStore> {
    Generator::new(DiskStore::new(), root, NotigenConfig::default())
}

fn carrier_path(root: &Path, class_name: &str) -> PathBuf {
    root.join("app/Packages/Notification/Class")
        .join(format!("{class_name}DataModelBuilder.php"))
}

fn interface_path(root: &Path, class_name: &str) -> PathBuf {
    root.join("app/Packages/Notification/Interface")
        .join(format!("{class_name}NotifierInterface.php"))
}

#[test]
fn generates_carrier_interface_and_notify_method() {
    let dir = project_with("Player", PLAYER);
    let report = generator(dir.path()).generate("Player").unwrap();

    assert_eq!(report.field_count, 2);
    assert!(report.notify_injected);

    let carrier = fs::read_to_string(carrier_path(dir.path(), "Player")).unwrap();
    assert!(carrier.contains("namespace App\\Packages\\Notification\\Class;"));
    assert!(carrier.contains("class PlayerDataModelBuilder implements PlayerNotifierInterface"));
    assert!(carrier.contains("public function setName(string $name): void"));
    assert!(carrier.contains("public function setScore(?int $score): void"));
    assert!(carrier.contains(" * @param int|null $score"));
    assert!(carrier.contains(" * @param string $name"));
    assert!(carrier.contains("public function build(): PlayerDataModelBuilder"));

    let interface = fs::read_to_string(interface_path(dir.path(), "Player")).unwrap();
    assert!(interface.contains("namespace App\\Packages\\Notification\\Interface;"));
    assert!(interface.contains("use App\\Packages\\Notification\\Class\\PlayerDataModelBuilder;"));
    assert!(interface.contains("public function setName(string $name): void;"));
    assert!(interface.contains("public function setScore(?int $score): void;"));
    assert!(interface.contains("public function build(): PlayerDataModelBuilder;"));

    let entity = fs::read_to_string(report.entity_path).unwrap();
    assert!(entity.contains("use App\\Packages\\Notification\\Interface\\PlayerNotifierInterface;"));
    let notify_at = entity
        .find("public function notify(PlayerNotifierInterface $note): void")
        .unwrap();
    let name_call = entity.find("$note->setName($this->name);").unwrap();
    let score_call = entity.find("$note->setScore($this->score);").unwrap();
    assert!(notify_at < name_call && name_call < score_call);
}

#[test]
fn missing_source_reports_error_and_writes_nothing() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = generator(dir.path()).generate("Ghost").unwrap_err();
    assert!(matches!(err, GenerateError::MissingSource { .. }));
    assert!(!carrier_path(dir.path(), "Ghost").exists());
    assert!(!interface_path(dir.path(), "Ghost").exists());
}

#[test]
fn entity_without_fields_reports_error_and_writes_nothing() {
    let dir = project_with(
        "Bare",
        "<?php\n\nnamespace App\\Packages\\Domain\\Entities;\n\nclass Bare\n{\n}\n",
    );
    let err = generator(dir.path()).generate("Bare").unwrap_err();
    assert!(matches!(err, GenerateError::NoFields { .. }));
    assert!(!carrier_path(dir.path(), "Bare").exists());
    assert!(!interface_path(dir.path(), "Bare").exists());
}

#[test]
fn repeated_runs_are_idempotent_and_deterministic() {
    let dir = project_with("Player", PLAYER);
    let generator = generator(dir.path());

    let first = generator.generate("Player").unwrap();
    let entity_once = fs::read_to_string(&first.entity_path).unwrap();
    let carrier_once = fs::read_to_string(&first.carrier_path).unwrap();
    let interface_once = fs::read_to_string(&first.interface_path).unwrap();

    let second = generator.generate("Player").unwrap();
    assert!(first.notify_injected);
    assert!(!second.notify_injected);

    assert_eq!(fs::read_to_string(&second.entity_path).unwrap(), entity_once);
    assert_eq!(fs::read_to_string(&second.carrier_path).unwrap(), carrier_once);
    assert_eq!(
        fs::read_to_string(&second.interface_path).unwrap(),
        interface_once
    );

    // No duplicate method, no duplicate import.
    assert_eq!(entity_once.matches("public function notify(").count(), 1);
    assert_eq!(
        entity_once
            .matches("use App\\Packages\\Notification\\Interface\\PlayerNotifierInterface;")
            .count(),
        1
    );
}

#[test]
fn documented_types_resolve_against_existing_imports() {
    let source = r#"<?php

namespace App\Packages\Domain\Entities;

use Other\Package\Certification;

/**
 * @param Certification[]|null $certifications
 * @param Project[]|null       $projects
 */
class Engineer
{
    public function __construct(
        private ?array $certifications,
        private ?array $projects,
    ) {
    }
}
"#;
    let dir = project_with("Engineer", source);
    generator(dir.path()).generate("Engineer").unwrap();

    let carrier = fs::read_to_string(carrier_path(dir.path(), "Engineer")).unwrap();
    // The existing import satisfies the documented type; no duplicate.
    assert_eq!(carrier.matches("Certification;").count(), 1);
    assert!(carrier.contains("use Other\\Package\\Certification;"));
    // The undocumented bare name gets qualified with the entity namespace.
    assert!(carrier.contains("use App\\Packages\\Domain\\Entities\\Project;"));
}

#[test]
fn project_config_relocates_the_layout() {
    let dir = tempfile::TempDir::new().unwrap();
    let entities = dir.path().join("src/Domain");
    fs::create_dir_all(&entities).unwrap();
    fs::write(entities.join("Player.php"), PLAYER).unwrap();
    fs::write(
        dir.path().join("notigen.toml"),
        r#"
[layout]
entities_dir = "src/Domain"
carrier_dir = "src/Notification/Class"
interface_dir = "src/Notification/Interface"
"#,
    )
    .unwrap();

    let config = NotigenConfig::load(dir.path(), None).unwrap();
    let report = Generator::new(DiskStore::new(), dir.path(), config)
        .generate("Player")
        .unwrap();

    assert!(report
        .carrier_path
        .starts_with(dir.path().join("src/Notification/Class")));
    assert!(report.carrier_path.exists());
}
