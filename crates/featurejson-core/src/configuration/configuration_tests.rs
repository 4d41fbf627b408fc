#![allow(non_snake_case)]

use super::*;

fn artifact(id: &str) -> Artifact {
    Artifact::new(ArtifactId::parse(id).unwrap())
}

#[test]
fn Configuration___new___name_is_pid() {
    let cfg = Configuration::new("org.example.Service");

    assert_eq!(cfg.name(), "org.example.Service");
    assert!(!cfg.is_factory());
}

#[test]
fn Configuration___factory___name_joins_pid_and_alias() {
    let cfg = Configuration::factory("org.example.Factory", "main");

    assert_eq!(cfg.name(), "org.example.Factory~main");
    assert_eq!(cfg.pid(), "org.example.Factory");
    assert_eq!(cfg.factory_alias(), Some("main"));
}

#[test]
fn Configuration___parse_name___splits_factory_alias() {
    let cfg = Configuration::parse_name("f.pid~alias~with~tilde").unwrap();

    assert_eq!(cfg.pid(), "f.pid");
    assert_eq!(cfg.factory_alias(), Some("alias~with~tilde"));
}

#[test]
fn Configuration___parse_name___rejects_empty_parts() {
    assert!(Configuration::parse_name("").is_err());
    assert!(Configuration::parse_name("~alias").is_err());
    assert!(Configuration::parse_name("pid~").is_err());
}

#[test]
fn Configuration___scoped_to___sets_artifact_ref() {
    let id = ArtifactId::parse("g:a:1").unwrap();

    let cfg = Configuration::new("pid").scoped_to(&id);

    assert_eq!(cfg.artifact_ref(), Some("g:a:1"));
}

#[test]
fn Configuration___artifact_ref___ignores_non_string_property() {
    let cfg = Configuration::new("pid").with_property(Configuration::PROP_ARTIFACT_ID, 5i64);

    assert_eq!(cfg.artifact_ref(), None);
}

#[test]
fn Configuration___configuration_properties___skip_artifact_scope() {
    let cfg = Configuration::new("pid")
        .with_property("port", 8080i32)
        .scoped_to(&ArtifactId::parse("g:a:1").unwrap());

    let keys: Vec<&String> = cfg.configuration_properties().map(|(k, _)| k).collect();

    assert_eq!(keys, vec!["port"]);
    assert_eq!(cfg.properties().len(), 2);
}

#[test]
fn resolve_artifact___matching_id___returns_artifact() {
    let artifacts = vec![artifact("g:a:1"), artifact("g:b:1")];
    let cfg = Configuration::new("pid").scoped_to(artifacts[1].id());

    let resolved = resolve_artifact(&cfg, &artifacts);

    assert_eq!(resolved.map(|a| a.id().to_mvn_id()), Some("g:b:1".to_string()));
}

#[test]
fn resolve_artifact___dangling_reference___returns_none() {
    let artifacts = vec![artifact("g:a:1")];
    let cfg = Configuration::new("pid").scoped_to(&ArtifactId::parse("g:a:2").unwrap());

    assert!(resolve_artifact(&cfg, &artifacts).is_none());
}

#[test]
fn resolve_artifact___unscoped___returns_none() {
    let artifacts = vec![artifact("g:a:1")];

    assert!(resolve_artifact(&Configuration::new("pid"), &artifacts).is_none());
}
