use std::fs;
use std::path::PathBuf;

use rstest::{fixture, rstest};
use tempfile::tempdir;

use domtool::document::{self, DocumentError};
use domtool::domain::{build_test_domain, replica_count, TestDomainNames, DOMAIN_UID_LABEL};
use domtool::metadata::ProvisioningMetadata;
use domtool::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[fixture]
fn temp_dir() -> PathBuf {
    let tempdir = tempdir().unwrap();
    for name in [
        "running-domain.yaml",
        "test-domain-template.yaml",
        "provisioning-metadata.json",
    ] {
        fs::copy(
            PathBuf::from("tests/resources/domain").join(name),
            tempdir.path().join(name),
        )
        .expect("Failed to copy test resources");
    }
    tempdir.into_path()
}

#[rstest]
fn test_replica_count(temp_dir: PathBuf) {
    let doc = document::load_yaml(&temp_dir.join("running-domain.yaml")).unwrap();
    assert_eq!(replica_count(&doc).unwrap(), 2);
}

#[rstest]
fn test_replica_count_without_clusters() {
    let doc = serde_yaml::from_str("spec: {logHome: /shared/logs}").unwrap();
    let err = replica_count(&doc).unwrap_err();
    assert_eq!(err.to_string(), "missing field: spec.clusters");
}

#[rstest]
fn test_names_from_metadata(temp_dir: PathBuf) {
    let meta = ProvisioningMetadata::load(&temp_dir.join("provisioning-metadata.json")).unwrap();
    let names = TestDomainNames::from_metadata(&meta, "-test").unwrap();
    assert_eq!(names.domain_uid, "mydomain-test");
    assert_eq!(names.namespace, "myns-test");
}

#[rstest]
fn test_build_test_domain_rewrites_expected_fields(temp_dir: PathBuf) {
    let meta = ProvisioningMetadata::load(&temp_dir.join("provisioning-metadata.json")).unwrap();
    let names = TestDomainNames::from_metadata(&meta, "-test").unwrap();
    let running = document::load_yaml(&temp_dir.join("running-domain.yaml")).unwrap();
    let mut template = document::load_yaml(&temp_dir.join("test-domain-template.yaml")).unwrap();

    build_test_domain(
        &mut template,
        &running,
        &names,
        "phx.ocir.io/tenancy/mydomain:v2",
        1,
    )
    .unwrap();

    assert_eq!(
        document::get_str(&template, "metadata.name").unwrap(),
        "mydomain-test"
    );
    assert_eq!(
        document::get_str(&template, "metadata.namespace").unwrap(),
        "myns-test"
    );
    assert_eq!(
        document::get_u64(&template, "spec.clusters[0].replicas").unwrap(),
        1
    );
    assert_eq!(
        document::get_str(&template, "spec.logHome").unwrap(),
        "/shared/logs/mydomain-test"
    );
    assert_eq!(
        document::get_str(&template, "spec.image").unwrap(),
        "phx.ocir.io/tenancy/mydomain:v2"
    );

    let labels = document::get(&template, "metadata.labels").unwrap();
    assert_eq!(
        labels.get(DOMAIN_UID_LABEL).and_then(|v| v.as_str()),
        Some("mydomain-test")
    );
}

#[rstest]
fn test_build_test_domain_leaves_other_fields_alone(temp_dir: PathBuf) {
    let meta = ProvisioningMetadata::load(&temp_dir.join("provisioning-metadata.json")).unwrap();
    let names = TestDomainNames::from_metadata(&meta, "-test").unwrap();
    let running = document::load_yaml(&temp_dir.join("running-domain.yaml")).unwrap();
    let mut template = document::load_yaml(&temp_dir.join("test-domain-template.yaml")).unwrap();
    let before = template.clone();

    build_test_domain(&mut template, &running, &names, "img:v2", 1).unwrap();

    for path in [
        "spec.domainHome",
        "spec.webLogicCredentialsSecret.name",
        "spec.clusters[0].clusterName",
        "spec.clusters[0].serverStartState",
    ] {
        assert_eq!(
            document::get(&template, path).unwrap(),
            document::get(&before, path).unwrap(),
            "{path} should not change"
        );
    }
}

#[rstest]
fn test_build_test_domain_is_deterministic(temp_dir: PathBuf) {
    let meta = ProvisioningMetadata::load(&temp_dir.join("provisioning-metadata.json")).unwrap();
    let names = TestDomainNames::from_metadata(&meta, "-test").unwrap();
    let running = document::load_yaml(&temp_dir.join("running-domain.yaml")).unwrap();

    let mut first = document::load_yaml(&temp_dir.join("test-domain-template.yaml")).unwrap();
    let mut second = document::load_yaml(&temp_dir.join("test-domain-template.yaml")).unwrap();
    build_test_domain(&mut first, &running, &names, "img:v2", 1).unwrap();
    build_test_domain(&mut second, &running, &names, "img:v2", 1).unwrap();

    assert_eq!(first, second);
}

#[rstest]
fn test_build_test_domain_requires_labels() {
    let running = serde_yaml::from_str("spec: {logHome: /shared/logs}").unwrap();
    let mut template = serde_yaml::from_str(
        r#"
        metadata:
          name: mydomain
          namespace: myns
        spec:
          clusters:
            - replicas: 2
        "#,
    )
    .unwrap();
    let names = TestDomainNames {
        domain_uid: "mydomain-test".to_string(),
        namespace: "myns-test".to_string(),
    };

    let err = build_test_domain(&mut template, &running, &names, "img:v2", 1).unwrap_err();
    assert!(matches!(err, DocumentError::MissingField { ref path } if path == "metadata.labels"));
}

#[rstest]
fn test_build_test_domain_requires_running_log_home() {
    let running = serde_yaml::from_str("spec: {image: 'img:v1'}").unwrap();
    let mut template = serde_yaml::from_str("metadata: {name: x}").unwrap();
    let names = TestDomainNames {
        domain_uid: "mydomain-test".to_string(),
        namespace: "myns-test".to_string(),
    };

    let err = build_test_domain(&mut template, &running, &names, "img:v2", 1).unwrap_err();
    assert_eq!(err.to_string(), "missing field: spec.logHome");
}
