//! Domain document operations
//!
//! A domain document is the WebLogic domain custom resource: `metadata` with
//! the `weblogic.domainUID` label, `spec` with the image, the log home, and a
//! clusters sequence. Test-domain generation rewrites a handful of fields in
//! a template copy and leaves everything else alone.

use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use crate::document::{self, DocumentError, DocumentResult};
use crate::metadata::{MetadataResult, ProvisioningMetadata};

/// Label carrying the domain uid on every domain resource.
pub const DOMAIN_UID_LABEL: &str = "weblogic.domainUID";

/// Identifier pair for a generated test domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDomainNames {
    pub domain_uid: String,
    pub namespace: String,
}

impl TestDomainNames {
    /// Derive test identifiers from provisioning metadata: the running
    /// domain's uid and namespace with the test suffix appended.
    pub fn from_metadata(meta: &ProvisioningMetadata, suffix: &str) -> MetadataResult<Self> {
        let domain_uid = format!("{}{}", meta.attribute("wls_domain_uid")?, suffix);
        let namespace = format!("{}{}", meta.attribute("wls_domain_namespace")?, suffix);
        Ok(Self {
            domain_uid,
            namespace,
        })
    }
}

/// `spec.clusters[0].replicas` of a domain document.
pub fn replica_count(doc: &Value) -> DocumentResult<u64> {
    document::get_u64(doc, "spec.clusters[0].replicas")
}

/// Rewrite `template` into the test-domain variant.
///
/// Sets the name, uid label and namespace from `names`, pins the first
/// cluster to `replicas`, points `spec.logHome` at a per-test-domain
/// subdirectory of the running domain's log home, and swaps in `image`.
pub fn build_test_domain(
    template: &mut Value,
    running: &Value,
    names: &TestDomainNames,
    image: &str,
    replicas: u64,
) -> DocumentResult<()> {
    let log_home = document::get_str(running, "spec.logHome")?;
    let test_log_home = Path::new(log_home)
        .join(&names.domain_uid)
        .to_string_lossy()
        .into_owned();
    debug!(
        uid = %names.domain_uid,
        namespace = %names.namespace,
        log_home = %test_log_home,
        "rewriting domain template"
    );

    document::set(
        template,
        "metadata.name",
        Value::from(names.domain_uid.as_str()),
    )?;
    document::set(
        template,
        "metadata.namespace",
        Value::from(names.namespace.as_str()),
    )?;

    // The uid label key contains a dot, so it cannot go through a dotted path.
    let labels = document::get_mut(template, "metadata.labels")?
        .as_mapping_mut()
        .ok_or_else(|| DocumentError::WrongType {
            path: "metadata.labels".to_string(),
            expected: "a mapping",
        })?;
    labels.insert(
        Value::from(DOMAIN_UID_LABEL),
        Value::from(names.domain_uid.as_str()),
    );

    document::set(template, "spec.clusters[0].replicas", Value::from(replicas))?;
    document::set(template, "spec.logHome", Value::from(test_log_home))?;
    document::set(template, "spec.image", Value::from(image))?;
    Ok(())
}
