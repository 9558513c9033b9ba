//! Pod readiness over `kubectl get pods -o json` output

use std::io::Read;

use serde::Deserialize;

/// Pod list as emitted by `kubectl get pods -o json`. Fields the tool never
/// looks at are ignored; the ones below are required.
#[derive(Debug, Deserialize)]
pub struct PodList {
    pub items: Vec<Pod>,
}

#[derive(Debug, Deserialize)]
pub struct Pod {
    pub status: PodStatus,
}

#[derive(Debug, Deserialize)]
pub struct PodStatus {
    pub phase: String,
    pub conditions: Vec<PodCondition>,
}

#[derive(Debug, Deserialize)]
pub struct PodCondition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
}

impl PodList {
    pub fn from_reader(reader: impl Read) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }
}

/// Count `Ready`/`True` conditions across running pods.
///
/// The count is per condition occurrence, not per pod: a pod carrying several
/// `Ready: True` entries contributes one per entry.
pub fn ready_condition_count(list: &PodList) -> usize {
    list.items
        .iter()
        .filter(|pod| pod.status.phase == "Running")
        .flat_map(|pod| &pod.status.conditions)
        .filter(|cond| cond.condition_type == "Ready" && cond.status == "True")
        .count()
}
