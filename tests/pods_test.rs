use rstest::rstest;

use domtool::pods::{ready_condition_count, PodList};
use domtool::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn parse(json: &str) -> PodList {
    PodList::from_reader(json.as_bytes()).unwrap()
}

#[rstest]
fn test_one_running_ready_pod_among_two() {
    let list = parse(
        r#"{
            "items": [
                {
                    "metadata": {"name": "mydomain-managed-server1"},
                    "status": {
                        "phase": "Running",
                        "conditions": [
                            {"type": "Initialized", "status": "True"},
                            {"type": "Ready", "status": "True"}
                        ]
                    }
                },
                {
                    "metadata": {"name": "mydomain-managed-server2"},
                    "status": {
                        "phase": "Pending",
                        "conditions": [
                            {"type": "PodScheduled", "status": "True"}
                        ]
                    }
                }
            ]
        }"#,
    );
    assert_eq!(ready_condition_count(&list), 1);
}

#[rstest]
fn test_running_but_not_ready_counts_zero() {
    let list = parse(
        r#"{
            "items": [
                {"status": {"phase": "Running", "conditions": [{"type": "Ready", "status": "False"}]}}
            ]
        }"#,
    );
    assert_eq!(ready_condition_count(&list), 0);
}

#[rstest]
fn test_ready_but_not_running_counts_zero() {
    let list = parse(
        r#"{
            "items": [
                {"status": {"phase": "Succeeded", "conditions": [{"type": "Ready", "status": "True"}]}}
            ]
        }"#,
    );
    assert_eq!(ready_condition_count(&list), 0);
}

// Counting is per condition occurrence: a pod with duplicated Ready entries
// contributes one per entry.
#[rstest]
fn test_duplicate_ready_conditions_count_each() {
    let list = parse(
        r#"{
            "items": [
                {"status": {"phase": "Running", "conditions": [
                    {"type": "Ready", "status": "True"},
                    {"type": "Ready", "status": "True"}
                ]}}
            ]
        }"#,
    );
    assert_eq!(ready_condition_count(&list), 2);
}

#[rstest]
fn test_empty_items() {
    let list = parse(r#"{"items": []}"#);
    assert_eq!(ready_condition_count(&list), 0);
}

#[rstest]
fn test_missing_items_is_an_error() {
    assert!(PodList::from_reader(r#"{"kind": "List"}"#.as_bytes()).is_err());
}

#[rstest]
fn test_missing_conditions_is_an_error() {
    let result = PodList::from_reader(
        r#"{"items": [{"status": {"phase": "Running"}}]}"#.as_bytes(),
    );
    assert!(result.is_err());
}

#[rstest]
fn test_invalid_json_is_an_error() {
    assert!(PodList::from_reader("not json at all".as_bytes()).is_err());
}
