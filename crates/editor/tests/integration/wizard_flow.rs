//! End-to-end wizard navigation and submit hand-off.

use std::sync::atomic::Ordering;

use vitrine_editor::{RecordEditorFacade, Step, WizardController};
use vitrine_record::RecordPatch;

use crate::common::{CountingSubmitter, init_tracing, ready_source};

#[tokio::test]
async fn test_submit_only_from_terminal_step() {
	init_tracing();
	let mut facade = RecordEditorFacade::new();
	facade.hydrate(ready_source());
	let mut wizard = WizardController::new();
	let submitter = CountingSubmitter::default();

	// off-terminal submit is a silent no-op
	let handed_off = wizard.submit(&facade, &submitter).await.unwrap();
	assert!(!handed_off);
	assert_eq!(submitter.calls.load(Ordering::SeqCst), 0);

	while wizard.active() != Step::Pages {
		assert!(wizard.next(&facade));
	}
	let handed_off = wizard.submit(&facade, &submitter).await.unwrap();
	assert!(handed_off);
	assert_eq!(submitter.calls.load(Ordering::SeqCst), 1);
	// submit does not advance or reset state
	assert_eq!(wizard.active(), Step::Pages);
}

#[tokio::test]
async fn test_submit_failure_keeps_state_for_retry() {
	let mut facade = RecordEditorFacade::new();
	facade.hydrate(ready_source());
	let mut wizard = WizardController::new();
	while wizard.active() != Step::Pages {
		wizard.next(&facade);
	}
	let submitter = CountingSubmitter::failing();

	assert!(wizard.submit(&facade, &submitter).await.is_err());
	assert_eq!(wizard.active(), Step::Pages);
	assert_eq!(facade.record().title, "Field guide to shorebirds");

	// the user may retry in place
	assert!(wizard.submit(&facade, &submitter).await.is_err());
	assert_eq!(submitter.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_gate_blocks_until_required_fields_fixed() {
	let mut facade = RecordEditorFacade::new();
	facade.hydrate(ready_source());
	facade.patch(RecordPatch {
		title: Some(String::new()),
		..RecordPatch::default()
	});
	let mut wizard = WizardController::new();

	assert!(!wizard.next(&facade));
	assert_eq!(wizard.active(), Step::Info);

	facade.patch(RecordPatch {
		title: Some("Field guide to shorebirds".into()),
		..RecordPatch::default()
	});
	// once satisfied, next always advances
	assert!(wizard.next(&facade));
	assert_eq!(wizard.active(), Step::Links);
	assert!(wizard.back());
	assert!(wizard.next(&facade));
}

#[tokio::test]
async fn test_assembled_payload_uses_join_rows() {
	let mut facade = RecordEditorFacade::new();
	facade.hydrate(ready_source());
	facade.add_link("tag-field");
	facade.add_link("tag-field");

	let payload = facade.assemble();
	let json = serde_json::to_value(&payload).unwrap();
	assert_eq!(json["links"][0]["targetId"], "tag-birds");
	assert_eq!(json["links"][1]["targetId"], "tag-field");
	assert_eq!(json["links"].as_array().unwrap().len(), 2);
}
