//! Upload resolution, preview synchronization, and the documented races.

use vitrine_editor::{RecordEditorFacade, UploadSyncAdapter, channel};
use vitrine_record::{AssetKind, PageEntry};

use crate::common::{ScriptedUpload, ScriptedUploader, image_file, init_tracing, pdf_file};

fn drain(receiver: &mut vitrine_editor::MsgReceiver, facade: &mut RecordEditorFacade) -> Vec<Result<(), vitrine_editor::UploadError>> {
	let mut outcomes = Vec::new();
	while let Ok(msg) = receiver.try_recv() {
		outcomes.push(msg.apply(facade));
	}
	outcomes
}

#[tokio::test]
async fn test_successful_upload_writes_entry_and_preview() {
	init_tracing();
	let mut facade = RecordEditorFacade::new();
	facade.pages().append(PageEntry::new);
	let (sender, mut receiver) = channel();
	let uploader = ScriptedUploader::new(vec![ScriptedUpload::ok(1, "https://cdn.example/u/1.png")]);
	let adapter = UploadSyncAdapter::new(uploader, sender, facade.liveness());

	adapter.begin_upload(1, image_file("cover.png")).await;
	let outcomes = drain(&mut receiver, &mut facade);
	assert_eq!(outcomes, vec![Ok(())]);
	assert_eq!(facade.record().pages[0].asset_ref, "https://cdn.example/u/1.png");
	assert_eq!(facade.record().pages[0].kind, AssetKind::Image);
	assert_eq!(facade.preview().get(1), Some("blob:cover.png"));
}

#[tokio::test]
async fn test_document_upload_overrides_kind_and_clears_preview() {
	let mut facade = RecordEditorFacade::new();
	facade.pages().append(PageEntry::new);
	let (sender, mut receiver) = channel();
	let uploader = ScriptedUploader::new(vec![ScriptedUpload::ok(1, "https://cdn.example/u/manual.pdf")]);
	let adapter = UploadSyncAdapter::new(uploader, sender, facade.liveness());

	adapter.begin_upload(1, pdf_file("manual.pdf")).await;
	drain(&mut receiver, &mut facade);
	// the placeholder kind is overridden by the resolved upload
	assert_eq!(facade.record().pages[0].kind, AssetKind::Document);
	assert_eq!(facade.preview().get(1), None);
}

#[tokio::test]
async fn test_failed_upload_leaves_entry_unchanged() {
	let mut facade = RecordEditorFacade::new();
	facade.pages().append(PageEntry::new);
	let (sender, mut receiver) = channel();
	let uploader = ScriptedUploader::new(vec![ScriptedUpload::err(1, "transport reset")]);
	let adapter = UploadSyncAdapter::new(uploader, sender, facade.liveness());

	adapter.begin_upload(1, image_file("cover.png")).await;
	let outcomes = drain(&mut receiver, &mut facade);
	assert_eq!(outcomes.len(), 1);
	assert!(outcomes[0].is_err());
	assert!(!facade.record().pages[0].has_asset());
	assert!(facade.preview().is_empty());
}

#[tokio::test]
async fn test_concurrent_uploads_to_different_entries_both_apply() {
	let mut facade = RecordEditorFacade::new();
	facade.pages().append(PageEntry::new);
	facade.pages().append(PageEntry::new);
	let (sender, mut receiver) = channel();
	let uploader = ScriptedUploader::new(vec![
		ScriptedUpload::ok(30, "https://cdn.example/u/1.png"),
		ScriptedUpload::ok(5, "https://cdn.example/u/2.png"),
	]);
	let adapter = UploadSyncAdapter::new(uploader, sender, facade.liveness());

	tokio::join!(
		adapter.begin_upload(1, image_file("one.png")),
		adapter.begin_upload(2, image_file("two.png")),
	);
	drain(&mut receiver, &mut facade);
	assert_eq!(facade.record().pages[0].asset_ref, "https://cdn.example/u/1.png");
	assert_eq!(facade.record().pages[1].asset_ref, "https://cdn.example/u/2.png");
}

#[tokio::test]
async fn test_same_entry_last_resolution_wins() {
	let mut facade = RecordEditorFacade::new();
	facade.pages().append(PageEntry::new);
	let (sender, mut receiver) = channel();
	// initiated first, resolves last
	let uploader = ScriptedUploader::new(vec![
		ScriptedUpload::ok(30, "https://cdn.example/u/slow.png"),
		ScriptedUpload::ok(5, "https://cdn.example/u/fast.png"),
	]);
	let adapter = UploadSyncAdapter::new(uploader, sender, facade.liveness());

	tokio::join!(
		adapter.begin_upload(1, image_file("slow.png")),
		adapter.begin_upload(1, image_file("fast.png")),
	);
	drain(&mut receiver, &mut facade);
	// last writer by resolution order, not initiation order
	assert_eq!(facade.record().pages[0].asset_ref, "https://cdn.example/u/slow.png");
}

#[tokio::test]
async fn test_resolution_for_removed_page_is_dropped() {
	let mut facade = RecordEditorFacade::new();
	facade.pages().append(PageEntry::new);
	facade.pages().append(PageEntry::new);
	let (sender, mut receiver) = channel();
	let uploader = ScriptedUploader::new(vec![ScriptedUpload::ok(10, "https://cdn.example/u/2.png")]);
	let adapter = UploadSyncAdapter::new(uploader, sender, facade.liveness());

	let upload = adapter.begin_upload(2, image_file("two.png"));
	// the collection mutates while the upload is in flight
	facade.pages().remove_at(0);
	facade.pages().remove_at(0);
	upload.await;

	let outcomes = drain(&mut receiver, &mut facade);
	assert_eq!(outcomes, vec![Ok(())]);
	assert!(facade.record().pages.is_empty());
}

#[tokio::test]
async fn test_in_flight_renumbering_retargets_write() {
	let mut facade = RecordEditorFacade::new();
	facade.pages().append(PageEntry::new);
	facade.pages().append(PageEntry::new);
	let (sender, mut receiver) = channel();
	let uploader = ScriptedUploader::new(vec![ScriptedUpload::ok(10, "https://cdn.example/u/a.png")]);
	let adapter = UploadSyncAdapter::new(uploader, sender, facade.liveness());

	// upload initiated for the entry at position 1, which then moves down
	let upload = adapter.begin_upload(1, image_file("a.png"));
	facade.pages().move_at(0, vitrine_editor::MoveDirection::Down);
	upload.await;
	drain(&mut receiver, &mut facade);

	// the write landed at the captured position, which now names a different
	// logical entry; the position race is accepted behavior
	assert_eq!(facade.record().pages[0].asset_ref, "https://cdn.example/u/a.png");
	assert!(!facade.record().pages[1].has_asset());
}

#[tokio::test]
async fn test_resolution_after_close_is_noop() {
	let mut facade = RecordEditorFacade::new();
	facade.pages().append(PageEntry::new);
	let (sender, mut receiver) = channel();
	let uploader = ScriptedUploader::new(vec![ScriptedUpload::ok(50, "https://cdn.example/u/late.png")]);
	let adapter = UploadSyncAdapter::new(uploader, sender, facade.liveness());

	let upload = adapter.begin_upload(1, image_file("late.png"));
	facade.close();
	upload.await;

	assert!(receiver.try_recv().is_err());
	assert!(!facade.record().pages[0].has_asset());
}
