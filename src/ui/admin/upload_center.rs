// src/ui/admin/upload_center.rs - Drag-drop batch image uploads with per-file progress

use std::sync::Arc;

use chrono::Utc;
use dioxus::html::FileEngine;
use dioxus::html::HasFileData;
use dioxus::prelude::*;

use crate::api::admin::UploadCategory;
use crate::api::ApiClient;
use crate::session::AdminSession;
use crate::ui::admin::report_failure;
use crate::ui::state::{use_api, use_notifier, use_session, Notifier};
use crate::uploads::{
    format_file_size, screen_files, BatchSummary, GalleryImage, UploadProgress, UploadStatus,
};

/// How long settled progress entries stay visible.
const PROGRESS_CLEAR_DELAY_MS: u64 = 2000;

#[component]
pub fn UploadCenter() -> Element {
    let api = use_api();
    let session = use_session();
    let notifier = use_notifier();

    let progress = use_signal(Vec::<UploadProgress>::new);
    let mut gallery = use_signal(Vec::<GalleryImage>::new);
    let uploading = use_signal(|| false);
    let mut drag_active = use_signal(|| false);

    let process_engine = {
        let api = api.clone();
        move |engine: Arc<dyn FileEngine>| {
            let api = api.clone();
            spawn(async move {
                let mut picked = Vec::new();
                for name in engine.files() {
                    if let Some(bytes) = engine.read_file(&name).await {
                        picked.push((name, bytes));
                    }
                }
                run_batch(api, notifier, session, progress, gallery, uploading, picked).await;
            });
        }
    };

    let on_file_input = {
        let process = process_engine.clone();
        move |e: Event<FormData>| {
            if let Some(engine) = e.files() {
                process(engine);
            }
        }
    };

    let on_drop = {
        let process = process_engine.clone();
        move |e: Event<DragData>| {
            e.prevent_default();
            drag_active.set(false);
            if let Some(engine) = e.files() {
                process(engine);
            }
        }
    };

    let copy_url = move |url: String| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(&url);
            }
            notifier.success("Copied!", "Image URL copied to clipboard");
        }
        #[cfg(not(target_arch = "wasm32"))]
        notifier.info("Image URL", url);
    };

    let drop_zone_class = if drag_active() {
        "relative border-2 border-dashed rounded-lg p-8 text-center transition-colors border-black bg-gray-50"
    } else {
        "relative border-2 border-dashed rounded-lg p-8 text-center transition-colors border-gray-300 hover:border-gray-400"
    };
    let drop_hint = if uploading() {
        "Uploading..."
    } else if drag_active() {
        "Drop images here"
    } else {
        "Drag & drop images here"
    };
    let gallery_count = gallery().len();

    rsx! {
        div {
            class: "space-y-6",

            div {
                h1 {
                    class: "text-2xl font-bold text-gray-900",
                    "Image Upload Center"
                }
                p {
                    class: "text-gray-600 mt-2",
                    "Upload and manage product images. Supported formats: JPEG, PNG, WebP (max 10MB each)"
                }
            }

            // Drop zone
            div {
                class: "bg-white rounded-lg shadow-sm border p-6",
                div {
                    class: drop_zone_class,
                    ondragover: move |e| {
                        e.prevent_default();
                        drag_active.set(true);
                    },
                    ondragleave: move |_| drag_active.set(false),
                    ondrop: on_drop,

                    input {
                        r#type: "file",
                        multiple: true,
                        accept: "image/*",
                        class: "absolute inset-0 w-full h-full opacity-0 cursor-pointer",
                        disabled: uploading(),
                        onchange: on_file_input,
                    }

                    div {
                        class: "space-y-4 pointer-events-none",
                        div {
                            class: "mx-auto w-16 h-16 bg-gray-100 rounded-full flex items-center justify-center text-2xl",
                            "⬆"
                        }
                        p {
                            class: "text-lg text-gray-700",
                            "{drop_hint}"
                        }
                        div {
                            class: "text-sm text-gray-400 space-y-1",
                            p { "• JPEG, PNG, WebP formats supported" }
                            p { "• Maximum file size: 10MB per image" }
                            p { "• Recommended resolution: 2000px+ wide for product images" }
                        }
                    }
                }
            }

            // Per-file progress
            if !progress().is_empty() {
                div {
                    class: "bg-white rounded-lg shadow-sm border p-6",
                    h3 {
                        class: "text-lg font-medium text-gray-900 mb-4",
                        "Upload Progress"
                    }
                    div {
                        class: "space-y-3",
                        for entry in progress() {
                            ProgressRow { key: "{entry.id}", entry: entry }
                        }
                    }
                }
            }

            // Session-local gallery
            if gallery_count > 0 {
                div {
                    class: "bg-white rounded-lg shadow-sm border p-6",
                    div {
                        class: "flex items-center justify-between mb-4",
                        h3 {
                            class: "text-lg font-medium text-gray-900",
                            "Recently Uploaded ({gallery_count})"
                        }
                        button {
                            r#type: "button",
                            class: "text-sm text-gray-500 hover:text-red-600",
                            onclick: move |_| gallery.set(Vec::new()),
                            "Clear All"
                        }
                    }
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4",
                        for image in gallery() {
                            GalleryTile {
                                key: "{image.id}",
                                image: image,
                                on_copy: {
                                    let copy = copy_url.clone();
                                    move |url| copy(url)
                                },
                            }
                        }
                    }
                }
            }

            // Tips
            div {
                class: "bg-blue-50 rounded-lg p-6",
                h3 {
                    class: "text-lg font-medium text-blue-900 mb-3",
                    "Image Optimization Tips"
                }
                div {
                    class: "text-blue-800 space-y-2 text-sm",
                    p { "• Main product images: use high-resolution shots (2000px+ wide)" }
                    p { "• Gallery images: keep lighting and backgrounds consistent" }
                    p { "• WebP gives the best compression, JPEG the best compatibility" }
                    p { "• Name files descriptively, e.g. milano-aviator-gold-front.jpg" }
                }
            }
        }
    }
}

/// Uploads one screened batch: files upload concurrently, each tracked by
/// its own progress entry, and partial success is an ordinary outcome.
async fn run_batch(
    api: ApiClient,
    notifier: Notifier,
    session: Signal<Option<AdminSession>>,
    mut progress: Signal<Vec<UploadProgress>>,
    mut gallery: Signal<Vec<GalleryImage>>,
    mut uploading: Signal<bool>,
    picked: Vec<(String, Vec<u8>)>,
) {
    let batch = screen_files(picked);
    for message in &batch.rejected {
        notifier.error("Invalid File", message.clone());
    }
    if batch.accepted.is_empty() {
        return;
    }

    uploading.set(true);
    let batch_millis = Utc::now().timestamp_millis();
    let entries: Vec<UploadProgress> = batch
        .accepted
        .iter()
        .enumerate()
        .map(|(index, file)| UploadProgress::begin(batch_millis, index, file.name.clone()))
        .collect();
    progress.set(entries.clone());

    let uploads = batch.accepted.into_iter().enumerate().map(|(index, file)| {
        let api = api.clone();
        let entry_id = entries[index].id.clone();
        let file_name = file.name.clone();
        let size = file.bytes.len() as u64;
        let mut progress = progress;
        let mut gallery = gallery;
        async move {
            let result = api.admin().upload_image(file, UploadCategory::Products).await;
            match &result {
                Ok(response) => {
                    progress.with_mut(|list| {
                        if let Some(entry) = list.iter_mut().find(|e| e.id == entry_id) {
                            entry.complete();
                        }
                    });
                    gallery.with_mut(|list| {
                        list.insert(
                            0,
                            GalleryImage {
                                id: entry_id.clone(),
                                name: file_name.clone(),
                                url: response.image_url.clone(),
                                size,
                                uploaded_at: Utc::now(),
                            },
                        );
                    });
                }
                Err(_) => {
                    progress.with_mut(|list| {
                        if let Some(entry) = list.iter_mut().find(|e| e.id == entry_id) {
                            entry.fail();
                        }
                    });
                }
            }
            result
        }
    });

    let results = futures::future::join_all(uploads).await;

    let mut summary = BatchSummary::default();
    for result in &results {
        match result {
            Ok(_) => summary.succeeded += 1,
            Err(_) => summary.failed += 1,
        }
    }

    if let Some(expired) = results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .find(|e| e.is_session_expired())
    {
        report_failure(session, notifier, "Upload failed", expired);
    } else if summary.succeeded > 0 {
        notifier.success("Upload Complete", summary.describe());
    } else {
        notifier.error("Upload Failed", "Some images failed to upload");
    }

    // Progress entries linger briefly, then the batch display resets.
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(PROGRESS_CLEAR_DELAY_MS)).await;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(PROGRESS_CLEAR_DELAY_MS as u32).await;

    progress.set(Vec::new());
    uploading.set(false);
}

#[component]
fn ProgressRow(entry: UploadProgress) -> Element {
    let (icon, bar_class) = match entry.status {
        UploadStatus::Completed => ("✅", "h-2 rounded-full transition-all bg-green-500"),
        UploadStatus::Error => ("⚠️", "h-2 rounded-full transition-all bg-red-500"),
        UploadStatus::Uploading => ("⏳", "h-2 rounded-full transition-all bg-black"),
    };
    let status_label = match entry.status {
        UploadStatus::Completed => "completed",
        UploadStatus::Error => "error",
        UploadStatus::Uploading => "uploading",
    };
    let width = format!("width: {}%", entry.progress);

    rsx! {
        div {
            class: "flex items-center space-x-3",
            div {
                class: "flex-shrink-0",
                "{icon}"
            }
            div {
                class: "flex-1 min-w-0",
                p {
                    class: "text-sm font-medium text-gray-900 truncate",
                    "{entry.file_name}"
                }
                div {
                    class: "w-full bg-gray-200 rounded-full h-2 mt-1",
                    div {
                        class: bar_class,
                        style: "{width}",
                    }
                }
            }
            div {
                class: "text-sm text-gray-500 capitalize",
                "{status_label}"
            }
        }
    }
}

#[component]
fn GalleryTile(image: GalleryImage, on_copy: EventHandler<String>) -> Element {
    let size_label = format_file_size(image.size);
    let uploaded_label = image.uploaded_at.format("%Y-%m-%d %H:%M").to_string();
    let url = image.url.clone();

    rsx! {
        div {
            class: "border rounded-lg overflow-hidden group",
            div {
                class: "aspect-square relative bg-gray-100",
                img {
                    class: "w-full h-full object-cover",
                    src: "{image.url}",
                    alt: "{image.name}",
                }
                div {
                    class: "absolute inset-0 bg-black bg-opacity-0 group-hover:bg-opacity-50 transition-all flex items-center justify-center",
                    button {
                        r#type: "button",
                        class: "opacity-0 group-hover:opacity-100 transition-opacity p-2 bg-white text-gray-900 rounded-lg hover:bg-gray-100 text-sm",
                        title: "Copy URL",
                        onclick: move |_| on_copy.call(url.clone()),
                        "Copy URL"
                    }
                }
            }
            div {
                class: "p-3",
                h4 {
                    class: "text-sm font-medium text-gray-900 truncate mb-1",
                    "{image.name}"
                }
                div {
                    class: "text-xs text-gray-500 space-y-1",
                    p { "Size: {size_label}" }
                    p { "Uploaded: {uploaded_label}" }
                }
                div {
                    class: "mt-2 p-2 bg-gray-50 rounded text-xs font-mono text-gray-600 truncate",
                    "{image.url}"
                }
            }
        }
    }
}
