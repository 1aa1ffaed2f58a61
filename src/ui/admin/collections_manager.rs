// src/ui/admin/collections_manager.rs - Collection CRUD with modal form

use dioxus::prelude::*;

use crate::api::admin::UploadCategory;
use crate::fetch::FetchState;
use crate::models::{slugify, Collection, CollectionPayload};
use crate::ui::admin::{report_failure, ConfirmDialog};
use crate::ui::hooks::use_all_collections;
use crate::ui::state::{use_api, use_notifier, use_session};
use crate::uploads::{validate_image_file, UploadFile};

/// Modal form state. The slug follows the name until the user edits the
/// slug by hand; after that, regeneration stops. The dirty flag resets
/// every time the modal opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CollectionFormState {
    pub name: String,
    pub slug: String,
    pub slug_edited: bool,
    pub description: String,
    pub image: String,
    pub is_active: bool,
    pub sort_order: String,
}

impl Default for CollectionFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            slug_edited: false,
            description: String::new(),
            image: String::new(),
            is_active: true,
            sort_order: "0".to_string(),
        }
    }
}

impl CollectionFormState {
    pub fn from_collection(collection: &Collection) -> Self {
        Self {
            name: collection.name.clone(),
            slug: collection.slug.clone(),
            slug_edited: false,
            description: collection.description.clone().unwrap_or_default(),
            image: collection.image.clone().unwrap_or_default(),
            is_active: collection.is_active,
            sort_order: collection.sort_order.to_string(),
        }
    }

    /// Name edits regenerate the slug unless it was manually edited.
    pub fn set_name(&mut self, name: String) {
        if !self.slug_edited {
            self.slug = slugify(&name);
        }
        self.name = name;
    }

    /// A manual slug edit pins the slug for the rest of this modal session.
    pub fn set_slug(&mut self, slug: String) {
        self.slug = slug;
        self.slug_edited = true;
    }

    pub fn to_payload(&self) -> CollectionPayload {
        CollectionPayload {
            name: self.name.trim().to_string(),
            slug: self.slug.trim().to_string(),
            description: if self.description.trim().is_empty() {
                None
            } else {
                Some(self.description.trim().to_string())
            },
            image: if self.image.is_empty() {
                None
            } else {
                Some(self.image.clone())
            },
            is_active: self.is_active,
            sort_order: self.sort_order.trim().parse().unwrap_or(0),
        }
    }
}

#[component]
pub fn CollectionsManager() -> Element {
    let api = use_api();
    let session = use_session();
    let notifier = use_notifier();

    let collections = use_all_collections();
    let mut show_form = use_signal(|| false);
    let mut editing_id = use_signal(|| None::<String>);
    let mut form = use_signal(CollectionFormState::default);
    let mut pending_delete = use_signal(|| None::<Collection>);

    let open_create = move |_| {
        form.set(CollectionFormState::default());
        editing_id.set(None);
        show_form.set(true);
    };

    let mut open_edit = move |collection: Collection| {
        form.set(CollectionFormState::from_collection(&collection));
        editing_id.set(Some(collection.id));
        show_form.set(true);
    };

    let close_form = move |_| {
        show_form.set(false);
        editing_id.set(None);
        form.set(CollectionFormState::default());
    };

    let handle_submit = {
        let api = api.clone();
        move |_| {
            let payload = form().to_payload();
            if payload.name.is_empty() || payload.slug.is_empty() {
                notifier.error("Validation Error", "Name and slug are required");
                return;
            }
            let api = api.clone();
            let id = editing_id();
            spawn(async move {
                let result = match &id {
                    Some(id) => api.collections().update(id, &payload).await.map(|_| ()),
                    None => api.collections().create(&payload).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        let verb = if id.is_some() { "updated" } else { "created" };
                        notifier.success("Success", format!("Collection {} successfully", verb));
                        show_form.set(false);
                        editing_id.set(None);
                        form.set(CollectionFormState::default());
                        collections.refetch();
                    }
                    Err(e) => report_failure(session, notifier, "Failed to save collection", &e),
                }
            });
        }
    };

    let confirm_delete = {
        let api = api.clone();
        move |collection: Collection| {
            let api = api.clone();
            spawn(async move {
                match api.collections().delete(&collection.id).await {
                    Ok(()) => notifier.success("Success", "Collection deleted successfully"),
                    Err(e) => report_failure(session, notifier, "Failed to delete collection", &e),
                }
                collections.refetch();
            });
        }
    };

    // Single file; a successful upload replaces the previous image URL.
    let upload_image = {
        let api = api.clone();
        move |e: Event<FormData>| {
            let Some(engine) = e.files() else {
                return;
            };
            let api = api.clone();
            spawn(async move {
                if let Some(name) = engine.files().first().cloned() {
                    match engine.read_file(&name).await {
                        Some(bytes) => match validate_image_file(&name, bytes.len() as u64) {
                            Ok(content_type) => {
                                let file = UploadFile {
                                    name,
                                    content_type: content_type.to_string(),
                                    bytes,
                                };
                                match api
                                    .admin()
                                    .upload_image(file, UploadCategory::Collections)
                                    .await
                                {
                                    Ok(response) => {
                                        form.with_mut(|f| f.image = response.image_url);
                                        notifier.success("Success", "Image uploaded successfully");
                                    }
                                    Err(e) => report_failure(
                                        session,
                                        notifier,
                                        "Failed to upload image",
                                        &e,
                                    ),
                                }
                            }
                            Err(message) => notifier.error("Invalid File", message),
                        },
                        None => notifier.error("Upload Failed", "Could not read the selected file"),
                    }
                }
            });
        }
    };

    let state = collections.state;
    let body = match &*state.read() {
        FetchState::Idle | FetchState::Loading => rsx! {
            div {
                class: "animate-pulse space-y-4",
                div { class: "h-8 bg-gray-200 rounded w-1/4" }
                for i in 0..3 {
                    div { key: "{i}", class: "h-24 bg-gray-200 rounded" }
                }
            }
        },
        FetchState::Error(message) => rsx! {
            div {
                class: "text-center py-12 bg-white rounded-lg shadow-sm border",
                p { class: "text-gray-600", "{message}" }
            }
        },
        FetchState::Success(list) => {
            let list = list.clone();
            rsx! {
                if list.is_empty() {
                    div {
                        class: "text-center py-12",
                        div {
                            class: "text-gray-500 mb-4",
                            "No collections found"
                        }
                        button {
                            r#type: "button",
                            class: "inline-flex items-center px-4 py-2 bg-black text-white rounded-lg hover:bg-gray-800 transition-colors",
                            onclick: open_create,
                            "+ Create Your First Collection"
                        }
                    }
                } else {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for collection in list {
                            CollectionCard {
                                key: "{collection.id}",
                                collection: collection.clone(),
                                on_edit: move |c| open_edit(c),
                                on_delete: move |c: Collection| pending_delete.set(Some(c)),
                            }
                        }
                    }
                }
            }
        }
    };

    let current = form();
    let is_editing = editing_id().is_some();
    let modal_title = if is_editing {
        "Edit Collection"
    } else {
        "Add New Collection"
    };
    let submit_label = if is_editing { "Update Collection" } else { "Create Collection" };

    rsx! {
        div {
            class: "space-y-6",

            div {
                class: "flex items-center justify-between",
                div {
                    h1 {
                        class: "text-2xl font-bold text-gray-900",
                        "Collections"
                    }
                    p {
                        class: "text-gray-600",
                        "Manage product collections and categories"
                    }
                }
                button {
                    r#type: "button",
                    class: "inline-flex items-center px-4 py-2 bg-black text-white rounded-lg hover:bg-gray-800 transition-colors",
                    onclick: open_create,
                    "+ Add Collection"
                }
            }

            {body}

            // Modal form
            if show_form() {
                div {
                    class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
                    div {
                        class: "bg-white rounded-lg p-6 w-full max-w-2xl mx-4",
                        div {
                            class: "flex items-center justify-between mb-6",
                            h2 {
                                class: "text-xl font-bold text-gray-900",
                                "{modal_title}"
                            }
                            button {
                                r#type: "button",
                                class: "p-2 hover:bg-gray-100 rounded",
                                onclick: close_form,
                                "✕"
                            }
                        }

                        div {
                            class: "space-y-4",
                            div {
                                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                                div {
                                    label {
                                        class: "block text-sm font-medium text-gray-700 mb-2",
                                        "Collection Name *"
                                    }
                                    input {
                                        r#type: "text",
                                        class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-black",
                                        placeholder: "e.g., Heritage Collection",
                                        value: "{current.name}",
                                        oninput: move |e| form.with_mut(|f| f.set_name(e.value())),
                                    }
                                }
                                div {
                                    label {
                                        class: "block text-sm font-medium text-gray-700 mb-2",
                                        "URL Slug *"
                                    }
                                    input {
                                        r#type: "text",
                                        class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-black",
                                        placeholder: "heritage-collection",
                                        value: "{current.slug}",
                                        oninput: move |e| form.with_mut(|f| f.set_slug(e.value())),
                                    }
                                }
                            }

                            div {
                                label {
                                    class: "block text-sm font-medium text-gray-700 mb-2",
                                    "Description"
                                }
                                textarea {
                                    rows: "3",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-black",
                                    placeholder: "Describe this collection...",
                                    value: "{current.description}",
                                    oninput: move |e| form.with_mut(|f| f.description = e.value()),
                                }
                            }

                            div {
                                label {
                                    class: "block text-sm font-medium text-gray-700 mb-2",
                                    "Collection Image"
                                }
                                div {
                                    class: "flex items-center space-x-4",
                                    input {
                                        r#type: "file",
                                        accept: "image/*",
                                        class: "flex-1 px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-black",
                                        onchange: upload_image,
                                    }
                                    if !current.image.is_empty() {
                                        img {
                                            class: "w-16 h-16 object-cover rounded-lg",
                                            src: "{current.image}",
                                            alt: "Preview",
                                        }
                                    }
                                }
                            }

                            div {
                                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                                div {
                                    label {
                                        class: "block text-sm font-medium text-gray-700 mb-2",
                                        "Sort Order"
                                    }
                                    input {
                                        r#type: "number",
                                        class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-black",
                                        value: "{current.sort_order}",
                                        oninput: move |e| form.with_mut(|f| f.sort_order = e.value()),
                                    }
                                }
                                div {
                                    class: "flex items-end",
                                    label {
                                        class: "flex items-center",
                                        input {
                                            r#type: "checkbox",
                                            checked: current.is_active,
                                            onchange: move |e: Event<FormData>| {
                                                let checked = e.checked();
                                                form.with_mut(|f| f.is_active = checked);
                                            },
                                        }
                                        span {
                                            class: "ml-2 text-sm text-gray-700",
                                            "Active Collection"
                                        }
                                    }
                                }
                            }

                            div {
                                class: "flex items-center justify-end space-x-4 pt-6 border-t",
                                button {
                                    r#type: "button",
                                    class: "px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50",
                                    onclick: close_form,
                                    "Cancel"
                                }
                                button {
                                    r#type: "button",
                                    class: "px-6 py-2 bg-black text-white rounded-lg hover:bg-gray-800",
                                    onclick: handle_submit,
                                    "{submit_label}"
                                }
                            }
                        }
                    }
                }
            }

            if let Some(collection) = pending_delete() {
                ConfirmDialog {
                    title: "Delete collection".to_string(),
                    message: format!("Are you sure you want to delete \"{}\"?", collection.name),
                    confirm_label: "Delete".to_string(),
                    on_confirm: {
                        let mut confirm = confirm_delete.clone();
                        move |_| {
                            if let Some(collection) = pending_delete.take() {
                                confirm(collection);
                            }
                        }
                    },
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn CollectionCard(
    collection: Collection,
    on_edit: EventHandler<Collection>,
    on_delete: EventHandler<Collection>,
) -> Element {
    let description = collection
        .description
        .clone()
        .unwrap_or_else(|| "No description".to_string());
    let status_classes = if collection.is_active {
        "bg-green-100 text-green-800"
    } else {
        "bg-red-100 text-red-800"
    };
    let status_label = if collection.is_active { "Active" } else { "Inactive" };
    let edit_collection = collection.clone();
    let delete_collection = collection.clone();

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border overflow-hidden",
            if let Some(image) = collection.image.clone() {
                img {
                    class: "w-full h-48 object-cover",
                    src: "{image}",
                    alt: "{collection.name}",
                }
            } else {
                div {
                    class: "w-full h-48 bg-gray-100 flex items-center justify-center",
                    span { class: "text-gray-400", "No image" }
                }
            }

            div {
                class: "p-4",
                div {
                    class: "flex items-start justify-between mb-2",
                    h3 {
                        class: "text-lg font-medium text-gray-900",
                        "{collection.name}"
                    }
                    span {
                        class: "px-2 py-1 text-xs rounded-full {status_classes}",
                        "{status_label}"
                    }
                }
                p {
                    class: "text-sm text-gray-600 mb-3",
                    "{description}"
                }
                div {
                    class: "text-xs text-gray-500 mb-4",
                    "Slug: /{collection.slug}"
                }
                div {
                    class: "flex items-center justify-between",
                    span {
                        class: "text-xs text-gray-500",
                        "Order: {collection.sort_order}"
                    }
                    div {
                        class: "flex space-x-2",
                        button {
                            r#type: "button",
                            class: "p-2 text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded",
                            title: "Edit Collection",
                            onclick: move |_| on_edit.call(edit_collection.clone()),
                            "✎"
                        }
                        button {
                            r#type: "button",
                            class: "p-2 text-gray-400 hover:text-red-600 hover:bg-red-50 rounded",
                            title: "Delete Collection",
                            onclick: move |_| on_delete.call(delete_collection.clone()),
                            "🗑"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_name_edits_regenerate_slug() {
        let mut form = CollectionFormState::default();
        form.set_name("Heritage Collection".to_string());
        assert_eq!(form.slug, "heritage-collection");

        form.set_name("Heritage & Co".to_string());
        assert_eq!(form.slug, "heritage-co");
    }

    #[test]
    fn test_manual_slug_edit_stops_regeneration() {
        let mut form = CollectionFormState::default();
        form.set_name("Heritage".to_string());
        form.set_slug("legacy".to_string());

        form.set_name("Heritage Renewed".to_string());
        assert_eq!(form.slug, "legacy");
        assert_eq!(form.name, "Heritage Renewed");
    }

    #[test]
    fn test_from_collection_resets_dirty_flag() {
        let collection = Collection {
            id: "c-1".to_string(),
            name: "Heritage".to_string(),
            slug: "heritage".to_string(),
            description: None,
            image: None,
            is_active: true,
            sort_order: 3,
            created_at: Utc::now(),
        };

        let mut form = CollectionFormState::from_collection(&collection);
        assert!(!form.slug_edited);

        // The modal just opened, so name edits regenerate again.
        form.set_name("Heritage Redux".to_string());
        assert_eq!(form.slug, "heritage-redux");
    }

    #[test]
    fn test_payload_parses_sort_order() {
        let mut form = CollectionFormState::default();
        form.set_name("New Arrivals".to_string());
        form.sort_order = "7".to_string();

        let payload = form.to_payload();
        assert_eq!(payload.sort_order, 7);
        assert_eq!(payload.slug, "new-arrivals");
        assert_eq!(payload.description, None);

        form.sort_order = "not a number".to_string();
        assert_eq!(form.to_payload().sort_order, 0);
    }
}
