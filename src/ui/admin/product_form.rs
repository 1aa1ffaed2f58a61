// src/ui/admin/product_form.rs - Create/edit product form with validation,
// image ordering and a live preview

use std::collections::BTreeMap;

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::admin::UploadCategory;
use crate::content::{FORM_COLLECTIONS, FRAME_COLORS, LENS_COLORS};
use crate::fetch::FetchState;
use crate::models::{
    format_schedule_input, parse_schedule_input, Gender, ImageSet, Product, ProductPayload,
    ProductStatus, ProductType,
};
use crate::ui::admin::{report_failure, StatusBadge};
use crate::ui::hooks::use_product;
use crate::ui::router::Route;
use crate::ui::state::{use_api, use_notifier, use_session};
use crate::uploads::{screen_files, validate_image_file, UploadFile};

pub(crate) const SHORT_DESCRIPTION_LIMIT: usize = 120;

/// Per-field validation messages, keyed by field name.
pub(crate) type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Typed form state. Text inputs keep their raw strings; numbers and
/// timestamps are coerced once, at submit time.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProductFormState {
    pub name: String,
    pub collection: String,
    pub product_type: ProductType,
    pub gender: Gender,
    pub price: String,
    pub original_price: String,
    pub sku: String,
    pub frame_color: String,
    pub lens_color: String,
    pub materials: String,
    pub made_in: String,
    pub short_description: String,
    pub full_description: String,
    pub tags: String,
    pub status: ProductStatus,
    pub scheduled_at: String,
    pub is_featured: bool,
    pub is_limited_edition: bool,
    pub is_on_homepage: bool,
    pub is_in_catalog: bool,
    pub images: ImageSet,
}

impl Default for ProductFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            collection: String::new(),
            product_type: ProductType::Sunglasses,
            gender: Gender::Unisex,
            price: String::new(),
            original_price: String::new(),
            sku: String::new(),
            frame_color: String::new(),
            lens_color: String::new(),
            materials: String::new(),
            made_in: "Italy".to_string(),
            short_description: String::new(),
            full_description: String::new(),
            tags: String::new(),
            status: ProductStatus::Active,
            scheduled_at: String::new(),
            is_featured: false,
            is_limited_edition: false,
            is_on_homepage: false,
            is_in_catalog: true,
            images: ImageSet::new(),
        }
    }
}

/// Splits the comma-separated tags input into a de-duplicated list.
pub(crate) fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in input.split(',') {
        let tag = tag.trim();
        if !tag.is_empty() && !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

impl ProductFormState {
    /// Seeds the form from an existing product. The combined image list is
    /// main image first, gallery after.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            collection: product.collection.clone(),
            product_type: product.product_type,
            gender: product.gender,
            price: product.price.to_string(),
            original_price: product
                .original_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            sku: product.sku.clone(),
            frame_color: product.frame_color.clone(),
            lens_color: product.lens_color.clone(),
            materials: product.materials.clone(),
            made_in: product.made_in.clone(),
            short_description: product.short_description.clone(),
            full_description: product.full_description.clone().unwrap_or_default(),
            tags: product.tags.join(", "),
            status: product.status,
            scheduled_at: product
                .scheduled_at
                .as_ref()
                .map(format_schedule_input)
                .unwrap_or_default(),
            is_featured: product.is_featured,
            is_limited_edition: product.is_limited_edition,
            is_on_homepage: product.is_on_homepage,
            is_in_catalog: product.is_in_catalog,
            images: product.images(),
        }
    }

    /// Synchronous validation run before any save. Failing validation
    /// blocks the save entirely.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.insert("name", "Product name is required");
        }
        if self.collection.is_empty() {
            errors.insert("collection", "Collection is required");
        }
        if self.price.trim().is_empty() {
            errors.insert("price", "Price is required");
        } else if self.price.trim().parse::<f64>().is_err() {
            errors.insert("price", "Price must be a number");
        }
        if self.sku.trim().is_empty() {
            errors.insert("sku", "SKU is required");
        }
        if self.frame_color.is_empty() {
            errors.insert("frame_color", "Frame color is required");
        }
        if self.lens_color.is_empty() {
            errors.insert("lens_color", "Lens color is required");
        }
        if self.materials.trim().is_empty() {
            errors.insert("materials", "Materials are required");
        }
        if self.short_description.trim().is_empty() {
            errors.insert("short_description", "Short description is required");
        } else if self.short_description.chars().count() > SHORT_DESCRIPTION_LIMIT {
            errors.insert(
                "short_description",
                "Short description must be 120 characters or fewer",
            );
        }
        if self.images.main_image().is_none() {
            errors.insert("main_image", "Main image is required");
        }
        errors
    }

    /// Whether the scheduled save variant is available.
    pub fn schedule_ready(&self) -> bool {
        parse_schedule_input(&self.scheduled_at).is_some()
    }

    /// Builds the wire payload for the given save variant. Assumes
    /// `validate` passed; price strings are coerced to numbers here.
    pub fn to_payload(&self, status: ProductStatus) -> ProductPayload {
        let (main_image, gallery_images) = self.images.clone().into_fields();
        ProductPayload {
            name: self.name.trim().to_string(),
            collection: self.collection.clone(),
            price: self.price.trim().parse().unwrap_or(0.0),
            original_price: self.original_price.trim().parse().ok(),
            sku: self.sku.trim().to_string(),
            gender: self.gender,
            product_type: self.product_type,
            frame_color: self.frame_color.clone(),
            lens_color: self.lens_color.clone(),
            materials: self.materials.trim().to_string(),
            made_in: self.made_in.trim().to_string(),
            is_limited_edition: self.is_limited_edition,
            is_featured: self.is_featured,
            is_on_homepage: self.is_on_homepage,
            is_in_catalog: self.is_in_catalog,
            is_on_sale: false,
            status,
            scheduled_at: parse_schedule_input(&self.scheduled_at),
            main_image,
            gallery_images,
            short_description: self.short_description.trim().to_string(),
            full_description: if self.full_description.trim().is_empty() {
                None
            } else {
                Some(self.full_description.trim().to_string())
            },
            tags: parse_tags(&self.tags),
        }
        .finalize()
    }
}

#[component]
pub fn ProductForm(id: Option<String>) -> Element {
    let api = use_api();
    let session = use_session();
    let notifier = use_notifier();
    let navigator = use_navigator();

    let is_edit = id.is_some();
    let mut form = use_signal(ProductFormState::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);
    let mut uploading = use_signal(|| false);

    let loaded = use_product(id.clone());

    // Seed the form once the product arrives in edit mode.
    use_effect(move || {
        if let FetchState::Success(product) = &*loaded.read() {
            form.set(ProductFormState::from_product(product));
        }
    });

    let handle_save = {
        let api = api.clone();
        let id = id.clone();
        move |status: ProductStatus| {
            let current = form();
            let found = current.validate();
            if !found.is_empty() {
                errors.set(found);
                notifier.error("Validation Error", "Please fill in all required fields");
                return;
            }
            errors.set(FieldErrors::new());

            let payload = current.to_payload(status);
            let api = api.clone();
            let id = id.clone();
            saving.set(true);
            spawn(async move {
                let result = match &id {
                    Some(id) => api.products().update(id, &payload).await.map(|_| ()),
                    None => api.products().create(&payload).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        let verb = if id.is_some() { "updated" } else { "created" };
                        notifier.success("Success", format!("Product {} successfully", verb));
                        navigator.push(Route::AdminProducts {});
                    }
                    Err(e) => report_failure(session, notifier, "Failed to save product", &e),
                }
                saving.set(false);
            });
        }
    };

    // Single file: becomes the new main image.
    let upload_main = {
        let api = api.clone();
        move |e: Event<FormData>| {
            let Some(engine) = e.files() else {
                return;
            };
            let api = api.clone();
            uploading.set(true);
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
                                match api.admin().upload_image(file, UploadCategory::Products).await
                                {
                                    Ok(response) => {
                                        form.with_mut(|f| f.images.set_main(response.image_url));
                                        errors.with_mut(|errs| {
                                            errs.remove("main_image");
                                        });
                                        notifier.success("Success", "1 image(s) uploaded successfully");
                                    }
                                    Err(e) => {
                                        report_failure(session, notifier, "Failed to upload image", &e)
                                    }
                                }
                            }
                            Err(message) => notifier.error("Invalid File", message),
                        },
                        None => notifier.error("Upload Failed", "Could not read the selected file"),
                    }
                }
                uploading.set(false);
            });
        }
    };

    // Multiple files: appended to the gallery.
    let upload_gallery = {
        let api = api.clone();
        move |e: Event<FormData>| {
            let Some(engine) = e.files() else {
                return;
            };
            let api = api.clone();
            uploading.set(true);
            spawn(async move {
                let mut picked = Vec::new();
                for name in engine.files() {
                    if let Some(bytes) = engine.read_file(&name).await {
                        picked.push((name, bytes));
                    }
                }

                let batch = screen_files(picked);
                for message in &batch.rejected {
                    notifier.error("Invalid File", message.clone());
                }

                if !batch.accepted.is_empty() {
                    let count = batch.accepted.len();
                    match api
                        .admin()
                        .upload_images(batch.accepted, UploadCategory::Products)
                        .await
                    {
                        Ok(response) => {
                            form.with_mut(|f| f.images.append(response.image_urls));
                            notifier.success(
                                "Success",
                                format!("{} image(s) uploaded successfully", count),
                            );
                        }
                        Err(e) => report_failure(session, notifier, "Failed to upload images", &e),
                    }
                }
                uploading.set(false);
            });
        }
    };

    if is_edit && loaded.read().is_loading() {
        return rsx! {
            div {
                class: "flex items-center justify-center h-64",
                div {
                    class: "animate-spin rounded-full h-8 w-8 border-b-2 border-gray-900"
                }
            }
        };
    }

    let current = form();
    let errs = errors();
    let heading = if is_edit { "Edit Product" } else { "Add New Product" };
    let publish_label = if saving() { "Saving..." } else { "Publish" };
    let short_count = current.short_description.chars().count();

    let input_class = |invalid: bool| {
        if invalid {
            "w-full px-3 py-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-black border-red-500"
        } else {
            "w-full px-3 py-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-black border-gray-300"
        }
    };

    rsx! {
        div {
            class: "max-w-7xl mx-auto",

            // Header with save variants
            div {
                class: "mb-8 flex items-center justify-between",
                div {
                    h1 {
                        class: "text-3xl font-light text-gray-900",
                        "{heading}"
                    }
                    p {
                        class: "text-gray-600 mt-2",
                        "Create a luxury eyewear product with premium details"
                    }
                }
                div {
                    class: "flex space-x-4",
                    button {
                        r#type: "button",
                        class: "flex items-center px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50 transition-colors disabled:opacity-50",
                        disabled: saving(),
                        onclick: {
                            let mut save = handle_save.clone();
                            move |_| save(ProductStatus::Draft)
                        },
                        "Save Draft"
                    }
                    button {
                        r#type: "button",
                        class: "flex items-center px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50 transition-colors disabled:opacity-50",
                        disabled: saving() || !current.schedule_ready(),
                        onclick: {
                            let mut save = handle_save.clone();
                            move |_| save(ProductStatus::Scheduled)
                        },
                        "Schedule"
                    }
                    button {
                        r#type: "button",
                        class: "flex items-center px-6 py-2 bg-black text-white rounded-lg hover:bg-gray-800 transition-colors disabled:opacity-50",
                        disabled: saving(),
                        onclick: {
                            let mut save = handle_save.clone();
                            move |_| save(ProductStatus::Active)
                        },
                        "{publish_label}"
                    }
                }
            }

            div {
                class: "grid grid-cols-1 lg:grid-cols-3 gap-8",

                // Main form
                div {
                    class: "lg:col-span-2 space-y-8",

                    // Basic information
                    div {
                        class: "bg-white rounded-lg shadow-sm border p-6",
                        h2 {
                            class: "text-xl font-medium text-gray-900 mb-6",
                            "Basic Information"
                        }
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                            div {
                                label {
                                    class: "block text-sm font-medium text-gray-700 mb-2",
                                    "Product Name *"
                                }
                                input {
                                    r#type: "text",
                                    class: input_class(errs.contains_key("name")),
                                    placeholder: "e.g., Milano Aviator",
                                    value: "{current.name}",
                                    oninput: move |e| form.with_mut(|f| f.name = e.value()),
                                }
                                if let Some(message) = errs.get("name") {
                                    p { class: "text-red-500 text-sm mt-1", "{message}" }
                                }
                            }
                            div {
                                label {
                                    class: "block text-sm font-medium text-gray-700 mb-2",
                                    "SKU/Style Code *"
                                }
                                input {
                                    r#type: "text",
                                    class: input_class(errs.contains_key("sku")),
                                    placeholder: "e.g., VLN-AV-001",
                                    value: "{current.sku}",
                                    oninput: move |e| form.with_mut(|f| f.sku = e.value()),
                                }
                                if let Some(message) = errs.get("sku") {
                                    p { class: "text-red-500 text-sm mt-1", "{message}" }
                                }
                            }
                            div {
                                label {
                                    class: "block text-sm font-medium text-gray-700 mb-2",
                                    "Collection *"
                                }
                                select {
                                    class: input_class(errs.contains_key("collection")),
                                    value: "{current.collection}",
                                    onchange: move |e| form.with_mut(|f| f.collection = e.value()),
                                    option { value: "", "Select Collection" }
                                    for name in FORM_COLLECTIONS {
                                        option { key: "{name}", value: "{name}", selected: current.collection == name, "{name}" }
                                    }
                                }
                                if let Some(message) = errs.get("collection") {
                                    p { class: "text-red-500 text-sm mt-1", "{message}" }
                                }
                            }
                            div {
                                label {
                                    class: "block text-sm font-medium text-gray-700 mb-2",
                                    "Product Type *"
                                }
                                select {
                                    class: input_class(false),
                                    onchange: move |e| form.with_mut(|f| {
                                        if let Some(kind) = ProductType::parse(&e.value()) {
                                            f.product_type = kind;
                                        }
                                    }),
                                    for kind in ProductType::ALL {
                                        option { key: "{kind}", value: kind.as_str(), selected: current.product_type == kind, "{kind}" }
                                    }
                                }
                            }
                            div {
                                label {
                                    class: "block text-sm font-medium text-gray-700 mb-2",
                                    "Gender *"
                                }
                                select {
                                    class: input_class(false),
                                    onchange: move |e| form.with_mut(|f| {
                                        if let Some(gender) = Gender::parse(&e.value()) {
                                            f.gender = gender;
                                        }
                                    }),
                                    for gender in Gender::ALL {
                                        option { key: "{gender}", value: gender.as_str(), selected: current.gender == gender, "{gender}" }
                                    }
                                }
                            }
                            div {
                                label {
                                    class: "block text-sm font-medium text-gray-700 mb-2",
                                    "Made In"
                                }
                                input {
                                    r#type: "text",
                                    class: input_class(false),
                                    placeholder: "Italy",
                                    value: "{current.made_in}",
                                    oninput: move |e| form.with_mut(|f| f.made_in = e.value()),
                                }
                            }
                        }
                    }

                    // Pricing
                    div {
                        class: "bg-white rounded-lg shadow-sm border p-6",
                        h2 {
                            class: "text-xl font-medium text-gray-900 mb-6",
                            "Pricing"
                        }
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                            div {
                                label {
                                    class: "block text-sm font-medium text-gray-700 mb-2",
                                    "Price (€) *"
                                }
                                input {
                                    r#type: "number",
                                    step: "0.01",
                                    class: input_class(errs.contains_key("price")),
                                    placeholder: "850.00",
                                    value: "{current.price}",
                                    oninput: move |e| form.with_mut(|f| f.price = e.value()),
                                }
                                if let Some(message) = errs.get("price") {
                                    p { class: "text-red-500 text-sm mt-1", "{message}" }
                                }
                            }
                            div {
                                label {
                                    class: "block text-sm font-medium text-gray-700 mb-2",
                                    "Original Price (€) - For Sale Items"
                                }
                                input {
                                    r#type: "number",
                                    step: "0.01",
                                    class: input_class(false),
                                    placeholder: "1000.00",
                                    value: "{current.original_price}",
                                    oninput: move |e| form.with_mut(|f| f.original_price = e.value()),
                                }
                            }
                        }
                    }

                    // Product details
                    div {
                        class: "bg-white rounded-lg shadow-sm border p-6",
                        h2 {
                            class: "text-xl font-medium text-gray-900 mb-6",
                            "Product Details"
                        }
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                            div {
                                label {
                                    class: "block text-sm font-medium text-gray-700 mb-2",
                                    "Frame Color *"
                                }
                                select {
                                    class: input_class(errs.contains_key("frame_color")),
                                    onchange: move |e| form.with_mut(|f| f.frame_color = e.value()),
                                    option { value: "", "Select Frame Color" }
                                    for color in FRAME_COLORS {
                                        option { key: "{color}", value: "{color}", selected: current.frame_color == color, "{color}" }
                                    }
                                }
                                if let Some(message) = errs.get("frame_color") {
                                    p { class: "text-red-500 text-sm mt-1", "{message}" }
                                }
                            }
                            div {
                                label {
                                    class: "block text-sm font-medium text-gray-700 mb-2",
                                    "Lens Color/Type *"
                                }
                                select {
                                    class: input_class(errs.contains_key("lens_color")),
                                    onchange: move |e| form.with_mut(|f| f.lens_color = e.value()),
                                    option { value: "", "Select Lens Color" }
                                    for color in LENS_COLORS {
                                        option { key: "{color}", value: "{color}", selected: current.lens_color == color, "{color}" }
                                    }
                                }
                                if let Some(message) = errs.get("lens_color") {
                                    p { class: "text-red-500 text-sm mt-1", "{message}" }
                                }
                            }
                        }
                        div {
                            class: "mt-6",
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "Materials *"
                            }
                            textarea {
                                rows: "3",
                                class: input_class(errs.contains_key("materials")),
                                placeholder: "e.g., Italian Acetate, 18k Gold Plated hinges",
                                value: "{current.materials}",
                                oninput: move |e| form.with_mut(|f| f.materials = e.value()),
                            }
                            if let Some(message) = errs.get("materials") {
                                p { class: "text-red-500 text-sm mt-1", "{message}" }
                            }
                        }
                        div {
                            class: "mt-6",
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "Short Description (2 lines max) *"
                            }
                            textarea {
                                rows: "2",
                                maxlength: "120",
                                class: input_class(errs.contains_key("short_description")),
                                placeholder: "Timeless aviator design with modern luxury refinement",
                                value: "{current.short_description}",
                                oninput: move |e| form.with_mut(|f| f.short_description = e.value()),
                            }
                            if let Some(message) = errs.get("short_description") {
                                p { class: "text-red-500 text-sm mt-1", "{message}" }
                            }
                            p {
                                class: "text-gray-500 text-sm mt-1",
                                "{short_count}/120 characters"
                            }
                        }
                        div {
                            class: "mt-6",
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "Full Description"
                            }
                            textarea {
                                rows: "4",
                                class: input_class(false),
                                placeholder: "Detailed product description highlighting craftsmanship and heritage...",
                                value: "{current.full_description}",
                                oninput: move |e| form.with_mut(|f| f.full_description = e.value()),
                            }
                        }
                        div {
                            class: "mt-6",
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "Tags (comma separated)"
                            }
                            input {
                                r#type: "text",
                                class: input_class(false),
                                placeholder: "luxury, aviator, italian, handcrafted",
                                value: "{current.tags}",
                                oninput: move |e| form.with_mut(|f| f.tags = e.value()),
                            }
                        }
                    }

                    // Images
                    div {
                        class: "bg-white rounded-lg shadow-sm border p-6",
                        h2 {
                            class: "text-xl font-medium text-gray-900 mb-6",
                            "Product Images"
                        }
                        div {
                            class: "mb-6",
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "Main Image *"
                            }
                            div {
                                class: if errs.contains_key("main_image") {
                                    "border-2 border-dashed rounded-lg p-6 text-center border-red-500"
                                } else {
                                    "border-2 border-dashed rounded-lg p-6 text-center border-gray-300"
                                },
                                input {
                                    r#type: "file",
                                    accept: "image/*",
                                    class: "w-full",
                                    onchange: upload_main,
                                }
                                p {
                                    class: "text-gray-400 text-sm mt-2",
                                    "JPEG, PNG, WebP (max 10MB)"
                                }
                            }
                            if let Some(message) = errs.get("main_image") {
                                p { class: "text-red-500 text-sm mt-1", "{message}" }
                            }
                        }
                        div {
                            class: "mb-6",
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "Gallery Images"
                            }
                            div {
                                class: "border-2 border-dashed border-gray-300 rounded-lg p-6 text-center",
                                input {
                                    r#type: "file",
                                    accept: "image/*",
                                    multiple: true,
                                    class: "w-full",
                                    onchange: upload_gallery,
                                }
                                p {
                                    class: "text-gray-400 text-sm mt-2",
                                    "Multiple images allowed"
                                }
                            }
                        }
                        if uploading() {
                            p {
                                class: "text-sm text-gray-500 mb-4",
                                "Uploading..."
                            }
                        }
                        if !current.images.is_empty() {
                            ImageStrip { form: form }
                        }
                    }

                    // Settings
                    div {
                        class: "bg-white rounded-lg shadow-sm border p-6",
                        h2 {
                            class: "text-xl font-medium text-gray-900 mb-6",
                            "Settings & Features"
                        }
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                            div {
                                class: "space-y-4",
                                label {
                                    class: "flex items-center",
                                    input {
                                        r#type: "checkbox",
                                        checked: current.is_featured,
                                        onchange: move |e: Event<FormData>| {
                                            let checked = e.checked();
                                            form.with_mut(|f| f.is_featured = checked);
                                        },
                                    }
                                    span { class: "ml-2 text-sm text-gray-700", "Featured Product" }
                                }
                                label {
                                    class: "flex items-center",
                                    input {
                                        r#type: "checkbox",
                                        checked: current.is_limited_edition,
                                        onchange: move |e: Event<FormData>| {
                                            let checked = e.checked();
                                            form.with_mut(|f| f.is_limited_edition = checked);
                                        },
                                    }
                                    span { class: "ml-2 text-sm text-gray-700", "Limited Edition" }
                                }
                                label {
                                    class: "flex items-center",
                                    input {
                                        r#type: "checkbox",
                                        checked: current.is_on_homepage,
                                        onchange: move |e: Event<FormData>| {
                                            let checked = e.checked();
                                            form.with_mut(|f| f.is_on_homepage = checked);
                                        },
                                    }
                                    span { class: "ml-2 text-sm text-gray-700", "Show on Homepage" }
                                }
                                label {
                                    class: "flex items-center",
                                    input {
                                        r#type: "checkbox",
                                        checked: current.is_in_catalog,
                                        onchange: move |e: Event<FormData>| {
                                            let checked = e.checked();
                                            form.with_mut(|f| f.is_in_catalog = checked);
                                        },
                                    }
                                    span { class: "ml-2 text-sm text-gray-700", "Show in Catalog" }
                                }
                            }
                            div {
                                class: "space-y-4",
                                div {
                                    label {
                                        class: "block text-sm font-medium text-gray-700 mb-2",
                                        "Product Status"
                                    }
                                    select {
                                        class: input_class(false),
                                        onchange: move |e| form.with_mut(|f| {
                                            if let Some(status) = ProductStatus::parse(&e.value()) {
                                                f.status = status;
                                            }
                                        }),
                                        for status in ProductStatus::ALL {
                                            option { key: "{status}", value: status.as_str(), selected: current.status == status, "{status}" }
                                        }
                                    }
                                }
                                if current.status == ProductStatus::Scheduled {
                                    div {
                                        label {
                                            class: "block text-sm font-medium text-gray-700 mb-2",
                                            "Schedule Launch"
                                        }
                                        input {
                                            r#type: "datetime-local",
                                            class: input_class(false),
                                            value: "{current.scheduled_at}",
                                            oninput: move |e| form.with_mut(|f| f.scheduled_at = e.value()),
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                // Live preview
                div {
                    class: "lg:col-span-1",
                    div {
                        class: "sticky top-6",
                        PreviewCard { form: current.clone() }
                    }
                }
            }
        }
    }
}

/// Combined image list with reorder and remove controls. Index 0 is the
/// main image.
#[component]
fn ImageStrip(form: Signal<ProductFormState>) -> Element {
    let mut form = form;
    let images: Vec<String> = form().images.all().to_vec();
    let count = images.len();

    rsx! {
        div {
            class: "grid grid-cols-2 md:grid-cols-4 gap-4",
            for (index, url) in images.into_iter().enumerate() {
                div {
                    key: "{url}",
                    class: "relative group",
                    img {
                        class: "w-full h-32 object-cover rounded-lg border",
                        src: "{url}",
                        alt: "Product image",
                    }
                    if index == 0 {
                        div {
                            class: "absolute top-2 left-2 bg-black text-white text-xs px-2 py-1 rounded",
                            "Main"
                        }
                    }
                    div {
                        class: "absolute bottom-2 left-2 right-2 flex justify-between opacity-0 group-hover:opacity-100 transition-opacity",
                        button {
                            r#type: "button",
                            class: "p-1 bg-white rounded shadow text-xs disabled:opacity-30",
                            disabled: index == 0,
                            onclick: move |_| {
                                if index > 0 {
                                    form.with_mut(|f| f.images.move_image(index, index - 1));
                                }
                            },
                            "◀"
                        }
                        button {
                            r#type: "button",
                            class: "p-1 bg-red-500 text-white rounded shadow text-xs",
                            onclick: move |_| form.with_mut(|f| f.images.remove(index)),
                            "✕"
                        }
                        button {
                            r#type: "button",
                            class: "p-1 bg-white rounded shadow text-xs disabled:opacity-30",
                            disabled: index + 1 >= count,
                            onclick: move |_| form.with_mut(|f| f.images.move_image(index, index + 1)),
                            "▶"
                        }
                    }
                }
            }
        }
    }
}

/// Live preview of the product card, mirroring form state with no network
/// round-trip.
#[component]
fn PreviewCard(form: ProductFormState) -> Element {
    let name = if form.name.is_empty() {
        "Product Name".to_string()
    } else {
        form.name.clone()
    };
    let collection = if form.collection.is_empty() {
        "Collection".to_string()
    } else {
        form.collection.clone()
    };
    let short_description = if form.short_description.is_empty() {
        "Short description will appear here".to_string()
    } else {
        form.short_description.clone()
    };
    let price = if form.price.is_empty() {
        "0".to_string()
    } else {
        form.price.clone()
    };
    let frame = if form.frame_color.is_empty() {
        "Not specified".to_string()
    } else {
        form.frame_color.clone()
    };
    let lens = if form.lens_color.is_empty() {
        "Not specified".to_string()
    } else {
        form.lens_color.clone()
    };
    let sku = if form.sku.is_empty() {
        "Not specified".to_string()
    } else {
        form.sku.clone()
    };
    let main_image = form.images.main_image().map(str::to_string);

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border p-6",
            h3 {
                class: "text-lg font-medium text-gray-900 mb-4",
                "Live Preview"
            }
            div {
                class: "border rounded-lg overflow-hidden hover:shadow-lg transition-shadow",
                if let Some(image) = main_image {
                    img {
                        class: "w-full h-48 object-cover",
                        src: "{image}",
                        alt: "{name}",
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
                        class: "mb-2",
                        span {
                            class: "text-xs text-gray-500 uppercase tracking-wider",
                            "{collection}"
                        }
                    }
                    h4 {
                        class: "text-lg font-medium text-gray-900 mb-2",
                        "{name}"
                    }
                    p {
                        class: "text-sm text-gray-600 mb-3",
                        "{short_description}"
                    }
                    div {
                        class: "flex items-center justify-between",
                        div {
                            class: "flex items-center space-x-2",
                            span {
                                class: "text-lg font-medium text-gray-900",
                                "€{price}"
                            }
                            if !form.original_price.is_empty() {
                                span {
                                    class: "text-sm text-gray-400 line-through",
                                    "€{form.original_price}"
                                }
                            }
                        }
                        div {
                            class: "flex space-x-1",
                            if form.is_featured {
                                span {
                                    class: "px-2 py-1 bg-purple-100 text-purple-800 text-xs rounded",
                                    "Featured"
                                }
                            }
                            if form.is_limited_edition {
                                span {
                                    class: "px-2 py-1 bg-red-100 text-red-800 text-xs rounded",
                                    "Limited"
                                }
                            }
                        }
                    }
                    div {
                        class: "mt-3 space-y-1 text-xs text-gray-500",
                        p {
                            span { class: "font-medium", "Frame: " }
                            "{frame}"
                        }
                        p {
                            span { class: "font-medium", "Lens: " }
                            "{lens}"
                        }
                        p {
                            span { class: "font-medium", "SKU: " }
                            "{sku}"
                        }
                    }
                }
            }
            div {
                class: "mt-4 p-3 rounded-lg bg-gray-50",
                div {
                    class: "flex items-center justify-between",
                    span {
                        class: "text-sm font-medium text-gray-700",
                        "Status:"
                    }
                    StatusBadge { status: form.status }
                }
                if form.status == ProductStatus::Scheduled && !form.scheduled_at.is_empty() {
                    p {
                        class: "text-xs text-gray-500 mt-2",
                        "Scheduled: {form.scheduled_at}"
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

    fn filled_form() -> ProductFormState {
        let mut form = ProductFormState {
            name: "Milano Aviator".to_string(),
            collection: "Signature".to_string(),
            price: "850.00".to_string(),
            sku: "VLN-AV-001".to_string(),
            frame_color: "Gold".to_string(),
            lens_color: "Brown Gradient".to_string(),
            materials: "Italian Acetate".to_string(),
            short_description: "Timeless aviator design".to_string(),
            ..Default::default()
        };
        form.images.set_main("https://cdn.veluna.test/a.jpg".to_string());
        form
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = ProductFormState::default().validate();
        let fields: Vec<&str> = errors.keys().copied().collect();
        assert_eq!(
            fields,
            vec![
                "collection",
                "frame_color",
                "lens_color",
                "main_image",
                "materials",
                "name",
                "price",
                "short_description",
                "sku",
            ]
        );
    }

    #[test]
    fn test_filled_form_passes_validation() {
        assert!(filled_form().validate().is_empty());
    }

    #[test]
    fn test_unparsable_price_is_rejected() {
        let mut form = filled_form();
        form.price = "abc".to_string();
        assert_eq!(form.validate().get("price"), Some(&"Price must be a number"));
    }

    #[test]
    fn test_overlong_short_description_is_rejected() {
        let mut form = filled_form();
        form.short_description = "x".repeat(SHORT_DESCRIPTION_LIMIT + 1);
        assert!(form.validate().contains_key("short_description"));
    }

    #[test]
    fn test_payload_coerces_numbers_and_derives_sale_flag() {
        let mut form = filled_form();
        form.original_price = "1000".to_string();
        form.tags = "luxury, aviator, luxury, ".to_string();

        let payload = form.to_payload(ProductStatus::Active);
        assert_eq!(payload.price, 850.0);
        assert_eq!(payload.original_price, Some(1000.0));
        assert!(payload.is_on_sale);
        assert_eq!(payload.tags, vec!["luxury".to_string(), "aviator".to_string()]);
        assert_eq!(payload.status, ProductStatus::Active);
    }

    #[test]
    fn test_blank_original_price_means_not_on_sale() {
        let payload = filled_form().to_payload(ProductStatus::Active);
        assert_eq!(payload.original_price, None);
        assert!(!payload.is_on_sale);
    }

    #[test]
    fn test_schedule_blocked_without_timestamp() {
        // The Schedule control stays disabled while scheduled_at is unset,
        // so no request can be issued for this variant.
        let form = filled_form();
        assert!(!form.schedule_ready());

        let mut scheduled = form;
        scheduled.scheduled_at = "2026-09-01T10:00".to_string();
        assert!(scheduled.schedule_ready());

        let payload = scheduled.to_payload(ProductStatus::Scheduled);
        assert!(payload.scheduled_at.is_some());
    }

    #[test]
    fn test_payload_clears_schedule_for_non_scheduled_saves() {
        let mut form = filled_form();
        form.scheduled_at = "2026-09-01T10:00".to_string();
        let payload = form.to_payload(ProductStatus::Draft);
        assert_eq!(payload.scheduled_at, None);
        assert_eq!(payload.status, ProductStatus::Draft);
    }

    #[test]
    fn test_from_product_seeds_combined_image_list() {
        let product = Product {
            id: "p-1".to_string(),
            name: "Roma Classic".to_string(),
            collection: "Heritage".to_string(),
            price: 920.0,
            original_price: None,
            sku: "VLN-RC-002".to_string(),
            gender: Gender::Men,
            product_type: ProductType::Eyeglasses,
            frame_color: "Tortoiseshell".to_string(),
            lens_color: "Clear".to_string(),
            materials: "Acetate, Titanium".to_string(),
            made_in: "Italy".to_string(),
            is_limited_edition: false,
            is_featured: true,
            is_on_homepage: false,
            is_in_catalog: true,
            status: ProductStatus::Active,
            scheduled_at: None,
            main_image: "main.jpg".to_string(),
            gallery_images: vec!["g1.jpg".to_string(), "g2.jpg".to_string()],
            short_description: "Round frames".to_string(),
            full_description: Some("Full text".to_string()),
            tags: vec!["heritage".to_string(), "round".to_string()],
            created_at: Utc::now(),
        };

        let form = ProductFormState::from_product(&product);
        assert_eq!(form.images.main_image(), Some("main.jpg"));
        assert_eq!(form.images.len(), 3);
        assert_eq!(form.tags, "heritage, round");
        assert_eq!(form.price, "920");
    }

    #[test]
    fn test_removing_every_image_clears_main_image_field() {
        let mut form = filled_form();
        form.images.remove(0);
        let payload = form.to_payload(ProductStatus::Draft);
        assert_eq!(payload.main_image, "");
        assert!(payload.gallery_images.is_empty());
        assert!(form.validate().contains_key("main_image"));
    }

    #[test]
    fn test_tag_parsing_is_set_like() {
        assert_eq!(
            parse_tags(" a, b ,a,, c "),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert!(parse_tags("   ").is_empty());
    }
}
