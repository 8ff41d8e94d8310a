//! Admin dashboard: automatic fine-tuning switch and training-data upload.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::notice_modal::notify;
use crate::net::api::ApiClient;
use crate::net::error::{ApiError, ApiResult};
use crate::net::types::FineTuneStatus;
use crate::state::notice::{Notice, NoticeState};

pub const NO_FILE_MESSAGE: &str = "Please choose an Excel file.";
pub const WRONG_EXTENSION_MESSAGE: &str = "Only .xlsx or .xls files are accepted.";

/// File name from an `<input type="file">` value, which browsers report as
/// `C:\fakepath\name.xlsx`.
pub fn file_name_from_input(value: &str) -> Option<String> {
    let name = value.rsplit(['\\', '/']).next().unwrap_or(value).trim();
    (!name.is_empty()).then(|| name.to_owned())
}

/// Accept only Excel workbooks, by extension, case-insensitively.
///
/// # Errors
///
/// [`ApiError::Validation`] when no file is chosen or its extension is not
/// `.xlsx`/`.xls`.
pub fn validate_upload_name(name: Option<&str>) -> ApiResult<()> {
    let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
        return Err(ApiError::validation(NO_FILE_MESSAGE));
    };
    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
        Ok(())
    } else {
        Err(ApiError::validation(WRONG_EXTENSION_MESSAGE))
    }
}

/// Setting the toggle requests. Anything but a known `enabled` offers enable.
pub fn toggle_target(current: Option<FineTuneStatus>) -> FineTuneStatus {
    current.map_or(FineTuneStatus::Enabled, FineTuneStatus::toggled)
}

fn toggle_label(current: Option<FineTuneStatus>) -> &'static str {
    match toggle_target(current) {
        FineTuneStatus::Enabled => "Enable",
        FineTuneStatus::Disabled => "Disable",
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <div class="admin-dashboard">
            <h1>"Dashboard"</h1>
            <FineTunePanel/>
            <UploadPanel/>
        </div>
    }
}

#[component]
fn FineTunePanel() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let status = RwSignal::new(None::<FineTuneStatus>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api.fine_tune_status().await {
                Ok(current) => status.set(Some(current)),
                Err(e) => error.set(Some(e.user_message("Could not load the fine-tune status."))),
            }
        });
    });

    let on_toggle = move |_| {
        if busy.get_untracked() {
            return;
        }
        let target = toggle_target(status.get_untracked());
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api.set_fine_tune(target).await {
                Ok(()) => {
                    status.set(Some(target));
                    error.set(None);
                    notify(notices, Notice::success(format!("Automatic fine-tuning {}.", target.label())));
                }
                Err(e) => notify(notices, Notice::error(e.user_message("Could not change the fine-tune setting."))),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="panel">
            <h2>"Automatic fine-tuning"</h2>
            <p>
                "Status: "
                <strong>
                    {move || match status.get() {
                        Some(current) => current.label(),
                        None if error.get().is_some() => "unknown",
                        None => "loading...",
                    }}
                </strong>
            </p>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button
                class="btn btn--primary"
                on:click=on_toggle
                disabled=move || busy.get()
            >
                {move || toggle_label(status.get())}
            </button>
        </section>
    }
}

#[component]
fn UploadPanel() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let file_input = NodeRef::<leptos::html::Input>::new();
    let file_name = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        if let Err(e) = validate_upload_name(file_name.get_untracked().as_deref()) {
            error.set(Some(e.user_message(NO_FILE_MESSAGE)));
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_input.get_untracked().and_then(|input| input.files()).and_then(|files| files.get(0))
            else {
                error.set(Some(NO_FILE_MESSAGE.to_owned()));
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                match api.upload_excel(&file).await {
                    Ok(()) => {
                        notify(notices, Notice::success("Training data uploaded."));
                        file_name.set(None);
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                    }
                    Err(e) => {
                        let message = e.user_message("Upload failed.");
                        error.set(Some(message.clone()));
                        notify(notices, Notice::error(message));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, notices);
    };

    view! {
        <section class="panel">
            <h2>"Upload training data"</h2>
            <form class="form" on:submit=on_submit>
                <input
                    node_ref=file_input
                    class="form__input"
                    type="file"
                    accept=".xlsx,.xls"
                    on:change=move |ev| file_name.set(file_name_from_input(&event_target_value(&ev)))
                    disabled=move || busy.get()
                />
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Uploading..." } else { "Upload" }}
                </button>
            </form>
        </section>
    }
}
