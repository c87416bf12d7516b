use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_import_from_excel::form::{EMAIL_FIELD, FILE_FIELD};
use contracts::usecases::u508_import_from_excel::{
    FieldError, ImportField, ImportForm, ImportFromExcel, Texts,
};
use leptos::html::{Form, Input};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;
use web_sys::FormData;

use super::api::{build_form_data, HttpImportTransport};
use super::controller::{ImportController, ImportView};
use super::error::ImportError;
use crate::shared::config::ImportConfig;

const EXCEL_ACCEPT: &str = ".xlsx,application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Id of the inline message element announced for `field`.
fn error_slot_id(field: ImportField) -> String {
    format!("{}-error", field.name())
}

/// [`ImportView`] over the elements and signals of [`ImportPage`].
#[derive(Clone, Copy)]
struct DomImportView {
    texts: &'static Texts,
    form_ref: NodeRef<Form>,
    file_ref: NodeRef<Input>,
    email_ref: NodeRef<Input>,
    set_is_busy: WriteSignal<bool>,
    set_file_error: WriteSignal<Option<&'static str>>,
    set_email_error: WriteSignal<Option<&'static str>>,
}

impl ImportView for DomImportView {
    type Payload = FormData;

    fn read_form(&self) -> ImportForm {
        let file_name = self
            .file_ref
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        let email = self
            .email_ref
            .get_untracked()
            .map(|input| input.value())
            .unwrap_or_default();
        ImportForm::new(file_name, email)
    }

    fn show_field_errors(&self, errors: &[FieldError]) {
        let message_for = |field: ImportField| {
            errors
                .iter()
                .find(|error| error.field == field)
                .map(|error| self.texts.field_error(error))
        };
        self.set_file_error.set(message_for(ImportField::File));
        self.set_email_error.set(message_for(ImportField::Email));
    }

    fn clear_field_errors(&self) {
        self.set_file_error.set(None);
        self.set_email_error.set(None);
    }

    fn build_payload(&self) -> Result<FormData, ImportError> {
        let form = self
            .form_ref
            .get_untracked()
            .ok_or_else(|| ImportError::Payload("form is not mounted".to_string()))?;
        build_form_data(&form)
    }

    fn set_busy(&self, busy: bool) {
        self.set_is_busy.set(busy);
    }

    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn reset_form(&self) {
        if let Some(form) = self.form_ref.get_untracked() {
            form.reset();
        }
    }
}

#[component]
pub fn ImportPage() -> impl IntoView {
    let config = use_context::<ImportConfig>().unwrap_or_default();
    let texts = config.locale.texts();

    let form_ref = NodeRef::<Form>::new();
    let file_ref = NodeRef::<Input>::new();
    let email_ref = NodeRef::<Input>::new();

    let (is_busy, set_is_busy) = signal(false);
    let (file_error, set_file_error) = signal(Option::<&'static str>::None);
    let (email_error, set_email_error) = signal(Option::<&'static str>::None);

    let dom = DomImportView {
        texts,
        form_ref,
        file_ref,
        email_ref,
        set_is_busy,
        set_file_error,
        set_email_error,
    };

    // Not Copy, so keep them out of the reactive closures
    let controller_sv = StoredValue::new_local(ImportController::new(config.locale));
    let transport_sv = StoredValue::new_local(HttpImportTransport::new(&config.endpoint));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let controller = controller_sv.get_value();
        let transport = transport_sv.get_value();
        spawn_local(async move {
            let outcome = controller.submit(&dom, &transport).await;
            log::debug!("import submission ended: {:?}", outcome);
        });
    };

    view! {
        <div class="import-page">
            <h2 class="import-page__title">{texts.title}</h2>
            <p class="import-page__description">{texts.description}</p>

            <form
                id={ImportFromExcel::full_name()}
                class="import-form"
                node_ref=form_ref
                novalidate=true
                on:submit=on_submit
            >
                <div class="form-group">
                    <label for="file">{texts.file_label}</label>
                    <input
                        id="file"
                        name=FILE_FIELD
                        type="file"
                        accept=EXCEL_ACCEPT
                        aria-describedby={error_slot_id(ImportField::File)}
                        aria-invalid=move || file_error.get().is_some().to_string()
                        node_ref=file_ref
                        disabled=move || is_busy.get()
                        on:change=move |_| set_file_error.set(None)
                    />
                    {move || file_error.get().map(|msg| view! {
                        <span id={error_slot_id(ImportField::File)} class="text-danger" role="alert">{msg}</span>
                    })}
                </div>

                <div class="form-group">
                    <label for="email">{texts.email_label}</label>
                    <input
                        id="email"
                        name=EMAIL_FIELD
                        type="email"
                        placeholder={texts.email_placeholder}
                        aria-describedby={error_slot_id(ImportField::Email)}
                        aria-invalid=move || email_error.get().is_some().to_string()
                        node_ref=email_ref
                        disabled=move || is_busy.get()
                        on:input=move |_| set_email_error.set(None)
                    />
                    {move || email_error.get().map(|msg| view! {
                        <span id={error_slot_id(ImportField::Email)} class="text-danger" role="alert">{msg}</span>
                    })}
                </div>

                <div class="form-actions">
                    <button
                        id="submit"
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_busy.get()
                    >
                        {texts.submit}
                    </button>
                    <Show when=move || is_busy.get()>
                        <span id="spinner" class="import-form__spinner">
                            <Spinner />
                            " "
                            {texts.busy}
                        </span>
                    </Show>
                </div>
            </form>
        </div>
    }
}
