use crate::shared::config::ImportConfig;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_import_from_excel::ImportFromExcel;
use crate::usecases::u508_import_from_excel::ImportPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Resolved once per page load; the page reads it from context.
    let config = ImportConfig::load();
    log::info!(
        "{} ({}) ready: endpoint={}, locale={:?}",
        ImportFromExcel::display_name(),
        ImportFromExcel::full_name(),
        config.endpoint,
        config.locale
    );
    provide_context(config);

    view! {
        <main class="app-layout">
            <ImportPage />
        </main>
    }
}
