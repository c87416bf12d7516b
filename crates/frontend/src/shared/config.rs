//! Runtime configuration of the import page.
//!
//! Sources, highest priority first:
//! - `?lang=sv` query parameter (locale only)
//! - `<meta name="import-endpoint" content="...">` and `<html lang="...">`
//!   in the served `index.html`
//! - built-in defaults (`/import`, English)

use contracts::usecases::u508_import_from_excel::Locale;
use serde::Deserialize;
use web_sys::window;

use super::api_utils::{api_url, DEFAULT_IMPORT_ENDPOINT};

const ENDPOINT_META: &str = "import-endpoint";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    /// URL the multipart form is posted to
    pub endpoint: String,
    pub locale: Locale,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_IMPORT_ENDPOINT.to_string(),
            locale: Locale::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QueryOverrides {
    lang: Option<String>,
}

impl ImportConfig {
    /// Read the configuration from the current document.
    pub fn load() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::resolve(meta_content(ENDPOINT_META), &search, document_lang())
    }

    pub fn resolve(
        endpoint_meta: Option<String>,
        search: &str,
        html_lang: Option<String>,
    ) -> Self {
        let endpoint = endpoint_meta
            .map(|endpoint| api_url(&endpoint))
            .unwrap_or_else(|| DEFAULT_IMPORT_ENDPOINT.to_string());

        let overrides: QueryOverrides = match serde_qs::from_str(search.trim_start_matches('?')) {
            Ok(overrides) => overrides,
            Err(err) => {
                log::warn!("ignoring malformed query string {:?}: {}", search, err);
                QueryOverrides::default()
            }
        };

        let locale = overrides
            .lang
            .as_deref()
            .and_then(Locale::from_tag)
            .or_else(|| html_lang.as_deref().and_then(Locale::from_tag))
            .unwrap_or_default();

        Self { endpoint, locale }
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?;
    meta.get_attribute("content")
}

fn document_lang() -> Option<String> {
    window()?
        .document()?
        .document_element()?
        .get_attribute("lang")
}
