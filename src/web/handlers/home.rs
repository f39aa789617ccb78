//! Landing page and the simulated download form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;

use crate::domain::content::{
    FAQ, FEATURES, FORMAT_OPTIONS, FaqEntry, Feature, FormatOption, PRECAUTIONS, Precaution,
};
use crate::state::AppState;
use crate::utils::tweet_url::parse_tweet_url;
use crate::web::views::SiteCard;

/// Shown when the submitted URL is not a Twitter/X URL.
pub const INVALID_URL_MESSAGE: &str = "有効なTwitter URLを入力してください";

/// Form body of `POST /`.
#[derive(Debug, Default, Deserialize)]
pub struct DownloadFormInput {
    #[serde(default)]
    pub url: String,
}

/// State of the download form card.
#[derive(Debug, Default)]
pub struct DownloadForm {
    /// Value echoed back into the input.
    pub url: String,
    pub error: Option<String>,
    pub result: Option<DownloadResult>,
}

/// Simulated result shown for a valid URL.
#[derive(Debug)]
pub struct DownloadResult {
    pub status_id: Option<String>,
    pub formats: &'static [FormatOption],
}

/// Template for the landing page.
///
/// Renders `templates/index.html` with:
/// - Hero and download form
/// - Ranking-site list
/// - Precautions and FAQ
/// - Feature cards
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub form: DownloadForm,
    pub sites: Vec<SiteCard>,
    pub precautions: &'static [Precaution],
    pub faq: &'static [FaqEntry],
    pub features: &'static [Feature],
}

impl IndexTemplate {
    fn new(state: &AppState, form: DownloadForm) -> Self {
        Self {
            form,
            sites: state
                .site_service
                .top_sites(None)
                .into_iter()
                .map(SiteCard::from)
                .collect(),
            precautions: PRECAUTIONS,
            faq: FAQ,
            features: FEATURES,
        }
    }
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> IndexTemplate {
    IndexTemplate::new(&state, DownloadForm::default())
}

/// Handles the download form.
///
/// Validates the URL and re-renders the landing page with either an error
/// message or the fixed list of formats. No download is recorded and no
/// external host is contacted.
///
/// # Endpoint
///
/// `POST /`
pub async fn download_form_handler(
    State(state): State<AppState>,
    Form(input): Form<DownloadFormInput>,
) -> IndexTemplate {
    let form = match parse_tweet_url(&input.url) {
        Ok(tweet) => {
            tracing::debug!(status_id = ?tweet.status_id, "Simulated download requested");
            DownloadForm {
                url: tweet.url,
                error: None,
                result: Some(DownloadResult {
                    status_id: tweet.status_id,
                    formats: FORMAT_OPTIONS,
                }),
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected download form input");
            DownloadForm {
                url: input.url,
                error: Some(INVALID_URL_MESSAGE.to_string()),
                result: None,
            }
        }
    };

    IndexTemplate::new(&state, form)
}
