use dioxus::prelude::*;
use dioxus_logger::tracing;
use siba::{
    engine::session::Session, model::dataset::Dataset, provider::DataProvider, Config, Error,
};

use crate::client::{
    router::Route,
    store::session::{LoadState, SessionState},
};

#[component]
pub fn App() -> Element {
    let mut state = use_context_provider(|| Signal::new(SessionState::default()));

    // Load the dataset once for the whole page session
    use_future(move || async move {
        match load_dataset().await {
            Ok(dataset) => {
                state.set(SessionState {
                    session: Session::new(dataset),
                    load: LoadState::Ready,
                });
            }
            Err(err) => {
                tracing::error!("Error loading data: {}", err);
                state.write().load = LoadState::Failed;
            }
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Fetch the dataset document from the configured location
async fn load_dataset() -> Result<Dataset, Error> {
    let config = Config::from_env()?;

    #[cfg(feature = "web")]
    let source = siba::provider::HttpSource::new(config.data_url);
    #[cfg(not(feature = "web"))]
    let source = siba::provider::FileSource::new(config.data_url);

    let mut provider = DataProvider::new(source);
    let dataset = provider.fetch_all().await?;

    Ok(dataset.clone())
}
