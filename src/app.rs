//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::config::ClientConfig;
use crate::pages::predictor::PredictorPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Resolves the [`ClientConfig`] once (from `<body>` data attributes in the
/// browser) and provides it to the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    let config = ClientConfig::from_document();
    #[cfg(not(feature = "hydrate"))]
    let config = ClientConfig::default();

    log::debug!("predict endpoint {} (timeout {} ms)", config.endpoint, config.request_timeout_ms);
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/agave-client.css"/>
        <Title text="AgavePredictor ML"/>
        <PredictorPage/>
    }
}
