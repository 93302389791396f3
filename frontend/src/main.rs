use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod conservation {
    pub mod model;
    pub mod chart;
}
mod motion {
    pub mod keyframes;
    pub mod scroll;
    pub mod counter;
    pub mod in_view;
}
mod i18n {
    pub mod locale;
    pub mod catalog;
    pub mod provider;
}
mod components {
    pub mod reveal;
    pub mod language_switcher;
    pub mod image_grid_hero;
    pub mod status_overview;
    pub mod bar_chart;
    pub mod cta;
}
mod pages {
    pub mod home;
}

use i18n::locale::Locale;
use pages::home::Home;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/:locale")]
    Localized { locale: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Locale the browser asks for, if we support it.
fn browser_locale() -> Locale {
    let requested = web_sys::window().and_then(|w| w.navigator().language());
    Locale::resolve(requested.as_deref())
}

fn redirect_to(locale: Locale) -> Html {
    html! { <Redirect<Route> to={Route::Localized { locale: locale.as_str().to_string() }} /> }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Root => {
            let locale = browser_locale();
            info!("Redirecting / to /{}", locale);
            redirect_to(locale)
        },
        Route::Localized { locale } => match Locale::parse(&locale) {
            Some(locale) => {
                info!("Rendering Home page for {}", locale);
                html! { <Home locale={locale} /> }
            },
            None => {
                info!("Unknown locale {:?}, falling back to {}", locale, Locale::default());
                redirect_to(Locale::default())
            },
        },
        Route::NotFound => {
            info!("Route not found, redirecting home");
            redirect_to(Locale::default())
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
