use crate::components::bar_chart::BarChart;
use crate::components::cta::Cta;
use crate::components::image_grid_hero::ImageGridHero;
use crate::components::reveal::prefers_reduced_motion;
use crate::components::status_overview::StatusOverview;
use crate::i18n::catalog::Messages;
use crate::i18n::locale::Locale;
use crate::i18n::provider::{use_messages, I18nProvider};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub locale: Locale,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <I18nProvider locale={props.locale}>
            <HomeContent />
        </I18nProvider>
    }
}

/// What a locale page writes into the document head.
#[derive(Debug, PartialEq)]
struct PageMetadata {
    title: String,
    description: String,
    lang: &'static str,
}

impl PageMetadata {
    fn from_messages(messages: &Messages) -> Self {
        Self {
            title: messages.translate("metadata.title"),
            description: messages.translate("metadata.description"),
            lang: messages.locale().as_str(),
        }
    }
}

#[function_component(HomeContent)]
fn home_content() -> Html {
    let messages = use_messages();
    let animated = use_state(|| {
        let reduced = prefers_reduced_motion();
        if reduced {
            log::info!("reduced motion requested, rendering without animation");
        }
        !reduced
    });

    let locale = messages.locale();
    {
        let messages = messages.clone();
        use_effect_with_deps(
            move |_| {
                let metadata = PageMetadata::from_messages(&messages);
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    document.set_title(&metadata.title);
                    if let Some(meta) = document.query_selector("meta[name=description]").ok().flatten() {
                        let _ = meta.set_attribute("content", &metadata.description);
                    }
                    if let Some(root) = document.document_element() {
                        let _ = root.set_attribute("lang", metadata.lang);
                    }
                }
                || ()
            },
            locale,
        );
    }

    html! {
        <div class="home-page">
            <ImageGridHero />
            <StatusOverview />
            <BarChart animated={*animated} />
            <Cta animated={*animated} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_follows_the_page_locale() {
        let en = PageMetadata::from_messages(&Messages::load(Locale::En).unwrap());
        let pt = PageMetadata::from_messages(&Messages::load(Locale::Pt).unwrap());
        assert_eq!(en.lang, "en");
        assert_eq!(pt.lang, "pt");
        assert_ne!(en.title, "metadata.title");
        assert_ne!(en.description, "metadata.description");
        assert_ne!(en.title, pt.title);
    }
}
