use crate::i18n::locale::SUPPORTED_LOCALES;
use crate::i18n::provider::use_messages;
use crate::Route;
use yew::prelude::*;
use yew_router::components::Link;

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let messages = use_messages();
    let active = messages.locale();

    html! {
        <div class="language-switcher" aria-label={messages.translate("nav.language")}>
            { for SUPPORTED_LOCALES.iter().map(|locale| {
                let classes = classes!("language-link", (*locale == active).then(|| "active"));
                html! {
                    <Link<Route>
                        to={Route::Localized { locale: locale.as_str().to_string() }}
                        classes={classes}
                    >
                        { locale.native_name() }
                    </Link<Route>>
                }
            }) }
            <style>
                {r#"
                    .language-switcher {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .language-link {
                        color: #cbd5e1;
                        font-size: 0.875rem;
                        text-decoration: none;
                    }
                    .language-link:hover {
                        color: #fff;
                    }
                    .language-link.active {
                        color: #fff;
                        font-weight: 600;
                        border-bottom: 1px solid #86efac;
                    }
                "#}
            </style>
        </div>
    }
}
