use super::catalog::Messages;
use super::locale::Locale;
use std::rc::Rc;
use yew::prelude::*;

/// Shared handle to the active catalog. Compared by identity, so consumers
/// only re-render when the locale actually changes.
#[derive(Clone, Debug)]
pub struct I18n(pub Rc<Messages>);

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct I18nProviderProps {
    pub locale: Locale,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(I18nProvider)]
pub fn i18n_provider(props: &I18nProviderProps) -> Html {
    let messages = use_memo(|locale| Messages::load_or_empty(*locale), props.locale);

    html! {
        <ContextProvider<I18n> context={I18n(messages)}>
            { for props.children.iter() }
        </ContextProvider<I18n>>
    }
}

/// The catalog of the nearest [`I18nProvider`], or the default locale when a
/// component is rendered outside one.
#[hook]
pub fn use_messages() -> Rc<Messages> {
    match use_context::<I18n>() {
        Some(I18n(messages)) => messages,
        None => {
            log::warn!("rendered outside I18nProvider, using {}", Locale::default());
            Rc::new(Messages::load_or_empty(Locale::default()))
        }
    }
}
