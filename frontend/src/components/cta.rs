use crate::components::reveal::FadeInUp;
use crate::i18n::provider::use_messages;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    #[prop_or(true)]
    pub animated: bool,
}

#[function_component(Cta)]
pub fn cta(props: &CtaProps) -> Html {
    let messages = use_messages();

    html! {
        <section class="cta-section">
            <div class="cta-content">
                <FadeInUp animated={props.animated}>
                    <h2>{ messages.translate("cta.title") }</h2>
                </FadeInUp>
                <FadeInUp animated={props.animated}>
                    <p>{ messages.translate("cta.description") }</p>
                </FadeInUp>
                <FadeInUp animated={props.animated}>
                    <button class="cta-button">{ messages.translate("cta.button") }</button>
                </FadeInUp>
            </div>
            <style>
                {r#"
                    .cta-section {
                        padding: 4rem 0;
                    }
                    .cta-content {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                        text-align: center;
                    }
                    .cta-content h2 {
                        color: #f8fafc;
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin: 0 0 1.5rem 0;
                    }
                    .cta-content p {
                        color: #cbd5e1;
                        font-size: 1.125rem;
                        max-width: 42rem;
                        margin: 0 auto 2rem auto;
                    }
                    .cta-button {
                        background: #2563eb;
                        color: #fff;
                        font-weight: 600;
                        padding: 0.75rem 2rem;
                        border: none;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                        cursor: pointer;
                        transition: background-color 0.2s;
                    }
                    .cta-button:hover {
                        background: #1d4ed8;
                    }
                    @media (max-width: 640px) {
                        .cta-section {
                            padding: 3rem 0;
                        }
                        .cta-content h2 {
                            font-size: 1.5rem;
                        }
                        .cta-content p {
                            font-size: 1rem;
                        }
                        .cta-button {
                            padding: 0.75rem 1.5rem;
                            font-size: 0.875rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
