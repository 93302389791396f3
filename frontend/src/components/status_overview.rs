use crate::config;
use crate::i18n::provider::use_messages;
use crate::motion::counter::{Counter, Tick};
use crate::motion::in_view::{use_in_view, InViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

// (target, suffix, label key)
const STATS: [(u32, &str, &str); 4] = [
    (150, "+", "stats.speciesTracked"),
    (45, "", "stats.nearThreatened"),
    (23, "", "stats.vulnerable"),
    (12, "", "stats.endangered"),
];

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[function_component(StatusOverview)]
pub fn status_overview() -> Html {
    let messages = use_messages();

    let stats = STATS.iter().enumerate().map(|(index, (num, suffix, key))| {
        html! {
            <>
                if index > 0 {
                    <div class="stat-divider"></div>
                }
                <Stat num={*num} suffix={*suffix} subheading={messages.translate(key)} />
            </>
        }
    });

    html! {
        <div class="status-overview">
            <h2>{ messages.translate("stats.title") }</h2>
            <div class="stat-row">
                { for stats }
            </div>
            <style>
                {r#"
                    .status-overview {
                        max-width: 48rem;
                        margin: 0 auto;
                        padding: 6rem 1rem;
                    }
                    .status-overview h2 {
                        color: #fff;
                        text-align: center;
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 4rem;
                    }
                    .stat-row {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .stat {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        width: 18rem;
                    }
                    .stat-number {
                        color: #fff;
                        font-size: 3.75rem;
                        font-weight: 600;
                        text-align: center;
                        margin: 0 0 0.5rem 0;
                    }
                    .stat-label {
                        color: #d1d5db;
                        max-width: 12rem;
                        text-align: center;
                        margin: 0;
                    }
                    .stat-divider {
                        width: 1px;
                        height: 3rem;
                        background: #c7d2fe;
                    }
                    @media (max-width: 640px) {
                        .status-overview h2 {
                            font-size: 1rem;
                            margin-bottom: 2rem;
                        }
                        .stat-row {
                            flex-direction: column;
                        }
                        .stat {
                            padding: 2rem 0;
                        }
                        .stat-number {
                            font-size: 4.5rem;
                        }
                        .stat-divider {
                            width: 3rem;
                            height: 1px;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatProps {
    pub num: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub decimals: usize,
    pub subheading: AttrValue,
}

/// A number that counts up from zero the first time it scrolls into view.
#[function_component(Stat)]
pub fn stat(props: &StatProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), InViewOptions::default());
    let counter = {
        let (num, decimals) = (props.num, props.decimals);
        use_mut_ref(move || Counter::new(num, config::COUNTER_DURATION_MS).with_decimals(decimals))
    };
    let display = use_state(String::new);
    let running = use_state(|| false);

    {
        let counter = counter.clone();
        let running = running.clone();
        use_effect_with_deps(
            move |in_view| {
                if counter.borrow_mut().on_visibility(*in_view, now_ms()) {
                    log::debug!("counter to {} started", counter.borrow().target());
                    running.set(true);
                }
                || ()
            },
            in_view,
        );
    }

    // A new target never replays the animation
    {
        let counter = counter.clone();
        let display = display.clone();
        let running = running.clone();
        use_effect_with_deps(
            move |num| {
                let mut counter = counter.borrow_mut();
                if counter.target() != *num {
                    counter.retarget(*num);
                    if !*running {
                        if let Tick::Finished(value) = counter.tick(now_ms()) {
                            display.set(counter.format(value));
                        }
                    }
                }
                || ()
            },
            props.num,
        );
    }

    // Ticks while running; the timer is cleared when it stops or on unmount.
    {
        let counter = counter.clone();
        let display = display.clone();
        let running_handle = running.clone();
        use_interval(
            move || {
                let counter = counter.borrow();
                match counter.tick(now_ms()) {
                    Tick::Idle => {}
                    Tick::Running(value) => display.set(counter.format(value)),
                    Tick::Finished(value) => {
                        display.set(counter.format(value));
                        running_handle.set(false);
                    }
                }
            },
            if *running { config::FRAME_INTERVAL_MS } else { 0 },
        );
    }

    html! {
        <div ref={node} class="stat">
            <p class="stat-number">
                <span>{ counter.borrow().display(&display) }</span>
                { props.suffix.clone() }
            </p>
            <p class="stat-label">{ props.subheading.clone() }</p>
        </div>
    }
}
