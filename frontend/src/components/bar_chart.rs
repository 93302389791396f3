use crate::components::reveal::FadeInUp;
use crate::conservation::chart::{bar_height, visible_records, zero_records, Selection};
use crate::conservation::model::{Dataset, DatasetCode};
use crate::i18n::catalog::{I18nError, Messages};
use crate::i18n::provider::use_messages;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    /// Without animation the chart renders its final state straight away.
    #[prop_or(true)]
    pub animated: bool,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let messages = use_messages();
    let selection = use_state(Selection::default);

    let locale = messages.locale();
    let datasets = {
        let messages = messages.clone();
        use_memo(move |_| load_datasets(&messages), locale)
    };

    // Deep links like `#L3` preselect a dataset; anything else is ignored.
    {
        let selection = selection.clone();
        use_effect_with_deps(
            move |_| {
                let hash = web_sys::window()
                    .and_then(|w| w.location().hash().ok())
                    .unwrap_or_default();
                let mut next = *selection;
                if next.select_from_hash(&hash) {
                    selection.set(next);
                }
                || ()
            },
            (),
        );
    }

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |code: DatasetCode| {
            let mut next = *selection;
            if next.select_code(code) {
                log::debug!("showing dataset {}", code);
                selection.set(next);
            }
        })
    };

    let current = selection.current();
    let dataset = DatasetCode::ALL
        .iter()
        .position(|code| *code == current)
        .and_then(|index| datasets.get(index))
        .and_then(|entry| entry.as_ref().ok());

    let Some(dataset) = dataset else {
        return html! {
            <section class="bar-chart">
                <p class="bar-chart-unavailable">{ messages.translate("barChart.dataUnavailable") }</p>
                { chart_styles() }
            </section>
        };
    };

    let zero = zero_records(dataset);

    html! {
        <section class="bar-chart">
            <div class="bar-chart-inner">
                <FadeInUp animated={props.animated} class={classes!("bar-chart-grid")}>
                    <DatasetSelector
                        selected={current}
                        on_select={on_select}
                        description={dataset.description.clone()}
                    />
                    <Bars
                        dataset={dataset.clone()}
                        animated={props.animated}
                        species_unit={messages.translate("barChart.speciesUnit")}
                    />
                </FadeInUp>
                if !zero.is_empty() {
                    <FadeInUp animated={props.animated} class={classes!("unrecorded-panel")}>
                        <h4>{ messages.translate("barChart.noSpeciesRecorded") }</h4>
                        <p>{ messages.translate("barChart.noSpeciesDescription") }</p>
                        <div class="unrecorded-tags">
                            { for zero.iter().map(|record| html! {
                                <span key={record.acronym.as_str()} class="unrecorded-tag">
                                    { format!("{} - {}", record.acronym, record.status) }
                                </span>
                            }) }
                        </div>
                    </FadeInUp>
                }
            </div>
            { chart_styles() }
        </section>
    }
}

/// Every dataset table of the catalog, in `DatasetCode::ALL` order. Rejected
/// tables are logged and kept as errors so the chart can show a notice.
fn load_datasets(messages: &Messages) -> Vec<Result<Dataset, I18nError>> {
    DatasetCode::ALL
        .iter()
        .map(|code| {
            messages.dataset(*code).map_err(|e| {
                log::error!("dataset {} rejected: {}", code, e);
                e
            })
        })
        .collect()
}

#[derive(Properties, PartialEq)]
struct DatasetSelectorProps {
    selected: DatasetCode,
    on_select: Callback<DatasetCode>,
    description: AttrValue,
}

#[function_component(DatasetSelector)]
fn dataset_selector(props: &DatasetSelectorProps) -> Html {
    let messages = use_messages();

    html! {
        <div class="dataset-selector">
            <h3>{ messages.translate("barChart.title") }</h3>
            <div class="dataset-buttons">
                { for DatasetCode::ALL.iter().map(|code| {
                    let code = *code;
                    let onclick = props.on_select.reform(move |_: MouseEvent| code);
                    html! {
                        <button
                            key={code.as_str()}
                            class={classes!("dataset-button", (code == props.selected).then(|| "selected"))}
                            style={format!("background: {};", code.button_color())}
                            onclick={onclick}
                        >
                            { code.as_str() }
                        </button>
                    }
                }) }
            </div>
            <div class="dataset-caption">
                { messages.translate("barChart.showingDataFor") }
                {" "}
                <span class="dataset-code">{ props.selected.as_str() }</span>
                {" "}
                <span class="dataset-description">{ format!("({})", props.description) }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BarsProps {
    dataset: Dataset,
    animated: bool,
    species_unit: AttrValue,
}

#[function_component(Bars)]
fn bars(props: &BarsProps) -> Html {
    let visible = visible_records(&props.dataset);
    let transition = if props.animated {
        "transition: height 0.6s cubic-bezier(0.34, 1.56, 0.64, 1);"
    } else {
        ""
    };

    html! {
        <div
            class="bars"
            style={format!("grid-template-columns: repeat({}, minmax(0, 1fr));", visible.len())}
        >
            { for visible.iter().map(|bar| {
                let record = bar.record;
                let height = bar_height(record, &visible);
                html! {
                    <div key={record.acronym.as_str()} class="bar-column">
                        <div class="bar-track">
                            <span
                                class="bar-fill"
                                style={format!("height: {:.2}%; background: {}; {}", height, bar.color(), transition)}
                            />
                            <span class="bar-label">
                                <b>{ record.acronym.as_str() }</b>
                                <br />
                                <span class="bar-count">{ record.count.to_string() }</span>
                            </span>
                        </div>
                        <div class="bar-tooltip">
                            <div class="bar-tooltip-title">{ record.acronym.as_str() }</div>
                            <div class="bar-tooltip-status">{ record.status.clone() }</div>
                            <div class="bar-tooltip-count">{ format!("{} {}", record.count, props.species_unit) }</div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

fn chart_styles() -> Html {
    html! {
        <style>
            {r#"
                .bar-chart {
                    padding: 3rem 1rem;
                }
                .bar-chart-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .bar-chart-grid {
                    display: grid;
                    grid-template-columns: 1fr 500px;
                    gap: 3rem;
                    align-items: center;
                }
                .bar-chart-unavailable {
                    color: #cbd5e1;
                    text-align: center;
                }
                .dataset-selector {
                    padding: 3rem 0;
                }
                .dataset-selector h3 {
                    color: #f8fafc;
                    font-size: 1.875rem;
                    font-weight: 600;
                    margin: 0 0 1.5rem 0;
                }
                .dataset-buttons {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .dataset-button {
                    width: 100%;
                    border: none;
                    border-radius: 0.375rem;
                    padding: 0.5rem 0;
                    color: #fff;
                    font-weight: 500;
                    cursor: pointer;
                    transition: transform 0.15s;
                }
                .dataset-button:hover {
                    transform: scale(1.015);
                }
                .dataset-button:active {
                    transform: scale(0.985);
                }
                .dataset-button.selected {
                    box-shadow: 0 0 0 2px #fff;
                }
                .dataset-caption {
                    color: #94a3b8;
                    font-size: 0.875rem;
                }
                .dataset-code {
                    color: #fff;
                    font-weight: 600;
                }
                .dataset-description {
                    color: #cbd5e1;
                }
                .bars {
                    display: grid;
                    gap: 0.5rem;
                    min-height: 200px;
                }
                .bar-column {
                    position: relative;
                }
                .bar-track {
                    position: relative;
                    display: flex;
                    align-items: flex-end;
                    height: 100%;
                    min-height: 200px;
                    overflow: hidden;
                    border-radius: 1rem;
                    background: linear-gradient(to bottom, #334155, #1e293b);
                }
                .bar-fill {
                    position: relative;
                    z-index: 0;
                    width: 100%;
                }
                .bar-label {
                    position: absolute;
                    bottom: 0;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 100%;
                    padding: 0.5rem;
                    box-sizing: border-box;
                    text-align: center;
                    color: #f8fafc;
                    font-size: 0.875rem;
                }
                .bar-count {
                    color: #e2e8f0;
                    font-size: 0.75rem;
                }
                .bar-tooltip {
                    position: absolute;
                    bottom: 100%;
                    left: 50%;
                    transform: translateX(-50%);
                    margin-bottom: 0.5rem;
                    padding: 0.5rem 0.75rem;
                    background: #1e293b;
                    color: #f8fafc;
                    font-size: 0.875rem;
                    border-radius: 0.5rem;
                    white-space: nowrap;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.2s;
                    z-index: 10;
                }
                .bar-column:hover .bar-tooltip {
                    opacity: 1;
                }
                .bar-tooltip-title {
                    font-weight: 600;
                }
                .bar-tooltip-status {
                    color: #cbd5e1;
                    font-size: 0.75rem;
                }
                .bar-tooltip-count {
                    color: #94a3b8;
                    font-size: 0.75rem;
                }
                .unrecorded-panel {
                    margin-top: 2rem;
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    background: #1e293b;
                }
                .unrecorded-panel h4 {
                    color: #f8fafc;
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin: 0 0 0.75rem 0;
                }
                .unrecorded-panel p {
                    color: #cbd5e1;
                    font-size: 0.875rem;
                    margin: 0 0 0.75rem 0;
                }
                .unrecorded-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .unrecorded-tag {
                    padding: 0.25rem 0.75rem;
                    border-radius: 0.375rem;
                    background: #334155;
                    color: #e2e8f0;
                    font-size: 0.875rem;
                }
                @media (max-width: 768px) {
                    .bar-chart-grid {
                        grid-template-columns: 1fr;
                        gap: 0.5rem;
                    }
                }
            "#}
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::locale::Locale;

    #[test]
    fn loads_one_table_per_dataset_code() {
        for locale in [Locale::En, Locale::Pt] {
            let messages = Messages::load(locale).unwrap();
            let datasets = load_datasets(&messages);
            assert_eq!(datasets.len(), DatasetCode::ALL.len());
            for (code, dataset) in DatasetCode::ALL.iter().zip(&datasets) {
                assert_eq!(dataset.as_ref().unwrap().code, *code);
            }
        }
    }

    #[test]
    fn rejected_table_stays_in_its_slot() {
        let messages = Messages::parse(
            Locale::En,
            r#"{"barChart":{"datasets":{"L3":{"description":"x","data":[]}}}}"#,
        )
        .unwrap();
        let datasets = load_datasets(&messages);
        assert!(matches!(datasets[0], Err(I18nError::MissingKey(_))));
        assert!(matches!(datasets[1], Err(I18nError::Dataset(_))));
    }
}
