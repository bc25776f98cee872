use taskpad_api_models::TaskFilter;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FilterButtonsProps {
    pub current: TaskFilter,
    pub on_change: Callback<TaskFilter>,
}

#[function_component(FilterButtons)]
pub(crate) fn filter_buttons(props: &FilterButtonsProps) -> Html {
    html! {
        <div class="filters" role="group" aria-label="Filter tasks">
            {for TaskFilter::all().into_iter().map(|filter| {
                let active = filter == props.current;
                let onclick = {
                    let on_change = props.on_change.clone();
                    Callback::from(move |_| on_change.emit(filter))
                };
                html! {
                    <button
                        class={classes!("ghost", active.then_some("active"))}
                        aria-pressed={active.to_string()}
                        onclick={onclick}
                    >
                        {filter.label()}
                    </button>
                }
            })}
        </div>
    }
}
