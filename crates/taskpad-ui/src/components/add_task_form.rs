use crate::features::tasks::logic::AddTaskForm as AddTaskFormState;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AddTaskFormProps {
    pub on_add: Callback<String>,
}

#[function_component(AddTaskForm)]
pub(crate) fn add_task_form(props: &AddTaskFormProps) -> Html {
    let form = use_state(AddTaskFormState::default);

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.set_input(input.value());
                form.set(next);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            if let Ok(title) = next.submit() {
                form.set(next);
                on_add.emit(title);
            }
        })
    };

    html! {
        <form class="add-task" onsubmit={on_submit}>
            <input
                type="text"
                placeholder="Add new todo"
                value={form.input.clone()}
                oninput={on_input}
            />
            <button type="submit">{"Add Todo"}</button>
        </form>
    }
}
