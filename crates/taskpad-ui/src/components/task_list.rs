use crate::features::tasks::actions::{delete_intent, toggle_intent};
use taskpad_api_models::{Task, TaskId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TaskListProps {
    pub tasks: Vec<Task>,
    pub on_toggle: Callback<(TaskId, bool)>,
    pub on_delete: Callback<TaskId>,
}

#[function_component(TaskList)]
pub(crate) fn task_list(props: &TaskListProps) -> Html {
    html! {
        <ul class="task-list">
            {for props.tasks.iter().map(|task| {
                render_row(task, &props.on_toggle, &props.on_delete)
            })}
        </ul>
    }
}

fn render_row(
    task: &Task,
    on_toggle: &Callback<(TaskId, bool)>,
    on_delete: &Callback<TaskId>,
) -> Html {
    let intent = toggle_intent(task);
    let id = delete_intent(task);
    let checkbox_id = format!("task-{id}");
    let onchange = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(intent))
    };
    let ondelete = {
        let on_delete = on_delete.clone();
        Callback::from(move |_| on_delete.emit(id))
    };

    html! {
        <li key={id.to_string()} class={classes!("task", task.completed.then_some("done"))}>
            <input
                type="checkbox"
                id={checkbox_id.clone()}
                checked={task.completed}
                onchange={onchange}
            />
            <label for={checkbox_id}>{task.title.clone()}</label>
            <button class="ghost" onclick={ondelete}>{"Delete"}</button>
        </li>
    }
}
