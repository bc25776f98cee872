//! Task list page.

use gloo::dialogs::alert;
use taskpad_api_models::{TaskFilter, TaskId};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::api::ApiCtx;
use crate::components::add_task_form::AddTaskForm;
use crate::components::filter_buttons::FilterButtons;
use crate::components::task_list::TaskList;
use crate::core::store::AppStore;
use crate::features::tasks::actions::TaskAction;
use crate::features::tasks::controller::{TaskCommand, apply_effect, execute};
use crate::features::tasks::state::{select_visible_tasks, set_filter};

#[function_component(TasksPage)]
pub(crate) fn tasks_page() -> Html {
    let api = use_context::<ApiCtx>();
    let dispatch = Dispatch::<AppStore>::new();
    let session = use_selector(|store: &AppStore| store.auth.session.clone());
    let visible = use_selector(|store: &AppStore| select_visible_tasks(&store.tasks));
    let filter = use_selector(|store: &AppStore| store.tasks.filter);

    let run = {
        let dispatch = dispatch.clone();
        let session = (*session).clone();
        Callback::from(move |command: TaskCommand| {
            let Some(api) = api.clone() else {
                return;
            };
            let dispatch = dispatch.clone();
            let session = session.clone();
            yew::platform::spawn_local(async move {
                match execute(&*api, &session, command).await {
                    Ok(effect) => {
                        let mut effect = Some(effect);
                        dispatch.reduce_mut(|store| {
                            if let Some(effect) = effect.take() {
                                apply_effect(&mut store.tasks, effect);
                            }
                        });
                    }
                    Err(failure) => alert(&failure.user_message()),
                }
            });
        })
    };

    let on_action = {
        let run = run.clone();
        Callback::from(move |action: TaskAction| match action {
            TaskAction::Filter(next) => {
                dispatch.reduce_mut(|store| set_filter(&mut store.tasks, next));
            }
            other => {
                if let Some(command) = other.command() {
                    run.emit(command);
                }
            }
        })
    };

    {
        let token = session.token().map(str::to_string);
        use_effect_with_deps(
            move |token: &Option<String>| {
                if token.is_some() {
                    run.emit(TaskCommand::Load);
                }
                || ()
            },
            token,
        );
    }

    let on_add = on_action.reform(TaskAction::Add);
    let on_filter = on_action.reform(TaskAction::Filter);
    let on_toggle =
        on_action.reform(|(id, completed): (TaskId, bool)| TaskAction::Toggle { id, completed });
    let on_delete = on_action.reform(TaskAction::Delete);
    let current: TaskFilter = *filter;

    html! {
        <section class="page">
            <h1>{"Your Todos"}</h1>
            <AddTaskForm on_add={on_add} />
            <FilterButtons current={current} on_change={on_filter} />
            <TaskList tasks={(*visible).clone()} on_toggle={on_toggle} on_delete={on_delete} />
        </section>
    }
}
