use web_sys::{HtmlInputElement, HtmlSelectElement};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_app_context;
use crate::models::{RegisterRequest, Role};
use crate::routes::Route;

#[derive(Clone, Copy, PartialEq)]
enum TextField {
    Username,
    Email,
    Password,
}

#[function_component(Register)]
pub fn register() -> Html {
    let ctx = use_app_context();
    let navigator = use_navigator();

    let form = use_state(RegisterRequest::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_text = |field: TextField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            match field {
                TextField::Username => next.username = input.value(),
                TextField::Email => next.email = input.value(),
                TextField::Password => next.password = input.value(),
            }
            form.set(next);
        })
    };

    let on_role = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.role = Role::parse(&select.value()).unwrap_or(Role::Student);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            loading.set(true);
            error.set(None);

            let auth = ctx.auth.clone();
            let navigator = navigator.clone();
            let request = (*form).clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match auth.register(&request).await {
                    Ok(()) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(e) => error.set(Some(e.message)),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="container">
            <div class="header">
                <h1>{"Register"}</h1>
                <p>{"Create your account"}</p>
            </div>
            <div class="card card-narrow">
                <form class="form" onsubmit={on_submit}>
                    if let Some(message) = (*error).clone() {
                        <div class="error">{format!("⚠ {}", message)}</div>
                    }
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input id="username" type="text" class="form-input"
                            value={form.username.clone()} oninput={on_text(TextField::Username)} required=true />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input id="email" type="email" class="form-input"
                            value={form.email.clone()} oninput={on_text(TextField::Email)} required=true />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input id="password" type="password" class="form-input"
                            value={form.password.clone()} oninput={on_text(TextField::Password)} required=true />
                    </div>
                    <div class="form-group">
                        <label for="role">{"Role"}</label>
                        <select id="role" class="form-input" onchange={on_role}>
                            { for [Role::Student, Role::Admin].into_iter().map(|role| html! {
                                <option value={role.as_str()} selected={role == form.role}>{role.label()}</option>
                            }) }
                        </select>
                    </div>
                    <button type="submit" class="btn" disabled={*loading}>
                        { if *loading { "Registering..." } else { "Register" } }
                    </button>
                </form>
                <div class="form-footer">
                    <Link<Route> to={Route::Login}>{"Already have an account? Login"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
