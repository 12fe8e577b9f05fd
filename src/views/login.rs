use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_app_context;
use crate::routes::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let ctx = use_app_context();
    let navigator = use_navigator();

    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            loading.set(true);
            error.set(None);

            let auth = ctx.auth.clone();
            let on_session_change = ctx.on_session_change.clone();
            let navigator = navigator.clone();
            let username = (*username).clone();
            let password = (*password).clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match auth.login(&username, &password).await {
                    Ok(session) => {
                        on_session_change.emit(());
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::dashboard_for(session.role));
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
                <h1>{"Login"}</h1>
                <p>{"Access your proposal portal"}</p>
            </div>
            <div class="card card-narrow">
                <form class="form" onsubmit={on_submit}>
                    if let Some(message) = (*error).clone() {
                        <div class="error">{format!("⚠ {}", message)}</div>
                    }
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input
                            id="username"
                            type="text"
                            class="form-input"
                            value={(*username).clone()}
                            oninput={on_username}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            class="form-input"
                            value={(*password).clone()}
                            oninput={on_password}
                            required=true
                        />
                    </div>
                    <button type="submit" class="btn" disabled={*loading}>
                        { if *loading { "Logging in..." } else { "Login" } }
                    </button>
                </form>
                <div class="form-footer">
                    <Link<Route> to={Route::Register}>{"Don't have an account? Register"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
