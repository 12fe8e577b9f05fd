// ============================================================================
// APP CONTEXT - session + gateways shared with every view
// ============================================================================
// The provider builds the AuthService once and re-reads the session store
// whenever a view reports a login or logout.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::Session;
use crate::services::{ApiClient, AuthService};
use crate::stores::SessionStore;
use crate::utils::BrowserStorage;

#[derive(Clone)]
pub struct AppContext {
    pub auth: Rc<AuthService<ApiClient>>,
    pub api: ApiClient,
    /// Snapshot of the store, refreshed through `on_session_change`
    pub session: Session,
    pub on_session_change: Callback<()>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.auth, &other.auth)
            && self.api == other.api
            && self.session == other.session
            && self.on_session_change == other.on_session_change
    }
}

impl AppContext {
    /// Context for views rendered outside the provider. Reads the store
    /// directly; session changes are not broadcast.
    fn detached() -> Self {
        let api = ApiClient::new();
        let auth = Rc::new(AuthService::new(api.clone(), SessionStore::new(BrowserStorage)));
        Self {
            session: auth.current_session(),
            auth,
            api,
            on_session_change: Callback::noop(),
        }
    }

    pub fn logout(&self) {
        self.auth.logout();
        self.on_session_change.emit(());
    }
}

#[derive(Properties, PartialEq)]
pub struct AppContextProviderProps {
    pub children: Children,
}

#[function_component(AppContextProvider)]
pub fn app_context_provider(props: &AppContextProviderProps) -> Html {
    let api = use_memo((), |_| ApiClient::new());
    let auth = use_memo((), |_| {
        AuthService::new(ApiClient::new(), SessionStore::new(BrowserStorage))
    });
    let session = {
        let auth = auth.clone();
        use_state(move || auth.current_session())
    };

    let on_session_change = {
        let auth = auth.clone();
        let session = session.setter();
        use_callback((), move |_: (), _| {
            let current = auth.current_session();
            log::info!(
                "🔄 [SESSION] {} ({})",
                current.username.as_deref().unwrap_or("anonymous"),
                current.role.map(|r| r.as_str()).unwrap_or("no role")
            );
            session.set(current);
        })
    };

    let context = AppContext {
        auth,
        api: (*api).clone(),
        session: (*session).clone(),
        on_session_change,
    };

    html! {
        <ContextProvider<AppContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AppContext>>
    }
}

#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().unwrap_or_else(AppContext::detached)
}
