// ============================================================================
// APP - router + shared context
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ProtectedRoute;
use crate::hooks::AppContextProvider;
use crate::routes::Route;
use crate::views::{
    AdminDashboard, Home, Login, NotFound, Register, StudentDashboard, SubmitProposal, TrashBin,
    Unauthorized, ViewProposals,
};

fn switch(route: Route) -> Html {
    let page = match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::StudentDashboard => html! { <StudentDashboard /> },
        Route::AdminDashboard => html! { <AdminDashboard /> },
        Route::Submit => html! { <SubmitProposal /> },
        Route::ViewProposals => html! { <ViewProposals /> },
        Route::Trash => html! { <TrashBin /> },
        Route::Unauthorized => html! { <Unauthorized /> },
        Route::NotFound => html! { <NotFound /> },
    };

    if !route.is_protected() {
        return page;
    }
    html! {
        <ProtectedRoute required_role={route.required_role()}>{page}</ProtectedRoute>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppContextProvider>
                <div class="App">
                    <Switch<Route> render={switch} />
                </div>
            </AppContextProvider>
        </BrowserRouter>
    }
}
