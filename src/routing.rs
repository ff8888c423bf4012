//! Application router configuration for the account and user resources.

use axum::{Router, middleware, routing::get};

use crate::{
    AppState,
    account::{
        create_account_endpoint, delete_account_endpoint, edit_account_endpoint,
        get_account_endpoint, list_accounts_endpoint,
    },
    context::{account_context, user_context},
    endpoints,
    stores::{AccountStore, UserStore},
    user::{create_user_endpoint, edit_user_endpoint, get_user_endpoint, list_users_endpoint},
};

/// Return a router with all the app's routes.
///
/// Requests for a method that is not registered on a path get an empty 405 Method Not Allowed
/// response. The context middleware only runs for registered methods on the single-resource
/// paths.
pub fn build_router<A, U>(state: AppState<A, U>) -> Router
where
    A: AccountStore + Clone + Send + Sync + 'static,
    U: UserStore + Clone + Send + Sync + 'static,
{
    let account_routes = Router::new()
        .route(
            endpoints::ACCOUNTS,
            get(list_accounts_endpoint::<A>).post(create_account_endpoint::<A>),
        )
        .route(
            endpoints::ACCOUNT,
            get(get_account_endpoint::<A>)
                .put(edit_account_endpoint::<A>)
                .delete(delete_account_endpoint::<A>)
                .route_layer(middleware::from_fn(account_context)),
        );

    let user_routes = Router::new()
        .route(
            endpoints::USERS,
            get(list_users_endpoint::<U>).post(create_user_endpoint::<U>),
        )
        .route(
            endpoints::USER,
            get(get_user_endpoint::<U>)
                .put(edit_user_endpoint::<U>)
                .route_layer(middleware::from_fn(user_context)),
        );

    account_routes.merge(user_routes).with_state(state)
}
