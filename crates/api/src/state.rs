/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally. Procedure
/// handlers receive `&state.pool` explicitly and hold nothing else.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: grocery_db::DbPool,
}
