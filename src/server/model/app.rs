use sea_orm::DatabaseConnection;

/// State shared by every request handler.
///
/// The database connection is the only persistence handle; handlers pass it explicitly
/// into the services they construct instead of reaching for a global.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool to the durable store
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
