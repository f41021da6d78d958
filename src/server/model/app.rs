use sea_orm::DatabaseConnection;

/// State shared with every HTTP handler.
///
/// The connection is pooled internally by SeaORM, cloning the state clones a handle to the
/// same pool.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
