use std::sync::Arc;

use crate::db::Store;
use crate::error::AppError;
use crate::models::user::{User, UserRecord};

const COLLECTION: &str = "user";

pub struct UserService {
    store: Arc<Store>,
}

impl UserService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn create(&self, user: User) -> Result<String, AppError> {
        let record = UserRecord::from_payload(user);
        self.store.create_document(COLLECTION, &record).await
    }
}
