use std::sync::Arc;

use crate::domain::user::UserRepository;

pub struct ProfileCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl ProfileCommandService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}
