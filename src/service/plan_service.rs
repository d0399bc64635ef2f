use thiserror::Error;

use crate::clients::store_client::{StoreError, UserStore};
use crate::models::activity::{Activity, CodecError};

#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

pub struct PlanService;

impl PlanService {
    /// The user's encoded activity lines; a record without a plan reads as
    /// empty.
    pub async fn load_plan(store: &dyn UserStore, user_id: u64) -> Result<Vec<String>, StoreError> {
        let user = store.get_user(user_id).await?;
        Ok(user.plan.unwrap_or_default())
    }

    /// Fetch the whole record, append locally, PUT it back. The store has no
    /// atomic append, so two interleaved writers lose one entry.
    pub async fn append_activity(
        store: &dyn UserStore,
        user_id: u64,
        activity: &Activity,
    ) -> Result<(), PlanError> {
        let entry = activity.encode()?;
        let mut user = store.get_user(user_id).await?;
        user.plan.get_or_insert_with(Vec::new).push(entry);
        store.replace_user(&user).await?;
        Ok(())
    }
}
