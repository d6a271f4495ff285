use anyhow::Result;
use tracing::info;
use uuid::Uuid;

use crate::models::User;
use crate::repositories::UserRepository;

pub const TICKETMASTER_SYSTEM_EMAIL: &str = "ticketmaster@eventmaster.local";

/// Returns the id of the user that owns imported events, creating it on first use.
pub async fn ensure_system_user(users: &dyn UserRepository) -> Result<Uuid> {
    if let Some(user) = users.find_by_email(TICKETMASTER_SYSTEM_EMAIL).await? {
        return Ok(user.id);
    }

    let user = User::system(TICKETMASTER_SYSTEM_EMAIL);
    users.create(&user).await?;
    info!("Created system user {} ({})", user.id, user.email);

    Ok(user.id)
}
