use smartbooking_identity::app_system::setup_tracing;
use smartbooking_identity::{register, User, UserCreate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting identity demo");

    // A signup request body as the HTTP layer would receive it.
    let body = r#"{
        "firstname": "Alice",
        "lastname": "Doe",
        "email": "alice@example.com",
        "password": "correct horse battery staple",
        "walletAddress": "0x52908400098527886E0F7030069857D2E4169EE7"
    }"#;

    let payload: UserCreate = serde_json::from_str(body).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("user_registration");
    let user = async {
        info!("Registering user");
        register(payload)
    }
    .instrument(span)
    .await;

    // Entropy failure: refuse to continue rather than issue a weak id.
    let user = match user {
        Ok(user) => user,
        Err(e) => {
            error!(error = %e, "User registration failed");
            return Err(e.to_string());
        }
    };

    info!(user = %user, "User registered");

    // Manually constructed users get their id the same way.
    let mut guest = User::new("Bob", "Roe", "bob@example.com", "pw", "");
    let guest_id = guest.assign_id().map_err(|e| e.to_string())?.to_string();
    info!(user_id = %guest_id, user = %guest, "Guest id assigned");

    let record = user.to_json().map_err(|e| e.to_string())?;
    info!(bytes = record.len(), "Serialized user record");

    info!("Identity demo completed successfully");
    Ok(())
}
