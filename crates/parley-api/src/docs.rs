use utoipa::OpenApi;

use crate::routes::{auth, messages};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        messages::send_message,
        messages::list_messages,
    ),
    components(schemas(
        auth::LoginRequest,
        auth::LoginResponse,
        messages::SendMessageRequest,
        messages::MessageResponse,
    )),
    tags(
        (name = "auth", description = "Username presence check"),
        (name = "messages", description = "Chat message history")
    )
)]
pub struct ApiDoc;
