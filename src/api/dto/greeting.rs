use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct GreetingResponse {
    #[schema(example = "Hello, alice! Hope you're doing great!")]
    pub message: String,
}

impl GreetingResponse {
    pub fn hello(name: &str) -> Self {
        Self {
            message: format!("Hello, {name}! Hope you're doing great!"),
        }
    }
}
