//! HTTP routes for pet endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_pet, get_pet, list_pets, remove_pet, update_pet, PetHandlers};

/// Creates the pet router.
pub fn pet_routes(handlers: PetHandlers) -> Router {
    Router::new()
        .route("/", get(list_pets).post(create_pet))
        .route("/:id", get(get_pet).put(update_pet).delete(remove_pet))
        .with_state(handlers)
}
