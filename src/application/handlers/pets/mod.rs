//! Pet listing command and query handlers.

mod create_pet;
mod list_pets;
mod update_pet;

pub use create_pet::{CreatePetCommand, CreatePetHandler};
pub use list_pets::{ListPetsHandler, ListPetsQuery};
pub use update_pet::{UpdatePetCommand, UpdatePetHandler};
