pub use bloglist_models::users::{NewUser, NewUserInput, RegisterUserDto, User};
