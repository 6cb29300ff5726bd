pub use super::category::Entity as Category;
pub use super::compilation::Entity as Compilation;
pub use super::compilation_event::Entity as CompilationEvent;
pub use super::event::Entity as Event;
pub use super::participation_request::Entity as ParticipationRequest;
pub use super::user::Entity as User;
