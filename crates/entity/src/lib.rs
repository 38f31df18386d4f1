pub mod account;
pub mod citizen;
pub mod citizen_mla;
pub mod citizen_organization;
pub mod issue;
pub mod mla;
pub mod organization;

pub use account::Entity as Account;
pub use citizen::Entity as Citizen;
pub use citizen_mla::Entity as CitizenMla;
pub use citizen_organization::Entity as CitizenOrganization;
pub use issue::Entity as Issue;
pub use mla::Entity as Mla;
pub use organization::Entity as Organization;
