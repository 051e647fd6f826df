pub use super::category::Entity as Category;
pub use super::outlet::Entity as Outlet;
