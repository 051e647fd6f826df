use crate::server::{data::outlet::OutletRepository, model::outlet::CreateOutletParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::outlet::OutletFactory};

mod create;
mod find_by_address;
mod find_by_categories;
mod get_distinct_addresses;
mod get_geocoded;
mod search_by_name;
