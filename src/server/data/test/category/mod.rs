use crate::server::data::category::CategoryRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_outlet_ids_by_categories;
mod get_by_outlet_id;
