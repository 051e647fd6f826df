use crate::server::error::AppError;
use test_utils::{builder::TestBuilder, factory, factory::outlet::OutletFactory};

mod seed;
