use crate::server::{
    data::listing::ListRepository,
    model::{classes::ClassList, quran::SurahList, role::RoleList, tag::TagList},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod fetch_all;
