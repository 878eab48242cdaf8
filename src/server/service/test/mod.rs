use crate::server::{
    error::{auth::AuthError, AppError},
    service::{auth::AuthService, listing::ListService},
};
use test_utils::{builder::TestBuilder, factory};

mod auth;
