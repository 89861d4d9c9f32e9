use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
};
use test_utils::{builder::TestBuilder, factory, TEST_JWT_SECRET};

mod auth;
