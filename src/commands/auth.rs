//! Auth Commands
//!
//! Frontend bindings for sign-up, sign-in, sign-out and auth status.

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::models::User;
use super::{call, call_unit, to_args};

#[derive(Serialize)]
struct SignUpArgs<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignInArgs<'a> {
    email: &'a str,
    password: &'a str,
}

pub async fn sign_up(username: &str, email: &str, password: &str) -> Result<User, String> {
    call("sign_up", to_args(&SignUpArgs { username, email, password })?).await
}

pub async fn sign_in(email: &str, password: &str) -> Result<User, String> {
    call("sign_in", to_args(&SignInArgs { email, password })?).await
}

pub async fn sign_out() -> Result<(), String> {
    call_unit("sign_out", JsValue::NULL).await
}

/// Auth status: the signed-in user, if any
pub async fn current_user() -> Result<Option<User>, String> {
    call("current_user", JsValue::NULL).await
}
