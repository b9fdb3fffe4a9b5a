mod contact;
mod helpers;
mod login_admin;
mod login_parent;
mod register;
mod static_assets;
mod verify_session;
