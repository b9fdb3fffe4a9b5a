pub mod credentials;
pub mod email;
pub mod identity;
pub mod password;
pub mod redirect;
pub mod role;
pub mod signed_in;
pub mod user_id;
pub mod user_record;
