pub mod check_email;
pub mod check_nickname;
pub mod login;
pub mod me;
pub mod signup;
pub mod verify_email;
