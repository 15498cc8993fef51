pub mod list_activities;
pub mod signup;
pub mod unregister;
