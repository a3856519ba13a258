pub mod foo;
pub mod health;
