pub mod guestbook;
pub mod health;
