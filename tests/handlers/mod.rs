mod chat;
mod health;
mod personas;
