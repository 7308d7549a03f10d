/*!
Command handlers for the CLI

This module provides the handlers invoked by the CLI entrypoint:

- `chat`      : Interactive chat session
- `ask`       : One question, one answer
- `models`    : Model catalog listing
- `sessions`  : Conversation list grouped by recency

Handlers stay small and delegate to the `chat`, `providers` and
`sessions` library modules.
*/

use crate::chat::ChatController;

pub mod ask;
pub mod chat;
pub mod models;
pub mod sessions;

// Slash commands understood inside the chat loop
pub mod special_commands;

/// Drain pending notices from `chat` and print them to stderr
pub fn print_notices(chat: &mut ChatController) {
    for notice in chat.take_notices() {
        eprintln!("{}", notice.colored());
    }
}
