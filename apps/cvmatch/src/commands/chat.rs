use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::chatbot::{ChatMessage, ChatSession};
use crate::errors::AppError;
use crate::state::AppState;
use crate::view;

#[derive(Debug, Args)]
pub struct ChatArgs {
    /// Ask once and exit
    pub message: Option<String>,
}

pub async fn handle_chat(state: &AppState, args: ChatArgs, json: bool) -> Result<(), AppError> {
    let mut session = ChatSession::new();

    if let Some(message) = args.message {
        if let Some(reply) = session.send(state.api.as_ref(), &message).await {
            if json {
                return crate::commands::print_json(reply);
            }
            println!("{}", reply.text);
        }
        return Ok(());
    }

    if let Some(greeting) = session.messages().first() {
        print_message(greeting, json)?;
    }
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }
        if let Some(reply) = session.send(state.api.as_ref(), &line).await {
            print_message(reply, json)?;
        }
    }
    Ok(())
}

fn print_message(message: &ChatMessage, json: bool) -> Result<(), AppError> {
    if json {
        crate::commands::print_json(message)
    } else {
        println!("{}", view::chat_message(message));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::testing::serve;
    use crate::config::Config;
    use axum::{routing::get, Router};

    #[tokio::test]
    async fn test_single_message_with_json_output() {
        let router = Router::new().route("/api/candidates/chatbot", get(|| async { "Tailor it." }));
        let base = serve(router).await;
        let config = Config::from_lookup(|key| (key == "CVMATCH_API_URL").then(|| base.clone())).unwrap();

        let args = ChatArgs {
            message: Some("How do I improve my CV?".to_string()),
        };
        handle_chat(&AppState::new(config), args, true).await.unwrap();
    }
}
