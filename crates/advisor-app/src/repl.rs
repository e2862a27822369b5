//! Interactive loops for `advisor chat` and `advisor console`.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use advisor_chat::{ChatAssistant, ChatError, ChatMessage, Console, ConsoleOutcome};

const QUIT: &str = "/quit";

/// Render an assistant message the way the web widget lays it out: the
/// answer, then the call-to-action on its own line.
pub fn render_message(message: &ChatMessage) -> String {
    match &message.action {
        Some(action) => format!("{}\n  [{}] -> {}", message.text, action.label, action.link),
        None => message.text.clone(),
    }
}

/// Resolve a chip shortcut: a line that is exactly `1`..`n` selects that chip.
pub fn resolve_input<'a>(assistant: &'a ChatAssistant, line: &'a str) -> &'a str {
    line.trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| assistant.suggestion(i))
        .unwrap_or(line)
}

async fn prompt(stdout: &mut tokio::io::Stdout, text: &str) -> std::io::Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await
}

/// Run the chat REPL until EOF or `/quit`.
pub async fn run_chat(assistant: &ChatAssistant) -> std::io::Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", assistant.classifier().knowledge().fallback().answer);
    if !assistant.suggestions().is_empty() {
        println!();
        for (i, chip) in assistant.suggestions().iter().enumerate() {
            println!("  {}. {}", i + 1, chip);
        }
    }
    println!("\nType {} to leave.", QUIT);

    loop {
        prompt(&mut stdout, "\nyou> ").await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim() == QUIT {
            break;
        }

        let input = resolve_input(assistant, &line);
        match assistant.handle_message(input).await {
            Ok(exchange) => {
                tracing::debug!(
                    category = %exchange.reply.category_id,
                    fallback = exchange.reply.fallback,
                    "Reply sent"
                );
                println!("advisor> {}", render_message(&exchange.reply.message));
            }
            Err(ChatError::EmptyMessage) => continue,
            Err(e) => println!("advisor> {}", e),
        }
    }

    Ok(())
}

/// Run the operator console until EOF or `exit`.
pub async fn run_console() -> std::io::Result<()> {
    let console = Console;
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt(&mut stdout, "$ ").await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match console.execute(&line) {
            ConsoleOutcome::Ignored => {}
            ConsoleOutcome::Exit => break,
            outcome @ ConsoleOutcome::Output { .. } => println!("{}", outcome),
        }
    }

    Ok(())
}
