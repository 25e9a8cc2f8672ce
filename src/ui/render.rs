// src/ui/render.rs
use std::io::Write;

use owo_colors::OwoColorize;

use crate::services::conversation::{Message, MessageRole};
use crate::services::notifications::{Level, Notification, PageEvent};

pub const APP_NAME: &str = "PDF Chat";
pub const PLACEHOLDER: &str = "Please upload a PDF to start chatting.";

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

pub fn print_banner(
    w: &mut dyn Write,
    selected_file: Option<&str>,
    color: ColorMode,
) -> std::io::Result<()> {
    let file = selected_file.unwrap_or("no file selected");
    if color.enabled() {
        writeln!(w, "{}  {}", APP_NAME.bold().magenta(), file.dimmed())?;
    } else {
        writeln!(w, "{}  {}", APP_NAME, file)?;
    }
    writeln!(w, "Type /help for commands.")?;
    Ok(())
}

pub fn print_placeholder(w: &mut dyn Write, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", PLACEHOLDER.dimmed())
    } else {
        writeln!(w, "{}", PLACEHOLDER)
    }
}

pub fn print_help(w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "  /upload <path>  upload a PDF to chat about")?;
    writeln!(w, "  /history        show the conversation so far")?;
    writeln!(w, "  /help           show this help")?;
    writeln!(w, "  /quit           leave")?;
    writeln!(w, "Anything else is sent as a question about the uploaded PDF.")?;
    Ok(())
}

pub fn print_message(w: &mut dyn Write, message: &Message, color: ColorMode) -> std::io::Result<()> {
    match (message.role, color.enabled()) {
        (MessageRole::User, true) => writeln!(w, "{} {}", "you ›".cyan().bold(), message.content),
        (MessageRole::User, false) => writeln!(w, "you > {}", message.content),
        (MessageRole::Bot, true) => writeln!(w, "{} {}", "bot ›".magenta().bold(), message.content),
        (MessageRole::Bot, false) => writeln!(w, "bot > {}", message.content),
    }
}

pub fn print_notification(
    w: &mut dyn Write,
    notification: &Notification,
    color: ColorMode,
) -> std::io::Result<()> {
    let text = &notification.text;
    if !color.enabled() {
        let tag = match notification.level {
            Level::Loading => "[..]",
            Level::Success => "[ok]",
            Level::Error => "[error]",
        };
        return writeln!(w, "{} {}", tag, text);
    }

    match notification.level {
        Level::Loading => writeln!(w, "{} {}", "[..]".yellow(), text.dimmed()),
        Level::Success => writeln!(w, "{} {}", "[ok]".green().bold(), text.green()),
        Level::Error => writeln!(w, "{} {}", "[error]".red().bold(), text.red()),
    }
}

pub fn print_event(w: &mut dyn Write, event: &PageEvent, color: ColorMode) -> std::io::Result<()> {
    match event {
        PageEvent::Message(message) => print_message(w, message, color),
        PageEvent::Notification(notification) => print_notification(w, notification, color),
        PageEvent::DocumentReady { file_name, .. } => print_banner(w, Some(file_name.as_str()), color),
    }
}

pub fn print_transcript(
    w: &mut dyn Write,
    messages: &[Message],
    color: ColorMode,
) -> std::io::Result<()> {
    if messages.is_empty() {
        return writeln!(w, "(no messages yet)");
    }
    for message in messages {
        print_message(w, message, color)?;
    }
    Ok(())
}

pub fn prompt(selected_file: Option<&str>) -> String {
    match selected_file {
        Some(name) => format!("[{}] > ", name),
        None => "> ".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::DocumentId;

    const PLAIN: ColorMode = ColorMode(false);

    fn msg(role: MessageRole, content: &str) -> Message {
        Message {
            role,
            content: content.to_string(),
        }
    }

    fn render(f: impl FnOnce(&mut dyn Write) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn messages_show_their_side() {
        let out = render(|w| {
            print_transcript(
                w,
                &[msg(MessageRole::User, "hi"), msg(MessageRole::Bot, "hello")],
                PLAIN,
            )
        });
        assert_eq!(out, "you > hi\nbot > hello\n");
    }

    #[test]
    fn empty_transcript() {
        let out = render(|w| print_transcript(w, &[], PLAIN));
        assert_eq!(out, "(no messages yet)\n");
    }

    #[test]
    fn notifications_are_tagged_by_level() {
        let n = Notification {
            id: 3,
            level: Level::Error,
            text: "Please upload a valid PDF file.".to_string(),
        };
        let out = render(|w| print_notification(w, &n, PLAIN));
        assert_eq!(out, "[error] Please upload a valid PDF file.\n");
    }

    #[test]
    fn banner_names_the_file() {
        let out = render(|w| print_banner(w, Some("report.pdf"), PLAIN));
        assert!(out.starts_with("PDF Chat  report.pdf\n"));
    }

    #[test]
    fn document_ready_reprints_banner() {
        let event = PageEvent::DocumentReady {
            id: DocumentId(4),
            file_name: "report.pdf".to_string(),
        };
        let out = render(|w| print_event(w, &event, PLAIN));
        assert!(out.starts_with("PDF Chat  report.pdf\n"));
    }

    #[test]
    fn prompt_shows_selected_file() {
        assert_eq!(prompt(None), "> ");
        assert_eq!(prompt(Some("a.pdf")), "[a.pdf] > ");
    }
}
