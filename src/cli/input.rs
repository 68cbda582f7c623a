//! Keyboard input for the terminal host.
//!
//! Each line on stdin is one button press:
//!
//! | input                      | command          |
//! |----------------------------|------------------|
//! | empty, `space`, `p`        | primary button   |
//! | `start`, `s`               | start            |
//! | `pause`, `resume`, `toggle`| pause / resume   |
//! | `skip`, `k`                | skip             |
//! | `d [min]`, `duration [min]`| select duration  |
//! | `t [name]`, `task [name]`  | set / clear task |
//! | `q`, `quit`, `exit`        | quit             |
//!
//! A duration that is missing or not a number selects the default.

use std::io::BufRead;
use std::str::FromStr;
use std::thread::JoinHandle;

use tokio::sync::mpsc;

use super::display::Display;
use super::error::CommandParseError;
use crate::controller::BarCommand;

/// Parses one line of user input.
pub fn parse_command(line: &str) -> Result<BarCommand, CommandParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "" | "space" | "p" => Ok(BarCommand::Primary),
        "start" | "s" => Ok(BarCommand::Start),
        "pause" | "resume" | "toggle" => Ok(BarCommand::PauseOrResume),
        "skip" | "k" => Ok(BarCommand::Skip),
        "q" | "quit" | "exit" => Ok(BarCommand::Quit),
        "d" | "duration" => match rest.parse::<u32>() {
            Ok(minutes) => Ok(BarCommand::SelectDuration(minutes)),
            Err(_) => {
                let tag = (!rest.is_empty()).then(|| rest.to_string());
                Ok(BarCommand::SelectDurationTag(tag))
            }
        },
        "t" | "task" => {
            let task = (!rest.is_empty()).then(|| rest.to_string());
            Ok(BarCommand::SetTask(task))
        }
        _ => Err(CommandParseError::UnknownCommand(word.to_string())),
    }
}

impl FromStr for BarCommand {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_command(s)
    }
}

/// Reads commands from `input` on a dedicated thread.
///
/// Blocking reads stay off the runtime so that quitting never waits for the
/// next line. End of input sends `Quit`.
pub fn spawn_input_reader<R>(input: R, commands: mpsc::UnboundedSender<BarCommand>) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    std::thread::spawn(move || {
        for line in input.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read input");
                    break;
                }
            };

            match parse_command(&line) {
                Ok(command) => {
                    if let BarCommand::SelectDurationTag(tag) = &command {
                        Display::show_hint(&format!(
                            "時間を解釈できません ({}): 既定の時間を使います",
                            tag.as_deref().unwrap_or("未指定")
                        ));
                    }
                    let quit = command == BarCommand::Quit;
                    if commands.send(command).is_err() || quit {
                        return;
                    }
                }
                Err(e) => {
                    tracing::debug!(input = %line, "rejected input");
                    Display::show_error(&e.to_string());
                    Display::show_hint(e.suggestion());
                }
            }
        }

        tracing::debug!("input closed");
        let _ = commands.send(BarCommand::Quit);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    mod parse_tests {
        use super::*;

        #[test]
        fn test_empty_line_is_primary() {
            assert_eq!(parse_command(""), Ok(BarCommand::Primary));
            assert_eq!(parse_command("   "), Ok(BarCommand::Primary));
            assert_eq!(parse_command("space"), Ok(BarCommand::Primary));
        }

        #[test]
        fn test_simple_commands() {
            assert_eq!(parse_command("start"), Ok(BarCommand::Start));
            assert_eq!(parse_command("pause"), Ok(BarCommand::PauseOrResume));
            assert_eq!(parse_command("Resume"), Ok(BarCommand::PauseOrResume));
            assert_eq!(parse_command("skip"), Ok(BarCommand::Skip));
            assert_eq!(parse_command("k"), Ok(BarCommand::Skip));
            assert_eq!(parse_command("QUIT"), Ok(BarCommand::Quit));
        }

        #[test]
        fn test_duration() {
            assert_eq!(parse_command("d 5"), Ok(BarCommand::SelectDuration(5)));
            assert_eq!(
                parse_command("duration   15"),
                Ok(BarCommand::SelectDuration(15))
            );
        }

        #[test]
        fn test_unparseable_duration_becomes_tag() {
            assert_eq!(parse_command("d"), Ok(BarCommand::SelectDurationTag(None)));
            assert_eq!(
                parse_command("d five"),
                Ok(BarCommand::SelectDurationTag(Some("five".to_string())))
            );
            assert_eq!(
                parse_command("duration -3"),
                Ok(BarCommand::SelectDurationTag(Some("-3".to_string())))
            );
            // Zero is a number; the controller maps it to the default.
            assert_eq!(parse_command("d 0"), Ok(BarCommand::SelectDuration(0)));
        }

        #[test]
        fn test_task() {
            assert_eq!(
                parse_command("t Write the report"),
                Ok(BarCommand::SetTask(Some("Write the report".to_string())))
            );
            assert_eq!(parse_command("task"), Ok(BarCommand::SetTask(None)));
        }

        #[test]
        fn test_unknown() {
            assert_eq!(
                parse_command("jump"),
                Err(CommandParseError::UnknownCommand("jump".to_string()))
            );
        }

        #[test]
        fn test_from_str() {
            let command: BarCommand = "skip".parse().unwrap();
            assert_eq!(command, BarCommand::Skip);
            assert!("nope".parse::<BarCommand>().is_err());
        }
    }

    mod reader_tests {
        use super::*;

        fn drain(mut rx: mpsc::UnboundedReceiver<BarCommand>) -> Vec<BarCommand> {
            let mut commands = Vec::new();
            while let Ok(command) = rx.try_recv() {
                commands.push(command);
            }
            commands
        }

        #[test]
        fn test_reader_forwards_commands_and_quits_at_eof() {
            let (tx, rx) = mpsc::unbounded_channel();
            let input = Cursor::new("d 5\n\nbogus\nskip\n");

            spawn_input_reader(input, tx).join().unwrap();

            assert_eq!(
                drain(rx),
                vec![
                    BarCommand::SelectDuration(5),
                    BarCommand::Primary,
                    BarCommand::Skip,
                    BarCommand::Quit,
                ]
            );
        }

        #[test]
        fn test_reader_forwards_unparseable_duration() {
            let (tx, rx) = mpsc::unbounded_channel();
            let input = Cursor::new("d 5\nd five\n\n");

            spawn_input_reader(input, tx).join().unwrap();

            assert_eq!(
                drain(rx),
                vec![
                    BarCommand::SelectDuration(5),
                    BarCommand::SelectDurationTag(Some("five".to_string())),
                    BarCommand::Primary,
                    BarCommand::Quit,
                ]
            );
        }

        #[test]
        fn test_reader_stops_after_quit() {
            let (tx, rx) = mpsc::unbounded_channel();
            let input = Cursor::new("start\nq\nskip\n");

            spawn_input_reader(input, tx).join().unwrap();

            assert_eq!(drain(rx), vec![BarCommand::Start, BarCommand::Quit]);
        }

        #[test]
        fn test_reader_stops_when_receiver_dropped() {
            let (tx, rx) = mpsc::unbounded_channel();
            drop(rx);
            let input = Cursor::new("start\nskip\n");

            spawn_input_reader(input, tx).join().unwrap();
        }
    }
}
