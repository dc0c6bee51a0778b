//! Interactive session: one event loop over typed lines, fetch completions
//! and clock ticks. Fetches run on spawned tasks so input stays responsive.

use std::io::Write;

use anyhow::Context;
use chrono::{DateTime, Local};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
};
use weather_core::{
    Completion, QueryController,
    clock::{CLOCK_PERIOD, Clock},
};

use crate::view;

#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Time,
    City(&'a str),
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":q" | ":quit" => Self::Quit,
            ":time" => Self::Time,
            _ => Self::City(line),
        }
    }
}

/// Runs until `:quit`, or until input ends and no fetch is outstanding.
pub async fn run<R, W>(mut controller: QueryController, input: R, out: &mut W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut clock = Clock::start(CLOCK_PERIOD);
    let mut now = clock.now();

    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();
    let mut lines = input.lines();
    let mut input_open = true;

    writeln!(out, "{}", view::header(&now))?;
    prompt(out)?;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line.context("Failed to read input")? else {
                    input_open = false;
                    if !controller.status().is_loading() {
                        break;
                    }
                    continue;
                };

                match Input::parse(&line) {
                    Input::Quit => break,
                    Input::Time => writeln!(out, "{}", view::clock_lines(&now))?,
                    Input::City(text) => {
                        controller.update_query(text);
                        if let Some(submission) = controller.begin() {
                            render(&controller, &now, out)?;
                            let tx = tx.clone();
                            tokio::spawn(async move {
                                // Receiver only goes away when the session ends.
                                let _ = tx.send(submission.run().await);
                            });
                        }
                    }
                }
                prompt(out)?;
            }
            Some(completion) = rx.recv() => {
                if controller.settle(completion) {
                    writeln!(out)?;
                    render(&controller, &now, out)?;
                    if !input_open {
                        break;
                    }
                    prompt(out)?;
                }
            }
            Some(tick) = clock.tick() => {
                now = tick;
            }
            else => break,
        }
    }

    clock.stop();
    tracing::debug!("interactive session finished");
    Ok(())
}

fn render(
    controller: &QueryController,
    now: &DateTime<Local>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if let Some(text) = view::status(controller.status(), now) {
        writeln!(out, "{text}")?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write) -> anyhow::Result<()> {
    write!(out, "> ")?;
    out.flush().context("Failed to flush output")
}
